//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单子消息处理
//!         mod records;            // 列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理（form、records、modal）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 命令执行（run_command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     所有对记录的修改都通过 `FormController::dispatch` 完成：
//!         - 表单 Enter          → Command::Submit
//!         - 列表 e / Alt+e      → 选中项的 Command::Edit(id)
//!         - 确认删除弹窗作答    → 选中项的 Command::Delete(id)
//!
//!     删除确认已经由弹窗完成，所以以 `PresetAnswer(answer)` 作为
//!     确认回调传入；其它命令不会询问确认回调。
//!
//!     校验失败（字段为空）不提示用户，只记录 debug 日志。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod modal;
mod records;

use roster_core::{Command, Outcome, PresetAnswer};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Records(records_msg) => {
            records::update(app, records_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 通过控制器执行命令
///
/// `answer` 是删除确认的答案，其它命令忽略它。
fn run_command(app: &mut App, command: Command, answer: bool) {
    match app.controller.dispatch(command, &mut PresetAnswer(answer)) {
        Ok(outcome) => apply_outcome(app, outcome),
        Err(e) if e.is_expected() => {
            log::debug!("Command {command:?} rejected: {e}");
        }
        Err(e) => {
            log::error!("Command {command:?} failed: {e}");
        }
    }
}

/// 根据命令结果更新界面状态
fn apply_outcome(app: &mut App, outcome: Outcome) {
    match outcome {
        Outcome::Created(_) => {
            app.form.reset();
            app.set_status(t().status.created);
        }
        Outcome::Updated(_) => {
            app.form.reset();
            app.set_status(t().status.updated);
        }
        Outcome::EditStarted(_) => {
            app.form.reset();
            app.focus = FocusPanel::Form;
            app.clear_status();
        }
        Outcome::Deleted(_) => {
            // 删除的是正在编辑的记录时，控制器已回到新建模式
            if !app.controller.mode().is_editing() {
                app.form.reset();
            }
            app.set_status(t().status.deleted);
        }
        Outcome::DeleteCancelled(_) => {
            app.clear_status();
        }
    }

    if outcome.mutated_store() {
        let len = app.visible_records().len();
        app.records.clamp(len);
    }
}
