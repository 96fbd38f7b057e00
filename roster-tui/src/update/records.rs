//! 列表面板消息处理

use roster_core::ActionKind;

use super::run_command;
use crate::i18n::t;
use crate::message::RecordsMessage;
use crate::model::App;

/// 处理列表面板消息
pub fn update(app: &mut App, msg: RecordsMessage) {
    match msg {
        // ========== 列表导航 ==========
        RecordsMessage::SelectPrevious => app.records.select_previous(),
        RecordsMessage::SelectNext => {
            let len = app.visible_records().len();
            app.records.select_next(len);
        }
        RecordsMessage::SelectFirst => app.records.select_first(),
        RecordsMessage::SelectLast => {
            let len = app.visible_records().len();
            app.records.select_last(len);
        }

        // ========== 条目操作 ==========
        RecordsMessage::Edit => {
            if let Some(entry) = app.selected_entry() {
                run_command(app, entry.command(ActionKind::Edit), false);
            }
        }
        RecordsMessage::Delete => {
            let Some(entry) = app.selected_entry() else {
                return;
            };
            let command = entry.command(ActionKind::Delete);
            if app.confirm_delete {
                app.modal.show_confirm_delete(command, &entry.record.name);
            } else {
                run_command(app, command, true);
            }
        }

        // ========== 过滤栏 ==========
        RecordsMessage::StartFilter => app.records.start_filter(),
        RecordsMessage::FilterInput(ch) => {
            if let Some(input) = app.records.filter_input.as_mut() {
                input.push(ch);
            }
        }
        RecordsMessage::FilterBackspace => {
            if let Some(input) = app.records.filter_input.as_mut() {
                input.pop();
            }
        }
        RecordsMessage::ApplyFilter => {
            app.records.apply_filter();
            log::debug!("Filter applied: {:?}", app.records.query.as_str());
        }
        RecordsMessage::ClearFilter => {
            let had_filter = !app.records.query.is_blank();
            app.records.clear_filter();
            if had_filter {
                app.set_status(t().status.filter_cleared);
            }
        }
    }
}
