//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, RecordsMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 可作为文本输入的按键（允许 Shift 以输入大写字母和符号）
fn text_input(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 过滤栏打开时，按键全部交给过滤栏
    if app.records.is_filtering() {
        return handle_filter_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Records(RecordsMessage::Edit);
    }

    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Records(RecordsMessage::Delete);
    }

    // 根据焦点位置处理按键
    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if let Some(ch) = text_input(&key) {
        return AppMessage::Form(FormMessage::Input(ch));
    }

    match key.code {
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),
        _ => AppMessage::Noop,
    }
}

/// 处理列表面板的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::LIST_EDIT.matches(&key) {
        return AppMessage::Records(RecordsMessage::Edit);
    }
    if DefaultKeymap::LIST_DELETE.matches(&key) {
        return AppMessage::Records(RecordsMessage::Delete);
    }
    if DefaultKeymap::LIST_FILTER.matches(&key) {
        return AppMessage::Records(RecordsMessage::StartFilter);
    }
    // 部分终端上 '?' 带 Shift 修饰
    if key.code == KeyCode::Char('?') && text_input(&key).is_some() {
        return AppMessage::ShowHelp;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Records(RecordsMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Records(RecordsMessage::SelectNext),
        KeyCode::Home => AppMessage::Records(RecordsMessage::SelectFirst),
        KeyCode::End => AppMessage::Records(RecordsMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理过滤栏的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if let Some(ch) = text_input(&key) {
        return AppMessage::Records(RecordsMessage::FilterInput(ch));
    }

    match key.code {
        KeyCode::Enter => AppMessage::Records(RecordsMessage::ApplyFilter),
        KeyCode::Esc => AppMessage::Records(RecordsMessage::ClearFilter),
        KeyCode::Backspace => AppMessage::Records(RecordsMessage::FilterBackspace),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if key.code == KeyCode::Esc || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        // 帮助弹窗只响应关闭按键
        Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 按当前焦点作答
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}
