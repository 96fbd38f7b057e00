//! 表单面板消息处理

use roster_core::Command;

use super::run_command;
use crate::message::FormMessage;
use crate::model::App;

/// 处理表单面板消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => app.form.next_field(),
        FormMessage::PrevField => app.form.prev_field(),
        FormMessage::Input(ch) => {
            let field = app.form.focused;
            app.controller.form_mut().value_mut(field).push(ch);
        }
        FormMessage::Backspace => {
            let field = app.form.focused;
            app.controller.form_mut().value_mut(field).pop();
        }
        FormMessage::Submit => run_command(app, Command::Submit, false),
    }
}
