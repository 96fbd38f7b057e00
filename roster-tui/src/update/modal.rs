//! 弹窗消息处理

use super::run_command;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Help => handle_help(app, msg),
    }
}

/// 处理确认删除弹窗
///
/// 无论确认还是取消，都把答案交给控制器：取消同样是一次作答。
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        command,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            let answer = *focus == 1;
            app.modal.close();
            run_command(app, command, answer);
        }

        ModalMessage::Close => {
            app.modal.close();
            run_command(app, command, false);
        }
    }
}

/// 处理帮助弹窗
fn handle_help(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleDeleteFocus => {}
    }
}
