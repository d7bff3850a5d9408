//! 弹窗更新

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Alert { .. } | Modal::Help) => handle_simple_modal(app, msg),
        None => {}
    }
}

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref item_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::SwitchFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let command = app.session.request_delete(item_id);
                app.modal.close();
                app.set_status(t().status_bar.deleting);
                app.dispatch(command);
            } else {
                app.modal.close();
            }
        }
    }
}

/// 处理简单弹窗（提示、帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::SwitchFocus => {}
    }
}
