//! 远程操作结果处理

use contact_form_core::{Completion, Notice};

use crate::i18n::t;
use crate::model::App;

pub fn update(app: &mut App, completion: Completion) {
    let refreshed = matches!(completion, Completion::Listed(Ok(_)));
    let saved = matches!(completion, Completion::Saved { result: Ok(_), .. });
    match &completion {
        Completion::Listed(_) => app.list.loading = false,
        Completion::Deleted { .. } => app.list.deleting = None,
        Completion::Saved { .. } => {}
    }

    let transition = app.session.complete(completion);

    let len = app.session.records().len();
    if refreshed {
        app.list.mark_refreshed(len);
    } else {
        app.list.clamp(len);
    }
    if saved {
        app.form.reset();
    }

    if let Some(notice) = transition.notice {
        show_notice(app, notice);
    }
    if let Some(command) = transition.follow_up {
        app.dispatch(command);
    }
}

/// 结果提示：成功/失败弹窗，刷新失败只写状态栏
fn show_notice(app: &mut App, notice: Notice) {
    let texts = t();
    let alerts = &texts.modal.alerts;

    if notice.is_alert() {
        app.clear_status();
    }

    match notice {
        Notice::Saved { message, updated } => {
            let fallback = if updated { alerts.updated } else { alerts.submitted };
            app.modal
                .show_info(texts.common.success, non_empty_or(&message, fallback));
        }
        Notice::Deleted { message } => {
            app.modal
                .show_info(texts.common.success, non_empty_or(&message, alerts.deleted));
        }
        Notice::SaveFailed(_) => {
            app.modal.show_error(texts.common.error, alerts.submit_failed);
        }
        Notice::DeleteFailed(_) => {
            app.modal.show_error(texts.common.error, alerts.delete_failed);
        }
        Notice::RefreshFailed(_) => {
            app.set_status(texts.status_bar.refresh_failed);
        }
    }
}

fn non_empty_or<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
