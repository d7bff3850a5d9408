//! 列表视图更新

use contact_form_core::Command;

use crate::i18n::t;
use crate::message::ListMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ListMessage) {
    let len = app.session.records().len();

    match msg {
        ListMessage::SelectPrevious => app.list.select_previous(),
        ListMessage::SelectNext => app.list.select_next(len),
        ListMessage::SelectFirst => app.list.select_first(),
        ListMessage::SelectLast => app.list.select_last(len),

        ListMessage::Edit => {
            let Some(id) = selected_id(app) else {
                return;
            };
            match app.session.edit(&id) {
                Ok(()) => {
                    app.form.reset();
                    app.clear_status();
                }
                Err(e) => {
                    log::warn!("Cannot edit form {id}: {e}");
                    let texts = t();
                    app.modal
                        .show_error(texts.common.error, texts.modal.alerts.edit_failed);
                }
            }
        }

        ListMessage::Delete => {
            let Some(record) = app.session.records().get(app.list.selected) else {
                return;
            };
            let Some(id) = record.id.clone() else {
                return;
            };
            let name = if record.name.trim().is_empty() {
                t().modal.confirm_delete.unnamed.to_string()
            } else {
                record.name.clone()
            };
            app.modal.show_confirm_delete(&id, &name);
        }

        ListMessage::Refresh => {
            app.set_status(t().status_bar.loading);
            app.dispatch(Command::Refresh);
        }
    }
}

fn selected_id(app: &App) -> Option<String> {
    app.session
        .records()
        .get(app.list.selected)
        .and_then(|record| record.id.clone())
}
