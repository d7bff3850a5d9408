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
//!         mod form;           // 表单子消息处理
//!         mod list;           // 列表子消息处理
//!         mod modal;          // 弹窗子消息处理
//!         mod backend;        // 远程操作结果处理
//!
//!
//!     Update 层本身不做任何 I/O。
//!     需要访问远程存储时，core 的 `Session` 返回 `Command`，
//!     Update 层通过 `app.dispatch()` 把它放进 outbox，
//!     主循环（app.rs）再把 outbox 交给 Backend 执行。
//!
//!         用户按 Ctrl+T（在表单视图）
//!             ↓
//!         AppMessage::ToggleView
//!             ↓
//!         session.toggle_view() 返回 Some(Command::Refresh)
//!             ↓
//!         app.dispatch(Command::Refresh)
//!             ↓
//!         主循环 → Backend → Completion::Listed(..)
//!             ↓
//!         AppMessage::Backend(..) → backend::update()
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod form;
mod list;
mod modal;

use contact_form_core::ViewMode;

use crate::message::AppMessage;
use crate::model::{App, Modal};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleView => {
            // 如果有弹窗打开，不切换视图
            if app.modal.is_open() {
                return;
            }
            if let Some(command) = app.session.toggle_view() {
                app.dispatch(command);
            }
            if app.session.mode() == ViewMode::Form {
                app.clear_status();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(completion) => {
            backend::update(app, completion);
        }

        AppMessage::ShowHelp => {
            app.modal.show(Modal::Help);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use contact_form_core::types::{Field, FormRecord, StoreReply};
    use contact_form_core::error::TransportError;
    use contact_form_core::{Command, Completion, CoreError};

    use super::*;
    use crate::message::{FormMessage, ListMessage, ModalMessage};
    use crate::model::FormFocus;

    fn record(id: &str, name: &str) -> FormRecord {
        FormRecord {
            id: Some(id.to_string()),
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Main St".to_string(),
            state: "CA".to_string(),
            city: "Springfield".to_string(),
            age: "36".to_string(),
            gender: "female".to_string(),
            mobile_number: "1234567890".to_string(),
            message: "Hello".to_string(),
            terms_accepted: true,
            ..FormRecord::default()
        }
    }

    fn network_error(detail: &str) -> CoreError {
        TransportError::Network {
            detail: detail.to_string(),
        }
        .into()
    }

    fn app_with_list(records: Vec<FormRecord>) -> App {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleView);
        app.take_commands();
        update(&mut app, AppMessage::Backend(Completion::Listed(Ok(records))));
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c)));
        }
    }

    #[test]
    fn toggle_queues_refresh_only_when_entering_list() {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleView);
        assert_eq!(app.session.mode(), ViewMode::List);
        assert_eq!(app.take_commands(), vec![Command::Refresh]);
        assert!(app.list.loading);

        update(&mut app, AppMessage::ToggleView);
        assert_eq!(app.session.mode(), ViewMode::Form);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn typing_edits_focused_text_field() {
        let mut app = App::new();
        type_text(&mut app, "Adx");
        update(&mut app, AppMessage::Form(FormMessage::Backspace));
        type_text(&mut app, "a");
        assert_eq!(app.session.draft().record.name, "Ada");

        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "a b");
        assert_eq!(app.session.draft().record.email, "a b");
    }

    #[test]
    fn choice_fields_cycle_and_toggle() {
        let mut app = App::new();

        app.form.focus_field(Field::Gender);
        update(&mut app, AppMessage::Form(FormMessage::OptionNext));
        assert_eq!(app.session.draft().record.gender, "male");
        update(&mut app, AppMessage::Form(FormMessage::OptionNext));
        assert_eq!(app.session.draft().record.gender, "female");

        app.form.focus_field(Field::TermsAccepted);
        update(&mut app, AppMessage::Form(FormMessage::Toggle));
        assert!(app.session.draft().record.terms_accepted);

        app.form.focus_field(Field::SelectedHobbies);
        update(&mut app, AppMessage::Form(FormMessage::OptionNext));
        update(&mut app, AppMessage::Form(FormMessage::Toggle));
        assert_eq!(app.session.draft().record.selected_hobbies.len(), 1);
        update(&mut app, AppMessage::Form(FormMessage::Toggle));
        assert!(app.session.draft().record.selected_hobbies.is_empty());

        app.form.focus_field(Field::SelectedOption);
        update(&mut app, AppMessage::Form(FormMessage::OptionPrev));
        assert!(app.session.draft().record.selected_option.is_some());
    }

    #[test]
    fn contact_method_cycles_through_unset() {
        use contact_form_core::types::ContactMethod;

        let mut app = App::new();
        app.form.focus_field(Field::SelectedOption);

        let mut seen = Vec::new();
        for _ in 0..3 {
            update(&mut app, AppMessage::Form(FormMessage::OptionNext));
            seen.push(app.session.draft().record.selected_option);
        }
        assert_eq!(
            seen,
            vec![Some(ContactMethod::Email), Some(ContactMethod::Phone), None]
        );
    }

    #[test]
    fn invalid_submit_focuses_first_error() {
        let mut app = App::new();
        type_text(&mut app, "Ada");
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        assert!(app.outbox.is_empty());
        assert_eq!(app.form.focus, FormFocus::Field(Field::Email));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn edit_on_list_row_loads_form() {
        let mut app = app_with_list(vec![record("1", "Ada"), record("2", "Grace")]);
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        update(&mut app, AppMessage::List(ListMessage::Edit));

        assert_eq!(app.session.mode(), ViewMode::Form);
        assert_eq!(app.session.draft().target.as_deref(), Some("2"));
        assert_eq!(app.session.draft().record.name, "Grace");

        update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert!(matches!(
            app.outbox.as_slice(),
            [Command::Update { id, .. }] if id == "2"
        ));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(&mut app, AppMessage::List(ListMessage::Delete));
        assert!(matches!(app.modal.active, Some(Modal::ConfirmDelete { .. })));
        assert!(app.outbox.is_empty());

        // 默认焦点在取消
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!app.modal.is_open());
        assert!(app.outbox.is_empty());

        update(&mut app, AppMessage::List(ListMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::SwitchFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(
            app.take_commands(),
            vec![Command::Delete {
                id: "1".to_string()
            }]
        );
        assert_eq!(app.list.deleting.as_deref(), Some("1"));
    }

    #[test]
    fn save_success_alerts_and_refreshes() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_commands();

        update(
            &mut app,
            AppMessage::Backend(Completion::Saved {
                target: Some("1".to_string()),
                result: Ok(StoreReply {
                    message: "Form updated successfully".to_string(),
                }),
            }),
        );

        assert_eq!(app.session.mode(), ViewMode::List);
        assert_eq!(app.take_commands(), vec![Command::Refresh]);
        assert!(matches!(
            app.modal.active,
            Some(Modal::Alert { ref message, is_error: false, .. }) if message == "Form updated successfully"
        ));
    }

    #[test]
    fn save_failure_keeps_draft_and_shows_error() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_commands();

        update(
            &mut app,
            AppMessage::Backend(Completion::Saved {
                target: Some("1".to_string()),
                result: Err(network_error("connection refused")),
            }),
        );

        assert_eq!(app.session.mode(), ViewMode::Form);
        assert_eq!(app.session.draft().record.name, "Ada");
        assert!(matches!(
            app.modal.active,
            Some(Modal::Alert { ref message, is_error: true, .. }) if message == "Error submitting form"
        ));
    }

    #[test]
    fn second_submit_while_saving_only_sets_status() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        assert_eq!(app.outbox.len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Already submitting, please wait")
        );
    }

    #[test]
    fn refresh_failure_only_updates_status() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(
            &mut app,
            AppMessage::Backend(Completion::Listed(Err(network_error("timeout")))),
        );

        assert!(!app.modal.is_open());
        assert_eq!(app.session.records().len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to refresh forms")
        );
    }

    #[test]
    fn cancel_edit_resets_draft() {
        let mut app = app_with_list(vec![record("1", "Ada")]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        update(&mut app, AppMessage::Form(FormMessage::CancelEdit));

        assert!(!app.session.draft().is_editing());
        assert!(app.session.draft().record.name.is_empty());
    }
}
