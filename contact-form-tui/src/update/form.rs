//! 表单视图更新

use contact_form_core::types::{ContactMethod, Field, TextField, GENDER_CHOICES};
use contact_form_core::{CoreError, FieldUpdate, SubmitOutcome};

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::{App, FormFocus};

pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_prev(),
        FormMessage::Input(c) => edit_text(app, |value| value.push(c)),
        FormMessage::Backspace => edit_text(app, |value| {
            value.pop();
        }),
        FormMessage::Toggle => toggle(app),
        FormMessage::OptionPrev => cycle_option(app, false),
        FormMessage::OptionNext => cycle_option(app, true),
        FormMessage::Submit => submit(app),
        FormMessage::CancelEdit => {
            if app.session.draft().is_editing() {
                app.session.cancel_edit();
                app.form.reset();
                app.set_status(t().status_bar.edit_cancelled);
            }
        }
    }
}

/// 修改当前聚焦的文本字段
fn edit_text(app: &mut App, edit: impl FnOnce(&mut String)) {
    if !app.form.focus.is_text_input() {
        return;
    }
    let Some(field) = app.form.focus.field().and_then(Field::as_text) else {
        return;
    };
    let mut value = app.session.draft().text(field).to_string();
    edit(&mut value);
    app.session.apply(FieldUpdate::Text(field, value));
}

/// Space：复选框 / 爱好取反，单选项前进一格，提交按钮即提交
fn toggle(app: &mut App) {
    match app.form.focus {
        FormFocus::Field(Field::TermsAccepted) => app.session.apply(FieldUpdate::ToggleTerms),
        FormFocus::Field(Field::SelectedHobbies) => {
            let hobby = app.form.hobby_at_cursor();
            app.session.apply(FieldUpdate::ToggleHobby(hobby));
        }
        FormFocus::Field(Field::Gender | Field::SelectedOption) => cycle_option(app, true),
        FormFocus::Submit => submit(app),
        FormFocus::Field(_) => {}
    }
}

/// ←→：切换单选项，或移动爱好光标
fn cycle_option(app: &mut App, forward: bool) {
    match app.form.focus {
        FormFocus::Field(Field::Gender) => {
            let current = app.session.draft().record.gender.as_str();
            let next = cycle(&GENDER_CHOICES, |g| *g == current, forward);
            app.session
                .apply(FieldUpdate::Text(TextField::Gender, next.to_string()));
        }
        FormFocus::Field(Field::SelectedOption) => {
            // 未选择也是一个可选状态
            let options: Vec<Option<ContactMethod>> = std::iter::once(None)
                .chain(ContactMethod::ALL.map(Some))
                .collect();
            let current = app.session.draft().record.selected_option;
            let next = cycle(&options, |o| *o == current, forward);
            app.session.apply(FieldUpdate::ContactMethod(next));
        }
        FormFocus::Field(Field::SelectedHobbies) => {
            if forward {
                app.form.hobby_cursor_next();
            } else {
                app.form.hobby_cursor_prev();
            }
        }
        _ => {}
    }
}

/// 在选项中循环；当前值不在选项中时前进取第一个，后退取最后一个
fn cycle<T: Copy>(options: &[T], is_current: impl Fn(&T) -> bool, forward: bool) -> T {
    let len = options.len();
    let index = match (options.iter().position(is_current), forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    options[index]
}

fn submit(app: &mut App) {
    let texts = t();
    match app.session.submit() {
        Ok(SubmitOutcome::Queued(command)) => {
            app.set_status(texts.status_bar.submitting);
            app.dispatch(command);
        }
        Ok(SubmitOutcome::Invalid) => {
            let errors = &app.session.draft().errors;
            let count = errors.len();
            if let Some(field) = errors.first_field() {
                app.form.focus_field(field);
            }
            app.set_status(format!("{} {count}", texts.status_bar.invalid_fields));
        }
        Err(CoreError::Busy) => {
            app.set_status(texts.status_bar.already_submitting);
        }
        Err(e) => {
            log::error!("Unexpected submit failure: {e}");
            app.modal.show_error(texts.common.error, &e.to_string());
        }
    }
}
