//! 表单视图
//!
//! 每个字段一行（标签 + 值），有校验错误时在下方再加一行。
//! 字段较多时按焦点位置滚动。

use contact_form_core::types::{ContactMethod, Field, Hobby, GENDER_CHOICES};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{t, Translations};
use crate::model::{App, FormFocus};
use crate::util::pad_to_width;
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 26;

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let draft = app.session.draft();

    let mut lines = Vec::new();
    let mut focus_line = 0;

    for field in Field::ALL {
        let focused = app.form.focus == FormFocus::Field(field);
        if focused {
            focus_line = lines.len();
        }

        let marker = if focused { "▸ " } else { "  " };
        let mut spans = vec![Span::styled(
            format!("{marker}{}", pad_to_width(label(texts, field), LABEL_WIDTH)),
            Styles::label(focused),
        )];
        spans.extend(value_spans(app, texts, field, focused));
        lines.push(Line::from(spans));

        if let Some(message) = draft.errors.get(field) {
            lines.push(Line::styled(
                format!("  {}  {message}", " ".repeat(LABEL_WIDTH)),
                Styles::field_error(),
            ));
        }
    }

    lines.push(Line::from(""));
    let submit_focused = app.form.focus == FormFocus::Submit;
    if submit_focused {
        focus_line = lines.len();
    }
    lines.push(submit_button(app, texts, submit_focused));

    // 保证焦点行可见
    let height = usize::from(area.height);
    let scroll = (focus_line + 1).saturating_sub(height);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn label(texts: &Translations, field: Field) -> &'static str {
    let labels = &texts.form.labels;
    match field {
        Field::Name => labels.name,
        Field::Email => labels.email,
        Field::MobileNumber => labels.mobile_number,
        Field::Address => labels.address,
        Field::State => labels.state,
        Field::City => labels.city,
        Field::Age => labels.age,
        Field::Gender => labels.gender,
        Field::TermsAccepted => labels.terms,
        Field::SelectedOption => labels.contact_method,
        Field::SelectedHobbies => labels.hobbies,
        Field::Message => labels.message,
    }
}

fn gender_label(texts: &Translations, value: &str) -> &'static str {
    match value {
        "male" => texts.form.choices.male,
        _ => texts.form.choices.female,
    }
}

fn method_label(texts: &Translations, method: ContactMethod) -> &'static str {
    match method {
        ContactMethod::Email => texts.form.choices.email,
        ContactMethod::Phone => texts.form.choices.phone,
    }
}

fn hobby_label(texts: &Translations, hobby: Hobby) -> &'static str {
    let choices = &texts.form.choices;
    match hobby {
        Hobby::Reading => choices.reading,
        Hobby::Travelling => choices.travelling,
        Hobby::Sports => choices.sports,
        Hobby::Coding => choices.coding,
    }
}

fn value_spans(
    app: &App,
    texts: &Translations,
    field: Field,
    focused: bool,
) -> Vec<Span<'static>> {
    let c = colors();
    let record = &app.session.draft().record;
    let normal = Style::default().fg(c.fg);
    let muted = Style::default().fg(c.muted);

    match field {
        Field::Gender => GENDER_CHOICES
            .iter()
            .map(|choice| {
                let selected = record.gender == *choice;
                let mark = if selected { "(•)" } else { "( )" };
                let style = if selected { normal } else { muted };
                Span::styled(format!("{mark} {}  ", gender_label(texts, choice)), style)
            })
            .collect(),

        Field::TermsAccepted => {
            let mark = if record.terms_accepted { "[x]" } else { "[ ]" };
            vec![Span::styled(mark.to_string(), normal)]
        }

        Field::SelectedOption => {
            let value = record
                .selected_option
                .map_or(texts.form.none_selected, |m| method_label(texts, m));
            let text = if focused {
                format!("◀ {value} ▶")
            } else {
                value.to_string()
            };
            vec![Span::styled(text, normal)]
        }

        Field::SelectedHobbies => Hobby::ALL
            .iter()
            .enumerate()
            .map(|(i, hobby)| {
                let checked = record.selected_hobbies.contains(hobby);
                let mark = if checked { "[x]" } else { "[ ]" };
                let mut style = if checked { normal } else { muted };
                if focused && i == app.form.hobby_cursor {
                    style = Styles::selected();
                }
                Span::styled(format!("{mark} {}  ", hobby_label(texts, *hobby)), style)
            })
            .collect(),

        _ => {
            let value = field
                .as_text()
                .map(|text| app.session.draft().text(text).to_string())
                .unwrap_or_default();
            if focused {
                vec![Span::styled(format!("{value}▎"), normal.add_modifier(Modifier::BOLD))]
            } else {
                vec![Span::styled(value, normal)]
            }
        }
    }
}

fn submit_button(app: &App, texts: &Translations, focused: bool) -> Line<'static> {
    let c = colors();
    let caption = if app.session.is_saving() {
        texts.form.submitting
    } else if app.session.draft().is_editing() {
        texts.form.update
    } else {
        texts.form.submit
    };

    let style = if focused {
        Style::default().fg(c.selected_fg).bg(c.highlight)
    } else {
        Style::default().fg(c.highlight)
    };

    Line::from(vec![
        Span::raw(if focused { "▸ " } else { "  " }),
        Span::styled(format!("[ {caption} ]"), style),
    ])
}
