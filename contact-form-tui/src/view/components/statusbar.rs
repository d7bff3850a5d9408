//! 状态栏：快捷键提示 + 状态消息

use contact_form_core::types::Field;
use contact_form_core::ViewMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FormFocus};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前视图和焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match app.session.mode() {
        ViewMode::Form => {
            hints.push((keys.tab, actions.next_field));
            match app.form.focus {
                FormFocus::Field(Field::Gender | Field::SelectedOption) => {
                    hints.push((keys.arrows_lr, actions.choose));
                }
                FormFocus::Field(Field::SelectedHobbies) => {
                    hints.push((keys.arrows_lr, actions.choose));
                    hints.push((keys.space, actions.toggle));
                }
                FormFocus::Field(Field::TermsAccepted) => {
                    hints.push((keys.space, actions.toggle));
                }
                _ => {}
            }
            hints.push((keys.enter, actions.submit));
            if app.session.draft().is_editing() {
                hints.push((keys.esc, actions.cancel_edit));
            }
        }
        ViewMode::List => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push(("Enter/Alt+e", texts.common.edit));
            hints.push(("Alt+d", texts.common.delete));
            hints.push(("Alt+r", actions.refresh));
        }
    }

    hints.push(("Ctrl+T", actions.switch_view));
    hints.push(("Alt+h", actions.help));
    hints.push(("Alt+q", texts.common.quit));

    hints
}
