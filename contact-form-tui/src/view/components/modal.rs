//! 弹窗渲染

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Alert {
            title,
            message,
            is_error,
        } => render_alert(frame, title, message, *is_error),
        Modal::ConfirmDelete {
            item_name, focus, ..
        } => render_confirm_delete(frame, item_name, *focus),
        Modal::Help => render_help(frame),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区（去掉边框和左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

fn render_confirm_delete(frame: &mut Frame, item_name: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(48, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(texts.modal.confirm_delete.title, c.error), area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            texts.modal.confirm_delete.prompt,
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("\"{item_name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染提示弹窗（成功 / 失败）
fn render_alert(frame: &mut Frame, title: &str, message: &str, is_error: bool) {
    let c = colors();
    let border = if is_error { c.error } else { c.success };

    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(title, border), area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.press_to_close, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn help_heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let actions = &help.actions;

    let area = centered_rect(60, 24, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(help.title, Color::Cyan), area);

    let lines = vec![
        help_heading(help.global),
        help_line("Ctrl+T", actions.toggle_view),
        help_line("Alt+h / F1", actions.show_help),
        help_line("Alt+q", actions.quit),
        Line::from(""),
        help_heading(help.form),
        help_line("Tab / ↑↓", actions.move_field),
        help_line("←→", actions.choose_option),
        help_line("Space", actions.toggle_check),
        help_line("Enter", actions.submit_form),
        help_line("Esc", actions.cancel_edit),
        Line::from(""),
        help_heading(help.list),
        help_line("↑↓ / jk", actions.select_row),
        help_line("Enter / Alt+e", actions.edit_row),
        help_line("Alt+d / Del", actions.delete_row),
        help_line("Alt+r", actions.refresh_list),
        Line::from(""),
        Line::styled(texts.modal.press_to_close, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
