//! 主布局渲染

use contact_form_core::ViewMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let page_title = match app.session.mode() {
        ViewMode::Form if app.session.draft().is_editing() => texts.form.title_edit.to_string(),
        ViewMode::Form => texts.form.title_create.to_string(),
        ViewMode::List => {
            let refreshed = app.list.last_refreshed.map_or_else(
                || texts.list.never_refreshed.to_string(),
                |at| format!("{} {}", texts.list.last_refreshed, at.format("%H:%M:%S")),
            );
            format!("{} ({refreshed})", texts.list.title)
        }
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.session.mode() {
        ViewMode::Form => pages::form::render(app, frame, inner_area),
        ViewMode::List => pages::list::render(app, frame, inner_area),
    }
}
