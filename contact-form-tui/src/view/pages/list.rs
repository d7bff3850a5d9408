//! 已提交表单列表视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::theme::{colors, Styles};

/// 渲染列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.session.records().is_empty() {
        render_empty(app, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let headline = if app.list.loading {
        texts.status_bar.loading
    } else {
        texts.list.no_forms
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {headline}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.list.no_forms_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 三列宽度：姓名 / 邮箱 / 地址（地址占剩余宽度）
fn column_widths(total: u16) -> (usize, usize, usize) {
    let total = usize::from(total).saturating_sub(4);
    let name = total / 4;
    let email = total / 3;
    (name, email, total.saturating_sub(name + email))
}

/// 渲染表单列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let (name_w, email_w, address_w) = column_widths(area.width);

    let header = Line::styled(
        format!(
            "  {} {} {}",
            pad_to_width(texts.list.column_name, name_w),
            pad_to_width(texts.list.column_email, email_w),
            pad_to_width(texts.list.column_address, address_w),
        ),
        Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(header), Rect { height: 1, ..area });

    let items: Vec<ListItem> = app
        .session
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == app.list.selected;
            let is_deleting = record.id.is_some() && record.id == app.list.deleting;

            let style = if is_selected {
                Styles::selected()
            } else if is_deleting {
                Style::default().fg(c.muted).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(c.fg)
            };

            let line = Line::from(vec![
                Span::raw(if is_selected { "▸ " } else { "  " }),
                Span::styled(
                    format!(
                        "{} {} {}",
                        pad_to_width(&record.name, name_w),
                        pad_to_width(&record.email, email_w),
                        pad_to_width(&record.address, address_w),
                    ),
                    style,
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };

    let list = List::new(items).highlight_style(Style::default());
    let mut state = ListState::default();
    state.select(Some(app.list.selected));

    frame.render_stateful_widget(list, list_area, &mut state);
}
