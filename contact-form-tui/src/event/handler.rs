//! 事件处理器
//!
//! 按键分发优先级：
//!     1. 弹窗打开时，所有按键交给弹窗
//!     2. 全局快捷键（退出、帮助、切换视图）
//!     3. 根据当前视图（表单 / 列表）处理

use std::time::Duration;

use anyhow::Result;
use contact_form_core::ViewMode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::F(1) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::TOGGLE_VIEW.matches(&key) {
        return AppMessage::ToggleView;
    }

    match app.session.mode() {
        ViewMode::Form => handle_form_keys(key, app),
        ViewMode::List => handle_list_keys(key),
    }
}

/// 处理表单视图的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::CANCEL_EDIT.matches(&key) {
        return AppMessage::Form(FormMessage::CancelEdit);
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => FormMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => FormMessage::PrevField,
        KeyCode::Left => FormMessage::OptionPrev,
        KeyCode::Right => FormMessage::OptionNext,
        KeyCode::Backspace => FormMessage::Backspace,

        // 可打印字符：文本字段中为输入，其余字段中空格为勾选
        KeyCode::Char(c) if is_plain(key.modifiers) => {
            if app.form.focus.is_text_input() {
                FormMessage::Input(c)
            } else if c == ' ' {
                FormMessage::Toggle
            } else {
                return AppMessage::Noop;
            }
        }

        _ => return AppMessage::Noop,
    };

    AppMessage::Form(msg)
}

/// 处理列表视图的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::List(ListMessage::Refresh);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        // Enter: 编辑
        KeyCode::Enter => AppMessage::List(ListMessage::Edit),
        KeyCode::Delete => AppMessage::List(ListMessage::Delete),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::SwitchFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 提示和帮助弹窗只响应关闭按键
        Some(Modal::Alert { .. } | Modal::Help) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use contact_form_core::types::Field;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn letters_are_input_in_text_fields() {
        let app = App::new();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('A'))
        ));
    }

    #[test]
    fn space_toggles_checkbox() {
        let mut app = App::new();
        app.form.focus_field(Field::TermsAccepted);
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Form(FormMessage::Toggle)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn global_keys() {
        let app = App::new();
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('t'), KeyModifiers::CONTROL), &app),
            AppMessage::ToggleView
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn list_keys() {
        let mut app = App::new();
        app.session.toggle_view();
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::List(ListMessage::Edit)
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::List(ListMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::List(ListMessage::SelectNext)
        ));
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = App::new();
        app.modal.show_confirm_delete("1", "Ada");
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::SwitchFocus)
        ));
    }
}
