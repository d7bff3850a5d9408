//! 表单界面状态

use contact_form_core::types::{Field, Hobby};

use crate::model::FormFocus;

/// 表单界面状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 当前焦点
    pub focus: FormFocus,
    /// 爱好多选中的光标位置
    pub hobby_cursor: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 聚焦到指定字段
    pub fn focus_field(&mut self, field: Field) {
        self.focus = FormFocus::Field(field);
    }

    /// 光标所在的爱好
    pub fn hobby_at_cursor(&self) -> Hobby {
        Hobby::ALL[self.hobby_cursor % Hobby::ALL.len()]
    }

    pub fn hobby_cursor_next(&mut self) {
        self.hobby_cursor = (self.hobby_cursor + 1) % Hobby::ALL.len();
    }

    pub fn hobby_cursor_prev(&mut self) {
        self.hobby_cursor = (self.hobby_cursor + Hobby::ALL.len() - 1) % Hobby::ALL.len();
    }

    /// 回到初始焦点
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
