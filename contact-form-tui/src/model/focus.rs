//! 表单焦点定义

use contact_form_core::types::Field;

/// 表单焦点：某个字段或提交按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(Field::ALL[0])
    }
}

impl FormFocus {
    /// 焦点顺序：全部字段，最后是提交按钮
    fn index(self) -> usize {
        match self {
            FormFocus::Field(field) => Field::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or_default(),
            FormFocus::Submit => Field::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        Field::ALL
            .get(index)
            .map_or(FormFocus::Submit, |field| FormFocus::Field(*field))
    }

    /// 下一个焦点（循环）
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % (Field::ALL.len() + 1))
    }

    /// 上一个焦点（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        let count = Field::ALL.len() + 1;
        Self::from_index((self.index() + count - 1) % count)
    }

    /// 当前聚焦的字段
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Field(field) => Some(field),
            FormFocus::Submit => None,
        }
    }

    /// 是否是自由输入的文本字段（性别为单选，不算）
    pub fn is_text_input(self) -> bool {
        self.field()
            .and_then(Field::as_text)
            .is_some_and(|_| self != FormFocus::Field(Field::Gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_fields_then_submit() {
        let mut focus = FormFocus::default();
        for _ in 0..Field::ALL.len() {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Submit);
        assert_eq!(focus.next(), FormFocus::Field(Field::Name));
        assert_eq!(FormFocus::default().prev(), FormFocus::Submit);
    }

    #[test]
    fn gender_is_not_free_text() {
        assert!(FormFocus::Field(Field::Email).is_text_input());
        assert!(!FormFocus::Field(Field::Gender).is_text_input());
        assert!(!FormFocus::Field(Field::TermsAccepted).is_text_input());
        assert!(!FormFocus::Submit.is_text_input());
    }
}
