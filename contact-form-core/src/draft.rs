//! 草稿状态
//!
//! 持有正在编辑、尚未持久化的表单。唯一的修改入口是 [`Draft::apply`]，
//! 按字段类型做相应的转换：复选框取反、多选切换成员、其余直接赋值。
//! 这里不做任何校验。

use crate::types::{ContactMethod, FormRecord, Hobby, TextField};
use crate::validation::{validate, ValidationErrors};

/// 单个字段的更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// 文本字段整体赋值
    Text(TextField, String),
    /// 切换 `termsAccepted`
    ToggleTerms,
    /// 设置首选联系方式（`None` = 未选择）
    ContactMethod(Option<ContactMethod>),
    /// 切换某个爱好是否选中
    ToggleHobby(Hobby),
}

/// 草稿
///
/// `target` 为 `Some(id)` 时处于编辑模式（提交将更新该记录），否则为新建模式。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// 当前字段值
    pub record: FormRecord,
    /// 最近一次提交时的校验错误
    pub errors: ValidationErrors,
    /// 正在编辑的记录 ID
    pub target: Option<String>,
}

impl Draft {
    /// 空白草稿（新建模式）
    pub fn new() -> Self {
        Self::default()
    }

    /// 载入已持久化的记录进入编辑模式；没有 ID 的记录无法编辑
    pub fn editing(record: &FormRecord) -> Option<Self> {
        let id = record.id.clone()?;
        Some(Self {
            record: record.without_id(),
            errors: ValidationErrors::new(),
            target: Some(id),
        })
    }

    /// 是否处于编辑模式
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// 应用一次字段更新
    pub fn apply(&mut self, update: FieldUpdate) {
        let record = &mut self.record;
        match update {
            FieldUpdate::Text(field, value) => *text_mut(record, field) = value,
            FieldUpdate::ToggleTerms => record.terms_accepted = !record.terms_accepted,
            FieldUpdate::ContactMethod(method) => record.selected_option = method,
            FieldUpdate::ToggleHobby(hobby) => {
                if !record.selected_hobbies.remove(&hobby) {
                    record.selected_hobbies.insert(hobby);
                }
            }
        }
    }

    /// 读取文本字段
    pub fn text(&self, field: TextField) -> &str {
        let record = &self.record;
        match field {
            TextField::Name => &record.name,
            TextField::Email => &record.email,
            TextField::MobileNumber => &record.mobile_number,
            TextField::Address => &record.address,
            TextField::State => &record.state,
            TextField::City => &record.city,
            TextField::Age => &record.age,
            TextField::Gender => &record.gender,
            TextField::Message => &record.message,
        }
    }

    /// 运行校验并保存结果，返回是否可以提交
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.record);
        self.errors.is_empty()
    }

    /// 清空所有字段与错误，退出编辑模式
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn text_mut(record: &mut FormRecord, field: TextField) -> &mut String {
    match field {
        TextField::Name => &mut record.name,
        TextField::Email => &mut record.email,
        TextField::MobileNumber => &mut record.mobile_number,
        TextField::Address => &mut record.address,
        TextField::State => &mut record.state,
        TextField::City => &mut record.city,
        TextField::Age => &mut record.age,
        TextField::Gender => &mut record.gender,
        TextField::Message => &mut record.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn text_update_assigns() {
        let mut draft = Draft::new();
        draft.apply(FieldUpdate::Text(TextField::City, "Paris".to_string()));
        draft.apply(FieldUpdate::Text(TextField::City, "Lyon".to_string()));
        assert_eq!(draft.record.city, "Lyon");
        assert_eq!(draft.text(TextField::City), "Lyon");
    }

    #[test]
    fn toggling_terms_twice_restores_value() {
        let mut draft = Draft::new();
        let original = draft.record.terms_accepted;
        draft.apply(FieldUpdate::ToggleTerms);
        assert_ne!(draft.record.terms_accepted, original);
        draft.apply(FieldUpdate::ToggleTerms);
        assert_eq!(draft.record.terms_accepted, original);
    }

    #[test]
    fn toggling_hobby_twice_restores_membership() {
        let mut draft = Draft::new();
        draft.apply(FieldUpdate::ToggleHobby(Hobby::Reading));
        let before = draft.record.selected_hobbies.clone();

        draft.apply(FieldUpdate::ToggleHobby(Hobby::Coding));
        assert!(draft.record.selected_hobbies.contains(&Hobby::Coding));
        draft.apply(FieldUpdate::ToggleHobby(Hobby::Coding));

        assert_eq!(draft.record.selected_hobbies, before);
    }

    #[test]
    fn contact_method_can_be_unset() {
        let mut draft = Draft::new();
        draft.apply(FieldUpdate::ContactMethod(Some(ContactMethod::Phone)));
        assert_eq!(draft.record.selected_option, Some(ContactMethod::Phone));
        draft.apply(FieldUpdate::ContactMethod(None));
        assert_eq!(draft.record.selected_option, None);
    }

    #[test]
    fn apply_does_not_validate() {
        let mut draft = Draft::new();
        draft.validate();
        let errors = draft.errors.clone();
        draft.apply(FieldUpdate::Text(TextField::Name, "Ada".to_string()));
        assert_eq!(draft.errors, errors);
        assert!(draft.errors.contains(Field::Name));
    }

    #[test]
    fn editing_requires_an_id() {
        let unsaved = FormRecord::default();
        assert!(Draft::editing(&unsaved).is_none());

        let saved = FormRecord {
            id: Some("42".to_string()),
            name: "Ada".to_string(),
            ..FormRecord::default()
        };
        let draft = Draft::editing(&saved).unwrap();
        assert!(draft.is_editing());
        assert_eq!(draft.target.as_deref(), Some("42"));
        assert_eq!(draft.record.name, "Ada");
        assert_eq!(draft.record.id, None);
    }

    #[test]
    fn reset_leaves_edit_mode() {
        let saved = FormRecord {
            id: Some("42".to_string()),
            ..FormRecord::default()
        };
        let mut draft = Draft::editing(&saved).unwrap();
        draft.validate();
        draft.reset();
        assert_eq!(draft, Draft::new());
    }
}
