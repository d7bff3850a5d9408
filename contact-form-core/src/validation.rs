//! 表单校验
//!
//! 纯函数：输入草稿，输出每个未通过字段的错误消息。
//! 各规则相互独立，一个字段失败不会跳过其他字段。

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FormRecord};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$";
const MOBILE_PATTERN: &str = r"^[0-9]{10}$";

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

#[allow(clippy::expect_used)]
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern compiles"));

/// 字段 → 错误消息；不在表中的字段即为有效
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取字段的错误消息
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 按表单顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// 第一个出错的字段（用于移动焦点）
    pub fn first_field(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// 校验草稿
pub fn validate(record: &FormRecord) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&record.name) {
        errors.insert(Field::Name, "Name is required");
    }

    if is_blank(&record.email) {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&record.email) {
        errors.insert(Field::Email, "Email is not valid");
    }

    if is_blank(&record.address) {
        errors.insert(Field::Address, "Address is required");
    }

    if is_blank(&record.state) {
        errors.insert(Field::State, "State is required");
    }

    if is_blank(&record.city) {
        errors.insert(Field::City, "City is required");
    }

    if is_blank(&record.age) {
        errors.insert(Field::Age, "Age is required");
    } else if !is_numeric(&record.age) {
        errors.insert(Field::Age, "Age must be a number");
    }

    if is_blank(&record.mobile_number) {
        errors.insert(Field::MobileNumber, "Mobile number is required");
    } else if !is_valid_mobile(&record.mobile_number) {
        errors.insert(Field::MobileNumber, "Mobile number is not valid");
    }

    if is_blank(&record.gender) {
        errors.insert(Field::Gender, "Gender is required");
    }

    if !record.terms_accepted {
        errors.insert(
            Field::TermsAccepted,
            "You must accept the terms and conditions",
        );
    }

    if is_blank(&record.message) {
        errors.insert(Field::Message, "Message is required");
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value)
}

/// 是否为有限数字
///
/// 首尾空白忽略，纯空白视为 0；接受十进制（含小数、指数、正负号）
/// 以及无符号的 `0x` / `0o` / `0b` 整数。`NaN` 与无穷大都不算数字。
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    if let Some((radix, digits)) = radix_literal(trimmed) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    trimmed
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
}

/// 拆出 `0x` / `0o` / `0b` 前缀
fn radix_literal(value: &str) -> Option<(u32, &str)> {
    let prefix = value.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &value[2..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> FormRecord {
        FormRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 St James's Square".to_string(),
            state: "London".to_string(),
            city: "London".to_string(),
            age: "36".to_string(),
            gender: "female".to_string(),
            mobile_number: "1234567890".to_string(),
            message: "Hello".to_string(),
            terms_accepted: true,
            ..FormRecord::default()
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert!(validate(&valid_record()).is_empty());
    }

    #[test]
    fn empty_record_reports_every_required_field() {
        let errors = validate(&FormRecord::default());
        for field in [
            Field::Name,
            Field::Email,
            Field::Address,
            Field::State,
            Field::City,
            Field::Age,
            Field::MobileNumber,
            Field::Gender,
            Field::TermsAccepted,
            Field::Message,
        ] {
            assert!(errors.contains(field), "missing error for {field:?}");
        }
        assert_eq!(errors.len(), 10);
        assert!(!errors.contains(Field::SelectedOption));
        assert!(!errors.contains(Field::SelectedHobbies));
    }

    #[test]
    fn each_missing_field_blocks_submission() {
        let clears: [fn(&mut FormRecord); 10] = [
            |r| r.name.clear(),
            |r| r.email.clear(),
            |r| r.address.clear(),
            |r| r.state.clear(),
            |r| r.city.clear(),
            |r| r.age.clear(),
            |r| r.mobile_number.clear(),
            |r| r.gender.clear(),
            |r| r.terms_accepted = false,
            |r| r.message.clear(),
        ];
        for clear in clears {
            let mut record = valid_record();
            clear(&mut record);
            let errors = validate(&record);
            assert_eq!(errors.len(), 1, "unexpected errors: {errors:?}");
        }
    }

    #[test]
    fn whitespace_only_is_not_missing() {
        let mut record = valid_record();
        record.name = "   ".to_string();
        record.address = " ".to_string();
        record.message = "\t".to_string();
        record.age = "  ".to_string();
        assert!(validate(&record).is_empty());

        record.email = "   ".to_string();
        assert_eq!(validate(&record).get(Field::Email), Some("Email is not valid"));
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last-1_x@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b.toolongtld"));

        let mut record = valid_record();
        record.email = "a@b".to_string();
        assert_eq!(validate(&record).get(Field::Email), Some("Email is not valid"));
        record.email.clear();
        assert_eq!(validate(&record).get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn mobile_rules() {
        assert!(is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("123456789"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("12345abcde"));
        assert!(!is_valid_mobile("+123456789"));

        let mut record = valid_record();
        record.mobile_number = "123".to_string();
        assert_eq!(
            validate(&record).get(Field::MobileNumber),
            Some("Mobile number is not valid")
        );
    }

    #[test]
    fn age_rules() {
        assert!(is_numeric("25"));
        assert!(is_numeric(" 25 "));
        assert!(is_numeric("25.5"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("25 years"));
        assert!(is_numeric("-1e3"));
        assert!(is_numeric("   "));

        assert!(!is_numeric("inf"));
        assert!(!is_numeric("infinity"));
        assert!(!is_numeric("-INF"));
        assert!(!is_numeric("Infinity"));
        assert!(!is_numeric("1e999"));

        assert!(is_numeric("0x1A"));
        assert!(is_numeric("0o17"));
        assert!(is_numeric("0B101"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("0xZZ"));
        assert!(!is_numeric("0b102"));
        assert!(!is_numeric("-0x1A"));

        let mut record = valid_record();
        record.age = "abc".to_string();
        assert_eq!(validate(&record).get(Field::Age), Some("Age must be a number"));
        record.age = "infinity".to_string();
        assert_eq!(validate(&record).get(Field::Age), Some("Age must be a number"));
        record.age = "0x1A".to_string();
        assert_eq!(validate(&record).get(Field::Age), None);
    }

    #[test]
    fn errors_iterate_in_form_order() {
        let errors = validate(&FormRecord::default());
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields.first(), Some(&Field::Name));
        assert_eq!(fields.last(), Some(&Field::Message));
        assert_eq!(errors.first_field(), Some(Field::Name));
    }
}
