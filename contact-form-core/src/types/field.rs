//! 表单字段标识

/// 表单的全部字段，顺序即表单中的显示与焦点顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    MobileNumber,
    Address,
    State,
    City,
    Age,
    Gender,
    TermsAccepted,
    SelectedOption,
    SelectedHobbies,
    Message,
}

impl Field {
    /// 所有字段（表单顺序）
    pub const ALL: [Field; 12] = [
        Field::Name,
        Field::Email,
        Field::MobileNumber,
        Field::Address,
        Field::State,
        Field::City,
        Field::Age,
        Field::Gender,
        Field::TermsAccepted,
        Field::SelectedOption,
        Field::SelectedHobbies,
        Field::Message,
    ];

    /// JSON 中的字段名
    pub fn as_key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::MobileNumber => "mobileNumber",
            Field::Address => "address",
            Field::State => "state",
            Field::City => "city",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::TermsAccepted => "termsAccepted",
            Field::SelectedOption => "selectedOption",
            Field::SelectedHobbies => "selectedHobbies",
            Field::Message => "message",
        }
    }

    /// 从 JSON 字段名解析
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_key() == key)
    }

    /// 纯文本字段对应的 `TextField`，其余字段返回 `None`
    pub fn as_text(self) -> Option<TextField> {
        match self {
            Field::Name => Some(TextField::Name),
            Field::Email => Some(TextField::Email),
            Field::MobileNumber => Some(TextField::MobileNumber),
            Field::Address => Some(TextField::Address),
            Field::State => Some(TextField::State),
            Field::City => Some(TextField::City),
            Field::Age => Some(TextField::Age),
            Field::Gender => Some(TextField::Gender),
            Field::Message => Some(TextField::Message),
            Field::TermsAccepted | Field::SelectedOption | Field::SelectedHobbies => None,
        }
    }
}

/// 以整体赋值方式更新的文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
    MobileNumber,
    Address,
    State,
    City,
    Age,
    Gender,
    Message,
}

impl TextField {
    pub fn field(self) -> Field {
        match self {
            TextField::Name => Field::Name,
            TextField::Email => Field::Email,
            TextField::MobileNumber => Field::MobileNumber,
            TextField::Address => Field::Address,
            TextField::State => Field::State,
            TextField::City => Field::City,
            TextField::Age => Field::Age,
            TextField::Gender => Field::Gender,
            TextField::Message => Field::Message,
        }
    }
}

/// 性别单选项（JSON 值）
pub const GENDER_CHOICES: [&str; 2] = ["male", "female"];
