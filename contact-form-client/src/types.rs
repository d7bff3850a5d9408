//! Wire types shared by the record store and its callers.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

// ============ Choice fields ============

/// Preferred contact method (`selectedOption`).
///
/// An unset choice is represented as `None` and travels as `""` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    /// All selectable methods, in display order.
    pub const ALL: [Self; 2] = [Self::Email, Self::Phone];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Parse a wire value. Returns `None` for `""` and for unknown values.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

/// Hobby tag (`selectedHobbies`), multiple selection allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hobby {
    Reading,
    Travelling,
    Sports,
    Coding,
}

impl Hobby {
    /// All tags, in display order.
    pub const ALL: [Self; 4] = [Self::Reading, Self::Travelling, Self::Sports, Self::Coding];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Travelling => "travelling",
            Self::Sports => "sports",
            Self::Coding => "coding",
        }
    }

    /// Parse a wire value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "reading" => Some(Self::Reading),
            "travelling" => Some(Self::Travelling),
            "sports" => Some(Self::Sports),
            "coding" => Some(Self::Coding),
            _ => None,
        }
    }
}

// ============ FormRecord ============

/// A submitted contact form.
///
/// `id` is assigned by the store and only ever read from list responses (`_id`);
/// it is never part of a create/update body. Fields missing from a list entry
/// fall back to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    /// Store-assigned identifier
    #[serde(rename = "_id", skip_serializing)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub city: String,
    /// Numeric-as-text; stores that coerce it to a JSON number are accepted too
    #[serde(deserialize_with = "deserialize_age")]
    pub age: String,
    pub gender: String,
    pub mobile_number: String,
    pub message: String,
    #[serde(deserialize_with = "deserialize_bool_or_null")]
    pub terms_accepted: bool,
    #[serde(with = "contact_method_field")]
    pub selected_option: Option<ContactMethod>,
    #[serde(deserialize_with = "deserialize_hobbies")]
    pub selected_hobbies: BTreeSet<Hobby>,
}

impl FormRecord {
    /// Copy of this record with the identifier stripped, as loaded into a draft.
    #[must_use]
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Reply body of create / update / delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreReply {
    /// Human-readable confirmation; empty when the store sends none
    #[serde(default)]
    pub message: String,
}

// ============ Lenient field decoding ============

fn deserialize_age<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeRepr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<AgeRepr>::deserialize(deserializer)? {
        Some(AgeRepr::Text(text)) => text,
        Some(AgeRepr::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn deserialize_hobbies<'de, D>(deserializer: D) -> Result<BTreeSet<Hobby>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .filter_map(|tag| {
            let hobby = Hobby::from_value(tag);
            if hobby.is_none() {
                log::warn!("[record-store] Ignoring unknown hobby tag: {tag}");
            }
            hobby
        })
        .collect())
}

/// `selectedOption`: `""` on the wire means unset.
mod contact_method_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ContactMethod;

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<ContactMethod>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map_or("", ContactMethod::as_str))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ContactMethod>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let method = ContactMethod::from_value(&raw);
        if method.is_none() && !raw.is_empty() {
            log::warn!("[record-store] Ignoring unknown contact method: {raw}");
        }
        Ok(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entry_with_id_and_numeric_age() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "name": "Ada",
            "email": "ada@example.com",
            "age": 36,
            "selectedOption": "phone",
            "selectedHobbies": ["coding", "reading"],
            "termsAccepted": true,
            "__v": 0
        }"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("65f1c0ffee"));
        assert_eq!(record.age, "36");
        assert_eq!(record.selected_option, Some(ContactMethod::Phone));
        assert!(record.selected_hobbies.contains(&Hobby::Coding));
        assert!(record.selected_hobbies.contains(&Hobby::Reading));
        assert!(record.terms_accepted);
        // 缺失字段取默认值
        assert!(record.city.is_empty());
        assert!(record.mobile_number.is_empty());
    }

    #[test]
    fn empty_option_and_null_fields_decode_as_unset() {
        let json = r#"{"selectedOption": "", "selectedHobbies": null, "age": null, "termsAccepted": null}"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.selected_option, None);
        assert!(record.selected_hobbies.is_empty());
        assert!(record.age.is_empty());
        assert!(!record.terms_accepted);
    }

    #[test]
    fn unknown_tags_are_dropped() {
        let json = r#"{"selectedOption": "pigeon", "selectedHobbies": ["sports", "knitting"]}"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.selected_option, None);
        assert_eq!(record.selected_hobbies.len(), 1);
        assert!(record.selected_hobbies.contains(&Hobby::Sports));
    }

    #[test]
    fn body_uses_camel_case_and_omits_id() {
        let record = FormRecord {
            id: Some("abc".to_string()),
            mobile_number: "1234567890".to_string(),
            terms_accepted: true,
            selected_hobbies: [Hobby::Travelling, Hobby::Coding].into_iter().collect(),
            ..FormRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(value["mobileNumber"], "1234567890");
        assert_eq!(value["termsAccepted"], true);
        assert_eq!(value["selectedOption"], "");
        assert_eq!(value["selectedHobbies"], serde_json::json!(["travelling", "coding"]));
    }

    #[test]
    fn reply_without_message() {
        let reply: StoreReply = serde_json::from_str("{}").unwrap();
        assert!(reply.message.is_empty());
    }

    #[test]
    fn without_id_keeps_fields() {
        let record = FormRecord {
            id: Some("x".to_string()),
            name: "Ada".to_string(),
            ..FormRecord::default()
        };
        let draft = record.without_id();
        assert_eq!(draft.id, None);
        assert_eq!(draft.name, "Ada");
    }
}
