use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::ids::Id;

/// Label distinguishing a contact's numbers. Not part of any uniqueness rule.
///
/// Any label other than the three standard ones is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhoneType {
    Home,
    Work,
    Mobile,
    Other(String),
}

impl PhoneType {
    pub const STANDARD: &'static [PhoneType] =
        &[PhoneType::Home, PhoneType::Work, PhoneType::Mobile];

    /// Parse from database string representation. Unknown labels become `Other`.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "home" => PhoneType::Home,
            "work" => PhoneType::Work,
            "mobile" => PhoneType::Mobile,
            other => PhoneType::Other(other.to_string()),
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(&self) -> &str {
        match self {
            PhoneType::Home => "home",
            PhoneType::Work => "work",
            PhoneType::Mobile => "mobile",
            PhoneType::Other(label) => label,
        }
    }
}

impl From<String> for PhoneType {
    fn from(label: String) -> Self {
        PhoneType::from_db_str(&label)
    }
}

impl From<PhoneType> for String {
    fn from(phone_type: PhoneType) -> Self {
        phone_type.to_db_str().to_string()
    }
}

/// A phone number belonging to exactly one contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub id: Id<Phone>,
    pub contact_id: Id<Contact>,
    pub phone: String,
    pub phone_type: PhoneType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Phone {
    pub fn new(contact_id: Id<Contact>, phone: String, phone_type: PhoneType) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            contact_id,
            phone,
            phone_type,
            created_at: now,
            updated_at: now,
        }
    }
}
