use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::phone::{Phone, PhoneType};

/// A person in the contact book. Owns its phones: they are written with the
/// contact and removed with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phones: Vec<Phone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build an unsaved contact. Nothing is validated here; blank values are
    /// reported when the contact is validated or persisted.
    pub fn new(firstname: String, lastname: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            firstname,
            lastname,
            email,
            phones: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full name, first then last, separated by a single space.
    pub fn name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Attach an unsaved phone owned by this contact.
    pub fn with_phone(mut self, number: String, phone_type: PhoneType) -> Self {
        let phone = Phone::new(self.id, number, phone_type);
        self.phones.push(phone);
        self
    }
}

/// Field changes for an update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ContactChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl ContactChanges {
    pub fn apply(self, contact: &mut Contact) {
        if let Some(firstname) = self.firstname {
            contact.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            contact.lastname = lastname;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
    }
}
