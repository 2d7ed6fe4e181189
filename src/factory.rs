//! Ready-made valid contacts and phones for tests and seed data.
//!
//! Every built contact gets a fresh email and three distinct phones (home,
//! work, mobile), so any number of defaults can be stored side by side.

use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::Connection;

use crate::error::ContactsResult;
use crate::model::{Contact, Id, Phone, PhoneType};
use crate::ops::{contact_ops, phone_ops};

static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

fn next_sequence() -> usize {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// `tester<N>@example.com`, unique within the process.
pub fn next_email() -> String {
    format!("tester{}@example.com", next_sequence())
}

/// `785-555-NNNN`; consecutive calls never repeat, so one contact's default
/// phones are distinct. Numbers repeat across contacts once the sequence
/// passes 10 000.
pub fn next_phone_number() -> String {
    format!("785-555-{:04}", next_sequence() % 10_000)
}

pub const DEFAULT_PHONE_TYPES: &[PhoneType] = PhoneType::STANDARD;

/// Builder for contacts with overridable fields.
#[derive(Debug, Clone)]
pub struct ContactFactory {
    firstname: String,
    lastname: String,
    email: Option<String>,
    phones: Option<Vec<(String, PhoneType)>>,
}

impl Default for ContactFactory {
    fn default() -> Self {
        Self {
            firstname: "Aaron".into(),
            lastname: "Sumner".into(),
            email: None,
            phones: None,
        }
    }
}

impl ContactFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn firstname(mut self, firstname: &str) -> Self {
        self.firstname = firstname.into();
        self
    }

    pub fn lastname(mut self, lastname: &str) -> Self {
        self.lastname = lastname.into();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replace the three default phones.
    pub fn phones(mut self, phones: Vec<(&str, PhoneType)>) -> Self {
        self.phones = Some(
            phones
                .into_iter()
                .map(|(number, phone_type)| (number.to_string(), phone_type))
                .collect(),
        );
        self
    }

    pub fn without_phones(self) -> Self {
        self.phones(Vec::new())
    }

    /// Unsaved contact.
    pub fn build(self) -> Contact {
        let email = self.email.unwrap_or_else(next_email);
        let phones = self.phones.unwrap_or_else(|| {
            DEFAULT_PHONE_TYPES
                .iter()
                .map(|phone_type| (next_phone_number(), phone_type.clone()))
                .collect()
        });

        phones.into_iter().fold(
            Contact::new(self.firstname, self.lastname, email),
            |contact, (number, phone_type)| contact.with_phone(number, phone_type),
        )
    }

    /// Validate and store the contact with its phones.
    pub fn create(self, conn: &Connection) -> ContactsResult<Contact> {
        contact_ops::create_contact(conn, self.build())
    }
}

pub fn build_contact() -> Contact {
    ContactFactory::new().build()
}

pub fn create_contact(conn: &Connection) -> ContactsResult<Contact> {
    ContactFactory::new().create(conn)
}

/// Unsaved phone for `contact_id`.
pub fn build_phone(contact_id: Id<Contact>, number: &str, phone_type: PhoneType) -> Phone {
    Phone::new(contact_id, number.to_string(), phone_type)
}

/// Store a phone; with no owner given, a default contact is created for it.
pub fn create_phone(
    conn: &Connection,
    contact_id: Option<Id<Contact>>,
    number: &str,
    phone_type: PhoneType,
) -> ContactsResult<Phone> {
    let contact_id = match contact_id {
        Some(id) => id,
        None => create_contact(conn)?.id,
    };
    phone_ops::create_phone(conn, build_phone(contact_id, number, phone_type))
}
