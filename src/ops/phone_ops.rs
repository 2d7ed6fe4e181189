use chrono::Utc;
use rusqlite::Connection;

use super::{uniqueness_conflict, PHONE_CONSTRAINT};
use crate::db::{contact_repo, phone_repo};
use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Id, Phone, PhoneType};
use crate::validation::{ErrorKind, ValidationErrors};

/// A number may appear once per contact. Other contacts holding the same
/// number don't matter.
pub fn validate_phone(conn: &Connection, phone: &Phone) -> ContactsResult<ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if phone_repo::number_taken(conn, phone.contact_id, &phone.phone, phone.id)? {
        errors.add("phone", ErrorKind::Uniqueness);
    }
    Ok(errors)
}

pub fn is_valid(conn: &Connection, phone: &Phone) -> ContactsResult<bool> {
    Ok(validate_phone(conn, phone)?.is_empty())
}

pub fn add_phone(
    conn: &Connection,
    contact_id: Id<Contact>,
    number: &str,
    phone_type: PhoneType,
) -> ContactsResult<Phone> {
    create_phone(conn, Phone::new(contact_id, number.to_string(), phone_type))
}

/// Validate and store a built phone for an existing contact.
pub fn create_phone(conn: &Connection, phone: Phone) -> ContactsResult<Phone> {
    let tx = conn.unchecked_transaction()?;
    ensure_contact_exists(&tx, phone.contact_id)?;

    let errors = validate_phone(&tx, &phone)?;
    if !errors.is_empty() {
        tracing::warn!(contact_id = %phone.contact_id, %errors, "Rejected phone");
        return Err(ContactsError::Invalid(errors));
    }

    phone_repo::insert(&tx, &phone)
        .map_err(|e| uniqueness_conflict(e, PHONE_CONSTRAINT, "phone"))?;

    tx.commit()?;
    tracing::info!(phone_id = %phone.id, contact_id = %phone.contact_id, "Added phone");
    Ok(phone)
}

pub fn update_phone(
    conn: &Connection,
    phone_id: Id<Phone>,
    number: &str,
    phone_type: PhoneType,
) -> ContactsResult<Phone> {
    let tx = conn.unchecked_transaction()?;

    let mut phone = phone_repo::find_by_id(&tx, phone_id)?
        .ok_or_else(|| ContactsError::not_found("Phone", phone_id))?;
    phone.phone = number.to_string();
    phone.phone_type = phone_type;
    phone.updated_at = Utc::now();

    let errors = validate_phone(&tx, &phone)?;
    if !errors.is_empty() {
        tracing::warn!(%phone_id, %errors, "Rejected phone update");
        return Err(ContactsError::Invalid(errors));
    }

    phone_repo::update(&tx, &phone)
        .map_err(|e| uniqueness_conflict(e, PHONE_CONSTRAINT, "phone"))?;

    tx.commit()?;
    tracing::info!(%phone_id, "Updated phone");
    Ok(phone)
}

pub fn remove_phone(conn: &Connection, phone_id: Id<Phone>) -> ContactsResult<()> {
    if phone_repo::delete(conn, phone_id)? == 0 {
        return Err(ContactsError::not_found("Phone", phone_id));
    }
    tracing::info!(%phone_id, "Removed phone");
    Ok(())
}

fn ensure_contact_exists(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<()> {
    contact_repo::find_by_id(conn, contact_id)?
        .ok_or_else(|| ContactsError::not_found("Contact", contact_id))?;
    Ok(())
}
