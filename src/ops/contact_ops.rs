use std::collections::HashSet;

use chrono::Utc;
use rusqlite::Connection;

use super::{uniqueness_conflict, EMAIL_CONSTRAINT, PHONE_CONSTRAINT};
use crate::db::{contact_repo, phone_repo};
use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactChanges, Id};
use crate::validation::{self, ErrorKind, ValidationErrors};

/// Run every contact rule and collect the violations.
///
/// Names and email must be present, the email must not belong to any other
/// stored contact, and the contact's own phones must not repeat a number.
pub fn validate_contact(conn: &Connection, contact: &Contact) -> ContactsResult<ValidationErrors> {
    tracing::debug!(contact_id = %contact.id, "Validating contact");

    let mut errors = ValidationErrors::new();
    validation::presence(&mut errors, "firstname", &contact.firstname);
    validation::presence(&mut errors, "lastname", &contact.lastname);
    validation::presence(&mut errors, "email", &contact.email);

    if !validation::is_blank(&contact.email)
        && contact_repo::email_taken(conn, &contact.email, contact.id)?
    {
        errors.add("email", ErrorKind::Uniqueness);
    }

    let mut seen = HashSet::new();
    for phone in &contact.phones {
        if !seen.insert(phone.phone.as_str()) {
            errors.add("phones.phone", ErrorKind::Uniqueness);
        }
    }

    Ok(errors)
}

pub fn is_valid(conn: &Connection, contact: &Contact) -> ContactsResult<bool> {
    Ok(validate_contact(conn, contact)?.is_empty())
}

/// Validate and store a new contact together with its phones. Nothing is
/// written unless every rule passes.
pub fn create_contact(conn: &Connection, mut contact: Contact) -> ContactsResult<Contact> {
    let contact_id = contact.id;
    for phone in &mut contact.phones {
        phone.contact_id = contact_id;
    }

    let tx = conn.unchecked_transaction()?;

    let errors = validate_contact(&tx, &contact)?;
    if !errors.is_empty() {
        tracing::warn!(contact_id = %contact.id, %errors, "Rejected contact");
        return Err(ContactsError::Invalid(errors));
    }

    contact_repo::insert(&tx, &contact)
        .map_err(|e| uniqueness_conflict(e, EMAIL_CONSTRAINT, "email"))?;
    for phone in &contact.phones {
        phone_repo::insert(&tx, phone)
            .map_err(|e| uniqueness_conflict(e, PHONE_CONSTRAINT, "phones.phone"))?;
    }

    tx.commit()?;
    tracing::info!(
        contact_id = %contact.id,
        phones = contact.phones.len(),
        "Created contact"
    );
    Ok(contact)
}

/// Apply `changes` to a stored contact, revalidate, and save.
pub fn update_contact(
    conn: &Connection,
    contact_id: Id<Contact>,
    changes: ContactChanges,
) -> ContactsResult<Contact> {
    let tx = conn.unchecked_transaction()?;

    let mut contact = contact_repo::find_by_id(&tx, contact_id)?
        .ok_or_else(|| ContactsError::not_found("Contact", contact_id))?;
    changes.apply(&mut contact);
    contact.updated_at = Utc::now();

    let errors = validate_contact(&tx, &contact)?;
    if !errors.is_empty() {
        tracing::warn!(contact_id = %contact.id, %errors, "Rejected contact update");
        return Err(ContactsError::Invalid(errors));
    }

    contact_repo::update(&tx, &contact)
        .map_err(|e| uniqueness_conflict(e, EMAIL_CONSTRAINT, "email"))?;
    contact.phones = phone_repo::find_by_contact(&tx, contact.id)?;

    tx.commit()?;
    tracing::info!(contact_id = %contact.id, "Updated contact");
    Ok(contact)
}

/// Delete a contact and, through the cascade, every phone it owns.
pub fn delete_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<()> {
    if contact_repo::delete(conn, contact_id)? == 0 {
        return Err(ContactsError::not_found("Contact", contact_id));
    }
    tracing::info!(%contact_id, "Deleted contact");
    Ok(())
}
