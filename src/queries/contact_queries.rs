use rusqlite::Connection;

use crate::db::{contact_repo, phone_repo};
use crate::error::ContactsResult;
use crate::model::{Contact, Id, Phone};

/// Contacts whose last name starts with `letter` (any prefix works), sorted
/// by last name. Case-sensitive; no match gives an empty list.
pub fn by_letter(conn: &Connection, letter: &str) -> ContactsResult<Vec<Contact>> {
    let contacts = contact_repo::find_by_lastname_prefix(conn, letter)?;
    with_phones(conn, contacts)
}

pub fn get_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    match contact_repo::find_by_id(conn, contact_id)? {
        Some(mut contact) => {
            contact.phones = phone_repo::find_by_contact(conn, contact.id)?;
            Ok(Some(contact))
        }
        None => Ok(None),
    }
}

pub fn find_by_email(conn: &Connection, email: &str) -> ContactsResult<Option<Contact>> {
    match contact_repo::find_by_email(conn, email)? {
        Some(mut contact) => {
            contact.phones = phone_repo::find_by_contact(conn, contact.id)?;
            Ok(Some(contact))
        }
        None => Ok(None),
    }
}

/// Every contact, by last name then first name.
pub fn all_contacts(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    let contacts = contact_repo::find_all(conn)?;
    with_phones(conn, contacts)
}

pub fn count_contacts(conn: &Connection) -> ContactsResult<usize> {
    contact_repo::count(conn)
}

pub fn phones_for(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Vec<Phone>> {
    phone_repo::find_by_contact(conn, contact_id)
}

pub fn count_phones(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<usize> {
    phone_repo::count_by_contact(conn, contact_id)
}

fn with_phones(conn: &Connection, mut contacts: Vec<Contact>) -> ContactsResult<Vec<Contact>> {
    for contact in &mut contacts {
        contact.phones = phone_repo::find_by_contact(conn, contact.id)?;
    }
    Ok(contacts)
}
