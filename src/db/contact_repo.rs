use rusqlite::{params, Connection};

use super::{timestamp_from_column, timestamp_to_column};
use crate::error::ContactsResult;
use crate::model::{Contact, Id};

const CONTACT_COLUMNS: &str = "id, firstname, lastname, email, created_at, updated_at";

/// Insert the contact row. Phones are written separately by `phone_repo`.
pub fn insert(conn: &Connection, contact: &Contact) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO contacts (id, firstname, lastname, email, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            contact.id.to_column(),
            contact.firstname,
            contact.lastname,
            contact.email,
            timestamp_to_column(contact.created_at),
            timestamp_to_column(contact.updated_at),
        ],
    )?;
    Ok(())
}

/// Returns the number of rows changed (0 when the contact doesn't exist).
pub fn update(conn: &Connection, contact: &Contact) -> ContactsResult<usize> {
    let changed = conn.execute(
        "UPDATE contacts SET firstname = ?1, lastname = ?2, email = ?3, updated_at = ?4
         WHERE id = ?5",
        params![
            contact.firstname,
            contact.lastname,
            contact.email,
            timestamp_to_column(contact.updated_at),
            contact.id.to_column(),
        ],
    )?;
    Ok(changed)
}

/// Delete a contact; its phones go with it through the foreign key cascade.
pub fn delete(conn: &Connection, id: Id<Contact>) -> ContactsResult<usize> {
    let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.to_column()])?;
    Ok(changed)
}

pub fn find_by_id(conn: &Connection, id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"
    ))?;

    let result = stmt.query_row(params![id.to_column()], |row| Ok(row_to_contact(row)));

    match result {
        Ok(contact) => Ok(Some(contact?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_email(conn: &Connection, email: &str) -> ContactsResult<Option<Contact>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts WHERE email = ?1"
    ))?;

    let result = stmt.query_row(params![email], |row| Ok(row_to_contact(row)));

    match result {
        Ok(contact) => Ok(Some(contact?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether a contact other than `except` already uses `email`. Exact,
/// case-sensitive comparison.
pub fn email_taken(conn: &Connection, email: &str, except: Id<Contact>) -> ContactsResult<bool> {
    let taken = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM contacts WHERE email = ?1 AND id != ?2)",
        params![email, except.to_column()],
        |row| row.get::<_, i32>(0),
    )?;
    Ok(taken != 0)
}

/// Contacts whose last name begins with exactly `prefix`, ordered by last
/// name. `substr` keeps the match case-sensitive and free of LIKE wildcards.
pub fn find_by_lastname_prefix(conn: &Connection, prefix: &str) -> ContactsResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts
         WHERE substr(lastname, 1, length(?1)) = ?1
         ORDER BY lastname, rowid"
    ))?;

    let contacts = stmt
        .query_map(params![prefix], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn find_all(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY lastname, firstname, rowid"
    ))?;

    let contacts = stmt
        .query_map([], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn count(conn: &Connection) -> ContactsResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &rusqlite::Row) -> ContactsResult<Contact> {
    let id_str: String = row.get(0)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Contact {
        id: Id::from_column(&id_str)?,
        firstname: row.get(1)?,
        lastname: row.get(2)?,
        email: row.get(3)?,
        phones: Vec::new(),
        created_at: timestamp_from_column(&created_at)?,
        updated_at: timestamp_from_column(&updated_at)?,
    })
}
