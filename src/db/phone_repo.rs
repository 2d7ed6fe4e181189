use rusqlite::{params, Connection};

use super::{timestamp_from_column, timestamp_to_column};
use crate::error::ContactsResult;
use crate::model::{Contact, Id, Phone, PhoneType};

const PHONE_COLUMNS: &str = "id, contact_id, phone, phone_type, created_at, updated_at";

pub fn insert(conn: &Connection, phone: &Phone) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO phones (id, contact_id, phone, phone_type, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            phone.id.to_column(),
            phone.contact_id.to_column(),
            phone.phone,
            phone.phone_type.to_db_str(),
            timestamp_to_column(phone.created_at),
            timestamp_to_column(phone.updated_at),
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, phone: &Phone) -> ContactsResult<usize> {
    let changed = conn.execute(
        "UPDATE phones SET phone = ?1, phone_type = ?2, updated_at = ?3 WHERE id = ?4",
        params![
            phone.phone,
            phone.phone_type.to_db_str(),
            timestamp_to_column(phone.updated_at),
            phone.id.to_column(),
        ],
    )?;
    Ok(changed)
}

pub fn delete(conn: &Connection, id: Id<Phone>) -> ContactsResult<usize> {
    let changed = conn.execute("DELETE FROM phones WHERE id = ?1", params![id.to_column()])?;
    Ok(changed)
}

pub fn find_by_id(conn: &Connection, id: Id<Phone>) -> ContactsResult<Option<Phone>> {
    let mut stmt = conn.prepare(&format!("SELECT {PHONE_COLUMNS} FROM phones WHERE id = ?1"))?;

    let result = stmt.query_row(params![id.to_column()], |row| Ok(row_to_phone(row)));

    match result {
        Ok(phone) => Ok(Some(phone?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// A contact's phones in the order they were added.
pub fn find_by_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Vec<Phone>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PHONE_COLUMNS} FROM phones WHERE contact_id = ?1 ORDER BY rowid"
    ))?;

    let phones = stmt
        .query_map(params![contact_id.to_column()], |row| Ok(row_to_phone(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(phones)
}

/// Whether `contact_id` already has a phone other than `except` with exactly
/// this number.
pub fn number_taken(
    conn: &Connection,
    contact_id: Id<Contact>,
    number: &str,
    except: Id<Phone>,
) -> ContactsResult<bool> {
    let taken = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM phones WHERE contact_id = ?1 AND phone = ?2 AND id != ?3)",
        params![contact_id.to_column(), number, except.to_column()],
        |row| row.get::<_, i32>(0),
    )?;
    Ok(taken != 0)
}

pub fn count_by_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<usize> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM phones WHERE contact_id = ?1",
        params![contact_id.to_column()],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}

fn row_to_phone(row: &rusqlite::Row) -> ContactsResult<Phone> {
    let id_str: String = row.get(0)?;
    let contact_id_str: String = row.get(1)?;
    let phone_type_str: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Phone {
        id: Id::from_column(&id_str)?,
        contact_id: Id::from_column(&contact_id_str)?,
        phone: row.get(2)?,
        phone_type: PhoneType::from_db_str(&phone_type_str),
        created_at: timestamp_from_column(&created_at)?,
        updated_at: timestamp_from_column(&updated_at)?,
    })
}
