use std::time::Duration;

use rusqlite::Connection;

use crate::config::StoreConfig;
use crate::error::ContactsResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// The unique indexes are the final word on email and per-contact phone
/// uniqueness; validation in `ops` only reports collisions earlier.
pub fn initialize(conn: &Connection) -> ContactsResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY NOT NULL,
            firstname TEXT NOT NULL,
            lastname TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS index_contacts_on_email
            ON contacts(email);

        CREATE INDEX IF NOT EXISTS index_contacts_on_lastname
            ON contacts(lastname);

        CREATE TABLE IF NOT EXISTS phones (
            id TEXT PRIMARY KEY NOT NULL,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            phone TEXT NOT NULL,
            phone_type TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS index_phones_on_contact_id_and_phone
            ON phones(contact_id, phone);
        ",
    )?;
    Ok(())
}

/// Open the file-backed store described by `config`, creating its directory
/// and schema as needed.
pub fn open(config: &StoreConfig) -> ContactsResult<Connection> {
    if let Some(dir) = config.db_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let conn = Connection::open(&config.db_path)?;
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
    initialize(&conn)?;
    tracing::debug!(path = %config.db_path.display(), "Opened contact store");
    Ok(conn)
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
