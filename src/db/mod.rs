pub mod contact_repo;
pub mod phone_repo;
pub mod schema;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::ffi;

use crate::error::{ContactsError, ContactsResult};

pub(crate) fn timestamp_to_column(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn timestamp_from_column(s: &str) -> ContactsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| ContactsError::Other(format!("Invalid timestamp '{}': {}", s, e)))
}

/// If `err` is a UNIQUE index violation, the constraint description SQLite
/// reported, e.g. `"contacts.email"`.
pub(crate) fn unique_violation(err: &rusqlite::Error) -> Option<&str> {
    match err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            msg.strip_prefix("UNIQUE constraint failed: ")
        }
        _ => None,
    }
}
