use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::error::{ContactsError, ContactsResult};

/// Identifier tagged with the entity it belongs to, so a `Id<Phone>` can
/// never be passed where a `Id<Contact>` is expected.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: Uuid,
    #[serde(skip)]
    _entity: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _entity: PhantomData,
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self::new(Uuid::parse_str(s)?))
    }

    /// Parse an id read back from a TEXT column.
    pub(crate) fn from_column(s: &str) -> ContactsResult<Self> {
        Self::parse(s).map_err(|e| ContactsError::Other(format!("Invalid UUID: {}", e)))
    }

    pub(crate) fn to_column(self) -> String {
        self.value.to_string()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(Id::<Entity>::generate(), Id::<Entity>::generate());
    }

    #[test]
    fn column_text_parses_back() {
        let id = Id::<Entity>::generate();
        let parsed = Id::<Entity>::from_column(&id.to_column()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn garbage_column_is_an_error() {
        let err = Id::<Entity>::from_column("not-a-uuid").unwrap_err();
        assert!(err.to_string().starts_with("Invalid UUID"));
    }

    #[test]
    fn serializes_as_bare_uuid_string() {
        let id = Id::<Entity>::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.value));
        let back: Id<Entity> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
