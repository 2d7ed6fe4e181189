use std::fmt;

use serde::Serialize;

use crate::error::{ContactsError, ContactsResult};

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required value is empty, whitespace-only, or absent.
    Presence,
    /// Value collides with an existing record within its scope.
    Uniqueness,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Presence => "can't be blank",
            ErrorKind::Uniqueness => "has already been taken",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
}

impl FieldError {
    /// e.g. "Email has already been taken", "Phones phone has already been taken".
    pub fn full_message(&self) -> String {
        let humanized = self.field.replace(['.', '_'], " ");
        let mut chars = humanized.chars();
        let attribute = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} {}", attribute, self.kind)
    }
}

/// Violations collected over one validation pass. Every failed rule is kept,
/// so several blank fields are all reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, kind: ErrorKind) {
        let error = FieldError {
            field: field.to_string(),
            kind,
        };
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        for error in other.errors {
            self.add(&error.field, error.kind);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Kinds of violation recorded against `field`.
    pub fn on(&self, field: &str) -> Vec<ErrorKind> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.kind)
            .collect()
    }

    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.on(field).iter().map(ErrorKind::message).collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::full_message).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise `ContactsError::Invalid`.
    pub fn into_result(self) -> ContactsResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ContactsError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

/// True when a value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Records a presence violation on `field` if `value` is blank.
pub fn presence(errors: &mut ValidationErrors, field: &str, value: &str) {
    if is_blank(value) {
        errors.add(field, ErrorKind::Presence);
    }
}
