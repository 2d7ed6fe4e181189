use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

impl ContactsError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        ContactsError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// The field-scoped violations, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ContactsError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Errors raised while loading a [`crate::config::StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ContactsResult<T> = Result<T, ContactsError>;
