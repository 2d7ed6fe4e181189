pub mod config;
pub mod db;
pub mod error;
pub mod factory;
pub mod model;
pub mod ops;
pub mod queries;
pub mod validation;

pub use error::{ContactsError, ContactsResult};
