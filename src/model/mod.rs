pub mod contact;
pub mod ids;
pub mod phone;

pub use contact::{Contact, ContactChanges};
pub use ids::Id;
pub use phone::{Phone, PhoneType};
