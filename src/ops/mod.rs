pub mod contact_ops;
pub mod phone_ops;

use crate::db::unique_violation;
use crate::error::ContactsError;
use crate::validation::{ErrorKind, ValidationErrors};

/// Constraint names SQLite reports for the unique indexes in `db::schema`.
pub(crate) const EMAIL_CONSTRAINT: &str = "contacts.email";
pub(crate) const PHONE_CONSTRAINT: &str = "phones.contact_id, phones.phone";

/// Turn a unique-index failure on `constraint` into the same field error the
/// validator reports. A concurrent writer can land between our check and our
/// insert; the caller sees a uniqueness violation either way.
pub(crate) fn uniqueness_conflict(
    err: ContactsError,
    constraint: &str,
    field: &str,
) -> ContactsError {
    let hit = match &err {
        ContactsError::Database(db_err) => unique_violation(db_err) == Some(constraint),
        _ => false,
    };
    if !hit {
        return err;
    }

    tracing::warn!(constraint, field, "Unique index rejected write");
    let mut errors = ValidationErrors::new();
    errors.add(field, ErrorKind::Uniqueness);
    ContactsError::Invalid(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{contact_repo, phone_repo, schema};
    use crate::model::{Contact, Id, Phone, PhoneType};

    #[test]
    fn email_index_violation_becomes_uniqueness_error() {
        let conn = schema::test_connection();
        let first = Contact::new("Aaron".into(), "Sumner".into(), "aaron@example.com".into());
        let second = Contact::new("Erin".into(), "Sumner".into(), "aaron@example.com".into());
        contact_repo::insert(&conn, &first).unwrap();

        let raw = contact_repo::insert(&conn, &second).unwrap_err();
        let err = uniqueness_conflict(raw, EMAIL_CONSTRAINT, "email");

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.on("email"), vec![ErrorKind::Uniqueness]);
    }

    #[test]
    fn phone_index_violation_becomes_uniqueness_error() {
        let conn = schema::test_connection();
        let contact = Contact::new("Aaron".into(), "Sumner".into(), "aaron@example.com".into());
        contact_repo::insert(&conn, &contact).unwrap();
        let home = Phone::new(contact.id, "785-555-1234".into(), PhoneType::Home);
        let mobile = Phone::new(contact.id, "785-555-1234".into(), PhoneType::Mobile);
        phone_repo::insert(&conn, &home).unwrap();

        let raw = phone_repo::insert(&conn, &mobile).unwrap_err();
        let err = uniqueness_conflict(raw, PHONE_CONSTRAINT, "phone");

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.on("phone"), vec![ErrorKind::Uniqueness]);
    }

    #[test]
    fn other_constraints_pass_through() {
        let conn = schema::test_connection();
        let orphan = Phone::new(Id::generate(), "785-555-1234".into(), PhoneType::Home);

        // No such contact: foreign key failure, not a uniqueness conflict.
        let raw = phone_repo::insert(&conn, &orphan).unwrap_err();
        let err = uniqueness_conflict(raw, PHONE_CONSTRAINT, "phone");
        assert!(matches!(err, ContactsError::Database(_)));
    }

    #[test]
    fn non_database_errors_pass_through() {
        let raw = ContactsError::Other("boom".into());
        let err = uniqueness_conflict(raw, EMAIL_CONSTRAINT, "email");
        assert!(matches!(err, ContactsError::Other(_)));
    }
}
