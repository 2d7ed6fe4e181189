use contacts::model::*;

// ==========================================================================
// CONTACT TESTS
// ==========================================================================

#[test]
fn contact_name_joins_first_and_last() {
    let contact = Contact::new("Jane".into(), "Smith".into(), "jane@example.com".into());
    assert_eq!(contact.name(), "Jane Smith");
}

#[test]
fn contact_name_does_not_trim() {
    let contact = Contact::new(" Jane".into(), "Smith ".into(), "jane@example.com".into());
    assert_eq!(contact.name(), " Jane Smith ");
}

#[test]
fn contact_new_starts_without_phones() {
    let contact = Contact::new("Jane".into(), "Smith".into(), "jane@example.com".into());
    assert!(contact.phones.is_empty());
    assert_eq!(contact.created_at, contact.updated_at);
}

#[test]
fn contact_with_phone_links_owner() {
    let contact = Contact::new("Jane".into(), "Smith".into(), "jane@example.com".into())
        .with_phone("785-555-1234".into(), PhoneType::Home)
        .with_phone("785-555-9876".into(), PhoneType::Mobile);

    assert_eq!(contact.phones.len(), 2);
    assert!(contact.phones.iter().all(|p| p.contact_id == contact.id));
    assert_eq!(contact.phones[1].phone_type, PhoneType::Mobile);
}

#[test]
fn contact_changes_only_touch_given_fields() {
    let mut contact = Contact::new("Jane".into(), "Smith".into(), "jane@example.com".into());
    ContactChanges {
        lastname: Some("Jones".into()),
        ..Default::default()
    }
    .apply(&mut contact);

    assert_eq!(contact.firstname, "Jane");
    assert_eq!(contact.lastname, "Jones");
    assert_eq!(contact.email, "jane@example.com");
}

#[test]
fn contact_ids_are_typed() {
    let contact_id = Id::<Contact>::generate();
    let phone_id = Id::<Phone>::generate();
    assert_ne!(contact_id.value, phone_id.value);
}

// ==========================================================================
// PHONE TYPE TESTS
// ==========================================================================

#[test]
fn phone_type_db_strings_roundtrip() {
    for phone_type in PhoneType::STANDARD {
        assert_eq!(&PhoneType::from_db_str(phone_type.to_db_str()), phone_type);
    }
}

#[test]
fn phone_type_keeps_custom_label() {
    let pager = PhoneType::from_db_str("pager");
    assert_eq!(pager, PhoneType::Other("pager".into()));
    assert_eq!(pager.to_db_str(), "pager");
}

#[test]
fn phone_type_serializes_as_plain_label() {
    assert_eq!(serde_json::to_string(&PhoneType::Mobile).unwrap(), "\"mobile\"");
    let fax = PhoneType::Other("fax".into());
    assert_eq!(serde_json::to_string(&fax).unwrap(), "\"fax\"");
    let back: PhoneType = serde_json::from_str("\"fax\"").unwrap();
    assert_eq!(back, fax);
}

#[test]
fn contact_serde_roundtrip() {
    let contact = Contact::new("Jane".into(), "Smith".into(), "jane@example.com".into())
        .with_phone("785-555-1234".into(), PhoneType::Work);
    let json = serde_json::to_string(&contact).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, contact);
}
