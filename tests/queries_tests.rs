use contacts::db::*;
use contacts::factory::{self, ContactFactory};
use contacts::model::*;
use contacts::queries::*;

fn setup() -> (rusqlite::Connection, Contact, Contact, Contact) {
    let conn = schema::test_connection();
    let smith = ContactFactory::new().lastname("Smith").create(&conn).unwrap();
    let jones = ContactFactory::new().lastname("Jones").create(&conn).unwrap();
    let johnson = ContactFactory::new().lastname("Johnson").create(&conn).unwrap();
    (conn, smith, jones, johnson)
}

// ==========================================================================
// FILTER LAST NAME BY LETTER
// ==========================================================================

#[test]
fn by_letter_returns_sorted_matches() {
    let (conn, _, jones, johnson) = setup();
    let found = contact_queries::by_letter(&conn, "J").unwrap();
    assert_eq!(found, vec![johnson, jones]);
}

#[test]
fn by_letter_omits_non_matching() {
    let (conn, smith, _, _) = setup();
    let found = contact_queries::by_letter(&conn, "J").unwrap();
    assert!(!found.iter().any(|c| c.id == smith.id));
}

#[test]
fn by_letter_is_case_sensitive() {
    let (conn, _, _, _) = setup();
    assert!(contact_queries::by_letter(&conn, "j").unwrap().is_empty());
}

#[test]
fn by_letter_with_no_matches_is_empty() {
    let (conn, _, _, _) = setup();
    assert!(contact_queries::by_letter(&conn, "Q").unwrap().is_empty());
}

#[test]
fn by_letter_accepts_longer_prefix() {
    let (conn, _, jones, _) = setup();
    let found = contact_queries::by_letter(&conn, "Jon").unwrap();
    assert_eq!(found, vec![jones]);
}

#[test]
fn by_letter_keeps_insertion_order_for_equal_lastnames() {
    let conn = schema::test_connection();
    let first = ContactFactory::new().firstname("Zoe").lastname("Jones").create(&conn).unwrap();
    let second = ContactFactory::new().firstname("Amy").lastname("Jones").create(&conn).unwrap();

    let ids: Vec<Id<Contact>> = contact_queries::by_letter(&conn, "J")
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn by_letter_loads_phones() {
    let (conn, _, _, johnson) = setup();
    let found = contact_queries::by_letter(&conn, "Joh").unwrap();
    assert_eq!(found[0].phones, johnson.phones);
    assert_eq!(found[0].phones.len(), 3);
}

// ==========================================================================
// LOOKUPS
// ==========================================================================

#[test]
fn get_contact_includes_phones() {
    let (conn, smith, _, _) = setup();
    let found = contact_queries::get_contact(&conn, smith.id).unwrap().unwrap();
    assert_eq!(found.name(), "Aaron Smith");
    assert_eq!(found.phones.len(), 3);
}

#[test]
fn get_contact_missing_is_none() {
    let (conn, _, _, _) = setup();
    assert!(contact_queries::get_contact(&conn, Id::generate()).unwrap().is_none());
}

#[test]
fn find_by_email_matches_exactly() {
    let (conn, smith, _, _) = setup();
    let found = contact_queries::find_by_email(&conn, &smith.email).unwrap().unwrap();
    assert_eq!(found.id, smith.id);
    assert!(contact_queries::find_by_email(&conn, "nobody@example.com").unwrap().is_none());
}

#[test]
fn all_contacts_sorted_by_lastname() {
    let (conn, _, _, _) = setup();
    let names: Vec<String> = contact_queries::all_contacts(&conn)
        .unwrap()
        .into_iter()
        .map(|c| c.lastname)
        .collect();
    assert_eq!(names, vec!["Johnson", "Jones", "Smith"]);
    assert_eq!(contact_queries::count_contacts(&conn).unwrap(), 3);
}

#[test]
fn phones_for_lists_in_insertion_order() {
    let conn = schema::test_connection();
    let contact = factory::create_contact(&conn).unwrap();
    let phones = contact_queries::phones_for(&conn, contact.id).unwrap();
    let types: Vec<PhoneType> = phones.iter().map(|p| p.phone_type.clone()).collect();
    assert_eq!(types, vec![PhoneType::Home, PhoneType::Work, PhoneType::Mobile]);
}

#[test]
fn contact_with_custom_phone_label_still_loads() {
    let conn = schema::test_connection();
    let contact = factory::create_contact(&conn).unwrap();
    conn.execute(
        "UPDATE phones SET phone_type = 'fax' WHERE id = ?1",
        [contact.phones[2].id.value.to_string()],
    )
    .unwrap();

    let found = contact_queries::get_contact(&conn, contact.id).unwrap().unwrap();
    assert_eq!(found.phones.len(), 3);
    assert_eq!(found.phones[2].phone_type, PhoneType::Other("fax".into()));
}
