use keeper_core::fields::{Birthday, Content, Email, Name, Phone, Title};
use keeper_core::{Book, Contact, Note};
use tempfile::tempdir;

#[test]
fn missing_file_loads_an_empty_book() {
    let tmp = tempdir().unwrap();
    let book = Book::load(&tmp.path().join("absent.json")).unwrap();
    assert!(book.contacts.is_empty());
    assert!(book.notes.is_empty());
}

#[test]
fn save_then_load_round_trips_both_stores() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data/keeper.json");

    let mut book = Book::default();

    let mut ann = Contact::new(Name::new("Ann").unwrap());
    ann.add_phone(Phone::new("1234567890").unwrap());
    ann.set_birthday(Birthday::new("01.01.2000").unwrap());
    ann.set_email(Email::new("ann@example.com").unwrap());
    book.contacts.add(ann);
    book.contacts.add(Contact::new(Name::new("Bob").unwrap()));

    let mut note = Note::new(
        Title::new("Shopping").unwrap(),
        Content::new("milk and bread").unwrap(),
    );
    note.add_tag("food");
    note.add_tag("urgent");
    book.notes.add(note);

    book.save(&path).unwrap();
    let reloaded = Book::load(&path).unwrap();

    let names: Vec<_> = reloaded.contacts.iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, ["Ann", "Bob"]);

    let ann = reloaded.contacts.find("Ann").unwrap();
    assert_eq!(ann.phones().len(), 1);
    assert_eq!(ann.phones()[0].as_str(), "1234567890");
    assert_eq!(ann.birthday().unwrap().to_string(), "01.01.2000");
    assert_eq!(ann.email().unwrap().as_str(), "ann@example.com");

    let note = reloaded.notes.find("Shopping").unwrap();
    assert_eq!(note.content().as_str(), "milk and bread");
    assert_eq!(note.tags(), ["food", "urgent"]);
}

#[test]
fn save_overwrites_previous_state() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("keeper.json");

    let mut book = Book::default();
    book.contacts.add(Contact::new(Name::new("Ann").unwrap()));
    book.save(&path).unwrap();

    book.contacts.delete("Ann").unwrap();
    book.contacts.add(Contact::new(Name::new("Bob").unwrap()));
    book.save(&path).unwrap();

    let reloaded = Book::load(&path).unwrap();
    assert!(reloaded.contacts.find("Ann").is_none());
    assert!(reloaded.contacts.find("Bob").is_some());
}

#[test]
fn add_contact_scenario() {
    // add Ann with one phone and a birthday, then look her up
    let mut book = Book::default();
    let mut ann = Contact::new(Name::new("Ann").unwrap());
    ann.add_phone(Phone::new("1234567890").unwrap());
    ann.set_birthday(Birthday::new("01.01.2000").unwrap());
    book.contacts.add(ann);

    let found = book.contacts.find("Ann").unwrap();
    assert_eq!(found.phones().len(), 1);
    assert_eq!(found.birthday().unwrap().to_string(), "01.01.2000");
}
