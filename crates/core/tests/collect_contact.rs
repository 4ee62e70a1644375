//! Drives the field collector the way the CLI contact handler does:
//! a flat contact spec with a nested address group, assembled into a
//! stored record only when the collection completes.

use std::collections::VecDeque;

use keeper_core::collector::{collect, FieldSpec, PromptError, Prompter};
use keeper_core::fields::{self, Birthday, Email, Name, Phone};
use keeper_core::{Address, Contact, ContactStore};

struct Script {
    answers: VecDeque<Option<String>>,
    warnings: Vec<String>,
}

impl Script {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| Some((*a).to_string())).collect(),
            warnings: Vec::new(),
        }
    }
}

impl Prompter for Script {
    fn prompt(&mut self, _label: &str, _default: Option<&str>) -> Result<String, PromptError> {
        match self.answers.pop_front() {
            Some(Some(answer)) => Ok(answer),
            _ => Err(PromptError::Cancelled),
        }
    }

    fn warn(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }
}

fn contact_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::leaf("Name").required().validator(Name::validate),
        FieldSpec::leaf("Phone number").validator(Phone::validate),
        FieldSpec::leaf("Date of birth").validator(Birthday::validate),
        FieldSpec::leaf("Email").validator(Email::validate),
        FieldSpec::group(
            "Address",
            vec![
                FieldSpec::leaf("Street"),
                FieldSpec::leaf("City").validator(fields::validate_capitalized),
                FieldSpec::leaf("State").validator(fields::validate_capitalized),
                FieldSpec::leaf("Zip code").validator(fields::validate_zip),
                FieldSpec::leaf("Country").validator(fields::validate_capitalized),
            ],
        ),
    ]
}

#[test]
fn full_contact_collection_builds_a_record() {
    let mut script = Script::new(&[
        "Ann",
        "1234567890",
        "01.01.2000",
        "ann@example.com",
        "1 Main St",
        "Kyiv",
        "Kyivska",
        "04210",
        "Ukraine",
    ]);

    let values = collect(&contact_specs(), &mut script).unwrap();
    assert_eq!(values.len(), 9);
    assert!(script.warnings.is_empty());

    let mut contact = Contact::new(Name::new(values[0].as_deref().unwrap()).unwrap());
    contact.add_phone(Phone::new(values[1].as_deref().unwrap()).unwrap());
    contact.set_birthday(Birthday::new(values[2].as_deref().unwrap()).unwrap());
    contact.set_email(Email::new(values[3].as_deref().unwrap()).unwrap());
    contact.set_address(
        Address::new(
            values[4].as_deref().unwrap(),
            values[5].as_deref().unwrap(),
            values[6].as_deref().unwrap(),
            values[7].as_deref().unwrap(),
            values[8].as_deref().unwrap(),
        )
        .unwrap(),
    );

    let mut store = ContactStore::new();
    store.add(contact);

    let ann = store.find("Ann").unwrap();
    assert_eq!(ann.birthday().unwrap().to_string(), "01.01.2000");
    assert_eq!(ann.address_line().unwrap(), "1 Main St, Kyiv, Kyivska 04210, Ukraine");
}

#[test]
fn retries_inside_the_address_group() {
    let mut script = Script::new(&[
        "Ann", "", "", "", "1 Main St", "kyiv", "Kyiv", "Kyivska", "042x0", "04210", "Ukraine",
    ]);

    let values = collect(&contact_specs(), &mut script).unwrap();
    assert_eq!(values.len(), 9);
    assert_eq!(values[5].as_deref(), Some("Kyiv"));
    assert_eq!(values[7].as_deref(), Some("04210"));
    assert_eq!(script.warnings.len(), 2);
}

#[test]
fn cancellation_leaves_the_store_untouched() {
    let mut store = ContactStore::new();
    let mut script = Script::new(&["Ann", "1234567890"]);

    let result = collect(&contact_specs(), &mut script);
    assert!(matches!(result, Err(PromptError::Cancelled)));
    // the caller applies nothing after a cancelled collection
    assert!(store.is_empty());
    store.add(Contact::new(Name::new("Other").unwrap()));
    assert_eq!(store.len(), 1);
}
