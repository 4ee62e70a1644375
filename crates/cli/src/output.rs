//! Semantic text styling and tabular rendering of records.

use console::style;
use keeper_core::{Contact, Note};
use tabled::settings::Style;
use tabled::{Table, Tabled};

const NOT_SPECIFIED: &str = "-";

pub fn info(text: &str) -> String {
    style(text).blue().to_string()
}

pub fn success(text: &str) -> String {
    style(text).green().to_string()
}

pub fn warn(text: &str) -> String {
    style(text).yellow().to_string()
}

pub fn error(text: &str) -> String {
    style(text).red().to_string()
}

pub fn highlight(text: &str) -> String {
    style(text).magenta().to_string()
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
        Self {
            name: contact.name().to_string(),
            phones: if phones.is_empty() { NOT_SPECIFIED.into() } else { phones.join(", ") },
            birthday: contact
                .birthday()
                .map_or_else(|| NOT_SPECIFIED.into(), ToString::to_string),
            email: contact.email().map_or_else(|| NOT_SPECIFIED.into(), ToString::to_string),
            address: contact.address_line().unwrap_or_else(|| NOT_SPECIFIED.into()),
        }
    }
}

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Content")]
    content: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: if note.content().is_empty() {
                NOT_SPECIFIED.into()
            } else {
                note.content().to_string()
            },
            tags: if note.tags().is_empty() { NOT_SPECIFIED.into() } else { note.tags().join(", ") },
        }
    }
}

pub fn contacts_table<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let rows: Vec<ContactRow> = contacts.into_iter().map(ContactRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

pub fn notes_table<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    let rows: Vec<NoteRow> = notes.into_iter().map(NoteRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::fields::{Name, Phone, Title};
    use keeper_core::Content;

    #[test]
    fn contact_row_flattens_phone_list() {
        let mut ann = Contact::new(Name::new("Ann").unwrap());
        ann.add_phone(Phone::new("1234567890").unwrap());
        ann.add_phone(Phone::new("0987654321").unwrap());

        let row = ContactRow::from(&ann);
        assert_eq!(row.phones, "1234567890, 0987654321");
        assert_eq!(row.birthday, "-");
        assert_eq!(row.email, "-");
    }

    #[test]
    fn table_has_header_and_rows() {
        let ann = Contact::new(Name::new("Ann").unwrap());
        let rendered = contacts_table([&ann]);
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Ann"));
    }

    #[test]
    fn note_row_joins_tags() {
        let mut note = Note::new(Title::new("shopping").unwrap(), Content::new("milk").unwrap());
        note.add_tag("food");
        note.add_tag("urgent");

        let row = NoteRow::from(&note);
        assert_eq!(row.tags, "food, urgent");
    }
}
