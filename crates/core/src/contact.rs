//! Contact records and the keyed contact store.

use std::collections::HashMap;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecordKind, StoreError};
use crate::fields::{Address, Birthday, Email, Name, Phone};

/// A single contact. The name is the identity used as the store key;
/// renaming goes through [`ContactStore::rename`], never in-place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    email: Option<Email>,
    address: Option<Address>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replace `old` with `new` wherever it appears. Returns false when the
    /// old number is not recorded.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> bool {
        let mut found = false;
        for phone in &mut self.phones {
            if phone.as_str() == old {
                *phone = new.clone();
                found = true;
            }
        }
        found
    }

    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn remove_email(&mut self) {
        self.email = None;
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// One-line rendering of the address, used by search and tables.
    pub fn address_line(&self) -> Option<String> {
        self.address.as_ref().map(ToString::to_string)
    }

    fn set_name(&mut self, name: Name) {
        self.name = name;
    }
}

/// Keyed contact container. Iteration order is insertion order; no two
/// live records share a key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Contact>", into = "Vec<Contact>")]
pub struct ContactStore {
    order: Vec<String>,
    records: HashMap<String, Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert under the contact's name. An existing record under the same
    /// key is silently replaced; callers check existence first when
    /// "already exists" semantics are wanted.
    pub fn add(&mut self, contact: Contact) {
        let key = contact.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        debug!(name = %key, "contact stored");
        self.records.insert(key, contact);
    }

    /// Exact, case-sensitive lookup (unlike [`ContactStore::search`],
    /// which is case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, StoreError> {
        let contact = self
            .records
            .remove(name)
            .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name))?;
        self.order.retain(|k| k != name);
        debug!(name, "contact deleted");
        Ok(contact)
    }

    /// Remove the record under `old` and reinsert it under `new`, keeping
    /// its position. Fails without touching anything when `old` is absent
    /// or `new` is already taken.
    pub fn rename(&mut self, old: &str, new: Name) -> Result<(), StoreError> {
        if !self.records.contains_key(old) {
            return Err(StoreError::not_found(RecordKind::Contact, old));
        }
        if self.records.contains_key(new.as_str()) {
            return Err(StoreError::duplicate(RecordKind::Contact, new.as_str()));
        }
        let mut contact = self.records.remove(old).expect("checked above");
        let new_key = new.as_str().to_string();
        contact.set_name(new);
        for key in &mut self.order {
            if key == old {
                *key = new_key.clone();
            }
        }
        self.records.insert(new_key, contact);
        Ok(())
    }

    /// Case-insensitive substring match over name, email and the rendered
    /// address line, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|c| {
                c.name().as_str().to_lowercase().contains(&needle)
                    || c.email()
                        .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
                    || c.address_line()
                        .is_some_and(|a| a.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|k| self.records.get(k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Upcoming birthdays within `[start_offset, start_offset + window]`
    /// days from today, see [`ContactStore::upcoming_birthdays_from`].
    pub fn upcoming_birthdays(&self, window: i64, start_offset: i64) -> Vec<(String, NaiveDate)> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window, start_offset)
    }

    /// For each contact with a birthday, take this year's occurrence of its
    /// month/day (next year's when it already passed) and include the
    /// contact iff `start_offset <= days_to <= start_offset + window`,
    /// inclusive on both ends. The returned date is the congratulation
    /// date: occurrences landing on Saturday or Sunday roll forward to the
    /// following Monday.
    ///
    /// Feb-29 birthdays resolve to Mar 1 in non-leap target years.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window: i64,
        start_offset: i64,
    ) -> Vec<(String, NaiveDate)> {
        let mut upcoming = Vec::new();
        for contact in self.iter() {
            let Some(birthday) = contact.birthday() else {
                continue;
            };
            let birth = birthday.date();
            let mut occurrence = occurrence_in(today.year(), birth);
            if occurrence < today {
                occurrence = occurrence_in(today.year() + 1, birth);
            }
            let days_to = (occurrence - today).num_days();
            if days_to < start_offset || days_to > start_offset + window {
                continue;
            }
            upcoming.push((contact.name().as_str().to_string(), congratulation_date(occurrence)));
        }
        upcoming
    }
}

impl From<Vec<Contact>> for ContactStore {
    fn from(contacts: Vec<Contact>) -> Self {
        let mut store = Self::new();
        for contact in contacts {
            store.add(contact);
        }
        store
    }
}

impl From<ContactStore> for Vec<Contact> {
    fn from(store: ContactStore) -> Self {
        store.order.iter().filter_map(|k| store.records.get(k).cloned()).collect()
    }
}

/// This year's occurrence of a birth date. Feb 29 falls back to Mar 1 when
/// the target year is not a leap year.
fn occurrence_in(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 always exists"))
}

/// Weekend occurrences are congratulated on the following Monday.
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let weekday = i64::from(occurrence.weekday().num_days_from_monday());
    if weekday >= 5 {
        occurrence + Duration::days(7 - weekday)
    } else {
        occurrence
    }
}
