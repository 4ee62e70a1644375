//! Contact commands.

use chrono::Local;
use keeper_core::collector::{collect, FieldSpec, Prompter};
use keeper_core::error::RecordKind;
use keeper_core::fields::{self, BIRTHDAY_FORMAT};
use keeper_core::period::{self, PeriodRef, PeriodUnit};
use keeper_core::{suggest, Address, Birthday, Contact, ContactStore, Email, Name, Phone, StoreError};
use tracing::debug;

use super::{interrupted, render, CommandError};
use crate::output;

pub const COMMANDS: &[&str] = &[
    "add-contact",
    "edit-contact",
    "rename-contact",
    "delete-contact",
    "phone",
    "add-phone",
    "remove-phone",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "add-email",
    "edit-email",
    "show-email",
    "delete-email",
    "add-address",
    "edit-address",
    "contacts",
    "search-contacts",
];

type CmdResult = Result<String, CommandError>;

pub fn handle(
    store: &mut ContactStore,
    command: &str,
    args: &[String],
    prompter: &mut dyn Prompter,
) -> String {
    debug!(command, "contact command");
    let result = match command {
        "add-contact" => add_contact(store, prompter),
        "edit-contact" => edit_contact(store, args),
        "rename-contact" => rename_contact(store, args),
        "delete-contact" => delete_contact(store, args),
        "phone" => get_phones(store, args),
        "add-phone" => add_phone(store, args),
        "remove-phone" => remove_phone(store, args),
        "add-birthday" => add_birthday(store, args),
        "show-birthday" => show_birthday(store, args),
        "birthdays" => birthdays(store, args),
        "add-email" | "edit-email" => set_email(store, args),
        "show-email" => show_email(store, args),
        "delete-email" => delete_email(store, args),
        "add-address" => set_address(store, args, prompter, "add-address NAME", "added"),
        "edit-address" => set_address(store, args, prompter, "edit-address NAME", "updated"),
        "contacts" => all_contacts(store),
        "search-contacts" => search_contacts(store, args),
        _ => Ok(output::error("Invalid command.")),
    };
    render(result)
}

fn contact_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::leaf("Name").required().validator(Name::validate),
        FieldSpec::leaf("Phone number").validator(Phone::validate),
        FieldSpec::leaf("Date of birth").validator(Birthday::validate),
        FieldSpec::leaf("Email").validator(Email::validate),
        FieldSpec::group("Address", address_specs(false, None)),
    ]
}

fn address_specs(required: bool, current: Option<&Address>) -> Vec<FieldSpec> {
    let mut street = FieldSpec::leaf("Street");
    let mut city = FieldSpec::leaf("City").validator(fields::validate_capitalized);
    let mut state = FieldSpec::leaf("State").validator(fields::validate_capitalized);
    let mut zip = FieldSpec::leaf("Zip code").validator(fields::validate_zip);
    let mut country = FieldSpec::leaf("Country").validator(fields::validate_capitalized);
    if required {
        street = street.required();
        city = city.required();
        state = state.required();
        zip = zip.required();
        country = country.required();
    }
    if let Some(address) = current {
        street = street.default_value(address.street.as_str());
        city = city.default_value(address.city.as_str());
        state = state.default_value(address.state.as_str());
        zip = zip.default_value(address.zip.as_str());
        country = country.default_value(address.country.as_str());
    }
    vec![street, city, state, zip, country]
}

/// Interactive add. An existing contact is updated with whatever fields
/// were provided rather than rejected.
fn add_contact(store: &mut ContactStore, prompter: &mut dyn Prompter) -> CmdResult {
    let values =
        collect(&contact_specs(), prompter).map_err(interrupted("Contact adding"))?;
    let [name, phone, birthday, email, street, city, state, zip, country]: [Option<String>; 9] =
        values.try_into().expect("contact spec has nine leaves");
    let name = name.expect("name field is required");

    let address = match (&street, &city, &state, &zip, &country) {
        (Some(street), Some(city), Some(state), Some(zip), Some(country)) => {
            Some(Address::new(street, city, state, zip, country)?)
        }
        _ => None,
    };

    if let Some(existing) = store.find_mut(&name) {
        if let Some(raw) = phone {
            existing.add_phone(Phone::new(&raw)?);
        }
        if let Some(raw) = birthday {
            existing.set_birthday(Birthday::new(&raw)?);
        }
        if let Some(raw) = email {
            existing.set_email(Email::new(&raw)?);
        }
        if let Some(address) = address {
            existing.set_address(address);
        }
        return Ok(output::success(&format!("Contact {name} updated.")));
    }

    let mut contact = Contact::new(Name::new(&name)?);
    if let Some(raw) = phone {
        contact.add_phone(Phone::new(&raw)?);
    }
    if let Some(raw) = birthday {
        contact.set_birthday(Birthday::new(&raw)?);
    }
    if let Some(raw) = email {
        contact.set_email(Email::new(&raw)?);
    }
    if let Some(address) = address {
        contact.set_address(address);
    }
    store.add(contact);
    Ok(output::success(&format!("Contact {name} added.")))
}

fn edit_contact(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::Usage("edit-contact NAME OLD_PHONE NEW_PHONE"));
    };
    let new_phone = Phone::new(new_phone)?;
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    if !contact.edit_phone(old_phone, new_phone) {
        return Ok(output::warn("Phone not found."));
    }
    Ok(output::success(&format!("Contact {name} phone changed.")))
}

fn rename_contact(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [old, new] = args else {
        return Err(CommandError::Usage("rename-contact OLD_NAME NEW_NAME"));
    };
    let new_name = Name::new(new)?;
    store.rename(old, new_name)?;
    Ok(output::success(&format!("Contact {old} renamed to {new}.")))
}

fn delete_contact(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage("delete-contact NAME"));
    };
    store.delete(name)?;
    Ok(output::success(&format!("Contact {name} deleted.")))
}

fn get_phones(store: &ContactStore, args: &[String]) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage("phone NAME"));
    };
    let contact = store
        .find(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    if contact.phones().is_empty() {
        return Ok(output::warn("No phones recorded."));
    }
    let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
    Ok(output::highlight(&phones.join("; ")))
}

fn add_phone(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name, phone] = args else {
        return Err(CommandError::Usage("add-phone NAME PHONE"));
    };
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    if contact.find_phone(phone).is_some() {
        return Ok(output::warn(&format!("Contact {name} already has phone {phone}.")));
    }
    contact.add_phone(Phone::new(phone)?);
    Ok(output::success(&format!("Contact {name} phone added.")))
}

fn remove_phone(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name, phone] = args else {
        return Err(CommandError::Usage("remove-phone NAME PHONE"));
    };
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    if !contact.remove_phone(phone) {
        return Ok(output::warn("Phone not found."));
    }
    Ok(output::success(&format!("Contact {name} phone removed.")))
}

fn add_birthday(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name, birthday] = args else {
        return Err(CommandError::Usage("add-birthday NAME DD.MM.YYYY"));
    };
    let birthday = Birthday::new(birthday)?;
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    contact.set_birthday(birthday);
    Ok(output::success(&format!("Contact {name} birthday added.")))
}

fn show_birthday(store: &ContactStore, args: &[String]) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage("show-birthday NAME"));
    };
    let contact = store
        .find(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    match contact.birthday() {
        Some(birthday) => Ok(output::highlight(&birthday.to_string())),
        None => Ok(output::warn("Birthday not specified.")),
    }
}

fn birthdays(store: &ContactStore, args: &[String]) -> CmdResult {
    const USAGE: &str = "birthdays DAYS | birthdays this|next week|month";
    let (offset, window) = match args {
        [days] => {
            let days: i64 = days.parse().map_err(|_| CommandError::Usage(USAGE))?;
            if days < 0 {
                return Err(CommandError::Usage(USAGE));
            }
            (0, days)
        }
        [which, unit] => {
            let which: PeriodRef = which.parse().map_err(|()| CommandError::Usage(USAGE))?;
            let unit: PeriodUnit = unit.parse().map_err(|()| CommandError::Usage(USAGE))?;
            period::days_range(which, unit, Local::now().date_naive())
        }
        _ => return Err(CommandError::Usage(USAGE)),
    };

    let upcoming = store.upcoming_birthdays(window, offset);
    if upcoming.is_empty() {
        return Ok(output::warn("No upcoming birthdays found."));
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|(name, date)| {
            format!("Contact name: {name}, congratulate at: {}", date.format(BIRTHDAY_FORMAT))
        })
        .collect();
    Ok(output::highlight(&lines.join("\n")))
}

fn set_email(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name, email] = args else {
        return Err(CommandError::Usage("add-email NAME EMAIL"));
    };
    let email = Email::new(email)?;
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    contact.set_email(email);
    Ok(output::success(&format!("Contact {name} email updated.")))
}

fn show_email(store: &ContactStore, args: &[String]) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage("show-email NAME"));
    };
    let contact = store
        .find(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    match contact.email() {
        Some(email) => Ok(output::highlight(email.as_str())),
        None => Ok(output::warn("Email not specified.")),
    }
}

fn delete_email(store: &mut ContactStore, args: &[String]) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage("delete-email NAME"));
    };
    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    contact.remove_email();
    Ok(output::success(&format!("Contact {name} email removed.")))
}

/// Shared by add-address and edit-address; edit pre-fills the current
/// address as defaults. All sub-fields are required on this path.
fn set_address(
    store: &mut ContactStore,
    args: &[String],
    prompter: &mut dyn Prompter,
    usage: &'static str,
    verb: &str,
) -> CmdResult {
    let [name] = args else {
        return Err(CommandError::Usage(usage));
    };
    let current = store
        .find(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?
        .address()
        .cloned();

    let specs = address_specs(true, current.as_ref());
    let values = collect(&specs, prompter).map_err(interrupted("Address entry"))?;
    let [street, city, state, zip, country]: [Option<String>; 5] =
        values.try_into().expect("address spec has five leaves");

    let address = Address::new(
        &street.expect("street is required"),
        &city.expect("city is required"),
        &state.expect("state is required"),
        &zip.expect("zip is required"),
        &country.expect("country is required"),
    )?;

    let contact = store
        .find_mut(name)
        .ok_or_else(|| StoreError::not_found(RecordKind::Contact, name.as_str()))?;
    contact.set_address(address);
    Ok(output::success(&format!("Contact {name} address {verb}.")))
}

fn all_contacts(store: &ContactStore) -> CmdResult {
    if store.is_empty() {
        return Ok(output::warn("No contacts found"));
    }
    Ok(output::contacts_table(store.iter()))
}

fn search_contacts(store: &ContactStore, args: &[String]) -> CmdResult {
    let [query] = args else {
        return Err(CommandError::Usage("search-contacts QUERY"));
    };
    let matches = store.search(query);
    if !matches.is_empty() {
        return Ok(output::contacts_table(matches));
    }

    // No substring hit: fall back to a similarity pass over the names.
    let names: Vec<&str> = store.iter().map(|c| c.name().as_str()).collect();
    let similar = suggest::similar_strings(query, names, 0.5);
    match similar.first() {
        Some(name) => Ok(output::warn(&format!("No contacts found. Did you mean '{name}'?"))),
        None => Ok(output::warn("No contacts found")),
    }
}
