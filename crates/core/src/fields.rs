//! Validated field newtypes and their pure validators.
//!
//! Every typed attribute (name, phone, email, birthday, title, content,
//! address sub-fields) exposes a `validate` function that checks a raw
//! string without constructing anything, plus a `new` constructor that
//! runs the same check and wraps the value. Once constructed a field is
//! immutable; replacing a value goes through `new` again.

use std::fmt;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Canonical birthday format: day.month.year.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact display name. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        if raw.trim().is_empty() {
            return Err(FieldError::Name);
        }
        Ok(())
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::validate(raw)?;
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number: exactly 10 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        if raw.len() != 10 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::Phone);
        }
        Ok(())
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address, checked against `^\S+@\S+\.\S+$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        let re = Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex");
        if !re.is_match(raw) {
            return Err(FieldError::Email);
        }
        Ok(())
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Birthday: a calendar date entered and displayed as DD.MM.YYYY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(|_| ())
            .map_err(|_| FieldError::Birthday)
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        let date =
            NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| FieldError::Birthday)?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Note title: 1 to 20 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() > 20 {
            return Err(FieldError::Title);
        }
        Ok(())
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::validate(raw)?;
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note content: at most 200 characters, empty allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(String);

impl Content {
    pub fn validate(raw: &str) -> Result<(), FieldError> {
        if raw.chars().count() > 200 {
            return Err(FieldError::Content);
        }
        Ok(())
    }

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// City, state and country must start with a capital letter.
pub fn validate_capitalized(raw: &str) -> Result<(), FieldError> {
    if raw.chars().next().is_some_and(char::is_uppercase) {
        Ok(())
    } else {
        Err(FieldError::Address("must start with a capital letter".into()))
    }
}

/// Zip code must contain only ASCII digits.
pub fn validate_zip(raw: &str) -> Result<(), FieldError> {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::Address("zip code must contain only digits".into()))
    }
}

/// Postal address attached to a contact. Street is free text; the other
/// sub-fields go through the validators above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: &str,
        city: &str,
        state: &str,
        zip: &str,
        country: &str,
    ) -> Result<Self, FieldError> {
        validate_capitalized(city)?;
        validate_capitalized(state)?;
        validate_zip(zip)?;
        validate_capitalized(country)?;
        Ok(Self {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            country: country.to_string(),
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}
