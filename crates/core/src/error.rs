//! Error types shared across the core library.

use std::fmt;

use thiserror::Error;

/// Validation failures raised when constructing or replacing a field value.
///
/// These are recovered inside the field collector (re-prompt) and never
/// escape an interactive collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name is empty.
    #[error("name must not be empty")]
    Name,

    /// Phone is not exactly 10 ASCII digits.
    #[error("phone number must contain exactly 10 digits")]
    Phone,

    /// Email does not match the expected shape.
    #[error("wrong email format")]
    Email,

    /// Birthday is not a valid DD.MM.YYYY date.
    #[error("invalid date format, use DD.MM.YYYY")]
    Birthday,

    /// An address sub-field is invalid.
    #[error("{0}")]
    Address(String),

    /// Title is empty or longer than 20 characters.
    #[error("title must be 1 to 20 characters long")]
    Title,

    /// Content is longer than 200 characters.
    #[error("content must be at most 200 characters long")]
    Content,
}

/// Kind of record a store error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Contact,
    Note,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Contact => write!(f, "contact"),
            RecordKind::Note => write!(f, "note"),
        }
    }
}

/// Business-rule errors raised by the record stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record lives under the given key.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: RecordKind, key: String },

    /// A rename or insert would collide with an existing key.
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: RecordKind, key: String },
}

impl StoreError {
    pub fn not_found(kind: RecordKind, key: impl Into<String>) -> Self {
        StoreError::NotFound { kind, key: key.into() }
    }

    pub fn duplicate(kind: RecordKind, key: impl Into<String>) -> Self {
        StoreError::DuplicateKey { kind, key: key.into() }
    }
}
