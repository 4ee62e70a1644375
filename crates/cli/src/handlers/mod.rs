//! Command handlers: per-command orchestration over the core stores.
//!
//! Handlers build field specs, run the collector, and mutate the stores.
//! Every failure becomes a styled warning or error line; nothing here
//! panics on user input and the session always continues.

pub mod contacts;
pub mod notes;

use std::fmt;
use std::io;

use keeper_core::{FieldError, PromptError, StoreError};

use crate::output;

/// Failures a single command can end with.
#[derive(Debug)]
pub enum CommandError {
    /// A field value failed validation outside the collector (direct
    /// command arguments).
    Field(FieldError),
    /// Record missing or key collision.
    Store(StoreError),
    /// User aborted an interactive collection; nothing was applied.
    Cancelled { action: &'static str },
    /// Terminal went away mid-prompt.
    Io(io::Error),
    /// Wrong argument shape.
    Usage(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Field(e) => write!(f, "{e}"),
            CommandError::Store(e) => write!(f, "{e}"),
            CommandError::Cancelled { action } => {
                write!(f, "{action} interrupted, nothing saved")
            }
            CommandError::Io(e) => write!(f, "IO error: {e}"),
            CommandError::Usage(usage) => write!(f, "usage: {usage}"),
        }
    }
}

impl From<FieldError> for CommandError {
    fn from(e: FieldError) -> Self {
        CommandError::Field(e)
    }
}

impl From<StoreError> for CommandError {
    fn from(e: StoreError) -> Self {
        CommandError::Store(e)
    }
}

/// Map a collector abort into a command failure naming the action.
pub(crate) fn interrupted(action: &'static str) -> impl Fn(PromptError) -> CommandError {
    move |e| match e {
        PromptError::Cancelled => CommandError::Cancelled { action },
        PromptError::Io(err) => CommandError::Io(err),
    }
}

/// Business failures are warnings, IO problems errors; never a panic.
pub(crate) fn render(result: Result<String, CommandError>) -> String {
    match result {
        Ok(message) => message,
        Err(e @ CommandError::Io(_)) => output::error(&e.to_string()),
        Err(e) => output::warn(&e.to_string()),
    }
}
