//! Whole-file persistence of the contact and note stores.
//!
//! The entire in-memory state is written as one JSON document at defined
//! checkpoints (exit, explicit save). A missing file on load yields an
//! empty book, never an error. Best-effort overwrite; a crash between
//! mutation and save loses unsaved changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::contact::ContactStore;
use crate::note::NoteStore;

/// Errors while loading or saving the data file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read data file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write data file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The full persisted state: both stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub contacts: ContactStore,
    #[serde(default)]
    pub notes: NoteStore,
}

impl Book {
    /// Load the book from `path`, defaulting to an empty book when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            debug!(path = %path.display(), "data file missing, starting empty");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let book = serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "data file loaded");
        Ok(book)
    }

    /// Overwrite `path` with the full state, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(StorageError::Encode)?;
        fs::write(path, raw).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "data file saved");
        Ok(())
    }
}
