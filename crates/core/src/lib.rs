//! Core library for keeper: validated contact and note records, keyed
//! stores with search and birthday-window queries, the interactive field
//! collector, and whole-file persistence. The binary crate supplies the
//! collaborators (terminal prompting, tokenizing, presentation).

pub mod collector;
pub mod contact;
pub mod error;
pub mod fields;
pub mod note;
pub mod period;
pub mod storage;
pub mod suggest;

pub use collector::{collect, FieldSpec, PromptError, Prompter};
pub use contact::{Contact, ContactStore};
pub use error::{FieldError, RecordKind, StoreError};
pub use fields::{Address, Birthday, Content, Email, Name, Phone, Title};
pub use note::{Note, NoteStore};
pub use storage::{Book, StorageError};
