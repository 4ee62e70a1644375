//! Note records and the keyed note store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecordKind, StoreError};
use crate::fields::{Content, Title};

/// A free-form note. The title is the identity used as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Title,
    content: Content,
    tags: Vec<String>,
}

impl Note {
    pub fn new(title: Title, content: Content) -> Self {
        Self { title, content, tags: Vec::new() }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Append a tag, preserving insertion order. Returns false when the
    /// tag is already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    fn set_title(&mut self, title: Title) {
        self.title = title;
    }
}

/// Keyed note container, mirroring [`crate::contact::ContactStore`]:
/// insertion-ordered iteration, case-sensitive `find`, case-insensitive
/// `search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteStore {
    order: Vec<String>,
    records: HashMap<String, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert under the note's title.
    pub fn add(&mut self, note: Note) {
        let key = note.title().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        debug!(title = %key, "note stored");
        self.records.insert(key, note);
    }

    pub fn find(&self, title: &str) -> Option<&Note> {
        self.records.get(title)
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Note> {
        self.records.get_mut(title)
    }

    pub fn delete(&mut self, title: &str) -> Result<Note, StoreError> {
        let note = self
            .records
            .remove(title)
            .ok_or_else(|| StoreError::not_found(RecordKind::Note, title))?;
        self.order.retain(|k| k != title);
        debug!(title, "note deleted");
        Ok(note)
    }

    /// Remove-old-key plus reinsert-new-key, failing without mutation when
    /// the destination title already exists.
    pub fn rename(&mut self, old: &str, new: Title) -> Result<(), StoreError> {
        if !self.records.contains_key(old) {
            return Err(StoreError::not_found(RecordKind::Note, old));
        }
        if self.records.contains_key(new.as_str()) {
            return Err(StoreError::duplicate(RecordKind::Note, new.as_str()));
        }
        let mut note = self.records.remove(old).expect("checked above");
        let new_key = new.as_str().to_string();
        note.set_title(new);
        for key in &mut self.order {
            if key == old {
                *key = new_key.clone();
            }
        }
        self.records.insert(new_key, note);
        Ok(())
    }

    /// Case-insensitive substring match over title and content.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|n| {
                n.title().as_str().to_lowercase().contains(&needle)
                    || n.content().as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.order.iter().filter_map(|k| self.records.get(k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl From<Vec<Note>> for NoteStore {
    fn from(notes: Vec<Note>) -> Self {
        let mut store = Self::new();
        for note in notes {
            store.add(note);
        }
        store
    }
}

impl From<NoteStore> for Vec<Note> {
    fn from(store: NoteStore) -> Self {
        store.order.iter().filter_map(|k| store.records.get(k).cloned()).collect()
    }
}
