//! Note commands.

use keeper_core::collector::{collect, FieldSpec, Prompter};
use keeper_core::error::RecordKind;
use keeper_core::{Content, Note, NoteStore, StoreError, Title};
use tracing::debug;

use super::{interrupted, render, CommandError};
use crate::output;

pub const COMMANDS: &[&str] = &[
    "add-note",
    "edit-note",
    "rename-note",
    "delete-note",
    "add-tag",
    "remove-tag",
    "clear-tags",
    "notes",
    "search-notes",
];

type CmdResult = Result<String, CommandError>;

pub fn handle(
    store: &mut NoteStore,
    command: &str,
    args: &[String],
    prompter: &mut dyn Prompter,
) -> String {
    debug!(command, "note command");
    let result = match command {
        "add-note" => add_note(store, prompter),
        "edit-note" => edit_note(store, args, prompter),
        "rename-note" => rename_note(store, args),
        "delete-note" => delete_note(store, args),
        "add-tag" => add_tag(store, args),
        "remove-tag" => remove_tag(store, args),
        "clear-tags" => clear_tags(store, args),
        "notes" => all_notes(store),
        "search-notes" => search_notes(store, args),
        _ => Ok(output::error("Invalid command.")),
    };
    render(result)
}

/// Interactive add. An existing note is updated with whatever fields
/// were provided, mirroring contact adding.
fn add_note(store: &mut NoteStore, prompter: &mut dyn Prompter) -> CmdResult {
    let specs = [
        FieldSpec::leaf("Title").required().validator(Title::validate),
        FieldSpec::leaf("Content").validator(Content::validate),
        FieldSpec::leaf("Tags"),
    ];
    let values = collect(&specs, prompter).map_err(interrupted("Note adding"))?;
    let [title, content, tags]: [Option<String>; 3] =
        values.try_into().expect("note spec has three leaves");
    let title = title.expect("title field is required");
    let tags = tags.as_deref().map(split_tags).unwrap_or_default();

    if let Some(existing) = store.find_mut(&title) {
        if let Some(raw) = content {
            existing.set_content(Content::new(&raw)?);
        }
        for tag in tags {
            existing.add_tag(tag);
        }
        return Ok(output::success(&format!("Note {title} updated.")));
    }

    let content = match content {
        Some(raw) => Content::new(&raw)?,
        None => Content::default(),
    };
    let mut note = Note::new(Title::new(&title)?, content);
    for tag in tags {
        note.add_tag(tag);
    }
    store.add(note);
    Ok(output::success(&format!("Note {title} added.")))
}

/// Interactive content edit with the current content pre-filled.
fn edit_note(store: &mut NoteStore, args: &[String], prompter: &mut dyn Prompter) -> CmdResult {
    let [title] = args else {
        return Err(CommandError::Usage("edit-note TITLE"));
    };
    let current = store
        .find(title)
        .ok_or_else(|| StoreError::not_found(RecordKind::Note, title.as_str()))?
        .content()
        .to_string();

    let mut spec = FieldSpec::leaf("Content").validator(Content::validate);
    if !current.is_empty() {
        spec = spec.default_value(current);
    }
    let values = collect(&[spec], prompter).map_err(interrupted("Note editing"))?;
    let content = match values.into_iter().next().flatten() {
        Some(raw) => Content::new(&raw)?,
        None => Content::default(),
    };

    let note = store
        .find_mut(title)
        .ok_or_else(|| StoreError::not_found(RecordKind::Note, title.as_str()))?;
    note.set_content(content);
    Ok(output::success(&format!("Note {title} updated.")))
}

fn rename_note(store: &mut NoteStore, args: &[String]) -> CmdResult {
    let [old, new] = args else {
        return Err(CommandError::Usage("rename-note OLD_TITLE NEW_TITLE"));
    };
    let new_title = Title::new(new)?;
    store.rename(old, new_title)?;
    Ok(output::success(&format!("Note {old} renamed to {new}.")))
}

fn delete_note(store: &mut NoteStore, args: &[String]) -> CmdResult {
    let [title] = args else {
        return Err(CommandError::Usage("delete-note TITLE"));
    };
    store.delete(title)?;
    Ok(output::success(&format!("Note {title} deleted.")))
}

fn add_tag(store: &mut NoteStore, args: &[String]) -> CmdResult {
    let [title, tag] = args else {
        return Err(CommandError::Usage("add-tag TITLE TAG"));
    };
    let note = store
        .find_mut(title)
        .ok_or_else(|| StoreError::not_found(RecordKind::Note, title.as_str()))?;
    if !note.add_tag(tag) {
        return Ok(output::warn(&format!("Note {title} already has tag {tag}.")));
    }
    Ok(output::success(&format!("Note {title} tag added.")))
}

fn remove_tag(store: &mut NoteStore, args: &[String]) -> CmdResult {
    let [title, tag] = args else {
        return Err(CommandError::Usage("remove-tag TITLE TAG"));
    };
    let note = store
        .find_mut(title)
        .ok_or_else(|| StoreError::not_found(RecordKind::Note, title.as_str()))?;
    if !note.remove_tag(tag) {
        return Ok(output::warn("Tag not found."));
    }
    Ok(output::success(&format!("Note {title} tag removed.")))
}

fn clear_tags(store: &mut NoteStore, args: &[String]) -> CmdResult {
    let [title] = args else {
        return Err(CommandError::Usage("clear-tags TITLE"));
    };
    let note = store
        .find_mut(title)
        .ok_or_else(|| StoreError::not_found(RecordKind::Note, title.as_str()))?;
    note.clear_tags();
    Ok(output::success(&format!("Note {title} tags cleared.")))
}

fn all_notes(store: &NoteStore) -> CmdResult {
    if store.is_empty() {
        return Ok(output::warn("No notes found"));
    }
    Ok(output::notes_table(store.iter()))
}

fn search_notes(store: &NoteStore, args: &[String]) -> CmdResult {
    let [query] = args else {
        return Err(CommandError::Usage("search-notes QUERY"));
    };
    let matches = store.search(query);
    if matches.is_empty() {
        return Ok(output::warn("No notes found"));
    }
    Ok(output::notes_table(matches))
}

/// Tags are entered as one line, separated by spaces or commas.
fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::PromptError;
    use std::collections::VecDeque;

    struct Script(VecDeque<Option<String>>);

    impl Script {
        fn new(answers: &[&str]) -> Self {
            Self(answers.iter().map(|a| Some((*a).to_string())).collect())
        }
    }

    impl Prompter for Script {
        fn prompt(&mut self, _label: &str, _default: Option<&str>) -> Result<String, PromptError> {
            match self.0.pop_front() {
                Some(Some(answer)) => Ok(answer),
                _ => Err(PromptError::Cancelled),
            }
        }

        fn warn(&mut self, _text: &str) {}
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn add_note_with_tags() {
        let mut store = NoteStore::new();
        let mut script = Script::new(&["shopping", "milk and bread", "food, urgent"]);
        let message = handle(&mut store, "add-note", &[], &mut script);
        assert!(message.contains("Note shopping added."));

        let note = store.find("shopping").unwrap();
        assert_eq!(note.content().as_str(), "milk and bread");
        assert_eq!(note.tags(), ["food", "urgent"]);
    }

    #[test]
    fn cancelled_add_leaves_store_empty() {
        let mut store = NoteStore::new();
        let mut script = Script::new(&["shopping"]);
        let message = handle(&mut store, "add-note", &[], &mut script);
        assert!(message.contains("interrupted"));
        assert!(store.is_empty());
    }

    #[test]
    fn edit_note_keeps_content_on_empty_submission() {
        let mut store = NoteStore::new();
        store.add(Note::new(
            Title::new("shopping").unwrap(),
            Content::new("milk").unwrap(),
        ));
        let mut script = Script::new(&[""]);
        handle(&mut store, "edit-note", &args(&["shopping"]), &mut script);
        assert_eq!(store.find("shopping").unwrap().content().as_str(), "milk");
    }

    #[test]
    fn rename_note_collision_warns() {
        let mut store = NoteStore::new();
        store.add(Note::new(Title::new("a").unwrap(), Content::default()));
        store.add(Note::new(Title::new("b").unwrap(), Content::default()));
        let mut script = Script::new(&[]);
        let message = handle(&mut store, "rename-note", &args(&["a", "b"]), &mut script);
        assert!(message.contains("already exists"));
    }

    #[test]
    fn duplicate_tag_warns() {
        let mut store = NoteStore::new();
        let mut note = Note::new(Title::new("a").unwrap(), Content::default());
        note.add_tag("x");
        store.add(note);
        let mut script = Script::new(&[]);
        let message = handle(&mut store, "add-tag", &args(&["a", "x"]), &mut script);
        assert!(message.contains("already has tag"));
        assert_eq!(store.find("a").unwrap().tags(), ["x"]);
    }

    #[test]
    fn split_tags_handles_commas_and_spaces() {
        assert_eq!(split_tags("food, urgent  home"), ["food", "urgent", "home"]);
        assert!(split_tags("  ").is_empty());
    }
}
