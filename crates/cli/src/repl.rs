//! The interactive session: read a line, tokenize, dispatch, repeat.
//!
//! The book is loaded once at startup and written back on exit (or on an
//! explicit `save`); mutations in between live only in memory.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Input};
use keeper_core::{Book, PromptError, StorageError};
use tracing::{error, info};

use crate::handlers::{contacts, notes};
use crate::output;
use crate::prompt::{self, TermPrompter};
use crate::tokenize;

struct CommandCompletion {
    commands: Vec<String>,
}

impl CommandCompletion {
    fn new() -> Self {
        let mut commands: Vec<String> =
            ["hello", "help", "save", "exit", "close"].iter().map(ToString::to_string).collect();
        commands.extend(contacts::COMMANDS.iter().map(ToString::to_string));
        commands.extend(notes::COMMANDS.iter().map(ToString::to_string));
        commands.sort();
        Self { commands }
    }
}

impl Completion for CommandCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let mut matches = self.commands.iter().filter(|c| c.starts_with(input));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only.clone()),
            _ => None,
        }
    }
}

pub fn run(data_file: &Path) -> Result<(), StorageError> {
    let mut book = Book::load(data_file)?;
    info!(path = %data_file.display(), "book loaded");

    let interactive = io::stdin().is_terminal();
    let completion = CommandCompletion::new();
    let mut prompter = TermPrompter::new();

    println!("{}", output::highlight("Welcome to keeper!"));

    loop {
        let line = match read_command(interactive, &completion) {
            Ok(line) => line,
            Err(PromptError::Cancelled) => break,
            Err(PromptError::Io(e)) => {
                error!("input error: {e}");
                break;
            }
        };

        let tokens = tokenize::tokenize(&line);
        let Some((command, args)) = tokens.split_first() else {
            continue;
        };
        let command = command.to_lowercase();

        match command.as_str() {
            "exit" | "close" => break,
            "hello" => println!("{}", output::highlight("How can I help you?")),
            "help" => println!("{}", help_text()),
            "save" => match book.save(data_file) {
                Ok(()) => println!("{}", output::success("Saved.")),
                Err(e) => println!("{}", output::error(&e.to_string())),
            },
            c if contacts::COMMANDS.contains(&c) => {
                println!("{}", contacts::handle(&mut book.contacts, c, args, &mut prompter));
            }
            c if notes::COMMANDS.contains(&c) => {
                println!("{}", notes::handle(&mut book.notes, c, args, &mut prompter));
            }
            _ => println!("{}", output::error("Invalid command.")),
        }
    }

    println!("{}", output::highlight("Good bye!"));
    book.save(data_file)?;
    info!("book saved, session ended");
    Ok(())
}

fn read_command(interactive: bool, completion: &CommandCompletion) -> Result<String, PromptError> {
    if interactive {
        let theme = ColorfulTheme::default();
        Input::<String>::with_theme(&theme)
            .with_prompt("Enter a command")
            .allow_empty(true)
            .completion_with(completion)
            .interact_text()
            .map_err(prompt::map_dialoguer_error)
    } else {
        print!("{}", output::info("Enter a command: "));
        io::stdout().flush()?;
        prompt::read_plain_line()
    }
}

fn help_text() -> String {
    output::info(
        "\
Contacts:
  add-contact                         interactive contact entry
  edit-contact NAME OLD NEW           replace a phone number
  rename-contact OLD NEW              rename, fails if NEW exists
  delete-contact NAME
  phone NAME                          list phone numbers
  add-phone NAME PHONE | remove-phone NAME PHONE
  add-birthday NAME DD.MM.YYYY | show-birthday NAME
  birthdays DAYS | birthdays this|next week|month
  add-email NAME EMAIL | edit-email NAME EMAIL
  show-email NAME | delete-email NAME
  add-address NAME | edit-address NAME
  contacts                            list all contacts
  search-contacts QUERY

Notes:
  add-note                            interactive note entry
  edit-note TITLE                     edit content
  rename-note OLD NEW | delete-note TITLE
  add-tag TITLE TAG | remove-tag TITLE TAG | clear-tags TITLE
  notes                               list all notes
  search-notes QUERY

General:
  hello | help | save | exit | close",
    )
}
