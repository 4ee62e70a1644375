//! Terminal-backed implementation of the core `Prompter` collaborator.
//!
//! Interactive sessions go through dialoguer with the default pre-filled;
//! piped input falls back to plain line reads so the binary stays
//! scriptable. EOF and Ctrl-C both surface as cancellation.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use keeper_core::{PromptError, Prompter};

use crate::output;

pub struct TermPrompter {
    interactive: bool,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }
}

impl Prompter for TermPrompter {
    fn prompt(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError> {
        if self.interactive {
            let theme = ColorfulTheme::default();
            let mut input = Input::<String>::with_theme(&theme).with_prompt(label).allow_empty(true);
            if let Some(value) = default {
                input = input.default(value.to_string());
            }
            input.interact_text().map_err(map_dialoguer_error)
        } else {
            print!("{}: ", output::highlight(label));
            io::stdout().flush()?;
            read_plain_line()
        }
    }

    fn warn(&mut self, text: &str) {
        println!("{}", output::warn(text));
    }
}

/// Read one line from piped stdin; EOF means the user is gone.
pub fn read_plain_line() -> Result<String, PromptError> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn map_dialoguer_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if matches!(io_err.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted) {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
