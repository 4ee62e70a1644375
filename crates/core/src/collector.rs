//! Interactive field collection.
//!
//! A handler describes the values it needs as an ordered [`FieldSpec`]
//! tree (leaves carry a validator and an optional default; groups nest
//! child specs, one level deep in practice for the contact address).
//! [`collect`] walks the tree, asking the [`Prompter`] collaborator for
//! one value per leaf, re-prompting on validation failures and blank
//! required fields, and aborting the whole collection when the user
//! cancels. The protocol is strictly synchronous: one outstanding prompt
//! at a time, nothing advances until it resolves.

use thiserror::Error;

use crate::error::FieldError;

/// Validator run against non-empty leaf input before it is accepted.
pub type Validator = fn(&str) -> Result<(), FieldError>;

/// Errors escaping an interactive collection. Validation and
/// required-field failures never surface here; they are recovered by
/// re-prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// User aborted the collection (Ctrl-C / EOF).
    #[error("input cancelled by user")]
    Cancelled,

    /// IO error while prompting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of interactive input. The CLI implements this over dialoguer;
/// tests script it.
pub trait Prompter {
    /// Ask for one value. `default` is shown pre-filled; returning an
    /// empty string with a default present means "keep the default".
    fn prompt(&mut self, label: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Show a recoverable validation message.
    fn warn(&mut self, text: &str);
}

enum FieldKind {
    Leaf { validator: Option<Validator> },
    Group(Vec<FieldSpec>),
}

/// One field descriptor: prompt label, optional default, required flag,
/// and either a leaf validator or child specs.
pub struct FieldSpec {
    label: String,
    default: Option<String>,
    required: bool,
    kind: FieldKind,
}

impl FieldSpec {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: None,
            required: false,
            kind: FieldKind::Leaf { validator: None },
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<FieldSpec>) -> Self {
        Self {
            label: label.into(),
            default: None,
            required: false,
            kind: FieldKind::Group(children),
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a validator. No effect on groups; composite validation is
    /// carried per-child.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        if let FieldKind::Leaf { validator: slot } = &mut self.kind {
            *slot = Some(validator);
        }
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Collect one validated value per leaf, in spec order. Group results
/// appear as a flattened sub-sequence in the parent's position. Blank
/// optional fields yield `None`; accepted values are trimmed.
///
/// Cancellation propagates immediately with no partial result; callers
/// must not apply any store mutation after a cancelled collection.
pub fn collect(
    specs: &[FieldSpec],
    prompter: &mut dyn Prompter,
) -> Result<Vec<Option<String>>, PromptError> {
    let mut out = Vec::new();
    collect_into(specs, prompter, &mut out)?;
    Ok(out)
}

fn collect_into(
    specs: &[FieldSpec],
    prompter: &mut dyn Prompter,
    out: &mut Vec<Option<String>>,
) -> Result<(), PromptError> {
    for spec in specs {
        let validator = match &spec.kind {
            FieldKind::Group(children) => {
                collect_into(children, prompter, out)?;
                continue;
            }
            FieldKind::Leaf { validator } => *validator,
        };

        loop {
            let raw = prompter.prompt(&spec.label, spec.default.as_deref())?;
            let submitted = raw.trim();
            // An empty edit keeps the default; the default is then the
            // submitted value and still runs through the validator.
            let value = if submitted.is_empty() {
                spec.default.as_deref().unwrap_or("")
            } else {
                submitted
            };

            if value.is_empty() {
                if spec.required {
                    prompter.warn(&format!("{} is required", spec.label));
                    continue;
                }
                out.push(None);
                break;
            }

            if let Some(validate) = validator {
                if let Err(e) = validate(value) {
                    prompter.warn(&e.to_string());
                    continue;
                }
            }

            out.push(Some(value.trim().to_string()));
            break;
        }
    }
    Ok(())
}
