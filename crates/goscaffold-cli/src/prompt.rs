//! Interactive questions asked by `goscaffold new`.
//!
//! Commands talk to the [`Prompter`] trait; the terminal implementation
//! uses `dialoguer` and only exists with the `interactive` feature.

use std::io::IsTerminal as _;

use goscaffold_core::domain::TemplateKind;

use crate::error::CliResult;

/// Source of answers for the questions `new` may ask.
pub trait Prompter {
    /// Free-text answer; `default` is returned for an empty reply.
    fn input(&self, label: &str, default: &str) -> CliResult<String>;

    /// Pick one of [`TemplateKind::ALL`].
    fn template(&self, default: TemplateKind) -> CliResult<TemplateKind>;

    /// Yes/no question that defaults to yes.
    fn confirm(&self, label: &str) -> CliResult<bool>;
}

/// Menu lines in [`TemplateKind::ALL`] order.
pub fn template_items() -> Vec<String> {
    TemplateKind::ALL
        .iter()
        .map(|k| format!("{k} - {}", k.description()))
        .collect()
}

/// Index of `kind` in the menu; unknown kinds select the first entry.
pub fn template_index(kind: TemplateKind) -> usize {
    TemplateKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or(0)
}

/// A prompter for the current terminal, or `None` when nobody can answer.
///
/// Prompting needs both an interactive stdin and the `interactive` feature.
pub fn terminal() -> Option<Box<dyn Prompter>> {
    if !std::io::stdin().is_terminal() {
        tracing::debug!("stdin is not a terminal; prompts disabled");
        return None;
    }
    terminal_prompter()
}

#[cfg(feature = "interactive")]
fn terminal_prompter() -> Option<Box<dyn Prompter>> {
    Some(Box::new(dialog::DialoguerPrompter))
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter() -> Option<Box<dyn Prompter>> {
    tracing::debug!("built without the interactive feature; prompts disabled");
    None
}

#[cfg(feature = "interactive")]
mod dialog {
    use dialoguer::{Confirm, Input, Select};
    use goscaffold_core::domain::TemplateKind;

    use super::{Prompter, template_index, template_items};
    use crate::error::{CliError, CliResult};

    pub(super) struct DialoguerPrompter;

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "interactive prompt failed".into(),
            source: std::io::Error::other(e),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&self, label: &str, default: &str) -> CliResult<String> {
            Input::<String>::new()
                .with_prompt(label)
                .default(default.to_string())
                .allow_empty(true)
                .interact_text()
                .map(|s| s.trim().to_string())
                .map_err(prompt_failed)
        }

        fn template(&self, default: TemplateKind) -> CliResult<TemplateKind> {
            let selection = Select::new()
                .with_prompt("Select project template")
                .items(&template_items())
                .default(template_index(default))
                .interact_opt()
                .map_err(prompt_failed)?;

            match selection {
                Some(idx) => Ok(TemplateKind::ALL[idx]),
                None => Err(CliError::Cancelled),
            }
        }

        fn confirm(&self, label: &str) -> CliResult<bool> {
            Confirm::new()
                .with_prompt(label)
                .default(true)
                .interact()
                .map_err(prompt_failed)
        }
    }
}
