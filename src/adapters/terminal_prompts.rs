use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, Prompter};

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn read_line(prompt: &str, default: Option<&str>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("{}: {}", prompt, err))),
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("{}: {}", question, err)))?;
        Ok(answer.unwrap_or(false))
    }

    fn input_text(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>, AppError> {
        read_line(prompt, default)
    }
}

impl DirectoryChooser for TerminalPrompter {
    fn choose_directory(&self, slot: SlotId, slot_name: &str) -> Result<Option<PathBuf>, AppError> {
        let prompt = format!("Folder for slot {} ({}), empty to cancel", slot, slot_name);
        let Some(answer) = read_line(&prompt, None)? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(expand_home(answer)))
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(input),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(input),
    }
}
