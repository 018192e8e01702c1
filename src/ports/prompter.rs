use crate::domain::AppError;

/// Port for confirmation and name-entry prompts.
pub trait Prompter {
    /// Ask a yes/no question. `false` means declined or cancelled.
    fn confirm(&self, question: &str) -> Result<bool, AppError>;

    /// Ask for a line of text. `None` means cancelled.
    fn input_text(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>, AppError>;
}
