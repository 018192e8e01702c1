use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, Prompter};

/// Scripted prompter: answers are consumed in order.
#[derive(Default)]
pub struct FakePrompter {
    confirmations: RefCell<VecDeque<bool>>,
    texts: RefCell<VecDeque<Option<String>>>,
    directories: RefCell<VecDeque<Option<PathBuf>>>,
    pub questions: RefCell<Vec<String>>,
}

impl FakePrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(self, answer: bool) -> Self {
        self.confirmations.borrow_mut().push_back(answer);
        self
    }

    pub fn answering(self, text: Option<&str>) -> Self {
        self.texts.borrow_mut().push_back(text.map(str::to_string));
        self
    }

    pub fn choosing(self, directory: Option<PathBuf>) -> Self {
        self.directories.borrow_mut().push_back(directory);
        self
    }

    fn exhausted(kind: &str) -> AppError {
        AppError::Prompt(format!("no scripted {} answer left", kind))
    }
}

impl Prompter for FakePrompter {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        self.questions.borrow_mut().push(question.to_string());
        self.confirmations.borrow_mut().pop_front().ok_or_else(|| Self::exhausted("confirm"))
    }

    fn input_text(&self, prompt: &str, _default: Option<&str>) -> Result<Option<String>, AppError> {
        self.questions.borrow_mut().push(prompt.to_string());
        self.texts.borrow_mut().pop_front().ok_or_else(|| Self::exhausted("text"))
    }
}

impl DirectoryChooser for FakePrompter {
    fn choose_directory(&self, _slot: SlotId, slot_name: &str) -> Result<Option<PathBuf>, AppError> {
        self.questions.borrow_mut().push(slot_name.to_string());
        self.directories.borrow_mut().pop_front().ok_or_else(|| Self::exhausted("directory"))
    }
}
