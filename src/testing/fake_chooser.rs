use std::path::{Path, PathBuf};

use crate::domain::{AppError, SlotId};
use crate::ports::DirectoryChooser;

/// Directory chooser answering with a fixed result.
pub struct FakeChooser {
    answer: Option<PathBuf>,
}

impl FakeChooser {
    pub fn choosing(path: &Path) -> Self {
        Self { answer: Some(path.to_path_buf()) }
    }

    pub fn cancelling() -> Self {
        Self { answer: None }
    }
}

impl DirectoryChooser for FakeChooser {
    fn choose_directory(&self, _slot: SlotId, _slot_name: &str) -> Result<Option<PathBuf>, AppError> {
        Ok(self.answer.clone())
    }
}
