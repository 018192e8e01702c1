use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DirectoryOpener;

/// Records opened directories instead of launching a file browser.
#[derive(Default)]
pub struct FakeOpener {
    opened: RefCell<Vec<PathBuf>>,
    should_fail: bool,
}

impl FakeOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl DirectoryOpener for FakeOpener {
    fn open_directory(&self, path: &Path) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::DirectoryOpen {
                path: path.to_path_buf(),
                details: "mock opener failure".to_string(),
            });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
