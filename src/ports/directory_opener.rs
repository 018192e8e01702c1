use std::path::Path;

use crate::domain::AppError;

/// Port for revealing a directory in the platform file browser.
pub trait DirectoryOpener {
    fn open_directory(&self, path: &Path) -> Result<(), AppError>;
}
