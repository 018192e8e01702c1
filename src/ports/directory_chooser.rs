use std::path::PathBuf;

use crate::domain::{AppError, SlotId};

/// Port for asking the user to pick a directory for a slot.
pub trait DirectoryChooser {
    /// Returns `None` when the user cancels.
    fn choose_directory(&self, slot: SlotId, slot_name: &str) -> Result<Option<PathBuf>, AppError>;
}
