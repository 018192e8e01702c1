use crate::domain::{AppError, SlotDocument};

/// Port for persisting the configuration document.
///
/// The store is the only component with write access to the persisted file.
pub trait SlotStore {
    /// Read the document, falling back to an empty one when it is missing,
    /// corrupt, or unreadable.
    fn load(&self) -> SlotDocument;

    /// Overwrite the persisted document with `document`.
    ///
    /// On failure the previously persisted copy must remain intact.
    fn save(&self, document: &SlotDocument) -> Result<(), AppError>;
}
