use std::sync::{Arc, Mutex};

use crate::domain::{AppError, SlotDocument};
use crate::ports::SlotStore;

/// In-memory slot store for embedding and tests.
///
/// Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    document: Arc<Mutex<SlotDocument>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document.
    pub fn with_document(document: SlotDocument) -> Self {
        Self { document: Arc::new(Mutex::new(document)) }
    }

    /// Copy of the last saved document.
    pub fn snapshot(&self) -> SlotDocument {
        self.document.lock().map(|doc| doc.clone()).unwrap_or_default()
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self) -> SlotDocument {
        self.snapshot()
    }

    fn save(&self, document: &SlotDocument) -> Result<(), AppError> {
        let mut guard = self
            .document
            .lock()
            .map_err(|_| AppError::config_error("Memory slot store lock poisoned"))?;
        *guard = document.clone();
        Ok(())
    }
}
