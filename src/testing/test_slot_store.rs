use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, SlotDocument};
use crate::ports::SlotStore;

/// Shared-state slot store that counts saves and can be told to fail.
#[derive(Clone, Debug, Default)]
pub struct TestSlotStore {
    document: Arc<Mutex<SlotDocument>>,
    saves: Arc<Mutex<usize>>,
    should_fail: Arc<Mutex<bool>>,
}

impl TestSlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: SlotDocument) -> Self {
        let store = Self::new();
        *store.document.lock().unwrap() = document;
        store
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    pub fn document(&self) -> SlotDocument {
        self.document.lock().unwrap().clone()
    }
}

impl SlotStore for TestSlotStore {
    fn load(&self) -> SlotDocument {
        self.document()
    }

    fn save(&self, document: &SlotDocument) -> Result<(), AppError> {
        if *self.should_fail.lock().unwrap() {
            return Err(AppError::PersistenceWrite {
                path: PathBuf::from("test-slots.json"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        *self.document.lock().unwrap() = document.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
