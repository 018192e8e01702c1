//! Slot Registry: the persisted slot table.
//!
//! Every mutation is applied in memory first and then flushed through the
//! [`SlotStore`]. A failed flush leaves the in-memory state valid and marks it
//! unsaved; [`SlotRegistry::shutdown`] retries.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::{AppError, Slot, SlotId, SlotTable, display_label, is_existing_dir};
use crate::ports::{DirectoryChooser, DirectoryOpener, SlotStore};

/// Result of activating a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The bound directory was handed to the file browser.
    Opened { label: String },
    /// The slot was unbound; the user picked a directory and it is now bound.
    Bound { label: String },
    /// The slot was unbound and the user cancelled the directory choice.
    Cancelled,
}

pub struct SlotRegistry<S: SlotStore> {
    store: S,
    table: SlotTable,
    unsaved: bool,
}

impl<S: SlotStore> SlotRegistry<S> {
    /// Build the registry from the store's persisted document.
    pub fn load(store: S) -> Self {
        let table = SlotTable::from_document(store.load());
        Self { store, table, unsaved: false }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.table.get(id)
    }

    /// Slots in ascending identifier order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Bind a slot to an existing directory and return its display label.
    ///
    /// The stored path is canonical, so `..` and symlinks are resolved.
    pub fn bind(&mut self, id: SlotId, path: impl AsRef<Path>) -> Result<String, AppError> {
        let path = path.as_ref();
        if !is_existing_dir(path) {
            return Err(AppError::missing_directory(path));
        }
        let path = fs::canonicalize(path).map_err(|_| AppError::missing_directory(path))?;
        // The slot file stores paths as JSON strings.
        if path.to_str().is_none() {
            return Err(AppError::InvalidPath { path, reason: "Folder path is not valid UTF-8" });
        }
        let label = display_label(&path);

        self.table.bind(id, path)?;
        self.persist()?;
        Ok(label)
    }

    /// Clear a slot's binding, keeping the slot. Returns the previous path.
    pub fn unbind(&mut self, id: SlotId) -> Result<Option<PathBuf>, AppError> {
        let previous = self.table.unbind(id)?;
        self.persist()?;
        Ok(previous)
    }

    /// Create an unbound slot with the next free identifier.
    pub fn add_slot(&mut self, name: &str) -> Result<SlotId, AppError> {
        let id = self.table.add(name)?;
        self.persist()?;
        Ok(id)
    }

    /// Delete a slot and its binding. Unknown identifiers are a no-op.
    pub fn remove_slot(&mut self, id: SlotId) -> Result<Option<Slot>, AppError> {
        let Some(removed) = self.table.remove(id) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn rename(&mut self, id: SlotId, name: &str) -> Result<(), AppError> {
        self.table.rename(id, name)?;
        self.persist()
    }

    /// Unbind every slot, keeping slots and names. Persists once.
    pub fn reset_all(&mut self) -> Result<usize, AppError> {
        let cleared = self.table.unbind_all();
        self.persist()?;
        Ok(cleared)
    }

    /// Populate an empty registry with `count` placeholder slots.
    pub fn seed(&mut self, count: u32) -> Result<Vec<SlotId>, AppError> {
        if !self.table.is_empty() {
            return Err(AppError::Validation(format!(
                "Registry already has {} slot(s); remove them or use 'add'",
                self.table.len()
            )));
        }
        let mut created = Vec::with_capacity(count as usize);
        for _ in 0..count {
            created.push(self.table.add("")?);
        }
        self.persist()?;
        Ok(created)
    }

    /// Unbind every slot whose directory no longer exists.
    ///
    /// Does not persist; the caller decides whether to flush.
    pub fn validate_all(&mut self) -> Vec<SlotId> {
        let unbound = self.table.unbind_missing(is_existing_dir);
        if !unbound.is_empty() {
            info!("Unbound {} slot(s) with missing folders", unbound.len());
            self.unsaved = true;
        }
        unbound
    }

    /// Activate a slot: choose a directory when unbound, otherwise open it.
    ///
    /// A bound directory that has vanished is unbound and reported as
    /// [`AppError::StaleBinding`].
    pub fn open<C, O>(
        &mut self,
        id: SlotId,
        chooser: &C,
        opener: &O,
    ) -> Result<OpenOutcome, AppError>
    where
        C: DirectoryChooser + ?Sized,
        O: DirectoryOpener + ?Sized,
    {
        let slot = self.table.get(id).ok_or(AppError::SlotNotFound(id))?;

        let Some(path) = slot.path.clone() else {
            return match chooser.choose_directory(id, &slot.name)? {
                Some(chosen) => Ok(OpenOutcome::Bound { label: self.bind(id, chosen)? }),
                None => Ok(OpenOutcome::Cancelled),
            };
        };

        if !is_existing_dir(&path) {
            self.table.unbind(id)?;
            info!("Slot {} pointed at missing folder {}; unbound", id, path.display());
            if let Err(err) = self.persist() {
                warn!("{}", err);
            }
            return Err(AppError::StaleBinding { slot: id, path });
        }

        opener.open_directory(&path)?;
        Ok(OpenOutcome::Opened { label: display_label(&path) })
    }

    /// Flush pending changes, e.g. on application exit.
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.unsaved { self.persist() } else { Ok(()) }
    }

    /// Save the full table, marking it unsaved on failure.
    pub fn persist(&mut self) -> Result<(), AppError> {
        match self.store.save(&self.table.to_document()) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(err) => {
                self.unsaved = true;
                Err(err)
            }
        }
    }
}
