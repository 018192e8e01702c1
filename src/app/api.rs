//! API Facade for the application.
//!
//! Non-interactive entry points operating on a slot file. Each call loads the
//! registry, applies one operation, and persists before returning.

use std::path::{Path, PathBuf};

use crate::adapters::{IdentityFormatter, JsonSlotStore};
use crate::app::{AppConfig, OpenOutcome, SlotRegistry};
use crate::domain::{AppError, Appearance, ControlDescriptor, Slot, SlotId, describe};
use crate::ports::{DirectoryChooser, DirectoryOpener};

/// Chooser for unattended use: every request is cancelled.
struct NoChooser;

impl DirectoryChooser for NoChooser {
    fn choose_directory(&self, _slot: SlotId, _slot_name: &str) -> Result<Option<PathBuf>, AppError> {
        Ok(None)
    }
}

fn registry_at(config_path: &Path) -> SlotRegistry<JsonSlotStore> {
    SlotRegistry::load(JsonSlotStore::new(config_path))
}

/// All slots persisted at `config_path`, ascending by identifier.
pub fn slots_at(config_path: &Path) -> Vec<Slot> {
    registry_at(config_path).slots().cloned().collect()
}

/// Control descriptors for the slots persisted at `config_path`.
pub fn controls_at(config_path: &Path, appearance: &Appearance) -> Vec<ControlDescriptor> {
    describe(registry_at(config_path).table(), &IdentityFormatter, appearance)
}

/// Add an unbound slot and return its identifier.
pub fn add_slot_at(config_path: &Path, name: &str) -> Result<SlotId, AppError> {
    registry_at(config_path).add_slot(name)
}

/// Bind a slot to an existing directory and return its display label.
pub fn bind_at(config_path: &Path, slot: SlotId, directory: &Path) -> Result<String, AppError> {
    registry_at(config_path).bind(slot, directory)
}

/// Clear a slot's binding.
pub fn unbind_at(config_path: &Path, slot: SlotId) -> Result<Option<PathBuf>, AppError> {
    registry_at(config_path).unbind(slot)
}

/// Remove a slot. Returns `false` when it did not exist.
pub fn remove_slot_at(config_path: &Path, slot: SlotId) -> Result<bool, AppError> {
    Ok(registry_at(config_path).remove_slot(slot)?.is_some())
}

/// Rename a slot.
pub fn rename_at(config_path: &Path, slot: SlotId, name: &str) -> Result<(), AppError> {
    registry_at(config_path).rename(slot, name)
}

/// Unbind every slot. Returns how many were bound.
pub fn reset_at(config_path: &Path) -> Result<usize, AppError> {
    registry_at(config_path).reset_all()
}

/// Unbind slots whose directory is gone; persist the result when `save` is set.
pub fn validate_at(config_path: &Path, save: bool) -> Result<Vec<SlotId>, AppError> {
    let mut registry = registry_at(config_path);
    let unbound = registry.validate_all();
    if save {
        registry.shutdown()?;
    }
    Ok(unbound)
}

/// Open a bound slot with `opener`. Unbound slots report `Cancelled`.
pub fn open_with<O>(config_path: &Path, slot: SlotId, opener: &O) -> Result<OpenOutcome, AppError>
where
    O: DirectoryOpener + ?Sized,
{
    registry_at(config_path).open(slot, &NoChooser, opener)
}

/// Open a bound slot with the configured or platform file browser.
pub fn open(config: &AppConfig, slot: SlotId) -> Result<OpenOutcome, AppError> {
    open_with(&config.config_path, slot, &config.opener())
}
