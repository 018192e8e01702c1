//! slotdirs: bind named slots to folders and open them in the native file browser.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    add_slot_at, bind_at, controls_at, open, open_with, remove_slot_at, rename_at, reset_at,
    slots_at, unbind_at, validate_at,
};
pub use app::{AppConfig, OpenOutcome, SlotRegistry};
pub use domain::{AppError, ControlDescriptor, Slot, SlotDocument, SlotEntry, SlotId};
