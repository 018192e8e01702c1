pub mod appearance;
pub mod controls;
pub mod document;
pub mod error;
pub mod slot;
pub mod slot_table;

pub use appearance::{Appearance, AppearanceMode, Palette};
pub use controls::{ControlDescriptor, UNBOUND_STATUS, describe};
pub use document::{SlotDocument, SlotEntry};
pub use error::AppError;
pub use slot::{Slot, SlotId, display_label, is_existing_dir, placeholder_name};
pub use slot_table::SlotTable;
