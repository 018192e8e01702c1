//! Declarative description of the slot controls a presentation layer draws.
//!
//! The presentation layer diffs successive descriptor lists and redraws what
//! changed, instead of rebuilding every widget on each structural change.

use serde::Serialize;

use super::{Appearance, SlotId, SlotTable};
use crate::ports::TextFormatter;

/// Status text shown under an unbound slot.
pub const UNBOUND_STATUS: &str = "No folder";

/// One clickable slot control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlDescriptor {
    pub slot: SlotId,
    pub caption: String,
    pub status: String,
    pub bound: bool,
    pub accent: String,
}

/// Map registry state to control descriptors, ascending by slot.
pub fn describe<F>(table: &SlotTable, formatter: &F, appearance: &Appearance) -> Vec<ControlDescriptor>
where
    F: TextFormatter + ?Sized,
{
    table
        .iter()
        .map(|slot| {
            let (status, accent) = match slot.label() {
                Some(label) => (label, &appearance.palette.bound),
                None => (UNBOUND_STATUS.to_string(), &appearance.palette.unbound),
            };
            ControlDescriptor {
                slot: slot.id,
                caption: formatter.format(&slot.name),
                status: formatter.format(&status),
                bound: slot.is_bound(),
                accent: accent.clone(),
            }
        })
        .collect()
}
