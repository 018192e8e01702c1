//! Terminal rendering of command outcomes.

use std::path::PathBuf;

use crate::app::OpenOutcome;
use crate::app::commands::add::AddOutcome;
use crate::app::commands::bind::BindOutcome;
use crate::app::commands::remove::RemoveOutcome;
use crate::app::commands::reset::ResetOutcome;
use crate::app::commands::validate::ValidateOutcome;
use crate::domain::{AppError, ControlDescriptor, SlotId};

pub(super) fn print_controls(controls: &[ControlDescriptor], json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(controls)
            .map_err(|err| AppError::Validation(format!("Failed to render slots: {}", err)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if controls.is_empty() {
        println!("No slots yet. Add one with 'slotdirs add <NAME>'.");
        return Ok(());
    }

    let width = controls.iter().map(|c| c.caption.chars().count()).max().unwrap_or(0);
    for control in controls {
        let marker = if control.bound { "●" } else { "○" };
        println!(
            "{:>3}  {} {:<width$}  {}",
            control.slot.get(),
            marker,
            control.caption,
            control.status,
            width = width
        );
    }
    Ok(())
}

pub(super) fn print_add(outcome: Option<AddOutcome>) {
    match outcome {
        Some(AddOutcome { slot, name }) => println!("✅ Added slot {}: {}", slot, name),
        None => println!("Cancelled"),
    }
}

pub(super) fn print_remove(outcome: RemoveOutcome) {
    match outcome {
        RemoveOutcome::Removed { slot, name } => println!("✅ Removed slot {} ({})", slot, name),
        RemoveOutcome::Missing { slot } => println!("Slot {} does not exist; nothing removed", slot),
        RemoveOutcome::Cancelled => println!("Cancelled"),
    }
}

pub(super) fn print_rename(slot: SlotId, name: Option<String>) {
    match name {
        Some(name) => println!("✅ Renamed slot {} to {}", slot, name),
        None => println!("Cancelled"),
    }
}

pub(super) fn print_bind(outcome: BindOutcome) {
    match outcome {
        BindOutcome::Bound { slot, label, path } => {
            println!("✅ Bound slot {} to {}", slot, label);
            println!("  {}", path.display());
        }
        BindOutcome::Cancelled => println!("Cancelled"),
    }
}

pub(super) fn print_unbind(slot: SlotId, previous: Option<PathBuf>) {
    match previous {
        Some(path) => println!("✅ Unbound slot {} (was {})", slot, path.display()),
        None => println!("Slot {} had no folder", slot),
    }
}

pub(super) fn print_open(slot: SlotId, outcome: OpenOutcome) {
    match outcome {
        OpenOutcome::Opened { label } => println!("✅ Opened {}", label),
        OpenOutcome::Bound { label } => println!("✅ Bound slot {} to {}", slot, label),
        OpenOutcome::Cancelled => println!("Cancelled"),
    }
}

pub(super) fn print_reset(outcome: ResetOutcome) {
    match outcome {
        ResetOutcome::Reset { cleared } => {
            println!("✅ Reset all folders ({} binding(s) cleared)", cleared)
        }
        ResetOutcome::Cancelled => println!("Cancelled"),
    }
}

pub(super) fn print_validate(outcome: &ValidateOutcome, no_save: bool) {
    if outcome.unbound.is_empty() {
        println!("✅ All bound folders exist");
        return;
    }
    for (slot, name) in &outcome.unbound {
        println!("⚠️  Slot {} ({}): folder no longer exists; unbound", slot, name);
    }
    if no_save {
        println!("  Not saved (--no-save)");
    }
}

pub(super) fn print_init(created: &[SlotId]) {
    println!("✅ Created {} slot(s)", created.len());
}
