//! Remove a slot and its binding.

use crate::app::AppContext;
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { slot: SlotId, name: String },
    /// No slot with that identifier; nothing changed.
    Missing { slot: SlotId },
    Cancelled,
}

/// Remove `slot`, asking for confirmation unless `assume_yes`.
pub fn execute<S, P, O>(
    ctx: &mut AppContext<S, P, O>,
    slot: SlotId,
    assume_yes: bool,
) -> Result<RemoveOutcome, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let Some(existing) = ctx.registry().get(slot) else {
        return Ok(RemoveOutcome::Missing { slot });
    };

    if !assume_yes {
        let question = format!("Remove slot {} ({})?", slot, existing.name);
        if !ctx.prompter().confirm(&question)? {
            return Ok(RemoveOutcome::Cancelled);
        }
    }

    match ctx.registry_mut().remove_slot(slot)? {
        Some(removed) => Ok(RemoveOutcome::Removed { slot, name: removed.name }),
        None => Ok(RemoveOutcome::Missing { slot }),
    }
}
