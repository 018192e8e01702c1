//! Seed an empty registry with placeholder slots.

use crate::app::AppContext;
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

/// Number of slots created when no count is given.
pub const DEFAULT_SLOT_COUNT: u32 = 17;

pub fn execute<S, P, O>(ctx: &mut AppContext<S, P, O>, count: u32) -> Result<Vec<SlotId>, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    if count == 0 {
        return Err(AppError::Validation("Slot count must be at least 1".to_string()));
    }
    ctx.registry_mut().seed(count)
}
