//! Activate a slot: open its directory or ask for one.

use crate::app::{AppContext, OpenOutcome};
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

pub fn execute<S, P, O>(ctx: &mut AppContext<S, P, O>, slot: SlotId) -> Result<OpenOutcome, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let (registry, prompter, opener) = ctx.parts_mut();
    registry.open(slot, prompter, opener)
}
