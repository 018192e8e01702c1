//! Unbind every slot.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Number of slots that were bound before the reset.
    Reset { cleared: usize },
    Cancelled,
}

pub fn execute<S, P, O>(ctx: &mut AppContext<S, P, O>, assume_yes: bool) -> Result<ResetOutcome, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    if !assume_yes && !ctx.prompter().confirm("Really reset all folders?")? {
        return Ok(ResetOutcome::Cancelled);
    }
    let cleared = ctx.registry_mut().reset_all()?;
    Ok(ResetOutcome::Reset { cleared })
}
