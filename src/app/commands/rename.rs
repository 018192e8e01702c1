//! Change a slot's display name.

use crate::app::AppContext;
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

/// Rename `slot`, prompting with the current name when `name` is absent.
///
/// Returns the new name, or `None` when the prompt is cancelled.
pub fn execute<S, P, O>(
    ctx: &mut AppContext<S, P, O>,
    slot: SlotId,
    name: Option<&str>,
) -> Result<Option<String>, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let current = ctx.registry().get(slot).ok_or(AppError::SlotNotFound(slot))?.name.clone();

    let name = match name {
        Some(name) => name.to_string(),
        None => match ctx.prompter().input_text("New name", Some(&current))? {
            Some(answer) => answer,
            None => return Ok(None),
        },
    };

    ctx.registry_mut().rename(slot, &name)?;
    Ok(ctx.registry().get(slot).map(|s| s.name.clone()))
}
