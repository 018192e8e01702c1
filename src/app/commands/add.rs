//! Add a new unbound slot.

use crate::app::AppContext;
use crate::domain::{AppError, SlotId, placeholder_name};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub slot: SlotId,
    pub name: String,
}

/// Add a slot named `name`, prompting for a name when none is given.
///
/// Returns `None` when the name prompt is cancelled.
pub fn execute<S, P, O>(
    ctx: &mut AppContext<S, P, O>,
    name: Option<&str>,
) -> Result<Option<AddOutcome>, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let suggestion = placeholder_name(ctx.registry().table().next_id()?);
            let Some(answer) = ctx.prompter().input_text("Slot name", Some(&suggestion))? else {
                return Ok(None);
            };
            answer
        }
    };

    let slot = ctx.registry_mut().add_slot(&name)?;
    let name = ctx.registry().get(slot).map(|s| s.name.clone()).unwrap_or(name);
    Ok(Some(AddOutcome { slot, name }))
}
