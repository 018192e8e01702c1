//! Self-heal bindings whose directories have disappeared.

use crate::app::AppContext;
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    /// Slots unbound because their directory is gone, with their names.
    pub unbound: Vec<(SlotId, String)>,
    pub saved: bool,
}

/// Unbind stale slots; flush only when `save` is set.
pub fn execute<S, P, O>(ctx: &mut AppContext<S, P, O>, save: bool) -> Result<ValidateOutcome, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let registry = ctx.registry_mut();
    let unbound: Vec<(SlotId, String)> = registry
        .validate_all()
        .into_iter()
        .filter_map(|id| registry.get(id).map(|slot| (id, slot.name.clone())))
        .collect();

    let saved = save && registry.has_unsaved_changes();
    if saved {
        registry.persist()?;
    }
    Ok(ValidateOutcome { unbound, saved })
}
