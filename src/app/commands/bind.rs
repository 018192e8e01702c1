//! Bind a slot to a directory, or clear its binding.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, SlotId};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    Bound { slot: SlotId, label: String, path: PathBuf },
    Cancelled,
}

/// Bind `slot` to `path`, asking the directory chooser when no path is given.
pub fn execute<S, P, O>(
    ctx: &mut AppContext<S, P, O>,
    slot: SlotId,
    path: Option<&Path>,
) -> Result<BindOutcome, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    let name = ctx.registry().get(slot).ok_or(AppError::SlotNotFound(slot))?.name.clone();

    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match ctx.prompter().choose_directory(slot, &name)? {
            Some(chosen) => chosen,
            None => return Ok(BindOutcome::Cancelled),
        },
    };

    let label = ctx.registry_mut().bind(slot, &path)?;
    let path = ctx.registry().get(slot).and_then(|s| s.path.clone()).unwrap_or(path);
    Ok(BindOutcome::Bound { slot, label, path })
}

/// Clear the binding of `slot`, returning the directory it pointed at.
pub fn unbind<S, P, O>(
    ctx: &mut AppContext<S, P, O>,
    slot: SlotId,
) -> Result<Option<PathBuf>, AppError>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    ctx.registry_mut().unbind(slot)
}
