//! Describe every slot as a control.

use crate::app::AppContext;
use crate::domain::{ControlDescriptor, describe};
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore};

pub fn execute<S, P, O>(ctx: &AppContext<S, P, O>) -> Vec<ControlDescriptor>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    describe(ctx.registry().table(), ctx.formatter(), ctx.appearance())
}
