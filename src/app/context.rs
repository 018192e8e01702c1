use crate::domain::Appearance;
use crate::ports::{DirectoryChooser, DirectoryOpener, Prompter, SlotStore, TextFormatter};

use super::SlotRegistry;

/// Application context holding the registry and its collaborators.
///
/// Built once at startup and passed to every command; there is no
/// process-wide mutable state.
pub struct AppContext<S, P, O>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    registry: SlotRegistry<S>,
    prompter: P,
    opener: O,
    formatter: Box<dyn TextFormatter>,
    appearance: Appearance,
}

impl<S, P, O> AppContext<S, P, O>
where
    S: SlotStore,
    P: Prompter + DirectoryChooser,
    O: DirectoryOpener,
{
    /// Create a new application context.
    pub fn new(
        registry: SlotRegistry<S>,
        prompter: P,
        opener: O,
        formatter: Box<dyn TextFormatter>,
        appearance: Appearance,
    ) -> Self {
        Self { registry, prompter, opener, formatter, appearance }
    }

    pub fn registry(&self) -> &SlotRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SlotRegistry<S> {
        &mut self.registry
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn formatter(&self) -> &dyn TextFormatter {
        self.formatter.as_ref()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Split borrow used when a command mutates the registry while prompting.
    pub(crate) fn parts_mut(&mut self) -> (&mut SlotRegistry<S>, &P, &O) {
        (&mut self.registry, &self.prompter, &self.opener)
    }
}
