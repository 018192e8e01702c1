//! Test doubles for the ports.

use crate::adapters::IdentityFormatter;
use crate::app::{AppContext, SlotRegistry};
use crate::domain::Appearance;

mod fake_chooser;
mod fake_opener;
mod fake_prompter;
mod test_slot_store;

pub use fake_chooser::FakeChooser;
pub use fake_opener::FakeOpener;
pub use fake_prompter::FakePrompter;
pub use test_slot_store::TestSlotStore;

/// Context wired with test doubles and default appearance.
pub fn test_context(
    store: TestSlotStore,
    prompter: FakePrompter,
) -> AppContext<TestSlotStore, FakePrompter, FakeOpener> {
    AppContext::new(
        SlotRegistry::load(store),
        prompter,
        FakeOpener::new(),
        Box::new(IdentityFormatter),
        Appearance::default(),
    )
}
