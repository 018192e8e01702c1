mod json_slot_store;
mod memory_slot_store;
mod system_opener;
mod terminal_prompts;
mod text_formatting;

pub use json_slot_store::JsonSlotStore;
pub use memory_slot_store::MemorySlotStore;
pub use system_opener::SystemDirectoryOpener;
pub use terminal_prompts::TerminalPrompter;
pub use text_formatting::{IdentityFormatter, select_formatter};
