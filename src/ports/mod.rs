mod directory_chooser;
mod directory_opener;
mod prompter;
mod slot_store;
mod text_formatter;

pub use directory_chooser::DirectoryChooser;
pub use directory_opener::DirectoryOpener;
pub use prompter::Prompter;
pub use slot_store::SlotStore;
pub use text_formatter::TextFormatter;
