pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
mod registry;

pub use config::AppConfig;
pub use context::AppContext;
pub use registry::{OpenOutcome, SlotRegistry};
