pub mod add;
pub mod bind;
pub mod init;
pub mod list;
pub mod open;
pub mod remove;
pub mod rename;
pub mod reset;
pub mod validate;
