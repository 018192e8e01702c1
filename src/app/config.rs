//! Application configuration.

use std::env;
use std::path::PathBuf;

use crate::adapters::SystemDirectoryOpener;
use crate::domain::{AppError, Appearance, AppearanceMode};

/// Environment variable overriding the slot file location.
pub const CONFIG_ENV: &str = "SLOTDIRS_CONFIG";
/// Environment variable naming the program used to open directories.
pub const OPENER_ENV: &str = "SLOTDIRS_OPENER";
/// Environment variable selecting the appearance mode.
pub const THEME_ENV: &str = "SLOTDIRS_THEME";

const APP_DIR: &str = "slotdirs";
const SLOT_FILE: &str = "slots.json";

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the persisted slot document.
    pub config_path: PathBuf,
    /// Program launched to reveal a directory; platform default when `None`.
    pub opener_command: Option<String>,
    pub appearance: Appearance,
}

impl AppConfig {
    /// Create a configuration with a custom slot file and default settings.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { config_path: path.into(), opener_command: None, appearance: Appearance::default() }
    }

    /// Resolve configuration from an explicit path, the environment, and platform defaults.
    ///
    /// Precedence for the slot file: `explicit_path`, then `$SLOTDIRS_CONFIG`,
    /// then `<config dir>/slotdirs/slots.json`.
    pub fn resolve(explicit_path: Option<PathBuf>) -> Result<Self, AppError> {
        let config_path = match explicit_path.or_else(|| non_empty_var(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => path,
            None => default_config_path()?,
        };

        let appearance = match non_empty_var(THEME_ENV) {
            Some(name) => Appearance::new(AppearanceMode::from_name(&name)?),
            None => Appearance::default(),
        };

        Ok(Self { config_path, opener_command: non_empty_var(OPENER_ENV), appearance })
    }

    /// Directory opener honouring `opener_command`.
    pub fn opener(&self) -> SystemDirectoryOpener {
        match &self.opener_command {
            Some(program) => SystemDirectoryOpener::with_program(program.clone()),
            None => SystemDirectoryOpener::new(),
        }
    }
}

/// `<platform config dir>/slotdirs/slots.json`.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let base = dirs::config_dir()
        .ok_or_else(|| AppError::config_error("Could not determine the user configuration directory"))?;
    Ok(base.join(APP_DIR).join(SLOT_FILE))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
