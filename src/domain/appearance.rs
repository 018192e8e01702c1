use serde::Serialize;

use super::AppError;

/// Light/dark preference handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
    System,
}

impl AppearanceMode {
    pub fn from_name(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            "system" => Ok(AppearanceMode::System),
            other => Err(AppError::config_error(format!(
                "Unknown appearance '{}': must be one of light, dark, system",
                other
            ))),
        }
    }
}

/// Accent colours for slot controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bound: String,
    pub unbound: String,
}

/// Explicit appearance settings, passed through the application context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub mode: AppearanceMode,
    pub palette: Palette,
}

impl Appearance {
    pub fn new(mode: AppearanceMode) -> Self {
        let palette = match mode {
            AppearanceMode::Light | AppearanceMode::System => {
                Palette { bound: "#27ae60".to_string(), unbound: "#3b8ed0".to_string() }
            }
            AppearanceMode::Dark => {
                Palette { bound: "#2ecc71".to_string(), unbound: "#1f6aa5".to_string() }
            }
        };
        Self { mode, palette }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(AppearanceMode::default())
    }
}
