use std::path::Path;
use std::process::Command;

use log::debug;

use crate::domain::AppError;
use crate::ports::DirectoryOpener;

#[cfg(target_os = "windows")]
const PLATFORM_OPENER: &str = "explorer";
#[cfg(target_os = "macos")]
const PLATFORM_OPENER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const PLATFORM_OPENER: &str = "xdg-open";

/// Opens directories with the platform file browser, or an override program.
#[derive(Debug, Clone)]
pub struct SystemDirectoryOpener {
    program: String,
}

impl SystemDirectoryOpener {
    /// Use the platform default launcher.
    pub fn new() -> Self {
        Self { program: PLATFORM_OPENER.to_string() }
    }

    /// Use a specific launcher program instead of the platform default.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemDirectoryOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryOpener for SystemDirectoryOpener {
    fn open_directory(&self, path: &Path) -> Result<(), AppError> {
        debug!("Opening {} with {}", path.display(), self.program);
        let open_error =
            |details: String| AppError::DirectoryOpen { path: path.to_path_buf(), details };

        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .map_err(|err| open_error(format!("failed to run '{}': {}", self.program, err)))?;

        // explorer.exe reports a non-zero status even when the window opens.
        if !status.success() && !cfg!(target_os = "windows") {
            return Err(open_error(format!("'{}' exited with {}", self.program, status)));
        }
        Ok(())
    }
}
