use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::AppError;

/// A validated slot identifier.
///
/// Guarantees:
/// - Strictly positive
/// - Parsed from plain decimal text (no sign, no whitespace)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(NonZeroU32);

impl SlotId {
    /// The identifier handed out when a registry is empty.
    pub const FIRST: SlotId = SlotId(NonZeroU32::MIN);

    /// Create a slot identifier, rejecting zero.
    pub fn new(value: u32) -> Result<Self, AppError> {
        NonZeroU32::new(value).map(SlotId).ok_or_else(|| AppError::InvalidSlotId(value.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The identifier following this one, if it fits.
    pub fn next(self) -> Option<SlotId> {
        self.0.checked_add(1).map(SlotId)
    }
}

impl FromStr for SlotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidSlotId(s.to_string()));
        }
        let value: u32 = s.parse().map_err(|_| AppError::InvalidSlotId(s.to_string()))?;
        SlotId::new(value).map_err(|_| AppError::InvalidSlotId(s.to_string()))
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SlotId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

/// A named binding point holding zero or one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub name: String,
    pub path: Option<PathBuf>,
}

impl Slot {
    /// Create an unbound slot.
    pub fn new(id: SlotId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), path: None }
    }

    pub fn is_bound(&self) -> bool {
        self.path.is_some()
    }

    /// Label for the bound directory, if any.
    pub fn label(&self) -> Option<String> {
        self.path.as_deref().map(display_label)
    }
}

/// Placeholder display name for a slot created without one.
pub fn placeholder_name(id: SlotId) -> String {
    format!("Slot {}", id)
}

/// Last path segment, or the whole path for filesystem roots.
pub fn display_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}

/// True when `path` currently names an existing directory.
pub fn is_existing_dir(path: &Path) -> bool {
    path.is_dir()
}
