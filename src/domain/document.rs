//! The configuration document: the sole unit of persistence.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::SlotId;

/// Persisted state of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl SlotEntry {
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self { name: name.into(), path }
    }
}

/// Complete persisted representation of all slots and their bindings.
///
/// Slot identifiers are unique by construction. Order carries no meaning;
/// iteration is ascending by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotDocument {
    entries: BTreeMap<SlotId, SlotEntry>,
}

impl SlotDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SlotId, entry: SlotEntry) -> Option<SlotEntry> {
        self.entries.insert(id, entry)
    }

    pub fn get(&self, id: SlotId) -> Option<&SlotEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &SlotEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SlotId, SlotEntry)> for SlotDocument {
    fn from_iter<T: IntoIterator<Item = (SlotId, SlotEntry)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for SlotDocument {
    type Item = (SlotId, SlotEntry);
    type IntoIter = std::collections::btree_map::IntoIter<SlotId, SlotEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
