use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{AppError, Slot, SlotDocument, SlotEntry, SlotId, placeholder_name};

/// In-memory mapping of slot identifiers to slots.
///
/// Pure bookkeeping: no filesystem or persistence access. Existence checks
/// are supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTable {
    slots: BTreeMap<SlotId, Slot>,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: SlotDocument) -> Self {
        let slots = document
            .into_iter()
            .map(|(id, entry)| (id, Slot { id, name: entry.name, path: entry.path }))
            .collect();
        Self { slots }
    }

    pub fn to_document(&self) -> SlotDocument {
        self.slots
            .values()
            .map(|slot| (slot.id, SlotEntry::new(slot.name.clone(), slot.path.clone())))
            .collect()
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Slots in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Max existing identifier + 1, or 1 when empty.
    pub fn next_id(&self) -> Result<SlotId, AppError> {
        match self.slots.keys().next_back() {
            None => Ok(SlotId::FIRST),
            Some(last) => last
                .next()
                .ok_or_else(|| AppError::Validation("No slot identifiers left".to_string())),
        }
    }

    /// Create an unbound slot; a blank name gets the placeholder.
    pub fn add(&mut self, name: &str) -> Result<SlotId, AppError> {
        let id = self.next_id()?;
        let name = name.trim();
        let name = if name.is_empty() { placeholder_name(id) } else { name.to_string() };
        self.slots.insert(id, Slot::new(id, name));
        Ok(id)
    }

    pub fn remove(&mut self, id: SlotId) -> Option<Slot> {
        self.slots.remove(&id)
    }

    pub fn bind(&mut self, id: SlotId, path: PathBuf) -> Result<(), AppError> {
        self.slot_mut(id)?.path = Some(path);
        Ok(())
    }

    /// Clear the binding, returning the previous path.
    pub fn unbind(&mut self, id: SlotId) -> Result<Option<PathBuf>, AppError> {
        Ok(self.slot_mut(id)?.path.take())
    }

    pub fn rename(&mut self, id: SlotId, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Slot name must not be empty".to_string()));
        }
        self.slot_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Unbind every slot, returning how many were bound.
    pub fn unbind_all(&mut self) -> usize {
        self.slots.values_mut().filter_map(|slot| slot.path.take()).count()
    }

    /// Unbind each slot whose path fails `exists`, returning their ids.
    pub fn unbind_missing<F>(&mut self, exists: F) -> Vec<SlotId>
    where
        F: Fn(&Path) -> bool,
    {
        let mut unbound = Vec::new();
        for slot in self.slots.values_mut() {
            if slot.path.as_deref().is_some_and(|path| !exists(path)) {
                slot.path = None;
                unbound.push(slot.id);
            }
        }
        unbound
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut Slot, AppError> {
        self.slots.get_mut(&id).ok_or(AppError::SlotNotFound(id))
    }
}
