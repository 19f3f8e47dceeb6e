//! Slot Manager - the ordered, growable list of input slots.

use tracing::debug;

use super::FileHandle;
use crate::domain::foundation::ReportError;

/// One input position. Empty until the user picks a file for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSlot {
    position: usize,
    file: Option<FileHandle>,
}

impl InputSlot {
    fn empty(position: usize) -> Self {
        Self {
            position,
            file: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }
}

/// Owns the input slots.
///
/// Slots only ever grow at the end, so positions always form the contiguous
/// prefix `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotManager {
    slots: Vec<InputSlot>,
}

impl SlotManager {
    /// Creates a manager with no slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with `count` empty slots.
    pub fn with_slots(count: usize) -> Self {
        let mut manager = Self::new();
        for _ in 0..count {
            manager.add_slot();
        }
        manager
    }

    /// Appends one empty slot and returns its position.
    pub fn add_slot(&mut self) -> usize {
        let position = self.slots.len();
        self.slots.push(InputSlot::empty(position));
        debug!(position, "Added input slot");
        position
    }

    /// Places `handle` in the slot at `index`, replacing any previous file.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Index` if no slot exists at `index`.
    pub fn set_file(&mut self, index: usize, handle: FileHandle) -> Result<(), ReportError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ReportError::index(index, len))?;
        debug!(position = index, filename = handle.filename(), "Set slot file");
        slot.file = Some(handle);
        Ok(())
    }

    /// True iff every slot holds a file. Vacuously true with no slots.
    pub fn all_filled(&self) -> bool {
        self.slots.iter().all(InputSlot::is_filled)
    }

    /// Positions of slots still awaiting a file, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|slot| !slot.is_filled())
            .map(InputSlot::position)
            .collect()
    }

    pub fn slots(&self) -> &[InputSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
