//! VisibilityMap - per-file show/hide flags.

use std::collections::HashMap;

/// Visibility flag per file index. Absent entries are hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    flags: HashMap<usize, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag at `index` and returns the new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        let flag = self.flags.entry(index).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.flags.get(&index).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Number of indices ever toggled.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
