//! Result store shared between the submission path and readers.
//!
//! Locks are held only for synchronous sections, never across an await,
//! so toggling and exporting proceed while a submission is pending.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::results::ResultStore;

#[derive(Debug, Clone, Default)]
pub struct SharedResultStore {
    inner: Arc<RwLock<ResultStore>>,
}

impl SharedResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned lock still holds a consistent store: every mutation is a
    /// single assignment or a map insert.
    pub fn read(&self) -> RwLockReadGuard<'_, ResultStore> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, ResultStore> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_store() {
        let a = SharedResultStore::new();
        let b = a.clone();
        b.write()
            .replace(Default::default(), crate::domain::foundation::SubmissionId::new());
        assert!(a.read().origin().is_some());
    }
}
