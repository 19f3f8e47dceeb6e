//! Result Store - the current batch result plus per-file visibility.

use tracing::{debug, info};

use super::VisibilityMap;
use crate::domain::analysis::{BatchResult, FileAnalysis};
use crate::domain::foundation::{ReportError, SubmissionId, Timestamp};

/// Where a stored batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultOrigin {
    pub submission_id: SubmissionId,
    pub received_at: Timestamp,
}

/// Holds the latest successful `BatchResult`.
///
/// Replacement is all-or-nothing and always resets visibility, so a new
/// batch starts fully hidden.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    batch: BatchResult,
    visibility: VisibilityMap,
    origin: Option<ResultOrigin>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in `batch` and clears every visibility flag.
    pub fn replace(&mut self, batch: BatchResult, submission_id: SubmissionId) {
        info!(
            submission_id = %submission_id,
            files = batch.len(),
            "Replacing stored batch result"
        );
        self.batch = batch;
        self.visibility.clear();
        self.origin = Some(ResultOrigin {
            submission_id,
            received_at: Timestamp::now(),
        });
    }

    /// Flips visibility for file `index` and returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Index` if `index` is outside the stored batch.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ReportError> {
        self.check_index(index)?;
        let visible = self.visibility.toggle(index);
        debug!(index, visible, "Toggled result visibility");
        Ok(visible)
    }

    /// Current flag for `index`; false for anything never toggled.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.is_visible(index)
    }

    /// The stored analysis for file `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Index` if `index` is outside the stored batch.
    pub fn get(&self, index: usize) -> Result<&FileAnalysis, ReportError> {
        self.batch
            .get(index)
            .ok_or(ReportError::index(index, self.batch.len()))
    }

    pub fn batch(&self) -> &BatchResult {
        &self.batch
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn origin(&self) -> Option<ResultOrigin> {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), ReportError> {
        if index < self.batch.len() {
            Ok(())
        } else {
            Err(ReportError::index(index, self.batch.len()))
        }
    }
}
