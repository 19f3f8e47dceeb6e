//! BatchRequest - the ordered set of files sent in one submission.

use super::{FileHandle, SlotManager};
use crate::domain::foundation::{ReportError, SubmissionId};

/// Files to analyse, in slot order, tagged with the submission they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    submission_id: SubmissionId,
    files: Vec<FileHandle>,
}

impl BatchRequest {
    /// Snapshots the slots into a request.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Validation` listing the empty positions if any
    /// slot is unfilled, or if there are no slots at all.
    pub fn from_slots(slots: &SlotManager) -> Result<Self, ReportError> {
        let empty_slots = slots.empty_positions();
        if slots.is_empty() || !empty_slots.is_empty() {
            return Err(ReportError::Validation {
                empty_slots,
                total: slots.len(),
            });
        }

        let files = slots
            .slots()
            .iter()
            .filter_map(|slot| slot.file().cloned())
            .collect();

        Ok(Self {
            submission_id: SubmissionId::new(),
            files,
        })
    }

    pub fn submission_id(&self) -> SubmissionId {
        self.submission_id
    }

    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    /// Filenames in submission order.
    pub fn filenames(&self) -> Vec<&str> {
        self.files.iter().map(FileHandle::filename).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
