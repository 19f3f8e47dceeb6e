//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, statuses, and error types
//! that form the vocabulary of the report domain.

mod errors;
mod ids;
mod state_machine;
mod submission_status;
mod timestamp;

pub use errors::{ErrorCode, ExportError, ReportError, UploadFailure};
pub use ids::SubmissionId;
pub use state_machine::{InvalidTransition, StateMachine};
pub use submission_status::SubmissionStatus;
pub use timestamp::Timestamp;
