//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller errors
    ValidationFailed,
    SubmissionInFlight,
    IndexOutOfRange,

    // External errors
    UploadFailed,

    // Local rendering errors
    ExportFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::UploadFailed => "UPLOAD_FAILED",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Failure of the outbound batch call to the analysis service.
///
/// Every variant is presented to the user as the same marker
/// ([`UploadFailure::USER_MESSAGE`]); the variants exist for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadFailure {
    /// Connection refused, DNS failure, reset, etc.
    #[error("network error: {0}")]
    Network(String),

    /// The submission exceeded the configured bound.
    #[error("submission timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded or does not match the submitted batch.
    #[error("malformed response payload: {0}")]
    MalformedPayload(String),
}

impl UploadFailure {
    /// The single human-readable marker shown for any upload failure.
    pub const USER_MESSAGE: &'static str = "Error uploading files";

    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Returns the user-facing marker.
    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// Errors that can occur while turning a layout into an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The renderer could not encode the document.
    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    /// I/O error while persisting an artifact.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a rendering error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

/// Crate-level error for every report operation.
///
/// All kinds are terminal for the operation that raised them. Only
/// [`ReportError::Upload`] originates outside the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("not all slots filled: {} of {total} empty", empty_slots.len())]
    Validation {
        empty_slots: Vec<usize>,
        total: usize,
    },

    #[error("a submission is already in flight")]
    Busy,

    #[error("upload failed: {0}")]
    Upload(#[from] UploadFailure),

    #[error("index {index} is out of range for {len} entries")]
    Index { index: usize, len: usize },

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl ReportError {
    /// Creates an index error.
    pub fn index(index: usize, len: usize) -> Self {
        Self::Index { index, len }
    }

    /// Returns the stable machine code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::Validation { .. } => ErrorCode::ValidationFailed,
            ReportError::Busy => ErrorCode::SubmissionInFlight,
            ReportError::Upload(_) => ErrorCode::UploadFailed,
            ReportError::Index { .. } => ErrorCode::IndexOutOfRange,
            ReportError::Export(_) => ErrorCode::ExportFailed,
        }
    }

    /// True only for errors that need a message in front of the user.
    ///
    /// The rest indicate caller misuse.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ReportError::Upload(_))
    }
}
