//! Application layer - handlers and the session that drives them.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod session;
mod shared_store;

pub use handlers::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ExportTarget,
    SubmitBatchHandler, SubmitBatchResult,
};
pub use session::{ReportSession, SessionSetupError};
pub use shared_store::SharedResultStore;
