//! Report handlers: batch submission and export.

mod export_report;
mod submit_batch;

pub use export_report::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ExportTarget,
};
pub use submit_batch::{SubmitBatchHandler, SubmitBatchResult};
