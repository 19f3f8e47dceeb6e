//! Command handlers.

pub mod report;

pub use report::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ExportTarget,
    SubmitBatchHandler, SubmitBatchResult,
};
