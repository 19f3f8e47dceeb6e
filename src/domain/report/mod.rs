//! Report module - on-screen projections of stored results.

mod format;
mod renderer;

pub use format::{format_number, format_weights, Field, AGGREGATE_HEADING};
pub use renderer::{
    ReportBody, ReportRenderer, ReportView, ResultTable, SummaryRow, HIDE_LABEL, SHOW_LABEL,
};
