//! Analysis Module - records produced by the external AHP service.
//!
//! # Components
//!
//! - `FileAnalysis` / `BatchResult` - per-file records in submission order
//! - `EngineerResult` / `AggregateResult` - one matrix and its priorities
//! - `consistency` - CI, RI and CR helpers for labelling results
//!
//! The service does the eigenvector work; nothing here recomputes weights.

mod consistency;
mod records;

pub use consistency::{
    consistency_index, consistency_ratio, random_index, ConsistencyMetrics,
    CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use records::{AggregateResult, BatchResult, EngineerResult, FileAnalysis, Priorities};
