//! Domain layer containing the report types and algorithms.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, statuses, errors)
//! - `upload` - Input slots and the batch request built from them
//! - `analysis` - Records returned by the analysis service
//! - `results` - Stored batch result and per-file visibility
//! - `report` - On-screen projections of stored records
//! - `export` - Paginated export layout

pub mod analysis;
pub mod export;
pub mod foundation;
pub mod report;
pub mod results;
pub mod upload;
