//! AHP Report - batch analysis and export for pairwise-comparison surveys
//!
//! Collects one or more survey files into ordered slots, submits them as a
//! single batch to an external AHP analysis service, keeps the returned
//! per-file results with independent show/hide state, and lays any file's
//! results out as a paginated document (PDF or JSON).
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! let mut session = ReportSession::from_config(&config)?;
//! session.set_file(0, load_file_handle("survey.csv").await?)?;
//! session.submit().await?;
//! session.save_export(0).await?;
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::ReportSession;
pub use config::AppConfig;
pub use domain::foundation::ReportError;
