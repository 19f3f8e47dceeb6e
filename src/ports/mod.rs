//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalysisService` - submits a batch to the external AHP service
//! - `DocumentRenderer` - encodes an export layout (PDF, JSON)
//! - `ArtifactStorage` - saves exported documents

mod analysis_service;
mod artifact_storage;
mod document_renderer;

pub use analysis_service::{AnalysisResponse, AnalysisService};
pub use artifact_storage::ArtifactStorage;
pub use document_renderer::{DocumentRenderer, ExportFormat, ExportedDocument};
