//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `analysis` - Analysis service clients (HTTP, mock)
//! - `export` - Document renderers (PDF, JSON)
//! - `storage` - Artifact persistence on the local filesystem

pub mod analysis;
pub mod export;
pub mod storage;

pub use analysis::{HttpAnalysisService, MockAnalysisService, MockResponse, ECHO_MESSAGE};
pub use export::{renderer_for, JsonRenderer, PdfRenderer};
pub use storage::{load_file_handle, LocalArtifactStorage};
