//! Artifact Storage Port - where exported documents are saved.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::foundation::ExportError;
use crate::ports::ExportedDocument;

/// Port for persisting exported documents.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial artifact on failure)
/// - Overwrite an existing artifact of the same name
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Persist `document` under its own filename and return where it went.
    async fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError>;
}
