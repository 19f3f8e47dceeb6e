//! Local filesystem artifact storage.
//!
//! Writes each document to `<output_dir>/<filename>` via a temporary
//! sibling and a rename, so readers never observe a half-written file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::foundation::ExportError;
use crate::domain::upload::FileHandle;
use crate::ports::{ArtifactStorage, ExportedDocument};

/// Saves exported documents under a base directory.
#[derive(Debug, Clone)]
pub struct LocalArtifactStorage {
    base_path: PathBuf,
}

impl LocalArtifactStorage {
    /// Create a new storage rooted at `base_path`.
    ///
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn artifact_path(&self, filename: &str) -> Result<PathBuf, ExportError> {
        let name = Path::new(filename);
        match name.file_name() {
            Some(file_name) if file_name == name.as_os_str() => Ok(self.base_path.join(name)),
            _ => Err(ExportError::io_error(format!(
                "refusing to write outside the output directory: {}",
                filename
            ))),
        }
    }
}

#[async_trait]
impl ArtifactStorage for LocalArtifactStorage {
    async fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        let target = self.artifact_path(&document.filename)?;

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ExportError::io_error(e.to_string()))?;

        let partial = self.base_path.join(format!(".{}.partial", document.filename));
        fs::write(&partial, &document.content)
            .await
            .map_err(|e| ExportError::io_error(e.to_string()))?;

        if let Err(e) = fs::rename(&partial, &target).await {
            let _ = fs::remove_file(&partial).await;
            return Err(ExportError::io_error(e.to_string()));
        }

        info!(
            path = %target.display(),
            bytes = document.content.len(),
            format = %document.format,
            "Saved export"
        );
        Ok(target)
    }
}

/// Reads a file from disk into an upload handle named after its final
/// path component.
pub async fn load_file_handle(
    path: impl AsRef<Path>,
) -> std::io::Result<FileHandle> {
    let path = path.as_ref();
    let bytes = fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FileHandle::new(filename, bytes))
}
