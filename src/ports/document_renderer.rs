//! Document Renderer Port - turns a layout into downloadable bytes.
//!
//! Rendering is synchronous and performs no I/O; persisting the result is
//! the job of [`super::ArtifactStorage`].

use serde::{Deserialize, Serialize};

use crate::domain::export::ExportLayout;
use crate::domain::foundation::ExportError;

/// Port for encoding an [`ExportLayout`] in one output format.
///
/// # Contract
///
/// Implementations must:
/// - Produce the same bytes for the same layout
/// - Keep every page and line of the layout
pub trait DocumentRenderer: Send + Sync {
    /// The format this renderer emits.
    fn format(&self) -> ExportFormat;

    /// Encode `layout`.
    fn render(&self, layout: &ExportLayout) -> Result<Vec<u8>, ExportError>;
}

/// Export formats supported by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Fixed-layout PDF document.
    #[default]
    Pdf,
    /// The layout itself as JSON.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document named `<base_filename>.<ext>`.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}
