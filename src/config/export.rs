//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// How exported documents are named, rendered, and saved
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Artifact name without extension
    #[serde(default = "default_filename")]
    pub default_filename: String,

    /// Directory that saved artifacts go to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// PDF font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Output format
    #[serde(default)]
    pub format: ExportFormat,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_filename.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EXPORT__DEFAULT_FILENAME"));
        }
        if self.default_filename.contains(['/', '\\']) {
            return Err(ValidationError::InvalidFilename);
        }
        if !(self.font_size > 0.0) {
            return Err(ValidationError::InvalidFontSize);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_filename: default_filename(),
            output_dir: default_output_dir(),
            font_size: default_font_size(),
            format: ExportFormat::default(),
        }
    }
}

fn default_filename() -> String {
    "ahp_analysis".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_font_size() -> f64 {
    16.0
}
