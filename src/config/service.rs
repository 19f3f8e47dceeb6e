//! Analysis service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how batches are submitted
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the analysis service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the upload endpoint
    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    /// Multipart field name, repeated once per file
    #[serde(default = "default_field_name")]
    pub field_name: String,

    /// Upper bound on one submission, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional bearer token
    pub api_token: Option<Secret<String>>,
}

impl ServiceConfig {
    /// Full upload endpoint URL
    pub fn upload_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.upload_path
        )
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The bearer token, if one is configured and non-empty
    pub fn api_token(&self) -> Option<&str> {
        self.api_token
            .as_ref()
            .map(|t| t.expose_secret().as_str())
            .filter(|t| !t.is_empty())
    }

    /// Validate service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidServiceUrl);
        }
        if !self.upload_path.starts_with('/') {
            return Err(ValidationError::InvalidUploadPath);
        }
        if self.field_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SERVICE__FIELD_NAME"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_path: default_upload_path(),
            field_name: default_field_name(),
            timeout_secs: default_timeout(),
            api_token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_upload_path() -> String {
    "/uploadfile/".to_string()
}

fn default_field_name() -> String {
    "files".to_string()
}

fn default_timeout() -> u64 {
    60
}
