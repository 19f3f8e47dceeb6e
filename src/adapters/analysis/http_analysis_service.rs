//! HTTP Analysis Service - reqwest implementation of `AnalysisService`.
//!
//! Posts every file of a batch as one multipart form, repeating the same
//! field name once per file in slot order, and decodes the v2 `data`
//! envelope.
//!
//! # Example
//!
//! ```ignore
//! let service = HttpAnalysisService::new(&config.service)?;
//! let (batch, message) = service.analyze(&request).await?.into_parts();
//! ```

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::domain::foundation::UploadFailure;
use crate::domain::upload::BatchRequest;
use crate::ports::{AnalysisResponse, AnalysisService};

/// Longest error body kept in an `UploadFailure::Status`.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Analysis service reached over HTTP.
pub struct HttpAnalysisService {
    client: Client,
    upload_url: String,
    field_name: String,
    api_token: Option<Secret<String>>,
    timeout: Duration,
}

impl HttpAnalysisService {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `UploadFailure::Network` if the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self, UploadFailure> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| UploadFailure::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            upload_url: config.upload_url(),
            field_name: config.field_name.clone(),
            api_token: config.api_token().map(|t| Secret::new(t.to_string())),
            timeout: config.timeout(),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// One part per file, same field name, slot order.
    fn build_form(&self, request: &BatchRequest) -> Result<Form, UploadFailure> {
        let mut form = Form::new();
        for file in request.files() {
            let part = Part::bytes(file.bytes().to_vec())
                .file_name(file.filename().to_string())
                .mime_str(file.content_type())
                .map_err(|e| {
                    UploadFailure::network(format!(
                        "Invalid content type '{}' for {}: {}",
                        file.content_type(),
                        file.filename(),
                        e
                    ))
                })?;
            form = form.part(self.field_name.clone(), part);
        }
        Ok(form)
    }

    fn map_send_error(&self, e: reqwest::Error) -> UploadFailure {
        if e.is_timeout() {
            UploadFailure::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else if e.is_connect() {
            UploadFailure::network(format!("Connection failed: {}", e))
        } else {
            UploadFailure::network(e.to_string())
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &BatchRequest) -> Result<AnalysisResponse, UploadFailure> {
        let form = self.build_form(request)?;

        let mut builder = self.client.post(&self.upload_url).multipart(form);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        debug!(
            submission_id = %request.submission_id(),
            url = %self.upload_url,
            files = request.len(),
            "Posting batch"
        );

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let text: String = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            return Err(UploadFailure::status(status.as_u16(), text));
        }

        AnalysisResponse::decode(&body)
    }
}
