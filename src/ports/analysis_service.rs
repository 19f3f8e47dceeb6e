//! Analysis Service Port - the external AHP computation.
//!
//! The domain hands over an ordered batch of files and gets back one
//! `FileAnalysis` per file in the same order. Adapters own the transport.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{BatchResult, FileAnalysis};
use crate::domain::foundation::UploadFailure;
use crate::domain::upload::BatchRequest;

/// Port for submitting a batch to the analysis service.
///
/// # Contract
///
/// Implementations must:
/// - Send every file in `request` exactly once, in order
/// - Make at most one outbound call per invocation and never retry
/// - Map every transport, status, and decoding problem to `UploadFailure`
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit `request` and return the decoded response, including the
    /// service's status message.
    async fn analyze(&self, request: &BatchRequest) -> Result<AnalysisResponse, UploadFailure>;
}

/// Success body of the analysis service, contract version 2.
///
/// Only the `data` envelope is accepted. A single file is a one-element
/// `data` array; the older inlined single-file shape is not parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub data: Vec<FileAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns `UploadFailure::MalformedPayload` if the body is not a v2
    /// envelope.
    pub fn decode(body: &[u8]) -> Result<Self, UploadFailure> {
        serde_json::from_slice(body).map_err(|e| UploadFailure::malformed(e.to_string()))
    }

    /// Wraps a batch with no status message.
    pub fn from_batch(batch: BatchResult) -> Self {
        Self {
            data: batch.files().to_vec(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Splits into the batch and the status message shown on success.
    pub fn into_parts(self) -> (BatchResult, Option<String>) {
        (BatchResult::new(self.data), self.message)
    }
}
