//! Mock Analysis Service for testing.
//!
//! # Features
//!
//! - Queued responses (consumed in order), echoing the request when empty
//! - A gate that holds a call pending until released
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockAnalysisService::new().with_failure(UploadFailure::status(500, "boom"));
//! let err = service.analyze(&request).await.unwrap_err();
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

use crate::domain::analysis::{BatchResult, EngineerResult, FileAnalysis, Priorities};
use crate::domain::foundation::UploadFailure;
use crate::domain::upload::BatchRequest;
use crate::ports::{AnalysisResponse, AnalysisService};

/// Status message of the default echo response.
pub const ECHO_MESSAGE: &str = "Files processed successfully";

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this response verbatim.
    Success(AnalysisResponse),
    /// Return this failure.
    Failure(UploadFailure),
}

/// Mock analysis service.
#[derive(Debug, Clone, Default)]
pub struct MockAnalysisService {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    delay: Duration,
    gate: Option<Arc<Notify>>,
    started: Arc<Notify>,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful batch with no status message.
    pub fn with_batch(self, batch: BatchResult) -> Self {
        self.with_response(AnalysisResponse::from_batch(batch))
    }

    /// Queues a full successful response.
    pub fn with_response(self, response: AnalysisResponse) -> Self {
        self.push(MockResponse::Success(response));
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: UploadFailure) -> Self {
        self.push(MockResponse::Failure(failure));
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Holds every call until [`Self::release`] is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Lets one gated call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Resolves once a call has entered `analyze`.
    pub async fn call_started(&self) {
        self.started.notified().await;
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Filenames of every call, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.lock_calls().clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<Vec<String>>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// One two-criterion record per filename.
    pub fn echo(request: &BatchRequest) -> BatchResult {
        BatchResult::new(
            request
                .files()
                .iter()
                .map(|file| FileAnalysis {
                    filename: file.filename().to_string(),
                    results: vec![EngineerResult {
                        engineer: "Engineer 1".to_string(),
                        matrix: vec![vec![1.0, 3.0], vec![0.333, 1.0]],
                        priorities: Priorities {
                            weights: vec![0.75, 0.25],
                            max_eigenvalue: 2.0,
                            ci: 0.0,
                            cr: 0.0,
                            ri: 0.0,
                        },
                    }],
                    aggregate_result: None,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, request: &BatchRequest) -> Result<AnalysisResponse, UploadFailure> {
        self.lock_calls().push(
            request
                .filenames()
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Failure(failure)) => Err(failure),
            None => {
                Ok(AnalysisResponse::from_batch(Self::echo(request)).with_message(ECHO_MESSAGE))
            }
        }
    }
}
