//! SubmitBatchHandler - sends every filled slot to the analysis service.
//!
//! At most one submission is in flight. A successful response replaces the
//! stored batch wholesale and keeps the service's status message; any
//! failure leaves the batch exactly as it was and sets the user-facing error
//! marker.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::application::SharedResultStore;
use crate::domain::foundation::{
    ReportError, StateMachine, SubmissionId, SubmissionStatus, UploadFailure,
};
use crate::domain::upload::{BatchRequest, SlotManager};
use crate::ports::AnalysisService;

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitBatchResult {
    pub submission_id: SubmissionId,
    pub file_count: usize,
    pub elapsed: Duration,
    /// Status message sent by the service, if any.
    pub message: Option<String>,
}

#[derive(Debug, Default)]
struct SubmissionState {
    status: SubmissionStatus,
    last_error: Option<&'static str>,
    last_message: Option<String>,
}

/// How an in-flight submission ended.
enum Settlement {
    Succeeded { message: Option<String> },
    Failed,
}

/// Handler for batch submissions.
pub struct SubmitBatchHandler {
    service: Arc<dyn AnalysisService>,
    store: SharedResultStore,
    timeout: Duration,
    state: Mutex<SubmissionState>,
}

impl SubmitBatchHandler {
    pub fn new(
        service: Arc<dyn AnalysisService>,
        store: SharedResultStore,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            store,
            timeout,
            state: Mutex::new(SubmissionState::default()),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock_state().status
    }

    pub fn is_busy(&self) -> bool {
        self.status().is_pending()
    }

    /// The user-facing marker left by the last failed submission.
    pub fn last_error(&self) -> Option<&'static str> {
        self.lock_state().last_error
    }

    /// The service's status message from the last successful submission.
    pub fn last_message(&self) -> Option<String> {
        self.lock_state().last_message.clone()
    }

    pub async fn handle(&self, slots: &SlotManager) -> Result<SubmitBatchResult, ReportError> {
        // 1. Validate locally; nothing is sent for an incomplete batch
        let request = BatchRequest::from_slots(slots)?;

        // 2. Claim the in-flight slot
        let mut in_flight = self.begin()?;
        let submission_id = request.submission_id();
        info!(
            submission_id = %submission_id,
            files = request.len(),
            "Submitting batch"
        );

        // 3. Call the service within the configured bound
        let started = Instant::now();
        let outcome = match tokio::time::timeout(self.timeout, self.service.analyze(&request)).await
        {
            Ok(result) => result,
            Err(_) => Err(UploadFailure::Timeout {
                secs: self.timeout.as_secs(),
            }),
        }
        .and_then(|response| {
            let (batch, message) = response.into_parts();
            batch.verify_against(&request.filenames())?;
            Ok((batch, message))
        });
        let elapsed = started.elapsed();

        // 4. Apply atomically, or leave the store untouched
        match outcome {
            Ok((batch, message)) => {
                let file_count = batch.len();
                self.store.write().replace(batch, submission_id);
                in_flight.settle(Settlement::Succeeded {
                    message: message.clone(),
                });
                info!(
                    submission_id = %submission_id,
                    files = file_count,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Batch analysis stored"
                );
                Ok(SubmitBatchResult {
                    submission_id,
                    file_count,
                    elapsed,
                    message,
                })
            }
            Err(failure) => {
                warn!(
                    submission_id = %submission_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %failure,
                    "Batch submission failed"
                );
                in_flight.settle(Settlement::Failed);
                Err(failure.into())
            }
        }
    }

    fn begin(&self) -> Result<InFlight<'_>, ReportError> {
        let mut state = self.lock_state();
        state.status = state
            .status
            .transition_to(SubmissionStatus::Pending)
            .map_err(|_| ReportError::Busy)?;
        Ok(InFlight {
            state: &self.state,
            settled: false,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Releases the pending status when dropped, including when the
/// submitting future is dropped mid-call.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, settlement: Settlement) {
        let mut state = lock(self.state);
        match settlement {
            Settlement::Succeeded { message } => {
                state.status = SubmissionStatus::Succeeded;
                state.last_error = None;
                state.last_message = message;
            }
            Settlement::Failed => {
                state.status = SubmissionStatus::Failed;
                state.last_error = Some(UploadFailure::USER_MESSAGE);
                state.last_message = None;
            }
        }
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.settle(Settlement::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockAnalysisService, ECHO_MESSAGE};
    use crate::domain::analysis::{BatchResult, FileAnalysis};
    use crate::domain::upload::{BatchRequest, FileHandle};
    use crate::ports::AnalysisResponse;

    fn filled(names: &[&str]) -> SlotManager {
        let mut slots = SlotManager::with_slots(names.len());
        for (i, name) in names.iter().enumerate() {
            slots.set_file(i, FileHandle::new(*name, b"1".to_vec())).unwrap();
        }
        slots
    }

    fn handler(service: MockAnalysisService) -> (SubmitBatchHandler, SharedResultStore) {
        let store = SharedResultStore::new();
        let handler = SubmitBatchHandler::new(
            Arc::new(service),
            store.clone(),
            Duration::from_secs(5),
        );
        (handler, store)
    }

    #[tokio::test]
    async fn success_replaces_store_and_clears_error() {
        let service = MockAnalysisService::new().with_failure(UploadFailure::network("reset"));
        let (handler, store) = handler(service.clone());
        let slots = filled(&["a.csv", "b.csv"]);

        assert!(handler.handle(&slots).await.is_err());
        assert_eq!(handler.last_error(), Some("Error uploading files"));

        let result = handler.handle(&slots).await.unwrap();
        assert_eq!(result.file_count, 2);
        assert_eq!(handler.status(), SubmissionStatus::Succeeded);
        assert_eq!(handler.last_error(), None);
        assert_eq!(result.message.as_deref(), Some(ECHO_MESSAGE));

        let stored = store.read();
        assert_eq!(stored.get(0).unwrap().filename, "a.csv");
        assert_eq!(stored.get(1).unwrap().filename, "b.csv");
        assert_eq!(stored.origin().unwrap().submission_id, result.submission_id);
    }

    #[tokio::test]
    async fn service_message_is_kept_until_next_failure() {
        let slots = filled(&["a.csv"]);
        let batch = MockAnalysisService::echo(&BatchRequest::from_slots(&slots).unwrap());
        let service = MockAnalysisService::new()
            .with_response(AnalysisResponse::from_batch(batch).with_message("2 engineers analysed"))
            .with_failure(UploadFailure::status(500, "boom"));
        let (handler, _) = handler(service);

        let result = handler.handle(&slots).await.unwrap();
        assert_eq!(result.message.as_deref(), Some("2 engineers analysed"));
        assert_eq!(handler.last_message().as_deref(), Some("2 engineers analysed"));

        assert!(handler.handle(&slots).await.is_err());
        assert_eq!(handler.last_message(), None);
        assert_eq!(handler.last_error(), Some("Error uploading files"));
    }

    #[tokio::test]
    async fn incomplete_slots_never_reach_the_service() {
        let service = MockAnalysisService::new();
        let (handler, _) = handler(service.clone());
        let mut slots = filled(&["a.csv"]);
        slots.add_slot();

        let err = handler.handle(&slots).await.unwrap_err();
        assert_eq!(
            err,
            ReportError::Validation {
                empty_slots: vec![1],
                total: 2
            }
        );
        assert_eq!(service.call_count(), 0);
        assert_eq!(handler.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn mismatched_response_is_rejected_and_store_kept() {
        let wrong = BatchResult::new(vec![FileAnalysis {
            filename: "other.csv".to_string(),
            results: vec![],
            aggregate_result: None,
        }]);
        let service = MockAnalysisService::new().with_failure(UploadFailure::status(502, "x"));
        let service = service.with_batch(wrong);
        let (handler, store) = handler(service);
        let slots = filled(&["a.csv"]);

        // First call fails outright, second returns the wrong file
        assert!(handler.handle(&slots).await.is_err());
        let err = handler.handle(&slots).await.unwrap_err();
        assert!(matches!(
            err,
            ReportError::Upload(UploadFailure::MalformedPayload(_))
        ));
        assert!(store.read().is_empty());
        assert_eq!(handler.status(), SubmissionStatus::Failed);
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let service = MockAnalysisService::new().with_delay(Duration::from_millis(200));
        let store = SharedResultStore::new();
        let handler =
            SubmitBatchHandler::new(Arc::new(service), store.clone(), Duration::from_millis(20));

        let err = handler.handle(&filled(&["a.csv"])).await.unwrap_err();
        assert!(matches!(err, ReportError::Upload(UploadFailure::Timeout { .. })));
        assert!(store.read().is_empty());
    }

    #[tokio::test]
    async fn dropped_submission_releases_pending_status() {
        let service = MockAnalysisService::new().gated();
        let (handler, _) = handler(service.clone());
        let slots = filled(&["a.csv"]);

        {
            let pending = handler.handle(&slots);
            tokio::pin!(pending);
            tokio::select! {
                _ = &mut pending => panic!("gated call completed"),
                _ = service.call_started() => {}
            }
            assert!(handler.is_busy());
        }

        assert_eq!(handler.status(), SubmissionStatus::Failed);
        assert_eq!(handler.last_error(), Some("Error uploading files"));
    }
}
