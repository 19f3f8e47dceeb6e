//! ReportSession - the state a user works against.
//!
//! Owns the input slots, the shared result store, and the two handlers.
//! Every operation takes `&self` except slot edits, so a pending
//! submission can be polled alongside toggles and exports.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::handlers::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ExportTarget,
    SubmitBatchHandler, SubmitBatchResult,
};
use super::SharedResultStore;
use crate::adapters::{renderer_for, HttpAnalysisService, LocalArtifactStorage};
use crate::config::{AppConfig, ValidationError};
use crate::domain::foundation::{ReportError, SubmissionStatus, UploadFailure};
use crate::domain::report::{ReportRenderer, ReportView};
use crate::domain::results::ResultOrigin;
use crate::domain::upload::{FileHandle, SlotManager};
use crate::ports::{AnalysisService, ArtifactStorage, DocumentRenderer, ExportedDocument};

/// Why a session could not be built from configuration.
#[derive(Debug, Error)]
pub enum SessionSetupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("analysis client unavailable: {0}")]
    Client(#[from] UploadFailure),
}

pub struct ReportSession {
    slots: SlotManager,
    store: SharedResultStore,
    submitter: SubmitBatchHandler,
    exporter: ExportReportHandler,
}

impl ReportSession {
    /// Starts with a single empty slot.
    pub fn new(
        service: Arc<dyn AnalysisService>,
        renderer: Arc<dyn DocumentRenderer>,
        config: &AppConfig,
    ) -> Self {
        let store = SharedResultStore::new();
        Self {
            slots: SlotManager::with_slots(1),
            submitter: SubmitBatchHandler::new(service, store.clone(), config.service.timeout()),
            exporter: ExportReportHandler::new(
                store.clone(),
                renderer,
                config.export.default_filename.clone(),
            ),
            store,
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn ArtifactStorage>) -> Self {
        self.exporter = self.exporter.with_storage(storage);
        self
    }

    /// Wires the HTTP service, the configured renderer, and local storage.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionSetupError> {
        config.validate()?;
        let service = HttpAnalysisService::new(&config.service)?;
        let renderer = renderer_for(config.export.format, config.export.font_size);
        let storage = LocalArtifactStorage::new(&config.export.output_dir);
        Ok(Self::new(Arc::new(service), renderer, config).with_storage(Arc::new(storage)))
    }

    // Slots

    pub fn add_slot(&mut self) -> usize {
        self.slots.add_slot()
    }

    pub fn set_file(&mut self, index: usize, handle: FileHandle) -> Result<(), ReportError> {
        self.slots.set_file(index, handle)
    }

    pub fn all_filled(&self) -> bool {
        self.slots.all_filled()
    }

    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    // Submission

    pub async fn submit(&self) -> Result<SubmitBatchResult, ReportError> {
        self.submitter.handle(&self.slots).await
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submitter.status()
    }

    pub fn is_busy(&self) -> bool {
        self.submitter.is_busy()
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.submitter.last_error()
    }

    /// Status message the service sent with the current results.
    pub fn last_message(&self) -> Option<String> {
        self.submitter.last_message()
    }

    // Results

    pub fn toggle(&self, index: usize) -> Result<bool, ReportError> {
        self.store.write().toggle(index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.store.read().is_visible(index)
    }

    pub fn result_count(&self) -> usize {
        self.store.read().len()
    }

    /// Which submission produced the stored results, and when.
    pub fn result_origin(&self) -> Option<ResultOrigin> {
        self.store.read().origin()
    }

    pub fn views(&self) -> Vec<ReportView> {
        let views = ReportRenderer::render_all(&self.store.read());
        debug!(count = views.len(), "Rendered report views");
        views
    }

    // Export

    pub fn export(&self, index: usize) -> Result<ExportedDocument, ReportError> {
        Ok(self.exporter.render(ExportTarget::File(index))?.document)
    }

    pub fn export_all(&self) -> Result<ExportedDocument, ReportError> {
        Ok(self.exporter.render(ExportTarget::AllFiles)?.document)
    }

    /// Exports file `index` and persists it through the configured storage.
    pub async fn save_export(&self, index: usize) -> Result<ExportReportResult, ReportError> {
        self.exporter
            .handle(ExportReportCommand {
                target: ExportTarget::File(index),
                save: true,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{JsonRenderer, MockAnalysisService, ECHO_MESSAGE};

    fn session(service: MockAnalysisService) -> ReportSession {
        ReportSession::new(
            Arc::new(service),
            Arc::new(JsonRenderer),
            &AppConfig::default(),
        )
    }

    #[test]
    fn starts_with_one_empty_slot() {
        let s = session(MockAnalysisService::new());
        assert_eq!(s.slots().len(), 1);
        assert!(!s.all_filled());
        assert_eq!(s.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn new_results_start_hidden() {
        let mut s = session(MockAnalysisService::new());
        s.set_file(0, FileHandle::new("a.csv", b"1".to_vec())).unwrap();

        s.submit().await.unwrap();
        assert!(s.toggle(0).unwrap());

        s.submit().await.unwrap();
        assert!(!s.is_visible(0));
        assert!(s.views()[0].body.is_none());
    }

    #[tokio::test]
    async fn toggle_and_export_work_while_pending() {
        let service = MockAnalysisService::new().gated();
        let mut s = session(service.clone());
        s.set_file(0, FileHandle::new("a.csv", b"1".to_vec())).unwrap();
        service.release();
        s.submit().await.unwrap();
        service.call_started().await;

        let pending = s.submit();
        tokio::pin!(pending);
        tokio::select! {
            _ = &mut pending => panic!("gated call completed"),
            _ = service.call_started() => {}
        }
        assert!(s.is_busy());
        assert!(s.toggle(0).unwrap());
        assert!(s.export(0).is_ok());
        assert_eq!(s.submit().await.unwrap_err(), ReportError::Busy);
        assert_eq!(service.call_count(), 2);

        service.release();
        pending.await.unwrap();
        assert!(!s.is_visible(0));
        assert_eq!(service.call_count(), 2);
    }

    #[test]
    fn export_before_any_result_is_index_error() {
        let s = session(MockAnalysisService::new());
        assert_eq!(s.export(0).unwrap_err(), ReportError::index(0, 0));
    }

    #[test]
    fn from_config_builds_with_defaults() {
        assert!(ReportSession::from_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn from_config_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.service.timeout_secs = 0;

        let err = ReportSession::from_config(&config).err().unwrap();
        assert!(matches!(
            err,
            SessionSetupError::InvalidConfig(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn from_config_rejects_non_http_service() {
        let mut config = AppConfig::default();
        config.service.base_url = "ftp://ahp.local".to_string();

        let err = ReportSession::from_config(&config).err().unwrap();
        assert!(matches!(
            err,
            SessionSetupError::InvalidConfig(ValidationError::InvalidServiceUrl)
        ));
    }

    #[tokio::test]
    async fn success_exposes_service_message_and_origin() {
        let mut s = session(MockAnalysisService::new());
        s.set_file(0, FileHandle::new("a.csv", b"1".to_vec())).unwrap();
        assert!(s.result_origin().is_none());

        let result = s.submit().await.unwrap();
        assert_eq!(s.last_message().as_deref(), Some(ECHO_MESSAGE));
        assert_eq!(s.result_origin().unwrap().submission_id, result.submission_id);
    }
}
