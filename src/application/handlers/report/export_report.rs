//! ExportReportHandler - lays out stored results and encodes them.
//!
//! Export reads the store regardless of visibility. One file per document
//! is the normal mode; `ExportTarget::AllFiles` stacks every file into one
//! document the way older exports did.

use std::sync::Arc;

use tracing::info;

use crate::application::SharedResultStore;
use crate::domain::export::Paginator;
use crate::domain::foundation::ReportError;
use crate::domain::results::ResultOrigin;
use crate::ports::{ArtifactStorage, DocumentRenderer, ExportedDocument};

/// Which stored results to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    File(usize),
    AllFiles,
}

/// Command to export a report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub target: ExportTarget,
    /// Persist through the configured storage as well as returning bytes.
    pub save: bool,
}

/// Result of an export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub document: ExportedDocument,
    pub page_count: usize,
    /// Submission that produced the exported results.
    pub source: Option<ResultOrigin>,
    pub saved_to: Option<std::path::PathBuf>,
}

/// Handler for exports.
pub struct ExportReportHandler {
    store: SharedResultStore,
    renderer: Arc<dyn DocumentRenderer>,
    storage: Option<Arc<dyn ArtifactStorage>>,
    base_filename: String,
}

impl ExportReportHandler {
    pub fn new(
        store: SharedResultStore,
        renderer: Arc<dyn DocumentRenderer>,
        base_filename: impl Into<String>,
    ) -> Self {
        Self {
            store,
            renderer,
            storage: None,
            base_filename: base_filename.into(),
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn ArtifactStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportReportResult, ReportError> {
        let mut result = self.render(cmd.target)?;

        if let (Some(storage), true) = (&self.storage, cmd.save) {
            result.saved_to = Some(storage.save(&result.document).await?);
        }

        Ok(result)
    }

    /// Lays out and encodes without touching storage.
    pub fn render(&self, target: ExportTarget) -> Result<ExportReportResult, ReportError> {
        // The read guard must not outlive this block.
        let (layout, source) = {
            let store = self.store.read();
            let layout = match target {
                ExportTarget::File(index) => Paginator::layout_file(store.get(index)?),
                ExportTarget::AllFiles => Paginator::layout_files(store.batch().files()),
            };
            (layout, store.origin())
        };

        let content = self.renderer.render(&layout)?;
        let document = ExportedDocument::new(content, self.renderer.format(), &self.base_filename);

        info!(
            target = ?target,
            pages = layout.page_count(),
            lines = layout.line_count(),
            bytes = document.content.len(),
            filename = %document.filename,
            submission_id = source.map(|o| o.submission_id.to_string()),
            received_at = source.map(|o| o.received_at.to_string()),
            "Rendered export"
        );
        Ok(ExportReportResult {
            document,
            page_count: layout.page_count(),
            source,
            saved_to: None,
        })
    }
}
