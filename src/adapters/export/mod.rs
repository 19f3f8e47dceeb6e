//! Document renderers.

mod json_renderer;
mod pdf_renderer;

pub use json_renderer::JsonRenderer;
pub use pdf_renderer::{PdfRenderer, DEFAULT_FONT_SIZE};

use std::sync::Arc;

use crate::ports::{DocumentRenderer, ExportFormat};

/// Picks the renderer for `format`.
pub fn renderer_for(format: ExportFormat, font_size: f64) -> Arc<dyn DocumentRenderer> {
    match format {
        ExportFormat::Pdf => Arc::new(PdfRenderer::new(font_size)),
        ExportFormat::Json => Arc::new(JsonRenderer::new()),
    }
}
