//! JSON renderer: the layout itself, pretty-printed.

use crate::domain::export::ExportLayout;
use crate::domain::foundation::ExportError;
use crate::ports::{DocumentRenderer, ExportFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for JsonRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, layout: &ExportLayout) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(layout)
            .map_err(|e| ExportError::render_failed(format!("json: {}", e)))
    }
}
