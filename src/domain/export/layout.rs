//! Fixed-layout document model: pages of absolutely positioned text lines.
//!
//! Units are millimetres on an A4 portrait page with the origin at the top
//! left, which is what previously exported documents used.

use serde::Serialize;

use crate::domain::report::Field;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// What a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "field")]
pub enum LineKind {
    Field(Field),
    AggregateHeading,
}

/// One line of text at an absolute position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutPage {
    pub lines: Vec<TextLine>,
}

/// A paginated document. Always has at least one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLayout {
    pages: Vec<LayoutPage>,
}

impl ExportLayout {
    /// A document with a single blank page.
    pub fn new() -> Self {
        Self {
            pages: vec![LayoutPage::default()],
        }
    }

    /// Starts a new page; subsequent lines land on it.
    pub fn add_page(&mut self) {
        self.pages.push(LayoutPage::default());
    }

    /// Appends a line to the current (last) page.
    pub fn push_line(&mut self, x: f64, y: f64, kind: LineKind, text: impl Into<String>) {
        let line = TextLine {
            x,
            y,
            kind,
            text: text.into(),
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    /// Every line with its zero-based page number, in emission order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &TextLine)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(page, p)| p.lines.iter().map(move |line| (page, line)))
    }
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self::new()
    }
}
