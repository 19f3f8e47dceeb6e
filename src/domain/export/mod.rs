//! Export module - deterministic page layout for analysis reports.

mod layout;
mod paginator;

pub use layout::{ExportLayout, LayoutPage, LineKind, TextLine, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use paginator::{
    Paginator, BASE_Y, FILE_BLOCK_HEIGHT, LINE_SPACING, LINE_X, RESULT_BLOCK_HEIGHT,
};
