//! Report Renderer - projects stored records into display structures.
//!
//! Pure: the same record and flag always give the same view.

use serde::Serialize;

use super::format::{format_number, Field, AGGREGATE_HEADING};
use crate::domain::analysis::{FileAnalysis, Priorities};
use crate::domain::results::ResultStore;

pub const SHOW_LABEL: &str = "Show Results";
pub const HIDE_LABEL: &str = "Hide Results";

/// One labelled value under a result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// A comparison matrix with its priorities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub title: String,
    pub matrix: Vec<Vec<String>>,
    pub weights: String,
    pub summary: Vec<SummaryRow>,
    pub consistent: bool,
}

impl ResultTable {
    fn build(title: String, matrix: &[Vec<f64>], priorities: &Priorities) -> Self {
        let summary = [Field::MaxEigenvalue, Field::Ci, Field::Cr, Field::Ri]
            .iter()
            .filter_map(|field| {
                field.value(priorities).map(|value| SummaryRow {
                    label: field.label(),
                    value,
                })
            })
            .collect();

        Self {
            title,
            matrix: matrix
                .iter()
                .map(|row| row.iter().map(|v| format_number(*v)).collect())
                .collect(),
            weights: Field::Weights.value(priorities).unwrap_or_default(),
            summary,
            consistent: priorities.is_consistent(),
        }
    }
}

/// Tables shown once a file's results are revealed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBody {
    pub engineers: Vec<ResultTable>,
    pub aggregate: Option<ResultTable>,
}

/// Everything the presentation layer binds for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub index: usize,
    pub filename: String,
    pub visible: bool,
    pub toggle_label: &'static str,
    pub body: Option<ReportBody>,
}

/// Builds report views.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Projects one file. The body is only built when `visible`.
    pub fn render(index: usize, file: &FileAnalysis, visible: bool) -> ReportView {
        let body = visible.then(|| ReportBody {
            engineers: file
                .results
                .iter()
                .map(|r| ResultTable::build(r.engineer.clone(), &r.matrix, &r.priorities))
                .collect(),
            aggregate: file.aggregate_result.as_ref().map(|a| {
                ResultTable::build(AGGREGATE_HEADING.to_string(), &a.aggregate_matrix, &a.priorities)
            }),
        });

        ReportView {
            index,
            filename: file.filename.clone(),
            visible,
            toggle_label: if visible { HIDE_LABEL } else { SHOW_LABEL },
            body,
        }
    }

    /// Projects every stored file with its current visibility.
    pub fn render_all(store: &ResultStore) -> Vec<ReportView> {
        store
            .batch()
            .files()
            .iter()
            .enumerate()
            .map(|(i, file)| Self::render(i, file, store.is_visible(i)))
            .collect()
    }
}
