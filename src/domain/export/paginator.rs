//! Pagination engine - lays analyses out on fixed coordinates.
//!
//! Each engineer block is six lines, 10 units apart, starting at
//! `10 + i*50` on the current page. An aggregate opens a new page and uses
//! the base offsets `10..60` regardless of how many results came before.
//! When several files share one document, file `k` shifts its engineer
//! blocks down by `k*250`.

use super::layout::{ExportLayout, LineKind};
use crate::domain::analysis::{FileAnalysis, Priorities};
use crate::domain::report::{Field, AGGREGATE_HEADING};

pub const LINE_X: f64 = 10.0;
pub const BASE_Y: f64 = 10.0;
pub const LINE_SPACING: f64 = 10.0;
pub const RESULT_BLOCK_HEIGHT: f64 = 50.0;
pub const FILE_BLOCK_HEIGHT: f64 = 250.0;

/// Builds export layouts. Pure and deterministic.
pub struct Paginator;

impl Paginator {
    /// Lays out a single file.
    pub fn layout_file(file: &FileAnalysis) -> ExportLayout {
        Self::layout_files(std::slice::from_ref(file))
    }

    /// Lays out several files back to back in one document.
    pub fn layout_files(files: &[FileAnalysis]) -> ExportLayout {
        let mut layout = ExportLayout::new();

        for (k, file) in files.iter().enumerate() {
            let file_offset = k as f64 * FILE_BLOCK_HEIGHT;

            for (i, result) in file.results.iter().enumerate() {
                let top = BASE_Y + file_offset + i as f64 * RESULT_BLOCK_HEIGHT;
                emit_block(
                    &mut layout,
                    top,
                    LineKind::Field(Field::Engineer),
                    Field::Engineer.line(&result.engineer),
                    &result.priorities,
                );
            }

            if let Some(aggregate) = &file.aggregate_result {
                layout.add_page();
                emit_block(
                    &mut layout,
                    BASE_Y,
                    LineKind::AggregateHeading,
                    AGGREGATE_HEADING.to_string(),
                    &aggregate.priorities,
                );
            }
        }

        layout
    }
}

/// Emits a title line at `top` followed by the five numeric fields.
fn emit_block(
    layout: &mut ExportLayout,
    top: f64,
    title_kind: LineKind,
    title: String,
    priorities: &Priorities,
) {
    layout.push_line(LINE_X, top, title_kind, title);

    for (j, field) in Field::ORDER.iter().enumerate().skip(1) {
        let value = field.value(priorities).unwrap_or_default();
        layout.push_line(
            LINE_X,
            top + j as f64 * LINE_SPACING,
            LineKind::Field(*field),
            field.line(&value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AggregateResult, EngineerResult};
    use proptest::prelude::*;

    fn priorities() -> Priorities {
        Priorities {
            weights: vec![0.6, 0.4],
            max_eigenvalue: 2.0,
            ci: 0.0,
            cr: 0.0,
            ri: 0.0,
        }
    }

    fn engineer(name: &str) -> EngineerResult {
        EngineerResult {
            engineer: name.to_string(),
            matrix: vec![vec![1.0, 1.5], vec![0.667, 1.0]],
            priorities: priorities(),
        }
    }

    fn aggregate() -> AggregateResult {
        AggregateResult {
            aggregate_matrix: vec![vec![1.0, 1.5], vec![0.667, 1.0]],
            priorities: priorities(),
        }
    }

    fn file(results: usize, with_aggregate: bool) -> FileAnalysis {
        FileAnalysis {
            filename: "sheet.csv".to_string(),
            results: (0..results)
                .map(|i| engineer(&format!("Engineer {}", i + 1)))
                .collect(),
            aggregate_result: with_aggregate.then(aggregate),
        }
    }

    fn offsets(layout: &ExportLayout, page: usize) -> Vec<f64> {
        layout.pages()[page].lines.iter().map(|l| l.y).collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Single file
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn two_results_without_aggregate() {
        let layout = Paginator::layout_file(&file(2, false));

        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.line_count(), 12);
        assert_eq!(
            offsets(&layout, 0),
            vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0]
        );
        assert!(layout.lines().all(|(_, l)| l.x == LINE_X));
    }

    #[test]
    fn one_result_with_aggregate_opens_second_page() {
        let layout = Paginator::layout_file(&file(1, true));

        assert_eq!(layout.page_count(), 2);
        assert_eq!(offsets(&layout, 0), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(offsets(&layout, 1), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);

        let heading = &layout.pages()[1].lines[0];
        assert_eq!(heading.kind, LineKind::AggregateHeading);
        assert_eq!(heading.text, "Aggregate Result");
    }

    #[test]
    fn aggregate_ignores_result_count() {
        let layout = Paginator::layout_file(&file(4, true));
        assert_eq!(layout.pages()[0].lines.last().unwrap().y, 210.0);
        assert_eq!(offsets(&layout, 1)[0], 10.0);
    }

    #[test]
    fn zero_results_still_page_the_aggregate() {
        let layout = Paginator::layout_file(&file(0, true));
        assert_eq!(layout.page_count(), 2);
        assert!(layout.pages()[0].lines.is_empty());
        assert_eq!(layout.pages()[1].lines.len(), 6);
    }

    #[test]
    fn zero_results_and_no_aggregate_is_one_blank_page() {
        let layout = Paginator::layout_file(&file(0, false));
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.line_count(), 0);
    }

    #[test]
    fn block_lines_carry_labels_in_order() {
        let layout = Paginator::layout_file(&file(1, false));
        let texts: Vec<&str> = layout.lines().map(|(_, l)| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Engineer: Engineer 1",
                "Weights: 0.6, 0.4",
                "Max Eigenvalue: 2",
                "CI: 0",
                "CR: 0",
                "RI: 0",
            ]
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Multiple files
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn second_file_shifts_by_file_block_height() {
        let layout = Paginator::layout_files(&[file(1, false), file(2, false)]);

        assert_eq!(layout.page_count(), 1);
        let ys = offsets(&layout, 0);
        assert_eq!(ys[6], 260.0);
        assert_eq!(ys[12], 310.0);
        assert_eq!(ys.len(), 18);
    }

    #[test]
    fn later_files_continue_on_the_aggregate_page() {
        let layout = Paginator::layout_files(&[file(1, true), file(1, true)]);

        assert_eq!(layout.page_count(), 3);
        // file 0 results, file 0 aggregate + file 1 results, file 1 aggregate
        assert_eq!(layout.pages()[0].lines.len(), 6);
        assert_eq!(layout.pages()[1].lines.len(), 12);
        assert_eq!(offsets(&layout, 1)[6], 260.0);
        assert_eq!(offsets(&layout, 2)[0], 10.0);
    }

    proptest! {
        #[test]
        fn engineer_lines_follow_offset_formula(
            counts in proptest::collection::vec(0usize..6, 1..4),
            aggregates in proptest::collection::vec(any::<bool>(), 4),
        ) {
            let files: Vec<FileAnalysis> = counts
                .iter()
                .zip(&aggregates)
                .map(|(n, agg)| file(*n, *agg))
                .collect();
            let layout = Paginator::layout_files(&files);

            let expected_pages = 1 + files.iter().filter(|f| f.aggregate_result.is_some()).count();
            prop_assert_eq!(layout.page_count(), expected_pages);
            prop_assert_eq!(layout.line_count(), 6 * counts.iter().sum::<usize>() + 6 * (expected_pages - 1));

            let engineer_ys: Vec<f64> = layout
                .lines()
                .filter(|(_, l)| l.kind == LineKind::Field(Field::Engineer))
                .map(|(_, l)| l.y)
                .collect();
            let mut expected = Vec::new();
            for (k, n) in counts.iter().enumerate() {
                for i in 0..*n {
                    expected.push(10.0 + k as f64 * 250.0 + i as f64 * 50.0);
                }
            }
            prop_assert_eq!(engineer_ys, expected);
        }
    }
}
