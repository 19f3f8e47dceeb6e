//! Analysis records returned by the service, one `FileAnalysis` per file.

use serde::{Deserialize, Serialize};

use super::consistency::{ConsistencyMetrics, CONSISTENCY_THRESHOLD};
use crate::domain::foundation::UploadFailure;

/// Derived priorities and consistency figures shared by engineer and
/// aggregate records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priorities {
    pub weights: Vec<f64>,
    pub max_eigenvalue: f64,
    pub ci: f64,
    pub cr: f64,
    pub ri: f64,
}

impl Priorities {
    /// True when the reported CR is within the acceptance threshold.
    pub fn is_consistent(&self) -> bool {
        self.cr <= CONSISTENCY_THRESHOLD
    }

    /// Recomputes CI/CR/RI from the order and reported eigenvalue.
    pub fn expected_metrics(&self) -> ConsistencyMetrics {
        ConsistencyMetrics::compute(self.weights.len(), self.max_eigenvalue)
    }
}

/// One engineer's comparison matrix and its derived priorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineerResult {
    pub engineer: String,
    pub matrix: Vec<Vec<f64>>,
    #[serde(flatten)]
    pub priorities: Priorities,
}

impl EngineerResult {
    pub fn order(&self) -> usize {
        self.matrix.len()
    }
}

/// The merged judgement of every engineer for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub aggregate_matrix: Vec<Vec<f64>>,
    #[serde(flatten)]
    pub priorities: Priorities,
}

impl AggregateResult {
    pub fn order(&self) -> usize {
        self.aggregate_matrix.len()
    }
}

/// Everything the service computed for one submitted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub filename: String,
    #[serde(default)]
    pub results: Vec<EngineerResult>,
    #[serde(default)]
    pub aggregate_result: Option<AggregateResult>,
}

impl FileAnalysis {
    /// Checks every record is square with one weight per row.
    ///
    /// # Errors
    ///
    /// Returns `UploadFailure::MalformedPayload` naming the offending record.
    pub fn check_shape(&self) -> Result<(), UploadFailure> {
        for result in &self.results {
            check_matrix(&result.matrix, &result.priorities).map_err(|reason| {
                UploadFailure::malformed(format!(
                    "{}: {}: {}",
                    self.filename, result.engineer, reason
                ))
            })?;
        }
        if let Some(aggregate) = &self.aggregate_result {
            check_matrix(&aggregate.aggregate_matrix, &aggregate.priorities).map_err(
                |reason| {
                    UploadFailure::malformed(format!("{}: aggregate: {}", self.filename, reason))
                },
            )?;
        }
        Ok(())
    }
}

fn check_matrix(matrix: &[Vec<f64>], priorities: &Priorities) -> Result<(), String> {
    let order = matrix.len();
    if let Some((row, cols)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, cols)| *cols != order)
    {
        return Err(format!("row {} has {} columns, expected {}", row, cols, order));
    }
    if priorities.weights.len() != order {
        return Err(format!(
            "{} weights for a matrix of order {}",
            priorities.weights.len(),
            order
        ));
    }
    Ok(())
}

/// Ordered analyses, index-aligned with the request that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    files: Vec<FileAnalysis>,
}

impl BatchResult {
    pub fn new(files: Vec<FileAnalysis>) -> Self {
        Self { files }
    }

    /// Checks the result answers `filenames` one-for-one, in order, and that
    /// every record is well-shaped.
    ///
    /// # Errors
    ///
    /// Returns `UploadFailure::MalformedPayload` on any mismatch.
    pub fn verify_against(&self, filenames: &[&str]) -> Result<(), UploadFailure> {
        if self.files.len() != filenames.len() {
            return Err(UploadFailure::malformed(format!(
                "expected {} file analyses, got {}",
                filenames.len(),
                self.files.len()
            )));
        }
        for (index, (analysis, expected)) in self.files.iter().zip(filenames).enumerate() {
            if analysis.filename != *expected {
                return Err(UploadFailure::malformed(format!(
                    "analysis {} is for '{}', expected '{}'",
                    index, analysis.filename, expected
                )));
            }
            analysis.check_shape()?;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&FileAnalysis> {
        self.files.get(index)
    }

    pub fn files(&self) -> &[FileAnalysis] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(engineer: &str) -> serde_json::Value {
        json!({
            "engineer": engineer,
            "matrix": [[1.0, 3.0], [0.333, 1.0]],
            "weights": [0.75, 0.25],
            "max_eigenvalue": 2.0,
            "ci": 0.0,
            "cr": 0.0,
            "ri": 0.0
        })
    }

    fn analysis(filename: &str) -> FileAnalysis {
        serde_json::from_value(json!({
            "filename": filename,
            "results": [record_json("Engineer 1")],
            "aggregate_result": null
        }))
        .unwrap()
    }

    #[test]
    fn engineer_result_flattens_priorities() {
        let result: EngineerResult = serde_json::from_value(record_json("Engineer 1")).unwrap();
        assert_eq!(result.engineer, "Engineer 1");
        assert_eq!(result.order(), 2);
        assert_eq!(result.priorities.weights, vec![0.75, 0.25]);

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["max_eigenvalue"], json!(2.0));
        assert!(back.get("priorities").is_none());
    }

    #[test]
    fn aggregate_result_uses_aggregate_matrix_key() {
        let aggregate: AggregateResult = serde_json::from_value(json!({
            "aggregate_matrix": [[1.0]],
            "weights": [1.0],
            "max_eigenvalue": 1.0,
            "ci": 0.0,
            "cr": 0.0,
            "ri": 0.0
        }))
        .unwrap();
        assert_eq!(aggregate.order(), 1);
    }

    #[test]
    fn missing_aggregate_defaults_to_none() {
        let analysis: FileAnalysis =
            serde_json::from_value(json!({ "filename": "a.csv", "results": [] })).unwrap();
        assert!(analysis.aggregate_result.is_none());
        assert!(analysis.results.is_empty());
    }

    #[test]
    fn verify_accepts_matching_order() {
        let batch = BatchResult::new(vec![analysis("a.csv"), analysis("b.csv")]);
        assert!(batch.verify_against(&["a.csv", "b.csv"]).is_ok());
    }

    #[test]
    fn verify_rejects_count_mismatch() {
        let batch = BatchResult::new(vec![analysis("a.csv")]);
        let err = batch.verify_against(&["a.csv", "b.csv"]).unwrap_err();
        assert!(matches!(err, UploadFailure::MalformedPayload(_)));
    }

    #[test]
    fn verify_rejects_reordered_results() {
        let batch = BatchResult::new(vec![analysis("b.csv"), analysis("a.csv")]);
        let err = batch.verify_against(&["a.csv", "b.csv"]).unwrap_err();
        assert!(err.to_string().contains("expected 'a.csv'"));
    }

    #[test]
    fn shape_check_rejects_ragged_matrix() {
        let mut bad = analysis("a.csv");
        bad.results[0].matrix[1].push(9.0);
        let err = bad.check_shape().unwrap_err();
        assert!(err.to_string().contains("row 1 has 3 columns"));
    }

    #[test]
    fn shape_check_rejects_weight_count_mismatch() {
        let mut bad = analysis("a.csv");
        bad.results[0].priorities.weights.pop();
        assert!(bad.check_shape().is_err());
    }

    #[test]
    fn reported_metrics_match_recomputation() {
        let result: EngineerResult = serde_json::from_value(json!({
            "engineer": "Engineer 1",
            "matrix": [[1.0, 2.0, 4.0], [0.5, 1.0, 2.0], [0.25, 0.5, 1.0]],
            "weights": [0.571, 0.286, 0.143],
            "max_eigenvalue": 3.116,
            "ci": 0.058,
            "cr": 0.1,
            "ri": 0.58
        }))
        .unwrap();

        let expected = result.priorities.expected_metrics();
        assert!((expected.ci - result.priorities.ci).abs() < 1e-3);
        assert!((expected.cr - result.priorities.cr).abs() < 1e-3);
        assert_eq!(expected.ri, result.priorities.ri);
        assert!(result.priorities.is_consistent());
    }
}
