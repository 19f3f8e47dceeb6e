//! Field labels and number formatting shared by on-screen and exported views.

use serde::Serialize;

use crate::domain::analysis::Priorities;

/// Title of the merged record, on screen and in exports.
pub const AGGREGATE_HEADING: &str = "Aggregate Result";

/// The six per-record fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Engineer,
    Weights,
    MaxEigenvalue,
    Ci,
    Cr,
    Ri,
}

impl Field {
    /// Fields in the order they are laid out.
    pub const ORDER: [Field; 6] = [
        Field::Engineer,
        Field::Weights,
        Field::MaxEigenvalue,
        Field::Ci,
        Field::Cr,
        Field::Ri,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Engineer => "Engineer",
            Field::Weights => "Weights",
            Field::MaxEigenvalue => "Max Eigenvalue",
            Field::Ci => "CI",
            Field::Cr => "CR",
            Field::Ri => "RI",
        }
    }

    /// Formatted value of a numeric field; `None` for `Engineer`.
    pub fn value(&self, priorities: &Priorities) -> Option<String> {
        match self {
            Field::Engineer => None,
            Field::Weights => Some(format_weights(&priorities.weights)),
            Field::MaxEigenvalue => Some(format_number(priorities.max_eigenvalue)),
            Field::Ci => Some(format_number(priorities.ci)),
            Field::Cr => Some(format_number(priorities.cr)),
            Field::Ri => Some(format_number(priorities.ri)),
        }
    }

    /// `"<label>: <value>"`.
    pub fn line(&self, value: &str) -> String {
        format!("{}: {}", self.label(), value)
    }
}

/// Up to three decimals with trailing zeros dropped: `0.5`, `3.116`, `0`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Weights joined with `", "`.
pub fn format_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format_number(*w))
        .collect::<Vec<_>>()
        .join(", ")
}
