//! Consistency metrics - CI, RI and CR for a comparison matrix of order N.
//!
//! These mirror what the analysis service reports. They are used to label
//! results, never to reject them.

/// Saaty random indices for orders 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// A matrix is considered acceptably consistent at or below this CR.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Random index for a matrix of the given order.
///
/// Orders beyond the table reuse the largest entry; order 0 has none.
pub fn random_index(order: usize) -> f64 {
    match order {
        0 => 0.0,
        n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
    }
}

/// `(λmax - N) / (N - 1)`, or 0 when N <= 1.
pub fn consistency_index(order: usize, max_eigenvalue: f64) -> f64 {
    if order <= 1 {
        return 0.0;
    }
    let n = order as f64;
    (max_eigenvalue - n) / (n - 1.0)
}

/// `CI / RI`, or 0 when RI is 0.
pub fn consistency_ratio(ci: f64, ri: f64) -> f64 {
    if ri == 0.0 {
        0.0
    } else {
        ci / ri
    }
}

/// Metrics computed from first principles, for comparison with reported ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyMetrics {
    pub ci: f64,
    pub cr: f64,
    pub ri: f64,
}

impl ConsistencyMetrics {
    pub fn compute(order: usize, max_eigenvalue: f64) -> Self {
        let ci = consistency_index(order, max_eigenvalue);
        let ri = random_index(order);
        Self {
            ci,
            cr: consistency_ratio(ci, ri),
            ri,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.cr <= CONSISTENCY_THRESHOLD
    }
}
