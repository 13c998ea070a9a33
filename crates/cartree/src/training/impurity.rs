//! Impurity measures.
//!
//! An impurity measure scores how mixed a table's label distribution is.
//! The builder takes the measure as an injected strategy; anything
//! satisfying the [`ImpurityFn`] contract can drive tree construction.

use crate::dataset::Table;

/// Strategy trait for scoring label heterogeneity.
///
/// # Contract
///
/// - `score` is non-negative;
/// - `score` is exactly 0 when at most one distinct label is present
///   (including the empty table);
/// - more evenly mixed label distributions score higher.
///
/// The builder never scores an empty table (it short-circuits to a leaf
/// first), but implementations define the empty score as 0 anyway.
pub trait ImpurityFn {
    /// Score the label distribution of `table`.
    fn score(&self, table: &Table) -> f64;

    /// Short measure name, used in build logs.
    fn name(&self) -> &'static str;
}

/// Shannon entropy: `Σ -p·log2(p)` over label frequencies.
///
/// Ranges from 0 (single label) to `log2(k)` for `k` equally frequent
/// labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entropy;

impl ImpurityFn for Entropy {
    fn score(&self, table: &Table) -> f64 {
        let total = table.n_rows() as f64;
        table
            .label_counts()
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

/// Gini impurity: `1 - Σ p²` over label frequencies.
///
/// Ranges from 0 (single label) to `1 - 1/k` for `k` equally frequent
/// labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiniImpurity;

impl ImpurityFn for GiniImpurity {
    fn score(&self, table: &Table) -> f64 {
        if table.is_empty() {
            return 0.0;
        }
        let total = table.n_rows() as f64;
        let sum_sq: f64 = table
            .label_counts()
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                p * p
            })
            .sum();
        1.0 - sum_sq
    }

    fn name(&self) -> &'static str {
        "gini"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::dataset::{Record, Value};

    fn labeled(labels: &[&str]) -> Table {
        Table::from_records(
            labels
                .iter()
                .map(|label| Record::new(vec![Value::num(0.0), Value::cat(*label)]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn entropy_of_pure_table_is_zero() {
        assert_eq!(Entropy.score(&labeled(&["a", "a", "a"])), 0.0);
    }

    #[test]
    fn entropy_of_even_binary_split_is_one() {
        assert_abs_diff_eq!(Entropy.score(&labeled(&["a", "b", "a", "b"])), 1.0);
    }

    #[test]
    fn entropy_is_bounded_by_log2_of_distinct_labels() {
        let table = labeled(&["a", "b", "c", "a"]);
        let score = Entropy.score(&table);
        assert!(score > 0.0);
        assert!(score <= 3f64.log2());
        // 2/4·1 + 1/4·2 + 1/4·2 = 1.5
        assert_abs_diff_eq!(score, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn entropy_of_empty_table_is_zero() {
        assert_eq!(Entropy.score(&Table::empty()), 0.0);
    }

    #[test]
    fn gini_of_pure_table_is_zero() {
        assert_eq!(GiniImpurity.score(&labeled(&["a", "a"])), 0.0);
    }

    #[test]
    fn gini_of_even_binary_split_is_half() {
        assert_abs_diff_eq!(GiniImpurity.score(&labeled(&["a", "b"])), 0.5);
    }

    #[test]
    fn gini_of_empty_table_is_zero() {
        assert_eq!(GiniImpurity.score(&Table::empty()), 0.0);
    }
}
