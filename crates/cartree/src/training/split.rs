//! Split finding: partitioning and gain maximization.
//!
//! For each node the builder finds the best split by:
//! 1. Enumerating every candidate `(column, value)` pair (each distinct
//!    value of each attribute column);
//! 2. Partitioning the table on the candidate and rejecting it if either
//!    side is empty;
//! 3. Computing the weighted information gain;
//! 4. Keeping the candidate with the strictly greatest gain.
//!
//! # Gain Formula
//!
//! ```text
//! gain = score(T) - |S1|/|T| · score(S1) - |S2|/|T| · score(S2)
//! ```
//!
//! where `(S1, S2)` is the partition of `T` on the candidate and `score`
//! is the injected impurity measure.

use crate::dataset::{Table, Value};

use super::impurity::ImpurityFn;

// ============================================================================
// Partitioning
// ============================================================================

/// Whether a cell satisfies a split criterion.
///
/// Numeric split values test `cell >= value`; categorical split values test
/// equality. Cross-type comparisons are defined and false: a categorical
/// cell never clears a numeric threshold, and a numeric cell never equals a
/// categorical value.
fn matches_split(cell: &Value, split_value: &Value) -> bool {
    match split_value {
        Value::Numeric(threshold) => match cell {
            Value::Numeric(n) => n >= threshold,
            Value::Categorical(_) => false,
        },
        Value::Categorical(_) => cell == split_value,
    }
}

/// Partition `table` on `(column, value)` into (matching, non-matching).
///
/// Every input row lands in exactly one output table and both outputs
/// preserve the input's relative row order. Empty input yields two empty
/// outputs. Panics if `column` is not a valid attribute index; an invalid
/// index is a programming error, not a runtime condition.
pub fn partition(table: &Table, column: usize, value: &Value) -> (Table, Table) {
    let mut matching = Vec::new();
    let mut rest = Vec::new();

    for record in table {
        if matches_split(record.attribute(column), value) {
            matching.push(record.clone());
        } else {
            rest.push(record.clone());
        }
    }

    (
        Table::from_records_unchecked(matching),
        Table::from_records_unchecked(rest),
    )
}

// ============================================================================
// SplitInfo
// ============================================================================

/// The winning split for a node, with the partitions it induces.
///
/// Carrying the partitions means the builder never re-splits the table for
/// the winning candidate.
#[derive(Debug, Clone)]
pub struct SplitInfo {
    /// Attribute column to split on.
    pub column: usize,
    /// Split value (numeric threshold or categorical match).
    pub value: Value,
    /// Information gain of this split.
    pub gain: f64,
    /// Rows matching the criterion.
    pub true_rows: Table,
    /// Remaining rows.
    pub false_rows: Table,
}

impl SplitInfo {
    /// A null split (no candidate evaluated yet).
    ///
    /// Use [`is_valid`](SplitInfo::is_valid) to check whether a split is
    /// usable.
    pub fn none() -> Self {
        Self {
            column: usize::MAX,
            value: Value::cat(""),
            gain: f64::NEG_INFINITY,
            true_rows: Table::empty(),
            false_rows: Table::empty(),
        }
    }

    /// A split is usable only with strictly positive gain.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.gain > 0.0 && self.column != usize::MAX
    }
}

impl Default for SplitInfo {
    fn default() -> Self {
        Self::none()
    }
}

// ============================================================================
// Best-split search
// ============================================================================

/// Exhaustively search for the highest-gain split of `table`.
///
/// `current_score` is the impurity of `table` itself (the caller already
/// has it). Candidates with an empty side are rejected. Enumeration order
/// is deterministic (columns ascending, then distinct values in
/// [`Value`]'s total order) and only strictly greater gain replaces the
/// incumbent, so of several equal-gain maxima the earliest candidate wins.
///
/// Returns [`SplitInfo::none`] (invalid) when no candidate has positive
/// gain, including for empty and single-row tables.
pub fn find_best_split(table: &Table, current_score: f64, scorer: &impl ImpurityFn) -> SplitInfo {
    let n_rows = table.n_rows() as f64;
    let mut best = SplitInfo::none();

    for column in 0..table.n_attributes() {
        for value in table.distinct_values(column) {
            let (true_rows, false_rows) = partition(table, column, &value);
            if true_rows.is_empty() || false_rows.is_empty() {
                continue;
            }

            let p = true_rows.n_rows() as f64 / n_rows;
            let gain = current_score
                - p * scorer.score(&true_rows)
                - (1.0 - p) * scorer.score(&false_rows);

            if gain > best.gain {
                best = SplitInfo {
                    column,
                    value,
                    gain,
                    true_rows,
                    false_rows,
                };
            }
        }
    }

    best
}
