//! Recursive gain-driven tree construction.

use crate::dataset::Table;
use crate::repr::DecisionNode;

use super::impurity::ImpurityFn;
use super::logger::{TrainingLogger, Verbosity};
use super::split::{find_best_split, SplitInfo};

// =============================================================================
// TreeParams
// =============================================================================

/// Parameters for tree construction.
#[derive(Debug, Clone, Default)]
pub struct TreeParams {
    /// Verbosity level for build output.
    pub verbosity: Verbosity,
}

// =============================================================================
// TreeBuilder
// =============================================================================

/// Builds a decision tree by recursively picking the split with the
/// greatest information gain.
///
/// The impurity measure is an injected strategy; the builder only relies on
/// the [`ImpurityFn`] contract. Construction is deterministic, synchronous
/// and pure over the (immutable) input table: building twice from the same
/// table yields structurally identical trees.
///
/// Recursion depth is bounded by the row count: an accepted split strictly
/// shrinks both sides, and tables that cannot shrink become leaves.
///
/// # Example
///
/// ```
/// use cartree::{build_tree, Entropy, Record, Table, Value};
///
/// let table = Table::from_records(vec![
///     Record::new(vec![Value::cat("yes"), Value::cat("pos")]),
///     Record::new(vec![Value::cat("no"), Value::cat("neg")]),
/// ])?;
/// let tree = build_tree(&table, Entropy);
/// assert_eq!(tree.n_leaves(), 2);
/// # Ok::<(), cartree::DatasetError>(())
/// ```
pub struct TreeBuilder<S: ImpurityFn> {
    scorer: S,
    params: TreeParams,
    logger: TrainingLogger,
}

impl<S: ImpurityFn> TreeBuilder<S> {
    /// Create a builder around an impurity measure.
    pub fn new(scorer: S, params: TreeParams) -> Self {
        let logger = TrainingLogger::new(params.verbosity);
        Self {
            scorer,
            params,
            logger,
        }
    }

    /// The configured parameters.
    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// The injected impurity measure.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Build a decision tree for `table`.
    ///
    /// An empty table produces a single leaf with an empty count mapping.
    pub fn build(&self, table: &Table) -> DecisionNode {
        self.logger.info(&format!(
            "building tree: {} rows, {} attributes, measure={}",
            table.n_rows(),
            table.n_attributes(),
            self.scorer.name()
        ));

        let root = self.build_node(table);

        self.logger.info(&format!(
            "build complete: {} nodes, {} leaves",
            root.n_nodes(),
            root.n_leaves()
        ));
        root
    }

    fn build_node(&self, table: &Table) -> DecisionNode {
        if table.is_empty() {
            return DecisionNode::empty_leaf();
        }

        let current_score = self.scorer.score(table);
        let best = find_best_split(table, current_score, &self.scorer);

        if best.is_valid() {
            if self.logger.verbosity() >= Verbosity::Debug {
                self.logger.debug(&format!(
                    "split column {} at {} (gain {:.4}, {}/{} rows)",
                    best.column,
                    best.value,
                    best.gain,
                    best.true_rows.n_rows(),
                    best.false_rows.n_rows()
                ));
            }
            let SplitInfo {
                column,
                value,
                true_rows,
                false_rows,
                ..
            } = best;
            DecisionNode::Split {
                column,
                value,
                true_branch: Box::new(self.build_node(&true_rows)),
                false_branch: Box::new(self.build_node(&false_rows)),
            }
        } else {
            DecisionNode::Leaf {
                counts: table.label_counts(),
            }
        }
    }
}

/// Build a tree with default parameters.
///
/// Convenience entry point for the common case; use [`TreeBuilder`] to
/// control verbosity.
pub fn build_tree(table: &Table, scorer: impl ImpurityFn) -> DecisionNode {
    TreeBuilder::new(scorer, TreeParams::default()).build(table)
}
