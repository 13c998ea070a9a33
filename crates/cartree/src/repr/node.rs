//! Decision tree nodes.

use serde::{Deserialize, Serialize};

use crate::dataset::{LabelCounts, Value};

/// A node of a trained decision tree.
///
/// The tree is a plain owned structure: every split node exclusively owns
/// its two children, so the tree is finite and acyclic by construction and
/// never mutated after the builder returns it.
///
/// The two cases are an explicit tagged enum: there is no "check whether
/// the results field is set" protocol; consumers match or go through the
/// read-only accessors ([`is_leaf`](DecisionNode::is_leaf),
/// [`leaf_counts`](DecisionNode::leaf_counts),
/// [`split_info`](DecisionNode::split_info)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionNode {
    /// Internal node: rows matching `(column, value)` go to `true_branch`,
    /// the rest to `false_branch`.
    Split {
        /// Attribute column the split tests.
        column: usize,
        /// Split value; numeric values test `>=`, categorical test `==`.
        value: Value,
        /// Subtree for rows matching the criterion.
        true_branch: Box<DecisionNode>,
        /// Subtree for the remaining rows.
        false_branch: Box<DecisionNode>,
    },
    /// Terminal node holding the label distribution of the rows that
    /// reached it.
    Leaf {
        /// Label → occurrence count. Empty only when the whole input table
        /// was empty.
        counts: LabelCounts,
    },
}

impl DecisionNode {
    /// Leaf with the given label distribution.
    pub fn leaf(counts: LabelCounts) -> Self {
        DecisionNode::Leaf { counts }
    }

    /// The degenerate leaf produced for an empty table.
    pub fn empty_leaf() -> Self {
        DecisionNode::Leaf {
            counts: LabelCounts::new(),
        }
    }

    /// Returns true for leaf nodes.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionNode::Leaf { .. })
    }

    /// The label distribution, for leaf nodes.
    #[inline]
    pub fn leaf_counts(&self) -> Option<&LabelCounts> {
        match self {
            DecisionNode::Leaf { counts } => Some(counts),
            DecisionNode::Split { .. } => None,
        }
    }

    /// The split criterion and both children, for split nodes.
    #[inline]
    pub fn split_info(&self) -> Option<(usize, &Value, &DecisionNode, &DecisionNode)> {
        match self {
            DecisionNode::Split {
                column,
                value,
                true_branch,
                false_branch,
            } => Some((*column, value, true_branch, false_branch)),
            DecisionNode::Leaf { .. } => None,
        }
    }

    /// Total node count, this node included.
    pub fn n_nodes(&self) -> usize {
        match self {
            DecisionNode::Leaf { .. } => 1,
            DecisionNode::Split {
                true_branch,
                false_branch,
                ..
            } => 1 + true_branch.n_nodes() + false_branch.n_nodes(),
        }
    }

    /// Number of leaves under (and including) this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            DecisionNode::Leaf { .. } => 1,
            DecisionNode::Split {
                true_branch,
                false_branch,
                ..
            } => true_branch.n_leaves() + false_branch.n_leaves(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> LabelCounts {
        pairs
            .iter()
            .map(|(label, n)| (label.to_string(), *n))
            .collect()
    }

    fn sample_tree() -> DecisionNode {
        DecisionNode::Split {
            column: 0,
            value: Value::cat("google"),
            true_branch: Box::new(DecisionNode::leaf(counts(&[("yes", 3)]))),
            false_branch: Box::new(DecisionNode::Split {
                column: 1,
                value: Value::num(20.0),
                true_branch: Box::new(DecisionNode::leaf(counts(&[("yes", 1)]))),
                false_branch: Box::new(DecisionNode::leaf(counts(&[("no", 2)]))),
            }),
        }
    }

    #[test]
    fn accessors_distinguish_cases() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        assert!(tree.leaf_counts().is_none());

        let (column, value, true_branch, false_branch) = tree.split_info().unwrap();
        assert_eq!(column, 0);
        assert_eq!(value, &Value::cat("google"));
        assert!(true_branch.is_leaf());
        assert!(!false_branch.is_leaf());

        assert_eq!(
            true_branch.leaf_counts().unwrap().get("yes"),
            Some(&3usize)
        );
        assert!(true_branch.split_info().is_none());
    }

    #[test]
    fn node_and_leaf_counts() {
        let tree = sample_tree();
        assert_eq!(tree.n_nodes(), 5);
        assert_eq!(tree.n_leaves(), 3);

        let leaf = DecisionNode::empty_leaf();
        assert_eq!(leaf.n_nodes(), 1);
        assert_eq!(leaf.n_leaves(), 1);
        assert!(leaf.leaf_counts().unwrap().is_empty());
    }
}
