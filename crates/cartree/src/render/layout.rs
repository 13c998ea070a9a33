//! Tree shape metrics.
//!
//! Pure functions of tree shape, independent of how the tree was built.
//! The raster renderer sizes its canvas from these.

use crate::repr::DecisionNode;

/// Number of leaves under `node`; the horizontal extent of a drawing.
pub fn width(node: &DecisionNode) -> usize {
    match node.split_info() {
        None => 1,
        Some((_, _, true_branch, false_branch)) => width(true_branch) + width(false_branch),
    }
}

/// Longest split-node path from `node` down to a leaf.
pub fn depth(node: &DecisionNode) -> usize {
    match node.split_info() {
        None => 0,
        Some((_, _, true_branch, false_branch)) => 1 + depth(true_branch).max(depth(false_branch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LabelCounts, Value};

    fn leaf() -> DecisionNode {
        DecisionNode::leaf(LabelCounts::from([("x".to_string(), 1)]))
    }

    fn split(true_branch: DecisionNode, false_branch: DecisionNode) -> DecisionNode {
        DecisionNode::Split {
            column: 0,
            value: Value::num(0.0),
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    #[test]
    fn leaf_is_one_wide_and_zero_deep() {
        assert_eq!(width(&leaf()), 1);
        assert_eq!(depth(&leaf()), 0);
    }

    #[test]
    fn width_sums_and_depth_maxes() {
        // Unbalanced: one side two levels deep, the other a leaf.
        let tree = split(split(leaf(), leaf()), leaf());
        assert_eq!(width(&tree), 3);
        assert_eq!(depth(&tree), 2);
    }
}
