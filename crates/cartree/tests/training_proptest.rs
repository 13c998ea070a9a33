//! Property-based tests for partitioning, impurity, and construction.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use cartree::{build_tree, partition, DecisionNode, Entropy, ImpurityFn, Record, Table, Value};

const CATEGORIES: [&str; 4] = ["a", "b", "c", "d"];
const LABELS: [&str; 3] = ["pos", "neg", "mid"];

/// Tables with 1..=3 attribute columns (each wholly numeric or wholly
/// categorical, as real data tends to be) and up to 12 rows drawn from
/// small value pools so duplicates and pure partitions actually occur.
fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..=3)
        .prop_flat_map(|n_attrs| {
            (
                prop_vec(any::<bool>(), n_attrs),
                prop_vec((prop_vec(0usize..4, n_attrs), 0usize..3), 0..=12),
            )
        })
        .prop_map(|(numeric_cols, rows)| {
            let records = rows
                .into_iter()
                .map(|(cells, label)| {
                    let mut values: Vec<Value> = cells
                        .iter()
                        .zip(&numeric_cols)
                        .map(|(&pool_idx, &numeric)| {
                            if numeric {
                                Value::num(pool_idx as f64)
                            } else {
                                Value::cat(CATEGORIES[pool_idx])
                            }
                        })
                        .collect();
                    values.push(Value::cat(LABELS[label]));
                    Record::new(values)
                })
                .collect();
            Table::from_records(records).expect("generated rows are well formed")
        })
}

/// True if `sub`'s rows appear in `sup` in the same relative order.
fn is_ordered_subsequence(sub: &Table, sup: &Table) -> bool {
    let mut sup_iter = sup.records().iter();
    sub.records()
        .iter()
        .all(|record| sup_iter.any(|candidate| candidate == record))
}

fn leaf_row_total(node: &DecisionNode) -> usize {
    match node.split_info() {
        None => node.leaf_counts().unwrap().values().sum(),
        Some((_, _, t, f)) => leaf_row_total(t) + leaf_row_total(f),
    }
}

proptest! {
    #[test]
    fn partition_is_a_strict_order_preserving_partition(table in arb_table()) {
        for column in 0..table.n_attributes() {
            for value in table.distinct_values(column) {
                let (s1, s2) = partition(&table, column, &value);

                prop_assert_eq!(s1.n_rows() + s2.n_rows(), table.n_rows());
                prop_assert!(is_ordered_subsequence(&s1, &table));
                prop_assert!(is_ordered_subsequence(&s2, &table));
            }
        }
    }

    #[test]
    fn entropy_respects_its_bounds(table in arb_table()) {
        let score = Entropy.score(&table);
        let n_labels = table.label_counts().len();

        prop_assert!(score >= 0.0);
        if n_labels > 0 {
            prop_assert!(score <= (n_labels as f64).log2() + 1e-9);
        }
        // Zero iff at most one distinct label.
        prop_assert_eq!(score == 0.0, n_labels <= 1);
    }

    #[test]
    fn every_row_ends_up_in_exactly_one_leaf(table in arb_table()) {
        let tree = build_tree(&table, Entropy);
        prop_assert_eq!(leaf_row_total(&tree), table.n_rows());
    }

    #[test]
    fn construction_is_idempotent(table in arb_table()) {
        prop_assert_eq!(build_tree(&table, Entropy), build_tree(&table, Entropy));
    }

    #[test]
    fn split_nodes_always_carry_positive_gain(table in arb_table()) {
        // Walk the tree; at every split node, recompute the gain of the
        // stored criterion over the rows that reach it and check it is
        // strictly positive (the builder's acceptance condition).
        fn check(node: &DecisionNode, rows: &Table) -> Result<(), TestCaseError> {
            if let Some((column, value, true_branch, false_branch)) = node.split_info() {
                let (s1, s2) = partition(rows, column, value);
                prop_assert!(!s1.is_empty() && !s2.is_empty());
                prop_assert!(s1.n_rows() < rows.n_rows());
                prop_assert!(s2.n_rows() < rows.n_rows());

                let p = s1.n_rows() as f64 / rows.n_rows() as f64;
                let gain = Entropy.score(rows)
                    - p * Entropy.score(&s1)
                    - (1.0 - p) * Entropy.score(&s2);
                prop_assert!(gain > 0.0);

                check(true_branch, &s1)?;
                check(false_branch, &s2)?;
            }
            Ok(())
        }
        check(&build_tree(&table, Entropy), &table)?;
    }
}
