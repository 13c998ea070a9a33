//! Reference fixture dataset.
//!
//! A small web-referrer table: which site a visitor came from, their
//! country, whether they read the FAQ, and how many pages they viewed,
//! labeled with the subscription tier they chose. Mixed categorical and
//! numeric attributes make it a convenient end-to-end fixture.

use crate::dataset::{Record, Table, TableSchema, Value};

/// Schema for [`referrer_table`].
pub fn referrer_schema() -> TableSchema {
    TableSchema::from_attributes(["site", "country", "read faq", "pages"])
        .with_target("subscription")
}

/// Sixteen visitor rows with a `None` / `Basic` / `Premium` label.
pub fn referrer_table() -> Table {
    let rows = [
        ("slashdot", "USA", "yes", 18, "None"),
        ("google", "France", "yes", 23, "Premium"),
        ("digg", "USA", "yes", 24, "Basic"),
        ("kiwitobes", "France", "yes", 23, "Basic"),
        ("google", "UK", "no", 21, "Premium"),
        ("(direct)", "New Zealand", "no", 12, "None"),
        ("(direct)", "UK", "no", 21, "Basic"),
        ("google", "USA", "no", 24, "Premium"),
        ("slashdot", "France", "yes", 19, "None"),
        ("digg", "USA", "no", 18, "None"),
        ("google", "UK", "no", 18, "None"),
        ("kiwitobes", "UK", "no", 19, "None"),
        ("digg", "New Zealand", "yes", 12, "Basic"),
        ("slashdot", "UK", "no", 21, "None"),
        ("google", "UK", "yes", 18, "Basic"),
        ("kiwitobes", "France", "yes", 19, "Basic"),
    ];

    let records = rows
        .iter()
        .map(|(site, country, faq, pages, tier)| {
            Record::new(vec![
                Value::cat(*site),
                Value::cat(*country),
                Value::cat(*faq),
                Value::num(*pages),
                Value::cat(*tier),
            ])
        })
        .collect();

    Table::from_records(records).expect("fixture rows are well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_shape() {
        let table = referrer_table();
        assert_eq!(table.n_rows(), 16);
        assert_eq!(table.n_attributes(), 4);
        assert_eq!(referrer_schema().n_attributes(), 4);
    }

    #[test]
    fn fixture_labels() {
        let counts = referrer_table().label_counts();
        assert_eq!(counts.get("None"), Some(&7));
        assert_eq!(counts.get("Basic"), Some(&6));
        assert_eq!(counts.get("Premium"), Some(&3));
    }
}
