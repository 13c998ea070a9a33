//! Indented text rendering.
//!
//! Splits print as `name:value?` with the true branch under `T->` and the
//! false branch under `F->`; leaves print their label distribution:
//!
//! ```text
//! site:google?
//! T-> pages:21?
//!   T-> {Premium: 3}
//!   F-> {Basic: 1}
//! F-> {None: 4}
//! ```

use std::io::{self, Write};

use crate::dataset::{LabelCounts, TableSchema};
use crate::repr::DecisionNode;

/// Write the indented dump of `node` to `writer`.
///
/// `schema` supplies attribute names for split conditions; use
/// [`TableSchema::unnamed`] to fall back to column indices.
pub fn write_tree<W: Write>(
    writer: &mut W,
    node: &DecisionNode,
    schema: &TableSchema,
) -> io::Result<()> {
    write_node(writer, node, schema, "")
}

/// Render `node` to a `String`.
pub fn render_text(node: &DecisionNode, schema: &TableSchema) -> String {
    let mut out = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    write_tree(&mut out, node, schema).expect("in-memory write");
    String::from_utf8(out).expect("renderer emits UTF-8")
}

fn write_node<W: Write>(
    writer: &mut W,
    node: &DecisionNode,
    schema: &TableSchema,
    indent: &str,
) -> io::Result<()> {
    match node.split_info() {
        None => {
            let counts = node.leaf_counts().expect("non-split node is a leaf");
            writeln!(writer, "{}", format_counts(counts))
        }
        Some((column, value, true_branch, false_branch)) => {
            writeln!(writer, "{}:{}?", schema.attribute_name(column), value)?;
            let child_indent = format!("{indent}  ");

            write!(writer, "{indent}T-> ")?;
            write_node(writer, true_branch, schema, &child_indent)?;
            write!(writer, "{indent}F-> ")?;
            write_node(writer, false_branch, schema, &child_indent)
        }
    }
}

fn format_counts(counts: &LabelCounts) -> String {
    let body = counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}
