//! Attribute naming for rendering.
//!
//! Cell types live on the values themselves (see [`super::Value`]), so the
//! schema carries only presentation metadata: attribute names and the target
//! name, used by the renderers to label split conditions.

/// Names for a table's attribute columns and target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    attributes: Vec<String>,
    target: Option<String>,
}

impl TableSchema {
    /// Schema with no names; every lookup falls back to `column <i>`.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Schema with the given attribute names.
    pub fn from_attributes<S: Into<String>>(attributes: impl IntoIterator<Item = S>) -> Self {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            target: None,
        }
    }

    /// Set the target column's name.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Number of named attributes.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Display name for an attribute column, falling back to `column <i>`
    /// when no name was supplied.
    pub fn attribute_name(&self, column: usize) -> String {
        self.attributes
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("column {column}"))
    }

    /// Display name for the target column.
    pub fn target_name(&self) -> &str {
        self.target.as_deref().unwrap_or("label")
    }

    /// Index of the attribute with the given name, if any.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }
}
