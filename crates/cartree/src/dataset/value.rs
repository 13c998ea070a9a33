//! Cell value type.
//!
//! Unlike schema-typed datasets, each cell carries its own tag: a value is
//! either numeric or categorical, decided at ingestion. Split semantics
//! follow the tag of the *split value* (threshold test for numeric, equality
//! for categorical), so mixed columns are well-defined.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a [`Table`](super::Table).
///
/// # Ordering
///
/// `Value` has a total order used for deterministic candidate enumeration
/// during split finding: numeric values first (by [`f64::total_cmp`]), then
/// categorical values lexicographically. Equality is consistent with this
/// order.
///
/// Numeric values are expected to be finite; [`Table::from_records`]
/// (see [`super::Table`]) rejects NaN and infinities so that ordering and
/// numeric equality agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Continuous numeric value.
    Numeric(f64),
    /// Categorical (nominal) value.
    Categorical(String),
}

impl Value {
    /// Create a numeric value.
    ///
    /// `-0.0` is normalized to `0.0` so that ordering and equality agree
    /// with numeric comparison.
    pub fn num(value: impl Into<f64>) -> Self {
        let value = value.into();
        Value::Numeric(if value == 0.0 { 0.0 } else { value })
    }

    /// Create a categorical value.
    pub fn cat(value: impl Into<String>) -> Self {
        Value::Categorical(value.into())
    }

    /// Returns true if this is a numeric value.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric(_))
    }

    /// Returns true if this is a categorical value.
    #[inline]
    pub fn is_categorical(&self) -> bool {
        matches!(self, Value::Categorical(_))
    }

    /// The numeric payload, if any.
    #[inline]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(n) => Some(*n),
            Value::Categorical(_) => None,
        }
    }

    /// The categorical payload, if any.
    #[inline]
    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            Value::Numeric(_) => None,
            Value::Categorical(s) => Some(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Numeric(a), Value::Numeric(b)) => a.total_cmp(b),
            (Value::Numeric(_), Value::Categorical(_)) => Ordering::Less,
            (Value::Categorical(_), Value::Numeric(_)) => Ordering::Greater,
            (Value::Categorical(a), Value::Categorical(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(n) => write!(f, "{n}"),
            Value::Categorical(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::num(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::cat(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Categorical(value)
    }
}
