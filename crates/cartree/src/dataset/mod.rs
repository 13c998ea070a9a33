//! Tabular data handling.
//!
//! # Key Types
//!
//! - [`Value`]: tagged cell value, numeric or categorical per value
//! - [`Record`] / [`Table`]: ordered, immutable row store
//! - [`LabelCounts`]: label frequency mapping (the leaf payload)
//! - [`TableSchema`]: attribute names for rendering
//! - [`DatasetError`]: validation failures at ingestion
//!
//! Validation is front-loaded: [`Table::from_records`] checks shape once,
//! and everything downstream treats the table as trusted.

mod error;
mod schema;
mod table;
mod value;

pub use error::DatasetError;
pub use schema::TableSchema;
pub use table::{LabelCounts, Record, Table};
pub use value::Value;
