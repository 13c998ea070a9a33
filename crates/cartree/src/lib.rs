//! cartree: information-gain decision trees for Rust.
//!
//! Builds a binary decision tree from a small labeled table by recursively
//! picking the `(column, value)` split with the greatest information gain,
//! then renders the result as indented text or a raster image.
//!
//! # Key Types
//!
//! - [`Table`] / [`Record`] / [`Value`] - Mixed numeric/categorical row store
//! - [`TreeBuilder`] / [`build_tree`] - Gain-driven tree construction
//! - [`Entropy`] / [`GiniImpurity`] - Pluggable impurity measures
//! - [`DecisionNode`] - The immutable trained tree
//! - [`render`] - Text and raster renderers over the tree's read-only
//!   traversal interface
//!
//! # Building a Tree
//!
//! ```
//! use cartree::{build_tree, render_text, Entropy};
//! use cartree::testing::data::{referrer_schema, referrer_table};
//!
//! let tree = build_tree(&referrer_table(), Entropy);
//! print!("{}", render_text(&tree, &referrer_schema()));
//! ```
//!
//! # Scope
//!
//! Construction only: there is no pruning and no prediction API. The tree
//! is a value; consumers walk it through [`DecisionNode::is_leaf`],
//! [`DecisionNode::leaf_counts`] and [`DecisionNode::split_info`].

pub mod dataset;
pub mod render;
pub mod repr;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data types (for preparing input tables)
pub use dataset::{DatasetError, LabelCounts, Record, Table, TableSchema, Value};

// The trained tree
pub use repr::DecisionNode;

// Construction types
pub use training::{
    build_tree, find_best_split, partition, Entropy, GiniImpurity, ImpurityFn, SplitInfo,
    TrainingLogger, TreeBuilder, TreeParams, Verbosity,
};

// Renderers
pub use render::{depth, draw_tree, render_text, save_tree, width, RasterParams, RenderError};
