//! Tree construction.
//!
//! # Key Types
//!
//! - [`TreeBuilder`] / [`TreeParams`]: recursive gain-driven construction
//! - [`ImpurityFn`]: strategy trait for label heterogeneity, with
//!   [`Entropy`] and [`GiniImpurity`] implementations
//! - [`partition`] / [`find_best_split`] / [`SplitInfo`]: the split layer
//! - [`TrainingLogger`] / [`Verbosity`]: structured build logging
//!
//! The short path is [`build_tree`]:
//!
//! ```
//! use cartree::{build_tree, Entropy};
//! use cartree::testing::data::referrer_table;
//!
//! let tree = build_tree(&referrer_table(), Entropy);
//! assert!(!tree.is_leaf());
//! ```

mod builder;
mod impurity;
mod logger;
mod split;

pub use builder::{build_tree, TreeBuilder, TreeParams};
pub use impurity::{Entropy, GiniImpurity, ImpurityFn};
pub use logger::{TrainingLogger, Verbosity};
pub use split::{find_best_split, partition, SplitInfo};
