//! Immutable decision tree representation.

mod node;

pub use node::DecisionNode;
