//! Supporting data structures shared by the algorithm executors.
//!
//! - [`UnionFind`] - disjoint sets with path compression and union by rank
//! - [`Frontier`] - indexed min-heap with decrease-key

mod frontier;
mod union_find;

pub use frontier::Frontier;
pub use union_find::UnionFind;
