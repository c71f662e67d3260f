//! Graph model consumed by every algorithm.
//!
//! # Architecture
//!
//! - **Identifiers**: [`VertexId`] and [`EdgeId`] are newtypes over dense indices
//! - **Model**: [`Graph`] holds the validated vertices and edges of one run, built either from
//!   the external `(vertices, edges, directed)` description ([`Graph::from_parts`]) or
//!   incrementally through [`GraphBuilder`]
//! - **Adjacency**: [`Adjacency`] exposes neighbors in a deterministic tie-break order
//! - **Traits**: [`GraphBase`] and [`Successors`] let traversal helpers stay generic
//!
//! # Immutable During Runs
//!
//! A graph is never mutated by an algorithm. Runs keep their own per-vertex and per-edge
//! annotation state, which the step recorder copies into each frame of the trace.

mod adjacency;
mod edge;
mod model;
mod node;
mod traits;

pub use adjacency::{Adjacency, Neighbor};
pub use edge::EdgeId;
pub use model::{Edge, EdgeSpec, Graph, GraphBuilder, Vertex, VertexSpec};
pub use node::VertexId;
pub use traits::{reachable, GraphBase, Successors};
