//! # algostep Prelude
//!
//! The most commonly used types of the crate in one glob import: building a graph, running an
//! algorithm, and stepping through its trace.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all algostep operations
pub use crate::Error;

/// The result type used throughout algostep
pub use crate::Result;

// ================================================================================================
// Running Algorithms
// ================================================================================================

/// Engine entry point and algorithm selection
pub use crate::engine::{run, Algorithm};

/// Run configuration
pub use crate::config::{RunConfig, WeightPolicy};

/// Typed results
pub use crate::outcome::{Classification, Outcome, Run, ShortestPaths, SpanningTree};

/// Built-in sample graphs
pub use crate::presets;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Graph construction and identifiers
pub use crate::graph::{EdgeId, EdgeSpec, Graph, GraphBuilder, VertexId, VertexSpec};

/// Neighbor access
pub use crate::graph::{Adjacency, GraphBase, Neighbor, Successors};

// ================================================================================================
// Trace Playback
// ================================================================================================

/// Recorded steps and navigation
pub use crate::trace::{Cursor, Frame, Navigator, Step, Trace};

/// Per-element state captured in every step
pub use crate::trace::{
    Distance, EdgeClass, EdgeMarks, EdgeState, Side, VertexMarks, VertexState, VisitStatus,
};
