use thiserror::Error;

use crate::{engine::Algorithm, graph::EdgeId};

macro_rules! invalid_graph {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidGraph($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidGraph(format!($fmt, $($arg)*))
    };
}

pub(crate) use invalid_graph;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only conditions that prevent a run from starting, or that make a trace unaddressable, are
/// errors. Algorithmic outcomes such as a detected cycle, a bipartite conflict, unreachable
/// vertices or a disconnected spanning tree are *not* errors: they are recorded as steps in the
/// trace and reported through [`crate::Outcome`], because the trace up to that point is still
/// valid and displayable.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::InvalidGraph`] - An edge references a vertex outside the graph, or ids are not dense
/// - [`Error::InvalidStart`] - The start vertex is outside the graph
/// - [`Error::Empty`] - The graph has no vertices
///
/// ## Precondition Errors
/// - [`Error::MissingWeight`] - A weighted algorithm met an edge without a weight
/// - [`Error::NegativeWeight`] - Dijkstra met a negative edge weight
/// - [`Error::Directedness`] - The algorithm does not support the graph's directedness
///
/// ## Trace Errors
/// - [`Error::StepOutOfRange`] - A step index outside `[0, len)` was requested
/// - [`Error::StepLimit`] - The configured step budget was exhausted during a run
///
/// # Examples
///
/// ```rust
/// use algostep::{Error, Graph, EdgeSpec, VertexSpec};
///
/// let vertices = vec![VertexSpec::new(0, "A")];
/// let edges = vec![EdgeSpec::new(0, 3)];
///
/// match Graph::from_parts(vertices, edges, true) {
///     Err(Error::InvalidGraph(message)) => println!("rejected: {message}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph violates the dense-id / in-range endpoint invariant.
    ///
    /// Surfaced before any run starts; no trace is produced.
    #[error("Invalid graph - {0}")]
    InvalidGraph(String),

    /// The requested start vertex does not exist.
    #[error("Start vertex {vertex} is outside a graph with {vertex_count} vertices")]
    InvalidStart {
        /// The requested start vertex index
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// Provided graph was empty.
    #[error("Provided graph has no vertices")]
    Empty,

    /// A weighted algorithm encountered an edge without an explicit weight.
    #[error("Edge {edge} has no weight, but the algorithm requires weighted edges")]
    MissingWeight {
        /// The offending edge
        edge: EdgeId,
    },

    /// Dijkstra encountered a negative edge weight while negative weights are rejected.
    #[error("Edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// The offending edge
        edge: EdgeId,
        /// Its weight
        weight: i64,
    },

    /// The algorithm cannot run on a graph of this directedness.
    #[error("{algorithm} cannot run on {} graphs", graph_kind(.directed))]
    Directedness {
        /// The algorithm that was requested
        algorithm: Algorithm,
        /// Directedness of the supplied graph
        directed: bool,
    },

    /// A navigator was asked for a step outside the trace.
    #[error("Step {index} is out of range for a trace of {len} steps")]
    StepOutOfRange {
        /// The requested index
        index: usize,
        /// Length of the trace
        len: usize,
    },

    /// The run produced more steps than the configured budget allows.
    #[error("Run exceeded the step limit of {0}")]
    StepLimit(usize),
}

fn graph_kind(directed: &bool) -> &'static str {
    if *directed {
        "directed"
    } else {
        "undirected"
    }
}
