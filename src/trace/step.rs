//! Trace frames.
//!
//! A [`Step`] is one immutable snapshot: deep copies of every vertex and edge state, a
//! [`Frame`] describing which micro-operation just happened together with the auxiliary
//! structures of that algorithm family, and a human-readable message.
//!
//! Frames are a sum type per algorithm family rather than one flat record, so a renderer
//! can only read the auxiliary fields that mean something for the step at hand. Every action
//! enum converts into a kebab-case `&'static str` tag (`discover`, `evaluate-edge`, `relax`, ...)
//! for UI branching.

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{EdgeId, VertexId},
    trace::state::{Distance, EdgeClass, EdgeState, VertexState},
};

/// Micro-operations of the DFS classification core and its specializations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DfsAction {
    /// A new DFS tree is started at `vertex`
    NewRoot {
        /// The root
        vertex: VertexId,
    },
    /// `vertex` received its discovery time
    Discover {
        /// The discovered vertex
        vertex: VertexId,
    },
    /// An edge is about to be examined
    EvaluateEdge {
        /// The edge
        edge: EdgeId,
        /// Vertex being explored
        from: VertexId,
        /// Vertex on the other side
        to: VertexId,
    },
    /// An edge received its classification
    Classify {
        /// The edge
        edge: EdgeId,
        /// Its class
        class: EdgeClass,
    },
    /// `vertex` received its finish time
    Finish {
        /// The finished vertex
        vertex: VertexId,
    },
    /// A vertex's low-link dropped
    LowLinkUpdated {
        /// The vertex
        vertex: VertexId,
        /// Its new low-link value
        low: u32,
    },
    /// A bridge was identified
    BridgeFound {
        /// The bridge
        edge: EdgeId,
    },
    /// An articulation point was identified
    ArticulationFound {
        /// The articulation point
        vertex: VertexId,
    },
    /// `vertex` roots a strongly connected component
    SccRoot {
        /// The component root
        vertex: VertexId,
    },
    /// A strongly connected component was popped off the stack
    SccFound {
        /// Component id
        component: usize,
        /// Member vertices, in pop order
        members: Vec<VertexId>,
    },
    /// A finished vertex was prepended to the topological order
    Prepend {
        /// The vertex
        vertex: VertexId,
    },
    /// A back edge closed a cycle; the run halts here
    CycleDetected {
        /// The closing edge
        edge: EdgeId,
    },
    /// An edge joins two vertices of the same color; the run halts here
    Conflict {
        /// The offending edge
        edge: EdgeId,
    },
    /// The traversal ran to exhaustion
    Complete,
}

/// Variant-specific auxiliary state of a DFS frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum DfsDetail {
    /// Plain edge classification
    Classification,
    /// Acyclicity test
    Cycle {
        /// The closing back edge, once found
        cycle_edge: Option<EdgeId>,
    },
    /// Topological order via finish times
    Topological {
        /// Order built so far (vertices are prepended at finish time)
        order: Vec<VertexId>,
        /// The closing back edge, once found
        cycle_edge: Option<EdgeId>,
    },
    /// Bipartite 2-coloring
    Bipartite {
        /// The conflicting edge, once found
        conflict: Option<EdgeId>,
    },
    /// Bridge search
    Bridges {
        /// Bridges found so far
        bridges: Vec<EdgeId>,
    },
    /// Articulation point search
    Articulation {
        /// Articulation points found so far
        points: Vec<VertexId>,
    },
    /// Tarjan's strongly connected components
    Scc {
        /// The auxiliary Tarjan stack, bottom first
        stack: Vec<VertexId>,
        /// Components discovered so far
        components: Vec<Vec<VertexId>>,
    },
}

impl DfsDetail {
    /// Returns `true` once a cycle has been detected.
    #[must_use]
    pub fn cycle_detected(&self) -> bool {
        matches!(
            self,
            DfsDetail::Cycle {
                cycle_edge: Some(_)
            } | DfsDetail::Topological {
                cycle_edge: Some(_),
                ..
            }
        )
    }
}

/// Auxiliary state shared by every DFS frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsAux {
    /// The recursion (call) stack, bottom first
    pub call_stack: Vec<VertexId>,
    /// Variant-specific bookkeeping
    pub detail: DfsDetail,
}

/// Micro-operations of Kahn's topological sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KahnAction {
    /// In-degrees of all vertices were computed
    InDegrees,
    /// A vertex reached in-degree zero and joined the queue
    Enqueue {
        /// The vertex
        vertex: VertexId,
    },
    /// A vertex left the queue and was appended to the order
    Dequeue {
        /// The vertex
        vertex: VertexId,
    },
    /// An outgoing edge was removed, lowering its target's in-degree
    Decrement {
        /// The removed edge
        edge: EdgeId,
        /// Its target
        vertex: VertexId,
        /// The target's remaining in-degree
        in_degree: usize,
    },
    /// The queue ran dry before every vertex was ordered
    CycleDetected {
        /// Vertices that never reached in-degree zero
        remaining: Vec<VertexId>,
    },
    /// Every vertex was ordered
    Complete,
}

/// Auxiliary state of a Kahn frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KahnAux {
    /// FIFO queue contents, front first
    pub queue: Vec<VertexId>,
    /// Order produced so far
    pub order: Vec<VertexId>,
    /// Set once the algorithm gives up because of a cycle
    pub cycle_detected: bool,
}

/// Micro-operations of Dijkstra's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DijkstraAction {
    /// Distances were initialized; the source sits at `0`
    Initialize {
        /// The source
        source: VertexId,
    },
    /// The closest queued vertex was extracted and settled
    ExtractMin {
        /// The extracted vertex
        vertex: VertexId,
        /// Its final distance
        distance: Distance,
    },
    /// An outgoing edge is about to be examined
    EvaluateEdge {
        /// The edge
        edge: EdgeId,
        /// The settled vertex
        from: VertexId,
        /// The neighbor
        to: VertexId,
    },
    /// The edge offered a shorter path
    Relax {
        /// The edge
        edge: EdgeId,
        /// The improved vertex
        vertex: VertexId,
        /// Previous distance
        old: Distance,
        /// New distance
        new: Distance,
    },
    /// The edge did not improve the neighbor's distance
    NoRelax {
        /// The edge
        edge: EdgeId,
        /// The neighbor
        vertex: VertexId,
        /// Distance through this edge
        candidate: Distance,
        /// Neighbor's current distance
        current: Distance,
    },
    /// The closest queued vertex is at infinity: the rest is unreachable
    Unreachable {
        /// Vertices that were never reached
        remaining: Vec<VertexId>,
    },
    /// Shortest-path tree edges were marked
    Complete,
}

/// Auxiliary state of a Dijkstra frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraAux {
    /// Priority queue contents ordered by `(distance, vertex)`
    pub frontier: Vec<(VertexId, Distance)>,
    /// Vertices settled so far, in extraction order
    pub settled: Vec<VertexId>,
    /// The vertex whose edges are being relaxed
    pub current: Option<VertexId>,
    /// Vertices reported unreachable
    pub unreachable: Vec<VertexId>,
}

/// Micro-operations of Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KruskalAction {
    /// Edges were stably sorted by weight
    Sort,
    /// An edge is about to be tested against the union-find
    Evaluate {
        /// The edge
        edge: EdgeId,
        /// Representative of the source's set
        from_root: usize,
        /// Representative of the target's set
        to_root: usize,
    },
    /// The edge joined two components and entered the tree
    Accept {
        /// The edge
        edge: EdgeId,
        /// Running total cost
        cost: i64,
    },
    /// The edge would close a cycle
    Reject {
        /// The edge
        edge: EdgeId,
    },
    /// All edges were scanned
    Complete {
        /// `true` if the tree spans every vertex
        spanning: bool,
    },
}

/// Auxiliary state of a Kruskal frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KruskalAux {
    /// Edges in scan order
    pub sorted: Vec<EdgeId>,
    /// Position in `sorted` of the edge under consideration (`sorted.len()` once done)
    pub cursor: usize,
    /// Union-find parent pointers
    pub parent: Vec<usize>,
    /// Union-find ranks
    pub rank: Vec<u32>,
    /// Accepted edges
    pub accepted: Vec<EdgeId>,
    /// Total cost of accepted edges
    pub cost: i64,
}

/// Micro-operations of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PrimAction {
    /// The tree was seeded with `root`
    Start {
        /// The root
        root: VertexId,
    },
    /// Crossing edges were collected
    Search {
        /// Candidate edges in edge-list order
        candidates: Vec<EdgeId>,
    },
    /// The cheapest crossing edge was chosen
    SelectMin {
        /// The edge
        edge: EdgeId,
        /// Its weight
        weight: i64,
    },
    /// The edge and its outside endpoint joined the tree
    AddToTree {
        /// The edge
        edge: EdgeId,
        /// The newly added vertex
        vertex: VertexId,
    },
    /// No crossing edge exists although vertices remain outside
    Disconnected {
        /// Vertices left outside the tree
        remaining: Vec<VertexId>,
    },
    /// Growth stopped
    Complete {
        /// `true` if the tree spans every vertex
        spanning: bool,
    },
}

/// Auxiliary state of a Prim frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimAux {
    /// Vertices inside the tree, in insertion order
    pub in_tree: Vec<VertexId>,
    /// Vertices still outside, ascending
    pub out_tree: Vec<VertexId>,
    /// Crossing edges of the latest search
    pub candidates: Vec<EdgeId>,
    /// Tree edges so far
    pub tree_edges: Vec<EdgeId>,
    /// Total cost so far
    pub cost: i64,
}

/// The algorithm-family-specific part of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum Frame {
    /// DFS core and its specializations
    Dfs {
        /// What just happened
        action: DfsAction,
        /// Auxiliary structures
        aux: DfsAux,
    },
    /// Kahn's topological sort
    Kahn {
        /// What just happened
        action: KahnAction,
        /// Auxiliary structures
        aux: KahnAux,
    },
    /// Dijkstra's shortest paths
    Dijkstra {
        /// What just happened
        action: DijkstraAction,
        /// Auxiliary structures
        aux: DijkstraAux,
    },
    /// Kruskal's minimum spanning tree
    Kruskal {
        /// What just happened
        action: KruskalAction,
        /// Auxiliary structures
        aux: KruskalAux,
    },
    /// Prim's minimum spanning tree
    Prim {
        /// What just happened
        action: PrimAction,
        /// Auxiliary structures
        aux: PrimAux,
    },
}

impl Frame {
    /// Returns the kebab-case discriminant of the action.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Frame::Dfs { action, .. } => action.into(),
            Frame::Kahn { action, .. } => action.into(),
            Frame::Dijkstra { action, .. } => action.into(),
            Frame::Kruskal { action, .. } => action.into(),
            Frame::Prim { action, .. } => action.into(),
        }
    }
}

/// One immutable, self-contained trace frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub(crate) index: usize,
    pub(crate) vertices: Vec<VertexState>,
    pub(crate) edges: Vec<EdgeState>,
    pub(crate) frame: Frame,
    pub(crate) message: String,
}

impl Step {
    /// Position of this step in its trace.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Vertex states at this instant, indexed by [`VertexId`].
    #[must_use]
    pub fn vertices(&self) -> &[VertexState] {
        &self.vertices
    }

    /// Edge states at this instant, indexed by [`EdgeId`].
    #[must_use]
    pub fn edges(&self) -> &[EdgeState] {
        &self.edges
    }

    /// State of one vertex.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&VertexState> {
        self.vertices.get(vertex.index())
    }

    /// State of one edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&EdgeState> {
        self.edges.get(edge.index())
    }

    /// The family-specific action and auxiliary state.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Kebab-case discriminant, e.g. `discover` or `relax`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.frame.tag()
    }
}
