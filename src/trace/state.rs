//! Per-vertex and per-edge annotation state.
//!
//! These are the mutable fields an algorithm updates while it runs, and exactly what every
//! [`Step`](crate::trace::Step) deep-copies. Fields that are meaningless for the active
//! algorithm keep their sentinel value (`0`, `None`, [`Distance::Infinite`], no marks).

use std::fmt;

use bitflags::bitflags;
use serde::Serialize;
use strum::IntoStaticStr;

use crate::graph::VertexId;

/// DFS life-cycle of a vertex: `unvisited → exploring → finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VisitStatus {
    /// Not yet discovered
    #[default]
    Unvisited,
    /// Discovered and still on the current DFS path
    Exploring,
    /// All neighbors processed (terminal)
    Finished,
}

/// Depth-first classification of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EdgeClass {
    /// Not yet examined by the traversal
    #[default]
    Unclassified,
    /// Led to the discovery of a new vertex
    Tree,
    /// Points to a vertex still on the DFS path
    Back,
    /// Points to an already finished descendant
    Forward,
    /// Points to a finished vertex in another subtree or tree
    Cross,
}

/// One of the two colors of a bipartite 2-coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// First color, given to every DFS root
    A,
    /// Second color
    B,
}

impl Side {
    /// Returns the other color.
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A tentative shortest-path distance; `Infinite` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distance {
    /// A known path length
    Finite(i64),
    /// No path discovered (yet)
    #[default]
    Infinite,
}

impl Distance {
    /// Returns `true` for a finite distance.
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    /// Extends the distance by an edge weight; infinity stays infinite.
    #[must_use]
    pub fn extend(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

bitflags! {
    /// Vertex annotations used for trace display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct VertexMarks: u8 {
        /// Currently being processed
        const ACTIVE = 0x01;
        /// On the Tarjan SCC stack
        const IN_STACK = 0x02;
        /// Identified as an articulation point
        const ARTICULATION = 0x04;
        /// Part of the growing spanning tree (Prim) or settled set (Dijkstra)
        const IN_TREE = 0x08;
        /// Endpoint of a detected conflict or cycle
        const CONFLICT = 0x10;
    }
}

bitflags! {
    /// Transient edge highlights; purely annotation, never algorithmic state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct EdgeMarks: u8 {
        /// Currently being evaluated
        const ACTIVE = 0x01;
        /// Identified as a bridge
        const BRIDGE = 0x02;
        /// Accepted into a spanning tree
        const IN_TREE = 0x04;
        /// Rejected because it would close a cycle
        const REJECTED = 0x08;
        /// On a reconstructed shortest path
        const PATH = 0x10;
        /// Candidate crossing edge during a Prim search
        const CANDIDATE = 0x20;
        /// Closes a detected cycle
        const CYCLE = 0x40;
        /// Joins two same-colored vertices
        const CONFLICT = 0x80;
    }
}

/// Snapshot of one vertex's algorithm-scoped fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VertexState {
    /// DFS life-cycle state
    pub status: VisitStatus,
    /// Discovery time (`0` until discovered)
    pub discovery: u32,
    /// Finish time (`0` while unvisited or on the DFS path)
    pub finish: u32,
    /// Low-link value (low-link variants only)
    pub low_link: Option<u32>,
    /// Bipartite color
    pub color: Option<Side>,
    /// Tentative or final distance (Dijkstra)
    pub distance: Distance,
    /// Predecessor on the best known path (Dijkstra)
    pub predecessor: Option<VertexId>,
    /// Component id (SCC, Kruskal)
    pub component: Option<usize>,
    /// Remaining in-degree (Kahn)
    pub in_degree: Option<usize>,
    /// Display marks
    pub marks: VertexMarks,
}

/// Snapshot of one edge's annotation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeState {
    /// DFS classification
    pub class: EdgeClass,
    /// Display marks
    pub marks: EdgeMarks,
}
