//! Final answers of a run.
//!
//! The [`Trace`] tells the story of a run; the [`Outcome`] is its conclusion. Signals such as a
//! detected cycle, a coloring conflict or unreachable vertices are part of the outcome rather
//! than errors, since the trace leading up to them is still valid.

use serde::Serialize;

use crate::{
    graph::{EdgeId, VertexId},
    trace::{Distance, EdgeClass, Side, Trace},
};

/// Result of a plain DFS classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Class of every edge, indexed by [`EdgeId`]
    pub classes: Vec<EdgeClass>,
    /// DFS roots in the order trees were started
    pub roots: Vec<VertexId>,
    /// Discovery times, indexed by [`VertexId`]
    pub discovery: Vec<u32>,
    /// Finish times, indexed by [`VertexId`]
    pub finish: Vec<u32>,
}

impl Classification {
    /// Number of edges carrying `class`.
    #[must_use]
    pub fn count(&self, class: EdgeClass) -> usize {
        self.classes.iter().filter(|c| **c == class).count()
    }
}

/// Single-source shortest paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The source vertex
    pub source: VertexId,
    /// Final distances, indexed by [`VertexId`]
    pub distances: Vec<Distance>,
    /// Predecessor on the shortest path, indexed by [`VertexId`]
    pub predecessors: Vec<Option<VertexId>>,
    /// Edge leading from the predecessor, indexed by [`VertexId`]
    pub predecessor_edges: Vec<Option<EdgeId>>,
}

impl ShortestPaths {
    /// Distance of `vertex`, [`Distance::Infinite`] if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex.index())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// The vertices on the shortest path from the source to `vertex`, source first.
    ///
    /// Returns `None` if `vertex` is unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.distance(vertex).is_finite() {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.predecessors.get(current.index()).copied().flatten() {
            path.push(previous);
            current = previous;
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// The edges on the shortest path from the source to `vertex`, source side first.
    #[must_use]
    pub fn path_edges_to(&self, vertex: VertexId) -> Option<Vec<EdgeId>> {
        let path = self.path_to(vertex)?;
        path.iter()
            .skip(1)
            .map(|v| self.predecessor_edges.get(v.index()).copied().flatten())
            .collect()
    }
}

/// A minimum spanning tree, or forest for disconnected graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Tree edges in the order they were accepted
    pub edges: Vec<EdgeId>,
    /// Sum of the tree edge weights, saturating at the `i64` bounds
    pub cost: i64,
    /// `true` if the tree reaches every vertex
    pub spanning: bool,
}

/// The algorithm-specific answer of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Outcome {
    /// DFS edge classification
    Classification(Classification),
    /// Acyclicity test
    Cycle {
        /// The back edge that closed a cycle, if any
        edge: Option<EdgeId>,
    },
    /// Topological sort (DFS or Kahn)
    Topological {
        /// The order, or `None` if the graph contains a cycle
        order: Option<Vec<VertexId>>,
    },
    /// Bipartite 2-coloring
    Bipartite {
        /// Color per vertex if the graph is 2-colorable
        sides: Option<Vec<Side>>,
        /// The edge that broke the coloring
        conflict: Option<EdgeId>,
    },
    /// Bridges in discovery order
    Bridges {
        /// The bridge edges
        edges: Vec<EdgeId>,
    },
    /// Articulation points in discovery order
    ArticulationPoints {
        /// The articulation points
        vertices: Vec<VertexId>,
    },
    /// Strongly connected components in completion order
    Components {
        /// Members per component, in pop order
        components: Vec<Vec<VertexId>>,
    },
    /// Dijkstra's shortest paths
    ShortestPaths(ShortestPaths),
    /// Kruskal's or Prim's spanning tree
    SpanningTree(SpanningTree),
}

impl Outcome {
    /// The classification result, if this is one.
    #[must_use]
    pub fn as_classification(&self) -> Option<&Classification> {
        match self {
            Outcome::Classification(classification) => Some(classification),
            _ => None,
        }
    }

    /// The shortest-path result, if this is one.
    #[must_use]
    pub fn as_shortest_paths(&self) -> Option<&ShortestPaths> {
        match self {
            Outcome::ShortestPaths(paths) => Some(paths),
            _ => None,
        }
    }

    /// The spanning tree, if this is one.
    #[must_use]
    pub fn as_spanning_tree(&self) -> Option<&SpanningTree> {
        match self {
            Outcome::SpanningTree(tree) => Some(tree),
            _ => None,
        }
    }

    /// The topological order. `None` for other outcomes and for cyclic graphs.
    #[must_use]
    pub fn topological_order(&self) -> Option<&[VertexId]> {
        match self {
            Outcome::Topological { order } => order.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the run ended on a cycle or 2-coloring conflict.
    #[must_use]
    pub fn halted(&self) -> bool {
        matches!(
            self,
            Outcome::Cycle { edge: Some(_) }
                | Outcome::Topological { order: None }
                | Outcome::Bipartite {
                    conflict: Some(_),
                    ..
                }
        )
    }
}

/// A finished run: the replayable trace and the final answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    trace: Trace,
    outcome: Outcome,
}

impl Run {
    pub(crate) fn new(trace: Trace, outcome: Outcome) -> Self {
        Self { trace, outcome }
    }

    /// The recorded trace.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The final answer.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Splits the run into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Trace, Outcome) {
        (self.trace, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn create_paths() -> ShortestPaths {
        // 0 -> 1 -> 2, vertex 3 unreachable
        ShortestPaths {
            source: v(0),
            distances: vec![
                Distance::Finite(0),
                Distance::Finite(2),
                Distance::Finite(5),
                Distance::Infinite,
            ],
            predecessors: vec![None, Some(v(0)), Some(v(1)), None],
            predecessor_edges: vec![None, Some(EdgeId::new(4)), Some(EdgeId::new(1)), None],
        }
    }

    #[test]
    fn test_path_to() {
        let paths = create_paths();
        assert_eq!(paths.path_to(v(2)), Some(vec![v(0), v(1), v(2)]));
        assert_eq!(paths.path_to(v(0)), Some(vec![v(0)]));
        assert_eq!(paths.path_to(v(3)), None);
        assert_eq!(paths.path_to(v(9)), None);
    }

    #[test]
    fn test_path_edges_to() {
        let paths = create_paths();
        assert_eq!(
            paths.path_edges_to(v(2)),
            Some(vec![EdgeId::new(4), EdgeId::new(1)])
        );
        assert_eq!(paths.path_edges_to(v(0)), Some(vec![]));
    }

    #[test]
    fn test_halted() {
        assert!(Outcome::Cycle {
            edge: Some(EdgeId::new(0))
        }
        .halted());
        assert!(!Outcome::Cycle { edge: None }.halted());
        assert!(Outcome::Topological { order: None }.halted());
        assert!(!Outcome::Bridges { edges: vec![] }.halted());
    }

    #[test]
    fn test_classification_count() {
        let classification = Classification {
            classes: vec![EdgeClass::Tree, EdgeClass::Back, EdgeClass::Tree],
            roots: vec![v(0)],
            discovery: vec![1, 2],
            finish: vec![2, 1],
        };
        assert_eq!(classification.count(EdgeClass::Tree), 2);
        assert_eq!(classification.count(EdgeClass::Cross), 0);
    }
}
