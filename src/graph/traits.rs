//! Trait definitions for graph abstractions.
//!
//! Algorithms that only need vertex counts and forward traversal are written against these
//! traits rather than a concrete type, so they work over an [`Adjacency`](crate::graph::Adjacency)
//! built for either directedness, or over a small ad-hoc graph in tests.
//!
//! - [`GraphBase`] - Core properties: vertex count and vertex iteration
//! - [`Successors`] - Forward traversal in deterministic neighbor order

use crate::graph::VertexId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers, in ascending id order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor vertices of `vertex`.
    ///
    /// Implementations in this crate yield successors in the deterministic tie-break order
    /// (destination label, then id, then edge id), never in insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Computes which vertices are reachable from `start` by following successors.
///
/// Uses an explicit stack, so it is safe for deep graphs. Returns an empty vector if `start`
/// is out of range.
pub fn reachable<G: Successors>(graph: &G, start: VertexId) -> Vec<bool> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut visited = vec![false; vertex_count];
    visited[start.index()] = true;
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        for succ in graph.successors(vertex) {
            if !visited[succ.index()] {
                visited[succ.index()] = true;
                stack.push(succ);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal test graph implementation for trait testing
    struct TestGraph {
        vertex_count: usize,
        edges: Vec<(VertexId, VertexId)>,
    }

    impl GraphBase for TestGraph {
        fn vertex_count(&self) -> usize {
            self.vertex_count
        }

        fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
            (0..self.vertex_count).map(VertexId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == vertex)
                .map(|(_, dst)| *dst)
        }
    }

    #[test]
    fn test_reachable_follows_direction() {
        let graph = TestGraph {
            vertex_count: 4,
            edges: vec![
                (VertexId::new(0), VertexId::new(1)),
                (VertexId::new(1), VertexId::new(2)),
                (VertexId::new(3), VertexId::new(0)),
            ],
        };

        assert_eq!(
            reachable(&graph, VertexId::new(0)),
            vec![true, true, true, false]
        );
        assert_eq!(
            reachable(&graph, VertexId::new(2)),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn test_reachable_invalid_start() {
        let graph = TestGraph {
            vertex_count: 2,
            edges: vec![],
        };
        assert!(reachable(&graph, VertexId::new(9)).is_empty());
    }
}
