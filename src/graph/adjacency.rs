//! Deterministic adjacency construction.
//!
//! Every algorithm walks neighbors through an [`Adjacency`]. Neighbor lists are sorted by the
//! destination's label, then destination id, then edge id, so traces are reproducible no matter
//! how the input edge list happens to be ordered.

use crate::graph::{
    traits::{GraphBase, Successors},
    EdgeId, Graph, VertexId,
};

/// One entry of an adjacency list: the edge taken and the vertex it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The input edge this entry traverses
    pub edge: EdgeId,
    /// The vertex on the other side
    pub vertex: VertexId,
    /// Effective weight of the edge
    pub weight: i64,
}

/// Per-vertex neighbor lists in deterministic tie-break order.
///
/// For directed interpretation each edge `(from, to)` appears once, in `from`'s list. For
/// undirected interpretation it appears in both endpoints' lists under the same [`EdgeId`];
/// a self-loop appears once.
///
/// # Examples
///
/// ```rust
/// use algostep::{Adjacency, Graph, VertexId};
///
/// let mut builder = Graph::builder(true);
/// let a = builder.add_vertex("A");
/// let c = builder.add_vertex("C");
/// let b = builder.add_vertex("B");
/// builder.add_edge(a, c)?;
/// builder.add_edge(a, b)?;
/// let graph = builder.build();
///
/// let adjacency = Adjacency::build(&graph, true);
/// let order: Vec<VertexId> = adjacency.neighbors(a).iter().map(|n| n.vertex).collect();
/// assert_eq!(order, vec![b, c]); // sorted by label, not insertion
/// # Ok::<(), algostep::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Vec<Neighbor>>,
    directed: bool,
}

impl Adjacency {
    /// Builds adjacency lists for `graph`, interpreting edges as `directed` or not.
    ///
    /// Edges of a [`Graph`] are validated on construction, so every endpoint is in range.
    #[must_use]
    pub fn build(graph: &Graph, directed: bool) -> Self {
        let mut lists: Vec<Vec<Neighbor>> = vec![Vec::new(); graph.vertex_count()];

        for (index, edge) in graph.edges().iter().enumerate() {
            let id = EdgeId::new(index);
            lists[edge.from.index()].push(Neighbor {
                edge: id,
                vertex: edge.to,
                weight: edge.weight(),
            });
            if !directed && edge.from != edge.to {
                lists[edge.to.index()].push(Neighbor {
                    edge: id,
                    vertex: edge.from,
                    weight: edge.weight(),
                });
            }
        }

        for list in &mut lists {
            list.sort_by(|left, right| {
                graph
                    .label(left.vertex)
                    .cmp(graph.label(right.vertex))
                    .then(left.vertex.cmp(&right.vertex))
                    .then(left.edge.cmp(&right.edge))
            });
        }

        Adjacency { lists, directed }
    }

    /// Returns the neighbors of `vertex` in deterministic order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        &self.lists[vertex.index()]
    }

    /// Returns `true` if edges were interpreted as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Computes the in-degree of every vertex under this interpretation.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.lists.len()];
        for list in &self.lists {
            for neighbor in list {
                degrees[neighbor.vertex.index()] += 1;
            }
        }
        degrees
    }
}

impl GraphBase for Adjacency {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.lists.len()).map(VertexId::new)
    }
}

impl Successors for Adjacency {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.lists[vertex.index()].iter().map(|n| n.vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_unordered_graph(directed: bool) -> Graph {
        let mut builder = Graph::builder(directed);
        let a = builder.add_vertex("A");
        let d = builder.add_vertex("D");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_edge(a, d).unwrap();
        builder.add_edge(a, c).unwrap();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(b, c).unwrap();
        builder.build()
    }

    #[test]
    fn test_neighbors_sorted_by_label() {
        let graph = create_unordered_graph(true);
        let adjacency = Adjacency::build(&graph, true);

        let labels: Vec<&str> = adjacency
            .neighbors(VertexId::new(0))
            .iter()
            .map(|n| graph.label(n.vertex))
            .collect();
        assert_eq!(labels, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_order_independent_of_edge_order() {
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let d = builder.add_vertex("D");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_edge(b, c).unwrap();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(a, c).unwrap();
        builder.add_edge(a, d).unwrap();
        let shuffled = builder.build();

        let original = create_unordered_graph(true);
        let vertices = |g: &Graph| -> Vec<VertexId> {
            Adjacency::build(g, true)
                .neighbors(VertexId::new(0))
                .iter()
                .map(|n| n.vertex)
                .collect()
        };
        assert_eq!(vertices(&original), vertices(&shuffled));
    }

    #[test]
    fn test_undirected_exposes_both_endpoints() {
        let graph = create_unordered_graph(false);
        let adjacency = Adjacency::build(&graph, false);

        let from_c: Vec<VertexId> = adjacency.successors(VertexId::new(3)).collect();
        assert_eq!(from_c, vec![VertexId::new(0), VertexId::new(2)]);
        assert_eq!(adjacency.in_degrees(), vec![3, 1, 2, 2]);
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        builder.add_edge(a, a).unwrap();
        let graph = builder.build();

        let adjacency = Adjacency::build(&graph, false);
        assert_eq!(adjacency.neighbors(a).len(), 1);
    }

    #[test]
    fn test_directed_in_degrees() {
        let graph = create_unordered_graph(true);
        let adjacency = graph.adjacency();
        assert!(adjacency.is_directed());
        assert_eq!(adjacency.in_degrees(), vec![0, 1, 1, 2]);
    }
}
