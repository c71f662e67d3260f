//! The immutable-per-run graph model consumed by every algorithm.
//!
//! A [`Graph`] is a fixed, dense vertex list plus an edge list. Whether the edges are directed
//! is a property of the graph, interpreted by [`Adjacency`](crate::graph::Adjacency)
//! construction: undirected graphs store each edge once and expose it from both endpoints.
//!
//! Algorithms never mutate a `Graph`. All per-run annotation (vertex states, edge
//! classifications, highlight flags) lives in the run's own state and in the recorded
//! [`Trace`](crate::Trace).

use serde::Serialize;

use crate::{
    error::invalid_graph,
    graph::{Adjacency, EdgeId, VertexId},
    utils::UnionFind,
    Error, Result,
};

/// A vertex of a [`Graph`]: its dense id and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    id: VertexId,
    label: String,
}

impl Vertex {
    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An edge of a [`Graph`].
///
/// The pair is ordered; for undirected graphs the order only matters for display. The weight is
/// optional in the input: unweighted edges count as weight `1` for every algorithm that does not
/// explicitly require weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source vertex
    pub from: VertexId,
    /// Target vertex
    pub to: VertexId,
    /// Explicit weight, if one was supplied
    pub weight: Option<i64>,
}

impl Edge {
    /// Returns the effective weight, defaulting to `1`.
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight.unwrap_or(1)
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// For a self-loop this is `vertex` itself.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }
}

/// External description of a vertex: `{id, label}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSpec {
    /// Dense 0-based id
    pub id: usize,
    /// Display label
    pub label: String,
}

impl VertexSpec {
    /// Creates a new vertex description.
    pub fn new(id: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// External description of an edge: `{from, to, weight?}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Source vertex id
    pub from: usize,
    /// Target vertex id
    pub to: usize,
    /// Optional weight
    pub weight: Option<i64>,
}

impl EdgeSpec {
    /// Creates an unweighted edge description.
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// Creates a weighted edge description.
    #[must_use]
    pub fn weighted(from: usize, to: usize, weight: i64) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }
}

/// A validated graph: dense vertices, in-range edges, and a directedness flag.
///
/// # Examples
///
/// ```rust
/// use algostep::Graph;
///
/// let mut builder = Graph::builder(true);
/// let a = builder.add_vertex("A");
/// let b = builder.add_vertex("B");
/// builder.add_weighted_edge(a, b, 4)?;
/// let graph = builder.build();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.label(b), "B");
/// # Ok::<(), algostep::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    directed: bool,
}

impl Graph {
    /// Starts building a graph incrementally.
    #[must_use]
    pub fn builder(directed: bool) -> GraphBuilder {
        GraphBuilder {
            graph: Graph {
                vertices: Vec::new(),
                edges: Vec::new(),
                directed,
            },
        }
    }

    /// Builds a graph from the external `(vertices, edges, directed)` description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if vertex ids are not exactly `0..n` in order, or if any
    /// edge references a vertex outside `[0, n)`.
    pub fn from_parts(vertices: Vec<VertexSpec>, edges: Vec<EdgeSpec>, directed: bool) -> Result<Self> {
        let mut builder = Graph::builder(directed);
        for (position, spec) in vertices.into_iter().enumerate() {
            if spec.id != position {
                return Err(invalid_graph!(
                    "vertex ids must be dense and ordered: found id {} at position {}",
                    spec.id,
                    position
                ));
            }
            builder.add_vertex(spec.label);
        }

        for spec in edges {
            builder.push_edge(spec.from, spec.to, spec.weight)?;
        }

        Ok(builder.build())
    }

    /// Builds a graph from a static `(from, to, weight)` table whose endpoints index `labels`.
    ///
    /// Only used for built-in graphs; external input goes through [`Graph::from_parts`].
    pub(crate) fn from_table(
        labels: &[&str],
        edges: &[(usize, usize, Option<i64>)],
        directed: bool,
    ) -> Graph {
        debug_assert!(edges
            .iter()
            .all(|(from, to, _)| *from < labels.len() && *to < labels.len()));

        Graph {
            vertices: labels
                .iter()
                .enumerate()
                .map(|(index, label)| Vertex {
                    id: VertexId::new(index),
                    label: (*label).to_string(),
                })
                .collect(),
            edges: edges
                .iter()
                .map(|(from, to, weight)| Edge {
                    from: VertexId::new(*from),
                    to: VertexId::new(*to),
                    weight: *weight,
                })
                .collect(),
            directed,
        }
    }

    /// Returns `true` if edges are interpreted as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of input edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertices in id order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns all edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Returns the label of a vertex, or `"?"` for an unknown id.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> &str {
        self.vertex(vertex).map_or("?", Vertex::label)
    }

    /// Formats an edge as `A→B` (directed) or `A–B` (undirected) for step messages.
    #[must_use]
    pub fn describe_edge(&self, edge: EdgeId) -> String {
        match self.edge(edge) {
            Some(e) => {
                let arrow = if self.directed { "→" } else { "–" };
                format!("{}{}{}", self.label(e.from), arrow, self.label(e.to))
            }
            None => edge.to_string(),
        }
    }

    /// Returns an iterator over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns an iterator over all edge ids in input order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns `true` if `vertex` exists in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Builds the deterministic adjacency list for this graph's own directedness.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::build(self, self.directed)
    }

    /// Returns a copy of the graph with one edge removed.
    ///
    /// Edge ids after the removed edge shift down by one.
    #[must_use]
    pub fn without_edge(&self, edge: EdgeId) -> Graph {
        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != edge.index())
            .map(|(_, e)| *e)
            .collect();

        Graph {
            vertices: self.vertices.clone(),
            edges,
            directed: self.directed,
        }
    }

    /// Returns a copy of the graph with one vertex and all its incident edges removed.
    ///
    /// Remaining vertices are renumbered densely, preserving their relative order and labels.
    #[must_use]
    pub fn without_vertex(&self, vertex: VertexId) -> Graph {
        let remap = |v: VertexId| {
            if v.index() > vertex.index() {
                VertexId::new(v.index() - 1)
            } else {
                v
            }
        };

        let vertices = self
            .vertices
            .iter()
            .filter(|v| v.id != vertex)
            .map(|v| Vertex {
                id: remap(v.id),
                label: v.label.clone(),
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .filter(|e| !e.touches(vertex))
            .map(|e| Edge {
                from: remap(e.from),
                to: remap(e.to),
                weight: e.weight,
            })
            .collect();

        Graph {
            vertices,
            edges,
            directed: self.directed,
        }
    }

    /// Counts connected components, ignoring edge direction.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut sets = UnionFind::new(self.vertices.len());
        for edge in &self.edges {
            sets.union(edge.from.index(), edge.to.index());
        }
        sets.set_count()
    }

    /// Validates that `vertex` can serve as a start vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for a graph without vertices and [`Error::InvalidStart`] for an
    /// out-of-range id.
    pub fn check_start(&self, vertex: VertexId) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(Error::Empty);
        }
        if !self.contains_vertex(vertex) {
            return Err(Error::InvalidStart {
                vertex: vertex.index(),
                vertex_count: self.vertices.len(),
            });
        }
        Ok(())
    }
}

/// Incremental constructor for [`Graph`], validating every edge as it is added.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Adds a vertex and returns its id. Ids are assigned sequentially from 0.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.graph.vertices.len());
        self.graph.vertices.push(Vertex {
            id,
            label: label.into(),
        });
        id
    }

    /// Adds an unweighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if either endpoint does not exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.push_edge(from.index(), to.index(), None)
    }

    /// Adds a weighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if either endpoint does not exist.
    pub fn add_weighted_edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<EdgeId> {
        self.push_edge(from.index(), to.index(), Some(weight))
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: Option<i64>) -> Result<EdgeId> {
        let count = self.graph.vertices.len();
        if from >= count {
            return Err(invalid_graph!(
                "source vertex {} does not exist in graph with {} vertices",
                from,
                count
            ));
        }
        if to >= count {
            return Err(invalid_graph!(
                "target vertex {} does not exist in graph with {} vertices",
                to,
                count
            ));
        }

        let id = EdgeId::new(self.graph.edges.len());
        self.graph.edges.push(Edge {
            from: VertexId::new(from),
            to: VertexId::new(to),
            weight,
        });
        Ok(id)
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_path_graph() -> Graph {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_edge(a, b).unwrap();
        builder.add_weighted_edge(b, c, 7).unwrap();
        builder.build()
    }

    #[test]
    fn test_builder_assigns_dense_ids() {
        let graph = create_path_graph();
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        assert_eq!(ids, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
        assert_eq!(graph.label(VertexId::new(2)), "C");
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_edge_weight_defaults_to_one() {
        let graph = create_path_graph();
        assert_eq!(graph.edges()[0].weight(), 1);
        assert_eq!(graph.edges()[1].weight(), 7);
    }

    #[test]
    fn test_add_edge_invalid_target() {
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let result = builder.add_edge(a, VertexId::new(5));
        assert!(matches!(result, Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn test_from_parts_rejects_out_of_range_edge() {
        let vertices = vec![VertexSpec::new(0, "A"), VertexSpec::new(1, "B")];
        let edges = vec![EdgeSpec::new(0, 1), EdgeSpec::new(2, 0)];
        let result = Graph::from_parts(vertices, edges, true);
        assert!(matches!(result, Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn test_from_parts_rejects_sparse_ids() {
        let vertices = vec![VertexSpec::new(0, "A"), VertexSpec::new(2, "C")];
        let result = Graph::from_parts(vertices, vec![], true);
        assert!(matches!(result, Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn test_from_parts_keeps_weights() {
        let vertices = vec![VertexSpec::new(0, "A"), VertexSpec::new(1, "B")];
        let edges = vec![EdgeSpec::weighted(0, 1, 9)];
        let graph = Graph::from_parts(vertices, edges, true).unwrap();
        assert_eq!(graph.edge(EdgeId::new(0)).unwrap().weight, Some(9));
    }

    #[test]
    fn test_without_edge_splits_components() {
        let graph = create_path_graph();
        assert_eq!(graph.component_count(), 1);

        let cut = graph.without_edge(EdgeId::new(0));
        assert_eq!(cut.edge_count(), 1);
        assert_eq!(cut.component_count(), 2);
    }

    #[test]
    fn test_without_vertex_renumbers() {
        let graph = create_path_graph();
        let cut = graph.without_vertex(VertexId::new(1));

        assert_eq!(cut.vertex_count(), 2);
        assert_eq!(cut.edge_count(), 0);
        assert_eq!(cut.label(VertexId::new(1)), "C");
        assert_eq!(cut.vertices()[1].id(), VertexId::new(1));
        assert_eq!(cut.component_count(), 2);
    }

    #[test]
    fn test_check_start() {
        let graph = create_path_graph();
        assert!(graph.check_start(VertexId::new(2)).is_ok());
        assert_eq!(
            graph.check_start(VertexId::new(3)),
            Err(Error::InvalidStart {
                vertex: 3,
                vertex_count: 3
            })
        );

        let empty = Graph::builder(true).build();
        assert_eq!(empty.check_start(VertexId::new(0)), Err(Error::Empty));
    }

    #[test]
    fn test_describe_edge() {
        let graph = create_path_graph();
        assert_eq!(graph.describe_edge(EdgeId::new(1)), "B–C");
    }
}
