//! Dijkstra's single-source shortest paths.
//!
//! Every vertex starts in the [`Frontier`] at distance ∞, except the source at 0. The loop
//! extracts the closest vertex, and if that distance is ∞ every vertex still queued is
//! unreachable: an `unreachable` step is recorded and the loop stops. Otherwise each outgoing
//! edge is evaluated in adjacency order and either relaxes its target (with a decrease-key on
//! the frontier) or does not. After the loop, the predecessor edges of every reachable vertex
//! are marked as path edges in a final `complete` step.
//!
//! Relaxation is attempted against settled vertices too. With non-negative weights this never
//! succeeds; with negative weights allowed it can, and the settled vertex is not re-queued.

use crate::{
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run, ShortestPaths},
    trace::{
        DijkstraAction, DijkstraAux, Distance, EdgeMarks, EdgeState, Frame, Recorder,
        VertexMarks, VertexState,
    },
    utils::Frontier,
    Result,
};

struct Dijkstra<'g> {
    graph: &'g Graph,
    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
    frontier: Frontier<Distance>,
    settled: Vec<VertexId>,
    current: Option<VertexId>,
    unreachable: Vec<VertexId>,
    predecessor_edges: Vec<Option<EdgeId>>,
    recorder: Recorder,
}

impl Dijkstra<'_> {
    fn record(&mut self, action: DijkstraAction, message: String) -> Result<()> {
        let frame = Frame::Dijkstra {
            action,
            aux: DijkstraAux {
                frontier: self.frontier.entries(),
                settled: self.settled.clone(),
                current: self.current,
                unreachable: self.unreachable.clone(),
            },
        };
        self.recorder
            .record(&self.vertices, &self.edges, frame, message)
    }

    fn distance(&self, vertex: VertexId) -> Distance {
        self.vertices[vertex.index()].distance
    }
}

/// Computes shortest distances from `source` to every vertex.
pub(crate) fn dijkstra(graph: &Graph, source: VertexId, recorder: Recorder) -> Result<Run> {
    let adjacency = graph.adjacency();
    let mut state = Dijkstra {
        graph,
        vertices: vec![VertexState::default(); graph.vertex_count()],
        edges: vec![EdgeState::default(); graph.edge_count()],
        frontier: Frontier::new(graph.vertex_count()),
        settled: Vec::new(),
        current: None,
        unreachable: Vec::new(),
        predecessor_edges: vec![None; graph.vertex_count()],
        recorder,
    };

    state.vertices[source.index()].distance = Distance::Finite(0);
    for vertex in graph.vertex_ids() {
        let distance = state.distance(vertex);
        state.frontier.push(vertex, distance);
    }
    let message = format!(
        "distance({}) = 0, every other distance = ∞",
        graph.label(source)
    );
    state.record(DijkstraAction::Initialize { source }, message)?;

    while let Some((vertex, distance)) = state.frontier.pop() {
        if !distance.is_finite() {
            let mut remaining = vec![vertex];
            while let Some((rest, _)) = state.frontier.pop() {
                remaining.push(rest);
            }
            remaining.sort();
            state.current = None;
            state.unreachable.clone_from(&remaining);

            let message = format!(
                "closest remaining vertex {} is at ∞: {} vertices unreachable",
                graph.label(vertex),
                remaining.len()
            );
            state.record(DijkstraAction::Unreachable { remaining }, message)?;
            break;
        }

        state.settled.push(vertex);
        state.current = Some(vertex);
        state.vertices[vertex.index()].marks.insert(VertexMarks::IN_TREE);
        let message = format!("extract {} at distance {}", graph.label(vertex), distance);
        state.record(DijkstraAction::ExtractMin { vertex, distance }, message)?;

        for neighbor in adjacency.neighbors(vertex) {
            let (edge, target) = (neighbor.edge, neighbor.vertex);
            state.edges[edge.index()].marks.insert(EdgeMarks::ACTIVE);
            let message = format!(
                "evaluate {} with weight {}",
                graph.describe_edge(edge),
                neighbor.weight
            );
            state.record(
                DijkstraAction::EvaluateEdge {
                    edge,
                    from: vertex,
                    to: target,
                },
                message,
            )?;

            let candidate = distance.extend(neighbor.weight);
            let current = state.distance(target);
            if candidate < current {
                let target_state = &mut state.vertices[target.index()];
                target_state.distance = candidate;
                target_state.predecessor = Some(vertex);
                state.predecessor_edges[target.index()] = Some(edge);
                state.frontier.decrease_key(target, candidate);

                let message = format!(
                    "relax {}: distance({}) {} → {}",
                    graph.describe_edge(edge),
                    graph.label(target),
                    current,
                    candidate
                );
                state.record(
                    DijkstraAction::Relax {
                        edge,
                        vertex: target,
                        old: current,
                        new: candidate,
                    },
                    message,
                )?;
            } else {
                let message = format!(
                    "no relaxation via {}: {} is not shorter than {}",
                    graph.describe_edge(edge),
                    candidate,
                    current
                );
                state.record(
                    DijkstraAction::NoRelax {
                        edge,
                        vertex: target,
                        candidate,
                        current,
                    },
                    message,
                )?;
            }
            state.edges[edge.index()].marks.remove(EdgeMarks::ACTIVE);
        }
    }

    state.current = None;
    for edge in state.predecessor_edges.iter().flatten() {
        state.edges[edge.index()].marks.insert(EdgeMarks::PATH);
    }
    let reachable = state
        .vertices
        .iter()
        .filter(|v| v.distance.is_finite())
        .count();
    let message = format!(
        "shortest-path tree marked: {} of {} vertices reachable from {}",
        reachable,
        state.graph.vertex_count(),
        state.graph.label(source)
    );
    state.record(DijkstraAction::Complete, message)?;

    let paths = ShortestPaths {
        source,
        distances: state.vertices.iter().map(|v| v.distance).collect(),
        predecessors: state.vertices.iter().map(|v| v.predecessor).collect(),
        predecessor_edges: state.predecessor_edges,
    };
    Ok(Run::new(
        state.recorder.finish(graph),
        Outcome::ShortestPaths(paths),
    ))
}
