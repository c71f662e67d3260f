//! Kruskal's minimum spanning tree.
//!
//! Edges are stably sorted by weight, so equal weights keep their input order and traces are
//! reproducible. Each edge in turn is evaluated against a [`UnionFind`]: joining two different
//! sets accepts it, otherwise it would close a cycle and is rejected. Every vertex carries its
//! current set representative as component id, so merges are visible in the trace.

use crate::{
    graph::{EdgeId, Graph},
    outcome::{Outcome, Run, SpanningTree},
    trace::{
        EdgeMarks, EdgeState, Frame, KruskalAction, KruskalAux, Recorder, VertexState,
    },
    utils::UnionFind,
    Result,
};

struct Kruskal {
    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
    sets: UnionFind,
    sorted: Vec<EdgeId>,
    cursor: usize,
    accepted: Vec<EdgeId>,
    cost: i64,
    recorder: Recorder,
}

impl Kruskal {
    fn record(&mut self, action: KruskalAction, message: String) -> Result<()> {
        let frame = Frame::Kruskal {
            action,
            aux: KruskalAux {
                sorted: self.sorted.clone(),
                cursor: self.cursor,
                parent: self.sets.parents().to_vec(),
                rank: self.sets.ranks().to_vec(),
                accepted: self.accepted.clone(),
                cost: self.cost,
            },
        };
        self.recorder
            .record(&self.vertices, &self.edges, frame, message)
    }

    fn refresh_components(&mut self) {
        for (vertex, state) in self.vertices.iter_mut().enumerate() {
            state.component = Some(self.sets.find(vertex));
        }
    }
}

/// Builds a minimum spanning forest of an undirected weighted graph.
pub(crate) fn kruskal(graph: &Graph, recorder: Recorder) -> Result<Run> {
    let mut sorted: Vec<EdgeId> = graph.edge_ids().collect();
    sorted.sort_by_key(|edge| graph.edges()[edge.index()].weight());

    let mut state = Kruskal {
        vertices: vec![VertexState::default(); graph.vertex_count()],
        edges: vec![EdgeState::default(); graph.edge_count()],
        sets: UnionFind::new(graph.vertex_count()),
        sorted,
        cursor: 0,
        accepted: Vec::new(),
        cost: 0,
        recorder,
    };
    state.refresh_components();
    state.record(
        KruskalAction::Sort,
        format!("sorted {} edges by weight", graph.edge_count()),
    )?;

    for cursor in 0..state.sorted.len() {
        let edge = state.sorted[cursor];
        let (from, to, weight) = {
            let e = &graph.edges()[edge.index()];
            (e.from, e.to, e.weight())
        };
        state.cursor = cursor;

        let from_root = state.sets.find(from.index());
        let to_root = state.sets.find(to.index());
        state.edges[edge.index()].marks.insert(EdgeMarks::ACTIVE);
        let message = format!(
            "evaluate {} (weight {}): find({}) = {}, find({}) = {}",
            graph.describe_edge(edge),
            weight,
            graph.label(from),
            from_root,
            graph.label(to),
            to_root
        );
        state.record(
            KruskalAction::Evaluate {
                edge,
                from_root,
                to_root,
            },
            message,
        )?;
        state.edges[edge.index()].marks.remove(EdgeMarks::ACTIVE);

        if state.sets.union(from_root, to_root) {
            state.accepted.push(edge);
            state.cost = state.cost.saturating_add(weight);
            state.edges[edge.index()].marks.insert(EdgeMarks::IN_TREE);
            state.refresh_components();

            let message = format!(
                "accept {}: total cost {}",
                graph.describe_edge(edge),
                state.cost
            );
            state.record(
                KruskalAction::Accept {
                    edge,
                    cost: state.cost,
                },
                message,
            )?;
        } else {
            state.edges[edge.index()].marks.insert(EdgeMarks::REJECTED);
            let message = format!(
                "reject {}: {} and {} are already connected",
                graph.describe_edge(edge),
                graph.label(from),
                graph.label(to)
            );
            state.record(KruskalAction::Reject { edge }, message)?;
        }
    }

    state.cursor = state.sorted.len();
    let spanning = state.accepted.len() + 1 >= graph.vertex_count();
    let message = if spanning {
        format!(
            "spanning tree with {} edges, cost {}",
            state.accepted.len(),
            state.cost
        )
    } else {
        format!(
            "graph is disconnected: spanning forest of {} trees, cost {}",
            state.sets.set_count(),
            state.cost
        )
    };
    state.record(KruskalAction::Complete { spanning }, message)?;

    let tree = SpanningTree {
        edges: std::mem::take(&mut state.accepted),
        cost: state.cost,
        spanning,
    };
    Ok(Run::new(
        state.recorder.finish(graph),
        Outcome::SpanningTree(tree),
    ))
}
