//! Prim's minimum spanning tree by frontier cut selection.
//!
//! The vertex set is split into `in_tree`, seeded with the root, and `out_tree`. Each round
//! scans the whole edge list for edges crossing the cut, picks the cheapest (the first one in
//! edge-list order on ties), and moves its outside endpoint into the tree. Growth stops when
//! every vertex is inside or no crossing edge exists. In the latter case the graph is
//! disconnected and the result is the tree of the root's component only.

use crate::{
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run, SpanningTree},
    trace::{
        EdgeMarks, EdgeState, Frame, PrimAction, PrimAux, Recorder, VertexMarks, VertexState,
    },
    Result,
};

struct Prim {
    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
    inside: Vec<bool>,
    in_tree: Vec<VertexId>,
    candidates: Vec<EdgeId>,
    tree_edges: Vec<EdgeId>,
    cost: i64,
    recorder: Recorder,
}

impl Prim {
    fn out_tree(&self) -> Vec<VertexId> {
        self.inside
            .iter()
            .enumerate()
            .filter(|(_, inside)| !**inside)
            .map(|(index, _)| VertexId::new(index))
            .collect()
    }

    fn record(&mut self, action: PrimAction, message: String) -> Result<()> {
        let frame = Frame::Prim {
            action,
            aux: PrimAux {
                in_tree: self.in_tree.clone(),
                out_tree: self.out_tree(),
                candidates: self.candidates.clone(),
                tree_edges: self.tree_edges.clone(),
                cost: self.cost,
            },
        };
        self.recorder
            .record(&self.vertices, &self.edges, frame, message)
    }

    fn admit(&mut self, vertex: VertexId) {
        self.inside[vertex.index()] = true;
        self.in_tree.push(vertex);
        self.vertices[vertex.index()].marks.insert(VertexMarks::IN_TREE);
    }

    fn set_candidates(&mut self, candidates: Vec<EdgeId>) {
        for edge in &self.candidates {
            self.edges[edge.index()].marks.remove(EdgeMarks::CANDIDATE);
        }
        for edge in &candidates {
            self.edges[edge.index()].marks.insert(EdgeMarks::CANDIDATE);
        }
        self.candidates = candidates;
    }
}

/// Grows a minimum spanning tree of an undirected weighted graph from `root`.
pub(crate) fn prim(graph: &Graph, root: VertexId, recorder: Recorder) -> Result<Run> {
    let mut state = Prim {
        vertices: vec![VertexState::default(); graph.vertex_count()],
        edges: vec![EdgeState::default(); graph.edge_count()],
        inside: vec![false; graph.vertex_count()],
        in_tree: Vec::new(),
        candidates: Vec::new(),
        tree_edges: Vec::new(),
        cost: 0,
        recorder,
    };

    state.admit(root);
    state.record(
        PrimAction::Start { root },
        format!("grow the tree from {}", graph.label(root)),
    )?;

    while state.in_tree.len() < graph.vertex_count() {
        let candidates: Vec<EdgeId> = graph
            .edge_ids()
            .filter(|edge| {
                let e = &graph.edges()[edge.index()];
                state.inside[e.from.index()] != state.inside[e.to.index()]
            })
            .collect();
        state.set_candidates(candidates.clone());
        let message = format!("{} edge(s) cross the cut", candidates.len());
        state.record(PrimAction::Search { candidates }, message)?;

        let mut best: Option<(EdgeId, i64)> = None;
        for edge in &state.candidates {
            let weight = graph.edges()[edge.index()].weight();
            if best.is_none_or(|(_, lowest)| weight < lowest) {
                best = Some((*edge, weight));
            }
        }

        let Some((edge, weight)) = best else {
            state.set_candidates(Vec::new());
            let remaining = state.out_tree();
            let message = format!(
                "no edge crosses the cut: {} vertices unreachable from {}",
                remaining.len(),
                graph.label(root)
            );
            state.record(PrimAction::Disconnected { remaining }, message)?;
            break;
        };

        state.edges[edge.index()].marks.insert(EdgeMarks::ACTIVE);
        let message = format!(
            "cheapest crossing edge is {} with weight {}",
            graph.describe_edge(edge),
            weight
        );
        state.record(PrimAction::SelectMin { edge, weight }, message)?;

        let e = &graph.edges()[edge.index()];
        let vertex = if state.inside[e.from.index()] {
            e.to
        } else {
            e.from
        };
        state.set_candidates(Vec::new());
        state.admit(vertex);
        state.tree_edges.push(edge);
        state.cost = state.cost.saturating_add(weight);
        let marks = &mut state.edges[edge.index()].marks;
        marks.remove(EdgeMarks::ACTIVE);
        marks.insert(EdgeMarks::IN_TREE);

        let message = format!(
            "add {} and {} to the tree: total cost {}",
            graph.describe_edge(edge),
            graph.label(vertex),
            state.cost
        );
        state.record(PrimAction::AddToTree { edge, vertex }, message)?;
    }

    let spanning = state.in_tree.len() == graph.vertex_count();
    let message = format!(
        "tree covers {} of {} vertices with cost {}",
        state.in_tree.len(),
        graph.vertex_count(),
        state.cost
    );
    state.record(PrimAction::Complete { spanning }, message)?;

    let tree = SpanningTree {
        edges: std::mem::take(&mut state.tree_edges),
        cost: state.cost,
        spanning,
    };
    Ok(Run::new(
        state.recorder.finish(graph),
        Outcome::SpanningTree(tree),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::Algorithm, trace::Trace};

    fn e(index: usize) -> EdgeId {
        EdgeId::new(index)
    }

    fn run_prim(graph: &Graph, root: usize) -> (Trace, SpanningTree) {
        let recorder = Recorder::new(Algorithm::Prim, None);
        let (trace, outcome) = prim(graph, VertexId::new(root), recorder)
            .unwrap()
            .into_parts();
        match outcome {
            Outcome::SpanningTree(tree) => (trace, tree),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    fn create_square() -> Graph {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        let d = builder.add_vertex("D");
        builder.add_weighted_edge(a, b, 1).unwrap();
        builder.add_weighted_edge(b, c, 2).unwrap();
        builder.add_weighted_edge(c, d, 1).unwrap();
        builder.add_weighted_edge(d, a, 3).unwrap();
        builder.add_weighted_edge(a, c, 2).unwrap();
        builder.build()
    }

    #[test]
    fn test_growth_order() {
        let graph = create_square();
        let (trace, tree) = run_prim(&graph, 0);

        // B–C and A–C tie at 2 once B is in: B–C comes first in the edge list
        assert_eq!(tree.edges, vec![e(0), e(1), e(2)]);
        assert_eq!(tree.cost, 4);
        assert!(tree.spanning);

        let tags: Vec<&str> = trace.steps().iter().map(|s| s.tag()).collect();
        assert_eq!(tags[0], "start");
        assert_eq!(&tags[1..4], &["search", "select-min", "add-to-tree"]);
        assert_eq!(*tags.last().unwrap(), "complete");
    }

    #[test]
    fn test_same_cost_as_kruskal() {
        let graph = create_square();
        let (_, from_prim) = run_prim(&graph, 2);
        let recorder = Recorder::new(Algorithm::Kruskal, None);
        let from_kruskal = crate::algorithms::kruskal(&graph, recorder).unwrap();
        assert_eq!(
            Some(from_prim.cost),
            from_kruskal.outcome().as_spanning_tree().map(|t| t.cost)
        );
    }

    #[test]
    fn test_search_lists_crossing_edges() {
        let graph = create_square();
        let (trace, _) = run_prim(&graph, 0);

        match trace.steps()[1].frame() {
            Frame::Prim {
                action: PrimAction::Search { candidates },
                aux,
            } => {
                assert_eq!(candidates, &vec![e(0), e(3), e(4)]);
                assert_eq!(aux.out_tree.len(), 3);
            }
            other => panic!("unexpected frame {other:?}"),
        }
        let step = &trace.steps()[1];
        assert!(step.edge(e(3)).unwrap().marks.contains(EdgeMarks::CANDIDATE));
        assert!(!step.edge(e(1)).unwrap().marks.contains(EdgeMarks::CANDIDATE));
    }

    #[test]
    fn test_disconnected_stops() {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_weighted_edge(a, b, 4).unwrap();
        builder.add_vertex("D");
        builder.add_weighted_edge(c, VertexId::new(3), 1).unwrap();
        let graph = builder.build();

        let (trace, tree) = run_prim(&graph, 0);
        assert_eq!(tree.edges, vec![e(0)]);
        assert!(!tree.spanning);

        let index = trace.position("disconnected").unwrap();
        match trace.steps()[index].frame() {
            Frame::Prim {
                action: PrimAction::Disconnected { remaining },
                ..
            } => assert_eq!(remaining, &vec![c, VertexId::new(3)]),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_single_vertex() {
        let mut builder = Graph::builder(false);
        builder.add_vertex("A");
        let graph = builder.build();

        let (trace, tree) = run_prim(&graph, 0);
        assert!(tree.edges.is_empty());
        assert!(tree.spanning);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_cost_saturates_on_huge_weights() {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_weighted_edge(a, b, i64::MAX).unwrap();
        builder.add_weighted_edge(b, c, i64::MAX).unwrap();
        builder.add_weighted_edge(c, a, i64::MIN).unwrap();
        let graph = builder.build();

        let (_, tree) = run_prim(&graph, 0);
        assert!(tree.spanning);
        assert_eq!(tree.edges, vec![e(2), e(0)]);
        assert_eq!(tree.cost, -1);

        let (_, tree) = run_prim(&graph.without_edge(e(2)), 1);
        assert_eq!(tree.cost, i64::MAX);
    }
}
