//! Kahn's topological sort.
//!
//! A non-DFS state machine: in-degrees are computed up front, the FIFO queue is seeded with
//! every in-degree-0 vertex in ascending id order, and each dequeued vertex is appended to the
//! order while its outgoing edges are removed. If the queue runs dry before every vertex was
//! ordered, the remaining vertices lie on or behind a cycle and the run reports failure instead
//! of a partial order.

use std::collections::VecDeque;

use crate::{
    graph::{Graph, VertexId},
    outcome::{Outcome, Run},
    trace::{
        EdgeMarks, EdgeState, Frame, KahnAction, KahnAux, Recorder, VertexMarks, VertexState,
    },
    Result,
};

struct Kahn<'g> {
    graph: &'g Graph,
    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
    queue: VecDeque<VertexId>,
    order: Vec<VertexId>,
    cycle_detected: bool,
    recorder: Recorder,
}

impl Kahn<'_> {
    fn record(&mut self, action: KahnAction, message: String) -> Result<()> {
        let frame = Frame::Kahn {
            action,
            aux: KahnAux {
                queue: self.queue.iter().copied().collect(),
                order: self.order.clone(),
                cycle_detected: self.cycle_detected,
            },
        };
        self.recorder
            .record(&self.vertices, &self.edges, frame, message)
    }

    fn enqueue(&mut self, vertex: VertexId) -> Result<()> {
        self.queue.push_back(vertex);
        let message = format!(
            "{} has in-degree 0: enqueue",
            self.graph.label(vertex)
        );
        self.record(KahnAction::Enqueue { vertex }, message)
    }
}

/// Orders a directed graph by repeatedly removing in-degree-0 vertices.
pub(crate) fn topological_kahn(graph: &Graph, recorder: Recorder) -> Result<Run> {
    let adjacency = graph.adjacency();
    let mut state = Kahn {
        graph,
        vertices: vec![VertexState::default(); graph.vertex_count()],
        edges: vec![EdgeState::default(); graph.edge_count()],
        queue: VecDeque::new(),
        order: Vec::new(),
        cycle_detected: false,
        recorder,
    };

    for (vertex, degree) in adjacency.in_degrees().into_iter().enumerate() {
        state.vertices[vertex].in_degree = Some(degree);
    }
    state.record(
        KahnAction::InDegrees,
        format!("computed in-degrees of {} vertices", graph.vertex_count()),
    )?;

    for vertex in graph.vertex_ids() {
        if state.vertices[vertex.index()].in_degree == Some(0) {
            state.enqueue(vertex)?;
        }
    }

    while let Some(vertex) = state.queue.pop_front() {
        state.order.push(vertex);
        state.vertices[vertex.index()].marks.insert(VertexMarks::ACTIVE);
        let message = format!(
            "dequeue {} and place it at position {}",
            graph.label(vertex),
            state.order.len()
        );
        state.record(KahnAction::Dequeue { vertex }, message)?;

        for neighbor in adjacency.neighbors(vertex) {
            let target = neighbor.vertex;
            let degree = state.vertices[target.index()]
                .in_degree
                .unwrap_or(0)
                .saturating_sub(1);
            state.vertices[target.index()].in_degree = Some(degree);
            state.edges[neighbor.edge.index()]
                .marks
                .insert(EdgeMarks::REJECTED);

            let message = format!(
                "remove {}: in-degree of {} drops to {}",
                graph.describe_edge(neighbor.edge),
                graph.label(target),
                degree
            );
            state.record(
                KahnAction::Decrement {
                    edge: neighbor.edge,
                    vertex: target,
                    in_degree: degree,
                },
                message,
            )?;

            if degree == 0 {
                state.enqueue(target)?;
            }
        }

        let marks = &mut state.vertices[vertex.index()].marks;
        marks.remove(VertexMarks::ACTIVE);
        marks.insert(VertexMarks::IN_TREE);
    }

    if state.order.len() < graph.vertex_count() {
        let remaining: Vec<VertexId> = graph
            .vertex_ids()
            .filter(|v| state.vertices[v.index()].in_degree != Some(0))
            .collect();
        for vertex in &remaining {
            state.vertices[vertex.index()]
                .marks
                .insert(VertexMarks::CONFLICT);
        }
        state.cycle_detected = true;

        let message = format!(
            "queue empty with {} of {} vertices ordered: the rest lie on a cycle",
            state.order.len(),
            graph.vertex_count()
        );
        state.record(KahnAction::CycleDetected { remaining }, message)?;

        return Ok(Run::new(
            state.recorder.finish(graph),
            Outcome::Topological { order: None },
        ));
    }

    state.record(
        KahnAction::Complete,
        format!("all {} vertices ordered", graph.vertex_count()),
    )?;
    let order = std::mem::take(&mut state.order);
    Ok(Run::new(
        state.recorder.finish(graph),
        Outcome::Topological { order: Some(order) },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::Algorithm, trace::Trace};

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn run_kahn(graph: &Graph) -> (Trace, Outcome) {
        topological_kahn(graph, Recorder::new(Algorithm::TopologicalKahn, None))
            .unwrap()
            .into_parts()
    }

    fn create_dag() -> Graph {
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        let d = builder.add_vertex("D");
        builder.add_edge(c, a).unwrap();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(d, b).unwrap();
        builder.build()
    }

    #[test]
    fn test_fifo_order() {
        let graph = create_dag();
        let (trace, outcome) = run_kahn(&graph);

        // Seeded with C, D (ascending id); C releases A; D and A release B
        assert_eq!(
            outcome,
            Outcome::Topological {
                order: Some(vec![v(2), v(3), v(0), v(1)])
            }
        );
        assert_eq!(trace.steps()[0].tag(), "in-degrees");
        assert_eq!(trace.steps()[0].vertex(v(1)).unwrap().in_degree, Some(2));
        assert_eq!(trace.last().unwrap().tag(), "complete");
        assert_eq!(trace.tag_counts().get("decrement"), Some(&3));
    }

    #[test]
    fn test_cycle_reports_failure() {
        // A→B→C→B, D isolated
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_vertex("D");
        builder.add_edge(a, b).unwrap();
        builder.add_edge(b, c).unwrap();
        builder.add_edge(c, b).unwrap();
        let graph = builder.build();

        let (trace, outcome) = run_kahn(&graph);
        assert_eq!(outcome, Outcome::Topological { order: None });

        let last = trace.last().unwrap();
        match last.frame() {
            Frame::Kahn {
                action: KahnAction::CycleDetected { remaining },
                aux,
            } => {
                assert_eq!(remaining, &vec![b, c]);
                assert!(aux.cycle_detected);
                assert_eq!(aux.order, vec![a, v(3)]);
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_queue_snapshot() {
        let graph = create_dag();
        let (trace, _) = run_kahn(&graph);

        let first_dequeue = trace.position("dequeue").unwrap();
        match trace.steps()[first_dequeue].frame() {
            Frame::Kahn { aux, .. } => {
                assert_eq!(aux.queue, vec![v(3)]);
                assert_eq!(aux.order, vec![v(2)]);
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }
}
