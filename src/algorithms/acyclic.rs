//! Acyclicity test and DFS topological order.
//!
//! Both consume the DFS core without low-links. The first back edge closes a cycle: a
//! `cycle-detected` step is recorded and the traversal halts immediately. The topological variant
//! additionally prepends every vertex to the order when it finishes, so a full run yields
//! vertices by decreasing finish time.

use crate::{
    algorithms::dfs::{traverse, DfsContext, DfsHooks, Flow},
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run},
    trace::{DfsAction, DfsDetail, EdgeClass, EdgeMarks, Recorder, VertexMarks},
    Result,
};

/// Flags the closing edge and its endpoints, then records the terminal step.
fn report_cycle(
    ctx: &mut DfsContext<'_>,
    detail: DfsDetail,
    edge: EdgeId,
    from: VertexId,
    to: VertexId,
) -> Result<Flow> {
    ctx.edge_mut(edge).marks.insert(EdgeMarks::CYCLE);
    ctx.vertex_mut(from).marks.insert(VertexMarks::CONFLICT);
    ctx.vertex_mut(to).marks.insert(VertexMarks::CONFLICT);

    let message = format!(
        "back edge {} closes a cycle: {} is still on the DFS path",
        ctx.describe(edge),
        ctx.label(to)
    );
    ctx.record(DfsAction::CycleDetected { edge }, detail, message)?;
    Ok(Flow::Break(()))
}

#[derive(Default)]
struct CycleHooks {
    cycle_edge: Option<EdgeId>,
}

impl DfsHooks for CycleHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Cycle {
            cycle_edge: self.cycle_edge,
        }
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        class: EdgeClass,
    ) -> Result<Flow> {
        if class != EdgeClass::Back {
            return Ok(Flow::Continue(()));
        }
        self.cycle_edge = Some(edge);
        report_cycle(ctx, self.detail(), edge, from, to)
    }
}

/// Tests a graph for cycles, stopping at the first back edge.
pub(crate) fn detect_cycle(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = CycleHooks::default();
    traverse(&mut ctx, &mut hooks, start)?;
    Ok(ctx.finish(Outcome::Cycle {
        edge: hooks.cycle_edge,
    }))
}

#[derive(Default)]
struct TopologicalHooks {
    order: Vec<VertexId>,
    cycle_edge: Option<EdgeId>,
}

impl DfsHooks for TopologicalHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Topological {
            order: self.order.clone(),
            cycle_edge: self.cycle_edge,
        }
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        class: EdgeClass,
    ) -> Result<Flow> {
        if class != EdgeClass::Back {
            return Ok(Flow::Continue(()));
        }
        self.cycle_edge = Some(edge);
        report_cycle(ctx, self.detail(), edge, from, to)
    }

    fn on_finish(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId) -> Result<Flow> {
        self.order.insert(0, vertex);
        let message = format!(
            "prepend {} to the order ({} placed)",
            ctx.label(vertex),
            self.order.len()
        );
        ctx.record(DfsAction::Prepend { vertex }, self.detail(), message)?;
        Ok(Flow::Continue(()))
    }
}

/// Orders a directed acyclic graph by decreasing DFS finish time.
///
/// The outcome carries no order if a cycle is found.
pub(crate) fn topological_dfs(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = TopologicalHooks::default();
    let flow = traverse(&mut ctx, &mut hooks, start)?;

    let order = (flow.is_continue() && hooks.cycle_edge.is_none()).then_some(hooks.order);
    Ok(ctx.finish(Outcome::Topological { order }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Algorithm;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    /// Shirts before tie, tie before jacket, trousers before shoes and jacket.
    fn create_dag() -> Graph {
        let mut builder = Graph::builder(true);
        let shirt = builder.add_vertex("shirt");
        let tie = builder.add_vertex("tie");
        let jacket = builder.add_vertex("jacket");
        let trousers = builder.add_vertex("trousers");
        let shoes = builder.add_vertex("shoes");
        builder.add_edge(shirt, tie).unwrap();
        builder.add_edge(tie, jacket).unwrap();
        builder.add_edge(trousers, shoes).unwrap();
        builder.add_edge(trousers, jacket).unwrap();
        builder.build()
    }

    fn create_cyclic() -> Graph {
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        let d = builder.add_vertex("D");
        builder.add_edge(a, b).unwrap();
        builder.add_edge(b, c).unwrap();
        builder.add_edge(c, a).unwrap();
        builder.add_edge(c, d).unwrap();
        builder.build()
    }

    #[test]
    fn test_topological_order_valid() {
        let graph = create_dag();
        let run = topological_dfs(&graph, v(0), Recorder::new(Algorithm::TopologicalDfs, None))
            .unwrap();
        let order = run.outcome().topological_order().unwrap();

        assert_eq!(order, &[v(3), v(4), v(0), v(1), v(2)]);
        for edge in graph.edges() {
            let from = order.iter().position(|x| *x == edge.from).unwrap();
            let to = order.iter().position(|x| *x == edge.to).unwrap();
            assert!(from < to);
        }
        assert_eq!(run.trace().tag_counts().get("prepend"), Some(&5));
        assert_eq!(run.trace().last().unwrap().tag(), "complete");
    }

    #[test]
    fn test_topological_cycle_yields_no_order() {
        let graph = create_cyclic();
        let run = topological_dfs(&graph, v(0), Recorder::new(Algorithm::TopologicalDfs, None))
            .unwrap();

        assert_eq!(run.outcome(), &Outcome::Topological { order: None });
        let last = run.trace().last().unwrap();
        assert_eq!(last.tag(), "cycle-detected");
        match last.frame() {
            crate::trace::Frame::Dfs { aux, .. } => assert!(aux.detail.cycle_detected()),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_cycle_halts_immediately() {
        let graph = create_cyclic();
        let run =
            detect_cycle(&graph, v(0), Recorder::new(Algorithm::CycleDetection, None)).unwrap();

        assert_eq!(
            run.outcome(),
            &Outcome::Cycle {
                edge: Some(EdgeId::new(2))
            }
        );
        let trace = run.trace();
        assert_eq!(trace.last().unwrap().tag(), "cycle-detected");
        assert!(trace.position("complete").is_none());

        // D is never reached: the cycle is found while C is still being explored
        let last = trace.last().unwrap();
        assert_eq!(last.vertex(v(3)).unwrap().discovery, 0);
        assert!(last.edge(EdgeId::new(2)).unwrap().marks.contains(EdgeMarks::CYCLE));
    }

    #[test]
    fn test_acyclic_runs_to_completion() {
        let graph = create_dag();
        let run =
            detect_cycle(&graph, v(0), Recorder::new(Algorithm::CycleDetection, None)).unwrap();
        assert_eq!(run.outcome(), &Outcome::Cycle { edge: None });
        assert_eq!(run.trace().last().unwrap().tag(), "complete");
    }

    #[test]
    fn test_undirected_cycle() {
        let mut builder = Graph::builder(false);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_edge(a, b).unwrap();
        builder.add_edge(b, c).unwrap();
        let path = builder.clone().build();
        builder.add_edge(c, a).unwrap();
        let triangle = builder.build();

        let recorder = || Recorder::new(Algorithm::CycleDetection, None);
        let run = detect_cycle(&path, v(0), recorder()).unwrap();
        assert_eq!(run.outcome(), &Outcome::Cycle { edge: None });

        let run = detect_cycle(&triangle, v(0), recorder()).unwrap();
        assert_eq!(
            run.outcome(),
            &Outcome::Cycle {
                edge: Some(EdgeId::new(2))
            }
        );
    }
}
