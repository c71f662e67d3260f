//! Bipartite test by DFS 2-coloring.
//!
//! Every DFS root gets [`Side::A`]; a tree edge gives the child the opposite color of its parent.
//! A non-tree edge between two vertices of the same color proves an odd cycle: a `conflict` step
//! is recorded and the traversal halts.

use crate::{
    algorithms::dfs::{traverse, DfsContext, DfsHooks, Flow},
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run},
    trace::{DfsAction, DfsDetail, EdgeClass, EdgeMarks, Recorder, Side, VertexMarks},
    Result,
};

#[derive(Default)]
struct ColoringHooks {
    conflict: Option<EdgeId>,
}

impl DfsHooks for ColoringHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Bipartite {
            conflict: self.conflict,
        }
    }

    fn on_root(&mut self, ctx: &mut DfsContext<'_>, root: VertexId) {
        ctx.vertex_mut(root).color = Some(Side::A);
    }

    fn on_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        _edge: EdgeId,
        from: VertexId,
        to: VertexId,
    ) -> Result<Flow> {
        let color = ctx.vertex(from).color.map(Side::opposite);
        ctx.vertex_mut(to).color = color;
        Ok(Flow::Continue(()))
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        _class: EdgeClass,
    ) -> Result<Flow> {
        if ctx.vertex(from).color != ctx.vertex(to).color {
            return Ok(Flow::Continue(()));
        }

        self.conflict = Some(edge);
        ctx.edge_mut(edge).marks.insert(EdgeMarks::CONFLICT);
        ctx.vertex_mut(from).marks.insert(VertexMarks::CONFLICT);
        ctx.vertex_mut(to).marks.insert(VertexMarks::CONFLICT);

        let message = format!(
            "{} joins two vertices of the same color: the graph is not bipartite",
            ctx.describe(edge)
        );
        ctx.record(DfsAction::Conflict { edge }, self.detail(), message)?;
        Ok(Flow::Break(()))
    }
}

/// Attempts to 2-color an undirected graph.
pub(crate) fn bipartite(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = ColoringHooks::default();
    traverse(&mut ctx, &mut hooks, start)?;

    let sides = match hooks.conflict {
        Some(_) => None,
        None => ctx.vertices.iter().map(|state| state.color).collect(),
    };
    Ok(ctx.finish(Outcome::Bipartite {
        sides,
        conflict: hooks.conflict,
    }))
}
