//! Bridges and articulation points via Tarjan low-links.
//!
//! Both searches run the DFS core on an undirected graph and maintain
//! `low[v] = min(disc[v], disc[w] for back edges v–w, low[c] for tree children c)`.
//! Once a tree child `u` of `v` finishes:
//!
//! - the edge `v–u` is a bridge iff `low[u] > disc[v]`
//! - `v` is an articulation point iff it is not a DFS root and `low[u] >= disc[v]`
//!
//! A DFS root is an articulation point iff it has at least two tree children.
//! Every drop of a low-link is recorded as a `low-link-updated` step.

use crate::{
    algorithms::dfs::{traverse, DfsContext, DfsHooks, Flow},
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run},
    trace::{DfsAction, DfsDetail, EdgeClass, EdgeMarks, Recorder, VertexMarks},
    Result,
};

/// Lowers `vertex`'s low-link to `candidate` and records it, if that is a drop.
fn lower_link(
    ctx: &mut DfsContext<'_>,
    detail: DfsDetail,
    vertex: VertexId,
    candidate: u32,
    reason: &str,
) -> Result<()> {
    let current = ctx.vertex(vertex).low_link.unwrap_or(u32::MAX);
    if candidate >= current {
        return Ok(());
    }

    ctx.vertex_mut(vertex).low_link = Some(candidate);
    let message = format!(
        "low({}) drops from {} to {} via {}",
        ctx.label(vertex),
        current,
        candidate,
        reason
    );
    ctx.record(
        DfsAction::LowLinkUpdated {
            vertex,
            low: candidate,
        },
        detail,
        message,
    )
}

fn init_low_link(ctx: &mut DfsContext<'_>, vertex: VertexId) {
    let state = ctx.vertex_mut(vertex);
    state.low_link = Some(state.discovery);
}

fn low_of(ctx: &DfsContext<'_>, vertex: VertexId) -> u32 {
    ctx.vertex(vertex).low_link.unwrap_or(u32::MAX)
}

#[derive(Default)]
struct BridgeHooks {
    bridges: Vec<EdgeId>,
}

impl DfsHooks for BridgeHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Bridges {
            bridges: self.bridges.clone(),
        }
    }

    fn on_discover(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId) {
        init_low_link(ctx, vertex);
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        class: EdgeClass,
    ) -> Result<Flow> {
        if class == EdgeClass::Back {
            let reason = format!("back edge {}", ctx.describe(edge));
            let discovery = ctx.vertex(to).discovery;
            lower_link(ctx, self.detail(), from, discovery, &reason)?;
        }
        Ok(Flow::Continue(()))
    }

    fn on_child_finished(
        &mut self,
        ctx: &mut DfsContext<'_>,
        parent: VertexId,
        child: VertexId,
        edge: EdgeId,
    ) -> Result<Flow> {
        let reason = format!("child {}", ctx.label(child));
        let child_low = low_of(ctx, child);
        lower_link(ctx, self.detail(), parent, child_low, &reason)?;

        if low_of(ctx, child) > ctx.vertex(parent).discovery {
            self.bridges.push(edge);
            ctx.edge_mut(edge).marks.insert(EdgeMarks::BRIDGE);
            let message = format!(
                "{} is a bridge: low({}) = {} > disc({}) = {}",
                ctx.describe(edge),
                ctx.label(child),
                low_of(ctx, child),
                ctx.label(parent),
                ctx.vertex(parent).discovery
            );
            ctx.record(DfsAction::BridgeFound { edge }, self.detail(), message)?;
        }
        Ok(Flow::Continue(()))
    }
}

/// Finds every bridge of an undirected graph.
pub(crate) fn bridges(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = BridgeHooks::default();
    traverse(&mut ctx, &mut hooks, start)?;
    Ok(ctx.finish(Outcome::Bridges {
        edges: hooks.bridges,
    }))
}

#[derive(Default)]
struct ArticulationHooks {
    root: Option<VertexId>,
    points: Vec<VertexId>,
}

impl ArticulationHooks {
    fn mark(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId, reason: String) -> Result<()> {
        let marks = &mut ctx.vertex_mut(vertex).marks;
        if marks.contains(VertexMarks::ARTICULATION) {
            return Ok(());
        }
        marks.insert(VertexMarks::ARTICULATION);
        self.points.push(vertex);

        let message = format!("{} is an articulation point: {}", ctx.label(vertex), reason);
        ctx.record(
            DfsAction::ArticulationFound { vertex },
            self.detail(),
            message,
        )
    }
}

impl DfsHooks for ArticulationHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Articulation {
            points: self.points.clone(),
        }
    }

    fn on_root(&mut self, _ctx: &mut DfsContext<'_>, root: VertexId) {
        self.root = Some(root);
    }

    fn on_discover(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId) {
        init_low_link(ctx, vertex);
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        class: EdgeClass,
    ) -> Result<Flow> {
        if class == EdgeClass::Back {
            let reason = format!("back edge {}", ctx.describe(edge));
            let discovery = ctx.vertex(to).discovery;
            lower_link(ctx, self.detail(), from, discovery, &reason)?;
        }
        Ok(Flow::Continue(()))
    }

    fn on_child_finished(
        &mut self,
        ctx: &mut DfsContext<'_>,
        parent: VertexId,
        child: VertexId,
        _edge: EdgeId,
    ) -> Result<Flow> {
        let reason = format!("child {}", ctx.label(child));
        let child_low = low_of(ctx, child);
        lower_link(ctx, self.detail(), parent, child_low, &reason)?;

        let discovery = ctx.vertex(parent).discovery;
        if Some(parent) != self.root && low_of(ctx, child) >= discovery {
            let reason = format!(
                "low({}) = {} >= disc({}) = {}",
                ctx.label(child),
                low_of(ctx, child),
                ctx.label(parent),
                discovery
            );
            self.mark(ctx, parent, reason)?;
        }
        Ok(Flow::Continue(()))
    }

    fn on_root_finished(
        &mut self,
        ctx: &mut DfsContext<'_>,
        root: VertexId,
        tree_children: usize,
    ) -> Result<Flow> {
        if tree_children > 1 {
            let reason = format!("DFS root with {tree_children} tree children");
            self.mark(ctx, root, reason)?;
        }
        Ok(Flow::Continue(()))
    }
}

/// Finds every articulation point of an undirected graph.
pub(crate) fn articulation_points(
    graph: &Graph,
    start: VertexId,
    recorder: Recorder,
) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = ArticulationHooks::default();
    traverse(&mut ctx, &mut hooks, start)?;
    Ok(ctx.finish(Outcome::ArticulationPoints {
        vertices: hooks.points,
    }))
}
