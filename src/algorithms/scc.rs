//! Strongly connected components using Tarjan's algorithm.
//!
//! Runs on the DFS core over a directed graph. Every discovered vertex is pushed onto an
//! auxiliary stack and flagged `IN_STACK`. Any edge to a vertex still on that stack lowers the
//! low-link to the target's *discovery time* (not its low-link). Child low-links propagate on
//! return. When a vertex finishes with `low == disc` it roots a component: the stack is popped
//! down to and including it, the popped vertices share a fresh component id, and the trace gets
//! an `scc-root` step followed by `scc-found`.
//!
//! Components therefore come out in reverse topological order of the condensation.

use crate::{
    algorithms::dfs::{traverse, DfsContext, DfsHooks, Flow},
    graph::{EdgeId, Graph, VertexId},
    outcome::{Outcome, Run},
    trace::{DfsAction, DfsDetail, EdgeClass, Recorder, VertexMarks},
    Result,
};

#[derive(Default)]
struct TarjanHooks {
    stack: Vec<VertexId>,
    components: Vec<Vec<VertexId>>,
}

impl TarjanHooks {
    fn lower_link(
        &self,
        ctx: &mut DfsContext<'_>,
        vertex: VertexId,
        candidate: u32,
        reason: String,
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
            self.detail(),
            message,
        )
    }
}

impl DfsHooks for TarjanHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Scc {
            stack: self.stack.clone(),
            components: self.components.clone(),
        }
    }

    fn on_discover(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId) {
        let state = ctx.vertex_mut(vertex);
        state.low_link = Some(state.discovery);
        state.marks.insert(VertexMarks::IN_STACK);
        self.stack.push(vertex);
    }

    fn on_non_tree_edge(
        &mut self,
        ctx: &mut DfsContext<'_>,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        _class: EdgeClass,
    ) -> Result<Flow> {
        if ctx.vertex(to).marks.contains(VertexMarks::IN_STACK) {
            let discovery = ctx.vertex(to).discovery;
            let reason = format!("on-stack edge {}", ctx.describe(edge));
            self.lower_link(ctx, from, discovery, reason)?;
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
        let child_low = ctx.vertex(child).low_link.unwrap_or(u32::MAX);
        let reason = format!("child {}", ctx.label(child));
        self.lower_link(ctx, parent, child_low, reason)?;
        Ok(Flow::Continue(()))
    }

    fn on_finish(&mut self, ctx: &mut DfsContext<'_>, vertex: VertexId) -> Result<Flow> {
        let state = ctx.vertex(vertex);
        if state.low_link != Some(state.discovery) {
            return Ok(Flow::Continue(()));
        }

        let message = format!(
            "{} roots a component: low = disc = {}",
            ctx.label(vertex),
            state.discovery
        );
        ctx.record(DfsAction::SccRoot { vertex }, self.detail(), message)?;

        let component = self.components.len();
        let mut members = Vec::new();
        while let Some(member) = self.stack.pop() {
            let state = ctx.vertex_mut(member);
            state.component = Some(component);
            state.marks.remove(VertexMarks::IN_STACK);
            members.push(member);
            if member == vertex {
                break;
            }
        }
        self.components.push(members.clone());

        let labels: Vec<&str> = members.iter().map(|m| ctx.label(*m)).collect();
        let message = format!("component {} = {{{}}}", component, labels.join(", "));
        ctx.record(
            DfsAction::SccFound { component, members },
            self.detail(),
            message,
        )?;
        Ok(Flow::Continue(()))
    }
}

/// Computes the strongly connected components of a directed graph.
pub(crate) fn strongly_connected(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    let mut hooks = TarjanHooks::default();
    traverse(&mut ctx, &mut hooks, start)?;
    Ok(ctx.finish(Outcome::Components {
        components: hooks.components,
    }))
}
