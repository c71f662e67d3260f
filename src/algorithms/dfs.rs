//! The DFS classification core.
//!
//! One iterative traversal skeleton drives every depth-first algorithm in the crate. It assigns
//! discovery and finish times, classifies each edge as tree, back, forward or cross, and records
//! a step for every micro-operation. Specializations (low-link searches, acyclicity, topological
//! order, 2-coloring) plug in through [`DfsHooks`] without touching the traversal order.
//!
//! # Step order
//!
//! For every DFS tree:
//!
//! 1. `new-root`, then `discover` for the root
//! 2. per neighbor in adjacency order: `evaluate-edge`, then `classify`
//! 3. a tree edge descends into the neighbor (`discover`) before the next neighbor is looked at
//! 4. once a vertex runs out of neighbors: `finish`
//!
//! Roots are taken from the start vertex first, then from every still unvisited vertex by
//! ascending id. The traversal keeps an explicit stack of visits, so deep graphs cannot overflow
//! the native stack, while producing exactly the sequence a recursive DFS would.
//!
//! In undirected graphs each edge is listed under both endpoints. An edge that is already
//! classified when it is met again from the other side is skipped silently, so every edge gets
//! exactly one class and undirected traversals only produce tree and back edges.

use std::ops::ControlFlow;

use crate::{
    graph::{Adjacency, EdgeId, Graph, VertexId},
    outcome::{Classification, Outcome, Run},
    trace::{
        DfsAction, DfsAux, DfsDetail, EdgeClass, EdgeMarks, EdgeState, Frame, Recorder,
        VertexMarks, VertexState, VisitStatus,
    },
    Result,
};

/// `Break` stops the traversal after the hook recorded its terminal step.
pub(crate) type Flow = ControlFlow<()>;

/// Returns early with `Ok(Flow::Break(()))` when a hook asks to halt.
macro_rules! halt_on_break {
    ($flow:expr) => {
        if $flow?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    };
}

/// Live state of one DFS run.
///
/// Owns the counters, the per-vertex and per-edge state, and the recorder, so runs never share
/// anything.
pub(crate) struct DfsContext<'g> {
    pub graph: &'g Graph,
    pub adjacency: Adjacency,
    pub vertices: Vec<VertexState>,
    pub edges: Vec<EdgeState>,
    pub call_stack: Vec<VertexId>,
    pub roots: Vec<VertexId>,
    exploration: u32,
    completion: u32,
    focus: Option<VertexId>,
    recorder: Recorder,
}

impl<'g> DfsContext<'g> {
    pub fn new(graph: &'g Graph, recorder: Recorder) -> Self {
        Self {
            graph,
            adjacency: graph.adjacency(),
            vertices: vec![VertexState::default(); graph.vertex_count()],
            edges: vec![EdgeState::default(); graph.edge_count()],
            call_stack: Vec::new(),
            roots: Vec::new(),
            exploration: 0,
            completion: 0,
            focus: None,
            recorder,
        }
    }

    /// Records a DFS step with the current call stack and the given detail.
    pub fn record(
        &mut self,
        action: DfsAction,
        detail: DfsDetail,
        message: impl Into<String>,
    ) -> Result<()> {
        let frame = Frame::Dfs {
            action,
            aux: DfsAux {
                call_stack: self.call_stack.clone(),
                detail,
            },
        };
        self.recorder
            .record(&self.vertices, &self.edges, frame, message)
    }

    pub fn vertex(&self, vertex: VertexId) -> &VertexState {
        &self.vertices[vertex.index()]
    }

    pub fn vertex_mut(&mut self, vertex: VertexId) -> &mut VertexState {
        &mut self.vertices[vertex.index()]
    }

    pub fn edge_mut(&mut self, edge: EdgeId) -> &mut EdgeState {
        &mut self.edges[edge.index()]
    }

    pub fn label(&self, vertex: VertexId) -> &'g str {
        self.graph.label(vertex)
    }

    pub fn describe(&self, edge: EdgeId) -> String {
        self.graph.describe_edge(edge)
    }

    /// Moves the `ACTIVE` highlight to `vertex`.
    fn focus_on(&mut self, vertex: VertexId) {
        if let Some(previous) = self.focus.replace(vertex) {
            self.vertices[previous.index()]
                .marks
                .remove(VertexMarks::ACTIVE);
        }
        self.vertices[vertex.index()].marks.insert(VertexMarks::ACTIVE);
    }

    fn unfocus(&mut self) {
        if let Some(previous) = self.focus.take() {
            self.vertices[previous.index()]
                .marks
                .remove(VertexMarks::ACTIVE);
        }
    }

    /// Seals the run into a trace.
    pub fn finish(self, outcome: Outcome) -> Run {
        Run::new(self.recorder.finish(self.graph), outcome)
    }
}

/// Extension points of the DFS skeleton.
///
/// Silent hooks (`on_root`, `on_discover`) run before the corresponding core step is recorded,
/// so their state changes show up in that step. The others run after the core step and may
/// record their own steps; returning `Break` halts the whole traversal.
pub(crate) trait DfsHooks {
    /// Snapshot of the specialization's auxiliary state for the next step.
    fn detail(&self) -> DfsDetail;

    fn on_root(&mut self, _ctx: &mut DfsContext<'_>, _root: VertexId) {}

    fn on_discover(&mut self, _ctx: &mut DfsContext<'_>, _vertex: VertexId) {}

    fn on_tree_edge(
        &mut self,
        _ctx: &mut DfsContext<'_>,
        _edge: EdgeId,
        _from: VertexId,
        _to: VertexId,
    ) -> Result<Flow> {
        Ok(Flow::Continue(()))
    }

    fn on_non_tree_edge(
        &mut self,
        _ctx: &mut DfsContext<'_>,
        _edge: EdgeId,
        _from: VertexId,
        _to: VertexId,
        _class: EdgeClass,
    ) -> Result<Flow> {
        Ok(Flow::Continue(()))
    }

    fn on_finish(&mut self, _ctx: &mut DfsContext<'_>, _vertex: VertexId) -> Result<Flow> {
        Ok(Flow::Continue(()))
    }

    /// Called on the parent right after a tree child finished.
    fn on_child_finished(
        &mut self,
        _ctx: &mut DfsContext<'_>,
        _parent: VertexId,
        _child: VertexId,
        _edge: EdgeId,
    ) -> Result<Flow> {
        Ok(Flow::Continue(()))
    }

    /// Called once a whole DFS tree is done.
    fn on_root_finished(
        &mut self,
        _ctx: &mut DfsContext<'_>,
        _root: VertexId,
        _tree_children: usize,
    ) -> Result<Flow> {
        Ok(Flow::Continue(()))
    }
}

/// One pending frame of the explicit DFS stack.
struct Visit {
    vertex: VertexId,
    parent_edge: Option<EdgeId>,
    next: usize,
    tree_children: usize,
}

impl Visit {
    fn new(vertex: VertexId, parent_edge: Option<EdgeId>) -> Self {
        Self {
            vertex,
            parent_edge,
            next: 0,
            tree_children: 0,
        }
    }
}

/// Runs the full traversal: `start` first, then every unvisited vertex by ascending id.
///
/// Records a final `complete` step unless a hook halted the run.
pub(crate) fn traverse<H: DfsHooks>(
    ctx: &mut DfsContext<'_>,
    hooks: &mut H,
    start: VertexId,
) -> Result<Flow> {
    let order = std::iter::once(start).chain(ctx.graph.vertex_ids().filter(|v| *v != start));

    for root in order.collect::<Vec<_>>() {
        if ctx.vertex(root).status != VisitStatus::Unvisited {
            continue;
        }
        halt_on_break!(visit_tree(ctx, hooks, root));
    }

    ctx.unfocus();
    let message = format!(
        "traversal complete: {} tree(s), {} vertices finished",
        ctx.roots.len(),
        ctx.completion
    );
    ctx.record(DfsAction::Complete, hooks.detail(), message)?;
    Ok(Flow::Continue(()))
}

fn visit_tree<H: DfsHooks>(
    ctx: &mut DfsContext<'_>,
    hooks: &mut H,
    root: VertexId,
) -> Result<Flow> {
    ctx.roots.push(root);
    hooks.on_root(ctx, root);
    let message = format!("start a new DFS tree at {}", ctx.label(root));
    ctx.record(DfsAction::NewRoot { vertex: root }, hooks.detail(), message)?;

    discover(ctx, hooks, root)?;
    let mut visits = vec![Visit::new(root, None)];

    while let Some(top) = visits.last_mut() {
        let vertex = top.vertex;
        let Some(neighbor) = ctx.adjacency.neighbors(vertex).get(top.next).copied() else {
            let Some(done) = visits.pop() else {
                break;
            };
            halt_on_break!(finish(ctx, hooks, vertex));

            match (visits.last(), done.parent_edge) {
                (Some(parent), Some(edge)) => {
                    let parent = parent.vertex;
                    ctx.focus_on(parent);
                    halt_on_break!(hooks.on_child_finished(ctx, parent, vertex, edge));
                }
                _ => halt_on_break!(hooks.on_root_finished(ctx, vertex, done.tree_children)),
            }
            continue;
        };
        top.next += 1;

        let (edge, target) = (neighbor.edge, neighbor.vertex);
        if !ctx.adjacency.is_directed() && ctx.edges[edge.index()].class != EdgeClass::Unclassified
        {
            continue;
        }

        ctx.edge_mut(edge).marks.insert(EdgeMarks::ACTIVE);
        let message = format!(
            "evaluate edge {} from {}",
            ctx.describe(edge),
            ctx.label(vertex)
        );
        ctx.record(
            DfsAction::EvaluateEdge {
                edge,
                from: vertex,
                to: target,
            },
            hooks.detail(),
            message,
        )?;

        let class = class_of(ctx, vertex, target);
        let state = ctx.edge_mut(edge);
        state.class = class;
        state.marks.remove(EdgeMarks::ACTIVE);
        let class_name: &'static str = class.into();
        let message = format!("{} is a {} edge", ctx.describe(edge), class_name);
        ctx.record(DfsAction::Classify { edge, class }, hooks.detail(), message)?;

        if class == EdgeClass::Tree {
            top.tree_children += 1;
            halt_on_break!(hooks.on_tree_edge(ctx, edge, vertex, target));
            discover(ctx, hooks, target)?;
            visits.push(Visit::new(target, Some(edge)));
        } else {
            halt_on_break!(hooks.on_non_tree_edge(ctx, edge, vertex, target, class));
        }
    }

    Ok(Flow::Continue(()))
}

fn class_of(ctx: &DfsContext<'_>, from: VertexId, to: VertexId) -> EdgeClass {
    let target = ctx.vertex(to);
    if target.status == VisitStatus::Unvisited {
        EdgeClass::Tree
    } else if target.finish == 0 {
        EdgeClass::Back
    } else if target.discovery > ctx.vertex(from).discovery {
        EdgeClass::Forward
    } else {
        EdgeClass::Cross
    }
}

fn discover<H: DfsHooks>(ctx: &mut DfsContext<'_>, hooks: &mut H, vertex: VertexId) -> Result<()> {
    ctx.exploration += 1;
    let discovery = ctx.exploration;
    let state = ctx.vertex_mut(vertex);
    state.status = VisitStatus::Exploring;
    state.discovery = discovery;
    ctx.call_stack.push(vertex);
    ctx.focus_on(vertex);
    hooks.on_discover(ctx, vertex);

    let message = format!("discover {} at time {}", ctx.label(vertex), discovery);
    ctx.record(DfsAction::Discover { vertex }, hooks.detail(), message)
}

fn finish<H: DfsHooks>(ctx: &mut DfsContext<'_>, hooks: &mut H, vertex: VertexId) -> Result<Flow> {
    ctx.completion += 1;
    let completion = ctx.completion;
    let state = ctx.vertex_mut(vertex);
    state.status = VisitStatus::Finished;
    state.finish = completion;
    ctx.call_stack.pop();

    let message = format!("finish {} at time {}", ctx.label(vertex), completion);
    ctx.record(DfsAction::Finish { vertex }, hooks.detail(), message)?;
    hooks.on_finish(ctx, vertex)
}

/// Plain classification: the core with no extra bookkeeping.
struct ClassifyHooks;

impl DfsHooks for ClassifyHooks {
    fn detail(&self) -> DfsDetail {
        DfsDetail::Classification
    }
}

/// Classifies every edge of `graph` by depth-first search from `start`.
pub(crate) fn classify(graph: &Graph, start: VertexId, recorder: Recorder) -> Result<Run> {
    let mut ctx = DfsContext::new(graph, recorder);
    traverse(&mut ctx, &mut ClassifyHooks, start)?;

    let outcome = Outcome::Classification(Classification {
        classes: ctx.edges.iter().map(|e| e.class).collect(),
        roots: ctx.roots.clone(),
        discovery: ctx.vertices.iter().map(|v| v.discovery).collect(),
        finish: ctx.vertices.iter().map(|v| v.finish).collect(),
    });
    Ok(ctx.finish(outcome))
}
