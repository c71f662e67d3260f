//! Instrumented algorithm executors.
//!
//! Each executor runs eagerly to exhaustion against an immutable [`Graph`](crate::Graph),
//! recording one step per micro-operation into the [`Recorder`](crate::trace::Recorder) it is
//! handed, and returns the sealed trace together with the final [`Outcome`](crate::Outcome).
//!
//! # Families
//!
//! - **DFS core** ([`dfs`]) - discovery/finish times and edge classification, specialized by
//!   - [`lowlink`] - bridges and articulation points
//!   - [`scc`] - Tarjan's strongly connected components
//!   - [`acyclic`] - cycle detection and DFS topological order
//!   - [`bipartite`] - 2-coloring
//! - **Kahn** ([`kahn`]) - in-degree queue topological order
//! - **Priority relaxation** ([`dijkstra`]) - single-source shortest paths
//! - **MST growth** ([`kruskal`], [`prim`])
//!
//! Preconditions (directedness, weights, start vertex) are checked by [`crate::run`] before
//! any executor is invoked.

mod acyclic;
mod bipartite;
mod dfs;
mod dijkstra;
mod kahn;
mod kruskal;
mod lowlink;
mod prim;
mod scc;

pub(crate) use acyclic::{detect_cycle, topological_dfs};
pub(crate) use bipartite::bipartite;
pub(crate) use dfs::classify;
pub(crate) use dijkstra::dijkstra;
pub(crate) use kahn::topological_kahn;
pub(crate) use kruskal::kruskal;
pub(crate) use lowlink::{articulation_points, bridges};
pub(crate) use prim::prim;
pub(crate) use scc::strongly_connected;
