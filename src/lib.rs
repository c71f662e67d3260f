// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # algostep
//!
//! An instrumented graph-algorithm engine. Every run executes eagerly to completion and
//! records each micro-operation (discovering a vertex, classifying an edge, relaxing a
//! distance, accepting a spanning-tree edge) as an immutable step holding a full snapshot of the
//! vertex and edge state. The finished [`Trace`] can then be replayed forwards, backwards or by
//! random access without running the algorithm again.
//!
//! ## Features
//!
//! - **Depth-first family** - edge classification, cycle detection, topological order,
//!   bipartiteness, bridges, articulation points and strongly connected components, all built
//!   on one traversal core
//! - **Kahn's algorithm** - in-degree queue topological order with cycle reporting
//! - **Dijkstra** - single-source shortest paths over an indexed min-heap
//! - **Kruskal and Prim** - minimum spanning trees with union-find and cut selection
//! - **Deterministic** - neighbor order, heap ties and sort ties are fixed, so identical inputs
//!   always produce identical traces
//!
//! ## Quick Start
//!
//! ```rust
//! use algostep::prelude::*;
//!
//! let graph = presets::bridges_example();
//! let run = run(&graph, &RunConfig::new(Algorithm::Bridges))?;
//!
//! match run.outcome() {
//!     Outcome::Bridges { edges } => assert_eq!(edges.len(), 2),
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//!
//! let navigator = run.trace().navigator();
//! let first = navigator.first()?;
//! assert_eq!(first.index(), 0);
//! # Ok::<(), algostep::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Graph`] model, builder and deterministic [`Adjacency`]
//! - [`engine`] - [`Algorithm`] selection, precondition checks and the [`run`] entry point
//! - [`trace`] - Per-vertex and per-edge state, [`Step`] frames, [`Trace`] and its [`Navigator`]
//! - [`outcome`] - Typed final results of each algorithm
//! - [`presets`] - Canonical sample graphs
//! - [`utils`] - [`UnionFind`](utils::UnionFind) and [`Frontier`](utils::Frontier)
//!
//! ## Errors
//!
//! Only conditions that stop a run from starting (bad graph, bad start vertex, wrong
//! directedness, missing or negative weights) or from being addressed (an out-of-range step
//! index, an exhausted step budget) are [`Error`]s. Detected cycles, bipartite conflicts,
//! unreachable vertices and disconnected spanning trees are regular outcomes recorded in the
//! trace.

mod algorithms;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use algostep::prelude::*;
///
/// let graph = presets::dag_example();
/// let run = run(&graph, &RunConfig::new(Algorithm::TopologicalKahn))?;
/// assert!(run.outcome().topological_order().is_some());
/// # Ok::<(), algostep::Error>(())
/// ```
pub mod prelude;

/// Run configuration: algorithm choice, start vertex, step budget and weight policy.
pub mod config;

/// Algorithm selection and the [`run`] entry point.
pub mod engine;

/// The graph model: identifiers, vertices, edges, builder, adjacency and traversal traits.
pub mod graph;

/// Typed final results of each algorithm.
pub mod outcome;

/// Canonical sample graphs for demonstrations and tests.
pub mod presets;

/// Step recording, per-element state and trace playback.
pub mod trace;

/// Data structures shared by the algorithms.
pub mod utils;

/// `algostep` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `algostep` Error type
///
/// Returned only when a run cannot start or a step cannot be addressed.
pub use error::Error;

pub use config::{RunConfig, WeightPolicy};
pub use engine::{run, Algorithm};
pub use graph::{
    reachable, Adjacency, Edge, EdgeId, EdgeSpec, Graph, GraphBase, GraphBuilder, Neighbor,
    Successors, Vertex, VertexId, VertexSpec,
};
pub use outcome::{Classification, Outcome, Run, ShortestPaths, SpanningTree};
pub use trace::{
    Cursor, Distance, EdgeClass, EdgeMarks, EdgeState, Frame, Navigator, Side, Step, Trace,
    VertexMarks, VertexState, VisitStatus,
};
