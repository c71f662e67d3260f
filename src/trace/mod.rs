//! Trace recording and playback.
//!
//! Every run produces a [`Trace`]: a totally ordered list of immutable [`Step`]s, each a full
//! deep copy of the vertex and edge state at one micro-operation, plus the auxiliary structures
//! of the algorithm family and a message. Playback never re-runs the algorithm.
//!
//! # Key Components
//!
//! - [`VertexState`] / [`EdgeState`] - Mutable per-run annotation, copied into every step
//! - [`Frame`] - Per-family sum type of action and auxiliary state
//! - [`Recorder`] - Append-only builder used while an algorithm runs
//! - [`Navigator`] / [`Cursor`] - Bounds-checked random access over a finished trace

mod navigator;
mod recorder;
mod state;
mod step;

pub use navigator::{Cursor, Navigator};
pub use recorder::{Recorder, Trace};
pub use state::{
    Distance, EdgeClass, EdgeMarks, EdgeState, Side, VertexMarks, VertexState, VisitStatus,
};
pub use step::{
    DfsAction, DfsAux, DfsDetail, DijkstraAction, DijkstraAux, Frame, KahnAction, KahnAux,
    KruskalAction, KruskalAux, PrimAction, PrimAux, Step,
};
