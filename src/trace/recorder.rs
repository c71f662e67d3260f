//! Step recording and the finished trace.
//!
//! Algorithms keep mutating their live vertex/edge state while they run. [`Recorder::record`]
//! copies that state into a fresh [`Step`] every time, so a frame never observes a later
//! mutation and any index can be replayed without re-running the algorithm.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    engine::Algorithm,
    graph::Graph,
    trace::{
        navigator::Navigator,
        state::{EdgeState, VertexState},
        step::{Frame, Step},
    },
    Error, Result,
};

/// Append-only trace builder owned by a single run.
#[derive(Debug)]
pub struct Recorder {
    algorithm: Algorithm,
    steps: Vec<Step>,
    limit: Option<usize>,
}

impl Recorder {
    /// Creates an empty recorder.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - The algorithm whose run is being recorded
    /// * `limit` - Optional cap on the number of steps; exceeding it fails the run
    #[must_use]
    pub fn new(algorithm: Algorithm, limit: Option<usize>) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
            limit,
        }
    }

    /// Appends a snapshot of the given live state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepLimit`] if the step budget is already exhausted.
    pub fn record(
        &mut self,
        vertices: &[VertexState],
        edges: &[EdgeState],
        frame: Frame,
        message: impl Into<String>,
    ) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.steps.len() >= limit {
                return Err(Error::StepLimit(limit));
            }
        }

        self.steps.push(Step {
            index: self.steps.len(),
            vertices: vertices.to_vec(),
            edges: edges.to_vec(),
            frame,
            message: message.into(),
        });
        Ok(())
    }

    /// Number of steps recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seals the recording into a read-only [`Trace`] over a copy of `graph`.
    #[must_use]
    pub fn finish(self, graph: &Graph) -> Trace {
        Trace {
            algorithm: self.algorithm,
            graph: graph.clone(),
            steps: self.steps,
        }
    }
}

/// The ordered, immutable steps of one run.
///
/// A trace owns a copy of the graph it was produced from, so labels and edge endpoints stay
/// available to renderers. Once built it has no writer, and can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    algorithm: Algorithm,
    graph: Graph,
    steps: Vec<Step>,
}

impl Trace {
    /// The algorithm that produced this trace.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The graph the run executed against.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// All steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The final step.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Index of the first step carrying `tag`, e.g. `"cycle-detected"`.
    #[must_use]
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.tag() == tag)
    }

    /// Number of steps per tag.
    #[must_use]
    pub fn tag_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for step in &self.steps {
            *counts.entry(step.tag()).or_insert(0) += 1;
        }
        counts
    }

    /// A stateless, bounds-checked view over this trace.
    #[must_use]
    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(self)
    }
}
