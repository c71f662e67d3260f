//! Random-access playback over a finished [`Trace`].
//!
//! [`Navigator`] is a pure addressing layer: index in, step out, bounds-checked against
//! `[0, len)`. It holds nothing but a borrow of the trace, so any number of views can read the
//! same trace at once. [`Cursor`] adds a remembered position for UIs that step forward and back.

use crate::{
    trace::{recorder::Trace, step::Step},
    Error, Result,
};

/// Stateless, bounds-checked access to the steps of a trace.
///
/// # Examples
///
/// ```rust
/// use algostep::{presets, run, Algorithm, RunConfig};
///
/// let graph = presets::dijkstra_example();
/// let run = run(&graph, &RunConfig::new(Algorithm::Dijkstra))?;
/// let navigator = run.trace().navigator();
///
/// let first = navigator.at(0)?;
/// assert_eq!(first.tag(), "initialize");
/// assert_eq!(navigator.previous(1)?, first);
/// assert!(navigator.at(navigator.len()).is_err());
/// # Ok::<(), algostep::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'t> {
    trace: &'t Trace,
}

impl<'t> Navigator<'t> {
    /// Creates a navigator over `trace`.
    #[must_use]
    pub fn new(trace: &'t Trace) -> Self {
        Self { trace }
    }

    /// Number of addressable steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns `true` if there is nothing to address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The step at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&'t Step> {
        self.trace.get(index).ok_or(Error::StepOutOfRange {
            index,
            len: self.trace.len(),
        })
    }

    /// The step after `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `index` is the last step or beyond.
    pub fn next(&self, index: usize) -> Result<&'t Step> {
        let target = index.checked_add(1).ok_or(Error::StepOutOfRange {
            index,
            len: self.trace.len(),
        })?;
        self.at(target)
    }

    /// The step before `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `index` is `0` or past the end.
    pub fn previous(&self, index: usize) -> Result<&'t Step> {
        if index > self.trace.len() {
            return Err(Error::StepOutOfRange {
                index,
                len: self.trace.len(),
            });
        }
        let target = index.checked_sub(1).ok_or(Error::StepOutOfRange {
            index,
            len: self.trace.len(),
        })?;
        self.at(target)
    }

    /// The first step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] for an empty trace.
    pub fn first(&self) -> Result<&'t Step> {
        self.at(0)
    }

    /// The last step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] for an empty trace.
    pub fn last(&self) -> Result<&'t Step> {
        self.at(self.trace.len().saturating_sub(1))
    }
}

/// A navigator with a remembered position.
///
/// Failed moves leave the position unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t> {
    navigator: Navigator<'t>,
    position: usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor positioned at the first step.
    #[must_use]
    pub fn new(trace: &'t Trace) -> Self {
        Self {
            navigator: Navigator::new(trace),
            position: 0,
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` when positioned on the final step.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.navigator.len()
    }

    /// The step under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] for an empty trace.
    pub fn current(&self) -> Result<&'t Step> {
        self.navigator.at(self.position)
    }

    /// Moves one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] when already at the last step.
    pub fn advance(&mut self) -> Result<&'t Step> {
        let step = self.navigator.next(self.position)?;
        self.position = step.index();
        Ok(step)
    }

    /// Moves one step back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] when already at the first step.
    pub fn retreat(&mut self) -> Result<&'t Step> {
        let step = self.navigator.previous(self.position)?;
        self.position = step.index();
        Ok(step)
    }

    /// Jumps to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `index` is outside the trace.
    pub fn seek(&mut self, index: usize) -> Result<&'t Step> {
        let step = self.navigator.at(index)?;
        self.position = index;
        Ok(step)
    }

    /// Jumps to the first step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] for an empty trace.
    pub fn rewind(&mut self) -> Result<&'t Step> {
        self.seek(0)
    }

    /// Jumps to the last step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] for an empty trace.
    pub fn fast_forward(&mut self) -> Result<&'t Step> {
        self.seek(self.navigator.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::Algorithm,
        graph::{Graph, VertexId},
        trace::{
            recorder::Recorder,
            state::VertexState,
            step::{Frame, KahnAction, KahnAux},
        },
    };

    fn create_trace(len: usize) -> Trace {
        let mut builder = Graph::builder(true);
        builder.add_vertex("A");
        let graph = builder.build();

        let mut recorder = Recorder::new(Algorithm::TopologicalKahn, None);
        let mut vertices = vec![VertexState::default()];
        for i in 0..len {
            vertices[0].in_degree = Some(i);
            let frame = Frame::Kahn {
                action: KahnAction::Dequeue {
                    vertex: VertexId::new(0),
                },
                aux: KahnAux {
                    queue: vec![],
                    order: vec![],
                    cycle_detected: false,
                },
            };
            recorder
                .record(&vertices, &[], frame, format!("step {i}"))
                .unwrap();
        }
        recorder.finish(&graph)
    }

    #[test]
    fn test_at_bounds() {
        let trace = create_trace(3);
        let navigator = trace.navigator();

        assert_eq!(navigator.at(2).unwrap().message(), "step 2");
        assert_eq!(
            navigator.at(3),
            Err(Error::StepOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_next_previous() {
        let trace = create_trace(3);
        let navigator = trace.navigator();

        assert_eq!(navigator.next(0).unwrap().index(), 1);
        assert!(navigator.next(2).is_err());
        assert!(navigator.next(usize::MAX).is_err());
        assert_eq!(navigator.previous(2).unwrap().index(), 1);
        assert!(navigator.previous(0).is_err());
        assert!(navigator.previous(7).is_err());
    }

    #[test]
    fn test_at_is_idempotent() {
        let trace = create_trace(4);
        let navigator = trace.navigator();
        assert_eq!(navigator.at(2).unwrap(), navigator.at(2).unwrap());
        assert_eq!(navigator.first().unwrap().index(), 0);
        assert_eq!(navigator.last().unwrap().index(), 3);
    }

    #[test]
    fn test_empty_trace() {
        let trace = create_trace(0);
        let navigator = trace.navigator();
        assert!(navigator.is_empty());
        assert!(navigator.first().is_err());
        assert!(navigator.last().is_err());
    }

    #[test]
    fn test_cursor_moves() {
        let trace = create_trace(3);
        let mut cursor = Cursor::new(&trace);

        assert_eq!(cursor.current().unwrap().index(), 0);
        assert!(cursor.retreat().is_err());
        assert_eq!(cursor.position(), 0);

        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert!(cursor.is_at_end());
        assert!(cursor.advance().is_err());
        assert_eq!(cursor.position(), 2);

        assert_eq!(cursor.retreat().unwrap().index(), 1);
        assert_eq!(cursor.rewind().unwrap().index(), 0);
        assert_eq!(cursor.fast_forward().unwrap().index(), 2);
        assert!(cursor.seek(9).is_err());
        assert_eq!(cursor.position(), 2);
    }
}
