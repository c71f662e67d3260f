//! Run configuration.
//!
//! A [`RunConfig`] names the algorithm to execute and the parameters of one run: the start
//! vertex, an optional step budget, and how Dijkstra treats negative edge weights.

use crate::{engine::Algorithm, graph::VertexId};

/// How negative edge weights are handled by [`Algorithm::Dijkstra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightPolicy {
    /// Fail the run with [`Error::NegativeWeight`](crate::Error::NegativeWeight) (default)
    #[default]
    Reject,
    /// Run anyway; distances may be wrong
    Allow,
}

/// Parameters of a single run
///
/// # Examples
///
/// ```rust
/// use algostep::{Algorithm, RunConfig, VertexId, WeightPolicy};
///
/// let config = RunConfig::new(Algorithm::Dijkstra)
///     .with_start(VertexId::new(2))
///     .with_max_steps(10_000);
///
/// assert_eq!(config.start_vertex(), VertexId::new(2));
/// assert_eq!(config.negative_weights, WeightPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// The algorithm to execute
    pub algorithm: Algorithm,

    /// Start vertex; `None` means vertex `0`. Ignored by Kruskal.
    pub start: Option<VertexId>,

    /// Maximum number of steps the trace may hold (default: unlimited)
    /// Exceeding it fails the run with [`Error::StepLimit`](crate::Error::StepLimit)
    pub max_steps: Option<usize>,

    /// Treatment of negative weights for Dijkstra
    pub negative_weights: WeightPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::DfsClassification,
            start: None,
            max_steps: None,
            negative_weights: WeightPolicy::Reject,
        }
    }
}

impl RunConfig {
    /// Creates a default configuration for `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Creates a configuration without a step budget.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a configuration that refuses to record more than `limit` steps.
    ///
    /// Useful when tracing user-supplied graphs, where dense inputs can produce O(V·E) snapshots.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            max_steps: Some(limit),
            ..Self::default()
        }
    }

    /// Replaces the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the start vertex.
    #[must_use]
    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the step budget.
    #[must_use]
    pub fn with_max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }

    /// Sets the negative-weight policy.
    #[must_use]
    pub fn with_negative_weights(mut self, policy: WeightPolicy) -> Self {
        self.negative_weights = policy;
        self
    }

    /// The effective start vertex.
    #[must_use]
    pub fn start_vertex(&self) -> VertexId {
        self.start.unwrap_or(VertexId::new(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.algorithm, Algorithm::DfsClassification);
        assert_eq!(config.start_vertex(), VertexId::new(0));
        assert!(config.max_steps.is_none());
        assert_eq!(config.negative_weights, WeightPolicy::Reject);
    }

    #[test]
    fn test_presets() {
        assert_eq!(RunConfig::unbounded(), RunConfig::default());
        assert_eq!(RunConfig::bounded(50).max_steps, Some(50));
    }

    #[test]
    fn test_builder_chain() {
        let config = RunConfig::bounded(5)
            .with_algorithm(Algorithm::Prim)
            .with_start(VertexId::new(3))
            .with_negative_weights(WeightPolicy::Allow);

        assert_eq!(config.algorithm, Algorithm::Prim);
        assert_eq!(config.start, Some(VertexId::new(3)));
        assert_eq!(config.max_steps, Some(5));
        assert_eq!(config.negative_weights, WeightPolicy::Allow);
    }
}
