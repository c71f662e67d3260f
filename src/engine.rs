//! Algorithm selection and dispatch.
//!
//! [`run`] is the single entry point of the engine: it validates the graph against the chosen
//! [`Algorithm`]'s preconditions, executes the algorithm eagerly to exhaustion while recording
//! every micro-operation, and returns the finished [`Run`].

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    algorithms,
    config::{RunConfig, WeightPolicy},
    graph::{EdgeId, Graph},
    outcome::Run,
    trace::Recorder,
    Error, Result,
};

/// The traced algorithms.
///
/// Names convert to and from kebab-case strings (`dfs-classification`, `topological-kahn`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    /// DFS with tree/back/forward/cross edge classification
    DfsClassification,
    /// DFS acyclicity test, halting on the first back edge
    CycleDetection,
    /// Topological order by DFS finish times
    TopologicalDfs,
    /// Topological order by Kahn's in-degree queue
    TopologicalKahn,
    /// DFS 2-coloring, halting on the first conflict
    Bipartite,
    /// Bridges via Tarjan low-links
    Bridges,
    /// Articulation points via Tarjan low-links
    ArticulationPoints,
    /// Tarjan's strongly connected components
    StronglyConnected,
    /// Dijkstra's single-source shortest paths
    Dijkstra,
    /// Kruskal's minimum spanning tree
    Kruskal,
    /// Prim's minimum spanning tree
    Prim,
}

impl Algorithm {
    /// The directedness the algorithm requires, or `None` if it runs on both.
    #[must_use]
    pub fn required_directedness(self) -> Option<bool> {
        match self {
            Algorithm::DfsClassification | Algorithm::CycleDetection | Algorithm::Dijkstra => None,
            Algorithm::TopologicalDfs
            | Algorithm::TopologicalKahn
            | Algorithm::StronglyConnected => Some(true),
            Algorithm::Bipartite
            | Algorithm::Bridges
            | Algorithm::ArticulationPoints
            | Algorithm::Kruskal
            | Algorithm::Prim => Some(false),
        }
    }

    /// Returns `true` if every edge must carry an explicit weight.
    #[must_use]
    pub fn requires_weights(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::Kruskal | Algorithm::Prim
        )
    }

    /// Returns `true` if the algorithm can run on a graph of the given directedness.
    #[must_use]
    pub fn supports(self, directed: bool) -> bool {
        self.required_directedness()
            .is_none_or(|required| required == directed)
    }
}

/// Runs `config.algorithm` against `graph`, recording the complete trace.
///
/// # Arguments
///
/// * `graph` - The validated input graph; never mutated
/// * `config` - Algorithm, start vertex, step budget and weight policy
///
/// # Errors
///
/// Returns [`Error::Empty`] or [`Error::InvalidStart`] for an unusable start vertex,
/// [`Error::Directedness`] if the algorithm does not support the graph,
/// [`Error::MissingWeight`] / [`Error::NegativeWeight`] when weight preconditions fail, and
/// [`Error::StepLimit`] if the trace outgrows `config.max_steps`.
///
/// # Examples
///
/// ```rust
/// use algostep::{presets, run, Algorithm, RunConfig, VertexId};
///
/// let graph = presets::dijkstra_example();
/// let run = run(&graph, &RunConfig::new(Algorithm::Dijkstra))?;
///
/// let paths = run.outcome().as_shortest_paths().unwrap();
/// assert_eq!(paths.distance(VertexId::new(5)).value(), Some(9));
/// assert_eq!(run.trace().last().unwrap().tag(), "complete");
/// # Ok::<(), algostep::Error>(())
/// ```
pub fn run(graph: &Graph, config: &RunConfig) -> Result<Run> {
    let algorithm = config.algorithm;
    let start = config.start_vertex();

    validate(graph, config)?;

    log::debug!(
        "running {} on {} graph with {} vertices and {} edges from {}",
        algorithm,
        if graph.is_directed() { "directed" } else { "undirected" },
        graph.vertex_count(),
        graph.edge_count(),
        start
    );

    let recorder = Recorder::new(algorithm, config.max_steps);
    let run = match algorithm {
        Algorithm::DfsClassification => algorithms::classify(graph, start, recorder),
        Algorithm::CycleDetection => algorithms::detect_cycle(graph, start, recorder),
        Algorithm::TopologicalDfs => algorithms::topological_dfs(graph, start, recorder),
        Algorithm::TopologicalKahn => algorithms::topological_kahn(graph, recorder),
        Algorithm::Bipartite => algorithms::bipartite(graph, start, recorder),
        Algorithm::Bridges => algorithms::bridges(graph, start, recorder),
        Algorithm::ArticulationPoints => algorithms::articulation_points(graph, start, recorder),
        Algorithm::StronglyConnected => algorithms::strongly_connected(graph, start, recorder),
        Algorithm::Dijkstra => algorithms::dijkstra(graph, start, recorder),
        Algorithm::Kruskal => algorithms::kruskal(graph, recorder),
        Algorithm::Prim => algorithms::prim(graph, start, recorder),
    }?;

    log::debug!(
        "{} finished after {} steps",
        algorithm,
        run.trace().len()
    );
    Ok(run)
}

fn validate(graph: &Graph, config: &RunConfig) -> Result<()> {
    let algorithm = config.algorithm;
    graph.check_start(config.start_vertex())?;

    if !algorithm.supports(graph.is_directed()) {
        return Err(Error::Directedness {
            algorithm,
            directed: graph.is_directed(),
        });
    }

    if algorithm.requires_weights() {
        for (index, edge) in graph.edges().iter().enumerate() {
            let Some(weight) = edge.weight else {
                return Err(Error::MissingWeight {
                    edge: EdgeId::new(index),
                });
            };

            if algorithm == Algorithm::Dijkstra && weight < 0 {
                match config.negative_weights {
                    WeightPolicy::Reject => {
                        return Err(Error::NegativeWeight {
                            edge: EdgeId::new(index),
                            weight,
                        })
                    }
                    WeightPolicy::Allow => log::warn!(
                        "edge {} has negative weight {}; shortest distances may be wrong",
                        graph.describe_edge(EdgeId::new(index)),
                        weight
                    ),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        graph::VertexId,
        outcome::Outcome,
        presets,
    };

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::iter() {
            let name = algorithm.to_string();
            assert_eq!(Algorithm::from_str(&name), Ok(algorithm));
        }
        assert_eq!(
            Algorithm::from_str("topological-kahn"),
            Ok(Algorithm::TopologicalKahn)
        );
        assert!(Algorithm::from_str("bogosort").is_err());
    }

    #[test]
    fn test_directedness_requirements() {
        assert!(Algorithm::Dijkstra.supports(true));
        assert!(Algorithm::Dijkstra.supports(false));
        assert!(!Algorithm::StronglyConnected.supports(false));
        assert!(!Algorithm::Kruskal.supports(true));
    }

    #[test]
    fn test_run_rejects_wrong_directedness() {
        let graph = presets::mst_example();
        let result = run(&graph, &RunConfig::new(Algorithm::TopologicalKahn));
        assert_eq!(
            result.map(|_| ()),
            Err(Error::Directedness {
                algorithm: Algorithm::TopologicalKahn,
                directed: false
            })
        );
    }

    #[test]
    fn test_run_rejects_missing_weight() {
        let graph = presets::bridges_example();
        let result = run(&graph, &RunConfig::new(Algorithm::Kruskal));
        assert!(matches!(result, Err(Error::MissingWeight { .. })));
    }

    #[test]
    fn test_run_rejects_invalid_start() {
        let graph = presets::dag_example();
        let config = RunConfig::new(Algorithm::TopologicalDfs).with_start(VertexId::new(99));
        assert!(matches!(
            run(&graph, &config),
            Err(Error::InvalidStart { vertex: 99, .. })
        ));
    }

    #[test]
    fn test_run_rejects_empty_graph() {
        let graph = Graph::builder(true).build();
        let result = run(&graph, &RunConfig::new(Algorithm::DfsClassification));
        assert_eq!(result.map(|_| ()), Err(Error::Empty));
    }

    fn create_negative_graph() -> Graph {
        let mut builder = Graph::builder(true);
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        let d = builder.add_vertex("D");
        builder.add_weighted_edge(a, b, 4).unwrap();
        builder.add_weighted_edge(a, c, 1).unwrap();
        builder.add_weighted_edge(c, d, 1).unwrap();
        builder.add_weighted_edge(b, c, -5).unwrap();
        builder.build()
    }

    #[test]
    fn test_negative_weight_policy() {
        let graph = create_negative_graph();

        let rejected = run(&graph, &RunConfig::new(Algorithm::Dijkstra));
        assert_eq!(
            rejected.map(|_| ()),
            Err(Error::NegativeWeight {
                edge: EdgeId::new(3),
                weight: -5
            })
        );

        let config =
            RunConfig::new(Algorithm::Dijkstra).with_negative_weights(WeightPolicy::Allow);
        let allowed = run(&graph, &config).unwrap();
        // D was settled at 2 before B's edge lowered C to -1; the true distance is 0
        let paths = allowed.outcome().as_shortest_paths().unwrap();
        assert_eq!(paths.distance(VertexId::new(2)).value(), Some(-1));
        assert_eq!(paths.distance(VertexId::new(3)).value(), Some(2));
    }

    #[test]
    fn test_step_limit_fails_run() {
        let graph = presets::classification_example();
        let config = RunConfig::bounded(3).with_algorithm(Algorithm::DfsClassification);
        assert_eq!(run(&graph, &config).map(|_| ()), Err(Error::StepLimit(3)));
    }

    #[test]
    fn test_every_algorithm_runs_on_a_preset() {
        for algorithm in Algorithm::iter() {
            let graph = presets::all()
                .into_iter()
                .map(|preset| preset.graph())
                .find(|graph| {
                    algorithm.supports(graph.is_directed())
                        && (!algorithm.requires_weights()
                            || graph.edges().iter().all(|e| e.weight.is_some_and(|w| w >= 0)))
                })
                .unwrap();
            let run = run(&graph, &RunConfig::new(algorithm)).unwrap();
            assert!(!run.trace().is_empty(), "{algorithm} produced no steps");
            assert_eq!(run.trace().algorithm(), algorithm);
            if let Outcome::Classification(classification) = run.outcome() {
                assert_eq!(classification.classes.len(), graph.edge_count());
            }
        }
    }
}
