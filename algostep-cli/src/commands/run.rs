use algostep::{
    presets, run as run_algorithm, Algorithm, EdgeClass, EdgeId, Graph, Outcome, Run, RunConfig,
    Side, VertexId, WeightPolicy,
};
use anyhow::{anyhow, Context};

use crate::{
    app::GlobalOptions,
    output::{emit, Listing},
};

/// Parsed arguments of `algostep run`.
pub struct RunOptions<'a> {
    pub algorithm: Algorithm,
    pub preset: &'a str,
    pub start: Option<usize>,
    pub max_steps: Option<usize>,
    pub allow_negative: bool,
    pub summary: bool,
}

fn labels(graph: &Graph, vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|vertex| graph.label(*vertex))
        .collect::<Vec<_>>()
        .join(" ")
}

fn edges(graph: &Graph, edges: &[EdgeId]) -> String {
    edges
        .iter()
        .map(|edge| graph.describe_edge(*edge))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable lines for the final answer of a run.
fn describe(graph: &Graph, outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Classification(classification) => {
            let mut lines = vec![format!("roots: {}", labels(graph, &classification.roots))];
            for class in [
                EdgeClass::Tree,
                EdgeClass::Back,
                EdgeClass::Forward,
                EdgeClass::Cross,
            ] {
                let name: &'static str = class.into();
                lines.push(format!("{name} edges: {}", classification.count(class)));
            }
            lines
        }
        Outcome::Cycle { edge: Some(edge) } => {
            vec![format!("cycle closed by {}", graph.describe_edge(*edge))]
        }
        Outcome::Cycle { edge: None } => vec!["acyclic".to_string()],
        Outcome::Topological { order: Some(order) } => {
            vec![format!("order: {}", labels(graph, order))]
        }
        Outcome::Topological { order: None } => {
            vec!["no topological order: the graph has a cycle".to_string()]
        }
        Outcome::Bipartite {
            sides: Some(sides),
            ..
        } => {
            let side_a: Vec<VertexId> = graph
                .vertex_ids()
                .filter(|v| sides[v.index()] == Side::A)
                .collect();
            let side_b: Vec<VertexId> = graph
                .vertex_ids()
                .filter(|v| sides[v.index()] == Side::B)
                .collect();
            vec![
                format!("side A: {}", labels(graph, &side_a)),
                format!("side B: {}", labels(graph, &side_b)),
            ]
        }
        Outcome::Bipartite { conflict, .. } => match conflict {
            Some(edge) => vec![format!(
                "not bipartite: {} joins two vertices of the same color",
                graph.describe_edge(*edge)
            )],
            None => vec!["not bipartite".to_string()],
        },
        Outcome::Bridges { edges: found } => vec![format!("bridges: {}", edges(graph, found))],
        Outcome::ArticulationPoints { vertices } => {
            vec![format!("articulation points: {}", labels(graph, vertices))]
        }
        Outcome::Components { components } => components
            .iter()
            .enumerate()
            .map(|(index, members)| format!("component {index}: {}", labels(graph, members)))
            .collect(),
        Outcome::ShortestPaths(paths) => graph
            .vertex_ids()
            .map(|vertex| match paths.path_to(vertex) {
                Some(path) => format!(
                    "{}: {} via {}",
                    graph.label(vertex),
                    paths.distance(vertex),
                    labels(graph, &path)
                ),
                None => format!("{}: unreachable", graph.label(vertex)),
            })
            .collect(),
        Outcome::SpanningTree(tree) => vec![
            format!("tree edges: {}", edges(graph, &tree.edges)),
            format!(
                "cost: {}{}",
                tree.cost,
                if tree.spanning { "" } else { " (forest: graph is disconnected)" }
            ),
        ],
    }
}

pub fn run(options: &RunOptions<'_>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let preset = presets::find(options.preset).ok_or_else(|| {
        anyhow!(
            "unknown preset '{}' (see `algostep list`)",
            options.preset
        )
    })?;
    let graph = preset.graph();

    let mut config = RunConfig::new(options.algorithm);
    if let Some(start) = options.start {
        config = config.with_start(VertexId::new(start));
    }
    if let Some(limit) = options.max_steps {
        config = config.with_max_steps(limit);
    }
    if options.allow_negative {
        config = config.with_negative_weights(WeightPolicy::Allow);
    }

    let result: Run = run_algorithm(&graph, &config)
        .with_context(|| format!("{} failed on preset '{}'", options.algorithm, preset.name()))?;
    log::info!(
        "{} on '{}' recorded {} steps",
        options.algorithm,
        preset.name(),
        result.trace().len()
    );

    if options.summary {
        return emit(result.outcome(), opts, |outcome| {
            for line in describe(&graph, outcome) {
                println!("{line}");
            }
        });
    }

    emit(&result, opts, |result| {
        let mut listing = Listing::steps();
        for step in result.trace().steps() {
            listing.step(step);
        }
        listing.print();

        println!();
        for line in describe(&graph, result.outcome()) {
            println!("{line}");
        }
    })
}
