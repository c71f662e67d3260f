use algostep::{presets, Algorithm};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
    app::GlobalOptions,
    output::{emit, Listing},
};

#[derive(Debug, Serialize)]
struct AlgorithmEntry {
    name: &'static str,
    graphs: &'static str,
    weighted: bool,
}

#[derive(Debug, Serialize)]
struct PresetEntry {
    name: &'static str,
    directed: bool,
    vertices: usize,
    edges: usize,
    algorithms: Vec<&'static str>,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    algorithms: Vec<AlgorithmEntry>,
    presets: Vec<PresetEntry>,
}

fn directedness(algorithm: Algorithm) -> &'static str {
    match algorithm.required_directedness() {
        Some(true) => "directed",
        Some(false) => "undirected",
        None => "any",
    }
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let algorithms = Algorithm::iter()
        .map(|algorithm| AlgorithmEntry {
            name: algorithm.into(),
            graphs: directedness(algorithm),
            weighted: algorithm.requires_weights(),
        })
        .collect();

    let presets = presets::all()
        .iter()
        .map(|preset| {
            let graph = preset.graph();
            PresetEntry {
                name: preset.name(),
                directed: graph.is_directed(),
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                algorithms: preset.algorithms().iter().map(|a| (*a).into()).collect(),
                description: preset.description(),
            }
        })
        .collect();

    let output = ListOutput {
        algorithms,
        presets,
    };

    emit(&output, opts, |out| {
        println!("Algorithms:");
        let mut listing = Listing::new(&["Name", "Graphs", "Weights"]).indented("  ");
        for entry in &out.algorithms {
            let weights = if entry.weighted { "required" } else { "-" };
            listing.row([entry.name, entry.graphs, weights]);
        }
        listing.print();

        println!("\nPresets:");
        let mut listing = Listing::new(&["Name", "Kind", "V", "E", "Description"])
            .numeric(&[2, 3])
            .indented("  ");
        for entry in &out.presets {
            listing.row([
                entry.name.to_string(),
                if entry.directed { "directed" } else { "undirected" }.to_string(),
                entry.vertices.to_string(),
                entry.edges.to_string(),
                entry.description.to_string(),
            ]);
        }
        listing.print();
    })
}
