//! Canonical sample graphs.
//!
//! Each preset is small enough to step through by hand and chosen to exercise one algorithm
//! family: every edge class, bridges and articulation points, several strongly connected
//! components, a DAG with independent chains, an MST with tied weights, and so on.
//!
//! # Examples
//!
//! ```rust
//! use algostep::presets;
//!
//! let preset = presets::find("scc").unwrap();
//! let graph = preset.graph();
//! assert!(graph.is_directed());
//! assert_eq!(graph.vertex_count(), 8);
//! ```

use crate::{engine::Algorithm, graph::Graph};

/// A named sample graph.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    name: &'static str,
    description: &'static str,
    algorithms: &'static [Algorithm],
    build: fn() -> Graph,
}

impl Preset {
    /// Short lookup name, e.g. `"dijkstra"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Algorithms this graph is meant to demonstrate.
    #[must_use]
    pub fn algorithms(&self) -> &'static [Algorithm] {
        self.algorithms
    }

    /// Builds a fresh copy of the graph.
    #[must_use]
    pub fn graph(&self) -> Graph {
        (self.build)()
    }
}

static PRESETS: [Preset; 8] = [
    Preset {
        name: "dijkstra",
        description: "directed weighted graph A..F with a shorter detour A→D→B",
        algorithms: &[Algorithm::Dijkstra],
        build: dijkstra_example,
    },
    Preset {
        name: "classification",
        description: "directed graph with tree, back, forward and cross edges over two DFS trees",
        algorithms: &[
            Algorithm::DfsClassification,
            Algorithm::CycleDetection,
            Algorithm::StronglyConnected,
        ],
        build: classification_example,
    },
    Preset {
        name: "bridges",
        description: "two undirected triangles joined by a bridge, plus a pendant vertex",
        algorithms: &[
            Algorithm::Bridges,
            Algorithm::ArticulationPoints,
            Algorithm::DfsClassification,
        ],
        build: bridges_example,
    },
    Preset {
        name: "scc",
        description: "directed graph with three strongly connected components",
        algorithms: &[Algorithm::StronglyConnected, Algorithm::TopologicalKahn],
        build: scc_example,
    },
    Preset {
        name: "dag",
        description: "getting dressed: a DAG with independent chains and an isolated vertex",
        algorithms: &[
            Algorithm::TopologicalDfs,
            Algorithm::TopologicalKahn,
            Algorithm::CycleDetection,
        ],
        build: dag_example,
    },
    Preset {
        name: "mst",
        description: "undirected weighted graph A..G with a minimum spanning tree of cost 39",
        algorithms: &[Algorithm::Kruskal, Algorithm::Prim, Algorithm::Dijkstra],
        build: mst_example,
    },
    Preset {
        name: "bipartite",
        description: "undirected square with a tail: 2-colorable",
        algorithms: &[Algorithm::Bipartite],
        build: bipartite_example,
    },
    Preset {
        name: "odd-cycle",
        description: "undirected pentagon with a pendant vertex: not 2-colorable",
        algorithms: &[Algorithm::Bipartite, Algorithm::CycleDetection],
        build: odd_cycle_example,
    },
];

/// All presets, in display order.
#[must_use]
pub fn all() -> &'static [Preset] {
    &PRESETS
}

/// Looks up a preset by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

fn weighted(edges: &[(usize, usize, i64)]) -> Vec<(usize, usize, Option<i64>)> {
    edges.iter().map(|(from, to, w)| (*from, *to, Some(*w))).collect()
}

fn unweighted(edges: &[(usize, usize)]) -> Vec<(usize, usize, Option<i64>)> {
    edges.iter().map(|(from, to)| (*from, *to, None)).collect()
}

/// A→B(4), A→D(2), B→C(3), B→D(1), D→B(1), D→E(7), C→E(2), C→F(5), E→F(1).
///
/// From A the distances are A=0, D=2, B=3, C=6, E=8, F=9.
#[must_use]
pub fn dijkstra_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F"],
        &weighted(&[
            (0, 1, 4),
            (0, 3, 2),
            (1, 2, 3),
            (1, 3, 1),
            (3, 1, 1),
            (3, 4, 7),
            (2, 4, 2),
            (2, 5, 5),
            (4, 5, 1),
        ]),
        true,
    )
}

/// From A: C→A is back, A→C forward, D→C and F→D cross; E starts a second tree.
#[must_use]
pub fn classification_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F"],
        &unweighted(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (0, 3),
            (3, 2),
            (0, 2),
            (4, 5),
            (5, 3),
        ]),
        true,
    )
}

/// Triangles A–B–C and D–E–F joined by the bridge C–D, with G hanging off F.
///
/// Bridges: C–D and F–G. Articulation points: C, D and F.
#[must_use]
pub fn bridges_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F", "G"],
        &unweighted(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 3),
            (5, 6),
        ]),
        false,
    )
}

/// Components {A,B,C}, {D,E,F} and {G,H}, linked by B→D and G→F.
#[must_use]
pub fn scc_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F", "G", "H"],
        &unweighted(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (1, 3),
            (3, 4),
            (4, 5),
            (5, 3),
            (6, 5),
            (6, 7),
            (7, 6),
        ]),
        true,
    )
}

/// The classic getting-dressed DAG.
#[must_use]
pub fn dag_example() -> Graph {
    Graph::from_table(
        &[
            "undershorts",
            "pants",
            "belt",
            "shirt",
            "tie",
            "jacket",
            "socks",
            "shoes",
            "watch",
        ],
        &unweighted(&[
            (0, 1),
            (0, 7),
            (1, 2),
            (1, 7),
            (2, 5),
            (3, 2),
            (3, 4),
            (4, 5),
            (6, 7),
        ]),
        true,
    )
}

/// Seven vertices, eleven weighted edges with ties at 5, 7, 8 and 9.
#[must_use]
pub fn mst_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F", "G"],
        &weighted(&[
            (0, 1, 7),
            (0, 3, 5),
            (1, 2, 8),
            (1, 3, 9),
            (1, 4, 7),
            (2, 4, 5),
            (3, 4, 15),
            (3, 5, 6),
            (4, 5, 8),
            (4, 6, 9),
            (5, 6, 11),
        ]),
        false,
    )
}

/// Square A–B–C–D with the tail C–E–F.
#[must_use]
pub fn bipartite_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F"],
        &unweighted(&[(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (4, 5)]),
        false,
    )
}

/// Pentagon A–B–C–D–E with F attached to A.
#[must_use]
pub fn odd_cycle_example() -> Graph {
    Graph::from_table(
        &["A", "B", "C", "D", "E", "F"],
        &unweighted(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5)]),
        false,
    )
}
