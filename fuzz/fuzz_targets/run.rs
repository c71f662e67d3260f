#![no_main]

use algostep::{run, Algorithm, EdgeSpec, Graph, RunConfig, VertexSpec, WeightPolicy};
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

// Byte 0: flags (bit 0 directed, bit 1 weighted), byte 1: vertex count, byte 2: start,
// then (from, to, weight) triples.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let directed = data[0] & 1 == 1;
    let weighted = data[0] & 2 == 2;
    let count = usize::from(data[1] % 24);
    let start = usize::from(data[2]);

    let vertices = (0..count).map(|i| VertexSpec::new(i, format!("v{i}"))).collect();
    let edges = data[3..]
        .chunks_exact(3)
        .map(|chunk| EdgeSpec {
            from: usize::from(chunk[0] % 26),
            to: usize::from(chunk[1] % 26),
            weight: weighted.then_some(i64::from(chunk[2] as i8)),
        })
        .collect();

    let Ok(graph) = Graph::from_parts(vertices, edges, directed) else {
        return;
    };

    for algorithm in Algorithm::iter() {
        let config = RunConfig::new(algorithm)
            .with_start(start.into())
            .with_max_steps(100_000)
            .with_negative_weights(WeightPolicy::Allow);
        if let Ok(run) = run(&graph, &config) {
            let navigator = run.trace().navigator();
            assert!(!navigator.is_empty());
            assert!(navigator.at(navigator.len()).is_err());
        }
    }
});
