//! Trace playback: random access, stepping and bounds, across every preset and algorithm.

use algostep::{presets, run, Algorithm, Cursor, Error, Run, RunConfig};
use strum::IntoEnumIterator;

/// Every (preset, algorithm) pair whose preconditions hold.
fn all_runs() -> Vec<(&'static str, Algorithm, Run)> {
    let mut runs = Vec::new();
    for preset in presets::all() {
        let graph = preset.graph();
        let weighted = graph.edges().iter().all(|edge| edge.weight.is_some());
        for algorithm in Algorithm::iter() {
            if !algorithm.supports(graph.is_directed()) {
                continue;
            }
            if algorithm.requires_weights() && !weighted {
                continue;
            }
            let run = run(&graph, &RunConfig::new(algorithm)).unwrap();
            runs.push((preset.name(), algorithm, run));
        }
    }
    runs
}

#[test]
fn test_every_supported_pair_runs() {
    let runs = all_runs();
    assert!(runs.len() >= 20);
    for (preset, algorithm, run) in &runs {
        assert!(!run.trace().is_empty(), "{algorithm} on {preset}");
        assert_eq!(run.trace().algorithm(), *algorithm);
    }
}

#[test]
fn test_at_is_idempotent() {
    for (_, _, run) in all_runs() {
        let navigator = run.trace().navigator();
        for index in 0..navigator.len() {
            let first = navigator.at(index).unwrap().clone();
            let second = navigator.at(index).unwrap();
            assert_eq!(&first, second);
            assert_eq!(second.index(), index);
        }
    }
}

#[test]
fn test_next_then_previous_returns() {
    for (preset, algorithm, run) in all_runs() {
        let navigator = run.trace().navigator();
        for index in 1..navigator.len().saturating_sub(1) {
            let original = navigator.at(index).unwrap();
            let forward = navigator.next(index).unwrap();
            let back = navigator.previous(forward.index()).unwrap();
            assert_eq!(original, back, "{algorithm} on {preset} at {index}");

            let backward = navigator.previous(index).unwrap();
            assert_eq!(navigator.next(backward.index()).unwrap(), original);
        }
    }
}

#[test]
fn test_out_of_range() {
    for (_, _, run) in all_runs() {
        let navigator = run.trace().navigator();
        let len = navigator.len();

        assert_eq!(
            navigator.at(len).unwrap_err(),
            Error::StepOutOfRange { index: len, len }
        );
        assert!(navigator.at(usize::MAX).is_err());
        assert!(navigator.next(len - 1).is_err());
        assert!(navigator.next(usize::MAX).is_err());
        assert!(navigator.previous(0).is_err());
        assert!(navigator.previous(len + 1).is_err());
        assert_eq!(navigator.last().unwrap().index(), len - 1);
    }
}

#[test]
fn test_navigation_leaves_trace_untouched() {
    for (_, _, run) in all_runs() {
        let before = run.trace().clone();

        let mut cursor = Cursor::new(run.trace());
        while cursor.advance().is_ok() {}
        assert!(cursor.is_at_end());
        while cursor.retreat().is_ok() {}
        assert_eq!(cursor.position(), 0);
        cursor.fast_forward().unwrap();
        let _ = cursor.seek(run.trace().len());

        assert_eq!(&before, run.trace());
        assert_eq!(cursor.position(), run.trace().len() - 1);
    }
}

#[test]
fn test_reruns_are_identical() {
    for preset in presets::all() {
        let graph = preset.graph();
        for algorithm in preset.algorithms() {
            let config = RunConfig::new(*algorithm);
            let first = run(&graph, &config).unwrap();
            let second = run(&graph, &config).unwrap();
            assert_eq!(first, second, "{algorithm} on {}", preset.name());
        }
    }
}

#[test]
fn test_snapshots_are_independent() {
    let graph = presets::dijkstra_example();
    let run = run(&graph, &RunConfig::new(Algorithm::Dijkstra)).unwrap();
    let navigator = run.trace().navigator();

    let first = navigator.first().unwrap();
    let last = navigator.last().unwrap();
    assert!(first
        .vertices()
        .iter()
        .skip(1)
        .all(|vertex| !vertex.distance.is_finite()));
    assert!(last.vertices().iter().all(|vertex| vertex.distance.is_finite()));
}

#[test]
fn test_step_limit_aborts_run() {
    let graph = presets::mst_example();
    let config = RunConfig::new(Algorithm::Kruskal).with_max_steps(5);
    assert_eq!(run(&graph, &config).unwrap_err(), Error::StepLimit(5));
}
