//! Integration tests for the Sort Director.
//!
//! These tests use sample data fixtures to verify that a trace goes through
//! planning and file output end-to-end.

use showcase_events::fixtures::{sample_swaps, sample_trace, sorted_trace};
use showcase_events::{RowSnapshot, SortTrace};
use sort_director::{
    Choreographer, Director, DirectorConfig, PhaseKind, PlaybackPolicy, TraceReader,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EPSILON: f32 = 1e-4;

fn overlapped_config() -> DirectorConfig {
    DirectorConfig::from_file(Path::new("tests/fixtures/overlapped.toml"))
        .expect("Failed to load overlapped config")
}

#[test]
fn test_sequential_plan_of_sample_trace() {
    let trace = sample_trace();
    let timeline = Choreographer::default().plan(&trace);

    assert_eq!(timeline.len(), 5);
    assert!((timeline.total_secs() - trace.total_duration_secs()).abs() < EPSILON);

    // Exactly one cue plays at any time
    for t in [0.1, 1.5, 2.5, 3.9, 4.99] {
        assert_eq!(timeline.sample(t).len(), 1, "at t={}", t);
    }

    let last = &timeline.sample(4.5)[0];
    assert_eq!(last.step, 4);
    assert_eq!((last.left_id, last.right_id), (1, 3));
    assert_eq!(last.phase, PhaseKind::Cross);
}

#[test]
fn test_overlapped_plan_from_fixture_config() {
    let config = overlapped_config();
    assert_eq!(
        config.playback.policy,
        PlaybackPolicy::Overlapped { stagger_secs: 0.25 }
    );

    let timeline = Choreographer::new(config).plan(&sample_trace());
    assert!((timeline.total_secs() - 2.0).abs() < EPSILON);

    let active = timeline.sample(1.1);
    let steps: Vec<u32> = active.iter().map(|cue| cue.step).collect();
    assert_eq!(steps, vec![1, 2, 3, 4]);

    let phases: Vec<PhaseKind> = active.iter().map(|cue| cue.phase).collect();
    assert_eq!(
        phases,
        vec![PhaseKind::Settle, PhaseKind::Cross, PhaseKind::Cross, PhaseKind::Lift]
    );
}

#[test]
fn test_sorted_trace_plans_nothing() {
    let timeline = Choreographer::new(overlapped_config()).plan(&sorted_trace());
    assert!(timeline.is_empty());
    assert_eq!(timeline.total_secs(), 0.0);
}

#[test]
fn test_read_swaps_fixture() {
    let content =
        fs::read_to_string("tests/fixtures/sample_swaps.jsonl").expect("Failed to read swaps");
    let swaps = SortTrace::swaps_from_jsonl(&content).expect("Failed to parse swaps");

    let mut expected = sample_swaps();
    for (step, swap) in expected.iter_mut().enumerate() {
        swap.step = step as u32;
    }
    assert_eq!(swaps, expected);
}

#[test]
fn test_full_pipeline_roundtrip() {
    let dir = tempdir().unwrap();
    let trace = sample_trace().with_run_id();
    let row = RowSnapshot::new("snap_000001", vec![], vec![]);

    let director = Director::new(overlapped_config());
    let timeline = director.direct(&row, &trace, dir.path()).unwrap();

    let reader = TraceReader::from_dir(dir.path());
    let read_back = reader.read_trace().unwrap();
    assert_eq!(read_back, trace);
    assert!(read_back.run_id.is_some());
    assert!(read_back.is_sorted());

    assert_eq!(reader.read_swaps().unwrap(), trace.swaps);
    assert_eq!(reader.read_timeline().unwrap(), timeline);
    assert_eq!(reader.read_row().unwrap(), row);

    let jsonl = fs::read_to_string(dir.path().join("trace.jsonl")).unwrap();
    assert_eq!(jsonl.lines().count(), 5);
}

#[test]
fn test_direct_overwrites_previous_run() {
    let dir = tempdir().unwrap();
    let row = RowSnapshot::new("snap_000001", vec![], vec![]);
    let director = Director::default();

    director.direct(&row, &sample_trace(), dir.path()).unwrap();
    director.direct(&row, &sorted_trace(), dir.path()).unwrap();

    let reader = TraceReader::from_dir(dir.path());
    assert_eq!(reader.read_trace().unwrap().trace_id, "trace_00002");
    assert!(reader.read_swaps().unwrap().is_empty());
}
