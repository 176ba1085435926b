use tempfile::tempdir;

use rotnet_report::chart::{OutputSink, PlotRequest};
use rotnet_report::error::ReportError;
use rotnet_report::report::Reporter;
use rotnet_report::store::{ExperimentRecord, MetricStore, SequenceCollection};

const EPOCHS: usize = 4;

fn sequence(seed: f32) -> Vec<f32> {
    (0..EPOCHS).map(|e| seed + e as f32 * 0.1).collect()
}

fn single(seed: f32) -> SequenceCollection {
    vec![sequence(seed)]
}

fn per_block(blocks: usize, seed: f32) -> SequenceCollection {
    (0..blocks).map(|b| sequence(seed + b as f32)).collect()
}

fn rotnet_record(blocks: usize) -> ExperimentRecord {
    ExperimentRecord::new(
        format!("{}_block_net", blocks),
        vec![
            single(1.0),
            single(0.2),
            per_block(blocks, 2.0),
            per_block(blocks, 0.3),
            per_block(blocks, 3.0),
            per_block(blocks, 0.4),
        ],
    )
}

fn sweep_collection(runs: usize, seed: f32) -> SequenceCollection {
    (0..runs).map(|r| sequence(seed + r as f32)).collect()
}

fn seed_store(store: &MetricStore, sweep_runs: usize) {
    for blocks in 3..=5 {
        store.save(&rotnet_record(blocks)).unwrap();
    }
    store
        .save(&ExperimentRecord::new(
            "supervised_NIN",
            vec![single(0.8), single(0.5)],
        ))
        .unwrap();
    store
        .save(&ExperimentRecord::new(
            "semi-supervised",
            vec![
                sweep_collection(sweep_runs, 0.9),
                sweep_collection(sweep_runs, 0.3),
                sweep_collection(sweep_runs, 1.1),
                sweep_collection(sweep_runs, 0.25),
            ],
        ))
        .unwrap();
}

#[test]
fn test_plot_all_without_sweep() {
    let data = tempdir().unwrap();
    let out = tempdir().unwrap();
    let store = MetricStore::new(data.path());
    seed_store(&store, 2);

    let reporter = Reporter::new(store, OutputSink::new(out.path()));
    let written = reporter.plot_all(None).unwrap();

    // rotation pair + (clf pair + conv pair) per depth + supervised history
    assert_eq!(written.len(), 2 + 3 * 4 + 1);
    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }

    assert!(out.path().join("Rotation Task.png").exists());
    assert!(out.path().join("Rotation Task_comparison.png").exists());
    assert!(out
        .path()
        .join("Non-Linear Classifier and 4 Block RotNet.png")
        .exists());
    assert!(out
        .path()
        .join("Convolutional Classifier and 5 Block RotNet_comparison.png")
        .exists());
    assert!(out.path().join("Supervised NIN_comparison.png").exists());
    // history mode only produced the overlay figure
    assert!(!out.path().join("Supervised NIN.png").exists());
}

#[test]
fn test_plot_all_with_sweep() {
    let data = tempdir().unwrap();
    let out = tempdir().unwrap();
    let store = MetricStore::new(data.path());
    seed_store(&store, 2);

    let reporter = Reporter::new(store, OutputSink::new(out.path()));
    let written = reporter.plot_all(Some(&[20, 100])).unwrap();

    assert_eq!(written.len(), 2 + 3 * 4 + 1 + 2 * 2 + 1);
    assert!(out.path().join("Semi-supervised Learning 20.png").exists());
    assert!(out
        .path()
        .join("Semi-supervised Learning 100_comparison.png")
        .exists());
    assert!(out
        .path()
        .join("Comparison Semi-supervised and supervised NIN.png")
        .exists());
}

#[test]
fn test_plot_all_fails_fast_on_missing_record() {
    let data = tempdir().unwrap();
    let out = tempdir().unwrap();
    let store = MetricStore::new(data.path());
    store.save(&rotnet_record(3)).unwrap();

    let reporter = Reporter::new(store, OutputSink::new(out.path()));
    assert!(matches!(
        reporter.plot_all(None),
        Err(ReportError::MissingExperiment { .. })
    ));
}

#[test]
fn test_plot_single_request_roundtrip() {
    let out = tempdir().unwrap();
    let reporter = Reporter::new(MetricStore::default(), OutputSink::new(out.path()));

    let request = PlotRequest::new(
        vec!["A".to_string(), "B".to_string()],
        vec![sequence(1.0), sequence(1.5)],
        vec![sequence(0.2), sequence(0.3)],
        "side by side",
    )
    .figsize(600, 400)
    .markers(vec![2.0, 3.0], vec![0.3, 0.5]);

    let path = reporter.plot(&request).unwrap();
    assert_eq!(path, out.path().join("side by side.png"));
    assert!(path.exists());
}
