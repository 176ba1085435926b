//! Report generation over the stored experiment records.
//!
//! [`Reporter`] wires the metric store to the chart composer and output sink.
//! `plot_all` regenerates the full report bundle for the fixed experiment
//! set: three RotNet depths with their classifier heads, the supervised NIN
//! baseline, and optionally the semi-supervised sweep.

use std::path::PathBuf;

use crate::chart::{compose, compose_semi, OutputSink, PlotRequest, DEFAULT_FIGSIZE};
use crate::error::{ReportError, Result};
use crate::store::{ExperimentRecord, MetricStore};

/// CIFAR-10 class count, used to turn per-class image counts into totals.
pub const NUM_CLASSES: usize = 10;

// Collection layout of a RotNet record ("{b}_block_net").
const ROT_LOSS: usize = 0;
const ROT_ACC: usize = 1;
const CLF_LOSS: usize = 2;
const CLF_ACC: usize = 3;
const CONV_LOSS: usize = 4;
const CONV_ACC: usize = 5;

// Collection layout of the "semi-supervised" sweep record.
const SEMI_LOSS: usize = 0;
const SEMI_ACC: usize = 1;
const SEMI_SUP_LOSS: usize = 2;
const SEMI_SUP_ACC: usize = 3;

pub struct Reporter {
    store: MetricStore,
    sink: OutputSink,
}

impl Reporter {
    pub fn new(store: MetricStore, sink: OutputSink) -> Self {
        Reporter { store, sink }
    }

    /// Compose and persist one figure. Returns the written path.
    pub fn plot(&self, request: &PlotRequest) -> Result<PathBuf> {
        let figure = compose(request);
        self.sink
            .save(&figure, request.figsize, &request.stem, request.overlay)
    }

    /// Final-accuracy sweep of the semi-supervised method against the
    /// supervised baseline, over the number of training images.
    pub fn plot_semi(&self, img_per_class: &[usize]) -> Result<PathBuf> {
        let record = self.store.load("semi-supervised")?;

        let semi_acc = final_accuracies(&record, SEMI_ACC)?;
        let sup_acc = final_accuracies(&record, SEMI_SUP_ACC)?;
        let num_images: Vec<f32> = img_per_class
            .iter()
            .map(|&n| (NUM_CLASSES * n) as f32)
            .collect();

        let figure = compose_semi(&num_images, &semi_acc, &sup_acc);
        self.sink.save(
            &figure,
            DEFAULT_FIGSIZE,
            "Comparison Semi-supervised and supervised NIN",
            false,
        )
    }

    /// Regenerate every figure of the report bundle.
    ///
    /// `semi` is the per-class image-count list of the semi-supervised sweep;
    /// when `None`, the sweep figures are skipped.
    pub fn plot_all(&self, semi: Option<&[usize]>) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        let records = [
            self.store.load("3_block_net")?,
            self.store.load("4_block_net")?,
            self.store.load("5_block_net")?,
        ];

        // Rotation task across all depths
        let rot_titles: Vec<String> = (3..=5)
            .map(|b| format!("Rotation Task of {} Block RotNet", b))
            .collect();
        let rot_loss = records
            .iter()
            .map(|r| r.sequence(ROT_LOSS).map(|s| s.clone()))
            .collect::<Result<Vec<_>>>()?;
        let rot_acc = records
            .iter()
            .map(|r| r.sequence(ROT_ACC).map(|s| s.clone()))
            .collect::<Result<Vec<_>>>()?;
        let request = PlotRequest::new(rot_titles, rot_loss, rot_acc, "Rotation Task");
        written.push(self.plot(&request)?);
        written.push(self.plot(&request.overlay(true))?);

        // Classifier heads, one figure pair per depth
        for (record, blocks) in records.iter().zip(3..=5usize) {
            let clf_titles: Vec<String> = (1..=blocks)
                .map(|j| format!("Non-Linear Classifier trained on ConvBlock {}", j))
                .collect();
            let request = PlotRequest::new(
                clf_titles,
                record.collection(CLF_LOSS)?.clone(),
                record.collection(CLF_ACC)?.clone(),
                format!("Non-Linear Classifier and {} Block RotNet", blocks),
            );
            written.push(self.plot(&request)?);
            written.push(self.plot(&request.overlay(true))?);

            let conv_titles: Vec<String> = (1..=blocks)
                .map(|j| format!("ConvClassifier trained on ConvBlock {}", j))
                .collect();
            let request = PlotRequest::new(
                conv_titles,
                record.collection(CONV_LOSS)?.clone(),
                record.collection(CONV_ACC)?.clone(),
                format!("Convolutional Classifier and {} Block RotNet", blocks),
            );
            written.push(self.plot(&request)?);
            written.push(self.plot(&request.overlay(true))?);
        }

        // Supervised NIN baseline
        let supervised = self.store.load("supervised_NIN")?;
        let request = PlotRequest::new(
            vec!["Supervised NIN".to_string()],
            vec![supervised.sequence(0)?.clone()],
            vec![supervised.sequence(1)?.clone()],
            "Supervised NIN",
        )
        .overlay(true)
        .history(true);
        written.push(self.plot(&request)?);

        // Semi-supervised sweep
        if let Some(img_per_class) = semi {
            let record = self.store.load("semi-supervised")?;
            for (i, &num_img) in img_per_class.iter().enumerate() {
                let titles = vec![
                    format!("Semi-supervised {} images per class", num_img),
                    format!("Supervised NIN {} images per class", num_img),
                ];
                let losses = vec![
                    run_sequence(&record, SEMI_LOSS, i)?,
                    run_sequence(&record, SEMI_SUP_LOSS, i)?,
                ];
                let accuracies = vec![
                    run_sequence(&record, SEMI_ACC, i)?,
                    run_sequence(&record, SEMI_SUP_ACC, i)?,
                ];
                let request = PlotRequest::new(
                    titles,
                    losses,
                    accuracies,
                    format!("Semi-supervised Learning {}", num_img),
                );
                written.push(self.plot(&request)?);
                written.push(self.plot(&request.overlay(true))?);
            }

            written.push(self.plot_semi(img_per_class)?);
        }

        Ok(written)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new(MetricStore::default(), OutputSink::default())
    }
}

/// Sequence for run `run` inside collection `idx` of a sweep record.
fn run_sequence(record: &ExperimentRecord, idx: usize, run: usize) -> Result<Vec<f32>> {
    record
        .collection(idx)?
        .get(run)
        .cloned()
        .ok_or_else(|| {
            ReportError::malformed_record(
                record.name.clone(),
                format!("collection {} holds no sequence for run {}", idx, run),
            )
        })
}

/// Last-epoch accuracy of every run in collection `idx`.
fn final_accuracies(record: &ExperimentRecord, idx: usize) -> Result<Vec<f32>> {
    record
        .collection(idx)?
        .iter()
        .map(|seq| {
            seq.last().copied().ok_or_else(|| {
                ReportError::malformed_record(
                    record.name.clone(),
                    format!("empty sequence in collection {}", idx),
                )
            })
        })
        .collect()
}
