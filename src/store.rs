//! Flat on-disk store for recorded training metrics.
//!
//! The training side writes one record per experiment; this crate only reads
//! them back. Records are JSON by default with a compact bincode variant for
//! large logs. The number and meaning of the sequence collections inside a
//! record are fixed per experiment name by convention and never validated at
//! write time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Per-epoch metric values from one training run. Index i is epoch i + 1.
pub type MetricSequence = Vec<f32>;

/// The sequences of one metric across the parallel runs of an experiment.
pub type SequenceCollection = Vec<MetricSequence>;

/// Everything recorded for one experiment, keyed by its name.
///
/// `collections` is a fixed-arity list whose layout depends on the experiment.
/// A RotNet record holds six collections (rotation loss/accuracy with a single
/// sequence each, then classifier and conv-classifier loss/accuracy with one
/// sequence per ConvBlock); the supervised baseline holds two; the
/// semi-supervised sweep holds four.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub name: String,
    pub collections: Vec<SequenceCollection>,
}

impl ExperimentRecord {
    pub fn new(name: impl Into<String>, collections: Vec<SequenceCollection>) -> Self {
        ExperimentRecord {
            name: name.into(),
            collections,
        }
    }

    /// Collection at `idx`, or a malformed-record error when the stored
    /// arity is smaller than the convention for this experiment expects.
    pub fn collection(&self, idx: usize) -> Result<&SequenceCollection> {
        self.collections.get(idx).ok_or_else(|| {
            ReportError::malformed_record(
                self.name.clone(),
                format!(
                    "expected at least {} sequence collections, found {}",
                    idx + 1,
                    self.collections.len()
                ),
            )
        })
    }

    /// First sequence of the collection at `idx`, for the single-run
    /// collections (rotation task, supervised baseline).
    pub fn sequence(&self, idx: usize) -> Result<&MetricSequence> {
        self.collection(idx)?.first().ok_or_else(|| {
            ReportError::malformed_record(
                self.name.clone(),
                format!("collection {} holds no sequences", idx),
            )
        })
    }
}

/// Reads and writes [`ExperimentRecord`]s under a single directory.
pub struct MetricStore {
    dir: PathBuf,
}

impl MetricStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        MetricStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the record for `name`, trying `<name>.json` first and falling
    /// back to the bincode `<name>.bin` variant.
    pub fn load(&self, name: &str) -> Result<ExperimentRecord> {
        let json_path = self.dir.join(format!("{}.json", name));
        if json_path.exists() {
            log::debug!("loading {} from {}", name, json_path.display());
            let data = std::fs::read_to_string(&json_path)?;
            return Ok(serde_json::from_str(&data)?);
        }

        let bin_path = self.dir.join(format!("{}.bin", name));
        if bin_path.exists() {
            log::debug!("loading {} from {}", name, bin_path.display());
            let data = std::fs::read(&bin_path)?;
            return Ok(bincode::deserialize(&data)?);
        }

        Err(ReportError::MissingExperiment {
            name: name.to_string(),
            searched: self.dir.display().to_string(),
        })
    }

    /// Write the record as pretty JSON, creating the directory if absent.
    /// Overwrites any prior record of the same name.
    pub fn save(&self, record: &ExperimentRecord) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", record.name));
        let serialized = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, serialized)?;
        Ok(path)
    }

    /// Write the record in the compact bincode format.
    pub fn save_binary(&self, record: &ExperimentRecord) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.bin", record.name));
        let serialized = bincode::serialize(record)?;
        std::fs::write(&path, serialized)?;
        Ok(path)
    }
}

impl Default for MetricStore {
    fn default() -> Self {
        MetricStore::new("./log")
    }
}
