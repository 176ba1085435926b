//! Persists composed figures under the report output directory.

use std::path::{Path, PathBuf};

use crate::chart::layout::Figure;
use crate::chart::render;
use crate::error::Result;

/// Writes figures as `<dir>/<stem>.png`, with `_comparison` appended to the
/// stem when the figure came from overlay mode. Re-running overwrites.
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        OutputSink {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target path for a filename stem. Pure; does not touch the filesystem.
    pub fn resolve(&self, stem: &str, overlay: bool) -> PathBuf {
        if overlay {
            self.dir.join(format!("{}_comparison.png", stem))
        } else {
            self.dir.join(format!("{}.png", stem))
        }
    }

    /// Create the output directory if absent and render the figure into it.
    pub fn save(
        &self,
        figure: &Figure,
        figsize: (u32, u32),
        stem: &str,
        overlay: bool,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.resolve(stem, overlay);
        render::render(figure, &path, figsize)?;
        log::info!("saved plot to {}", path.display());
        Ok(path)
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        OutputSink::new("./plot")
    }
}
