//! Regenerates the full report bundle from the recorded experiment logs.
//!
//! An optional first argument gives the comma-separated per-class image
//! counts of the semi-supervised sweep, e.g. `20,100,400`. Without it the
//! sweep figures are skipped.

use std::env;

use rotnet_report::error::Result;
use rotnet_report::report::Reporter;

fn main() -> Result<()> {
    env_logger::init();

    let semi: Option<Vec<usize>> = env::args().nth(1).map(|arg| {
        arg.split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect()
    });

    let reporter = Reporter::default();
    let written = reporter.plot_all(semi.as_deref())?;

    println!("wrote {} plots", written.len());
    Ok(())
}
