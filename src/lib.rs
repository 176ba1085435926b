//! # RotNet Report - Training Metrics Plotting
//!
//! Utilities for turning recorded training metrics (loss and accuracy
//! sequences per experiment) into PNG line charts. The training side writes
//! experiment records into a flat on-disk store; this crate loads them,
//! arranges them into subplot grids or shared overlay panels, and saves one
//! figure per request under the report output directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rotnet_report::chart::PlotRequest;
//! use rotnet_report::report::Reporter;
//!
//! let reporter = Reporter::default();
//! let request = PlotRequest::new(
//!     vec!["Supervised NIN".to_string()],
//!     vec![vec![0.9, 0.5, 0.3]],
//!     vec![vec![0.4, 0.6, 0.7]],
//!     "Supervised NIN",
//! )
//! .overlay(true)
//! .history(true);
//! reporter.plot(&request).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`chart`] - Panel layout, plotters rendering and the PNG output sink
//! - [`error`] - Error types and result handling
//! - [`report`] - Report orchestration over the fixed experiment set
//! - [`store`] - On-disk experiment record store

pub mod chart;
pub mod error;
pub mod report;
pub mod store;
