//! Panel layout for metric figures.
//!
//! Composition is kept separate from drawing: a [`PlotRequest`] is turned
//! into a [`Figure`] describing every panel, series and marker, and the
//! renderer turns that into pixels. Panel geometry and epoch axes can then
//! be checked without decoding a PNG.

use crate::store::MetricSequence;

/// Default figure size in pixels (the 15x10 inch original at 100 dpi).
pub const DEFAULT_FIGSIZE: (u32, u32) = (1500, 1000);

/// One plot invocation: parallel lists of titles, loss sequences and
/// accuracy sequences, plus layout flags.
///
/// Title i, loss sequence i and accuracy sequence i must describe the same
/// training run; that alignment is a caller contract and is not validated.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub titles: Vec<String>,
    pub losses: Vec<MetricSequence>,
    pub accuracies: Vec<MetricSequence>,
    pub stem: String,
    pub figsize: (u32, u32),
    /// Overlay all runs on one shared pair of panels instead of one row per run.
    pub overlay: bool,
    /// Caption overlay panels as a history rather than a comparison.
    pub history: bool,
    pub best_epochs: Option<Vec<f32>>,
    pub best_accuracies: Option<Vec<f32>>,
}

impl PlotRequest {
    pub fn new(
        titles: Vec<String>,
        losses: Vec<MetricSequence>,
        accuracies: Vec<MetricSequence>,
        stem: impl Into<String>,
    ) -> Self {
        PlotRequest {
            titles,
            losses,
            accuracies,
            stem: stem.into(),
            figsize: DEFAULT_FIGSIZE,
            overlay: false,
            history: false,
            best_epochs: None,
            best_accuracies: None,
        }
    }

    pub fn figsize(mut self, width: u32, height: u32) -> Self {
        self.figsize = (width, height);
        self
    }

    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }

    /// Highlight the point (best_epochs[i], best_accuracies[i]) on the
    /// accuracy panel of grid row i. A row gets its marker only when both
    /// lists carry a value for it.
    pub fn markers(mut self, best_epochs: Vec<f32>, best_accuracies: Vec<f32>) -> Self {
        self.best_epochs = Some(best_epochs);
        self.best_accuracies = Some(best_accuracies);
        self
    }

    fn marker_for(&self, row: usize) -> Option<(f32, f32)> {
        let epoch = self.best_epochs.as_ref()?.get(row)?;
        let acc = self.best_accuracies.as_ref()?.get(row)?;
        Some((*epoch, *acc))
    }
}

/// One line in a panel.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f32, f32)>,
}

impl Series {
    /// Series over epoch numbers 1..=L for a sequence of length L.
    pub fn from_epochs(label: impl Into<String>, values: &[f32]) -> Self {
        Series {
            label: label.into(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &v)| ((i + 1) as f32, v))
                .collect(),
        }
    }
}

/// One sub-chart: caption, axis labels, its lines and an optional marker.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub marker: Option<(f32, f32)>,
    pub legend: bool,
}

impl Panel {
    fn new(title: String, x_label: &str, y_label: &str) -> Self {
        Panel {
            title,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
            marker: None,
            legend: false,
        }
    }
}

/// A grid of panels, row-major, rendered as one image.
#[derive(Debug, Clone)]
pub struct Figure {
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

/// Arrange a request into panels.
///
/// Overlay mode yields one shared loss panel and one shared accuracy panel
/// with a legend entry per run. Grid mode yields one row of (loss, accuracy)
/// panels per run, titled from the run's own label.
pub fn compose(request: &PlotRequest) -> Figure {
    if request.overlay {
        compose_overlay(request)
    } else {
        compose_grid(request)
    }
}

fn compose_overlay(request: &PlotRequest) -> Figure {
    let mut loss_panel = Panel::new(
        if request.history {
            "History of Loss".to_string()
        } else {
            "Comparison of Losses".to_string()
        },
        "Epoch",
        "Loss",
    );
    let mut acc_panel = Panel::new(
        if request.history {
            "History of Accuracies".to_string()
        } else {
            "Comparison of Accuracies".to_string()
        },
        "Epoch",
        "Accuracy",
    );
    loss_panel.legend = true;
    acc_panel.legend = true;

    for (i, title) in request.titles.iter().enumerate() {
        loss_panel
            .series
            .push(Series::from_epochs(title.clone(), &request.losses[i]));
        acc_panel
            .series
            .push(Series::from_epochs(title.clone(), &request.accuracies[i]));
    }

    Figure {
        rows: 1,
        cols: 2,
        panels: vec![loss_panel, acc_panel],
    }
}

fn compose_grid(request: &PlotRequest) -> Figure {
    let mut panels = Vec::with_capacity(request.titles.len() * 2);

    for (i, title) in request.titles.iter().enumerate() {
        let mut loss_panel = Panel::new(format!("Loss of {}", title), "Epoch", "Loss");
        loss_panel
            .series
            .push(Series::from_epochs(title.clone(), &request.losses[i]));

        let mut acc_panel = Panel::new(format!("Accuracy of {}", title), "Epoch", "Accuracy");
        acc_panel
            .series
            .push(Series::from_epochs(title.clone(), &request.accuracies[i]));
        acc_panel.marker = request.marker_for(i);

        panels.push(loss_panel);
        panels.push(acc_panel);
    }

    Figure {
        rows: request.titles.len(),
        cols: 2,
        panels,
    }
}

/// Single-panel figure for the semi-supervised sweep: final accuracy of the
/// semi-supervised method and the supervised baseline against the number of
/// training images.
pub fn compose_semi(
    num_images: &[f32],
    semi_final_acc: &[f32],
    supervised_final_acc: &[f32],
) -> Figure {
    let mut panel = Panel::new(
        "Comparison Semi-supervised and supervised NIN".to_string(),
        "Number of Images used for Training",
        "Accuracy",
    );
    panel.legend = true;
    panel.series.push(Series {
        label: "semi-supervised".to_string(),
        points: num_images
            .iter()
            .zip(semi_final_acc.iter())
            .map(|(&x, &y)| (x, y))
            .collect(),
    });
    panel.series.push(Series {
        label: "supervised NIN".to_string(),
        points: num_images
            .iter()
            .zip(supervised_final_acc.iter())
            .map(|(&x, &y)| (x, y))
            .collect(),
    });

    Figure {
        rows: 1,
        cols: 1,
        panels: vec![panel],
    }
}

/// Peak of an accuracy sequence as a marker point (epoch, value).
/// The first occurrence wins on ties. Empty sequences have no peak.
pub fn best_point(accuracy: &[f32]) -> Option<(f32, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in accuracy.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, v)| ((i + 1) as f32, v))
}
