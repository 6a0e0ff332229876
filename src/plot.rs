//// # Plot
////
//// Everything a plotting backend needs to draw a result: the density curve
//// around the mean, which samples fall in the queried area, and the vertical
//// lines marking the operands. Nothing in here touches pixels.

use crate::evaluate::DistributionParameters;
use crate::query::*;
use anyhow::{ensure, Result};

pub const TITLE: &str = "Normal Distribution";
pub const X_LABEL: &str = "X Values";
pub const Y_LABEL: &str = "Probability Density";
pub const CURVE_COLOR: &str = "#007ACC";
const TAIL_COLOR: &str = "#FFA07A";
const INTERVAL_COLOR: &str = "#FFD700";

/// How the density curve is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSettings {
    samples: usize,
    span: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            samples: 1000,
            span: 4.0,
        }
    }
}

impl PlotSettings {
    /// `samples` points are spread over `mean ± span·σ`, both ends included.
    pub fn new(samples: usize, span: f64) -> Result<Self> {
        ensure!(samples >= 2, "the curve needs at least 2 samples, got {}", samples);
        ensure!(
            span.is_finite() && span > 0.0,
            "the plotted span must be a positive number of standard deviations, got {}",
            span
        );
        Ok(Self { samples, span })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn span(&self) -> f64 {
        self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: &'static str,
    pub label: String,
}

/// A vertical line at one of the query operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub at: f64,
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Sample positions, increasing.
    pub xs: Vec<f64>,
    /// Density at each sample position.
    pub densities: Vec<f64>,
    /// Whether each sample lies in the area to shade.
    pub shaded: Vec<bool>,
    pub fill: Option<Fill>,
    pub markers: Vec<Marker>,
}

/// `n` evenly spaced values from `lo` to `hi`, both included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| lo + i as f64 * step).collect();
            xs[n - 1] = hi;
            xs
        }
    }
}

impl RenderRequest {
    pub fn build(params: &DistributionParameters, query: &Query, settings: &PlotSettings) -> Self {
        let normal = params.distribution();
        let (lo, hi) = normal.extent(settings.span);
        let xs = linspace(lo, hi, settings.samples);
        let densities = xs.iter().map(|&x| normal.pdf(x)).collect();

        let region = query.region();
        let shaded = xs.iter().map(|&x| region.contains(x)).collect();

        let kind = query.kind();
        let fill = match region {
            Region::Point(_) => None,
            Region::Below { .. } | Region::Above { .. } => Some(Fill {
                color: TAIL_COLOR,
                label: format!("Area {}", kind),
            }),
            Region::Between { .. } => Some(Fill {
                color: INTERVAL_COLOR,
                label: format!("Area {}", kind),
            }),
        };

        let markers = match region.thresholds() {
            (x, None) => vec![Marker {
                at: x,
                color: "red",
                label: "X Value",
            }],
            (a, Some(b)) => vec![
                Marker {
                    at: a,
                    color: "green",
                    label: "a Value",
                },
                Marker {
                    at: b,
                    color: "purple",
                    label: "b Value",
                },
            ],
        };

        Self {
            xs,
            densities,
            shaded,
            fill,
            markers,
        }
    }

    /// Legend entries, in drawing order.
    pub fn legend(&self) -> Vec<&str> {
        let mut entries = Vec::with_capacity(self.markers.len() + 1);
        if let Some(fill) = &self.fill {
            entries.push(fill.label.as_str());
        }
        for marker in &self.markers {
            entries.push(marker.label);
        }
        entries
    }
}
