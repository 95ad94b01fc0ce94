use crate::domain::forecast::{ProfileAxis, Ticker};
use serde::Serialize;

/// Number of trailing rows shown in the sparkline.
pub const SPARKLINE_WINDOW: usize = 20;

/// Value Object - real vs. predicted price for one day; gaps stay `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: String,
    pub real: Option<f64>,
    pub predicted: Option<f64>,
}

/// Value Object - sparkline sample positioned by its index in the window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkPoint {
    pub index: usize,
    pub date: String,
    pub real: Option<f64>,
}

/// Value Object - daily error bar; missing errors plot as zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPoint {
    pub date: String,
    pub error: f64,
    pub hit: u8,
}

/// Value Object - one bar group of the cross-company chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub ticker: Ticker,
    pub hit_rate_pct: f64,
    pub mean_error_pct: f64,
    pub has_data: bool,
}

/// Value Object - one radar spoke
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub axis: ProfileAxis,
    pub label: String,
    pub value: f64,
}

/// Value Object - drawing area for SVG charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 640.0, height: 260.0, padding: 24.0 }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}
