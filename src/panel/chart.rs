//! Chart description handed to the bar renderer
//!
//! Labels, dataset names and colors are fixed; only the values come from the
//! filtered series.

use ratatui::style::Color;

use crate::data::SeriesPair;

/// Category axis labels
pub const CHART_LABELS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// Maximum chart size in terminal cells
pub const CHART_WIDTH: u16 = 96;
pub const CHART_HEIGHT: u16 = 20;

const DATASET_ONE_LABEL: &str = "Dataset 1";
const DATASET_ONE_COLOR: Color = Color::Rgb(255, 99, 132);
const DATASET_TWO_LABEL: &str = "Dataset 2";
const DATASET_TWO_COLOR: Color = Color::Rgb(54, 162, 235);

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub width: u16,
    pub height: u16,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSpec {
    pub fn from_pair(pair: &SeriesPair) -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            labels: CHART_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![
                ChartDataset {
                    label: DATASET_ONE_LABEL.to_string(),
                    data: pair.dataset_one.clone(),
                    background_color: DATASET_ONE_COLOR,
                },
                ChartDataset {
                    label: DATASET_TWO_LABEL.to_string(),
                    data: pair.dataset_two.clone(),
                    background_color: DATASET_TWO_COLOR,
                },
            ],
        }
    }

    /// Values drawn in the group at `label_index`, one per dataset that has one
    pub fn group_values(&self, label_index: usize) -> Vec<(&ChartDataset, f64)> {
        self.datasets
            .iter()
            .filter_map(|dataset| dataset.data.get(label_index).map(|v| (dataset, *v)))
            .collect()
    }
}

/// Height of the tallest bar; every bar is scaled into `0..=BAR_SCALE`
pub const BAR_SCALE: u64 = 1000;

impl ChartSpec {
    /// Largest finite positive value across all datasets
    pub fn max_value(&self) -> Option<f64> {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .filter(|v| v.is_finite() && *v > 0.0)
            .reduce(f64::max)
    }
}

/// Bar height for `value` relative to `max`; bars cannot go below the axis
pub fn bar_height(value: f64, max: Option<f64>) -> u64 {
    match max {
        Some(max) if value.is_finite() && value > 0.0 => {
            ((value / max).min(1.0) * BAR_SCALE as f64).round() as u64
        }
        _ => 0,
    }
}
