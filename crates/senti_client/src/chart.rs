use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use senti_core::{CategoryResult, Error, Result};

use crate::canvas::ChartCanvas;

pub const DATASET_LABEL: &str = "Sentiment Count";

pub const BACKGROUND_COLORS: [&str; 3] = [
    "rgba(54, 162, 235, 0.9)",
    "rgba(255, 99, 132, 0.9)",
    "rgba(255, 206, 86, 0.9)",
];

pub const BORDER_COLORS: [&str; 3] = [
    "rgb(54, 162, 235)",
    "rgb(255, 99, 132)",
    "rgb(255, 206, 86)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub precision: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
}

/// A vertical bar chart bound to one canvas. Serializes to a Chart.js style
/// configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    #[serde(skip)]
    pub canvas_id: String,
    /// Bumped on every refresh after the initial draw
    #[serde(skip)]
    pub revision: u64,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl BarChart {
    /// The sentiment count chart: one dataset, fixed palette, integer y axis
    /// starting at zero.
    pub fn sentiment_counts(canvas_id: &str, labels: Vec<String>, data: Vec<f64>) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            revision: 0,
            kind: ChartKind::Bar,
            data: ChartData {
                labels,
                datasets: vec![Self::sentiment_dataset(data)],
            },
            options: ChartOptions {
                scales: Scales {
                    y: AxisOptions {
                        begin_at_zero: true,
                        precision: 0,
                    },
                },
            },
        }
    }

    fn sentiment_dataset(data: Vec<f64>) -> Dataset {
        Dataset {
            label: DATASET_LABEL.to_string(),
            data,
            background_color: BACKGROUND_COLORS.iter().map(|c| c.to_string()).collect(),
            border_color: BORDER_COLORS.iter().map(|c| c.to_string()).collect(),
            border_width: 1,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Data of the first dataset
    pub fn values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }

    /// Background and border color of the bar at `index`; the palette repeats.
    pub fn colors_for(&self, index: usize) -> (&str, &str) {
        match self.data.datasets.first() {
            Some(d) if !d.background_color.is_empty() && !d.border_color.is_empty() => (
                &d.background_color[index % d.background_color.len()],
                &d.border_color[index % d.border_color.len()],
            ),
            _ => (
                BACKGROUND_COLORS[index % BACKGROUND_COLORS.len()],
                BORDER_COLORS[index % BORDER_COLORS.len()],
            ),
        }
    }

    fn replace_series(&mut self, labels: Vec<String>, data: Vec<f64>) {
        self.data.labels = labels;
        match self.data.datasets.first_mut() {
            Some(dataset) => dataset.data = data,
            None => self.data.datasets.push(Self::sentiment_dataset(data)),
        }
    }
}

/// Chart widgets keyed by chart id. A widget is created on first render and
/// mutated in place afterwards, never recreated.
#[derive(Debug)]
pub struct ChartRegistry<C> {
    canvas: C,
    charts: HashMap<String, BarChart>,
}

impl<C: ChartCanvas> ChartRegistry<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            charts: HashMap::new(),
        }
    }

    pub fn render(&mut self, chart_id: &str, labels: Vec<String>, data: Vec<f64>) -> Result<&BarChart> {
        CategoryResult::new(labels.clone(), data.clone())
            .validate()
            .map_err(|e| Error::Chart(format!("{}: {}", chart_id, e)))?;

        match self.charts.entry(chart_id.to_string()) {
            Entry::Occupied(entry) => {
                let chart = entry.into_mut();
                chart.replace_series(labels, data);
                chart.revision += 1;
                self.canvas.refresh(chart)?;
                Ok(chart)
            }
            Entry::Vacant(entry) => {
                let chart = BarChart::sentiment_counts(chart_id, labels, data);
                self.canvas.attach(&chart)?;
                Ok(entry.insert(chart))
            }
        }
    }

    pub fn get(&self, chart_id: &str) -> Option<&BarChart> {
        self.charts.get(chart_id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
