use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use senti_core::{Category, Error, Result};

use crate::chart::BarChart;

/// Drawing surface charts are bound to.
pub trait ChartCanvas: Send + Sync {
    /// Bind a newly created chart to the canvas named by its `canvas_id`.
    fn attach(&self, chart: &BarChart) -> Result<()>;

    /// Redraw a chart whose data was changed in place.
    fn refresh(&self, chart: &BarChart) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    Attach,
    Refresh,
}

#[derive(Debug, Clone)]
pub struct CanvasEvent {
    pub op: CanvasOp,
    pub chart: BarChart,
}

/// Records every draw call. Only canvases registered up front can be drawn on.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    canvases: HashSet<String>,
    events: Mutex<Vec<CanvasEvent>>,
}

impl MemoryCanvas {
    pub fn new<I, S>(canvases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canvases: canvases.into_iter().map(Into::into).collect(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Canvases for the three feed categories.
    pub fn sentiment_canvases() -> Self {
        Self::new(Category::ALL.iter().map(|c| c.as_str()))
    }

    pub fn events(&self) -> Vec<CanvasEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn attach_count(&self, canvas_id: &str) -> usize {
        self.count(canvas_id, CanvasOp::Attach)
    }

    pub fn refresh_count(&self, canvas_id: &str) -> usize {
        self.count(canvas_id, CanvasOp::Refresh)
    }

    /// Last drawn state of a canvas
    pub fn last_drawn(&self, canvas_id: &str) -> Option<BarChart> {
        self.events()
            .into_iter()
            .rev()
            .find(|e| e.chart.canvas_id == canvas_id)
            .map(|e| e.chart)
    }

    fn count(&self, canvas_id: &str, op: CanvasOp) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| e.op == op && e.chart.canvas_id == canvas_id)
            .count()
    }

    fn record(&self, op: CanvasOp, chart: &BarChart) -> Result<()> {
        if !self.canvases.contains(&chart.canvas_id) {
            return Err(Error::MissingElement(chart.canvas_id.clone()));
        }
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(CanvasEvent {
                op,
                chart: chart.clone(),
            });
        Ok(())
    }
}

impl ChartCanvas for MemoryCanvas {
    fn attach(&self, chart: &BarChart) -> Result<()> {
        self.record(CanvasOp::Attach, chart)
    }

    fn refresh(&self, chart: &BarChart) -> Result<()> {
        self.record(CanvasOp::Refresh, chart)
    }
}

const BAR_WIDTH: usize = 40;

/// Draws charts as horizontal text bars.
pub struct TextCanvas<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn draw(&self, chart: &BarChart) -> Result<()> {
        let values = chart.values();
        let max = values.iter().cloned().fold(0.0_f64, f64::max);
        let label_width = chart.labels().iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let precision = chart.options.scales.y.precision as usize;
        let dataset = chart
            .data
            .datasets
            .first()
            .map(|d| d.label.as_str())
            .unwrap_or_default();

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{} ({}, rev {})", chart.canvas_id, dataset, chart.revision)?;
        for (label, &value) in chart.labels().iter().zip(values) {
            // Bars start at zero, negative values draw empty.
            let len = if max > 0.0 {
                ((value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                out,
                "  {:<width$} | {} {:.prec$}",
                label,
                "#".repeat(len),
                value,
                width = label_width,
                prec = precision
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> ChartCanvas for TextCanvas<W> {
    fn attach(&self, chart: &BarChart) -> Result<()> {
        self.draw(chart)
    }

    fn refresh(&self, chart: &BarChart) -> Result<()> {
        self.draw(chart)
    }
}
