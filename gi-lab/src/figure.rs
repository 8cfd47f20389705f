//! Renderer-neutral 2D figure description.
//!
//! Each lab chart is built as one [`Figure`] and handed to the chart script
//! as JSON. Annotation coordinates on a log axis are exponents (`log10` of
//! the data value), the same convention Plotly uses.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dot,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: String,
    pub log: bool,
    /// Fixed range; `None` autoscales. On a log axis the bounds are exponents.
    pub range: Option<[f64; 2]>,
    pub tick_vals: Vec<f64>,
    pub tick_text: Vec<String>,
    pub dtick: Option<f64>,
}

impl Axis {
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            log: false,
            range: None,
            tick_vals: Vec::new(),
            tick_text: Vec::new(),
            dtick: None,
        }
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some([lo, hi]);
        self
    }

    pub fn with_dtick(mut self, dtick: f64) -> Self {
        self.dtick = Some(dtick);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub name: String,
    pub mode: Mode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Option<String>,
    pub dash: Dash,
    /// Plotly marker symbol, e.g. `circle` or `square`
    pub symbol: Option<String>,
    pub marker_size: u32,
    pub opacity: f64,
    /// One label per point; empty uses the renderer's default hover
    pub hover_text: Vec<String>,
    pub show_legend: bool,
}

impl Trace {
    pub fn markers(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            mode: Mode::Markers,
            x,
            y,
            color: None,
            dash: Dash::Solid,
            symbol: None,
            marker_size: 8,
            opacity: 1.0,
            hover_text: Vec::new(),
            show_legend: true,
        }
    }

    pub fn line(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            mode: Mode::Lines,
            ..Self::markers(name, x, y)
        }
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn dashed(mut self, dash: Dash) -> Self {
        self.dash = dash;
        self
    }

    pub fn hidden_from_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// Shaded box drawn below the traces
    #[serde(rename_all = "camelCase")]
    Rect {
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        fill: String,
        opacity: f64,
    },
    #[serde(rename_all = "camelCase")]
    Line {
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        color: String,
        width: f64,
        dash: Dash,
        /// Drawn below the traces (gridlines) rather than above
        below: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Text rotation in degrees
    pub angle: f64,
}

impl Annotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_title: Option<String>,
    pub traces: Vec<Trace>,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
}

impl Figure {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            legend_title: None,
            traces: Vec::new(),
            shapes: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
