//! Particle size distribution: gravel/sand/fines split and grading curves.

use crate::figure::{Annotation, Axis, Dash, Figure, Mode, Shape, Trace};
use gi_model::color::DARK24;
use gi_model::{format_value, PsdSample};
use serde::Serialize;

/// Sieve separating gravel from sand (mm).
pub const GRAVEL_SAND_SIEVE_MM: f64 = 2.36;
/// Sieve separating sand from fines (mm).
pub const SAND_FINES_SIEVE_MM: f64 = 0.075;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fraction {
    Gravel,
    Sand,
    Fines,
}

impl Fraction {
    pub const ALL: [Fraction; 3] = [Fraction::Gravel, Fraction::Sand, Fraction::Fines];

    /// Particle size range in mm, smallest first.
    pub fn range(self) -> (f64, f64) {
        match self {
            Fraction::Gravel => (GRAVEL_SAND_SIEVE_MM, 63.0),
            Fraction::Sand => (SAND_FINES_SIEVE_MM, GRAVEL_SAND_SIEVE_MM),
            Fraction::Fines => (0.001, SAND_FINES_SIEVE_MM),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fraction::Gravel => "Gravel (2.36-63mm)",
            Fraction::Sand => "Sand (0.075-2.36mm)",
            Fraction::Fines => "Fines(<0.075mm)",
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Fraction::Gravel => "lightgray",
            Fraction::Sand => "lightyellow",
            Fraction::Fines => "lightblue",
        }
    }

    /// Centre of the range on a log axis, as an exponent.
    pub fn label_x(self) -> f64 {
        let (lo, hi) = self.range();
        (lo.log10() + hi.log10()) * 0.5
    }
}

/// Gravel, sand and fines content of one sample (%).
///
/// All three are `None` unless both the 2.36 mm and the 0.075 mm sieves were
/// reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsdContents {
    pub id: String,
    pub from: f64,
    pub to: f64,
    pub geology_unit: String,
    pub gravel: Option<f64>,
    pub sand: Option<f64>,
    pub fines: Option<f64>,
}

pub fn psd_contents(sample: &PsdSample) -> PsdContents {
    let split = sample
        .passing_at(GRAVEL_SAND_SIEVE_MM)
        .zip(sample.passing_at(SAND_FINES_SIEVE_MM));
    let (gravel, sand, fines) = match split {
        Some((p_gravel, p_sand)) => (Some(100.0 - p_gravel), Some(p_gravel - p_sand), Some(p_sand)),
        None => (None, None, None),
    };
    PsdContents {
        id: sample.id.clone(),
        from: sample.from,
        to: sample.to,
        geology_unit: sample.geology_unit.clone(),
        gravel,
        sand,
        fines,
    }
}

/// Table cell for a content percentage: one decimal place, blank when unknown.
pub fn format_percent(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_default()
}

/// Legend name of a grading curve: `ID@Fromm`.
pub fn curve_name(sample: &PsdSample) -> String {
    format!("{}@{}m", sample.id, format_value(sample.from))
}

/// Labelled decades of the particle size axis (mm).
pub fn major_ticks() -> Vec<f64> {
    vec![0.001, 0.01, 0.1, 1.0, 10.0, 100.0]
}

/// 2 to 9 times each decade from 0.001 mm to 10 mm, drawn as minor gridlines.
pub fn minor_ticks() -> Vec<f64> {
    let mut ticks = Vec::with_capacity(40);
    for decade in [0.001, 0.01, 0.1, 1.0, 10.0] {
        for m in 2..=9 {
            ticks.push(m as f64 * decade);
        }
    }
    ticks
}

/// Grading curves of `samples`, all from `unit`.
pub fn psd_figure(unit: &str, samples: &[&PsdSample]) -> Figure {
    let ticks = major_ticks();
    let x_axis = Axis {
        title: "Particle Size (mm)".to_string(),
        log: true,
        range: Some([-3.0, 2.0]),
        tick_text: ticks.iter().map(|t| t.to_string()).collect(),
        tick_vals: ticks,
        dtick: None,
    };
    let y_axis = Axis::linear("Percentage Passing (%)").with_range(0.0, 100.0);
    let mut fig = Figure::new(
        format!("Particle Size Distribution (PSD) Curves for {}", unit),
        x_axis,
        y_axis,
    );
    fig.legend_title = Some("Borehole ID".to_string());

    for (i, sample) in samples.iter().enumerate() {
        let mut trace = Trace::markers(
            curve_name(sample),
            sample.passing.iter().map(|s| s.size_mm).collect(),
            sample.passing.iter().map(|s| s.percent).collect(),
        )
        .colored(DARK24[i % DARK24.len()]);
        trace.mode = Mode::LinesMarkers;
        trace.marker_size = 6;
        fig.traces.push(trace);
    }

    for tick in minor_ticks() {
        fig.shapes.push(Shape::Line {
            x0: tick,
            x1: tick,
            y0: 0.0,
            y1: 100.0,
            color: "lightgray".to_string(),
            width: 0.5,
            dash: Dash::Dot,
            below: true,
        });
    }
    for fraction in Fraction::ALL {
        let (lo, hi) = fraction.range();
        fig.shapes.push(Shape::Rect {
            x0: lo,
            x1: hi,
            y0: 0.0,
            y1: 10.0,
            fill: fraction.fill().to_string(),
            opacity: 0.3,
        });
        fig.annotations
            .push(Annotation::new(fraction.label_x(), 5.0, fraction.label()));
    }
    log::info!(
        "[GI] lab: PSD figure for '{}' with {} curves",
        unit,
        fig.traces.len()
    );
    fig
}
