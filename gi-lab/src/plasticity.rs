//! Casagrande plasticity chart.
//!
//! The A-line `PI = 0.73 (LL - 20)` separates clays (above) from silts
//! (below); the U-line `PI = 0.9 (LL - 8)` is the upper bound of natural
//! soils. Liquid limits of 35 and 50 split low, intermediate and high
//! plasticity.

use crate::figure::{linspace, Annotation, Axis, Dash, Figure, Shape, Trace};
use gi_model::{format_value, AtterbergResult};
use serde::Serialize;

/// Liquid limit where the A-line reaches `PI = 4`.
pub const A_LINE_START_LL: f64 = 4.0 / 0.73 + 20.0;
/// Liquid limit where the U-line reaches `PI = 7.5`.
pub const U_LINE_START_LL: f64 = 7.5 / 0.9 + 8.0;
/// Points drawn along each classification line.
pub const LINE_POINTS: usize = 200;

pub const LOW_INTERMEDIATE_LL: f64 = 35.0;
pub const INTERMEDIATE_HIGH_LL: f64 = 50.0;

pub fn a_line(ll: f64) -> f64 {
    0.73 * (ll - 20.0)
}

pub fn u_line(ll: f64) -> f64 {
    0.9 * (ll - 8.0)
}

/// `(LL, PI)` points of the A-line from its start to `LL = 100`.
pub fn a_line_points() -> (Vec<f64>, Vec<f64>) {
    let ll = linspace(A_LINE_START_LL, 100.0, LINE_POINTS);
    let pi = ll.iter().map(|&v| a_line(v)).collect();
    (ll, pi)
}

/// `(LL, PI)` points of the U-line from its start to `LL = 100`.
pub fn u_line_points() -> (Vec<f64>, Vec<f64>) {
    let ll = linspace(U_LINE_START_LL, 100.0, LINE_POINTS);
    let pi = ll.iter().map(|&v| u_line(v)).collect();
    (ll, pi)
}

/// Zone labels and where they are printed on the chart.
pub const ZONE_LABELS: [(f64, f64, &str); 6] = [
    (70.0, 45.0, "MH or OH"),
    (80.0, 20.0, "CH or OH"),
    (43.0, 24.0, "CI or OI"),
    (29.0, 14.0, "CL or OL"),
    (40.0, 5.0, "CL - ML"),
    (17.0, 6.0, "ML or OL"),
];

/// Soil group of a plotted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlasticityClass {
    #[serde(rename = "CL-ML")]
    ClayeySilt,
    CL,
    CI,
    CH,
    ML,
    MI,
    MH,
    /// Above the U-line; usually a data entry error
    #[serde(rename = "above U-line")]
    AboveULine,
}

impl PlasticityClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PlasticityClass::ClayeySilt => "CL-ML",
            PlasticityClass::CL => "CL",
            PlasticityClass::CI => "CI",
            PlasticityClass::CH => "CH",
            PlasticityClass::ML => "ML",
            PlasticityClass::MI => "MI",
            PlasticityClass::MH => "MH",
            PlasticityClass::AboveULine => "above U-line",
        }
    }
}

/// Classify a liquid limit / plasticity index pair by chart zone.
pub fn classify(ll: f64, pi: f64) -> PlasticityClass {
    if pi > u_line(ll) && pi > 7.5 {
        return PlasticityClass::AboveULine;
    }
    let above_a_line = pi >= a_line(ll) && pi >= 4.0;
    if above_a_line && pi <= 7.5 && ll < LOW_INTERMEDIATE_LL {
        return PlasticityClass::ClayeySilt;
    }
    match (above_a_line, ll) {
        (true, ll) if ll < LOW_INTERMEDIATE_LL => PlasticityClass::CL,
        (true, ll) if ll <= INTERMEDIATE_HIGH_LL => PlasticityClass::CI,
        (true, _) => PlasticityClass::CH,
        (false, ll) if ll < LOW_INTERMEDIATE_LL => PlasticityClass::ML,
        (false, ll) if ll <= INTERMEDIATE_HIGH_LL => PlasticityClass::MI,
        (false, _) => PlasticityClass::MH,
    }
}

/// An Atterberg result with its chart zone, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedResult {
    pub id: String,
    pub from: f64,
    pub liquid_limit: f64,
    pub plasticity_index: f64,
    pub geology_unit: String,
    pub class: PlasticityClass,
}

impl From<&AtterbergResult> for ClassifiedResult {
    fn from(r: &AtterbergResult) -> Self {
        Self {
            id: r.id.clone(),
            from: r.from,
            liquid_limit: r.liquid_limit,
            plasticity_index: r.plasticity_index,
            geology_unit: r.geology_unit.clone(),
            class: classify(r.liquid_limit, r.plasticity_index),
        }
    }
}

pub fn hover_text(result: &AtterbergResult) -> String {
    format!(
        "<b>ID:</b> {} ({}m)<br>LL: {:.1}<br>PI: {:.1}",
        result.id,
        format_value(result.from),
        result.liquid_limit,
        result.plasticity_index
    )
}

/// Plasticity chart of `results`, one marker trace per unit in `units` order.
pub fn plasticity_figure(results: &[AtterbergResult], units: &[String]) -> Figure {
    let mut fig = Figure::new(
        "Casagrande Plasticity Chart",
        Axis::linear("Liquid Limit (%)")
            .with_range(0.0, 100.0)
            .with_dtick(10.0),
        Axis::linear("Plasticity Index (%)").with_range(0.0, 80.0),
    );

    for unit in units {
        let rows: Vec<&AtterbergResult> =
            results.iter().filter(|r| &r.geology_unit == unit).collect();
        let mut trace = Trace::markers(
            unit.clone(),
            rows.iter().map(|r| r.liquid_limit).collect(),
            rows.iter().map(|r| r.plasticity_index).collect(),
        );
        trace.opacity = 0.6;
        trace.hover_text = rows.iter().map(|r| hover_text(r)).collect();
        fig.traces.push(trace);
    }

    let (a_ll, a_pi) = a_line_points();
    let (u_ll, u_pi) = u_line_points();
    fig.traces.push(Trace::line("A-line", a_ll, a_pi).colored("black"));
    fig.traces.push(
        Trace::line("U-line", u_ll, u_pi)
            .colored("black")
            .dashed(Dash::Dot),
    );
    fig.traces.push(
        Trace::line("PI = 7.5", vec![0.0, 7.5 / 0.73 + 20.0], vec![7.5, 7.5])
            .colored("black")
            .dashed(Dash::Dot),
    );
    fig.traces.push(
        Trace::line("PI = 4", vec![0.0, A_LINE_START_LL], vec![4.0, 4.0])
            .colored("black")
            .dashed(Dash::Dot),
    );

    let divider = |x: f64, y0: f64, y1: f64| Shape::Line {
        x0: x,
        x1: x,
        y0,
        y1,
        color: "black".to_string(),
        width: 1.0,
        dash: Dash::Solid,
        below: false,
    };
    fig.shapes.push(divider(
        LOW_INTERMEDIATE_LL,
        a_line(LOW_INTERMEDIATE_LL),
        u_line(LOW_INTERMEDIATE_LL),
    ));
    fig.shapes
        .push(divider(INTERMEDIATE_HIGH_LL, 0.0, u_line(INTERMEDIATE_HIGH_LL)));

    for (x, y, text) in ZONE_LABELS {
        fig.annotations.push(Annotation::new(x, y, text));
    }
    fig.annotations.push(Annotation {
        angle: -42.5,
        ..Annotation::new(90.0, a_line(90.0) - 2.0, "A-line")
    });
    fig.annotations.push(Annotation {
        angle: -45.5,
        ..Annotation::new(60.0, u_line(60.0) + 2.0, "U-line")
    });
    fig
}
