//! Rock strength profiles: point load index and UCS against elevation.

use crate::figure::{Axis, Dash, Figure, Trace};
use gi_model::{format_value, RockResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Strength class at and above each threshold, weakest first.
pub const STRENGTH_LABELS: [&str; 6] = ["VL", "L", "M", "H", "VH", "EH"];
/// Class below the lowest threshold.
pub const BELOW_LOWEST_LABEL: &str = "EL";
pub const IS50_THRESHOLDS_MPA: [f64; 6] = [0.03, 0.1, 0.3, 1.0, 3.0, 10.0];
pub const UCS_THRESHOLDS_MPA: [f64; 6] = [0.6, 2.0, 6.0, 20.0, 60.0, 200.0];
/// Margin added above and below the plotted elevations (m).
pub const ELEVATION_MARGIN_M: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthTest {
    Is50,
    Ucs,
}

impl StrengthTest {
    pub fn thresholds(self) -> &'static [f64; 6] {
        match self {
            StrengthTest::Is50 => &IS50_THRESHOLDS_MPA,
            StrengthTest::Ucs => &UCS_THRESHOLDS_MPA,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            StrengthTest::Is50 => "Is50",
            StrengthTest::Ucs => "UCS",
        }
    }

    pub fn value(self, result: &RockResult) -> Option<f64> {
        match self {
            StrengthTest::Is50 => result.is50,
            StrengthTest::Ucs => result.ucs,
        }
    }
}

/// Strength class of `value` against `thresholds`.
pub fn strength_class(value: f64, thresholds: &[f64; 6]) -> &'static str {
    thresholds
        .iter()
        .zip(STRENGTH_LABELS)
        .rev()
        .find(|(t, _)| value >= **t)
        .map(|(_, label)| label)
        .unwrap_or(BELOW_LOWEST_LABEL)
}

pub fn factored_pli(is50: f64, factor: f64) -> f64 {
    is50 * factor
}

/// Lowest and highest elevation widened by [`ELEVATION_MARGIN_M`].
pub fn elevation_bounds<I: IntoIterator<Item = f64>>(elevations: I) -> Option<(f64, f64)> {
    elevations
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, e| match acc {
            Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
            None => Some((e, e)),
        })
        .map(|(lo, hi)| (lo - ELEVATION_MARGIN_M, hi + ELEVATION_MARGIN_M))
}

/// PLI-to-UCS factor per geology unit. Units without an entry use 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitFactors(BTreeMap<String, f64>);

impl UnitFactors {
    pub fn get(&self, unit: &str) -> f64 {
        self.0.get(unit).copied().unwrap_or(1.0)
    }

    pub fn set(&mut self, unit: impl Into<String>, factor: f64) {
        self.0.insert(unit.into(), factor);
    }
}

impl FromIterator<(String, f64)> for UnitFactors {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A rock result with its strength classes, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthRow {
    pub id: String,
    pub from: f64,
    pub to: f64,
    pub elevation: f64,
    pub geology_unit: String,
    pub is50: Option<f64>,
    pub is50_class: Option<&'static str>,
    pub factored_pli: Option<f64>,
    pub ucs: Option<f64>,
    pub ucs_class: Option<&'static str>,
}

pub fn strength_rows(results: &[RockResult], factors: &UnitFactors) -> Vec<StrengthRow> {
    results
        .iter()
        .map(|r| StrengthRow {
            id: r.id.clone(),
            from: r.from,
            to: r.to,
            elevation: r.elevation,
            geology_unit: r.geology_unit.clone(),
            is50: r.is50,
            is50_class: r.is50.map(|v| strength_class(v, &IS50_THRESHOLDS_MPA)),
            factored_pli: r.is50.map(|v| factored_pli(v, factors.get(&r.geology_unit))),
            ucs: r.ucs,
            ucs_class: r.ucs.map(|v| strength_class(v, &UCS_THRESHOLDS_MPA)),
        })
        .collect()
}

fn sample_label(r: &RockResult) -> String {
    format!("{}: {} - {}m", r.id, format_value(r.from), format_value(r.to))
}

/// Dashed red verticals at each class threshold, spanning `bounds`.
fn threshold_lines(thresholds: &[f64; 6], bounds: (f64, f64), named: bool) -> Vec<Trace> {
    thresholds
        .iter()
        .zip(STRENGTH_LABELS)
        .map(|(&value, label)| {
            let name = if named {
                format!("{} ({} MPa)", label, value)
            } else {
                label.to_string()
            };
            Trace::line(name, vec![value, value], vec![bounds.0, bounds.1])
                .colored("red")
                .dashed(Dash::Dash)
                .hidden_from_legend()
        })
        .collect()
}

/// Elevation profile of one strength test for `unit`. `None` when no result
/// in `results` reports that test.
pub fn strength_figure(unit: &str, results: &[&RockResult], test: StrengthTest) -> Option<Figure> {
    let rows: Vec<(&RockResult, f64)> = results
        .iter()
        .filter_map(|r| test.value(r).map(|v| (*r, v)))
        .collect();
    let bounds = elevation_bounds(rows.iter().map(|(r, _)| r.elevation))?;

    let name = test.short_name();
    let mut fig = Figure::new(
        format!("Elevation vs {}: {}", name, unit),
        Axis::linear(format!("{} (MPa)", name)),
        Axis::linear("Elevation (m AHD)"),
    );
    for (r, value) in &rows {
        let mut trace = Trace::markers(sample_label(r), vec![*value], vec![r.elevation])
            .hidden_from_legend();
        trace.symbol = Some("circle".to_string());
        trace.hover_text = vec![format!(
            "{}<br>{}: {} MPa",
            sample_label(r),
            name,
            format_value(*value)
        )];
        fig.traces.push(trace);
    }
    fig.traces
        .extend(threshold_lines(test.thresholds(), bounds, true));
    Some(fig)
}

/// Factored point load index and UCS for `unit` on one strength axis.
/// `None` when `results` is empty.
pub fn factored_figure(unit: &str, results: &[&RockResult], factor: f64) -> Option<Figure> {
    let bounds = elevation_bounds(results.iter().map(|r| r.elevation))?;
    let factor_text = format_value(factor);

    let mut fig = Figure::new(
        format!("{} x PLI × UCS vs Elevation - {}", factor_text, unit),
        Axis::linear("Strength (MPa)"),
        Axis::linear("Elevation (m AHD)"),
    );

    let pli: Vec<&RockResult> = results.iter().copied().filter(|r| r.is50.is_some()).collect();
    let mut pli_trace = Trace::markers(
        format!("{} x PLI", factor_text),
        pli.iter()
            .filter_map(|r| r.is50.map(|v| factored_pli(v, factor)))
            .collect(),
        pli.iter().map(|r| r.elevation).collect(),
    )
    .colored("blue");
    pli_trace.symbol = Some("circle".to_string());
    pli_trace.hover_text = pli.iter().map(|r| sample_label(r)).collect();

    let ucs: Vec<&RockResult> = results.iter().copied().filter(|r| r.ucs.is_some()).collect();
    let mut ucs_trace = Trace::markers(
        "UCS",
        ucs.iter().filter_map(|r| r.ucs).collect(),
        ucs.iter().map(|r| r.elevation).collect(),
    )
    .colored("green");
    ucs_trace.symbol = Some("square".to_string());
    ucs_trace.hover_text = ucs.iter().map(|r| sample_label(r)).collect();

    fig.traces.push(pli_trace);
    fig.traces.push(ucs_trace);
    fig.traces
        .extend(threshold_lines(&UCS_THRESHOLDS_MPA, bounds, false));
    Some(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(id: &str, elevation: f64, is50: Option<f64>, ucs: Option<f64>) -> RockResult {
        RockResult {
            id: id.to_string(),
            from: 6.0,
            to: 6.5,
            elevation,
            is50,
            ucs,
            geology_unit: "Sandstone".to_string(),
        }
    }

    #[test]
    fn classes_follow_lower_thresholds() {
        assert_eq!(strength_class(0.01, &IS50_THRESHOLDS_MPA), "EL");
        assert_eq!(strength_class(0.03, &IS50_THRESHOLDS_MPA), "VL");
        assert_eq!(strength_class(0.5, &IS50_THRESHOLDS_MPA), "M");
        assert_eq!(strength_class(15.0, &IS50_THRESHOLDS_MPA), "EH");
        assert_eq!(strength_class(25.0, &UCS_THRESHOLDS_MPA), "H");
        assert_eq!(strength_class(0.5, &UCS_THRESHOLDS_MPA), "EL");
    }

    #[test]
    fn bounds_pad_by_five_metres() {
        assert_eq!(elevation_bounds([41.8, 38.0, 44.5]), Some((33.0, 49.5)));
        assert_eq!(elevation_bounds(Vec::<f64>::new()), None);
    }

    #[test]
    fn factors_default_to_one() {
        let mut factors = UnitFactors::default();
        factors.set("Sandstone", 20.0);
        assert_eq!(factors.get("Sandstone"), 20.0);
        assert_eq!(factors.get("Siltstone"), 1.0);

        let rows = strength_rows(&[rock("BH02", 41.8, Some(1.5), None)], &factors);
        assert_eq!(rows[0].factored_pli, Some(30.0));
        assert_eq!(rows[0].is50_class, Some("H"));
        assert_eq!(rows[0].ucs_class, None);
    }

    #[test]
    fn strength_figure_skips_rows_without_the_test() {
        let a = rock("BH02", 41.8, Some(1.35), None);
        let b = rock("BH03", 38.0, None, Some(22.5));
        let fig = strength_figure("Sandstone", &[&a, &b], StrengthTest::Is50).unwrap();

        assert_eq!(fig.title, "Elevation vs Is50: Sandstone");
        assert_eq!(fig.y_axis.title, "Elevation (m AHD)");
        // one sample plus six threshold lines
        assert_eq!(fig.traces.len(), 7);
        assert_eq!(fig.traces[0].name, "BH02: 6.0 - 6.5m");
        assert_eq!(fig.traces[1].name, "VL (0.03 MPa)");
        assert_eq!(fig.traces[4].name, "H (1 MPa)");
        assert_eq!(fig.traces[1].y, vec![36.8, 46.8]);

        assert!(strength_figure("Sandstone", &[&a], StrengthTest::Ucs).is_none());
    }

    #[test]
    fn factored_figure_scales_pli() {
        let a = rock("BH02", 41.8, Some(1.5), Some(25.0));
        let b = rock("BH03", 38.0, None, Some(22.5));
        let fig = factored_figure("Sandstone", &[&a, &b], 20.0).unwrap();

        assert_eq!(fig.title, "20.0 x PLI × UCS vs Elevation - Sandstone");
        assert_eq!(fig.traces[0].name, "20.0 x PLI");
        assert_eq!(fig.traces[0].x, vec![30.0]);
        assert_eq!(fig.traces[1].x, vec![25.0, 22.5]);
        assert_eq!(fig.traces[2].y, vec![33.0, 46.8]);
        assert!(factored_figure("Sandstone", &[], 1.0).is_none());
    }
}
