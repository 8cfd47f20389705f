//! Plotly trace payloads.
//!
//! The chart scripts receive one JSON document per render. Each strata
//! segment becomes its own two-point `scatter3d` line so that it keeps its
//! unit's colour and hover text; the legend toggles whole units through
//! `legendGroup`.

use gi_model::{MoisturePoint, ResolvedSegment};
use gi_strata::StrataConfig;
use serde::Serialize;

/// One vertical line segment in the strata chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrataTrace {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
    pub name: String,
    pub legend_group: String,
    pub color: String,
    pub show_legend: bool,
    pub hover_text: String,
}

impl From<&ResolvedSegment> for StrataTrace {
    fn from(segment: &ResolvedSegment) -> Self {
        Self {
            x: [segment.east, segment.east],
            y: [segment.north, segment.north],
            z: [segment.top_elevation, segment.bottom_elevation],
            name: segment.geology_unit.clone(),
            legend_group: segment.geology_unit.clone(),
            color: segment.color.to_hex(),
            show_legend: segment.show_in_legend,
            hover_text: segment.hover_text.clone(),
        }
    }
}

/// Chart-level options shared by both chart scripts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub z_title: String,
    pub line_width: u32,
}

impl ChartConfig {
    pub fn strata(config: &StrataConfig) -> Self {
        Self {
            title: "Interactive 3D Borehole Stratigraphy".to_string(),
            x_title: "Easting (m)".to_string(),
            y_title: "Northing (m)".to_string(),
            z_title: "Elevation (m AHD)".to_string(),
            line_width: config.line_width,
        }
    }

    pub fn moisture() -> Self {
        Self {
            title: "3D Moisture Content Heatmap".to_string(),
            x_title: "Easting (m)".to_string(),
            y_title: "Northing (m)".to_string(),
            z_title: "Elevation (m AHD)".to_string(),
            line_width: 0,
        }
    }
}

pub fn strata_traces(segments: &[ResolvedSegment]) -> Vec<StrataTrace> {
    segments.iter().map(StrataTrace::from).collect()
}

/// Column-oriented marker data for the moisture heatmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoistureTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Marker colour values (%), mapped through the colour scale
    pub values: Vec<f64>,
    pub hover_text: Vec<String>,
}

pub fn moisture_trace<'a, I>(points: I) -> MoistureTrace
where
    I: IntoIterator<Item = &'a MoisturePoint>,
{
    let mut trace = MoistureTrace::default();
    for p in points {
        trace.x.push(p.east);
        trace.y.push(p.north);
        trace.z.push(p.sample_elevation);
        trace.values.push(p.moisture_content);
        trace.hover_text.push(p.hover_text.clone());
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use gi_model::{Color, Point, StrataInterval};
    use gi_strata::{render, StrataInputs, StrataSession};

    #[test]
    fn strata_trace_is_a_vertical_line() {
        let points = vec![Point::new("P1", 10.0, 20.0, 100.0)];
        let strata = vec![StrataInterval::new("P1", 0.0, 2.0, "Sand")];
        let mut session = StrataSession::default();
        session.set_color("Sand", Color::rgb(0xaa, 0xbb, 0xcc));
        let view = render(
            &StrataInputs {
                points: &points,
                strata: &strata,
                descriptors: &[],
            },
            &mut session,
        );

        let traces = strata_traces(&view.segments);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].x, [10.0, 10.0]);
        assert_eq!(traces[0].y, [20.0, 20.0]);
        assert_eq!(traces[0].z, [100.0, 98.0]);
        assert_eq!(traces[0].color, "#aabbcc");
        assert!(traces[0].show_legend);

        let json = serde_json::to_value(&traces[0]).unwrap();
        assert_eq!(json["legendGroup"], "Sand");
        assert_eq!(json["showLegend"], true);
    }

    #[test]
    fn moisture_trace_is_column_oriented() {
        let samples = vec![
            MoisturePoint {
                point_id: "BH01".to_string(),
                east: 1.0,
                north: 2.0,
                sample_elevation: 48.5,
                from: 1.5,
                to: 1.95,
                moisture_content: 18.0,
                geology_unit: "Clay".to_string(),
                hover_text: "a".to_string(),
            },
            MoisturePoint {
                point_id: "BH02".to_string(),
                east: 3.0,
                north: 4.0,
                sample_elevation: 47.0,
                from: 2.0,
                to: 2.45,
                moisture_content: 25.5,
                geology_unit: "Clay".to_string(),
                hover_text: "b".to_string(),
            },
        ];
        let trace = moisture_trace(&samples);
        assert_eq!(trace.x, vec![1.0, 3.0]);
        assert_eq!(trace.z, vec![48.5, 47.0]);
        assert_eq!(trace.values, vec![18.0, 25.5]);
        assert_eq!(trace.hover_text, vec!["a", "b"]);
    }

    #[test]
    fn chart_config_carries_line_width() {
        let config = StrataConfig {
            line_width: 4,
            ..StrataConfig::default()
        };
        let json = serde_json::to_value(ChartConfig::strata(&config)).unwrap();
        assert_eq!(json["lineWidth"], 4);
        assert_eq!(json["title"], "Interactive 3D Borehole Stratigraphy");
        assert_eq!(json["zTitle"], "Elevation (m AHD)");
    }
}
