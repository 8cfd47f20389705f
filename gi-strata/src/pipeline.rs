//! The composed strata render used by the CLI and the chart apps.

use crate::enrich::attach_descriptions;
use crate::legend::{build_legend_flags, legend_entries, LegendEntry};
use crate::resolver::{resolve, split_sub_layers, SkipCounts};
use crate::selection::{select_units, select_visible};
use crate::session::StrataSession;
use gi_model::{Point, ResolvedSegment, SoilDescriptor, StrataInterval};
use serde::Serialize;
use std::collections::BTreeSet;

/// Rows read from one workbook.
#[derive(Debug, Clone, Copy)]
pub struct StrataInputs<'a> {
    pub points: &'a [Point],
    /// All `STRATA_MAIN` rows, main and sub-layer alike
    pub strata: &'a [StrataInterval],
    pub descriptors: &'a [SoilDescriptor],
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrataView {
    /// Visible segments, coloured and legend-flagged
    pub segments: Vec<ResolvedSegment>,
    pub skipped: SkipCounts,
    pub legend: Vec<LegendEntry>,
    /// Sorted PointIDs with at least one resolved segment
    pub boreholes: Vec<String>,
    /// Sorted geology units with at least one resolved segment
    pub units: Vec<String>,
}

/// Run the full pipeline against the current session.
///
/// Resolves every row, registers the boreholes and units found with the
/// session, paints colours, then applies the borehole and unit selections
/// before flagging legend entries, so the legend only lists what is drawn.
pub fn render(inputs: &StrataInputs<'_>, session: &mut StrataSession) -> StrataView {
    let resolution = if session.sub_layers {
        let (main, sub) = split_sub_layers(inputs.strata);
        resolve(inputs.points, &main, &sub)
    } else {
        resolve(inputs.points, inputs.strata, &[])
    };

    let mut segments = resolution.segments;
    attach_descriptions(&mut segments, inputs.descriptors);

    let boreholes: BTreeSet<String> = segments.iter().map(|s| s.point_id.clone()).collect();
    let units: BTreeSet<String> = segments.iter().map(|s| s.geology_unit.clone()).collect();
    session.observe(boreholes.iter().cloned(), units.iter().cloned());

    for segment in &mut segments {
        segment.color = session.color_for(&segment.geology_unit);
    }

    let visible = select_visible(&segments, session.selected_boreholes());
    let visible = select_units(&visible, session.selected_units());
    let segments = build_legend_flags(visible);
    let legend = legend_entries(&segments);

    StrataView {
        segments,
        skipped: resolution.skipped,
        legend,
        boreholes: boreholes.into_iter().collect(),
        units: units.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gi_model::Color;

    fn points() -> Vec<Point> {
        vec![
            Point::new("BH01", 100.0, 200.0, 50.0),
            Point::new("BH02", 110.0, 205.0, 48.0),
        ]
    }

    fn strata() -> Vec<StrataInterval> {
        vec![
            StrataInterval::new("BH01", 0.0, 1.0, "Fill"),
            StrataInterval::new("BH01", 1.0, 4.0, "Clay"),
            StrataInterval::new("BH02", 0.0, 2.0, "Fill"),
            StrataInterval::new("BH02", 2.0, 6.0, "Sand"),
            StrataInterval::new("BH02", 2.0, 3.0, "Clay").into_sub_layer(),
            StrataInterval::new("BH02", 2.0, 2.5, "Peat").into_sub_layer(),
            StrataInterval::new("BH03", 0.0, 1.0, "Fill"),
        ]
    }

    #[test]
    fn full_render() {
        let points = points();
        let strata = strata();
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &[],
        };
        let mut session = StrataSession::default();
        let view = render(&inputs, &mut session);

        assert_eq!(view.skipped.missing_point, 1);
        assert_eq!(view.boreholes, vec!["BH01", "BH02"]);
        assert_eq!(view.units, vec!["Clay", "Fill", "Peat", "Sand"]);
        // 4 mains + 2 sub-layers; no main is nested in a sub-layer here.
        assert_eq!(view.segments.len(), 6);
        let units: Vec<&str> = view.legend.iter().map(|l| l.geology_unit.as_str()).collect();
        assert_eq!(units, vec!["Fill", "Clay", "Sand", "Peat"]);
        assert!(view.segments.iter().all(|s| s.color != Color::UNASSIGNED));
    }

    #[test]
    fn sub_layers_supersede_when_enabled_only() {
        let points = points();
        let strata = vec![
            StrataInterval::new("BH01", 0.0, 1.0, "Fill"),
            StrataInterval::new("BH01", 1.0, 2.0, "Clay"),
            StrataInterval::new("BH01", 0.5, 2.0, "Soft Clay").into_sub_layer(),
        ];
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &[],
        };

        let mut session = StrataSession::default();
        let view = render(&inputs, &mut session);
        let units: Vec<&str> = view.segments.iter().map(|s| s.geology_unit.as_str()).collect();
        assert_eq!(units, vec!["Fill", "Soft Clay"]);

        session.sub_layers = false;
        let view = render(&inputs, &mut session);
        let units: Vec<&str> = view.segments.iter().map(|s| s.geology_unit.as_str()).collect();
        assert_eq!(units, vec!["Fill", "Clay", "Soft Clay"]);
    }

    #[test]
    fn hidden_borehole_drops_its_legend_entries() {
        let points = points();
        let strata = strata();
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &[],
        };
        let mut session = StrataSession::default();
        render(&inputs, &mut session);

        session.set_borehole("BH02", false);
        let view = render(&inputs, &mut session);
        assert!(view.segments.iter().all(|s| s.point_id == "BH01"));
        let units: Vec<&str> = view.legend.iter().map(|l| l.geology_unit.as_str()).collect();
        assert_eq!(units, vec!["Fill", "Clay"]);
        // The borehole list still offers BH02 so it can be re-enabled.
        assert_eq!(view.boreholes, vec!["BH01", "BH02"]);
    }

    #[test]
    fn unit_filter_and_overrides_apply() {
        let points = points();
        let strata = strata();
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &[],
        };
        let mut session = StrataSession::default();
        session.set_color("Fill", Color::rgb(0x12, 0x34, 0x56));
        render(&inputs, &mut session);
        session.select_only_units(["Fill".to_string()]);

        let view = render(&inputs, &mut session);
        assert_eq!(view.segments.len(), 2);
        assert!(view
            .segments
            .iter()
            .all(|s| s.color == Color::rgb(0x12, 0x34, 0x56)));
        assert_eq!(view.legend.len(), 1);
        assert!(view.segments[0].show_in_legend);
        assert!(!view.segments[1].show_in_legend);
    }

    #[test]
    fn descriptions_reach_hover_text() {
        let points = points();
        let strata = strata();
        let descriptors = vec![SoilDescriptor::new("BH01", 1.0, 4.0, "Firm silty CLAY")];
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &descriptors,
        };
        let view = render(&inputs, &mut StrataSession::default());
        let clay = view
            .segments
            .iter()
            .find(|s| s.point_id == "BH01" && s.geology_unit == "Clay")
            .unwrap();
        assert!(clay.hover_text.contains("Firm silty CLAY"));
    }

    #[test]
    fn render_is_repeatable() {
        let points = points();
        let strata = strata();
        let inputs = StrataInputs {
            points: &points,
            strata: &strata,
            descriptors: &[],
        };
        let mut session = StrataSession::default();
        let first = render(&inputs, &mut session);
        let second = render(&inputs, &mut session);
        assert_eq!(first, second);
    }
}
