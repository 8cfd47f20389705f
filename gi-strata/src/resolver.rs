//! Interval resolution: sub-layer precedence, point join, depth to elevation.

use gi_model::{format_value, Color, Point, ResolvedSegment, StrataInterval};
use serde::Serialize;
use std::collections::HashMap;

/// Rows `resolve` could not use. Neither kind aborts the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    /// Intervals whose PointID has no row in `POINT`
    pub missing_point: usize,
    /// Intervals with `depth >= bottom`, a negative depth, or a non-finite value
    pub invalid_interval: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.missing_point + self.invalid_interval
    }
}

/// Output of [`resolve`]: the ordered segments and what was left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    pub segments: Vec<ResolvedSegment>,
    pub skipped: SkipCounts,
}

/// Partition `STRATA_MAIN` rows into (main, sub-layer) by their flag.
///
/// Relative order is preserved within each half.
pub fn split_sub_layers(rows: &[StrataInterval]) -> (Vec<StrataInterval>, Vec<StrataInterval>) {
    rows.iter().cloned().partition(|row| !row.sub_layer)
}

/// Resolve borehole logs into positioned segments.
///
/// Main intervals fully nested in a sub-layer of the same borehole are
/// superseded and dropped; sub-layers are never filtered. The surviving
/// mains, followed by all sub-layers, are inner-joined to `points` and
/// converted to elevations. Invalid rows and rows without a matching point
/// are counted in [`SkipCounts`].
///
/// Segments come back with [`Color::UNASSIGNED`] and `show_in_legend = false`.
pub fn resolve(
    points: &[Point],
    intervals: &[StrataInterval],
    sub_layers: &[StrataInterval],
) -> Resolution {
    let mut skipped = SkipCounts::default();
    let by_id = index_points(points);

    let mains = valid_rows(intervals, &mut skipped);
    let subs = valid_rows(sub_layers, &mut skipped);

    let mut subs_by_point: HashMap<&str, Vec<&StrataInterval>> = HashMap::new();
    for sub in subs.iter().copied() {
        subs_by_point
            .entry(sub.point_id.as_str())
            .or_default()
            .push(sub);
    }

    let mut superseded = 0usize;
    let retained: Vec<&StrataInterval> = mains
        .into_iter()
        .filter(|main| {
            let nested = subs_by_point
                .get(main.point_id.as_str())
                .is_some_and(|subs| subs.iter().any(|sub| main.is_within(sub)));
            if nested {
                superseded += 1;
            }
            !nested
        })
        .collect();

    let mut segments = Vec::with_capacity(retained.len() + subs.len());
    for row in retained.into_iter().chain(subs) {
        match by_id.get(row.point_id.as_str()) {
            Some(point) => segments.push(to_segment(point, row)),
            None => {
                log::warn!(
                    "[GI] resolve: no point '{}' for {} {}-{}m, skipped",
                    row.point_id,
                    row.geology_unit,
                    row.depth,
                    row.bottom
                );
                skipped.missing_point += 1;
            }
        }
    }

    log::info!(
        "[GI] resolve: {} segments, {} superseded by sub-layers, {} missing point, {} invalid",
        segments.len(),
        superseded,
        skipped.missing_point,
        skipped.invalid_interval
    );
    Resolution { segments, skipped }
}

/// Hover label for a strata segment.
pub fn strata_hover_text(point_id: &str, depth: f64, bottom: f64, geology_unit: &str) -> String {
    format!(
        "PointID: {}<br>Depth: {}m<br>Bottom: {}m<br>Geology Unit: {}",
        point_id,
        format_value(depth),
        format_value(bottom),
        geology_unit
    )
}

/// Index points by id. The first row for a PointID wins.
fn index_points(points: &[Point]) -> HashMap<&str, &Point> {
    let mut by_id: HashMap<&str, &Point> = HashMap::with_capacity(points.len());
    for point in points {
        if by_id.contains_key(point.point_id.as_str()) {
            log::warn!(
                "[GI] resolve: duplicate point '{}', keeping first",
                point.point_id
            );
            continue;
        }
        by_id.insert(point.point_id.as_str(), point);
    }
    by_id
}

fn valid_rows<'a>(rows: &'a [StrataInterval], skipped: &mut SkipCounts) -> Vec<&'a StrataInterval> {
    let mut valid = Vec::with_capacity(rows.len());
    for row in rows {
        if row.is_valid() {
            valid.push(row);
        } else {
            log::warn!(
                "[GI] resolve: invalid interval {} {}-{}m ({}), skipped",
                row.point_id,
                row.depth,
                row.bottom,
                row.geology_unit
            );
            skipped.invalid_interval += 1;
        }
    }
    valid
}

fn to_segment(point: &Point, row: &StrataInterval) -> ResolvedSegment {
    ResolvedSegment {
        point_id: row.point_id.clone(),
        east: point.east,
        north: point.north,
        depth: row.depth,
        bottom: row.bottom,
        top_elevation: point.elevation_at(row.depth),
        bottom_elevation: point.elevation_at(row.bottom),
        geology_unit: row.geology_unit.clone(),
        color: Color::UNASSIGNED,
        hover_text: strata_hover_text(&row.point_id, row.depth, row.bottom, &row.geology_unit),
        show_in_legend: false,
        sub_layer: row.sub_layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p1() -> Vec<Point> {
        vec![Point::new("P1", 0.0, 0.0, 100.0)]
    }

    #[test]
    fn worked_example() {
        let intervals = vec![
            StrataInterval::new("P1", 0.0, 2.0, "Sand"),
            StrataInterval::new("P1", 2.0, 5.0, "Clay"),
        ];
        let resolution = resolve(&p1(), &intervals, &[]);

        assert_eq!(resolution.skipped.total(), 0);
        let seg = &resolution.segments;
        assert_eq!(seg.len(), 2);
        assert_eq!(seg[0].point_id, "P1");
        assert_eq!((seg[0].top_elevation, seg[0].bottom_elevation), (100.0, 98.0));
        assert_eq!(seg[0].geology_unit, "Sand");
        assert_eq!((seg[1].top_elevation, seg[1].bottom_elevation), (98.0, 95.0));
        assert_eq!(seg[1].geology_unit, "Clay");
        assert!(seg.iter().all(|s| s.color == Color::UNASSIGNED && !s.show_in_legend));
    }

    #[test]
    fn elevation_drop_equals_thickness() {
        let points = vec![
            Point::new("P1", 10.0, 20.0, 53.25),
            Point::new("P2", 11.0, 21.0, -4.5),
        ];
        let intervals = vec![
            StrataInterval::new("P1", 0.0, 0.35, "Topsoil"),
            StrataInterval::new("P1", 0.35, 7.8, "Alluvium"),
            StrataInterval::new("P2", 1.25, 12.0, "Rock"),
        ];
        let resolution = resolve(&points, &intervals, &[]);
        for (seg, row) in resolution.segments.iter().zip(&intervals) {
            let drop = seg.top_elevation - seg.bottom_elevation;
            assert!((drop - row.thickness()).abs() < 1e-9);
            assert!(seg.bottom_elevation < seg.top_elevation);
        }
        assert_eq!(resolution.segments[2].east, 11.0);
        assert_eq!(resolution.segments[2].north, 21.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let intervals = vec![
            StrataInterval::new("P1", 0.0, 2.0, "Sand"),
            StrataInterval::new("P9", 0.0, 1.0, "Fill"),
            StrataInterval::new("P1", 2.0, 5.0, "Clay"),
        ];
        let subs = vec![StrataInterval::new("P1", 2.0, 5.0, "Soft Clay").into_sub_layer()];
        let first = resolve(&p1(), &intervals, &subs);
        let second = resolve(&p1(), &intervals, &subs);
        assert_eq!(first, second);
    }

    #[test]
    fn wider_main_is_not_nested_in_narrower_sub() {
        let mains = vec![StrataInterval::new("P1", 0.0, 5.0, "Sand")];
        let subs = vec![StrataInterval::new("P1", 1.0, 3.0, "Clay lens").into_sub_layer()];
        let resolution = resolve(&p1(), &mains, &subs);

        let units: Vec<&str> = resolution
            .segments
            .iter()
            .map(|s| s.geology_unit.as_str())
            .collect();
        assert_eq!(units, vec!["Sand", "Clay lens"]);
    }

    #[test]
    fn equal_bounds_count_as_nested() {
        let mains = vec![
            StrataInterval::new("P1", 0.0, 1.0, "Fill"),
            StrataInterval::new("P1", 1.0, 3.0, "Sand"),
            StrataInterval::new("P1", 3.0, 6.0, "Clay"),
        ];
        let subs = vec![StrataInterval::new("P1", 1.0, 3.0, "Gravelly Sand").into_sub_layer()];
        let resolution = resolve(&p1(), &mains, &subs);

        let units: Vec<&str> = resolution
            .segments
            .iter()
            .map(|s| s.geology_unit.as_str())
            .collect();
        assert_eq!(units, vec!["Fill", "Clay", "Gravelly Sand"]);
        assert_eq!(resolution.skipped.total(), 0, "superseded rows are not skips");
        assert!(resolution.segments[2].sub_layer);
    }

    #[test]
    fn precedence_is_per_borehole() {
        let points = vec![
            Point::new("P1", 0.0, 0.0, 100.0),
            Point::new("P2", 5.0, 5.0, 90.0),
        ];
        let mains = vec![
            StrataInterval::new("P1", 1.0, 2.0, "Sand"),
            StrataInterval::new("P2", 1.0, 2.0, "Sand"),
        ];
        let subs = vec![StrataInterval::new("P2", 0.0, 4.0, "Clay").into_sub_layer()];
        let resolution = resolve(&points, &mains, &subs);

        let ids: Vec<(&str, &str)> = resolution
            .segments
            .iter()
            .map(|s| (s.point_id.as_str(), s.geology_unit.as_str()))
            .collect();
        assert_eq!(ids, vec![("P1", "Sand"), ("P2", "Clay")]);
    }

    #[test]
    fn one_sub_layer_can_supersede_many_mains() {
        let mains = vec![
            StrataInterval::new("P1", 0.0, 1.0, "A"),
            StrataInterval::new("P1", 1.0, 2.0, "B"),
            StrataInterval::new("P1", 2.0, 4.0, "C"),
        ];
        let subs = vec![StrataInterval::new("P1", 0.0, 2.0, "AB").into_sub_layer()];
        let resolution = resolve(&p1(), &mains, &subs);
        let units: Vec<&str> = resolution
            .segments
            .iter()
            .map(|s| s.geology_unit.as_str())
            .collect();
        assert_eq!(units, vec!["C", "AB"]);
    }

    #[test]
    fn unmatched_point_is_dropped_and_counted_once_per_row() {
        let intervals = vec![
            StrataInterval::new("P1", 0.0, 2.0, "Sand"),
            StrataInterval::new("GHOST", 0.0, 2.0, "Sand"),
            StrataInterval::new("GHOST", 2.0, 4.0, "Clay"),
        ];
        let subs = vec![StrataInterval::new("NOPE", 0.0, 1.0, "Fill").into_sub_layer()];
        let resolution = resolve(&p1(), &intervals, &subs);

        assert_eq!(resolution.segments.len(), 1);
        assert_eq!(resolution.skipped.missing_point, 3);
        assert_eq!(resolution.skipped.invalid_interval, 0);
    }

    #[test]
    fn invalid_rows_are_skipped_not_fatal() {
        let intervals = vec![
            StrataInterval::new("P1", 2.0, 2.0, "Zero"),
            StrataInterval::new("P1", 0.0, 2.0, "Sand"),
            StrataInterval::new("P1", 5.0, 3.0, "Inverted"),
            StrataInterval::new("GHOST", 4.0, 1.0, "Both"),
        ];
        let resolution = resolve(&p1(), &intervals, &[]);

        assert_eq!(resolution.segments.len(), 1);
        assert_eq!(resolution.segments[0].geology_unit, "Sand");
        // Invalid is checked first, so the GHOST row counts once.
        assert_eq!(resolution.skipped.invalid_interval, 3);
        assert_eq!(resolution.skipped.missing_point, 0);
        assert_eq!(resolution.skipped.total(), 3);
    }

    #[test]
    fn invalid_sub_layer_does_not_supersede() {
        let mains = vec![StrataInterval::new("P1", 1.0, 2.0, "Sand")];
        let subs = vec![StrataInterval::new("P1", 3.0, 0.0, "Broken").into_sub_layer()];
        let resolution = resolve(&p1(), &mains, &subs);
        assert_eq!(resolution.segments.len(), 1);
        assert_eq!(resolution.segments[0].geology_unit, "Sand");
        assert_eq!(resolution.skipped.invalid_interval, 1);
    }

    #[test]
    fn duplicate_point_first_row_wins() {
        let points = vec![
            Point::new("P1", 0.0, 0.0, 100.0),
            Point::new("P1", 9.0, 9.0, 50.0),
        ];
        let intervals = vec![StrataInterval::new("P1", 0.0, 1.0, "Sand")];
        let resolution = resolve(&points, &intervals, &[]);
        assert_eq!(resolution.segments.len(), 1);
        assert_eq!(resolution.segments[0].top_elevation, 100.0);
        assert_eq!(resolution.segments[0].east, 0.0);
    }

    #[test]
    fn hover_text_lists_depths_and_unit() {
        let resolution = resolve(&p1(), &[StrataInterval::new("P1", 0.5, 2.25, "Sand")], &[]);
        assert_eq!(
            resolution.segments[0].hover_text,
            "PointID: P1<br>Depth: 0.5m<br>Bottom: 2.25m<br>Geology Unit: Sand"
        );
    }

    #[test]
    fn hover_text_keeps_whole_metres_decimal() {
        let resolution = resolve(&p1(), &[StrataInterval::new("P1", 0.0, 2.0, "Sand")], &[]);
        assert_eq!(
            resolution.segments[0].hover_text,
            "PointID: P1<br>Depth: 0.0m<br>Bottom: 2.0m<br>Geology Unit: Sand"
        );
    }

    #[test]
    fn split_preserves_order() {
        let rows = vec![
            StrataInterval::new("P1", 0.0, 1.0, "A"),
            StrataInterval::new("P1", 0.2, 0.4, "a").into_sub_layer(),
            StrataInterval::new("P1", 1.0, 2.0, "B"),
            StrataInterval::new("P1", 1.1, 1.3, "b").into_sub_layer(),
        ];
        let (main, sub) = split_sub_layers(&rows);
        let main_units: Vec<&str> = main.iter().map(|r| r.geology_unit.as_str()).collect();
        let sub_units: Vec<&str> = sub.iter().map(|r| r.geology_unit.as_str()).collect();
        assert_eq!(main_units, vec!["A", "B"]);
        assert_eq!(sub_units, vec!["a", "b"]);
    }

    #[test]
    fn empty_inputs() {
        let resolution = resolve(&[], &[], &[]);
        assert!(resolution.segments.is_empty());
        assert_eq!(resolution.skipped, SkipCounts::default());
    }
}
