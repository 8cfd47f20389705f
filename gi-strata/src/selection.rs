//! Borehole and geology unit filters.

use gi_model::ResolvedSegment;
use std::collections::BTreeSet;

/// Keep segments whose borehole is in `selected_boreholes`.
///
/// "Select all" is simply the set of every known PointID.
pub fn select_visible(
    segments: &[ResolvedSegment],
    selected_boreholes: &BTreeSet<String>,
) -> Vec<ResolvedSegment> {
    segments
        .iter()
        .filter(|s| selected_boreholes.contains(&s.point_id))
        .cloned()
        .collect()
}

/// Keep segments whose geology unit is in `selected_units`.
pub fn select_units(
    segments: &[ResolvedSegment],
    selected_units: &BTreeSet<String>,
) -> Vec<ResolvedSegment> {
    segments
        .iter()
        .filter(|s| selected_units.contains(&s.geology_unit))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use gi_model::{Point, StrataInterval};

    fn segments() -> Vec<ResolvedSegment> {
        let points = vec![
            Point::new("BH01", 0.0, 0.0, 10.0),
            Point::new("BH02", 1.0, 0.0, 11.0),
            Point::new("BH03", 2.0, 0.0, 12.0),
        ];
        let rows = vec![
            StrataInterval::new("BH01", 0.0, 1.0, "Fill"),
            StrataInterval::new("BH02", 0.0, 1.0, "Fill"),
            StrataInterval::new("BH02", 1.0, 3.0, "Clay"),
            StrataInterval::new("BH03", 0.0, 2.0, "Sand"),
        ];
        resolve(&points, &rows, &[]).segments
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_only_selected_boreholes_in_order() {
        let visible = select_visible(&segments(), &set(&["BH03", "BH02"]));
        let ids: Vec<&str> = visible.iter().map(|s| s.point_id.as_str()).collect();
        assert_eq!(ids, vec!["BH02", "BH02", "BH03"]);
    }

    #[test]
    fn select_all_keeps_everything() {
        let all = segments();
        let visible = select_visible(&all, &set(&["BH01", "BH02", "BH03"]));
        assert_eq!(visible, all);
    }

    #[test]
    fn empty_selection_hides_everything() {
        assert!(select_visible(&segments(), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn unknown_ids_are_harmless() {
        let visible = select_visible(&segments(), &set(&["BH99"]));
        assert!(visible.is_empty());
    }

    #[test]
    fn unit_filter() {
        let visible = select_units(&segments(), &set(&["Fill"]));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|s| s.geology_unit == "Fill"));
    }
}
