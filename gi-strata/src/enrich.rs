//! Soil description enrichment for resolved segments.

use gi_model::{ResolvedSegment, SoilDescriptor};
use std::collections::HashMap;

/// Append overlapping soil descriptions to each segment's hover text.
///
/// A descriptor applies when it belongs to the same borehole and strictly
/// overlaps the segment's `[depth, bottom)`. Descriptions are appended in
/// descriptor order. Returns the number of segments that were annotated.
pub fn attach_descriptions(
    segments: &mut [ResolvedSegment],
    descriptors: &[SoilDescriptor],
) -> usize {
    if descriptors.is_empty() {
        return 0;
    }

    let mut by_point: HashMap<&str, Vec<&SoilDescriptor>> = HashMap::new();
    for d in descriptors {
        by_point.entry(d.point_id.as_str()).or_default().push(d);
    }

    let mut annotated = 0;
    for segment in segments.iter_mut() {
        let Some(candidates) = by_point.get(segment.point_id.as_str()) else {
            continue;
        };
        let mut touched = false;
        for d in candidates
            .iter()
            .filter(|d| d.overlaps(segment.depth, segment.bottom))
        {
            let text = d.description.trim();
            if text.is_empty() {
                continue;
            }
            segment.hover_text.push_str("<br>Description: ");
            segment.hover_text.push_str(text);
            touched = true;
        }
        if touched {
            annotated += 1;
        }
    }
    log::debug!("[GI] enrich: annotated {} segments", annotated);
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use gi_model::{Point, StrataInterval};

    fn segments() -> Vec<ResolvedSegment> {
        let points = vec![
            Point::new("BH01", 0.0, 0.0, 10.0),
            Point::new("BH02", 0.0, 0.0, 10.0),
        ];
        let rows = vec![
            StrataInterval::new("BH01", 0.0, 2.0, "Fill"),
            StrataInterval::new("BH01", 2.0, 5.0, "Clay"),
            StrataInterval::new("BH02", 0.0, 3.0, "Sand"),
        ];
        resolve(&points, &rows, &[]).segments
    }

    #[test]
    fn overlapping_descriptions_are_appended_in_order() {
        let mut segs = segments();
        let descriptors = vec![
            SoilDescriptor::new("BH01", 1.5, 3.0, "Gravelly FILL"),
            SoilDescriptor::new("BH01", 3.0, 5.0, "Stiff CLAY"),
        ];
        let annotated = attach_descriptions(&mut segs, &descriptors);

        assert_eq!(annotated, 2);
        assert!(segs[0].hover_text.ends_with("<br>Description: Gravelly FILL"));
        assert!(segs[1]
            .hover_text
            .ends_with("<br>Description: Gravelly FILL<br>Description: Stiff CLAY"));
        assert!(!segs[2].hover_text.contains("Description"));
    }

    #[test]
    fn touching_ranges_do_not_annotate() {
        let mut segs = segments();
        let descriptors = vec![SoilDescriptor::new("BH01", 5.0, 6.0, "Weathered ROCK")];
        assert_eq!(attach_descriptions(&mut segs, &descriptors), 0);
    }

    #[test]
    fn descriptors_only_apply_to_their_borehole() {
        let mut segs = segments();
        let descriptors = vec![SoilDescriptor::new("BH02", 0.0, 1.0, "Loose SAND")];
        assert_eq!(attach_descriptions(&mut segs, &descriptors), 1);
        assert!(segs[2].hover_text.contains("Loose SAND"));
        assert!(!segs[0].hover_text.contains("Loose SAND"));
    }

    #[test]
    fn blank_descriptions_are_ignored() {
        let mut segs = segments();
        let descriptors = vec![SoilDescriptor::new("BH02", 0.0, 1.0, "   ")];
        assert_eq!(attach_descriptions(&mut segs, &descriptors), 0);
    }
}
