//! Legend de-duplication.

use gi_model::{Color, ResolvedSegment};
use serde::Serialize;
use std::collections::HashSet;

/// One legend row: a geology unit and the colour it is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub geology_unit: String,
    pub color: Color,
}

/// Flag the first segment of each geology unit for the legend.
///
/// Iteration order decides which segment is first; every later segment of
/// the same unit is flagged `false`, so the legend has one entry per unit.
pub fn build_legend_flags(mut segments: Vec<ResolvedSegment>) -> Vec<ResolvedSegment> {
    let mut seen: HashSet<String> = HashSet::new();
    for segment in &mut segments {
        segment.show_in_legend = seen.insert(segment.geology_unit.clone());
    }
    segments
}

/// Legend rows for segments already passed through [`build_legend_flags`].
pub fn legend_entries(segments: &[ResolvedSegment]) -> Vec<LegendEntry> {
    segments
        .iter()
        .filter(|s| s.show_in_legend)
        .map(|s| LegendEntry {
            geology_unit: s.geology_unit.clone(),
            color: s.color,
        })
        .collect()
}
