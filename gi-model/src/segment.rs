use crate::color::Color;
use serde::Serialize;

/// A strata interval placed in 3D space, ready for the renderer.
///
/// Derived per render and never persisted. The renderer draws one vertical
/// line from `(east, north, top_elevation)` to `(east, north, bottom_elevation)`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedSegment {
    pub point_id: String,
    pub east: f64,
    pub north: f64,
    /// Depth below ground of the top of the layer (m)
    pub depth: f64,
    /// Depth below ground of the bottom of the layer (m)
    pub bottom: f64,
    /// `Point.elevation - depth`
    pub top_elevation: f64,
    /// `Point.elevation - bottom`
    pub bottom_elevation: f64,
    pub geology_unit: String,
    pub color: Color,
    pub hover_text: String,
    pub show_in_legend: bool,
    /// True when the segment came from a sub-layer row.
    pub sub_layer: bool,
}
