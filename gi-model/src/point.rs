use serde::{Deserialize, Serialize};

/// A borehole or test location from the `POINT` sheet.
///
/// Source of truth for where a borehole sits: every interval and sample is
/// placed in space by joining its `point_id` against this row.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Point {
    /// Location identifier (e.g. "BH01")
    pub point_id: String,
    /// Easting in metres
    pub east: f64,
    /// Northing in metres
    pub north: f64,
    /// Ground surface elevation (m AHD)
    pub elevation: f64,
}

impl Point {
    pub fn new(point_id: impl Into<String>, east: f64, north: f64, elevation: f64) -> Self {
        Self {
            point_id: point_id.into(),
            east,
            north,
            elevation,
        }
    }

    /// Convert a depth below ground into an elevation on the AHD datum.
    pub fn elevation_at(&self, depth: f64) -> f64 {
        self.elevation - depth
    }
}
