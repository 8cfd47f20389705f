//! Query result structs that are not plain sheet rows.
//!
//! All structs derive `Serialize` so they can be printed by the CLI or passed
//! to the chart scripts as JSON.

use serde::Serialize;

/// Borehole metadata for selection lists and the `boreholes` listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoreholeInfo {
    pub point_id: String,
    pub east: f64,
    pub north: f64,
    /// Collar elevation (m)
    pub elevation: f64,
    /// Number of `STRATA_MAIN` rows logged against this borehole.
    pub interval_count: i64,
}

/// Row counts per sheet, for load summaries.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SheetCounts {
    pub points: i64,
    pub strata: i64,
    /// Subset of `strata` flagged as sub-layers
    pub sub_layers: i64,
    pub soil_descriptions: i64,
    pub moisture: i64,
    pub psd: i64,
    pub atterberg: i64,
    pub rock: i64,
}
