use serde::{Deserialize, Serialize};

/// Percentage of a sample passing one sieve.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct SievePassing {
    /// Sieve aperture (mm)
    pub size_mm: f64,
    /// Percentage passing (%)
    pub percent: f64,
}

/// One grading test from the `PSD` sheet.
///
/// Every column of the sheet that is not one of the identifying columns is a
/// sieve size in millimetres. Sieves the lab did not report are absent from
/// `passing`, which is ordered from the largest aperture to the smallest.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PsdSample {
    pub id: String,
    /// Sample top depth (m)
    pub from: f64,
    /// Sample bottom depth (m)
    pub to: f64,
    pub geology_unit: String,
    pub passing: Vec<SievePassing>,
}

impl PsdSample {
    /// Percentage passing the sieve of `size_mm`, if it was reported.
    ///
    /// Sieve headers round-trip through text, so sizes are compared with a
    /// small relative tolerance.
    pub fn passing_at(&self, size_mm: f64) -> Option<f64> {
        self.passing
            .iter()
            .find(|s| (s.size_mm - size_mm).abs() <= size_mm.abs() * 1e-9)
            .map(|s| s.percent)
    }
}

/// Liquid limit and plasticity index from the `Atterberg Limits` sheet.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AtterbergResult {
    pub id: String,
    /// Sample top depth (m)
    pub from: f64,
    /// Liquid limit (%)
    pub liquid_limit: f64,
    /// Plasticity index (%)
    pub plasticity_index: f64,
    pub geology_unit: String,
}

/// Point load and unconfined compressive strength results from the
/// `Rock Results` sheet. A row may report either test or both.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RockResult {
    pub id: String,
    pub from: f64,
    pub to: f64,
    /// Sample elevation (m AHD)
    pub elevation: f64,
    /// Size-corrected point load index Is(50) (MPa)
    pub is50: Option<f64>,
    /// Unconfined compressive strength (MPa)
    pub ucs: Option<f64>,
    pub geology_unit: String,
}
