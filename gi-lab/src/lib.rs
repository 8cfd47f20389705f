//! Lab result charts for geotechnical investigation workbooks.
//!
//! Pure functions from lab sheet rows to chart data:
//!
//! - [`psd`]: gravel/sand/fines contents and grading curves on a log axis
//! - [`plasticity`]: the Casagrande chart with its A-line and U-line
//! - [`moisture`]: moisture content against elevation per borehole
//! - [`strength`]: point load index and UCS profiles with strength classes
//!
//! Each chart is returned as a [`figure::Figure`], which the chart apps
//! serialise to JSON for the Plotly script and the CLI can print as is.
//! [`charts::LabData`] picks the right builder for a [`charts::LabChart`].
//!
//! ```rust
//! use gi_lab::plasticity::{classify, PlasticityClass};
//!
//! assert_eq!(classify(42.0, 21.0), PlasticityClass::CI);
//! ```

pub mod charts;
pub mod figure;
pub mod moisture;
pub mod plasticity;
pub mod psd;
pub mod strength;

pub use charts::{LabChart, LabData};
pub use figure::Figure;

use std::collections::BTreeSet;

/// Distinct geology units, sorted.
pub fn sorted_units<'a, I: IntoIterator<Item = &'a str>>(units: I) -> Vec<String> {
    units
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sorted_units;

    #[test]
    fn units_are_distinct_and_sorted() {
        assert_eq!(
            sorted_units(["Sandstone", "Alluvium", "Sandstone"]),
            vec!["Alluvium", "Sandstone"]
        );
    }
}
