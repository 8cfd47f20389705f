//! The lab chart catalogue: which sheet feeds which chart, and one call to
//! build the figures for a set of geology units.

use crate::figure::Figure;
use crate::moisture::moisture_figure;
use crate::plasticity::plasticity_figure;
use crate::psd::psd_figure;
use crate::sorted_units;
use crate::strength::{factored_figure, strength_figure, StrengthTest, UnitFactors};
use gi_model::sheet::{ATTERBERG_SHEET, MOISTURE_SHEET, PSD_SHEET, ROCK_SHEET};
use gi_model::{AtterbergResult, MoistureSample, PsdSample, RockResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LabChart {
    Psd,
    Plasticity,
    Moisture,
    Is50,
    Ucs,
    Factored,
}

impl LabChart {
    pub const ALL: [LabChart; 6] = [
        LabChart::Psd,
        LabChart::Moisture,
        LabChart::Plasticity,
        LabChart::Is50,
        LabChart::Ucs,
        LabChart::Factored,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LabChart::Psd => "PSD",
            LabChart::Plasticity => "Atterberg Limits",
            LabChart::Moisture => "Moisture Content",
            LabChart::Is50 => "PLI",
            LabChart::Ucs => "UCS",
            LabChart::Factored => "Factored PLI and UCS",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Sheet the chart is drawn from.
    pub fn sheet(self) -> &'static str {
        match self {
            LabChart::Psd => PSD_SHEET,
            LabChart::Plasticity => ATTERBERG_SHEET,
            LabChart::Moisture => MOISTURE_SHEET,
            LabChart::Is50 | LabChart::Ucs | LabChart::Factored => ROCK_SHEET,
        }
    }
}

/// Every lab sheet of one workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabData {
    pub psd: Vec<PsdSample>,
    pub atterberg: Vec<AtterbergResult>,
    pub moisture: Vec<MoistureSample>,
    pub rock: Vec<RockResult>,
}

impl LabData {
    /// Geology units that have data for `chart`, sorted.
    pub fn units(&self, chart: LabChart) -> Vec<String> {
        match chart {
            LabChart::Psd => sorted_units(self.psd.iter().map(|s| s.geology_unit.as_str())),
            LabChart::Plasticity => {
                sorted_units(self.atterberg.iter().map(|r| r.geology_unit.as_str()))
            }
            LabChart::Moisture => sorted_units(self.moisture.iter().map(|s| s.origin.as_str())),
            LabChart::Is50 => sorted_units(
                self.rock
                    .iter()
                    .filter(|r| r.is50.is_some())
                    .map(|r| r.geology_unit.as_str()),
            ),
            LabChart::Ucs => sorted_units(
                self.rock
                    .iter()
                    .filter(|r| r.ucs.is_some())
                    .map(|r| r.geology_unit.as_str()),
            ),
            LabChart::Factored => sorted_units(self.rock.iter().map(|r| r.geology_unit.as_str())),
        }
    }

    /// Units found on any lab sheet, sorted.
    pub fn all_units(&self) -> Vec<String> {
        let mut units: Vec<String> = LabChart::ALL
            .into_iter()
            .flat_map(|chart| self.units(chart))
            .collect();
        units.sort();
        units.dedup();
        units
    }

    /// Figures of `chart` for `units`.
    ///
    /// The plasticity chart puts every unit on one figure; the others draw
    /// one figure per unit and leave out units with no data.
    pub fn figures(&self, chart: LabChart, units: &[String], factors: &UnitFactors) -> Vec<Figure> {
        if chart == LabChart::Plasticity {
            return vec![plasticity_figure(&self.atterberg, units)];
        }
        units
            .iter()
            .filter_map(|unit| self.unit_figure(chart, unit, factors))
            .collect()
    }

    fn unit_figure(&self, chart: LabChart, unit: &str, factors: &UnitFactors) -> Option<Figure> {
        match chart {
            LabChart::Psd => {
                let samples: Vec<&PsdSample> =
                    self.psd.iter().filter(|s| s.geology_unit == unit).collect();
                (!samples.is_empty()).then(|| psd_figure(unit, &samples))
            }
            LabChart::Moisture => {
                let samples: Vec<&MoistureSample> =
                    self.moisture.iter().filter(|s| s.origin == unit).collect();
                (!samples.is_empty()).then(|| moisture_figure(unit, &samples))
            }
            LabChart::Is50 | LabChart::Ucs | LabChart::Factored => {
                let rows: Vec<&RockResult> =
                    self.rock.iter().filter(|r| r.geology_unit == unit).collect();
                match chart {
                    LabChart::Is50 => strength_figure(unit, &rows, StrengthTest::Is50),
                    LabChart::Ucs => strength_figure(unit, &rows, StrengthTest::Ucs),
                    _ => factored_figure(unit, &rows, factors.get(unit)),
                }
            }
            LabChart::Plasticity => Some(plasticity_figure(&self.atterberg, &[unit.to_string()])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> LabData {
        LabData {
            atterberg: vec![AtterbergResult {
                id: "BH01".to_string(),
                from: 3.0,
                liquid_limit: 42.0,
                plasticity_index: 21.0,
                geology_unit: "Alluvium".to_string(),
            }],
            rock: vec![
                RockResult {
                    id: "BH01".to_string(),
                    from: 7.2,
                    to: 7.4,
                    elevation: 45.2,
                    is50: Some(0.8),
                    ucs: None,
                    geology_unit: "Sandstone".to_string(),
                },
                RockResult {
                    id: "BH04".to_string(),
                    from: 5.5,
                    to: 5.8,
                    elevation: 42.7,
                    is50: None,
                    ucs: Some(12.5),
                    geology_unit: "Siltstone".to_string(),
                },
            ],
            ..LabData::default()
        }
    }

    #[test]
    fn labels_round_trip() {
        for chart in LabChart::ALL {
            assert_eq!(LabChart::from_label(chart.label()), Some(chart));
        }
        assert_eq!(LabChart::from_label("XRD"), None);
        assert_eq!(LabChart::Factored.sheet(), "Rock Results");
    }

    #[test]
    fn units_depend_on_the_test() {
        let data = data();
        assert_eq!(data.units(LabChart::Is50), vec!["Sandstone"]);
        assert_eq!(data.units(LabChart::Ucs), vec!["Siltstone"]);
        assert_eq!(data.units(LabChart::Factored), vec!["Sandstone", "Siltstone"]);
        assert!(data.units(LabChart::Psd).is_empty());
        assert_eq!(data.all_units(), vec!["Alluvium", "Sandstone", "Siltstone"]);
    }

    #[test]
    fn one_figure_per_unit_with_data() {
        let data = data();
        let units = vec!["Sandstone".to_string(), "Siltstone".to_string()];
        let figures = data.figures(LabChart::Is50, &units, &UnitFactors::default());
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].title, "Elevation vs Is50: Sandstone");

        let figures = data.figures(LabChart::Factored, &units, &UnitFactors::default());
        assert_eq!(figures.len(), 2);
    }

    #[test]
    fn plasticity_is_one_figure() {
        let data = data();
        let figures = data.figures(
            LabChart::Plasticity,
            &["Alluvium".to_string()],
            &UnitFactors::default(),
        );
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].traces[0].name, "Alluvium");
    }
}
