//! Per-session view state owned by the UI layer.
//!
//! Holds the colour registry and the borehole/unit selections. Nothing here
//! outlives the session; a freshly loaded workbook keeps the colour overrides
//! and selects any borehole or unit it has not seen before.

use crate::colors::{ColorRegistry, ColorStrategy};
use crate::config::StrataConfig;
use gi_model::{Color, ColorParseError};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct StrataSession {
    pub colors: ColorRegistry,
    /// Apply sub-layer precedence when resolving
    pub sub_layers: bool,
    known_boreholes: BTreeSet<String>,
    selected_boreholes: BTreeSet<String>,
    known_units: BTreeSet<String>,
    selected_units: BTreeSet<String>,
}

impl Default for StrataSession {
    fn default() -> Self {
        Self::new(ColorRegistry::default(), true)
    }
}

impl StrataSession {
    pub fn new(colors: ColorRegistry, sub_layers: bool) -> Self {
        Self {
            colors,
            sub_layers,
            known_boreholes: BTreeSet::new(),
            selected_boreholes: BTreeSet::new(),
            known_units: BTreeSet::new(),
            selected_units: BTreeSet::new(),
        }
    }

    pub fn from_config(config: &StrataConfig) -> Result<Self, ColorParseError> {
        let palette = config.palette_colors()?;
        Ok(Self::new(
            ColorRegistry::new(config.color_strategy, palette),
            config.sub_layers,
        ))
    }

    pub fn color_strategy(&self) -> ColorStrategy {
        self.colors.strategy()
    }

    /// Register boreholes and units present in the current data.
    ///
    /// Anything new is selected; existing selections are left alone.
    /// In `FirstSeen` mode, units are coloured in sorted order so palette
    /// slots do not depend on row order.
    pub fn observe<B, U>(&mut self, boreholes: B, units: U)
    where
        B: IntoIterator<Item = String>,
        U: IntoIterator<Item = String>,
    {
        for id in boreholes {
            if self.known_boreholes.insert(id.clone()) {
                self.selected_boreholes.insert(id);
            }
        }
        let mut new_units: Vec<String> = Vec::new();
        for unit in units {
            if self.known_units.insert(unit.clone()) {
                self.selected_units.insert(unit.clone());
                new_units.push(unit);
            }
        }
        new_units.sort();
        for unit in &new_units {
            self.colors.color_for(unit);
        }
    }

    /// Drop every known borehole and unit, keeping colours and the sub-layer
    /// flag. Used when a different workbook replaces the current one.
    pub fn forget_data(&mut self) {
        self.known_boreholes.clear();
        self.selected_boreholes.clear();
        self.known_units.clear();
        self.selected_units.clear();
    }

    pub fn known_boreholes(&self) -> &BTreeSet<String> {
        &self.known_boreholes
    }

    pub fn selected_boreholes(&self) -> &BTreeSet<String> {
        &self.selected_boreholes
    }

    pub fn known_units(&self) -> &BTreeSet<String> {
        &self.known_units
    }

    pub fn selected_units(&self) -> &BTreeSet<String> {
        &self.selected_units
    }

    pub fn is_borehole_selected(&self, point_id: &str) -> bool {
        self.selected_boreholes.contains(point_id)
    }

    pub fn all_boreholes_selected(&self) -> bool {
        self.selected_boreholes.is_superset(&self.known_boreholes)
    }

    pub fn set_borehole(&mut self, point_id: &str, visible: bool) {
        if visible {
            self.selected_boreholes.insert(point_id.to_string());
        } else {
            self.selected_boreholes.remove(point_id);
        }
    }

    pub fn toggle_borehole(&mut self, point_id: &str) {
        let visible = !self.is_borehole_selected(point_id);
        self.set_borehole(point_id, visible);
    }

    /// "Select All Boreholes" checkbox.
    pub fn select_all_boreholes(&mut self, selected: bool) {
        if selected {
            self.selected_boreholes = self.known_boreholes.clone();
        } else {
            self.selected_boreholes.clear();
        }
    }

    /// Restrict the view to exactly `point_ids`.
    pub fn select_only_boreholes<I: IntoIterator<Item = String>>(&mut self, point_ids: I) {
        self.selected_boreholes = point_ids.into_iter().collect();
    }

    pub fn is_unit_selected(&self, unit: &str) -> bool {
        self.selected_units.contains(unit)
    }

    pub fn set_unit(&mut self, unit: &str, visible: bool) {
        if visible {
            self.selected_units.insert(unit.to_string());
        } else {
            self.selected_units.remove(unit);
        }
    }

    pub fn toggle_unit(&mut self, unit: &str) {
        let visible = !self.is_unit_selected(unit);
        self.set_unit(unit, visible);
    }

    pub fn select_all_units(&mut self, selected: bool) {
        if selected {
            self.selected_units = self.known_units.clone();
        } else {
            self.selected_units.clear();
        }
    }

    /// Restrict the view to exactly `units`.
    pub fn select_only_units<I: IntoIterator<Item = String>>(&mut self, units: I) {
        self.selected_units = units.into_iter().collect();
    }

    /// Pin a unit's colour for the rest of the session.
    pub fn set_color(&mut self, unit: &str, color: Color) {
        self.colors.set_override(unit, color);
    }

    /// Current colour for a unit, generating the default if needed.
    pub fn color_for(&mut self, unit: &str) -> Color {
        self.colors.color_for(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn observe_selects_everything_new() {
        let mut session = StrataSession::default();
        session.observe(strings(&["BH02", "BH01"]), strings(&["Clay", "Fill"]));
        assert!(session.all_boreholes_selected());
        assert_eq!(
            session.selected_boreholes().iter().collect::<Vec<_>>(),
            vec!["BH01", "BH02"]
        );
        assert!(session.is_unit_selected("Clay"));
        assert!(session.colors.peek("Fill").is_some());
    }

    #[test]
    fn deselection_survives_reobserve() {
        let mut session = StrataSession::default();
        session.observe(strings(&["BH01", "BH02"]), strings(&["Clay"]));
        session.toggle_borehole("BH02");
        session.observe(strings(&["BH01", "BH02", "BH03"]), strings(&["Clay"]));

        assert!(session.is_borehole_selected("BH01"));
        assert!(!session.is_borehole_selected("BH02"));
        assert!(session.is_borehole_selected("BH03"));
        assert!(!session.all_boreholes_selected());
    }

    #[test]
    fn select_all_and_none() {
        let mut session = StrataSession::default();
        session.observe(strings(&["A", "B"]), strings(&["Sand", "Clay"]));
        session.select_all_boreholes(false);
        assert!(session.selected_boreholes().is_empty());
        session.select_all_boreholes(true);
        assert!(session.all_boreholes_selected());

        session.select_all_units(false);
        assert!(session.selected_units().is_empty());
        session.toggle_unit("Sand");
        assert_eq!(session.selected_units().len(), 1);
    }

    #[test]
    fn unknown_selection_does_not_count_as_all() {
        let mut session = StrataSession::default();
        session.observe(strings(&["A", "B"]), strings(&["Sand"]));
        session.select_only_boreholes(strings(&["A", "Z"]));
        assert!(!session.all_boreholes_selected());

        session.select_only_boreholes(strings(&["A", "B", "Z"]));
        assert!(session.all_boreholes_selected());
    }

    #[test]
    fn color_override_survives_new_workbook() {
        let mut session = StrataSession::default();
        session.observe(strings(&["BH01"]), strings(&["Clay"]));
        session.set_color("Clay", Color::rgb(10, 20, 30));

        session.observe(strings(&["BH07"]), strings(&["Clay", "Sand"]));
        assert_eq!(session.color_for("Clay"), Color::rgb(10, 20, 30));
    }

    #[test]
    fn forget_data_keeps_colours() {
        let mut session = StrataSession::default();
        session.observe(strings(&["BH01"]), strings(&["Clay"]));
        session.set_color("Clay", Color::rgb(10, 20, 30));
        session.sub_layers = false;

        session.forget_data();
        assert!(session.known_boreholes().is_empty());
        assert!(session.selected_units().is_empty());
        assert!(!session.sub_layers);

        session.observe(strings(&["BH07"]), strings(&["Clay"]));
        assert_eq!(session.known_boreholes().len(), 1);
        assert!(session.is_borehole_selected("BH07"));
        assert_eq!(session.color_for("Clay"), Color::rgb(10, 20, 30));
    }

    #[test]
    fn first_seen_palette_follows_sorted_units() {
        let config = StrataConfig {
            color_strategy: ColorStrategy::FirstSeen,
            palette: vec!["#110000".into(), "#002200".into(), "#000033".into()],
            ..StrataConfig::default()
        };
        let mut session = StrataSession::from_config(&config).unwrap();
        session.observe(Vec::new(), strings(&["Sand", "Clay", "Fill"]));

        assert_eq!(session.color_for("Clay"), Color::rgb(0x11, 0, 0));
        assert_eq!(session.color_for("Fill"), Color::rgb(0, 0x22, 0));
        assert_eq!(session.color_for("Sand"), Color::rgb(0, 0, 0x33));
    }

    #[test]
    fn bad_palette_in_config_is_rejected() {
        let config = StrataConfig {
            palette: vec!["#nothex".into()],
            ..StrataConfig::default()
        };
        assert!(StrataSession::from_config(&config).is_err());
    }
}
