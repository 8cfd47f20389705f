//! Geology unit colour assignment.
//!
//! Resolution order for a unit is always: user override, then a colour
//! already generated this session, then a freshly derived default.

use gi_model::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash of a label's UTF-8 bytes.
pub fn fnv1a(label: &str) -> u64 {
    label.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Default colour for a label: FNV-1a reduced modulo the palette.
///
/// An empty palette falls back to the low 24 bits of the hash.
pub fn hashed_color(unit: &str, palette: &[Color]) -> Color {
    let hash = fnv1a(unit);
    if palette.is_empty() {
        let rgb = hash & 0x00FF_FFFF;
        return Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
    }
    palette[(hash % palette.len() as u64) as usize]
}

fn default_palette() -> &'static [Color] {
    static PALETTE: OnceLock<Vec<Color>> = OnceLock::new();
    PALETTE.get_or_init(Color::dark24)
}

/// Colour for `unit` given the session's generated colours and overrides.
///
/// A generated default is stored in `existing` so later calls with the same
/// map return it unchanged.
pub fn assign_color(
    unit: &str,
    existing: &mut HashMap<String, Color>,
    overrides: &HashMap<String, Color>,
) -> Color {
    if let Some(color) = overrides.get(unit) {
        return *color;
    }
    *existing
        .entry(unit.to_string())
        .or_insert_with(|| hashed_color(unit, default_palette()))
}

/// How default colours are derived for units without an override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStrategy {
    /// FNV-1a of the label into the palette. Same label, same colour.
    #[default]
    LabelHash,
    /// Palette slots handed out in first-seen order. Fewer collisions, but
    /// only stable for the session.
    FirstSeen,
}

/// Session colour state: generated defaults plus user overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRegistry {
    strategy: ColorStrategy,
    palette: Vec<Color>,
    generated: HashMap<String, Color>,
    overrides: HashMap<String, Color>,
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new(ColorStrategy::default(), Color::dark24())
    }
}

impl ColorRegistry {
    pub fn new(strategy: ColorStrategy, palette: Vec<Color>) -> Self {
        Self {
            strategy,
            palette,
            generated: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    pub fn strategy(&self) -> ColorStrategy {
        self.strategy
    }

    /// Colour for `unit`, generating and remembering a default if needed.
    pub fn color_for(&mut self, unit: &str) -> Color {
        match self.strategy {
            ColorStrategy::LabelHash => {
                if let Some(color) = self.overrides.get(unit) {
                    return *color;
                }
                let palette = &self.palette;
                *self
                    .generated
                    .entry(unit.to_string())
                    .or_insert_with(|| hashed_color(unit, palette))
            }
            ColorStrategy::FirstSeen => {
                if let Some(color) = self.overrides.get(unit) {
                    return *color;
                }
                if let Some(color) = self.generated.get(unit) {
                    return *color;
                }
                let color = if self.palette.is_empty() {
                    hashed_color(unit, &[])
                } else {
                    self.palette[self.generated.len() % self.palette.len()]
                };
                self.generated.insert(unit.to_string(), color);
                color
            }
        }
    }

    /// Colour already known for `unit`, without generating one.
    pub fn peek(&self, unit: &str) -> Option<Color> {
        self.overrides
            .get(unit)
            .or_else(|| self.generated.get(unit))
            .copied()
    }

    /// Pin `unit` to `color` for the rest of the session.
    pub fn set_override(&mut self, unit: impl Into<String>, color: Color) {
        self.overrides.insert(unit.into(), color);
    }

    /// Drop a user override so the generated default applies again.
    pub fn clear_override(&mut self, unit: &str) -> Option<Color> {
        self.overrides.remove(unit)
    }

    pub fn is_overridden(&self, unit: &str) -> bool {
        self.overrides.contains_key(unit)
    }

    pub fn overrides(&self) -> &HashMap<String, Color> {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_reference_values() {
        assert_eq!(fnv1a(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn same_unit_same_color_with_threaded_map() {
        let mut existing = HashMap::new();
        let overrides = HashMap::new();
        let first = assign_color("Clay", &mut existing, &overrides);
        let second = assign_color("Clay", &mut existing, &overrides);
        assert_eq!(first, second);
        assert_eq!(existing.get("Clay"), Some(&first));
    }

    #[test]
    fn default_is_deterministic_across_maps() {
        let overrides = HashMap::new();
        let a = assign_color("Residual Soil", &mut HashMap::new(), &overrides);
        let b = assign_color("Residual Soil", &mut HashMap::new(), &overrides);
        assert_eq!(a, b);
        assert!(Color::dark24().contains(&a));
    }

    #[test]
    fn override_beats_generated_default() {
        let mut existing = HashMap::new();
        let generated = assign_color("Clay", &mut existing, &HashMap::new());

        let pinned = Color::rgb(1, 2, 3);
        assert_ne!(generated, pinned);
        let overrides = HashMap::from([("Clay".to_string(), pinned)]);
        assert_eq!(assign_color("Clay", &mut existing, &overrides), pinned);
        // The generated default is left alone for when the override is cleared.
        assert_eq!(existing.get("Clay"), Some(&generated));
    }

    #[test]
    fn existing_entry_is_reused() {
        let stored = Color::rgb(9, 9, 9);
        let mut existing = HashMap::from([("Sand".to_string(), stored)]);
        assert_eq!(assign_color("Sand", &mut existing, &HashMap::new()), stored);
    }

    #[test]
    fn empty_palette_uses_hash_bits() {
        let color = hashed_color("Sand", &[]);
        let rgb = fnv1a("Sand") & 0xFFFFFF;
        assert_eq!(color, Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
    }

    #[test]
    fn registry_label_hash_matches_free_function() {
        let mut registry = ColorRegistry::default();
        let mut existing = HashMap::new();
        for unit in ["Fill", "Alluvium", "Sandstone"] {
            assert_eq!(
                registry.color_for(unit),
                assign_color(unit, &mut existing, &HashMap::new())
            );
        }
    }

    #[test]
    fn registry_first_seen_hands_out_palette_in_order() {
        let palette = vec![Color::rgb(1, 0, 0), Color::rgb(0, 1, 0)];
        let mut registry = ColorRegistry::new(ColorStrategy::FirstSeen, palette.clone());

        assert_eq!(registry.color_for("B"), palette[0]);
        assert_eq!(registry.color_for("A"), palette[1]);
        assert_eq!(registry.color_for("B"), palette[0]);
        // Wraps once the palette is exhausted.
        assert_eq!(registry.color_for("C"), palette[0]);
    }

    #[test]
    fn registry_override_persists_and_can_be_cleared() {
        let mut registry = ColorRegistry::default();
        let default = registry.color_for("Clay");
        let pinned = Color::rgb(0xaa, 0xbb, 0xcc);

        registry.set_override("Clay", pinned);
        assert!(registry.is_overridden("Clay"));
        assert_eq!(registry.color_for("Clay"), pinned);
        assert_eq!(registry.color_for("Clay"), pinned);
        assert_eq!(registry.peek("Clay"), Some(pinned));

        assert_eq!(registry.clear_override("Clay"), Some(pinned));
        assert_eq!(registry.color_for("Clay"), default);
    }

    #[test]
    fn first_seen_override_does_not_consume_a_slot() {
        let palette = vec![Color::rgb(1, 0, 0), Color::rgb(0, 1, 0)];
        let mut registry = ColorRegistry::new(ColorStrategy::FirstSeen, palette.clone());
        registry.set_override("Fill", Color::rgb(5, 5, 5));
        assert_eq!(registry.color_for("Fill"), Color::rgb(5, 5, 5));
        assert_eq!(registry.color_for("Clay"), palette[0]);
    }
}
