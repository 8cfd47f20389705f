use serde::{Deserialize, Serialize};

/// One logged soil/rock layer in one borehole, from the `STRATA_MAIN` sheet.
///
/// Depths are metres below ground. `sub_layer` marks a finer interval that
/// refines part of the coarser main log for the same borehole.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StrataInterval {
    pub point_id: String,
    /// Top of the layer (m below ground)
    pub depth: f64,
    /// Bottom of the layer (m below ground)
    pub bottom: f64,
    pub geology_unit: String,
    #[serde(default)]
    pub sub_layer: bool,
}

impl StrataInterval {
    pub fn new(
        point_id: impl Into<String>,
        depth: f64,
        bottom: f64,
        geology_unit: impl Into<String>,
    ) -> Self {
        Self {
            point_id: point_id.into(),
            depth,
            bottom,
            geology_unit: geology_unit.into(),
            sub_layer: false,
        }
    }

    /// Same interval, flagged as a sub-layer.
    pub fn into_sub_layer(mut self) -> Self {
        self.sub_layer = true;
        self
    }

    /// A usable interval has finite, non-negative depths with `depth < bottom`.
    pub fn is_valid(&self) -> bool {
        is_valid_range(self.depth, self.bottom)
    }

    /// Layer thickness in metres.
    pub fn thickness(&self) -> f64 {
        self.bottom - self.depth
    }

    /// Closed containment: `self` lies entirely within `outer`.
    ///
    /// Equal bounds count as contained.
    pub fn is_within(&self, outer: &StrataInterval) -> bool {
        self.depth >= outer.depth && self.bottom <= outer.bottom
    }
}

/// Compiled soil description over a depth range, from the optional
/// `SOIL_DESCRIPTION` sheet. Used to annotate overlapping strata.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SoilDescriptor {
    pub point_id: String,
    pub depth: f64,
    pub bottom: f64,
    pub description: String,
}

impl SoilDescriptor {
    pub fn new(
        point_id: impl Into<String>,
        depth: f64,
        bottom: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            point_id: point_id.into(),
            depth,
            bottom,
            description: description.into(),
        }
    }

    /// Strict overlap with the half-open range `[depth, bottom)`.
    ///
    /// Ranges that only touch at a boundary do not overlap.
    pub fn overlaps(&self, depth: f64, bottom: f64) -> bool {
        self.depth < bottom && self.bottom > depth
    }
}

pub(crate) fn is_valid_range(depth: f64, bottom: f64) -> bool {
    depth.is_finite() && bottom.is_finite() && depth >= 0.0 && depth < bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_interval() {
        assert!(StrataInterval::new("BH01", 0.0, 2.0, "Sand").is_valid());
        assert!(StrataInterval::new("BH01", 1.5, 1.6, "Sand").is_valid());
    }

    #[test]
    fn inverted_or_empty_interval_is_invalid() {
        assert!(!StrataInterval::new("BH01", 2.0, 2.0, "Sand").is_valid());
        assert!(!StrataInterval::new("BH01", 3.0, 1.0, "Sand").is_valid());
    }

    #[test]
    fn negative_or_nan_interval_is_invalid() {
        assert!(!StrataInterval::new("BH01", -1.0, 2.0, "Sand").is_valid());
        assert!(!StrataInterval::new("BH01", f64::NAN, 2.0, "Sand").is_valid());
        assert!(!StrataInterval::new("BH01", 0.0, f64::INFINITY, "Sand").is_valid());
    }

    #[test]
    fn containment_is_closed() {
        let sub = StrataInterval::new("BH01", 1.0, 3.0, "Clay").into_sub_layer();
        let same = StrataInterval::new("BH01", 1.0, 3.0, "Sand");
        let wider = StrataInterval::new("BH01", 0.0, 5.0, "Sand");
        let inner = StrataInterval::new("BH01", 1.5, 2.0, "Sand");

        assert!(same.is_within(&sub));
        assert!(inner.is_within(&sub));
        assert!(!wider.is_within(&sub));
        assert!(sub.is_within(&wider));
    }

    #[test]
    fn descriptor_overlap_excludes_touching_ranges() {
        let d = SoilDescriptor::new("BH01", 2.0, 4.0, "Stiff CLAY");
        assert!(d.overlaps(0.0, 3.0));
        assert!(d.overlaps(3.0, 6.0));
        assert!(d.overlaps(2.5, 3.5));
        assert!(!d.overlaps(0.0, 2.0));
        assert!(!d.overlaps(4.0, 6.0));
    }

    #[test]
    fn sub_layer_flag_defaults_to_false_when_absent() {
        let json = r#"{"point_id":"BH01","depth":0.0,"bottom":1.0,"geology_unit":"Fill"}"#;
        let interval: StrataInterval = serde_json::from_str(json).unwrap();
        assert!(!interval.sub_layer);
        assert_eq!(interval.thickness(), 1.0);
    }
}
