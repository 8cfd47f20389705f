use crate::number::format_value;
use serde::{Deserialize, Serialize};

/// A moisture content test result from the `Moisture Content` sheet.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MoistureSample {
    /// PointID of the borehole the sample came from
    pub id: String,
    /// Geology unit the sample was taken in
    pub origin: String,
    /// Sample top depth (m)
    pub from: f64,
    /// Sample bottom depth (m)
    pub to: f64,
    /// Sample elevation (m AHD), as reported by the lab
    pub elevation: f64,
    /// Moisture content (%)
    pub moisture_content: f64,
}

/// A moisture sample joined to its borehole location.
///
/// Unlike strata, the vertical position comes from the sample's own reported
/// elevation, not from the borehole collar.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MoisturePoint {
    pub point_id: String,
    pub east: f64,
    pub north: f64,
    pub sample_elevation: f64,
    pub from: f64,
    pub to: f64,
    pub moisture_content: f64,
    pub geology_unit: String,
    pub hover_text: String,
}

impl MoisturePoint {
    pub fn hover_text_for(
        point_id: &str,
        from: f64,
        to: f64,
        moisture_content: f64,
        geology_unit: &str,
    ) -> String {
        format!(
            "ID: {} ({} - {}m)<br>Moisture Content: {}%<br>Geology Unit: {}",
            point_id,
            format_value(from),
            format_value(to),
            format_value(moisture_content),
            geology_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MoisturePoint;

    #[test]
    fn hover_text_cites_interval_and_unit() {
        let text = MoisturePoint::hover_text_for("BH02", 1.5, 1.95, 23.4, "Alluvium");
        assert_eq!(
            text,
            "ID: BH02 (1.5 - 1.95m)<br>Moisture Content: 23.4%<br>Geology Unit: Alluvium"
        );
    }

    #[test]
    fn hover_text_keeps_whole_metres_decimal() {
        let text = MoisturePoint::hover_text_for("BH02", 3.0, 4.0, 20.0, "Fill");
        assert_eq!(
            text,
            "ID: BH02 (3.0 - 4.0m)<br>Moisture Content: 20.0%<br>Geology Unit: Fill"
        );
    }
}
