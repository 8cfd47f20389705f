//! Render configuration.
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! changes:
//!
//! ```json
//! { "sub_layers": false, "color_strategy": "first_seen" }
//! ```

use crate::colors::ColorStrategy;
use gi_model::color::DARK24;
use gi_model::{Color, ColorParseError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    /// Let sub-layer rows supersede the main intervals they contain
    pub sub_layers: bool,
    pub color_strategy: ColorStrategy,
    /// Line width of strata segments in the 3D chart (px)
    pub line_width: u32,
    /// Default colours as `#rrggbb`
    pub palette: Vec<String>,
}

impl Default for StrataConfig {
    fn default() -> Self {
        Self {
            sub_layers: true,
            color_strategy: ColorStrategy::LabelHash,
            line_width: 7,
            palette: DARK24.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl StrataConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: StrataConfig = serde_json::from_str(json)?;
        config.palette_colors()?;
        Ok(config)
    }

    pub fn palette_colors(&self) -> Result<Vec<Color>, ColorParseError> {
        Color::parse_palette(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StrataConfig::default();
        assert!(config.sub_layers);
        assert_eq!(config.color_strategy, ColorStrategy::LabelHash);
        assert_eq!(config.line_width, 7);
        assert_eq!(config.palette_colors().unwrap(), Color::dark24());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            StrataConfig::from_json(r#"{"sub_layers": false, "color_strategy": "first_seen"}"#)
                .unwrap();
        assert!(!config.sub_layers);
        assert_eq!(config.color_strategy, ColorStrategy::FirstSeen);
        assert_eq!(config.line_width, 7);
        assert_eq!(config.palette.len(), 24);
    }

    #[test]
    fn rejects_bad_palette_and_unknown_strategy() {
        assert!(StrataConfig::from_json(r##"{"palette": ["#12345"]}"##).is_err());
        assert!(StrataConfig::from_json(r#"{"color_strategy": "random"}"#).is_err());
    }
}
