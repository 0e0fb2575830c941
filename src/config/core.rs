use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use crate::errors::ConfigError;

/// Root configuration structure for starscore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StarscoreConfig {
    /// Rendering configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

impl StarscoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()
    }
}

/// Template written by `starscore init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# Starscore Configuration

[display]
# Total width of the star row in pixels (50..=1000)
width_px = 200
gold_asset_path = "/images/star_gold.png"
dim_asset_path = "/images/star_dim.png"
gold_color = "#f5a623"
dim_color = "#ccc"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: StarscoreConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, StarscoreConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: StarscoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.width_px, 200);
    }
}
