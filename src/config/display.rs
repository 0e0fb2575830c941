use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Smallest accepted row width in pixels.
pub const MIN_WIDTH_PX: u32 = 50;
/// Largest accepted row width in pixels.
pub const MAX_WIDTH_PX: u32 = 1000;

/// Rendering configuration passed explicitly into the projection and
/// markup functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Total width of the star row in pixels (default: 200)
    #[serde(default = "default_width_px")]
    pub width_px: u32,

    /// Image drawn for the lit part of a star
    #[serde(default = "default_gold_asset_path")]
    pub gold_asset_path: String,

    /// Image drawn behind every star
    #[serde(default = "default_dim_asset_path")]
    pub dim_asset_path: String,

    /// Gradient colour for the lit part of a partial widget star
    #[serde(default = "default_gold_color")]
    pub gold_color: String,

    /// Gradient colour for the unlit part of a partial widget star
    #[serde(default = "default_dim_color")]
    pub dim_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: default_width_px(),
            gold_asset_path: default_gold_asset_path(),
            dim_asset_path: default_dim_asset_path(),
            gold_color: default_gold_color(),
            dim_color: default_dim_color(),
        }
    }
}

impl DisplayConfig {
    pub fn with_width(mut self, width_px: u32) -> Self {
        self.width_px = width_px;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH_PX..=MAX_WIDTH_PX).contains(&self.width_px) {
            return Err(ConfigError::invalid(
                "width_px",
                format!(
                    "{} is outside {}..={}",
                    self.width_px, MIN_WIDTH_PX, MAX_WIDTH_PX
                ),
            ));
        }
        if self.gold_asset_path.trim().is_empty() {
            return Err(ConfigError::invalid("gold_asset_path", "must not be empty"));
        }
        if self.dim_asset_path.trim().is_empty() {
            return Err(ConfigError::invalid("dim_asset_path", "must not be empty"));
        }
        Ok(())
    }

    /// One-line settings summary.
    pub fn summary(&self) -> String {
        format!("Width: {}px", self.width_px)
    }
}

fn default_width_px() -> u32 {
    200
}

fn default_gold_asset_path() -> String {
    "/images/star_gold.png".to_string()
}

fn default_dim_asset_path() -> String {
    "/images/star_dim.png".to_string()
}

fn default_gold_color() -> String {
    "#f5a623".to_string()
}

fn default_dim_color() -> String {
    "#ccc".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DisplayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.summary(), "Width: 200px");
    }

    #[test]
    fn test_width_bounds() {
        assert!(DisplayConfig::default().with_width(50).validate().is_ok());
        assert!(DisplayConfig::default().with_width(1000).validate().is_ok());
        assert!(DisplayConfig::default().with_width(49).validate().is_err());
        assert!(DisplayConfig::default().with_width(1001).validate().is_err());
    }

    #[test]
    fn test_empty_asset_path_rejected() {
        let config = DisplayConfig {
            dim_asset_path: "  ".into(),
            ..DisplayConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
