//! Board configuration.
//!
//! A game is fully determined by where the board is centred and how far it
//! extends. Defaults reproduce the standard board: radius 3 around `(3, 3)`,
//! 37 cells and 20 stones.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::hex::Hex;

/// Smallest radius whose outer ring does not swallow the two interior stones.
pub const MIN_RADIUS: u32 = 2;

/// Largest accepted radius. The standard layout has `6r + 2` stones, and
/// every stone needs a `StoneId`.
pub const MAX_RADIUS: u32 = 256;

/// Largest accepted hex distance from the origin to the board center.
/// Boards stay far enough from the `i32` bounds that no cell arithmetic on
/// or next to the board wraps.
pub const MAX_CENTER_DISTANCE: u64 = 1 << 28;

/// Board geometry parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Center cell of the hexagonal board.
    pub center: Hex,

    /// Distance from the center to the outer ring.
    pub radius: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            center: Hex::new(3, 3),
            radius: 3,
        }
    }
}

impl BoardConfig {
    /// Set the radius.
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Check the geometry can hold the starting layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius < MIN_RADIUS {
            return Err(ConfigError::RadiusTooSmall {
                radius: self.radius,
                min: MIN_RADIUS,
            });
        }
        if self.radius > MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.radius,
                max: MAX_RADIUS,
            });
        }
        if self.center.distance(Hex::default()) > MAX_CENTER_DISTANCE {
            return Err(ConfigError::CenterOutOfRange {
                center: self.center,
                max: MAX_CENTER_DISTANCE,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// ```
    /// use paradox_engine::core::{BoardConfig, Hex};
    ///
    /// let config = BoardConfig::from_toml_str("radius = 4\ncenter = { q = 0, r = 0 }").unwrap();
    /// assert_eq!(config.radius, 4);
    /// assert_eq!(config.center, Hex::new(0, 0));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.center, Hex::new(3, 3));
        assert_eq!(config.radius, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_radius() {
        let config = BoardConfig::default().with_radius(1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RadiusTooSmall { radius: 1, min: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_large_radius() {
        assert!(BoardConfig::default().with_radius(MAX_RADIUS).validate().is_ok());
        assert!(matches!(
            BoardConfig::default().with_radius(MAX_RADIUS + 1).validate(),
            Err(ConfigError::RadiusTooLarge { radius: 257, max: MAX_RADIUS })
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("radius = 3000000000"),
            Err(ConfigError::RadiusTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_far_center() {
        let near_edge = BoardConfig {
            center: Hex::new(i32::MAX - 1, 0),
            radius: 3,
        };
        assert!(matches!(
            near_edge.validate(),
            Err(ConfigError::CenterOutOfRange { .. })
        ));

        let far = BoardConfig {
            center: Hex::new(1 << 28, -(1 << 28)),
            radius: 3,
        };
        assert!(far.validate().is_ok());

        assert!(matches!(
            BoardConfig::from_toml_str("center = { q = -2147483648, r = 0 }"),
            Err(ConfigError::CenterOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = BoardConfig::from_toml_str("radius = 5").unwrap();
        assert_eq!(config.radius, 5);
        assert_eq!(config.center, Hex::new(3, 3));

        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            BoardConfig::from_toml_str("radius = 0"),
            Err(ConfigError::RadiusTooSmall { .. })
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("radius = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
