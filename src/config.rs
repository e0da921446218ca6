//! Sphere view configuration
//!
//! Named scalar parameters driving a redraw. Stored as RON; missing fields
//! fall back to the defaults below.

use std::fs;
use std::path::Path;

use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameter names as shown by the configuration panel
pub mod names {
    pub const RADIUS: &str = "Radius";
    pub const ZOOM: &str = "Zoom";
    pub const MERIDIANS: &str = "Number of meridians";
    pub const PARALLELS: &str = "Number of parallels";
    pub const ROTATE_X: &str = "Rotate X";
    pub const ROTATE_Y: &str = "Rotate Y";

    pub const ALL: [&str; 6] = [RADIUS, ZOOM, MERIDIANS, PARALLELS, ROTATE_X, ROTATE_Y];
}

/// Error type for configuration handling
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("need at least 3 meridians, got {0}")]
    TooFewMeridians(usize),
    #[error("need at least 1 parallel, got {0}")]
    TooFewParallels(usize),
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Parameters of one sphere redraw. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f64,
    /// Depth translation applied before projection
    pub zoom: f64,
    pub meridians: usize,
    pub parallels: usize,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            zoom: 1.5,
            meridians: 50,
            parallels: 50,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }
}

impl SphereConfig {
    /// Check the invariants the mesh and transforms rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meridians < 3 {
            return Err(ConfigError::TooFewMeridians(self.meridians));
        }
        if self.parallels < 1 {
            return Err(ConfigError::TooFewParallels(self.parallels));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        for (name, value) in [
            (names::ZOOM, self.zoom),
            (names::ROTATE_X, self.rotate_x),
            (names::ROTATE_Y, self.rotate_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Set one parameter by its panel name. Counts are truncated toward
    /// zero; the result is not validated.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        let key = names::ALL
            .iter()
            .copied()
            .find(|n| *n == name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))?;
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { name: key, value });
        }
        match key {
            names::RADIUS => self.radius = value,
            names::ZOOM => self.zoom = value,
            names::MERIDIANS => self.meridians = value as usize,
            names::PARALLELS => self.parallels = value as usize,
            names::ROTATE_X => self.rotate_x = value,
            _ => self.rotate_y = value,
        }
        Ok(())
    }

    /// Copy of `self` with all `params` applied, validated
    pub fn with_parameters(&self, params: &[(&str, f64)]) -> Result<Self, ConfigError> {
        let mut next = *self;
        for &(name, value) in params {
            next.set_parameter(name, value)?;
        }
        next.validate()?;
        Ok(next)
    }

    /// Current values as (panel name, value) pairs
    pub fn parameters(&self) -> [(&'static str, f64); 6] {
        [
            (names::RADIUS, self.radius),
            (names::ZOOM, self.zoom),
            (names::MERIDIANS, self.meridians as f64),
            (names::PARALLELS, self.parallels as f64),
            (names::ROTATE_X, self.rotate_x),
            (names::ROTATE_Y, self.rotate_y),
        ]
    }

    /// Parse and validate a RON string
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: SphereConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents).map_err(|e| {
            error!("Failed to load config {}: {}", path.display(), e);
            e
        })
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save as a pretty RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SphereConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.meridians, 50);
        assert_eq!(config.zoom, 1.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SphereConfig::default();
        let cases = [
            SphereConfig { meridians: 2, ..base },
            SphereConfig { parallels: 0, ..base },
            SphereConfig { radius: -1.0, ..base },
            SphereConfig { radius: f64::INFINITY, ..base },
            SphereConfig { zoom: f64::NAN, ..base },
            SphereConfig { rotate_y: f64::NEG_INFINITY, ..base },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_set_parameter_by_name() {
        let config = SphereConfig::default()
            .with_parameters(&[
                (names::RADIUS, 2.0),
                (names::MERIDIANS, 12.9),
                (names::ROTATE_X, 0.25),
            ])
            .unwrap();
        assert_eq!(config.radius, 2.0);
        assert_eq!(config.meridians, 12);
        assert_eq!(config.rotate_x, 0.25);
        assert_eq!(config.parallels, 50);
    }

    #[test]
    fn test_unknown_and_invalid_parameters() {
        let config = SphereConfig::default();
        assert!(matches!(
            config.with_parameters(&[("Colour", 1.0)]),
            Err(ConfigError::UnknownParameter(_))
        ));
        assert!(matches!(
            config.with_parameters(&[(names::ZOOM, f64::NAN)]),
            Err(ConfigError::NonFinite { name: "Zoom", .. })
        ));
        assert!(matches!(
            config.with_parameters(&[(names::PARALLELS, -4.0)]),
            Err(ConfigError::TooFewParallels(0))
        ));
    }

    #[test]
    fn test_parameters_cover_all_names() {
        let params = SphereConfig::default().parameters();
        let listed: Vec<&str> = params.iter().map(|(n, _)| *n).collect();
        assert_eq!(listed, names::ALL.to_vec());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = SphereConfig::from_ron("(meridians: 8, rotate_y: 0.5)").unwrap();
        assert_eq!(config.meridians, 8);
        assert_eq!(config.rotate_y, 0.5);
        assert_eq!(config.radius, 1.0);
    }

    #[test]
    fn test_invalid_ron_rejected() {
        assert!(matches!(SphereConfig::from_ron("(meridians: \"many\")"), Err(ConfigError::Parse(_))));
        assert!(matches!(SphereConfig::from_ron("(meridians: 1)"), Err(ConfigError::TooFewMeridians(1))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.ron");
        let config = SphereConfig { radius: 0.75, zoom: 3.0, meridians: 24, parallels: 12, rotate_x: 0.1, rotate_y: -0.2 };
        config.save(&path).unwrap();
        assert_eq!(SphereConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(SphereConfig::load(dir.path().join("nope.ron")), Err(ConfigError::Io(_))));
    }
}
