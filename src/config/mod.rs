//! Ephemeris configuration
//!
//! Selects the precision of the nutation, obliquity and lunar models and
//! optionally a default observer. Every field has a default, so an empty
//! JSON object is a valid configuration.

use crate::nutationlib::{NutationModel, ObliquityModel};
use crate::planetlib::MoonModel;
use crate::{AstroError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Observer on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Degrees north
    pub latitude: f64,
    /// Degrees west of Greenwich
    pub longitude: f64,
    /// Metres above sea level
    #[serde(default)]
    pub height_m: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            height_m: 0.0,
        }
    }
}

/// Model choices used by [`crate::Ephemeris`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub nutation: NutationModel,
    pub obliquity: ObliquityModel,
    pub moon: MoonModel,
    pub observer: Option<Observer>,
}

impl EphemerisConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!("Loaded ephemeris config: {:?}", config);
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading ephemeris config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if let Some(observer) = &self.observer {
            if !(-90.0..=90.0).contains(&observer.latitude) {
                return Err(AstroError::Config(format!(
                    "observer latitude {} outside [-90, 90]",
                    observer.latitude
                )));
            }
            if !observer.longitude.is_finite() || !observer.height_m.is_finite() {
                return Err(AstroError::Config(
                    "observer longitude and height must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        let config = EphemerisConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EphemerisConfig::default());
        assert_eq!(config.nutation, NutationModel::Full);
        assert_eq!(config.obliquity, ObliquityModel::Cubic);
        assert_eq!(config.moon, MoonModel::Precise);
        assert!(config.observer.is_none());
    }

    #[test]
    fn test_parse_models_and_observer() {
        let json = r#"{
            "nutation": "legacy1900",
            "obliquity": "laskar",
            "moon": "truncated",
            "observer": { "latitude": 40.0, "longitude": 75.0 }
        }"#;
        let config = EphemerisConfig::from_json_str(json).unwrap();
        assert_eq!(config.nutation, NutationModel::Legacy1900);
        assert_eq!(config.obliquity, ObliquityModel::Laskar);
        assert_eq!(config.moon, MoonModel::Truncated);
        assert_eq!(config.observer, Some(Observer::new(40.0, 75.0)));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            EphemerisConfig::from_json_str(r#"{ "moon": "approximate" }"#),
            Err(AstroError::Json(_))
        ));
        assert!(matches!(
            EphemerisConfig::from_json_str(
                r#"{ "observer": { "latitude": 95.0, "longitude": 0.0 } }"#
            ),
            Err(AstroError::Config(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "nutation": "abridged" }}"#).unwrap();

        let config = EphemerisConfig::from_path(file.path()).unwrap();
        assert_eq!(config.nutation, NutationModel::Abridged);

        let missing = EphemerisConfig::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(AstroError::Io(_))));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = EphemerisConfig {
            observer: Some(Observer::new(-33.9, -151.2)),
            ..EphemerisConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EphemerisConfig::from_json_str(&json).unwrap(), config);
    }
}
