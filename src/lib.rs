//! Astrocalc: positions of the Sun, Moon and planets after Jean Meeus
//!
//! This crate turns Julian dates into ecliptic, equatorial and horizontal
//! coordinates for solar-system bodies, and carries the time-scale, Earth
//! orientation and celestial-navigation helpers those pipelines need.
//!
//! Angles are plain `f64` values. Declination, latitude and longitude are in
//! degrees, right ascension and sidereal time in hours, unless a function
//! says otherwise.

use thiserror::Error;

pub mod catalogs;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod keplerlib;
pub mod navigation;
pub mod nutationlib;
pub mod planetlib;
pub mod precessionlib;
pub mod time;

// Re-export commonly used types
pub use config::{EphemerisConfig, Observer};
pub use coordinates::{Ecliptic, Equatorial, Horizontal, Polar};
pub use planetlib::{Body, BodyState, Ephemeris};
pub use time::{CivilDateTime, JulianDate};

/// Main error type for the astrocalc library
///
/// The position pipelines are total functions; errors only come from the
/// configuration and catalog surfaces.
#[derive(Debug, Error)]
pub enum AstroError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for astrocalc operations
pub type Result<T> = std::result::Result<T, AstroError>;

// Re-export CelestialObject trait from celestial module
pub use celestial::CelestialObject;
