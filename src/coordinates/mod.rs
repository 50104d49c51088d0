//! Coordinate value types shared by the frame transforms and body models

use serde::{Deserialize, Serialize};

pub mod angle;
pub mod cartesian;

pub use cartesian::{delta_polar, polar_to_rectangular, rectangular_to_polar};

/// Equatorial coordinates: declination in degrees, right ascension in hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Declination, degrees north of the celestial equator
    pub dec: f64,
    /// Right ascension, hours in `[0, 24)`
    pub ra: f64,
}

impl Equatorial {
    pub fn new(dec: f64, ra: f64) -> Self {
        Self { dec, ra }
    }

    /// Right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        angle::hours_to_degrees(self.ra)
    }
}

/// Ecliptic coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    /// Latitude above the ecliptic
    pub lat: f64,
    /// Longitude from the vernal equinox, `[0, 360)`
    pub lon: f64,
}

impl Ecliptic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Local horizontal coordinates in degrees
///
/// Azimuth is measured from North through East.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Spherical coordinates with a radius: latitude and longitude in degrees
///
/// The radius unit follows the producer (AU for planets, km for the Moon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub lat: f64,
    pub lon: f64,
    pub r: f64,
}

impl Polar {
    pub fn new(lat: f64, lon: f64, r: f64) -> Self {
        Self { lat, lon, r }
    }

    /// Drop the radius and read the angles as ecliptic coordinates
    pub fn ecliptic(&self) -> Ecliptic {
        Ecliptic::new(self.lat, self.lon)
    }
}
