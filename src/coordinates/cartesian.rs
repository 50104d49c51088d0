//! # Rectangular and polar coordinates
//!
//! Positions of bodies are produced as latitude, longitude and radius. To
//! move the origin (heliocentric to geocentric, say) they are converted to
//! rectangular vectors, differenced, and converted back.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: toward longitude 0, latitude 0
//! - **Y-axis**: toward longitude 90, latitude 0
//! - **Z-axis**: toward latitude +90
//!
//! ```rust
//! use astrocalc::coordinates::{polar_to_rectangular, Polar};
//!
//! let v = polar_to_rectangular(&Polar::new(0.0, 90.0, 2.0));
//! assert!((v.y - 2.0).abs() < 1e-12);
//! ```

use super::angle::{atan2d, cosd, limit_angle, sind};
use super::Polar;
use crate::constants::RAD2DEG;
use nalgebra::Vector3;

/// Convert latitude, longitude and radius into a rectangular vector
pub fn polar_to_rectangular(p: &Polar) -> Vector3<f64> {
    let cos_lat = cosd(p.lat);
    Vector3::new(
        p.r * cos_lat * cosd(p.lon),
        p.r * cos_lat * sind(p.lon),
        p.r * sind(p.lat),
    )
}

/// Convert a rectangular vector into latitude, longitude and radius
///
/// The zero vector maps to `lat = lon = r = 0`. Longitude is in `[0, 360)`.
pub fn rectangular_to_polar(v: &Vector3<f64>) -> Polar {
    let r = v.norm();
    if r == 0.0 {
        return Polar::new(0.0, 0.0, 0.0);
    }

    let lat = (v.z / r).clamp(-1.0, 1.0).asin() * RAD2DEG;
    let lon = limit_angle(atan2d(v.y, v.x));
    Polar::new(lat, lon, r)
}

/// Position of `b` as seen from `a`
///
/// Both inputs share an origin; the result is `b - a` expressed in polar
/// form, e.g. a planet's heliocentric position minus the Earth's gives the
/// planet's geocentric position.
pub fn delta_polar(a: &Polar, b: &Polar) -> Polar {
    let diff = polar_to_rectangular(b) - polar_to_rectangular(a);
    rectangular_to_polar(&diff)
}
