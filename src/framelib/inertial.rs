//! Equatorial and ecliptic frames
//!
//! Both are inertial frames sharing the equinox as origin of longitude;
//! converting between them is a rotation about the x axis by the obliquity.
//! Right ascension is in hours, every other angle in degrees.

use crate::coordinates::angle::{
    asind, atan2d, cosd, degrees_to_hours, hours_to_degrees, limit_angle, limit_hour, sind, tand,
};
use crate::coordinates::cartesian::{polar_to_rectangular, rectangular_to_polar};
use crate::coordinates::{Ecliptic, Equatorial, Polar};
use crate::nutationlib::obliquity;
use crate::time::JulianDate;
use nalgebra::Vector3;

// Marker trait for inertial coordinate systems
pub trait InertialFrame: Sized {
    fn to_vector(&self) -> Vector3<f64>;
    fn from_vector(v: &Vector3<f64>) -> Self;

    /// Great-circle separation in degrees
    fn angle_between(&self, other: &Self) -> f64 {
        let a = self.to_vector();
        let b = other.to_vector();

        let cos_angle = a.dot(&b) / (a.norm() * b.norm());

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            180.0
        } else {
            cos_angle.acos().to_degrees()
        }
    }
}

impl InertialFrame for Equatorial {
    fn to_vector(&self) -> Vector3<f64> {
        polar_to_rectangular(&Polar::new(self.dec, hours_to_degrees(self.ra), 1.0))
    }

    fn from_vector(v: &Vector3<f64>) -> Self {
        let p = rectangular_to_polar(v);
        Equatorial::new(p.lat, degrees_to_hours(p.lon))
    }
}

impl InertialFrame for Ecliptic {
    fn to_vector(&self) -> Vector3<f64> {
        polar_to_rectangular(&Polar::new(self.lat, self.lon, 1.0))
    }

    fn from_vector(v: &Vector3<f64>) -> Self {
        let p = rectangular_to_polar(v);
        Ecliptic::new(p.lat, p.lon)
    }
}

/// Equatorial to ecliptic coordinates for a given obliquity in degrees
pub fn equatorial_to_ecliptic_with_obliquity(eq: &Equatorial, obliquity: f64) -> Ecliptic {
    let ra = hours_to_degrees(eq.ra);
    let lon = atan2d(
        sind(ra) * cosd(obliquity) + tand(eq.dec) * sind(obliquity),
        cosd(ra),
    );
    let lat = asind(sind(eq.dec) * cosd(obliquity) - cosd(eq.dec) * sind(obliquity) * sind(ra));
    Ecliptic::new(lat, limit_angle(lon))
}

/// Ecliptic to equatorial coordinates for a given obliquity in degrees
pub fn ecliptic_to_equatorial_with_obliquity(ec: &Ecliptic, obliquity: f64) -> Equatorial {
    let ra = atan2d(
        sind(ec.lon) * cosd(obliquity) - tand(ec.lat) * sind(obliquity),
        cosd(ec.lon),
    );
    let dec = asind(sind(ec.lat) * cosd(obliquity) + cosd(ec.lat) * sind(obliquity) * sind(ec.lon));
    Equatorial::new(dec, limit_hour(degrees_to_hours(ra)))
}

/// Equatorial to ecliptic coordinates using the mean obliquity at `jd`
pub fn equatorial_to_ecliptic(eq: &Equatorial, jd: JulianDate) -> Ecliptic {
    equatorial_to_ecliptic_with_obliquity(eq, obliquity(jd))
}

/// Ecliptic to equatorial coordinates using the mean obliquity at `jd`
pub fn ecliptic_to_equatorial(ec: &Ecliptic, jd: JulianDate) -> Equatorial {
    ecliptic_to_equatorial_with_obliquity(ec, obliquity(jd))
}
