//! Objects with a position on the sky

use crate::catalogs::CatalogStar;
use crate::config::Observer;
use crate::constants::J2000;
use crate::coordinates::{Equatorial, Horizontal};
use crate::framelib::equatorial_to_horizontal;
use crate::planetlib::{Body, Ephemeris};
use crate::precessionlib::precession;
use crate::time::{hour_of_day, JulianDate};

/// A trait for objects that have a position in the sky
pub trait CelestialObject {
    /// Geocentric equatorial position referred to the equinox of `jd`
    fn position_at(&self, jd: JulianDate) -> Equatorial;

    /// Altitude and azimuth for an observer at the instant `jd`
    fn horizontal_at(&self, observer: &Observer, jd: JulianDate) -> Horizontal {
        equatorial_to_horizontal(
            &self.position_at(jd),
            observer.latitude,
            observer.longitude,
            jd,
            hour_of_day(jd),
        )
    }
}

/// Solar-system bodies, with the default models
impl CelestialObject for Body {
    fn position_at(&self, jd: JulianDate) -> Equatorial {
        Ephemeris::new().equatorial(*self, jd).0
    }
}

/// Catalog stars, moved along their proper motion and precessed from J2000
impl CelestialObject for CatalogStar {
    fn position_at(&self, jd: JulianDate) -> Equatorial {
        precession(&self.at_epoch(jd).position(), J2000, jd)
    }
}
