//! Positions of the Sun, Moon and planets
//!
//! Planets are computed from mean orbital elements: the mean anomaly is
//! put through Kepler's equation and the resulting orbit projected onto the
//! ecliptic, giving heliocentric coordinates referred to the mean equinox
//! of date. Only Uranus carries perturbation terms. Pluto uses constant
//! elements and is the least accurate body here.
//!
//! The Sun and the Moon have their own theories and are geocentric.
//! [`Ephemeris`] ties the models together and converts heliocentric
//! positions to geocentric, equatorial and horizontal coordinates.

use crate::config::{EphemerisConfig, Observer};
use crate::constants::{DEG2RAD, JULIAN_CENTURY, RAD2DEG};
use crate::coordinates::angle::{asind, atan2d, limit_angle};
use crate::coordinates::{delta_polar, Equatorial, Horizontal, Polar};
use crate::framelib::{ecliptic_to_equatorial_with_obliquity, equatorial_to_horizontal};
use crate::keplerlib::{eccentric_anomaly, true_anomaly};
use crate::time::{hour_of_day, Epoch, JulianDate};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

mod elements;
pub mod moon;
pub mod sun;
pub mod uranus;

use elements::{element_table, polynomial};

pub use moon::{moon_precise, moon_truncated, MoonModel};
pub use sun::{
    earth_state, solar_noon, sun_ecliptic, sun_equatorial, sun_equatorial_with_nutation, sun_gha,
    sun_horizontal, sun_state, sunrise, sunset,
};
pub use uranus::uranus_state;

/// Enum representing the major solar system bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Every body, in order of distance from the Sun
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// True for bodies whose state is geocentric rather than heliocentric
    pub fn is_geocentric(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orbital elements of a body at one date, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub date: JulianDate,
    /// Mean longitude L
    pub mean_longitude: f64,
    /// Mean motion in longitude, degrees per day
    pub daily_motion: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// Longitude of the ascending node
    pub ascending_node: f64,
    /// Argument of perihelion w
    pub argument_of_perihelion: f64,
    /// Longitude of perihelion, the node plus w
    pub longitude_of_perihelion: f64,
    /// Mean anomaly M
    pub mean_anomaly: f64,
    /// AU
    pub semi_major_axis: f64,
    /// Angular diameter at 1 AU, arcseconds
    pub angular_diameter: f64,
    /// Visual magnitude at 1 AU
    pub magnitude: f64,
    /// Orbital period in days
    pub period: f64,
}

/// Snapshot of a body at one date
///
/// `position` is heliocentric ecliptic (AU) for the planets and the Earth,
/// and geocentric for the Sun (AU) and the Moon (kilometres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub elements: OrbitalElements,
    /// True anomaly v in degrees
    pub true_anomaly: f64,
    pub position: Polar,
    /// Horizontal parallax in degrees; zero except for the Moon
    pub parallax: f64,
}

/// Mean orbital elements of a planet at `jd`
///
/// The Sun and the Earth share the elements of the Earth's orbit. The Moon
/// has no elements in this sense and gets the values its theory provides.
pub fn orbital_elements(body: Body, jd: JulianDate) -> OrbitalElements {
    let Some(table) = element_table(body) else {
        return match body {
            Body::Moon => moon_precise(jd).elements,
            _ => earth_state(jd).elements,
        };
    };

    let t = Epoch::J1900.centuries(jd);
    let mean_longitude = limit_angle(polynomial(&table.mean_longitude, t));
    let longitude_of_perihelion = limit_angle(polynomial(&table.longitude_of_perihelion, t));
    let ascending_node = limit_angle(polynomial(&table.ascending_node, t));

    let argument_of_perihelion = match &table.argument_of_perihelion {
        Some(coeffs) => limit_angle(polynomial(coeffs, t)),
        None => limit_angle(longitude_of_perihelion - ascending_node),
    };
    let mean_anomaly = match &table.mean_anomaly {
        Some(coeffs) => limit_angle(polynomial(coeffs, t)),
        None => limit_angle(mean_longitude - longitude_of_perihelion),
    };

    let rate = table.mean_longitude[1];
    OrbitalElements {
        date: jd,
        mean_longitude,
        daily_motion: rate / JULIAN_CENTURY,
        eccentricity: polynomial(&table.eccentricity, t),
        inclination: limit_angle(polynomial(&table.inclination, t)),
        ascending_node,
        argument_of_perihelion,
        longitude_of_perihelion,
        mean_anomaly,
        semi_major_axis: table.semi_major_axis,
        angular_diameter: table.angular_diameter,
        magnitude: table.magnitude,
        period: 360.0 * JULIAN_CENTURY / rate,
    }
}

/// Heliocentric ecliptic position from a set of elements
///
/// Solves Kepler's equation for the eccentric anomaly, then projects the
/// argument of latitude `u = L - M - node + v` onto the ecliptic.
pub fn compute_heliocentric(elements: &OrbitalElements) -> BodyState {
    let e = elements.eccentricity;
    let ea = eccentric_anomaly(elements.mean_anomaly * DEG2RAD, e);
    let v = true_anomaly(ea, e);
    let r = elements.semi_major_axis * (1.0 - e * ea.cos());

    let i = elements.inclination * DEG2RAD;
    let u = (elements.mean_longitude - elements.mean_anomaly - elements.ascending_node) * DEG2RAD
        + v;

    let lon = limit_angle(atan2d(i.cos() * u.sin(), u.cos()) + elements.ascending_node);
    let lat = asind(u.sin() * i.sin());

    BodyState {
        elements: *elements,
        true_anomaly: limit_angle(v * RAD2DEG),
        position: Polar::new(lat, lon, r),
        parallax: 0.0,
    }
}

/// Solar-system ephemeris with a fixed choice of models
#[derive(Debug, Clone, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    /// Ephemeris with the high-precision models
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EphemerisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// State of `body` at `jd`
    ///
    /// Heliocentric for the planets and the Earth, geocentric for the Sun
    /// and the Moon.
    pub fn state(&self, body: Body, jd: JulianDate) -> BodyState {
        let state = match body {
            Body::Sun => sun_state(jd),
            Body::Moon => self.config.moon.state(jd),
            Body::Earth => earth_state(jd),
            Body::Uranus => uranus_state(jd),
            _ => compute_heliocentric(&orbital_elements(body, jd)),
        };
        trace!(
            "{} at JD {}: lat {:.6} lon {:.6} r {:.6}",
            body,
            jd,
            state.position.lat,
            state.position.lon,
            state.position.r
        );
        state
    }

    /// Geocentric ecliptic position of `body`
    ///
    /// Distances are in AU except for the Moon (kilometres). The Earth is
    /// at the origin.
    pub fn geocentric(&self, body: Body, jd: JulianDate) -> Polar {
        if body.is_geocentric() {
            return self.state(body, jd).position;
        }
        let earth = earth_state(jd).position;
        delta_polar(&earth, &self.state(body, jd).position)
    }

    /// Geocentric equatorial position of `body` and its distance
    ///
    /// The Sun uses its own equatorial theory corrected by the configured
    /// nutation model; other bodies are rotated through the configured mean
    /// obliquity.
    pub fn equatorial(&self, body: Body, jd: JulianDate) -> (Equatorial, f64) {
        if body == Body::Sun {
            return sun_equatorial_with_nutation(jd, self.config.nutation);
        }
        let p = self.geocentric(body, jd);
        let eps = self.config.obliquity.mean_obliquity(jd);
        (ecliptic_to_equatorial_with_obliquity(&p.ecliptic(), eps), p.r)
    }

    /// Altitude and azimuth of `body` for `observer` at the instant `jd`
    pub fn horizontal(&self, body: Body, jd: JulianDate, observer: &Observer) -> Horizontal {
        let (eq, _) = self.equatorial(body, jd);
        equatorial_to_horizontal(
            &eq,
            observer.latitude,
            observer.longitude,
            jd,
            hour_of_day(jd),
        )
    }
}
