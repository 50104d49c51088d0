//! The Sun, and the Earth as seen from it
//!
//! [`sun_ecliptic`] is the low-precision theory with centuries from 1900:
//! mean longitude and anomaly plus a three-term equation of the centre.
//! [`sun_equatorial`] uses the J2000 coefficients and the true obliquity,
//! and is good to about 0.01 degree. The rise, set and noon helpers follow
//! the usual sunrise equation and are good to about a minute.
//!
//! Observer longitudes are positive west of Greenwich.

use super::{BodyState, OrbitalElements};
use crate::constants::{J2000, JULIAN_CENTURY, TROPICAL_YEAR};
use crate::coordinates::angle::{acosd, asind, atan2d, cosd, degrees_to_hours, limit_angle, sind};
use crate::coordinates::{Equatorial, Horizontal, Polar};
use crate::framelib::equatorial_to_horizontal;
use crate::nutationlib::{obliquity, NutationModel};
use crate::time::{hour_of_day, Epoch, JulianDate};

/// Apparent angular diameter of the Sun at 1 AU, arcseconds
const SUN_DIAMETER: f64 = 1_919.26;

/// Apparent visual magnitude of the Sun at 1 AU
const SUN_MAGNITUDE: f64 = -26.74;

/// Mean motion of the Sun's mean longitude, degrees per century
const SUN_MEAN_MOTION: f64 = 36_000.768_92;

/// Altitude of the Sun's centre at rising and setting, with refraction
const HORIZON_ALTITUDE: f64 = -0.83;

/// Mean elements of the Earth's orbit and the Sun's equation of the centre
struct SolarTheory {
    mean_longitude: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    equation_of_centre: f64,
}

impl SolarTheory {
    fn new(jd: JulianDate) -> Self {
        let t = Epoch::J1900.centuries(jd);
        let t2 = t * t;

        let l = 279.696_68 + SUN_MEAN_MOTION * t + 0.000_302_5 * t2;
        let m = 358.475_83 + 35_999.049_75 * t - 0.000_150 * t2 - 0.000_003_3 * t2 * t;
        let e = 0.016_751_04 - 0.000_041_8 * t - 0.000_000_126 * t2;
        let c = (1.919_460 - 0.004_789 * t - 0.000_014 * t2) * sind(m)
            + (0.020_094 - 0.000_100 * t) * sind(2.0 * m)
            + 0.000_293 * sind(3.0 * m);

        Self {
            mean_longitude: l,
            mean_anomaly: m,
            eccentricity: e,
            equation_of_centre: c,
        }
    }

    fn true_anomaly(&self) -> f64 {
        self.mean_anomaly + self.equation_of_centre
    }

    /// Earth-Sun distance in AU
    fn radius(&self) -> f64 {
        let e = self.eccentricity;
        1.000_002 * (1.0 - e * e) / (1.0 + e * cosd(self.true_anomaly()))
    }

    fn elements(&self, jd: JulianDate) -> OrbitalElements {
        let perihelion = limit_angle(self.mean_longitude - self.mean_anomaly);
        OrbitalElements {
            date: jd,
            mean_longitude: limit_angle(self.mean_longitude),
            daily_motion: SUN_MEAN_MOTION / JULIAN_CENTURY,
            eccentricity: self.eccentricity,
            inclination: 0.0,
            ascending_node: 0.0,
            argument_of_perihelion: perihelion,
            longitude_of_perihelion: perihelion,
            mean_anomaly: limit_angle(self.mean_anomaly),
            semi_major_axis: 1.0,
            angular_diameter: 0.0,
            magnitude: 0.0,
            period: TROPICAL_YEAR,
        }
    }
}

/// Geometric geocentric ecliptic position of the Sun; radius in AU
///
/// Latitude is zero by definition of the mean ecliptic.
pub fn sun_ecliptic(jd: JulianDate) -> Polar {
    let theory = SolarTheory::new(jd);
    Polar::new(
        0.0,
        limit_angle(theory.mean_longitude + theory.equation_of_centre),
        theory.radius(),
    )
}

/// Geocentric state of the Sun
///
/// The elements describe the Earth's orbit; the position is geocentric.
pub fn sun_state(jd: JulianDate) -> BodyState {
    let theory = SolarTheory::new(jd);
    let mut elements = theory.elements(jd);
    elements.angular_diameter = SUN_DIAMETER;
    elements.magnitude = SUN_MAGNITUDE;

    BodyState {
        elements,
        true_anomaly: limit_angle(theory.true_anomaly()),
        position: sun_ecliptic(jd),
        parallax: 0.0,
    }
}

/// Heliocentric state of the Earth, the antipode of the geocentric Sun
pub fn earth_state(jd: JulianDate) -> BodyState {
    let theory = SolarTheory::new(jd);
    let sun = sun_ecliptic(jd);

    BodyState {
        elements: theory.elements(jd),
        true_anomaly: limit_angle(theory.true_anomaly()),
        position: Polar::new(-sun.lat, limit_angle(sun.lon + 180.0), sun.r),
        parallax: 0.0,
    }
}

/// Apparent equatorial position of the Sun and its distance in AU
///
/// Uses the default nutation model for the true obliquity.
pub fn sun_equatorial(jd: JulianDate) -> (Equatorial, f64) {
    sun_equatorial_with_nutation(jd, NutationModel::default())
}

/// [`sun_equatorial`] with an explicit nutation model
pub fn sun_equatorial_with_nutation(jd: JulianDate, model: NutationModel) -> (Equatorial, f64) {
    let t = Epoch::J2000.centuries(jd);
    let t2 = t * t;

    let l0 = limit_angle(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2);
    let m = limit_angle(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2);
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * sind(m)
        + (0.019_993 - 0.000_101 * t) * sind(2.0 * m)
        + 0.000_289 * sind(3.0 * m);

    let lon = l0 + c;
    let v = m + c;
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * cosd(v));

    let eps = obliquity(jd) + model.nutation(jd).delta_epsilon / 3600.0;
    let ra = degrees_to_hours(limit_angle(atan2d(cosd(eps) * sind(lon), cosd(lon))));
    let dec = asind(sind(eps) * sind(lon));

    (Equatorial::new(dec, ra), r)
}

/// Azimuth and altitude of the Sun at the instant `jd`
pub fn sun_horizontal(jd: JulianDate, lat: f64, lon_west: f64) -> Horizontal {
    let (sun, _) = sun_equatorial(jd);
    equatorial_to_horizontal(&sun, lat, lon_west, jd, hour_of_day(jd))
}

/// Days since J2000 of the local solar cycle nearest `jd`
fn solar_cycle(jd: JulianDate, lon_west: f64) -> f64 {
    (jd - J2000 - 0.0009 - lon_west / 360.0).round()
}

/// Approximate local mean solar noon nearest `jd`
pub fn solar_noon(jd: JulianDate, lon_west: f64) -> JulianDate {
    J2000 + 0.0009 + lon_west / 360.0 + solar_cycle(jd, lon_west)
}

/// Solar mean anomaly, ecliptic longitude and declination at `noon`
fn noon_geometry(noon: JulianDate) -> (f64, f64, f64) {
    let m = limit_angle(357.5291 + 0.985_600_28 * (noon - J2000));
    let c = 1.9148 * sind(m) + 0.0200 * sind(2.0 * m) + 0.0003 * sind(3.0 * m);
    let lambda = limit_angle(m + 102.9372 + c + 180.0);
    let dec = asind(sind(lambda) * sind(23.45));
    (m, lambda, dec)
}

/// Hour angle of rising and setting in degrees, or `None` during polar
/// day or night
fn horizon_hour_angle(lat: f64, dec: f64) -> Option<f64> {
    let cos_w0 = (sind(HORIZON_ALTITUDE) - sind(lat) * sind(dec)) / (cosd(lat) * cosd(dec));
    if (-1.0..=1.0).contains(&cos_w0) {
        Some(acosd(cos_w0))
    } else {
        None
    }
}

/// Solar transit near `jd`, corrected for the equation of time
fn solar_transit(jd: JulianDate, lon_west: f64) -> (JulianDate, f64) {
    let noon = solar_noon(jd, lon_west);
    let (m, lambda, dec) = noon_geometry(noon);
    (noon + 0.0053 * sind(m) - 0.0069 * sind(2.0 * lambda), dec)
}

/// Julian date of sunset on the local solar day nearest `jd`
///
/// Sunset is when the upper limb touches the horizon allowing for mean
/// refraction. Returns `None` when the Sun does not set or rise that day.
pub fn sunset(jd: JulianDate, lat: f64, lon_west: f64) -> Option<JulianDate> {
    let (transit, dec) = solar_transit(jd, lon_west);
    horizon_hour_angle(lat, dec).map(|w0| transit + w0 / 360.0)
}

/// Julian date of sunrise on the local solar day nearest `jd`
pub fn sunrise(jd: JulianDate, lat: f64, lon_west: f64) -> Option<JulianDate> {
    let (transit, dec) = solar_transit(jd, lon_west);
    horizon_hour_angle(lat, dec).map(|w0| transit - w0 / 360.0)
}

/// Greenwich hour angle of the mean Sun in degrees
pub fn sun_gha(jd: JulianDate) -> f64 {
    limit_angle((jd - J2000 - 0.0009) * 360.0)
}
