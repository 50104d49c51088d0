//! Equatorial to horizontal (altitude/azimuth) coordinates
//!
//! Observer longitude is positive west of Greenwich, so the local hour angle
//! is `GMST - longitude - RA`. Azimuth is reported from North through East.

use crate::coordinates::angle::{
    asind, atan2d, cosd, degrees_to_hours, hours_to_degrees, limit_angle, limit_hour, sind, tand,
};
use crate::coordinates::{Equatorial, Horizontal};
use crate::time::{julian_time_to_sidereal, JulianDate};

/// Local hour angle in degrees for a position seen from longitude `lon_west`
///
/// `jd` is the date and `ut_hours` the UT time since its midnight.
pub fn local_hour_angle(ra: f64, lon_west: f64, jd: JulianDate, ut_hours: f64) -> f64 {
    let st = julian_time_to_sidereal(jd, ut_hours);
    limit_angle(hours_to_degrees(st) - lon_west - hours_to_degrees(ra))
}

/// Altitude and azimuth of an equatorial position for an observer
pub fn equatorial_to_horizontal(
    eq: &Equatorial,
    lat: f64,
    lon_west: f64,
    jd: JulianDate,
    ut_hours: f64,
) -> Horizontal {
    let ha = local_hour_angle(eq.ra, lon_west, jd, ut_hours);

    // Azimuth from the south, then turned to the north
    let a_south = atan2d(sind(ha), cosd(ha) * sind(lat) - tand(eq.dec) * cosd(lat));
    let altitude = asind(sind(lat) * sind(eq.dec) + cosd(lat) * cosd(eq.dec) * cosd(ha));

    Horizontal {
        azimuth: limit_angle(a_south + 180.0),
        altitude,
    }
}

/// Equatorial position of an altitude and azimuth seen by an observer
pub fn horizontal_to_equatorial(
    hz: &Horizontal,
    lat: f64,
    lon_west: f64,
    jd: JulianDate,
    ut_hours: f64,
) -> Equatorial {
    let a_south = hz.azimuth - 180.0;
    let ha = atan2d(
        sind(a_south),
        cosd(a_south) * sind(lat) + tand(hz.altitude) * cosd(lat),
    );
    let dec = asind(sind(lat) * sind(hz.altitude) - cosd(lat) * cosd(hz.altitude) * cosd(a_south));

    let st = hours_to_degrees(julian_time_to_sidereal(jd, ut_hours));
    let ra = limit_hour(degrees_to_hours(st - lon_west - ha));
    Equatorial::new(dec, ra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::civil_to_julian;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sun_morning_bearing() {
        // Sun on 2000 June 21, 12h UT, seen from 40N 75W
        let jd = civil_to_julian(2000, 6, 21.0);
        let sun = Equatorial::new(23.437_305_764_7, 6.030_389_843_2);
        let hz = equatorial_to_horizontal(&sun, 40.0, 75.0, jd, 12.0);
        assert_relative_eq!(hz.azimuth, 79.995_793_85, epsilon = 1e-6);
        assert_relative_eq!(hz.altitude, 25.599_153_78, epsilon = 1e-6);
    }

    #[test]
    fn test_meridian_transit_faces_south() {
        // a star on the local meridian south of the zenith
        let jd = civil_to_julian(2010, 3, 1.0);
        let lon_west = 30.0;
        let st = julian_time_to_sidereal(jd, 6.0);
        let ra = limit_hour(st - lon_west / 15.0);
        let hz = equatorial_to_horizontal(&Equatorial::new(10.0, ra), 50.0, lon_west, jd, 6.0);
        assert_relative_eq!(hz.azimuth, 180.0, epsilon = 1e-6);
        assert_relative_eq!(hz.altitude, 50.0, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        let jd = civil_to_julian(1995, 8, 17.0);

        for _ in 0..200 {
            let eq = Equatorial::new(rng.gen_range(-80.0..80.0), rng.gen_range(0.0..24.0));
            let lat = rng.gen_range(-70.0..70.0);
            let lon = rng.gen_range(-180.0..180.0);
            let ut = rng.gen_range(0.0..24.0);

            let hz = equatorial_to_horizontal(&eq, lat, lon, jd, ut);
            let back = horizontal_to_equatorial(&hz, lat, lon, jd, ut);
            assert_relative_eq!(back.dec, eq.dec, epsilon = 1e-6);
            let dra = (back.ra - eq.ra).abs();
            assert!(dra.min(24.0 - dra) < 1e-6, "{:?} != {:?}", back, eq);
        }
    }
}
