//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a tropical century at 1900, used by the precession angles
pub const TROPICAL_CENTURY: f64 = 36_524.2199;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// 1900 January 0.5 epoch used by the older Meeus formulae
pub const J1900: f64 = 2_415_020.0;
/// B1900 tropical epoch, origin of the precession angles
pub const B1900: f64 = 2_415_020.313;
/// B1950 epoch as Julian date
pub const B1950: f64 = 2_433_282.423_5;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const JD_UNIX: f64 = 2_440_587.5;
/// Ratio of sidereal to solar time
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;
/// Days per year used when integrating stellar proper motion
pub const PROPER_MOTION_YEAR: f64 = 365.24;

// Angles
/// Arcseconds in a degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees of arc per hour of right ascension
pub const DEG_PER_HOUR: f64 = 15.0;

// Earth constants
/// Mean obliquity of the ecliptic at J2000, degrees
pub const EARTH_TILT: f64 = 23.439_291_1;
/// Earth's equatorial radius in kilometers, as used for lunar distance
pub const EARTH_RADIUS_KM: f64 = 6_378.14;
/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.2424;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i64 = 2_299_161;
/// First Gregorian civil date encoded as yyyymmdd
pub const GREGORIAN_START_YMD: f64 = 15_821_015.0;
