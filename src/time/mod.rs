//! Time module for astronomical time calculations
//!
//! Dates are carried as Julian dates: days since Greenwich noon of
//! 1 January -4712 in the proleptic Julian calendar. This module converts
//! between civil dates and Julian dates, handles the 1582 switch from the
//! Julian to the Gregorian calendar, and bridges to `chrono` for wall-clock
//! time. Sidereal time lives in [`sidereal`].
//!
//! The British change of calendar in September 1752 is not modelled; civil
//! dates are Gregorian from 1582-10-15 onward.

use crate::constants::{
    DAY_S, GREGORIAN_START, GREGORIAN_START_YMD, J1900, J2000, JD_UNIX, JULIAN_CENTURY,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod sidereal;

pub use sidereal::{
    equation_of_equinoxes, greenwich_apparent_sidereal, greenwich_sidereal,
    julian_time_to_sidereal, julian_to_sidereal, mean_to_apparent_sidereal,
};

/// Days since noon, 1 January -4712
pub type JulianDate = f64;

/// Reference epoch for a family of polynomial formulae
///
/// Every formula counts Julian centuries from exactly one of these; the two
/// are never mixed inside one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Epoch {
    /// 1900 January 0.5, JD 2415020.0
    J1900,
    /// 2000 January 1.5, JD 2451545.0
    J2000,
}

impl Epoch {
    /// Julian date of the epoch
    pub fn jd(&self) -> JulianDate {
        match self {
            Epoch::J1900 => J1900,
            Epoch::J2000 => J2000,
        }
    }

    /// Julian centuries elapsed between the epoch and `jd`
    pub fn centuries(&self, jd: JulianDate) -> f64 {
        (jd - self.jd()) / JULIAN_CENTURY
    }
}

/// Calendar date and time of day, UT
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    pub fn to_julian(&self) -> JulianDate {
        civil_time_to_julian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    pub fn from_julian(jd: JulianDate) -> Self {
        julian_to_civil(jd)
    }

    /// Fractional hours since midnight
    pub fn hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:04.1}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Julian date of a civil date whose day may carry a fraction
///
/// January and February are counted as months 13 and 14 of the previous
/// year. Dates on or after 1582-10-15 get the Gregorian correction; earlier
/// dates are read in the Julian calendar. Days 5 through 14 of October 1582
/// do not exist in either calendar and give a value off by the gap.
pub fn civil_to_julian(year: i32, month: u32, day: f64) -> JulianDate {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let ymd = year as f64 * 10_000.0 + month as f64 * 100.0 + day;
    let b = if ymd >= GREGORIAN_START_YMD {
        let a = y / 100;
        2 - a + a / 4
    } else {
        0
    };

    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day + b as f64
        - 1524.5
}

/// Julian date of a civil date and UT time of day
pub fn civil_time_to_julian(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> JulianDate {
    let hours = hour as f64 + minute as f64 / 60.0 + second / 3600.0;
    civil_to_julian(year, month, day as f64) + hours / 24.0
}

/// Civil date of a Julian date, with the time of day left in the day fraction
///
/// The Gregorian calendar applies from JD 2299160.5 onward.
pub fn julian_to_date(jd: JulianDate) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let z = z as i64;

    let a = if z < GREGORIAN_START {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d) as f64 - (30.6001 * e as f64).floor() + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day)
}

/// Milliseconds in a day
const DAY_MS: u64 = 86_400_000;

/// Civil date and time of day of a Julian date
///
/// The time of day is rounded to the millisecond, about the resolution of
/// an `f64` Julian date, so whole minutes come back exact. A time that
/// rounds up to midnight rolls over to the next day.
pub fn julian_to_civil(jd: JulianDate) -> CivilDateTime {
    let (mut year, mut month, mut day) = julian_to_date(jd);
    let mut ms = ((day - day.floor()) * DAY_MS as f64).round() as u64;
    if ms >= DAY_MS {
        (year, month, day) = julian_to_date(midnight(jd) + 1.0);
        ms = 0;
    }

    let hour = ms / 3_600_000;
    let minute = ms % 3_600_000 / 60_000;
    let second = (ms % 60_000) as f64 / 1_000.0;

    CivilDateTime::new(
        year,
        month,
        day.floor() as u32,
        hour as u32,
        minute as u32,
        second,
    )
}

/// UT hours elapsed since the midnight that starts the civil day of `jd`
pub fn hour_of_day(jd: JulianDate) -> f64 {
    let shifted = jd + 0.5;
    (shifted - shifted.floor()) * 24.0
}

/// Julian date of the midnight (0h UT) that starts the civil day of `jd`
pub fn midnight(jd: JulianDate) -> JulianDate {
    (jd + 0.5).floor() - 0.5
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day number within the year, 1 for January 1st
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let k = if is_leap_year(year) { 1 } else { 2 };
    275 * month / 9 - k * ((month + 9) / 12) + day - 30
}

/// Month and day for a day number within the year
pub fn date_from_day_of_year(year: i32, yday: u32) -> (u32, u32) {
    let a = if is_leap_year(year) { 1523.0 } else { 1889.0 };
    let yday = yday as f64;

    let b = ((yday + a - 122.1) / 365.25).floor();
    let c = yday + a - (365.25 * b).floor();
    let e = (c / 30.6001).floor();

    let month = if e <= 13.0 { e - 1.0 } else { e - 13.0 };
    let day = c - (30.6001 * e).floor();
    (month as u32, day as u32)
}

/// Julian date of a Unix timestamp in seconds
pub fn unix_to_julian(seconds: f64) -> JulianDate {
    JD_UNIX + seconds / DAY_S
}

/// Julian date of a UTC datetime
pub fn datetime_to_julian(dt: DateTime<Utc>) -> JulianDate {
    let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
    unix_to_julian(seconds)
}

/// UTC datetime of a Julian date, or `None` outside chrono's range
pub fn julian_to_datetime(jd: JulianDate) -> Option<DateTime<Utc>> {
    let seconds = (jd - JD_UNIX) * DAY_S;
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Julian date of the current system time
pub fn now() -> JulianDate {
    datetime_to_julian(Utc::now())
}
