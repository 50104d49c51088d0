//! Reference frame transformations
//!
//! `inertial` converts between the equatorial and ecliptic frames, which
//! differ by a rotation about the equinox direction through the obliquity.
//! `horizontal` maps equatorial positions onto an observer's sky.

pub mod horizontal;
pub mod inertial;

pub use horizontal::{equatorial_to_horizontal, horizontal_to_equatorial, local_hour_angle};
pub use inertial::{
    ecliptic_to_equatorial, ecliptic_to_equatorial_with_obliquity, equatorial_to_ecliptic,
    equatorial_to_ecliptic_with_obliquity, InertialFrame,
};
