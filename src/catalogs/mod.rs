//! Star catalogs module
//!
//! A catalog is any source of [`CatalogStar`] records: mean J2000 positions
//! with magnitude, spectral type and proper motion. Queries take a
//! magnitude ceiling and a [`SkyBox`] in right ascension and declination,
//! and carry each star along its proper motion to the requested date first.
//! [`StarList`] is the in-memory provider; reading the binary catalog
//! formats themselves is left to callers.

use crate::constants::{J2000, PROPER_MOTION_YEAR};
use crate::coordinates::angle::limit_hour;
use crate::coordinates::Equatorial;
use crate::framelib::InertialFrame;
use crate::time::JulianDate;
use crate::{AstroError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One star as it appears in a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStar {
    /// Catalog number
    pub id: u64,
    /// Right ascension at J2000, hours
    pub ra: f64,
    /// Declination at J2000, degrees
    pub dec: f64,
    /// Visual magnitude (lower is brighter)
    pub magnitude: f64,
    /// Spectral type and subclass, e.g. "A1"
    #[serde(default)]
    pub spectral_type: String,
    /// Proper motion in right ascension, seconds of time per year
    #[serde(default)]
    pub pm_ra: f64,
    /// Proper motion in declination, arcseconds per year
    #[serde(default)]
    pub pm_dec: f64,
}

impl CatalogStar {
    pub fn new(id: u64, ra: f64, dec: f64, magnitude: f64) -> Self {
        Self {
            id,
            ra,
            dec,
            magnitude,
            spectral_type: String::new(),
            pm_ra: 0.0,
            pm_dec: 0.0,
        }
    }

    /// Mean J2000 position
    pub fn position(&self) -> Equatorial {
        Equatorial::new(self.dec, self.ra)
    }

    /// The star moved along its proper motion to `jd`
    ///
    /// Years are counted as `(jd - J2000) / 365.24`. The equinox stays
    /// J2000.
    pub fn at_epoch(&self, jd: JulianDate) -> CatalogStar {
        let years = (jd - J2000) / PROPER_MOTION_YEAR;
        CatalogStar {
            ra: limit_hour(self.ra + self.pm_ra / 3600.0 * years),
            dec: self.dec + self.pm_dec / 3600.0 * years,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..24.0).contains(&self.ra) || !(-90.0..=90.0).contains(&self.dec) {
            return Err(AstroError::Catalog(format!(
                "star {} has position out of range: ra {} dec {}",
                self.id, self.ra, self.dec
            )));
        }
        Ok(())
    }
}

/// A region of sky bounded in right ascension and declination
///
/// When `ra_max < ra_min` the box wraps through 0h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyBox {
    /// Hours
    pub ra_min: f64,
    /// Hours
    pub ra_max: f64,
    /// Degrees
    pub dec_min: f64,
    /// Degrees
    pub dec_max: f64,
}

impl SkyBox {
    pub fn new(ra_min: f64, ra_max: f64, dec_min: f64, dec_max: f64) -> Self {
        Self {
            ra_min,
            ra_max,
            dec_min,
            dec_max,
        }
    }

    /// The whole sky
    pub fn all_sky() -> Self {
        Self::new(0.0, 24.0, -90.0, 90.0)
    }

    /// Whether the box crosses 0h of right ascension
    pub fn wraps(&self) -> bool {
        self.ra_max < self.ra_min
    }

    pub fn contains(&self, position: &Equatorial) -> bool {
        if position.dec < self.dec_min || position.dec > self.dec_max {
            return false;
        }
        if self.wraps() {
            position.ra >= self.ra_min || position.ra <= self.ra_max
        } else {
            position.ra >= self.ra_min && position.ra <= self.ra_max
        }
    }
}

/// Generic trait for all star catalogs
pub trait StarCatalog {
    /// Get all stars in the catalog
    fn stars(&self) -> impl Iterator<Item = &CatalogStar>;

    /// Get the number of stars in the catalog
    fn len(&self) -> usize;

    /// Check if the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a star by its catalog number
    fn get_star(&self, id: u64) -> Option<&CatalogStar> {
        self.stars().find(|star| star.id == id)
    }

    /// Filter stars based on a predicate
    fn filter<F>(&self, predicate: F) -> Vec<&CatalogStar>
    where
        F: Fn(&CatalogStar) -> bool,
    {
        self.stars().filter(|star| predicate(star)).collect()
    }

    /// Get stars at or brighter than a magnitude
    fn brighter_than(&self, magnitude: f64) -> Vec<&CatalogStar> {
        self.filter(|star| star.magnitude <= magnitude)
    }

    /// Stars no fainter than `max_magnitude` inside `sky_box` at `jd`
    ///
    /// Positions are moved along their proper motion before the box test
    /// and returned at that epoch.
    fn search(&self, max_magnitude: f64, sky_box: &SkyBox, jd: JulianDate) -> Vec<CatalogStar> {
        self.stars()
            .filter(|star| star.magnitude <= max_magnitude)
            .map(|star| star.at_epoch(jd))
            .filter(|star| sky_box.contains(&star.position()))
            .collect()
    }

    /// Stars within `radius_deg` of `center`, J2000 positions
    fn stars_in_field(&self, center: &Equatorial, radius_deg: f64) -> Vec<&CatalogStar> {
        self.filter(|star| star.position().angle_between(center) <= radius_deg)
    }
}

/// In-memory star catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarList {
    #[serde(default)]
    description: String,
    stars: Vec<CatalogStar>,
}

impl StarList {
    /// Build a catalog, rejecting stars with out-of-range positions
    pub fn from_stars(stars: Vec<CatalogStar>, description: &str) -> Result<Self> {
        for star in &stars {
            star.validate()?;
        }
        Ok(Self {
            description: description.to_string(),
            stars,
        })
    }

    /// Parse a catalog from JSON: `{ "description": ..., "stars": [...] }`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let list: StarList = serde_json::from_str(json)?;
        Self::from_stars(list.stars, &list.description)
    }

    /// Load a JSON catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let list = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(
            "Loaded {} stars from {} ({})",
            list.len(),
            path.display(),
            list.description
        );
        Ok(list)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl StarCatalog for StarList {
    fn stars(&self) -> impl Iterator<Item = &CatalogStar> {
        self.stars.iter()
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}
