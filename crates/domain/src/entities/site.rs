//! Launch sites and the compiled-in Colorado registry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// A named launch location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    name: String,
    #[serde(flatten)]
    location: GeoLocation,
}

impl Site {
    /// Create a site with validated coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptySiteName` for a blank name and
    /// `DomainError::InvalidCoordinates` for out-of-range coordinates.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptySiteName);
        }
        Ok(Self {
            name,
            location: GeoLocation::new(latitude, longitude)?,
        })
    }

    /// Site name as shown in reports
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Site coordinates
    #[must_use]
    pub const fn location(&self) -> &GeoLocation {
        &self.location
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

/// Colorado launches as `(name, latitude, longitude)`
const COLORADO_LAUNCHES: [(&str, f64, f64); 12] = [
    ("Boulder Flying Park", 40.0500, -105.2800),
    ("Junction Butte", 40.0200, -105.3500),
    ("Lookout Mountain (Golden)", 39.7556, -105.2211),
    ("Mt. Falcon (Morrison)", 39.6659, -105.2369),
    ("Bear Peak (Boulder)", 39.9990, -105.2819),
    ("Echo Mountain (Idaho Springs)", 39.7380, -105.5770),
    ("Loveland Pass", 39.7136, -105.6650),
    ("Kenosha Pass", 39.4250, -106.2190),
    ("Bellyache Mountain (Eagle County)", 39.8000, -106.9000),
    ("Pikes Peak", 38.8409, -105.0447),
    ("Mt. Evans", 39.5883, -105.6438),
    ("Longs Peak", 40.2549, -105.6160),
];

/// The fixed list of launch sites, in report order
#[must_use]
pub fn colorado_launch_sites() -> Vec<Site> {
    COLORADO_LAUNCHES
        .iter()
        .map(|&(name, latitude, longitude)| Site {
            name: name.to_string(),
            location: GeoLocation::new_unchecked(latitude, longitude),
        })
        .collect()
}

/// Look up a site by case-insensitive name substring
///
/// # Errors
///
/// Returns `DomainError::NotFound` when no site matches.
pub fn find_sites(sites: &[Site], pattern: &str) -> Result<Vec<Site>, DomainError> {
    let needle = pattern.to_lowercase();
    let matches: Vec<Site> = sites
        .iter()
        .filter(|site| site.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(DomainError::not_found("Site", pattern));
    }
    Ok(matches)
}
