//! Geographic coordinates and spherical distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius (IUGG, `(2a + b) / 3` of WGS84) in meters.
///
/// This is the sphere PostGIS uses for `geography` functions called with
/// `use_spheroid = false`, so distances computed here agree with the store's
/// radius filter.
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6_371_008.8;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidCoordinates {
    #[error("latitude must be within [-90, 90], got {0}")]
    Latitude(f64),
    #[error("longitude must be within [-180, 180], got {0}")]
    Longitude(f64),
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance on the mean-radius sphere (haversine).
    pub fn distance_meters(&self, other: &Coordinates) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = lat2 - lat1;
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_MEAN_RADIUS_METERS * c
    }
}
