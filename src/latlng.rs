// src/latlng.rs

use crate::constants::{M_180_PI, M_PI_180, MAX_LAT_DEGS, MAX_LNG_DEGS, MIN_LAT_DEGS, MIN_LNG_DEGS};
use crate::types::LatLng;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Whether `lat` is a legal latitude in degrees. NaN is never legal.
#[inline]
#[must_use]
pub fn is_valid_lat(lat: f64) -> bool {
  (MIN_LAT_DEGS..=MAX_LAT_DEGS).contains(&lat)
}

/// Whether `lng` is a legal longitude in degrees. NaN is never legal.
#[inline]
#[must_use]
pub fn is_valid_lng(lng: f64) -> bool {
  (MIN_LNG_DEGS..=MAX_LNG_DEGS).contains(&lng)
}

impl LatLng {
  /// Creates a coordinate from decimal degrees. No validation is performed;
  /// shapes are validated when they are classified.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Latitude in radians.
  #[inline]
  #[must_use]
  pub fn lat_rads(&self) -> f64 {
    degs_to_rads(self.lat)
  }

  /// Longitude in radians.
  #[inline]
  #[must_use]
  pub fn lng_rads(&self) -> f64 {
    degs_to_rads(self.lng)
  }
}

impl From<(f64, f64)> for LatLng {
  fn from((lat, lng): (f64, f64)) -> Self {
    Self { lat, lng }
  }
}
