// src/measures.rs

use crate::constants::{EARTH_SURFACE_AREA_KM2, INV_720};
use crate::dispatch::{apply1, ShapeVisitor};
use crate::latlng::degs_to_rads;
use crate::polygon::ring_area;
use crate::types::{BBox, InvalidShapeError, LatLng, Ring};

/// Area of a box as a fraction of the sphere.
///
/// A box is the intersection of a lune, whose share of the globe is its
/// longitude span over 360 degrees, and a zone, whose share is half the
/// difference of the sines of its bounding latitudes.
#[inline]
#[must_use]
pub(crate) fn bbox_area(bbox: &BBox) -> f64 {
  INV_720 * (bbox.east - bbox.west) * (degs_to_rads(bbox.north).sin() - degs_to_rads(bbox.south).sin())
}

struct Area;

impl ShapeVisitor for Area {
  type Output = f64;

  // A point has no area.
  fn point(&self, _point: &LatLng) -> f64 {
    0.0
  }

  fn bbox(&self, bbox: &BBox) -> f64 {
    bbox_area(bbox)
  }

  fn polygon(&self, ring: &Ring) -> f64 {
    ring_area(ring)
  }
}

/// Area of a shape as a fraction of the entire globe, in `[0, 1]`.
///
/// # Errors
/// Returns [`InvalidShapeError`] if `coords` is not a valid shape.
pub fn area(coords: &[f64]) -> Result<f64, InvalidShapeError> {
  apply1(coords, &Area)
}

/// Area of a shape on the Earth in square kilometers.
///
/// # Errors
/// Returns [`InvalidShapeError`] if `coords` is not a valid shape.
pub fn area_km2(coords: &[f64]) -> Result<f64, InvalidShapeError> {
  Ok(area(coords)? * EARTH_SURFACE_AREA_KM2)
}
