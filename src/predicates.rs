// src/predicates.rs

//! Spatial relations between two shapes.
//!
//! Box operands paired with polygons are lowered to their four-vertex ring and
//! go through the same ring algorithms as polygons. Ring relations are
//! approximations built from edge crossings and representative-vertex
//! containment, not full polygon clipping.

use crate::bbox::{bbox_contains_bbox, bbox_contains_point, bbox_is_point, bbox_overlaps_bbox, bbox_to_ring};
use crate::dispatch::{apply2_commutative, apply2_ordered, CommutativeRelation, OrderedRelation};
use crate::polygon::{ring_contains_point, ring_contains_ring, ring_overlaps_ring};
use crate::types::{BBox, InvalidShapeError, LatLng, Ring};

/// Symmetric "shares any point" relation.
pub(crate) struct Overlaps;

impl CommutativeRelation for Overlaps {
  type Output = bool;

  // Two points overlap if they are exactly equal.
  fn point_point(&self, a: &LatLng, b: &LatLng) -> bool {
    a.lat == b.lat && a.lng == b.lng
  }

  fn bbox_point(&self, bbox: &BBox, point: &LatLng) -> bool {
    bbox_contains_point(bbox, point)
  }

  fn bbox_bbox(&self, a: &BBox, b: &BBox) -> bool {
    bbox_overlaps_bbox(a, b)
  }

  fn polygon_point(&self, ring: &Ring, point: &LatLng) -> bool {
    ring_contains_point(ring, point)
  }

  fn polygon_bbox(&self, ring: &Ring, bbox: &BBox) -> bool {
    ring_overlaps_ring(ring, &bbox_to_ring(bbox))
  }

  fn polygon_polygon(&self, a: &Ring, b: &Ring) -> bool {
    ring_overlaps_ring(a, b)
  }
}

/// Directed "first operand contains the second" relation.
pub(crate) struct Contains;

impl OrderedRelation for Contains {
  type Output = bool;

  fn point_point(&self, a: &LatLng, b: &LatLng) -> bool {
    a.lat == b.lat && a.lng == b.lng
  }

  // Only a box collapsed onto the point fits inside it.
  fn point_bbox(&self, point: &LatLng, bbox: &BBox) -> bool {
    bbox_is_point(bbox, point)
  }

  fn point_polygon(&self, point: &LatLng, ring: &Ring) -> bool {
    ring.verts.iter().all(|v| v.lat == point.lat && v.lng == point.lng)
  }

  fn bbox_point(&self, bbox: &BBox, point: &LatLng) -> bool {
    bbox_contains_point(bbox, point)
  }

  /// Interval containment on both axes rather than the ring path, so shared
  /// edges always count as contained.
  fn bbox_bbox(&self, a: &BBox, b: &BBox) -> bool {
    bbox_contains_bbox(a, b)
  }

  fn bbox_polygon(&self, bbox: &BBox, ring: &Ring) -> bool {
    ring_contains_ring(&bbox_to_ring(bbox), ring)
  }

  fn polygon_point(&self, ring: &Ring, point: &LatLng) -> bool {
    ring_contains_point(ring, point)
  }

  fn polygon_bbox(&self, ring: &Ring, bbox: &BBox) -> bool {
    ring_contains_ring(ring, &bbox_to_ring(bbox))
  }

  fn polygon_polygon(&self, a: &Ring, b: &Ring) -> bool {
    ring_contains_ring(a, b)
  }
}

/// Whether two shapes share any point. Commutative:
/// `overlaps(a, b) == overlaps(b, a)` for all valid shapes.
///
/// # Errors
/// Returns [`InvalidShapeError`] if either operand is not a valid shape.
pub fn overlaps(a: &[f64], b: &[f64]) -> Result<bool, InvalidShapeError> {
  apply2_commutative(a, b, &Overlaps)
}

/// Whether shape `a` contains shape `b`. Not commutative.
///
/// Containment involving a polygon is approximate: `a` must contain the first
/// vertex of `b` and their edges must not cross. Self-intersecting or
/// strongly concave polygons can be misjudged.
///
/// Box edges are inclusive, while polygon ray casting is half-open. A point
/// on the northern or eastern edge of a box is contained by the box but not
/// by the same rectangle written as a four-vertex polygon.
///
/// # Errors
/// Returns [`InvalidShapeError`] if either operand is not a valid shape.
pub fn contains(a: &[f64], b: &[f64]) -> Result<bool, InvalidShapeError> {
  apply2_ordered(a, b, &Contains)
}

/// Whether shape `a` lies within shape `b`; the converse of [`contains`].
///
/// # Errors
/// Returns [`InvalidShapeError`] if either operand is not a valid shape.
pub fn within(a: &[f64], b: &[f64]) -> Result<bool, InvalidShapeError> {
  contains(b, a)
}

#[cfg(test)]
mod tests {
  use super::*;

  const DIAMOND: &[f64] = &[-2.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0];

  #[test]
  fn test_overlaps_points() {
    assert_eq!(overlaps(&[1.0, 2.0], &[1.0, 2.0]), Ok(true));
    assert_eq!(overlaps(&[1.0, 2.0], &[1.0, 2.5]), Ok(false));
  }

  #[test]
  fn test_overlaps_box_point_both_orders() {
    assert_eq!(overlaps(&[-1.0, -1.0, 1.0, 1.0], &[0.0, 0.0]), Ok(true));
    assert_eq!(overlaps(&[0.0, 0.0], &[-1.0, -1.0, 1.0, 1.0]), Ok(true));
    assert_eq!(overlaps(&[0.0, 5.0], &[-1.0, -1.0, 1.0, 1.0]), Ok(false));
  }

  #[test]
  fn test_overlaps_polygon_box() {
    assert_eq!(overlaps(DIAMOND, &[-0.5, -0.5, 0.5, 0.5]), Ok(true), "box inside diamond");
    assert_eq!(overlaps(&[-3.0, -3.0, 3.0, 3.0], DIAMOND), Ok(true), "diamond inside box");
    assert_eq!(overlaps(DIAMOND, &[0.5, 0.5, 3.0, 3.0]), Ok(true), "edges cross");
    assert_eq!(overlaps(DIAMOND, &[5.0, 5.0, 6.0, 6.0]), Ok(false));
  }

  #[test]
  fn test_contains_point_operand() {
    assert_eq!(contains(&[0.0, 0.0], &[0.0, 0.0, 0.0, 0.0]), Ok(true));
    assert_eq!(contains(&[0.0, 0.0], &[-1.0, -1.0, 1.0, 1.0]), Ok(false));
    assert_eq!(contains(&[0.0, 0.0], &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]), Ok(true));
    assert_eq!(contains(&[0.0, 0.0], DIAMOND), Ok(false));
  }

  #[test]
  fn test_contains_is_directed() {
    assert_eq!(contains(&[-1.0, -1.0, 1.0, 1.0], &[0.0, 0.0]), Ok(true));
    assert_eq!(contains(&[-2.0, -2.0, 2.0, 2.0], &[-1.0, -1.0, 1.0, 1.0]), Ok(true));
    assert_eq!(contains(&[-1.0, -1.0, 1.0, 1.0], &[-2.0, -2.0, 2.0, 2.0]), Ok(false));
    assert_eq!(contains(DIAMOND, &[-0.5, -0.5, 0.5, 0.5]), Ok(true));
    assert_eq!(contains(&[-0.5, -0.5, 0.5, 0.5], DIAMOND), Ok(false));
    assert_eq!(contains(&[-3.0, -3.0, 3.0, 3.0], DIAMOND), Ok(true));
    assert_eq!(contains(DIAMOND, &[-3.0, -3.0, 3.0, 3.0]), Ok(false));
  }

  #[test]
  fn test_box_edges_are_inclusive_unlike_polygon_edges() {
    let square_box = [0.0, 0.0, 2.0, 2.0];
    let square_polygon = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
    let north_edge = [2.0, 1.0];
    assert_eq!(contains(&square_box, &north_edge), Ok(true));
    assert_eq!(contains(&square_polygon, &north_edge), Ok(false));
    assert_eq!(contains(&square_box, &[1.0, 1.0, 2.0, 2.0]), Ok(true), "shared edges are contained");
  }

  #[test]
  fn test_within_is_converse() {
    assert_eq!(within(&[0.0, 0.0], DIAMOND), Ok(true));
    assert_eq!(within(DIAMOND, &[0.0, 0.0]), Ok(false));
  }

  #[test]
  fn test_invalid_operands() {
    assert_eq!(overlaps(&[], &[0.0, 0.0]), Err(InvalidShapeError::Arity(0)));
    assert_eq!(contains(&[0.0, 0.0], &[1.0, 1.0, 0.0, 0.0]), Err(InvalidShapeError::InvertedBox));
  }
}
