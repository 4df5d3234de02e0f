// src/bbox.rs

use crate::dispatch::{apply1, ShapeVisitor};
use crate::types::{BBox, InvalidShapeError, LatLng, Ring};

impl BBox {
  /// Creates a box from its south-west and north-east corners.
  #[inline]
  #[must_use]
  pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
    Self {
      north,
      south,
      east,
      west,
    }
  }

  /// A zero-area box covering exactly one point.
  #[inline]
  #[must_use]
  pub const fn from_point(point: &LatLng) -> Self {
    Self::new(point.lat, point.lng, point.lat, point.lng)
  }

  /// The box in flat `[south, west, north, east]` form, the same layout a
  /// box shape is written in.
  #[inline]
  #[must_use]
  pub const fn to_array(&self) -> [f64; 4] {
    [self.south, self.west, self.north, self.east]
  }

  /// South-west corner.
  #[inline]
  #[must_use]
  pub const fn south_west(&self) -> LatLng {
    LatLng::new(self.south, self.west)
  }

  /// North-east corner.
  #[inline]
  #[must_use]
  pub const fn north_east(&self) -> LatLng {
    LatLng::new(self.north, self.east)
  }
}

impl From<BBox> for [f64; 4] {
  fn from(bbox: BBox) -> Self {
    bbox.to_array()
  }
}

/// Whether the box contains a given point. Edges are inclusive.
#[inline]
#[must_use]
pub(crate) fn bbox_contains_point(bbox: &BBox, point: &LatLng) -> bool {
  bbox.south <= point.lat && bbox.west <= point.lng && bbox.north >= point.lat && bbox.east >= point.lng
}

/// Whether box `a` contains box `b`. Shared edges count as contained.
#[inline]
#[must_use]
pub(crate) fn bbox_contains_bbox(a: &BBox, b: &BBox) -> bool {
  a.south <= b.south && a.west <= b.west && a.north >= b.north && a.east >= b.east
}

/// Whether two boxes overlap. Boxes that only touch along an edge or corner
/// overlap.
#[inline]
#[must_use]
pub(crate) fn bbox_overlaps_bbox(a: &BBox, b: &BBox) -> bool {
  a.south <= b.north && a.west <= b.east && a.north >= b.south && a.east >= b.west
}

/// Whether the box has collapsed onto a single point.
#[inline]
#[must_use]
pub(crate) fn bbox_is_point(bbox: &BBox, point: &LatLng) -> bool {
  bbox.south == point.lat && bbox.north == point.lat && bbox.west == point.lng && bbox.east == point.lng
}

/// Lowers a box to its four-vertex ring: SW, NW, NE, SE.
#[must_use]
pub(crate) fn bbox_to_ring(bbox: &BBox) -> Ring {
  Ring {
    verts: vec![
      LatLng::new(bbox.south, bbox.west),
      LatLng::new(bbox.north, bbox.west),
      LatLng::new(bbox.north, bbox.east),
      LatLng::new(bbox.south, bbox.east),
    ],
  }
}

/// Componentwise min/max over all ring vertices.
#[must_use]
pub(crate) fn bbox_from_ring(ring: &Ring) -> BBox {
  let Some(first) = ring.verts.first() else {
    return BBox::default();
  };

  ring.verts[1..].iter().fold(BBox::from_point(first), |mut bbox, p| {
    bbox.south = bbox.south.min(p.lat);
    bbox.west = bbox.west.min(p.lng);
    bbox.north = bbox.north.max(p.lat);
    bbox.east = bbox.east.max(p.lng);
    bbox
  })
}

struct Bounds;

impl ShapeVisitor for Bounds {
  type Output = BBox;

  fn point(&self, point: &LatLng) -> BBox {
    BBox::from_point(point)
  }

  // A box is its own bounding box.
  fn bbox(&self, bbox: &BBox) -> BBox {
    *bbox
  }

  fn polygon(&self, ring: &Ring) -> BBox {
    bbox_from_ring(ring)
  }
}

/// Computes the minimal bounding box of a shape.
///
/// A point yields a zero-area box, a box is returned unchanged, and a polygon
/// yields the componentwise extremes of its vertices.
///
/// # Errors
/// Returns [`InvalidShapeError`] if `coords` is not a valid shape.
pub fn bounds(coords: &[f64]) -> Result<BBox, InvalidShapeError> {
  apply1(coords, &Bounds)
}
