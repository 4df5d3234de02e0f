//! Core shape data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Latitude/longitude coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in degrees.
  pub lat: f64,
  /// Longitude in degrees.
  pub lng: f64,
}

/// Geographic bounding box with coordinates defined in degrees.
///
/// Boxes never wrap the antimeridian: `west <= east` and `south <= north`
/// hold for every box produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude in degrees.
  pub north: f64,
  /// South latitude in degrees.
  pub south: f64,
  /// East longitude in degrees.
  pub east: f64,
  /// West longitude in degrees.
  pub west: f64,
}

/// A single closed loop of geographic coordinates.
///
/// The last vertex is implicitly connected to the first; no closing vertex
/// is stored. Rings built by the classifier always have three or more
/// vertices and may self-intersect.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring {
  /// Vertices forming the loop.
  pub verts: Vec<LatLng>,
}

/// A line segment between two vertices, in flat lat/lng space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Segment {
  pub(crate) start: LatLng,
  pub(crate) end: LatLng,
}

/// A validated shape.
///
/// Only the classifier constructs these from raw coordinate sequences, so
/// every engine downstream can rely on the coordinate domains and the box
/// corner ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
  /// A single vertex.
  Point(LatLng),
  /// An axis-aligned box given by its south-west and north-east corners.
  Box(BBox),
  /// Three or more vertices forming an implicitly closed ring.
  Polygon(Ring),
}

/// The kind of a shape, ordered by complexity.
///
/// Discriminants match the numeric codes of the flat-array shape convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ShapeKind {
  /// One coordinate pair.
  Point = 1,
  /// Two coordinate pairs, south-west then north-east.
  Box = 2,
  /// Three or more coordinate pairs.
  Polygon = 3,
}

impl TryFrom<u8> for ShapeKind {
  type Error = u8;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(ShapeKind::Point),
      2 => Ok(ShapeKind::Box),
      3 => Ok(ShapeKind::Polygon),
      other => Err(other),
    }
  }
}

/// Error returned when a coordinate sequence is not a valid shape.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidShapeError {
  /// The sequence was empty or had an odd number of values.
  #[error("invalid shape: expected a nonzero, even number of coordinates, got {0}")]
  Arity(usize),
  /// A latitude was outside `[-90, 90]` or not a number.
  #[error("invalid shape: latitude {value} of vertex {index} is outside [-90, 90]")]
  LatitudeDomain {
    /// Vertex index within the sequence.
    index: usize,
    /// The offending value.
    value: f64,
  },
  /// A longitude was outside `[-180, 180]` or not a number.
  #[error("invalid shape: longitude {value} of vertex {index} is outside [-180, 180]")]
  LongitudeDomain {
    /// Vertex index within the sequence.
    index: usize,
    /// The offending value.
    value: f64,
  },
  /// A box's first corner was not south-west of its second corner.
  #[error("invalid shape: box corners are inverted")]
  InvertedBox,
}
