// src/classify.rs

use tracing::debug;

use crate::constants::COORDS_PER_VERTEX;
use crate::latlng::{is_valid_lat, is_valid_lng};
use crate::types::{BBox, InvalidShapeError, LatLng, Ring, Shape, ShapeKind};

/// Checks the arity and coordinate domains of a flat sequence, returning the
/// kind it would classify as.
fn validate(coords: &[f64]) -> Result<ShapeKind, InvalidShapeError> {
  let len = coords.len();
  if len == 0 || len % COORDS_PER_VERTEX != 0 {
    return Err(InvalidShapeError::Arity(len));
  }

  for (index, pair) in coords.chunks_exact(COORDS_PER_VERTEX).enumerate() {
    if !is_valid_lat(pair[0]) {
      return Err(InvalidShapeError::LatitudeDomain { index, value: pair[0] });
    }
    if !is_valid_lng(pair[1]) {
      return Err(InvalidShapeError::LongitudeDomain { index, value: pair[1] });
    }
  }

  match len {
    2 => Ok(ShapeKind::Point),
    4 => {
      // A box's first vertex must be south-west of its second vertex.
      if coords[0] <= coords[2] && coords[1] <= coords[3] {
        Ok(ShapeKind::Box)
      } else {
        Err(InvalidShapeError::InvertedBox)
      }
    }
    _ => Ok(ShapeKind::Polygon),
  }
}

/// Determines the kind of shape a flat `[lat, lng, lat, lng, ...]` sequence
/// describes.
///
/// # Errors
/// Returns an [`InvalidShapeError`] describing the first problem found: an
/// empty or odd-length sequence, a coordinate outside its legal range (NaN
/// included), or a box whose corners are inverted.
pub fn classify(coords: &[f64]) -> Result<ShapeKind, InvalidShapeError> {
  validate(coords).map_err(|err| {
    debug!(len = coords.len(), %err, "rejected coordinate sequence");
    err
  })
}

impl Shape {
  /// Validates a flat coordinate sequence and builds the matching shape.
  ///
  /// # Errors
  /// See [`classify`].
  pub fn parse(coords: &[f64]) -> Result<Self, InvalidShapeError> {
    let shape = match classify(coords)? {
      ShapeKind::Point => Shape::Point(LatLng::new(coords[0], coords[1])),
      ShapeKind::Box => Shape::Box(BBox {
        south: coords[0],
        west: coords[1],
        north: coords[2],
        east: coords[3],
      }),
      ShapeKind::Polygon => Shape::Polygon(Ring {
        verts: coords
          .chunks_exact(COORDS_PER_VERTEX)
          .map(|pair| LatLng::new(pair[0], pair[1]))
          .collect(),
      }),
    };
    Ok(shape)
  }

  /// The kind of this shape.
  #[must_use]
  pub fn kind(&self) -> ShapeKind {
    match self {
      Shape::Point(_) => ShapeKind::Point,
      Shape::Box(_) => ShapeKind::Box,
      Shape::Polygon(_) => ShapeKind::Polygon,
    }
  }

  /// Flattens the shape back into a `[lat, lng, ...]` sequence.
  #[must_use]
  pub fn to_coords(&self) -> Vec<f64> {
    match self {
      Shape::Point(p) => vec![p.lat, p.lng],
      Shape::Box(b) => b.to_array().to_vec(),
      Shape::Polygon(ring) => ring.verts.iter().flat_map(|v| [v.lat, v.lng]).collect(),
    }
  }
}

impl TryFrom<&[f64]> for Shape {
  type Error = InvalidShapeError;

  fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
    Shape::parse(coords)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_classify_kinds() {
    assert_eq!(classify(&[0.0, 0.0]), Ok(ShapeKind::Point));
    assert_eq!(classify(&[-1.0, -1.0, 1.0, 1.0]), Ok(ShapeKind::Box));
    assert_eq!(classify(&[0.0, 0.0, 0.0, 0.0]), Ok(ShapeKind::Box));
    assert_eq!(classify(&[0.0, 0.0, 0.0, 3.0, 2.0, 0.0]), Ok(ShapeKind::Polygon));
    assert_eq!(
      classify(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]),
      Ok(ShapeKind::Polygon)
    );
  }

  #[test]
  fn test_classify_arity() {
    assert_eq!(classify(&[]), Err(InvalidShapeError::Arity(0)));
    assert_eq!(classify(&[1.0]), Err(InvalidShapeError::Arity(1)));
    assert_eq!(classify(&[1.0, 2.0, 3.0]), Err(InvalidShapeError::Arity(3)));
  }

  #[test]
  fn test_classify_domains() {
    assert_eq!(
      classify(&[91.0, 0.0]),
      Err(InvalidShapeError::LatitudeDomain { index: 0, value: 91.0 })
    );
    assert_eq!(
      classify(&[0.0, 0.0, 0.0, 181.0]),
      Err(InvalidShapeError::LongitudeDomain { index: 1, value: 181.0 })
    );
    assert!(matches!(
      classify(&[0.0, 0.0, f64::NAN, 0.0, 1.0, 1.0]),
      Err(InvalidShapeError::LatitudeDomain { index: 1, .. })
    ));
    assert!(matches!(
      classify(&[0.0, f64::INFINITY]),
      Err(InvalidShapeError::LongitudeDomain { index: 0, .. })
    ));
  }

  #[test]
  fn test_classify_inverted_box() {
    assert_eq!(classify(&[1.0, 0.0, 0.0, 1.0]), Err(InvalidShapeError::InvertedBox));
    assert_eq!(classify(&[0.0, 1.0, 1.0, 0.0]), Err(InvalidShapeError::InvertedBox));
  }

  #[test]
  fn test_parse_shapes() {
    assert_eq!(Shape::parse(&[42.0, -73.0]), Ok(Shape::Point(LatLng::new(42.0, -73.0))));

    let b = Shape::parse(&[42.0, -73.0, 43.0, -72.0]).unwrap();
    assert_eq!(
      b,
      Shape::Box(BBox {
        north: 43.0,
        south: 42.0,
        east: -72.0,
        west: -73.0,
      })
    );
    assert_eq!(b.kind(), ShapeKind::Box);

    let coords = [0.0, 0.0, 0.0, 3.0, 2.0, 0.0];
    let poly = Shape::try_from(&coords[..]).unwrap();
    match &poly {
      Shape::Polygon(ring) => assert_eq!(ring.verts.len(), 3),
      other => panic!("expected polygon, got {:?}", other),
    }
    assert_eq!(poly.to_coords(), coords.to_vec());
  }
}
