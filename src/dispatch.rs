// src/dispatch.rs

//! Routing of one or two classified shapes to kind-specific handlers.
//!
//! Every public operation funnels through here: operands are classified,
//! invalid ones are rejected, and the resulting `(kind, kind)` pair is matched
//! exhaustively so that the compiler checks every pairing is handled.

use tracing::trace;

use crate::types::{BBox, InvalidShapeError, LatLng, Ring, Shape};

/// An operation over a single shape, with one handler per kind.
pub trait ShapeVisitor {
  /// Result of the operation.
  type Output;

  /// Handles a point.
  fn point(&self, point: &LatLng) -> Self::Output;
  /// Handles a box.
  fn bbox(&self, bbox: &BBox) -> Self::Output;
  /// Handles a polygon.
  fn polygon(&self, ring: &Ring) -> Self::Output;
}

/// A symmetric relation between two shapes.
///
/// Only six handlers are needed for the nine ordered kind pairs: the operand
/// of higher complexity (Polygon > Box > Point) is always passed first.
pub trait CommutativeRelation {
  /// Result of the relation.
  type Output;

  fn point_point(&self, a: &LatLng, b: &LatLng) -> Self::Output;
  fn bbox_point(&self, bbox: &BBox, point: &LatLng) -> Self::Output;
  fn bbox_bbox(&self, a: &BBox, b: &BBox) -> Self::Output;
  fn polygon_point(&self, ring: &Ring, point: &LatLng) -> Self::Output;
  fn polygon_bbox(&self, ring: &Ring, bbox: &BBox) -> Self::Output;
  fn polygon_polygon(&self, a: &Ring, b: &Ring) -> Self::Output;
}

/// A directed relation between two shapes, with a handler for every ordered
/// kind pair. Handlers receive operands in call order.
pub trait OrderedRelation {
  /// Result of the relation.
  type Output;

  fn point_point(&self, a: &LatLng, b: &LatLng) -> Self::Output;
  fn point_bbox(&self, point: &LatLng, bbox: &BBox) -> Self::Output;
  fn point_polygon(&self, point: &LatLng, ring: &Ring) -> Self::Output;
  fn bbox_point(&self, bbox: &BBox, point: &LatLng) -> Self::Output;
  fn bbox_bbox(&self, a: &BBox, b: &BBox) -> Self::Output;
  fn bbox_polygon(&self, bbox: &BBox, ring: &Ring) -> Self::Output;
  fn polygon_point(&self, ring: &Ring, point: &LatLng) -> Self::Output;
  fn polygon_bbox(&self, ring: &Ring, bbox: &BBox) -> Self::Output;
  fn polygon_polygon(&self, a: &Ring, b: &Ring) -> Self::Output;
}

/// Applies a visitor to an already classified shape.
pub fn visit<V: ShapeVisitor>(shape: &Shape, visitor: &V) -> V::Output {
  match shape {
    Shape::Point(p) => visitor.point(p),
    Shape::Box(b) => visitor.bbox(b),
    Shape::Polygon(r) => visitor.polygon(r),
  }
}

/// Classifies `coords` and applies the matching visitor handler.
///
/// # Errors
/// Returns [`InvalidShapeError`] if `coords` is not a valid shape.
pub fn apply1<V: ShapeVisitor>(coords: &[f64], visitor: &V) -> Result<V::Output, InvalidShapeError> {
  let shape = Shape::parse(coords)?;
  trace!(kind = ?shape.kind(), "dispatching single shape");
  Ok(visit(&shape, visitor))
}

/// Evaluates a symmetric relation between two classified shapes.
pub fn relate_commutative<R: CommutativeRelation>(a: &Shape, b: &Shape, relation: &R) -> R::Output {
  trace!(a = ?a.kind(), b = ?b.kind(), "dispatching commutative pair");
  match (a, b) {
    (Shape::Point(a), Shape::Point(b)) => relation.point_point(a, b),
    (Shape::Box(a), Shape::Point(b)) => relation.bbox_point(a, b),
    (Shape::Point(a), Shape::Box(b)) => relation.bbox_point(b, a),
    (Shape::Box(a), Shape::Box(b)) => relation.bbox_bbox(a, b),
    (Shape::Polygon(a), Shape::Point(b)) => relation.polygon_point(a, b),
    (Shape::Point(a), Shape::Polygon(b)) => relation.polygon_point(b, a),
    (Shape::Polygon(a), Shape::Box(b)) => relation.polygon_bbox(a, b),
    (Shape::Box(a), Shape::Polygon(b)) => relation.polygon_bbox(b, a),
    (Shape::Polygon(a), Shape::Polygon(b)) => relation.polygon_polygon(a, b),
  }
}

/// Evaluates a directed relation between two classified shapes.
pub fn relate_ordered<R: OrderedRelation>(a: &Shape, b: &Shape, relation: &R) -> R::Output {
  trace!(a = ?a.kind(), b = ?b.kind(), "dispatching ordered pair");
  match (a, b) {
    (Shape::Point(a), Shape::Point(b)) => relation.point_point(a, b),
    (Shape::Point(a), Shape::Box(b)) => relation.point_bbox(a, b),
    (Shape::Point(a), Shape::Polygon(b)) => relation.point_polygon(a, b),
    (Shape::Box(a), Shape::Point(b)) => relation.bbox_point(a, b),
    (Shape::Box(a), Shape::Box(b)) => relation.bbox_bbox(a, b),
    (Shape::Box(a), Shape::Polygon(b)) => relation.bbox_polygon(a, b),
    (Shape::Polygon(a), Shape::Point(b)) => relation.polygon_point(a, b),
    (Shape::Polygon(a), Shape::Box(b)) => relation.polygon_bbox(a, b),
    (Shape::Polygon(a), Shape::Polygon(b)) => relation.polygon_polygon(a, b),
  }
}

/// Classifies both operands and evaluates a symmetric relation.
///
/// # Errors
/// Returns [`InvalidShapeError`] for the first operand that fails
/// classification, checking `a` before `b`.
pub fn apply2_commutative<R: CommutativeRelation>(
  a: &[f64],
  b: &[f64],
  relation: &R,
) -> Result<R::Output, InvalidShapeError> {
  let a = Shape::parse(a)?;
  let b = Shape::parse(b)?;
  Ok(relate_commutative(&a, &b, relation))
}

/// Classifies both operands and evaluates a directed relation.
///
/// # Errors
/// Returns [`InvalidShapeError`] for the first operand that fails
/// classification, checking `a` before `b`.
pub fn apply2_ordered<R: OrderedRelation>(a: &[f64], b: &[f64], relation: &R) -> Result<R::Output, InvalidShapeError> {
  let a = Shape::parse(a)?;
  let b = Shape::parse(b)?;
  Ok(relate_ordered(&a, &b, relation))
}
