// src/polygon.rs

use crate::constants::{M_PI, M_PI_4, M_SQRT1_2};
use crate::types::{LatLng, Ring, Segment};

impl Ring {
  /// Creates a ring from its vertices. The ring closes implicitly.
  #[must_use]
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  /// Number of vertices in the ring.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.verts.len()
  }

  /// Whether the ring has no vertices.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.verts.is_empty()
  }

  /// Edges of the ring, including the closing edge from the last vertex back
  /// to the first.
  pub(crate) fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
    let n = self.verts.len();
    (0..n).map(move |i| Segment {
      start: self.verts[i],
      end: self.verts[(i + 1) % n],
    })
  }

  /// The point standing in for the whole ring in containment tests.
  #[inline]
  pub(crate) fn representative_point(&self) -> Option<&LatLng> {
    self.verts.first()
  }
}

/// Whether two segments cross, treating latitude and longitude as a flat plane.
///
/// Each segment's endpoints must lie on opposite sides of the line through the
/// other segment, decided by the sign of a 2D cross product. The comparison is
/// strict: a point exactly on the other line counts as being on its
/// non-positive side. Exactly collinear segments therefore never intersect,
/// while an endpoint resting on the other segment may. Curvature and the
/// antimeridian are ignored.
#[must_use]
pub(crate) fn segments_intersect(a: &Segment, b: &Segment) -> bool {
  let a_dlat = a.end.lat - a.start.lat;
  let a_dlng = a.end.lng - a.start.lng;
  let b_dlat = b.end.lat - b.start.lat;
  let b_dlng = b.end.lng - b.start.lng;

  let side_of_a = |p: &LatLng| (p.lng - a.start.lng) * a_dlat > (p.lat - a.start.lat) * a_dlng;
  let side_of_b = |p: &LatLng| (p.lng - b.start.lng) * b_dlat > (p.lat - b.start.lat) * b_dlng;

  side_of_a(&b.start) != side_of_a(&b.end) && side_of_b(&a.start) != side_of_b(&a.end)
}

/// Even-odd ray casting: whether `point` lies inside `ring`.
///
/// The ray runs from the point toward increasing latitude. An edge is counted
/// when the point's longitude falls in its half-open longitude span, so a
/// crossing at a shared vertex is attributed to exactly one edge. Edges with no
/// longitude span never count. Points on the boundary may go either way.
#[must_use]
pub(crate) fn ring_contains_point(ring: &Ring, point: &LatLng) -> bool {
  let (lat, lng) = (point.lat, point.lng);

  ring.edges().fold(false, |contains, Segment { start: p1, end: p2 }| {
    let straddles = (p1.lng <= lng && lng < p2.lng) || (p2.lng <= lng && lng < p1.lng);
    if straddles && lat < (p2.lat - p1.lat) * (lng - p1.lng) / (p2.lng - p1.lng) + p1.lat {
      !contains
    } else {
      contains
    }
  })
}

/// Whether any edge of `a` crosses any edge of `b`.
#[must_use]
pub(crate) fn rings_intersect(a: &Ring, b: &Ring) -> bool {
  a.edges().any(|ea| b.edges().any(|eb| segments_intersect(&ea, &eb)))
}

/// Whether two rings share any area.
///
/// True when their edges cross, or when either ring contains a vertex of the
/// other. Rings that only touch along an edge may go either way.
#[must_use]
pub(crate) fn ring_overlaps_ring(a: &Ring, b: &Ring) -> bool {
  rings_intersect(a, b)
    || b.verts.iter().any(|v| ring_contains_point(a, v))
    || a.verts.iter().any(|v| ring_contains_point(b, v))
}

/// Whether ring `a` contains ring `b`.
///
/// This is an approximation: `a` must contain `b`'s representative point and
/// the two rings' edges must not cross. It is exact for simple rings, but a
/// concave or self-intersecting `a` (a star, or a ring wrapped around `b`
/// without touching it) can be misjudged.
#[must_use]
pub(crate) fn ring_contains_ring(a: &Ring, b: &Ring) -> bool {
  match b.representative_point() {
    Some(p) => ring_contains_point(a, p) && !rings_intersect(a, b),
    None => false,
  }
}

/// Area of a spherical polygon as a fraction of the sphere's surface.
///
/// Robert D. Miller, "Computing the Area of a Spherical Polygon", Graphics
/// Gems IV. Each edge forms a spherical triangle with the north pole; the
/// triangle's excess comes from L'Huilier's theorem and is signed by whether
/// the edge runs east or west. The signed sum over all edges is the excess of
/// the polygon. Every quantity here is halved relative to the paper so that
/// the `tan(x / 2)` terms fold into plain tangents, which is also why the sum
/// divides by `pi` rather than `4 pi`.
///
/// Edges whose endpoints share a longitude run along a meridian and bound no
/// area against the pole, so they are skipped.
#[must_use]
pub(crate) fn ring_area(ring: &Ring) -> f64 {
  let mut excess = 0.0;

  for Segment { start, end } in ring.edges() {
    if start.lng == end.lng {
      continue;
    }

    let (lat1, lng1) = (start.lat_rads(), start.lng_rads());
    let (lat2, lng2) = (end.lat_rads(), end.lng_rads());

    // Half the great-circle distance between the endpoints (haversine).
    // Antipodal endpoints round the sine just past 1.
    let a = (M_SQRT1_2 * ((1.0 - (lat2 - lat1).cos()) + lat1.cos() * lat2.cos() * (1.0 - (lng2 - lng1).cos())).sqrt())
      .min(1.0)
      .asin();
    // Half the colatitudes.
    let b = M_PI_4 - 0.5 * lat2;
    let c = M_PI_4 - 0.5 * lat1;
    let s = 0.5 * (a + b + c);

    let t = s.tan() * (s - a).tan() * (s - b).tan() * (s - c).tan();
    let e = t.abs().sqrt().atan().abs();

    if lng2 < lng1 {
      excess -= e;
    } else {
      excess += e;
    }
  }

  excess.abs() / M_PI
}
