#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::float_cmp)] // Exact coordinate equality is part of the point/box semantics
#![allow(clippy::many_single_char_names)] // Spherical trigonometry reads best with a, b, c, s
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `xs-shape` answers geometric questions about geographic shapes written as
//! flat `[lat, lng, lat, lng, ...]` sequences in decimal degrees.
//!
//! A sequence of one pair is a point, two pairs a south-west/north-east box,
//! and three or more pairs an implicitly closed polygon. The library can
//! classify a sequence, measure its share of the globe's surface, bound it,
//! and test whether two shapes overlap or one contains the other.
//!
//! ```
//! use xs_shape::{area, bounds, contains, overlaps};
//!
//! // The northern hemisphere covers half of the globe.
//! assert_eq!(area(&[0.0, -180.0, 90.0, 180.0]).unwrap(), 0.5);
//!
//! let triangle = [0.0, 0.0, 0.0, 3.0, 2.0, 0.0];
//! assert_eq!(bounds(&triangle).unwrap().to_array(), [0.0, 0.0, 2.0, 3.0]);
//!
//! let diamond = [-2.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0];
//! assert!(contains(&diamond, &[0.0, 0.0]).unwrap());
//! assert!(overlaps(&[0.0, 0.0], &[-1.0, -1.0, 1.0, 1.0]).unwrap());
//! ```
//!
//! All operations are pure functions over borrowed input and are safe to call
//! from any number of threads.

// Declare modules
pub mod bbox;
pub mod classify;
pub mod constants;
pub mod dispatch;
pub mod latlng;
pub mod measures;
pub mod polygon;
pub mod predicates;
pub mod types;

// Re-export key public types and functions for easier use
pub use bbox::bounds;
pub use classify::classify;
pub use dispatch::{
  apply1, apply2_commutative, apply2_ordered, relate_commutative, relate_ordered, visit, CommutativeRelation,
  OrderedRelation, ShapeVisitor,
};
pub use latlng::{degs_to_rads, is_valid_lat, is_valid_lng, rads_to_degs};
pub use measures::{area, area_km2};
pub use predicates::{contains, overlaps, within};
pub use types::{BBox, InvalidShapeError, LatLng, Ring, Shape, ShapeKind};
