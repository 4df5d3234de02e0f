// src/constants.rs

//! Shape library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// pi / 4.0
pub const M_PI_4: f64 = consts::FRAC_PI_4;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;
/// 1 / sqrt(2)
pub const M_SQRT1_2: f64 = consts::FRAC_1_SQRT_2;

/// Reciprocal of the number of degrees in two full turns. A box's area is its
/// lune (longitude span over 360) times half its zone (difference of sines).
pub const INV_720: f64 = 1.0 / 720.0;

// Coordinate domains, in decimal degrees
/// Southernmost legal latitude.
pub const MIN_LAT_DEGS: f64 = -90.0;
/// Northernmost legal latitude.
pub const MAX_LAT_DEGS: f64 = 90.0;
/// Westernmost legal longitude.
pub const MIN_LNG_DEGS: f64 = -180.0;
/// Easternmost legal longitude.
pub const MAX_LNG_DEGS: f64 = 180.0;

/// Number of `f64` values making up one vertex in a flat coordinate sequence.
pub const COORDS_PER_VERTEX: usize = 2;

/// Surface area of the Earth in square kilometers, used to scale unit-sphere
/// fractions into absolute areas.
pub const EARTH_SURFACE_AREA_KM2: f64 = 510_072_000.0;
