// tests/contains_tests.rs

use rstest::rstest;
use xs_shape::*;

const DIAMOND: &[f64] = &[-2.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0];
const SMALL_DIAMOND: &[f64] = &[-1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0];
const FLAT_RECT: &[f64] = &[-1.0, -3.0, 1.0, -3.0, 1.0, 3.0, -1.0, 3.0];
const STAR: &[f64] = &[10.0, 0.0, -8.0902, -5.8779, 3.0902, 9.5106, 3.0902, -9.5106, -8.0902, 5.8779];

#[test]
fn test_point_contains_colocated_degenerate_box() {
  assert_eq!(contains(&[0.0, 0.0], &[0.0, 0.0, 0.0, 0.0]), Ok(true));
  assert_eq!(contains(&[0.0, 0.0], &[-1.0, -1.0, 1.0, 1.0]), Ok(false));
  assert_eq!(contains(&[0.0, 0.0], &[0.0, 0.0, 0.0, 1.0]), Ok(false));
}

#[test]
fn test_diamond_contains_center() {
  assert_eq!(contains(DIAMOND, &[0.0, 0.0]), Ok(true));
  assert_eq!(within(&[0.0, 0.0], DIAMOND), Ok(true));
  assert_eq!(contains(&[0.0, 0.0], DIAMOND), Ok(false));
}

#[test]
fn test_star_center_is_not_contained() {
  // Even-odd ray casting: the doubly wound core of a star is outside.
  assert_eq!(contains(STAR, &[0.0, 0.0]), Ok(false));
  assert_eq!(contains(STAR, &[7.0, 0.0]), Ok(true));
}

#[rstest]
#[case::nested_polygons(DIAMOND, SMALL_DIAMOND, true)]
#[case::nested_polygons_reversed(SMALL_DIAMOND, DIAMOND, false)]
#[case::crossing_polygons(DIAMOND, FLAT_RECT, false)]
#[case::crossing_polygons_reversed(FLAT_RECT, DIAMOND, false)]
#[case::polygon_in_box(&[-3.0, -3.0, 3.0, 3.0], DIAMOND, true)]
#[case::box_around_polygon(DIAMOND, &[-3.0, -3.0, 3.0, 3.0], false)]
#[case::box_in_polygon(DIAMOND, &[-0.5, -0.5, 0.5, 0.5], true)]
#[case::polygon_around_box(&[-0.5, -0.5, 0.5, 0.5], DIAMOND, false)]
#[case::degenerate_box_in_polygon(DIAMOND, &[0.1, 0.1, 0.1, 0.1], true)]
#[case::nested_boxes(&[-2.0, -2.0, 2.0, 2.0], &[-1.0, -1.0, 1.0, 1.0], true)]
#[case::box_contains_itself(&[-2.0, -2.0, 2.0, 2.0], &[-2.0, -2.0, 2.0, 2.0], true)]
#[case::straddling_boxes(&[-2.0, -2.0, 2.0, 2.0], &[1.0, 1.0, 3.0, 3.0], false)]
fn test_contains_is_directed(#[case] a: &[f64], #[case] b: &[f64], #[case] expected: bool) {
  assert_eq!(contains(a, b), Ok(expected));
  assert_eq!(within(b, a), Ok(expected));
}

#[rstest]
#[case(&[0.0, 0.0])]
#[case(&[-0.5, -0.5, 0.5, 0.5])]
#[case(SMALL_DIAMOND)]
fn test_contained_shapes_also_overlap(#[case] inner: &[f64]) {
  assert_eq!(contains(DIAMOND, inner), Ok(true));
  assert_eq!(overlaps(DIAMOND, inner), Ok(true));
}

#[test]
fn test_contains_rejects_invalid_operands() {
  assert_eq!(contains(&[], &[0.0, 0.0]), Err(InvalidShapeError::Arity(0)));
  assert_eq!(
    within(&[0.0, 0.0], &[-91.0, 0.0, 0.0, 0.0]),
    Err(InvalidShapeError::LatitudeDomain { index: 0, value: -91.0 })
  );
}
