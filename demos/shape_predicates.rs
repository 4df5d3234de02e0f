//! Walks through the shape operations on a few shapes around Wyoming.
//!
//! Run with `RUST_LOG=xs_shape=trace` to see classification and dispatch.

use tracing_subscriber::EnvFilter;
use xs_shape::constants::EARTH_SURFACE_AREA_KM2;
use xs_shape::*;

fn main() -> Result<(), InvalidShapeError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let wyoming_box = [41.0, -111.05, 45.0, -104.05];
  let wyoming = [41.0, -111.05, 45.0, -111.05, 45.0, -104.05, 41.0, -104.05];
  let casper = [42.8666, -106.3131];
  let denver = [39.7392, -104.9903];

  println!("kind of box:        {:?}", classify(&wyoming_box)?);
  println!("kind of polygon:    {:?}", classify(&wyoming)?);
  println!("box area:           {:.1} km2", area_km2(&wyoming_box)?);
  println!(
    "polygon area:       {:.1} km2 ({:.6} of {} km2)",
    area_km2(&wyoming)?,
    area(&wyoming)?,
    EARTH_SURFACE_AREA_KM2
  );
  println!("polygon bounds:     {:?}", bounds(&wyoming)?.to_array());
  println!("contains Casper:    {}", contains(&wyoming, &casper)?);
  println!("contains Denver:    {}", contains(&wyoming, &denver)?);
  println!("Casper within box:  {}", within(&casper, &wyoming_box)?);
  println!("overlaps itself:    {}", overlaps(&wyoming_box, &wyoming_box)?);

  match classify(&[41.0, -111.05, 45.0]) {
    Ok(kind) => println!("unexpected kind:    {kind:?}"),
    Err(err) => println!("rejected:           {err}"),
  }
  Ok(())
}
