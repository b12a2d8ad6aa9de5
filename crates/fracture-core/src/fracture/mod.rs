//! The fracture transform.
//!
//! Every column of the source image is split into an unrotated top run and
//! a rotated bottom run, with the split point carried from column to column.
//! The output always has the source's dimensions.
//!
//! # Randomness
//!
//! Rotation angles come from an [`AngleSource`] supplied by the caller:
//! - [`RandomAngles`] draws uniformly from `[10, 360)`
//! - [`FixedAngles`] replays a given sequence, for reproducible output
//!
//! # Angle Units
//!
//! By default the drawn integer is used directly as radians, which gives
//! far larger and more chaotic rotations than the number suggests.
//! [`AngleUnit::Degrees`] converts it first.

mod angle;
mod sampler;

pub use angle::{AngleSource, FixedAngles, RandomAngles, MAX_ANGLE, MIN_ANGLE};
pub use sampler::{
    fracture, fracture_grid, fracture_grid_with, fracture_with, AngleUnit, FractureConfig,
};
