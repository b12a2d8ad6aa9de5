//! Fracture Core - image fracture library
//!
//! This crate provides the column-wise split-and-rotate "fracture" transform
//! together with the JPEG/PNG/GIF decoding and encoding around it.
//!
//! # Pipeline
//!
//! 1. [`decode`] bytes into a column-major [`PixelGrid`]
//! 2. [`fracture_grid`] the grid with an injected [`AngleSource`]
//! 3. [`encode`] the result in the [`OutputFormat`] chosen from the output
//!    file name
//!
//! [`pipeline::run`] wires the three together around files on disk.

pub mod decode;
pub mod encode;
pub mod fracture;
pub mod grid;
pub mod pipeline;

pub use decode::{decode, DecodeError};
pub use encode::{encode, encode_for_mime, EncodeError, OutputFormat};
pub use fracture::{
    fracture, fracture_grid, fracture_with, AngleSource, AngleUnit, FixedAngles, FractureConfig,
    RandomAngles,
};
pub use grid::{GridError, PixelGrid, TRANSPARENT};
pub use pipeline::{PipelineError, RunSummary};
