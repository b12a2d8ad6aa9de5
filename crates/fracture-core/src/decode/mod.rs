//! Image decoding for the fracture pipeline.
//!
//! This module provides functionality for:
//! - Recognising JPEG, PNG and GIF containers by their signature
//! - Decoding them into a column-major RGBA [`PixelGrid`](crate::PixelGrid)
//!
//! The file extension is never consulted on the way in; only the bytes are.

mod container;
mod types;

pub use container::{decode, detect_format};
pub use types::DecodeError;
