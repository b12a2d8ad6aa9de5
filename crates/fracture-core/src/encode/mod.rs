//! Image encoding for the fracture pipeline.
//!
//! This module provides functionality for:
//! - Mapping an output file name to a MIME type and an [`OutputFormat`]
//! - Encoding an RGBA [`PixelGrid`](crate::PixelGrid) as JPEG, PNG or GIF
//!
//! Unknown formats are reported as [`EncodeError::UnsupportedFormat`]; no
//! bytes are produced for them.

mod codec;
mod format;

pub use codec::{encode, encode_for_mime, EncodeError, JPEG_QUALITY};
pub use format::{mime_type_for_extension, mime_type_for_path, OutputFormat};
