//! Signature sniffing and decoding of JPEG, PNG and GIF containers.

use std::io::Cursor;

use image::{GenericImageView, ImageFormat, ImageReader};
use log::debug;

use super::DecodeError;
use crate::grid::PixelGrid;

/// Guess the container format from the leading bytes.
///
/// Returns `None` when no known signature matches.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Decode JPEG, PNG or GIF bytes into an RGBA pixel grid.
///
/// Only the first frame of an animated GIF is kept.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the signature is missing or
/// belongs to another format.
/// Returns `DecodeError::CorruptedFile` if the container cannot be decoded.
/// Returns `DecodeError::EmptyImage` if the image has no pixels.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif) => {}
        other => {
            debug!("rejecting container format {:?}", other);
            return Err(DecodeError::UnsupportedFormat);
        }
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    Ok(PixelGrid::from_rgba_image(&img.into_rgba8()))
}
