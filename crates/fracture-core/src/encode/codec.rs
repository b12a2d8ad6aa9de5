//! JPEG, PNG and GIF encoding of pixel grids.
//!
//! All three encoders come from the `image` crate. PNG and GIF keep the
//! alpha channel. JPEG has none, so each pixel is multiplied by its alpha
//! first (transparent areas come out black).

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, Frame, ImageEncoder, Rgb, RgbImage, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

use super::OutputFormat;
use crate::grid::PixelGrid;

/// JPEG quality used for every JPEG export.
pub const JPEG_QUALITY: u8 = 75;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested format is not JPEG, PNG or GIF.
    #[error("Unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// The codec itself failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: OutputFormat,
        message: String,
    },
}

/// Encode a pixel grid in the given format.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty grid and
/// `EncodeError::EncodingFailed` if the codec rejects the image.
pub fn encode(grid: &PixelGrid, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    if grid.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let img = grid.to_rgba_image();
    let failed = |e: image::ImageError| EncodeError::EncodingFailed {
        format,
        message: e.to_string(),
    };

    match format {
        OutputFormat::Jpeg => encode_jpeg(&img).map_err(failed),
        OutputFormat::Png => encode_png(&img).map_err(failed),
        OutputFormat::Gif => encode_gif(img).map_err(failed),
    }
}

/// Encode a pixel grid for a MIME type hint such as `"image/png"`.
///
/// A hint that names none of the supported formats, including the empty
/// string, yields `EncodeError::UnsupportedFormat` and no bytes.
pub fn encode_for_mime(grid: &PixelGrid, mime: &str) -> Result<Vec<u8>, EncodeError> {
    let format = OutputFormat::from_mime(mime)
        .ok_or_else(|| EncodeError::UnsupportedFormat(mime.to_string()))?;
    encode(grid, format)
}

fn encode_jpeg(img: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let rgb = RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    });

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).write_image(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer.into_inner())
}

fn encode_png(img: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer.into_inner())
}

fn encode_gif(img: RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        // The trailer is written when the encoder drops.
        let mut encoder = GifEncoder::new(&mut buffer);
        encoder.encode_frame(Frame::new(img))?;
    }
    Ok(buffer)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode;
    use image::Rgba;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=24, 1usize..=24)
    }

    proptest! {
        /// Property: PNG preserves every pixel exactly.
        #[test]
        fn prop_png_round_trip(
            (width, height) in dimensions_strategy(),
            seed in any::<u32>(),
        ) {
            let grid = PixelGrid::from_fn(width, height, |x, y| {
                let v = seed.wrapping_mul(2654435761).wrapping_add((x * 131 + y * 17) as u32);
                Rgba(v.to_le_bytes())
            });
            let bytes = encode(&grid, OutputFormat::Png).unwrap();
            let decoded = decode(&bytes).unwrap();
            prop_assert_eq!(decoded, grid);
        }

        /// Property: every format preserves dimensions.
        #[test]
        fn prop_dimensions_survive_every_format(
            (width, height) in dimensions_strategy(),
            format_index in 0usize..3,
        ) {
            let format = OutputFormat::ALL[format_index];
            let grid = PixelGrid::from_fn(width, height, |x, y| {
                Rgba([(x * 9) as u8, (y * 9) as u8, 64, 255])
            });
            let bytes = encode(&grid, format).unwrap();
            let decoded = decode(&bytes).unwrap();
            prop_assert_eq!(decoded.width(), width);
            prop_assert_eq!(decoded.height(), height);
        }
    }
}
