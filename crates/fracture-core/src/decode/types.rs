//! Error types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not start with a JPEG, PNG or GIF signature.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The container was recognised but its contents could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero width or height.
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("unexpected EOF".to_string());
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete image file: unexpected EOF"
        );

        let err = DecodeError::UnsupportedFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err = DecodeError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert_eq!(err.to_string(), "Image has no pixels (0x12)");
    }
}
