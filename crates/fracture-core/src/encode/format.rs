//! Output format selection from file names and MIME types.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Image container formats the encoder can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Gif,
}

impl OutputFormat {
    /// Every supported format, in a stable order.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::Gif];

    /// The MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::Gif => "image/gif",
        }
    }

    /// Parse a MIME type, ignoring case and any `;` parameters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        Self::ALL
            .into_iter()
            .find(|format| format.mime_type().eq_ignore_ascii_case(essence))
    }

    /// Look up a file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        mime_type_for_extension(ext).and_then(Self::from_mime)
    }

    /// Pick the format for an output path from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        mime_type_for_path(path).and_then(Self::from_mime)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::Gif => "GIF",
        };
        f.write_str(name)
    }
}

/// Map a file extension to its image MIME type.
///
/// Matching is case-insensitive and a leading dot is allowed.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Map a path to an image MIME type using its extension.
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_type_for_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(mime_type_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(mime_type_for_extension(".jpeg"), Some("image/jpeg"));
        assert_eq!(mime_type_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_type_for_extension(".Gif"), Some("image/gif"));
        assert_eq!(mime_type_for_extension("bmp"), None);
        assert_eq!(mime_type_for_extension(""), None);
    }

    #[test]
    fn test_path_mapping() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/shattered.JPG")),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("a.b/c.png")),
            Some(OutputFormat::Png)
        );
        assert_eq!(OutputFormat::from_path(Path::new("noextension")), None);
        assert_eq!(OutputFormat::from_path(Path::new("image.webp")), None);
        assert_eq!(OutputFormat::from_path(Path::new(".gif")), None);
    }

    #[test]
    fn test_from_mime() {
        assert_eq!(OutputFormat::from_mime("image/gif"), Some(OutputFormat::Gif));
        assert_eq!(OutputFormat::from_mime("IMAGE/PNG"), Some(OutputFormat::Png));
        assert_eq!(
            OutputFormat::from_mime("image/jpeg; q=0.9"),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(OutputFormat::from_mime(""), None);
        assert_eq!(OutputFormat::from_mime("image/webp"), None);
    }

    #[test]
    fn test_mime_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_mime(format.mime_type()), Some(format));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for format in OutputFormat::ALL {
            let json = serde_json::to_string(&format).unwrap();
            let parsed: OutputFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, format);
        }
        assert_eq!(serde_json::to_string(&OutputFormat::Png).unwrap(), r#""Png""#);
        assert!(serde_json::from_str::<OutputFormat>(r#""Webp""#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputFormat::Jpeg.to_string(), "JPEG");
        assert_eq!(OutputFormat::Gif.to_string(), "GIF");
    }
}
