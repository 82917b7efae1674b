//! Request parameters: image formats and dimension checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Image formats the placeholder service can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG with the short extension.
    #[default]
    Jpg,
    /// JPEG with the long extension.
    Jpeg,
    /// PNG.
    Png,
    /// `WebP`.
    Webp,
    /// GIF.
    Gif,
}

impl ImageFormat {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [Self; 5] = [Self::Jpg, Self::Jpeg, Self::Png, Self::Webp, Self::Gif];

    /// Lowercase name used both in the URL path and as the file extension.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    /// Comma-separated list of accepted format names.
    #[must_use]
    pub fn allowed_list() -> String {
        Self::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == lowered).ok_or_else(|| {
            ImageError::InvalidFormat { format: s.to_string(), allowed: Self::allowed_list() }
        })
    }
}

/// Validate that both dimensions are positive.
///
/// # Errors
///
/// Returns an error if either dimension is zero.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidArgument(format!(
            "Image dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_formats() {
        assert_eq!("jpg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("webp".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert_eq!("gif".parse::<ImageFormat>().unwrap(), ImageFormat::Gif);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("WebP".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "bmp".parse::<ImageFormat>().unwrap_err();
        match err {
            ImageError::InvalidFormat { format, allowed } => {
                assert_eq!(format, "bmp");
                assert_eq!(allowed, "jpg, jpeg, png, webp, gif");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_format_message_lists_allowed() {
        let err = "tiff".parse::<ImageFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid image format \"tiff\". Allowable formats are: jpg, jpeg, png, webp, gif"
        );
    }

    #[test]
    fn default_format_is_jpg() {
        assert_eq!(ImageFormat::default(), ImageFormat::Jpg);
    }

    #[test]
    fn dimensions() {
        assert!(validate_dimensions(640, 480).is_ok());
        assert!(validate_dimensions(1, 1).is_ok());
        assert!(validate_dimensions(0, 480).is_err());
        assert!(validate_dimensions(640, 0).is_err());
    }
}
