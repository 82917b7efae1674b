//! Background/foreground color selection.

use crate::error::ImageError;

/// Background used for grayscale placeholders.
pub const GRAYSCALE_BACKGROUND: &str = "CCCCCC";
/// Text color on light backgrounds.
pub const DARK_TEXT: &str = "000000";
/// Text color on dark backgrounds.
pub const LIGHT_TEXT: &str = "FFFFFF";

/// Backgrounds brighter than this get dark text.
const LUMINANCE_THRESHOLD: u32 = 130;

/// Split a 6-digit hex color (with or without a leading `#`) into its channels.
///
/// # Errors
///
/// Returns an error if the string is not exactly six hex digits.
pub fn parse_rgb(hex: &str) -> Result<(u8, u8, u8), ImageError> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ImageError::InvalidArgument(format!(
            "Expected a 6-digit hex color, got '{hex}'"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| ImageError::InvalidArgument(format!("Bad hex color '{hex}': {e}")))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Weighted channel sum: perceived brightness scaled by 1000.
fn weighted_luminance(r: u8, g: u8, b: u8) -> u32 {
    u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114
}

/// Perceived brightness on a 0..=255 scale, rounded down.
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> u32 {
    weighted_luminance(r, g, b) / 1000
}

/// Pick a legible text color for the given background.
///
/// # Errors
///
/// Returns an error if `background` is not a 6-digit hex color.
pub fn foreground_for(background: &str) -> Result<&'static str, ImageError> {
    let (r, g, b) = parse_rgb(background)?;
    // Compare before dividing: a luminance of 130.3 counts as light.
    if weighted_luminance(r, g, b) > LUMINANCE_THRESHOLD * 1000 {
        Ok(DARK_TEXT)
    } else {
        Ok(LIGHT_TEXT)
    }
}

/// Normalize a color to six uppercase hex digits without `#`.
#[must_use]
pub fn normalize_hex(hex: &str) -> String {
    hex.trim_start_matches('#').to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_background_gets_dark_text() {
        assert_eq!(luminance(0xCC, 0xCC, 0xCC), 204);
        assert_eq!(foreground_for(GRAYSCALE_BACKGROUND).unwrap(), DARK_TEXT);
    }

    #[test]
    fn black_background_gets_light_text() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(foreground_for("000000").unwrap(), LIGHT_TEXT);
    }

    #[test]
    fn white_background_gets_dark_text() {
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(foreground_for("FFFFFF").unwrap(), DARK_TEXT);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(luminance(0x82, 0x82, 0x82), 130);
        assert_eq!(foreground_for("828282").unwrap(), LIGHT_TEXT);
        assert_eq!(foreground_for("838383").unwrap(), DARK_TEXT);
    }

    #[test]
    fn fractional_luminance_above_threshold_gets_dark_text() {
        assert_eq!(weighted_luminance(0x83, 0x82, 0x82), 130_299);
        assert_eq!(luminance(0x83, 0x82, 0x82), 130);
        assert_eq!(foreground_for("838282").unwrap(), DARK_TEXT);
    }

    #[test]
    fn green_weighs_more_than_blue() {
        assert_eq!(foreground_for("00FF00").unwrap(), DARK_TEXT);
        assert_eq!(foreground_for("0000FF").unwrap(), LIGHT_TEXT);
    }

    #[test]
    fn parse_accepts_hash_and_lowercase() {
        assert_eq!(parse_rgb("#ff8000").unwrap(), (255, 128, 0));
        assert_eq!(parse_rgb("FF8000").unwrap(), (255, 128, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_rgb("FFF").is_err());
        assert!(parse_rgb("GGGGGG").is_err());
        assert!(parse_rgb("").is_err());
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_hex("#abc123"), "ABC123");
        assert_eq!(normalize_hex("DEADBE"), "DEADBE");
    }
}
