//! Sources of random values used to decorate placeholder images.

/// Supplies random background colors.
pub trait ColorSource: Send + Sync {
    /// Return a color as six hex digits, optionally prefixed with `#`.
    fn hex_color(&self) -> String;
}

/// Supplies random overlay words.
pub trait WordSource: Send + Sync {
    /// Return a single word.
    fn word(&self) -> String;
}
