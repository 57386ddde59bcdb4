//! The internal color model shared by every parser and formatter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGB color value.
///
/// Channels are independent intensities in `[0, 255]`. Every parser produces
/// a fully populated `Color` or fails; every formatter accepts any `Color`.
/// Value equality only, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red intensity.
    pub r: u8,
    /// Green intensity.
    pub g: u8,
    /// Blue intensity.
    pub b: u8,
}

impl Color {
    /// Construct a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array, in red/green/blue order.
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_rgb_triplet() {
        assert_eq!(Color::new(0, 191, 255).to_string(), "0,191,255");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Color::new(60, 20, 10), Color::from([60, 20, 10]));
    }
}
