//! Encoding identifiers tying each parser to its formatter.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::Color;
use crate::format;
use crate::parse::{self, ParseColorError};

/// Identifies one of the five textual color encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Decimal triplet, each channel 0–255.
    Rgb,
    /// 6 hex digits with optional `#` prefix.
    Hex,
    /// Hue 0–360°, saturation and lightness 0–100%.
    Hsl,
    /// Percentage triplet, each channel 0–100%.
    Percent,
    /// Unit-ratio triplet, each channel 0.0–1.0.
    Ratio,
}

impl Encoding {
    /// Human-readable label for diagnostics and help text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Percent => "percent",
            Self::Ratio => "ratio",
        }
    }

    /// All supported encodings, in canonical output order.
    pub fn all() -> &'static [Self] {
        const ALL: [Encoding; 5] = [
            Encoding::Rgb,
            Encoding::Hex,
            Encoding::Hsl,
            Encoding::Percent,
            Encoding::Ratio,
        ];
        &ALL
    }

    /// Parse `input` with this encoding's parser.
    pub fn parse(&self, input: &str) -> Result<Color, ParseColorError> {
        trace!(encoding = self.label(), input, "parsing color");
        match self {
            Self::Rgb => parse::parse_rgb(input),
            Self::Hex => parse::parse_hex(input),
            Self::Hsl => parse::parse_hsl(input),
            Self::Percent => parse::parse_percent(input),
            Self::Ratio => parse::parse_ratio(input),
        }
    }

    /// Render `color` with this encoding's formatter.
    pub fn format(&self, color: Color) -> String {
        match self {
            Self::Rgb => format::format_rgb(color),
            Self::Hex => format::format_hex(color),
            Self::Hsl => format::format_hsl(color),
            Self::Percent => format::format_percent(color),
            Self::Ratio => format::format_ratio(color),
        }
    }
}
