//! Formatters for the five textual color encodings.
//!
//! Formatters are total: any [`Color`] is in range by construction, so there
//! is no failure path. HSL and percent output truncate after scaling; ratio
//! output rounds to two decimal places. The asymmetry is deliberate and
//! pinned by fixtures.

use crate::color::Color;
use crate::hue::rgb_to_hsl;

/// Format as an RGB triplet: `"{r},{g},{b}"`, plain decimal.
pub fn format_rgb(color: Color) -> String {
    format!("{},{},{}", color.r, color.g, color.b)
}

/// Format as a hex color: `"#{rr}{gg}{bb}"`, lowercase, zero-padded.
pub fn format_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Format as an HSL triplet: degrees, saturation %, lightness %, each
/// truncated to an integer after scaling.
pub fn format_hsl(color: Color) -> String {
    let (h, s, l) = rgb_to_hsl(
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    );
    format!("{},{},{}", h as i64, (s * 100.0) as i64, (l * 100.0) as i64)
}

/// Format as a percentage triplet, each channel truncated to an integer.
pub fn format_percent(color: Color) -> String {
    let [pr, pg, pb] = color
        .channels()
        .map(|c| (100.0 * f64::from(c) / 255.0) as i64);
    format!("{pr},{pg},{pb}")
}

/// Format as a unit-ratio triplet with two decimal places per channel.
pub fn format_ratio(color: Color) -> String {
    let [rr, rg, rb] = color.channels().map(|c| f64::from(c) / 255.0);
    format!("{rr:.2},{rg:.2},{rb:.2}")
}
