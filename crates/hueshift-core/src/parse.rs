//! Parsers for the five textual color encodings.
//!
//! Every parser validates field ranges before constructing the result and
//! truncates (toward zero) when a computed floating value becomes an 8-bit
//! channel. A parser either returns a fully populated [`Color`] or an error;
//! it never produces a partial result.

use std::ops::RangeInclusive;

use crate::color::Color;
use crate::hue::hsl_to_rgb;

/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{field} value {value} is outside {min}..{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("`{0}` is not a 6-digit hex color")]
    MalformedHex(String),
}

/// Split a `value , value , value` input into its three fields.
///
/// Whitespace around each separator is tolerated; the wrong field count is
/// not. Numeric validation is left to the caller.
fn split_triplet(input: &str) -> Result<[&str; 3], ParseColorError> {
    let mut fields = input.split(',').map(str::trim);
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(ParseColorError::FieldCount(input.split(',').count())),
    }
}

fn int_field(field: &str) -> Result<i64, ParseColorError> {
    field
        .parse()
        .map_err(|_| ParseColorError::NotANumber(field.to_string()))
}

fn float_field(field: &str) -> Result<f64, ParseColorError> {
    field
        .parse()
        .map_err(|_| ParseColorError::NotANumber(field.to_string()))
}

/// Validate a float field against its encoding's range.
///
/// `RangeInclusive::contains` is false for NaN, so non-finite fields fail
/// here along with ordinary out-of-range values.
fn check_range(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<f64, ParseColorError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ParseColorError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Parse an RGB triplet, three integers each in `[0, 255]`.
pub fn parse_rgb(input: &str) -> Result<Color, ParseColorError> {
    let fields = split_triplet(input)?;
    let mut channels = [0u8; 3];
    for (channel, (field, name)) in channels
        .iter_mut()
        .zip(fields.iter().zip(["red", "green", "blue"]))
    {
        let value = int_field(field)?;
        if !(0..=255).contains(&value) {
            return Err(ParseColorError::OutOfRange {
                field: name,
                value: value as f64,
                min: 0.0,
                max: 255.0,
            });
        }
        *channel = value as u8;
    }
    Ok(Color::from(channels))
}

/// Parse a hex color: an optional leading `#` followed by exactly 6 hex
/// digits, two per channel.
pub fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::MalformedHex(input.to_string()));
    }

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let group = u32::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map_err(|_| ParseColorError::MalformedHex(input.to_string()))?;
        // Two hex digits cannot exceed 255; the check guards against a
        // looser scan ever feeding this a wider group.
        if group > 0xff {
            return Err(ParseColorError::MalformedHex(input.to_string()));
        }
        *channel = group as u8;
    }
    Ok(Color::from(channels))
}

/// Parse an HSL triplet: hue in `[0, 360]` degrees, saturation and
/// lightness in `[0, 100]` percent.
pub fn parse_hsl(input: &str) -> Result<Color, ParseColorError> {
    let [h, s, l] = split_triplet(input)?;

    let h = check_range("hue", float_field(h)?, 0.0..=360.0)? / 360.0;
    let s = check_range("saturation", float_field(s)?, 0.0..=100.0)? / 100.0;
    let l = check_range("lightness", float_field(l)?, 0.0..=100.0)? / 100.0;

    let [r, g, b] = hsl_to_rgb(h, s, l);
    Ok(Color::new(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    ))
}

/// Parse a percentage triplet, three floats each in `[0, 100]`.
pub fn parse_percent(input: &str) -> Result<Color, ParseColorError> {
    let fields = split_triplet(input)?;
    let mut channels = [0u8; 3];
    for (channel, (field, name)) in channels
        .iter_mut()
        .zip(fields.iter().zip(["red", "green", "blue"]))
    {
        let value = check_range(name, float_field(field)?, 0.0..=100.0)?;
        *channel = (255.0 * value / 100.0) as u8;
    }
    Ok(Color::from(channels))
}

/// Parse a unit-ratio triplet, three floats each in `[0, 1]`.
pub fn parse_ratio(input: &str) -> Result<Color, ParseColorError> {
    let fields = split_triplet(input)?;
    let mut channels = [0u8; 3];
    for (channel, (field, name)) in channels
        .iter_mut()
        .zip(fields.iter().zip(["red", "green", "blue"]))
    {
        let value = check_range(name, float_field(field)?, 0.0..=1.0)?;
        *channel = (255.0 * value) as u8;
    }
    Ok(Color::from(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_boundaries() {
        assert_eq!(parse_rgb("0,0,0"), Ok(Color::new(0, 0, 0)));
        assert_eq!(parse_rgb("255,255,255"), Ok(Color::new(255, 255, 255)));
        assert!(parse_rgb("256,0,0").is_err());
        assert!(parse_rgb("0,-1,0").is_err());
    }

    #[test]
    fn test_parse_rgb_tolerates_separator_whitespace() {
        assert_eq!(parse_rgb(" 60 , 20 , 10 "), Ok(Color::new(60, 20, 10)));
    }

    #[test]
    fn test_parse_rgb_rejects_wrong_field_count() {
        assert_eq!(parse_rgb("1,2"), Err(ParseColorError::FieldCount(2)));
        assert_eq!(parse_rgb("1,2,3,4"), Err(ParseColorError::FieldCount(4)));
    }

    #[test]
    fn test_parse_rgb_rejects_trailing_garbage() {
        assert!(parse_rgb("1,2,3junk").is_err());
        assert!(parse_rgb("1,2 2,3").is_err());
    }

    #[test]
    fn test_parse_hex_with_and_without_prefix() {
        assert_eq!(parse_hex("#00bfff"), Ok(Color::new(0, 191, 255)));
        assert_eq!(parse_hex("3c140a"), Ok(Color::new(60, 20, 10)));
    }

    #[test]
    fn test_parse_hex_accepts_uppercase_digits() {
        assert_eq!(parse_hex("#00BFFF"), Ok(Color::new(0, 191, 255)));
    }

    #[test]
    fn test_parse_hex_rejects_wrong_shape() {
        assert!(parse_hex("#abc").is_err());
        assert!(parse_hex("#00bfff0").is_err());
        assert!(parse_hex("#00gfff").is_err());
        assert!(parse_hex(" #00bfff").is_err());
    }

    #[test]
    fn test_parse_hsl_achromatic() {
        assert_eq!(parse_hsl("0,0,0"), Ok(Color::new(0, 0, 0)));
        assert_eq!(parse_hsl("0,0,100"), Ok(Color::new(255, 255, 255)));
    }

    #[test]
    fn test_parse_hsl_fixtures() {
        assert_eq!(parse_hsl("195,100,50"), Ok(Color::new(0, 191, 255)));
        assert_eq!(parse_hsl("12,70,14"), Ok(Color::new(60, 20, 10)));
        assert_eq!(parse_hsl("120,50.1,47.25"), Ok(Color::new(60, 180, 60)));
    }

    #[test]
    fn test_parse_hsl_rejects_out_of_range() {
        assert!(parse_hsl("361,0,0").is_err());
        assert!(parse_hsl("0,101,0").is_err());
        assert!(parse_hsl("0,0,-0.1").is_err());
    }

    #[test]
    fn test_parse_percent_truncates() {
        // 255 × 74.91 / 100 = 191.02 → 191
        assert_eq!(parse_percent("0.0,74.91,100.0"), Ok(Color::new(0, 191, 255)));
        assert_eq!(parse_percent("23.53,7.85,3.95"), Ok(Color::new(60, 20, 10)));
    }

    #[test]
    fn test_parse_ratio_boundaries() {
        assert_eq!(parse_ratio("1.0,1.0,1.0"), Ok(Color::new(255, 255, 255)));
        assert_eq!(parse_ratio("0.0,0.7491,1.0"), Ok(Color::new(0, 191, 255)));
        assert!(parse_ratio("1.1,0,0").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_fields() {
        assert!(parse_ratio("NaN,0,0").is_err());
        assert!(parse_percent("inf,0,0").is_err());
        assert!(parse_hsl("0,-inf,0").is_err());
    }
}
