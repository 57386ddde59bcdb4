//! Hueshift CLI — convert colors between five textual encodings.
//!
//! Each `--rgb`/`--hex`/`--hsl`/`--percent`/`--ratio` value is parsed with
//! the matching parser and, on success, printed in all five encodings on one
//! line. A value that fails to parse is reported to stderr and processing
//! continues; structural usage errors (unknown flag, missing value, no
//! arguments at all) are fatal.

use clap::{ArgMatches, CommandFactory, Parser};
use hueshift_core::{Color, Encoding, ParseColorError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hueshift")]
#[command(about = "Convert a color between RGB, HEX, HSL, percent, and ratio")]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Color as an RGB triplet, e.g. `0,191,255`
    #[arg(long, value_name = "VALUE")]
    rgb: Vec<String>,

    /// Color as 6 hex digits with optional `#`, e.g. `#00bfff`
    #[arg(long, value_name = "VALUE")]
    hex: Vec<String>,

    /// Color as hue,saturation,lightness, e.g. `195,100,50`
    #[arg(long, value_name = "VALUE")]
    hsl: Vec<String>,

    /// Color as a percentage triplet, e.g. `0,74.9,100`
    #[arg(long, value_name = "VALUE")]
    percent: Vec<String>,

    /// Color as a unit-ratio triplet, e.g. `0.0,0.75,1.0`
    #[arg(long, value_name = "VALUE")]
    ratio: Vec<String>,
}

/// The given values paired with their source encoding, in command-line
/// order.
///
/// Clap groups repeated occurrences per flag, so the values are re-sorted by
/// their original argv index to restore the left-to-right order.
fn requests(matches: &ArgMatches) -> Vec<(Encoding, &str)> {
    let mut requests = Vec::new();
    for &encoding in Encoding::all() {
        let (Some(values), Some(indices)) = (
            matches.get_many::<String>(encoding.label()),
            matches.indices_of(encoding.label()),
        ) else {
            continue;
        };
        requests.extend(indices.zip(values).map(|(i, v)| (i, encoding, v.as_str())));
    }
    requests.sort_by_key(|&(index, _, _)| index);
    requests
        .into_iter()
        .map(|(_, encoding, value)| (encoding, value))
        .collect()
}

/// One output line: the color rendered in every encoding.
fn conversion_line(color: Color) -> String {
    let parts: Vec<String> = Encoding::all()
        .iter()
        .map(|encoding| format!("{}: {}", encoding.label(), encoding.format(color)))
        .collect();
    parts.join(" ; ")
}

/// The stderr diagnostic for one unparseable value.
fn parse_failure_message(encoding: Encoding, value: &str, err: &ParseColorError) -> String {
    format!("Error with {}: '{}': {}", encoding.label(), value, err)
}

fn main() {
    let matches = Cli::command().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HUESHIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for (encoding, value) in requests(&matches) {
        match encoding.parse(value) {
            Ok(color) => {
                debug!(encoding = encoding.label(), value, ?color, "parsed");
                println!("{}", conversion_line(color));
            }
            // Non-fatal: report and keep converting the remaining values.
            Err(err) => {
                eprintln!("{}", parse_failure_message(encoding, value, &err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_from(args: &[&str]) -> ArgMatches {
        Cli::command()
            .try_get_matches_from(args)
            .expect("arguments should parse")
    }

    #[test]
    fn test_conversion_line_layout() {
        assert_eq!(
            conversion_line(Color::new(0, 191, 255)),
            "rgb: 0,191,255 ; hex: #00bfff ; hsl: 195,100,50 ; percent: 0,74,100 ; ratio: 0.00,0.75,1.00"
        );
    }

    #[test]
    fn test_requests_preserves_command_line_order() {
        let matches = matches_from(&[
            "hueshift", "--hex", "#3c140a", "--rgb", "1,2,3", "--hex", "#000000",
        ]);
        assert_eq!(
            requests(&matches),
            [
                (Encoding::Hex, "#3c140a"),
                (Encoding::Rgb, "1,2,3"),
                (Encoding::Hex, "#000000"),
            ]
        );
    }

    #[test]
    fn test_parse_failure_message_names_encoding_and_value() {
        let err = Encoding::Rgb.parse("256,0,0").unwrap_err();
        let message = parse_failure_message(Encoding::Rgb, "256,0,0", &err);
        assert!(message.starts_with("Error with rgb: '256,0,0'"), "{message}");
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        assert!(Cli::try_parse_from(["hueshift", "--cmyk", "1,2,3"]).is_err());
    }

    #[test]
    fn test_missing_value_is_a_usage_error() {
        assert!(Cli::try_parse_from(["hueshift", "--rgb"]).is_err());
    }

    #[test]
    fn test_no_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["hueshift"]).is_err());
    }
}
