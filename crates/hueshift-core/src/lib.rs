//! Hueshift Core — bidirectional color text conversion.
//!
//! This crate contains the internal color model, the parsers and formatters
//! for the five textual encodings (RGB, HEX, HSL, Percent, Ratio), and the
//! HSL⇄RGB color-space math. No I/O or process concerns.

pub mod color;
pub mod encoding;
pub mod format;
pub mod hue;
pub mod parse;

// Re-exports for convenience.
pub use color::Color;
pub use encoding::Encoding;
pub use parse::ParseColorError;
