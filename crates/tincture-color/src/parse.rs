// SPDX-License-Identifier: MIT
//
// Color text parsing.
//
// Hex notation is handled in-house because it is the canonical form every
// caller uses. Every other CSS form (rgb(), hsl(), hwb(), named colors) is
// delegated to csscolorparser.

use thiserror::Error;

use crate::color::Color;

/// Why a color string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input was empty or whitespace only.
    #[error("empty color string")]
    Empty,

    /// The input is not hex and not any CSS color syntax.
    #[error("unrecognized color {input:?}: {reason}")]
    Unrecognized { input: String, reason: String },
}

/// Parse any supported textual color form.
///
/// # Errors
///
/// Returns [`ParseColorError`] when the trimmed input is empty or matches
/// no known notation.
pub fn parse(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(color) = parse_hex(s) {
        return Ok(color);
    }

    csscolorparser::parse(s)
        .map(|css| {
            let [r, g, b, a] = css.to_rgba8();
            Color::rgba(r, g, b, a)
        })
        .map_err(|e| ParseColorError::Unrecognized {
            input: s.to_owned(),
            reason: e.to_string(),
        })
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional).
pub(crate) fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}
