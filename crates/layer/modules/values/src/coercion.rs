//! Numeric-first coercion of raw control text.

use serde::{Deserialize, Serialize};

/// Result of coercing raw control text.
///
/// Serialized as `{ "kind": "number" | "text", "value": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CoercedValue {
    /// The trimmed text was a complete, finite numeric literal.
    Number(f64),
    /// Anything else, preserved verbatim. `Text("")` means "clear the field".
    Text(String),
}

impl CoercedValue {
    /// Whether this is the empty text value used to clear a field.
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

/// Coerce raw control text into a typed value.
///
/// Numeric interpretation is attempted first on the trimmed text. Partial numbers such as
/// `"10px"` and keywords such as `"auto"` stay text. This never fails.
pub fn coerce(raw_text: &str) -> CoercedValue {
    parse_numeric_literal(raw_text).map_or_else(
        || CoercedValue::Text(raw_text.to_owned()),
        CoercedValue::Number,
    )
}

/// Parse `text` as a complete, finite numeric literal.
///
/// Accepts surrounding whitespace, signed decimal literals with optional fraction and
/// exponent (`-3.5`, `.5`, `5.`, `1e3`) and unsigned `0x`/`0o`/`0b` integer literals.
/// Returns `None` for empty input, trailing garbage, and non-finite results.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = match split_radix_prefix(trimmed) {
        Some((radix, digits)) => parse_radix_digits(radix, digits)?,
        None => parse_decimal(trimmed)?,
    };
    value.is_finite().then_some(value)
}

/// Split off a `0x`/`0o`/`0b` prefix (either case).
fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    text.get(2..).map(|digits| (radix, digits))
}

fn parse_radix_digits(radix: u32, digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let mut value = 0.0_f64;
    for character in digits.chars() {
        let digit = character.to_digit(radix)?;
        value = value.mul_add(f64::from(radix), f64::from(digit));
    }
    Some(value)
}

/// Decimal literal: `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit.
fn parse_decimal(text: &str) -> Option<f64> {
    // `f64::from_str` also accepts `inf`/`nan` spellings; restrict to the literal alphabet.
    let well_formed = text
        .chars()
        .all(|character| character.is_ascii_digit() || matches!(character, '+' | '-' | '.' | 'e' | 'E'));
    if !well_formed {
        return None;
    }
    text.parse::<f64>().ok()
}
