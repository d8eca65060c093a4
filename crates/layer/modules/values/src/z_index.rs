//! Stacking order input.
//! Spec: <https://www.w3.org/TR/CSS2/visuren.html#z-index>

use log::debug;

use crate::coercion::{CoercedValue, coerce};

/// Parse z-index control input.
///
/// Always yields an integer: numeric text is truncated toward zero and saturated into
/// `i32`; anything else (including the transient text of a half-typed value) is `0`.
pub fn parse_z_index(raw_text: &str) -> i32 {
    match coerce(raw_text) {
        CoercedValue::Number(value) => value.trunc() as i32,
        CoercedValue::Text(text) => {
            debug!("z-index input {text:?} is not numeric; using 0");
            0
        }
    }
}
