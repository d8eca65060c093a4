//! Inset side values (`top`/`right`/`bottom`/`left`).
//! Spec: <https://www.w3.org/TR/css-position-3/#insets>

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::coercion::CoercedValue;

/// Value of a single inset side.
///
/// On the wire this is `null` (auto), a number (pixels) or a string (raw text).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "InsetRepr", into = "InsetRepr")]
pub enum Inset {
    /// No explicit value; placement defers to normal box layout.
    #[default]
    Auto,
    /// A pixel offset.
    Length(f64),
    /// Free text kept verbatim (`"10px"`, `"50%"`, `"calc(...)"`).
    Raw(String),
}

impl Inset {
    /// Whether the side is unset. Auto sides are left out of serialized style text.
    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Render as a CSS value: `auto`, `<n>px`, or the raw text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => formatter.write_str("auto"),
            Self::Length(pixels) => write!(formatter, "{pixels}px"),
            Self::Raw(text) => formatter.write_str(text),
        }
    }
}

impl From<CoercedValue> for Inset {
    fn from(value: CoercedValue) -> Self {
        if value.is_clear() {
            return Self::Auto;
        }
        match value {
            CoercedValue::Number(pixels) => Self::Length(pixels),
            CoercedValue::Text(text) => Self::Raw(text),
        }
    }
}

/// Loose wire shape mirroring the `number | string | undefined` union used by hosts.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum InsetRepr {
    Number(f64),
    Text(String),
    Unset,
}

impl From<InsetRepr> for Inset {
    fn from(repr: InsetRepr) -> Self {
        match repr {
            InsetRepr::Number(pixels) => Self::Length(pixels),
            InsetRepr::Text(text) => CoercedValue::Text(text).into(),
            InsetRepr::Unset => Self::Auto,
        }
    }
}

impl From<Inset> for InsetRepr {
    fn from(inset: Inset) -> Self {
        match inset {
            Inset::Auto => Self::Unset,
            Inset::Length(pixels) => Self::Number(pixels),
            Inset::Raw(text) => Self::Text(text),
        }
    }
}
