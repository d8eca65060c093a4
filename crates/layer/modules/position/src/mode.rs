//! The `position` property.
//! Spec: <https://www.w3.org/TR/css-position-3/#position-property>

use core::error::Error;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Positioning mode of a layer. `static` is not offered by the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Every mode, in the order controls list them.
    pub const ALL: [Self; 4] = [Self::Relative, Self::Absolute, Self::Fixed, Self::Sticky];

    /// CSS keyword for this mode.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A `position` value outside the four supported modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown position mode {:?}; expected relative, absolute, fixed or sticky",
            self.0
        )
    }
}

impl Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    /// Exact, case-sensitive keyword match.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "sticky" => Ok(Self::Sticky),
            _ => Err(UnknownPosition(text.to_owned())),
        }
    }
}

/// Whether `text` names one of the four supported modes exactly.
#[inline]
pub fn validate(text: &str) -> bool {
    text.parse::<Position>().is_ok()
}
