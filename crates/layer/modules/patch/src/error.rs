use core::error::Error;
use core::fmt;

use layer_position::UnknownPosition;

/// Why a control edit could not be turned into a patch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatchError {
    /// The control did not name a field.
    EmptyField,
    /// `position` was given something other than the four supported modes.
    InvalidPosition(UnknownPosition),
}

impl fmt::Display for PatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => formatter.write_str("style edit does not name a field"),
            Self::InvalidPosition(unknown) => write!(formatter, "invalid position: {unknown}"),
        }
    }
}

impl Error for PatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyField => None,
            Self::InvalidPosition(unknown) => Some(unknown),
        }
    }
}

impl From<UnknownPosition> for PatchError {
    fn from(unknown: UnknownPosition) -> Self {
        Self::InvalidPosition(unknown)
    }
}
