use core::fmt;

use serde::{Deserialize, Serialize};

/// A stable 64-bit key for layers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerKey(pub u64);

impl LayerKey {
    /// The canvas itself. Always present, never a layer, never removable.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "layer#{}", self.0)
    }
}
