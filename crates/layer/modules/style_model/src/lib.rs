//! Layer style model — the canonical per-layer style record and its merge operation.
//!
//! A [`LayerStyle`] is only ever changed by [`apply`]ing a [`StylePatch`]; the merge is
//! pure and last-write-wins per field.

#![forbid(unsafe_code)]

mod apply;
mod field;
mod patch;
mod style;

pub use apply::apply;
pub use field::StyleField;
pub use patch::StylePatch;
pub use style::LayerStyle;

pub use layer_position::{Position, Side};
pub use layer_values::Inset;
