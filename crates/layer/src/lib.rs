//! Layer style editing core.
//!
//! Control surfaces feed raw text through [`patch::build_patch`], the resulting patch is
//! merged with [`style_model::apply`], and [`LayerStore`] owns the merged styles and tells
//! subscribers about every committed change.

#![forbid(unsafe_code)]

mod key;
mod store;
mod subscriber;

pub use key::LayerKey;
pub use store::{Layer, LayerStore};
pub use subscriber::StyleSubscriber;

pub use layer_palette as palette;
pub use layer_patch as patch;
pub use layer_position as position;
pub use layer_style_attr as style_attr;
pub use layer_style_model as style_model;
pub use layer_values as values;

pub use layer_palette::Palette;
pub use layer_patch::{PatchError, build_patch};
pub use layer_position::{Position, Side, describe, validate};
pub use layer_style_model::{LayerStyle, StyleField, StylePatch, apply};
pub use layer_values::{CoercedValue, Inset, coerce};
