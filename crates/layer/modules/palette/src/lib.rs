//! Design-token palette handed to the editor's control surfaces.
//!
//! The palette is pass-through configuration: nothing in coercion, patch building or the
//! style merge reads it.

#![forbid(unsafe_code)]

mod color;
mod palette;

pub use color::{Color, InvalidColor};
pub use palette::Palette;
