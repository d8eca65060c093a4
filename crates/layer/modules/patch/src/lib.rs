//! Style patch builder — turns one control edit into a minimal single-key patch.
//!
//! Inset fields go through value coercion, `z-index` always becomes an integer, and
//! `position` only accepts the closed set of modes. Invalid modes are reported here so the
//! style model never sees them.

#![forbid(unsafe_code)]

mod builder;
mod error;

pub use builder::{
    build_patch, build_patch_for, extra_patch, inset_patch, position_patch,
    position_patch_from_text, z_index_patch,
};
pub use error::PatchError;
