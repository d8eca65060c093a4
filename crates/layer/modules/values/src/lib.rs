//! Layer Values — coercion of raw control input into typed style values.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// One module per value family handled by the editor controls.
pub mod coercion;
pub mod css_inset;
pub mod inset;
pub mod z_index;

// Re-exports for ergonomic access from other crates.
pub use coercion::{CoercedValue, coerce, parse_numeric_literal};
pub use css_inset::parse_css_inset;
pub use inset::Inset;
pub use z_index::parse_z_index;
