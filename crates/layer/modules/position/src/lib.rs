//! Positioned layout policy for layers — relative, absolute, fixed, sticky.
//! Spec: <https://www.w3.org/TR/css-position-3/>
//!
//! Insets and z-index are accepted under every mode; this crate only describes what a
//! mode means so presentation layers can decide which controls to show.

#![forbid(unsafe_code)]

pub mod mode;
pub mod policy;
pub mod side;
pub mod stacking;

pub use mode::{Position, UnknownPosition, validate};
pub use policy::{OffsetReference, PolicyInfo, describe};
pub use side::Side;
pub use stacking::paint_order;
