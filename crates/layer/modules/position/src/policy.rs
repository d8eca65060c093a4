//! What each positioning mode means for the editor controls.
//! Spec: <https://www.w3.org/TR/css-position-3/#position-property>

use crate::mode::Position;

/// What inset values are measured from under a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetReference {
    /// Offsets shift the box from where normal flow placed it.
    NormalFlowPosition,
    /// Offsets are measured from the edges of the containing block.
    ContainingBlock,
    /// Offsets are measured from the viewport edges.
    Viewport,
    /// Offsets are sticky constraints against the nearest scroll container.
    ScrollContainer,
}

/// Presentation hints for a positioning mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyInfo {
    pub position: Position,
    /// Human readable name for control labels.
    pub label: &'static str,
    /// Whether the box still occupies space in normal flow.
    pub in_flow: bool,
    pub offset_reference: OffsetReference,
    /// Inset controls are offered under every mode.
    pub shows_inset_controls: bool,
    /// Whether `z-index` changes stacking under this mode. The stored value is kept
    /// either way.
    pub z_index_effective: bool,
}

/// Describe `position` for presentation layers.
pub const fn describe(position: Position) -> PolicyInfo {
    let (label, in_flow, offset_reference) = match position {
        Position::Relative => ("Relative", true, OffsetReference::NormalFlowPosition),
        Position::Absolute => ("Absolute", false, OffsetReference::ContainingBlock),
        Position::Fixed => ("Fixed", false, OffsetReference::Viewport),
        Position::Sticky => ("Sticky", true, OffsetReference::ScrollContainer),
    };
    PolicyInfo {
        position,
        label,
        in_flow,
        offset_reference,
        shows_inset_controls: true,
        z_index_effective: !matches!(position, Position::Relative),
    }
}
