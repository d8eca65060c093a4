use std::collections::BTreeMap;

use layer_position::{Position, Side};
use layer_values::Inset;
use serde::{Deserialize, Serialize};

use crate::field::StyleField;

/// Canonical style record owned by a layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerStyle {
    pub position: Position,
    // Inset sides; `Auto` means unset.
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
    /// Stacking order among siblings. Kept under every `position`, including `relative`.
    pub z_index: i32,
    /// Remaining style properties keyed by CSS name, values as authored.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl LayerStyle {
    /// Inset value for `side`.
    #[inline]
    pub const fn inset(&self, side: Side) -> &Inset {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    #[inline]
    pub(crate) const fn inset_mut(&mut self, side: Side) -> &mut Inset {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Sides carrying an explicit (non-auto) inset.
    pub fn set_sides(&self) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|side| !self.inset(*side).is_auto())
            .collect()
    }

    /// Text a control should show for `field` when it re-renders from the model.
    ///
    /// Auto insets and absent extra properties show as the empty string.
    pub fn control_text(&self, field: &StyleField) -> String {
        match field {
            StyleField::Position => self.position.as_str().to_owned(),
            StyleField::Inset(side) => match self.inset(*side) {
                Inset::Auto => String::new(),
                Inset::Length(pixels) => pixels.to_string(),
                Inset::Raw(text) => text.clone(),
            },
            StyleField::ZIndex => self.z_index.to_string(),
            StyleField::Other(name) => self.extra.get(name).cloned().unwrap_or_default(),
        }
    }
}
