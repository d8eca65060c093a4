use std::collections::BTreeMap;

use layer_position::{Position, Side};
use layer_values::Inset;
use serde::{Deserialize, Deserializer, Serialize};

use crate::field::StyleField;
use crate::style::LayerStyle;

/// Partial update of a [`LayerStyle`]. Only `Some` fields (and present `extra` keys) change.
///
/// In JSON an explicit `null` inset means "set to auto", while an absent key means "leave
/// unchanged".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub top: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub right: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bottom: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub left: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Other properties; an empty value removes the property from the style.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// A key that is present deserializes to `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl StylePatch {
    pub fn with_position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn with_inset(side: Side, inset: Inset) -> Self {
        let mut patch = Self::default();
        patch.set_inset(side, inset);
        patch
    }

    pub fn with_z_index(z_index: i32) -> Self {
        Self {
            z_index: Some(z_index),
            ..Self::default()
        }
    }

    pub fn with_extra(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut patch = Self::default();
        patch.extra.insert(name.into(), value.into());
        patch
    }

    /// True when applying this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && Side::ALL.into_iter().all(|side| self.inset(side).is_none())
            && self.z_index.is_none()
            && self.extra.is_empty()
    }

    #[inline]
    pub const fn inset(&self, side: Side) -> Option<&Inset> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    pub fn set_inset(&mut self, side: Side, inset: Inset) {
        let slot = match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        };
        *slot = Some(inset);
    }

    /// Fields this patch touches, in a stable order.
    pub fn fields(&self) -> Vec<StyleField> {
        let mut fields = Vec::new();
        if self.position.is_some() {
            fields.push(StyleField::Position);
        }
        for side in Side::ALL {
            if self.inset(side).is_some() {
                fields.push(StyleField::Inset(side));
            }
        }
        if self.z_index.is_some() {
            fields.push(StyleField::ZIndex);
        }
        fields.extend(self.extra.keys().cloned().map(StyleField::Other));
        fields
    }

    /// Compose with a patch applied afterwards; `later` wins on shared keys.
    ///
    /// `apply(&apply(s, a), b) == apply(s, &a.then(b))` for every style `s`.
    #[must_use]
    pub fn then(mut self, later: &Self) -> Self {
        if let Some(position) = later.position {
            self.position = Some(position);
        }
        for side in Side::ALL {
            if let Some(inset) = later.inset(side) {
                self.set_inset(side, inset.clone());
            }
        }
        if let Some(z_index) = later.z_index {
            self.z_index = Some(z_index);
        }
        for (name, value) in &later.extra {
            self.extra.insert(name.clone(), value.clone());
        }
        self
    }

    /// Minimal patch turning `before` into `after`.
    pub fn diff(before: &LayerStyle, after: &LayerStyle) -> Self {
        let mut patch = Self::default();
        if before.position != after.position {
            patch.position = Some(after.position);
        }
        for side in Side::ALL {
            let next = after.inset(side);
            if before.inset(side) != next {
                patch.set_inset(side, next.clone());
            }
        }
        if before.z_index != after.z_index {
            patch.z_index = Some(after.z_index);
        }
        for (name, value) in &after.extra {
            if before.extra.get(name) != Some(value) {
                patch.extra.insert(name.clone(), value.clone());
            }
        }
        for name in before.extra.keys() {
            if !after.extra.contains_key(name) {
                patch.extra.insert(name.clone(), String::new());
            }
        }
        patch
    }
}
