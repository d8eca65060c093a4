use layer_position::Position;
use layer_style_model::{StyleField, StylePatch};
use layer_values::{parse_css_inset, parse_z_index};
use log::warn;

use crate::normalize_style_attribute;

/// Build a patch from inline style text (last declaration per property wins).
///
/// Invalid `position` declarations are dropped with a warning, as CSS drops invalid
/// declarations; everything else is accepted.
pub fn patch_from_style_attribute(input: &str) -> StylePatch {
    let mut patch = StylePatch::default();
    for declaration in normalize_style_attribute(input) {
        let Some(field) = StyleField::parse(&declaration.property) else {
            continue;
        };
        match field {
            StyleField::Position => match declaration.value.parse::<Position>() {
                Ok(position) => patch.position = Some(position),
                Err(unknown) => warn!("ignoring style declaration: {unknown}"),
            },
            StyleField::Inset(side) => patch.set_inset(side, parse_css_inset(&declaration.value)),
            StyleField::ZIndex => patch.z_index = Some(parse_z_index(&declaration.value)),
            StyleField::Other(name) => {
                patch.extra.insert(name, declaration.value);
            }
        }
    }
    patch
}
