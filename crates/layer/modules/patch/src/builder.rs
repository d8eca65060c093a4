use layer_position::{Position, Side};
use layer_style_model::{StyleField, StylePatch};
use layer_values::{coerce, parse_z_index};
use log::debug;

use crate::error::PatchError;

/// Build the patch for raw control text entered into `field`.
///
/// # Errors
/// Returns [`PatchError::InvalidPosition`] when `field` is `position` and `raw_text` is not
/// exactly one of the four modes. Every other field accepts any text.
pub fn build_patch(field: &StyleField, raw_text: &str) -> Result<StylePatch, PatchError> {
    let patch = match field {
        StyleField::Position => position_patch_from_text(raw_text)?,
        StyleField::Inset(side) => inset_patch(*side, raw_text),
        StyleField::ZIndex => z_index_patch(raw_text),
        StyleField::Other(name) => extra_patch(name, raw_text),
    };
    Ok(patch)
}

/// Like [`build_patch`], resolving the field from a control or property name first.
///
/// # Errors
/// [`PatchError::EmptyField`] for a blank name, otherwise as [`build_patch`].
pub fn build_patch_for(field_name: &str, raw_text: &str) -> Result<StylePatch, PatchError> {
    let field = StyleField::parse(field_name).ok_or(PatchError::EmptyField)?;
    build_patch(&field, raw_text)
}

/// Inset edit: numeric text becomes a length, empty text clears to auto, anything else is
/// kept verbatim.
pub fn inset_patch(side: Side, raw_text: &str) -> StylePatch {
    StylePatch::with_inset(side, coerce(raw_text).into())
}

/// z-index edit; never produces free text, malformed input becomes `0`.
pub fn z_index_patch(raw_text: &str) -> StylePatch {
    StylePatch::with_z_index(parse_z_index(raw_text))
}

/// Typed position edit from a closed-set control (select, segmented buttons).
pub fn position_patch(position: Position) -> StylePatch {
    StylePatch::with_position(position)
}

/// Position edit from text.
///
/// # Errors
/// [`PatchError::InvalidPosition`] unless `raw_text` is exactly `relative`, `absolute`,
/// `fixed` or `sticky`.
pub fn position_patch_from_text(raw_text: &str) -> Result<StylePatch, PatchError> {
    let position = raw_text.parse::<Position>().map_err(|unknown| {
        debug!("rejecting position edit: {unknown}");
        PatchError::from(unknown)
    })?;
    Ok(position_patch(position))
}

/// Edit of a property outside the positioning fields; text is stored as typed.
pub fn extra_patch(name: &str, raw_text: &str) -> StylePatch {
    StylePatch::with_extra(name, raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_position::UnknownPosition;
    use layer_values::Inset;

    #[test]
    fn inset_edits_are_coerced() -> Result<(), PatchError> {
        let patch = build_patch(&StyleField::Inset(Side::Top), "120")?;
        assert_eq!(patch, StylePatch::with_inset(Side::Top, Inset::Length(120.0)));

        let cleared = build_patch(&StyleField::Inset(Side::Top), "")?;
        assert_eq!(cleared.top, Some(Inset::Auto));

        let raw = build_patch(&StyleField::Inset(Side::Right), "10px")?;
        assert_eq!(raw.right, Some(Inset::Raw("10px".to_owned())));
        Ok(())
    }

    #[test]
    fn patches_touch_a_single_field() -> Result<(), PatchError> {
        for name in ["position", "top", "right", "bottom", "left", "zIndex", "color"] {
            let raw = if name == "position" { "fixed" } else { "3" };
            let patch = build_patch_for(name, raw)?;
            assert_eq!(patch.fields().len(), 1, "{name}");
        }
        Ok(())
    }

    #[test]
    fn z_index_never_becomes_text() -> Result<(), PatchError> {
        assert_eq!(build_patch(&StyleField::ZIndex, "abc")?.z_index, Some(0));
        assert_eq!(build_patch(&StyleField::ZIndex, "")?.z_index, Some(0));
        assert_eq!(build_patch(&StyleField::ZIndex, "14")?.z_index, Some(14));
        Ok(())
    }

    #[test]
    fn invalid_position_is_reported() {
        assert_eq!(
            build_patch(&StyleField::Position, "Absolute"),
            Err(PatchError::InvalidPosition(UnknownPosition(
                "Absolute".to_owned()
            )))
        );
        assert!(position_patch_from_text("static").is_err());
        assert!(position_patch_from_text("").is_err());
    }

    #[test]
    fn valid_positions_are_accepted() -> Result<(), PatchError> {
        for mode in Position::ALL {
            assert_eq!(position_patch_from_text(mode.as_str())?, position_patch(mode));
        }
        Ok(())
    }

    #[test]
    fn blank_field_name_is_an_error() {
        assert_eq!(build_patch_for("  ", "1"), Err(PatchError::EmptyField));
    }

    #[test]
    fn other_fields_keep_text_verbatim() -> Result<(), PatchError> {
        let patch = build_patch_for("backgroundColor", " #fff ")?;
        assert_eq!(
            patch.extra.get("background-color").map(String::as_str),
            Some(" #fff ")
        );
        Ok(())
    }
}
