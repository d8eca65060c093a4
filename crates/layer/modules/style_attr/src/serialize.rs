use layer_style_model::{LayerStyle, StyleField};
use log::warn;

use crate::{Declaration, parse_style_attribute};

/// Declarations describing `style`: `position`, each non-auto inset, `z-index`, then the
/// remaining properties by name.
///
/// Insets and extra properties that would not read back as that one declaration (a stray
/// `;`, an unclosed string or function, a malformed name) are left out with a warning.
pub fn to_declarations(style: &LayerStyle) -> Vec<Declaration> {
    let mut out = Vec::with_capacity(6 + style.extra.len());
    out.push(Declaration::new(
        StyleField::Position.css_name(),
        style.position.as_str(),
    ));
    for side in style.set_sides() {
        push_checked(&mut out, side.as_str(), style.inset(side).to_css());
    }
    out.push(Declaration::new(
        StyleField::ZIndex.css_name(),
        style.z_index.to_string(),
    ));
    for (property, value) in &style.extra {
        push_checked(&mut out, property, value.clone());
    }
    out
}

fn push_checked(out: &mut Vec<Declaration>, property: &str, value: String) {
    if reads_back_as_one_declaration(property, &value) {
        out.push(Declaration::new(property, value));
    } else {
        warn!("not serializing {property}: {value:?}; it would not parse back as one declaration");
    }
}

/// Whether `property: value` parses as exactly that declaration and nothing else.
fn reads_back_as_one_declaration(property: &str, value: &str) -> bool {
    // The sentinel after the declaration catches values that swallow what follows them.
    let framed = format!("{property}: {value}; --end: 0");
    match parse_style_attribute(&framed).as_slice() {
        [declaration, sentinel] => {
            declaration.property == property
                && declaration.value == value.trim_ascii()
                && sentinel.property == "--end"
        }
        _ => false,
    }
}

/// Inline `style` attribute text for `style`.
pub fn to_style_attribute(style: &LayerStyle) -> String {
    to_declarations(style)
        .iter()
        .map(|declaration| format!("{}: {}", declaration.property, declaration.value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_position::Position;
    use layer_values::Inset;

    #[test]
    fn default_style_serializes_position_and_z_index() {
        assert_eq!(
            to_style_attribute(&LayerStyle::default()),
            "position: relative; z-index: 0"
        );
    }

    #[test]
    fn insets_and_extras_are_emitted_in_order() {
        let mut style = LayerStyle {
            position: Position::Absolute,
            top: Inset::Length(10.0),
            left: Inset::Length(20.5),
            right: Inset::Raw("5%".to_owned()),
            z_index: 3,
            ..LayerStyle::default()
        };
        style.extra.insert("opacity".to_owned(), "0.5".to_owned());
        style.extra.insert("color".to_owned(), "red".to_owned());
        assert_eq!(
            to_style_attribute(&style),
            "position: absolute; top: 10px; right: 5%; left: 20.5px; z-index: 3; color: red; opacity: 0.5"
        );
    }

    #[test]
    fn values_that_would_add_declarations_are_dropped() {
        let mut style = LayerStyle {
            top: Inset::Raw("1px; position: fixed".to_owned()),
            left: Inset::Raw("calc(1px".to_owned()),
            ..LayerStyle::default()
        };
        style.extra.insert("color".to_owned(), "red; z-index: 99".to_owned());
        style.extra.insert("content".to_owned(), r#""a; b""#.to_owned());
        style.extra.insert("font: x; top".to_owned(), "1px".to_owned());
        assert_eq!(
            to_style_attribute(&style),
            r#"position: relative; z-index: 0; content: "a; b""#
        );
    }

    #[test]
    fn serialized_text_parses_back_to_the_same_declarations() {
        let mut style = LayerStyle {
            position: Position::Fixed,
            bottom: Inset::Raw("calc(100% - 4px)".to_owned()),
            z_index: -2,
            ..LayerStyle::default()
        };
        style.extra.insert("background".to_owned(), r#"url("a;b.png")"#.to_owned());
        assert_eq!(
            parse_style_attribute(&to_style_attribute(&style)),
            to_declarations(&style)
        );
    }
}
