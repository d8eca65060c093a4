use core::fmt;

use layer_position::Side;

/// A single editable field of a [`LayerStyle`](crate::LayerStyle).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleField {
    Position,
    Inset(Side),
    ZIndex,
    /// Any other style property, by CSS (kebab-case) name.
    Other(String),
}

impl StyleField {
    /// Resolve a control or property name.
    ///
    /// Accepts CSS names (`z-index`, `background-color`) and host camelCase names
    /// (`zIndex`, `backgroundColor`). Returns `None` for a blank name.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let css_name = to_css_name(trimmed);
        let field = match css_name.as_str() {
            "position" => Self::Position,
            "z-index" | "zindex" => Self::ZIndex,
            other => Side::from_property(other).map_or_else(|| Self::Other(css_name.clone()), Self::Inset),
        };
        Some(field)
    }

    /// CSS property name of this field.
    pub fn css_name(&self) -> &str {
        match self {
            Self::Position => "position",
            Self::Inset(side) => side.as_str(),
            Self::ZIndex => "z-index",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.css_name())
    }
}

/// Lowercase a property name, converting camelCase humps to dashes.
///
/// A dash goes only before an uppercase letter that follows a lowercase one, so
/// `zIndex` becomes `z-index` while `TOP` and `Left` just lowercase.
fn to_css_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lowercase = false;
    for character in name.chars() {
        if character.is_ascii_uppercase() && previous_lowercase {
            out.push('-');
        }
        previous_lowercase = character.is_ascii_lowercase();
        out.push(character.to_ascii_lowercase());
    }
    out
}
