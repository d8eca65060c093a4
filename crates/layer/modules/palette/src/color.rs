//! Palette colors.
//! Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>

use core::error::Error;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// Deserialized from any CSS `<color>` string (named, hex, `rgb()`, `hsl()`, ...);
/// serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque color from channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    pub fn to_hex(self) -> String {
        if self.alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

/// Text that is not a CSS color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid color {:?}", self.0)
    }
}

impl Error for InvalidColor {}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parsed: csscolorparser::Color = text
            .trim()
            .parse()
            .map_err(|_| InvalidColor(text.to_owned()))?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_color_forms() -> Result<(), InvalidColor> {
        assert_eq!("#ff0000".parse::<Color>()?, Color::rgb(255, 0, 0));
        assert_eq!("#0f0".parse::<Color>()?, Color::rgb(0, 255, 0));
        assert_eq!("blue".parse::<Color>()?, Color::rgb(0, 0, 255));
        assert_eq!(" rgb(1, 2, 3) ".parse::<Color>()?, Color::rgb(1, 2, 3));
        let translucent = "#00000080".parse::<Color>()?;
        assert_eq!(translucent.alpha, 0x80);
        Ok(())
    }

    #[test]
    fn rejects_non_colors() {
        assert!("not-a-color".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color::rgb(18, 52, 86).to_hex(), "#123456");
        let translucent = Color {
            alpha: 0x80,
            ..Color::rgb(0, 0, 0)
        };
        assert_eq!(translucent.to_string(), "#00000080");
    }
}
