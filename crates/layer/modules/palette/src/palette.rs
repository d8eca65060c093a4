use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Color tokens used by the editor's control surfaces.
///
/// JSON keys are camelCase; missing keys fall back to [`Palette::default`] and unknown
/// keys are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Palette {
    /// Selected controls, focus rings, the active position mode.
    pub accent: Color,
    /// Panel background.
    pub surface: Color,
    /// Alternating rows and input backgrounds.
    pub surface_alt: Color,
    pub border: Color,
    pub text: Color,
    /// Placeholder text such as `auto` in an empty inset field.
    pub muted_text: Color,
    /// Rejected edits.
    pub danger: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x25, 0x63, 0xeb),
            surface: Color::rgb(0xff, 0xff, 0xff),
            surface_alt: Color::rgb(0xf3, 0xf4, 0xf6),
            border: Color::rgb(0xd1, 0xd5, 0xdb),
            text: Color::rgb(0x11, 0x18, 0x27),
            muted_text: Color::rgb(0x6b, 0x72, 0x80),
            danger: Color::rgb(0xdc, 0x26, 0x26),
        }
    }
}

impl Palette {
    /// Parse a palette from JSON text.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, unknown keys, or values that are not CSS colors.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse palette JSON")
    }

    /// Load a palette from a JSON file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or does not hold a valid palette.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading palette from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read palette file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid palette in {}", path.display()))
    }

    /// Serialize as pretty JSON with hex colors.
    ///
    /// # Errors
    /// Serialization of this plain struct does not fail in practice; the error is forwarded.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize palette")
    }
}
