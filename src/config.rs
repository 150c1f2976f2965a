//! Layout configuration.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! default_font = "system"
//! default_font_size = 14.0
//! decode_mode = "permissive"
//! round_layout = true
//!
//! [[fonts]]
//! name = "Menlo"
//! advance = 0.6
//! line_height = 1.2
//! ```

use serde::Deserialize;

use crate::error::PropertyError;
use crate::properties::DecodeMode;

/// Metrics entry for a font registered from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontSpec {
    pub name: String,
    /// Advance of a single-width character, as a fraction of the font size.
    pub advance: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

/// Configuration for an [`ElementTree`](crate::engine::ElementTree).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Font used when text properties name none, or name an unknown one.
    pub default_font: String,
    /// Font size used when text properties leave it unset.
    pub default_font_size: f32,
    /// How property maps handed to the tree are decoded.
    pub decode_mode: DecodeMode,
    /// Snap computed layouts to whole pixels.
    pub round_layout: bool,
    /// Extra fonts registered alongside the built-in ones.
    pub fonts: Vec<FontSpec>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_font: crate::layout::SYSTEM_FONT.to_string(),
            default_font_size: 14.0,
            decode_mode: DecodeMode::Permissive,
            round_layout: true,
            fonts: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, PropertyError> {
        toml::from_str(source).map_err(|e| PropertyError::Config(e.to_string()))
    }
}
