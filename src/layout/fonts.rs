//! Font registry - metrics used by the cell text sizer.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::error::TextError;

/// Name of the font that is always registered.
pub const SYSTEM_FONT: &str = "system";

/// Metrics of a font, relative to its point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Advance of a single-width character, as a fraction of the font size.
    pub advance: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl FontMetrics {
    pub const SYSTEM: Self = Self {
        advance: 0.5,
        line_height: 1.2,
    };

    pub const MONOSPACE: Self = Self {
        advance: 0.6,
        line_height: 1.2,
    };
}

/// Maps font names to metrics.
///
/// Lookups of unknown names are recoverable: [`FontRegistry::resolve`]
/// reports them, and [`FontRegistry::resolve_or_fallback`] substitutes the
/// fallback font with a warning.
#[derive(Debug, Clone)]
pub struct FontRegistry {
    fonts: HashMap<String, FontMetrics>,
    fallback: String,
}

impl FontRegistry {
    /// Registry with the built-in `system` and `monospace` fonts.
    pub fn new() -> Self {
        let mut fonts = HashMap::new();
        fonts.insert(SYSTEM_FONT.to_string(), FontMetrics::SYSTEM);
        fonts.insert("monospace".to_string(), FontMetrics::MONOSPACE);
        Self {
            fonts,
            fallback: SYSTEM_FONT.to_string(),
        }
    }

    /// Registry with the built-ins plus every font from `config`, falling
    /// back to `config.default_font`.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut registry = Self::new();
        for spec in &config.fonts {
            registry.register(&spec.name, FontMetrics {
                advance: spec.advance,
                line_height: spec.line_height,
            });
        }

        if registry.fonts.contains_key(&config.default_font) {
            registry.fallback = config.default_font.clone();
        } else {
            tracing::warn!(
                font = %config.default_font,
                "default font is not registered, using {}",
                SYSTEM_FONT
            );
        }
        registry
    }

    /// Register (or replace) a font.
    pub fn register(&mut self, name: &str, metrics: FontMetrics) {
        tracing::debug!(font = name, ?metrics, "registered font");
        self.fonts.insert(name.to_string(), metrics);
    }

    /// Name of the font used for unset or unknown names.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Look up a font by name.
    pub fn resolve(&self, name: &str) -> Result<FontMetrics, TextError> {
        self.fonts
            .get(name)
            .copied()
            .ok_or_else(|| TextError::UnknownFont(name.to_string()))
    }

    /// Look up a font, substituting the fallback for unset or unknown names.
    pub fn resolve_or_fallback(&self, name: Option<&str>) -> FontMetrics {
        let Some(name) = name else {
            return self.fallback_metrics();
        };

        match self.resolve(name) {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!("{err}, falling back to {}", self.fallback);
                self.fallback_metrics()
            }
        }
    }

    fn fallback_metrics(&self) -> FontMetrics {
        self.fonts
            .get(&self.fallback)
            .copied()
            .unwrap_or(FontMetrics::SYSTEM)
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontSpec;

    #[test]
    fn test_builtins() {
        let registry = FontRegistry::new();
        assert_eq!(registry.resolve(SYSTEM_FONT), Ok(FontMetrics::SYSTEM));
        assert_eq!(registry.resolve("monospace"), Ok(FontMetrics::MONOSPACE));
        assert_eq!(registry.fallback(), SYSTEM_FONT);
    }

    #[test]
    fn test_unknown_font_is_an_error() {
        let registry = FontRegistry::new();
        assert_eq!(
            registry.resolve("Comic Serif"),
            Err(TextError::UnknownFont("Comic Serif".to_string()))
        );
    }

    #[test]
    fn test_unknown_font_falls_back() {
        let registry = FontRegistry::new();
        assert_eq!(registry.resolve_or_fallback(Some("Comic Serif")), FontMetrics::SYSTEM);
        assert_eq!(registry.resolve_or_fallback(None), FontMetrics::SYSTEM);
    }

    #[test]
    fn test_from_config() {
        let config = LayoutConfig {
            default_font: "Menlo".to_string(),
            fonts: vec![FontSpec {
                name: "Menlo".to_string(),
                advance: 0.6,
                line_height: 1.25,
            }],
            ..Default::default()
        };
        let registry = FontRegistry::from_config(&config);
        let menlo = FontMetrics {
            advance: 0.6,
            line_height: 1.25,
        };

        assert_eq!(registry.fallback(), "Menlo");
        assert_eq!(registry.resolve_or_fallback(Some("missing")), menlo);
    }

    #[test]
    fn test_unregistered_default_keeps_system_fallback() {
        let config = LayoutConfig {
            default_font: "missing".to_string(),
            ..Default::default()
        };
        let registry = FontRegistry::from_config(&config);
        assert_eq!(registry.fallback(), SYSTEM_FONT);
    }
}
