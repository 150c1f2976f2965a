//! Text Measurement
//!
//! The bridge between Taffy's measure callback and a text-sizing routine.
//!
//! Text is sized on a character grid: every character occupies
//! `unicode_width(c)` cells (CJK and most emoji take two, control characters
//! none), a cell is `font_size * advance` wide, and a line is
//! `font_size * line_height` tall. Lines break on `\n` and, for wrapping
//! line-break modes, wherever the next character would cross the width bound.

use unicode_width::UnicodeWidthChar;

use crate::config::LayoutConfig;
use crate::properties::TextProperties;
use crate::types::Size;

use super::fonts::FontRegistry;

/// How a measurement constraint on one axis should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The axis size is fixed at the given value.
    Exactly,
    /// The axis may be at most the given value.
    AtMost,
    /// No constraint; the value is NaN.
    Undefined,
}

/// Computes the minimal box that fits rendered text within bounds.
///
/// Implementations are called from inside the layout solver, possibly
/// several times per pass, and must not have side effects on layout state.
pub trait TextSizer {
    fn size_that_fits(&self, text: &TextProperties, bounds: Size) -> Size;
}

/// Measure a text leaf for the solver.
///
/// A NaN or undefined width is measured as the largest representable width.
/// Height is always measured unconstrained.
pub fn measure_text_content(
    sizer: &dyn TextSizer,
    text: &TextProperties,
    width: f32,
    width_mode: MeasureMode,
    _height: f32,
    _height_mode: MeasureMode,
) -> Size {
    let effective_width = if width.is_nan() || width_mode == MeasureMode::Undefined {
        f32::MAX
    } else {
        width
    };

    let measured = sizer.size_that_fits(text, Size::new(effective_width, f32::MAX));
    tracing::trace!(
        width = effective_width,
        ?width_mode,
        measured_width = measured.width,
        measured_height = measured.height,
        "measured text"
    );
    measured
}

/// Cell width of a single character.
pub fn char_cells(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Cell width of a string, ignoring line breaks.
pub fn string_cells(s: &str) -> usize {
    s.chars().map(char_cells).fold(0, usize::saturating_add)
}

/// Cell widths of the lines `text` occupies.
///
/// `\n` always starts a new line. When `wrap` is set, a line also breaks
/// before a character that would push it past `max_cells`; a line always
/// keeps at least one character. Without `wrap`, each line is clipped to
/// `max_cells`.
///
/// Empty text occupies no lines.
pub fn measure_lines(text: &str, max_cells: usize, wrap: bool) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = 0usize;
        for c in paragraph.chars() {
            let cells = char_cells(c);
            if wrap && current > 0 && current.saturating_add(cells) > max_cells {
                lines.push(current);
                current = cells;
            } else {
                current = current.saturating_add(cells);
            }
        }
        lines.push(if wrap { current } else { current.min(max_cells) });
    }

    lines
}

/// Fraction of a cell a bound may fall short by and still fit the cell.
const CELL_EPSILON: f32 = 1e-3;

/// Grid-based [`TextSizer`] driven by a [`FontRegistry`].
#[derive(Debug, Clone)]
pub struct CellTextSizer {
    fonts: FontRegistry,
    default_font_size: f32,
}

impl CellTextSizer {
    pub fn new(fonts: FontRegistry, default_font_size: f32) -> Self {
        Self {
            fonts,
            default_font_size,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(FontRegistry::from_config(config), config.default_font_size)
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }
}

impl Default for CellTextSizer {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl TextSizer for CellTextSizer {
    fn size_that_fits(&self, text: &TextProperties, bounds: Size) -> Size {
        let content = text.content();
        if content.is_empty() {
            return Size::ZERO;
        }

        let style = &text.text_style;
        let metrics = self.fonts.resolve_or_fallback(style.font_name.as_deref());
        let font_size = style.font_size.unwrap_or(self.default_font_size);
        let cell_width = font_size * metrics.advance;
        let line_height = font_size * metrics.line_height;

        if cell_width <= 0.0 || line_height <= 0.0 {
            return Size::ZERO;
        }

        let max_cells = if bounds.width.is_nan() || bounds.width >= f32::MAX {
            usize::MAX
        } else {
            // Tolerate the rounding in a width this sizer reported itself
            (bounds.width.max(0.0) / cell_width + CELL_EPSILON).floor() as usize
        };
        let wrap = style.line_break_mode.unwrap_or_default().wraps();
        let lines = measure_lines(content, max_cells, wrap);

        let widest = lines.iter().copied().max().unwrap_or(0) as f32 * cell_width;
        let height = lines.len() as f32 * line_height;

        // Wrapped lines already fit, save a lone character wider than the bound.
        Size {
            width: if wrap { widest } else { widest.min(bounds.width) },
            height: height.min(bounds.height),
        }
    }
}
