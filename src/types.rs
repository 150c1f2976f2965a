//! Core types for spark-layout.
//!
//! These are the typed values the property model decodes into and the
//! layout bridge converts into Taffy styles. Enums deserialize from their
//! kebab-case CSS names (`"row-reverse"`, `"space-between"`), with camelCase
//! aliases for multi-word variants.

use serde::Deserialize;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// ```
    /// use spark_layout::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
    /// assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
    /// assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse any supported color format: hex or the `transparent` keyword.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if input.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }

        if input.starts_with('#') || input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(input);
        }

        None
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Four-sided edge values (margin, padding, position offsets).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Edges {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// A width/height pair.
///
/// NaN on an axis means "unconstrained"; `f32::MAX` means "largest value".
/// The derived `PartialEq` is plain float comparison; use [`Size::equivalent`]
/// when comparing layout inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UNCONSTRAINED: Self = Self::new(f32::NAN, f32::NAN);
    pub const GREATEST: Self = Self::new(f32::MAX, f32::MAX);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Sentinel-aware comparison: NaN equals NaN, anything at or above
    /// `f32::MAX` equals anything at or above `f32::MAX`.
    pub fn equivalent(&self, other: &Self) -> bool {
        axis_equivalent(self.width, other.width) && axis_equivalent(self.height, other.height)
    }

    /// [`Size::equivalent`] lifted over optional sizes; two absent sizes match.
    pub fn equivalent_opt(lhs: Option<Self>, rhs: Option<Self>) -> bool {
        match (lhs, rhs) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.equivalent(&rhs),
            _ => false,
        }
    }
}

fn axis_equivalent(lhs: f32, rhs: f32) -> bool {
    if lhs.is_nan() || rhs.is_nan() {
        return lhs.is_nan() && rhs.is_nan();
    }
    if lhs >= f32::MAX && rhs >= f32::MAX {
        return true;
    }
    lhs == rhs
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    #[serde(alias = "columnReverse")]
    ColumnReverse,
    #[serde(alias = "rowReverse")]
    RowReverse,
}

impl FlexDirection {
    /// Check if this is a row direction (Row or RowReverse).
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Mirror the main axis of row directions; columns are unchanged.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Row => Self::RowReverse,
            Self::RowReverse => Self::Row,
            other => other,
        }
    }
}

/// Writing direction of a container's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    #[serde(alias = "LTR")]
    Ltr,
    #[serde(alias = "RTL")]
    Rtl,
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    #[serde(alias = "nowrap", alias = "noWrap")]
    NoWrap,
    Wrap,
    #[serde(alias = "wrapReverse")]
    WrapReverse,
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    #[serde(alias = "flexStart")]
    FlexStart,
    Center,
    #[serde(alias = "flexEnd")]
    FlexEnd,
    #[serde(alias = "spaceBetween")]
    SpaceBetween,
    #[serde(alias = "spaceAround")]
    SpaceAround,
    #[serde(alias = "spaceEvenly")]
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    Stretch,
    #[serde(alias = "flexStart")]
    FlexStart,
    Center,
    #[serde(alias = "flexEnd")]
    FlexEnd,
    Baseline,
}

/// Align self (item override for align items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    #[serde(alias = "flexStart")]
    FlexStart,
    Center,
    #[serde(alias = "flexEnd")]
    FlexEnd,
    Baseline,
}

/// Align content (multi-line cross axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    #[default]
    Stretch,
    #[serde(alias = "flexStart")]
    FlexStart,
    Center,
    #[serde(alias = "flexEnd")]
    FlexEnd,
    #[serde(alias = "spaceBetween")]
    SpaceBetween,
    #[serde(alias = "spaceAround")]
    SpaceAround,
}

/// Overflow behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

/// Position type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

// =============================================================================
// Text Enums
// =============================================================================

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

/// How text breaks when it reaches the width bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreak {
    /// Break onto a new line at the bound.
    #[default]
    #[serde(alias = "wordWrap", alias = "charWrap", alias = "word-wrap", alias = "char-wrap")]
    Wrap,
    /// Single line per paragraph, clipped at the bound.
    #[serde(alias = "clipping")]
    Clip,
    /// Single line per paragraph, truncated at the bound.
    #[serde(alias = "truncateTail", alias = "truncate-tail")]
    Truncate,
}

impl LineBreak {
    pub const fn wraps(&self) -> bool {
        matches!(self, Self::Wrap)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rgba_from_hex_rrggbb() {
        assert_eq!(Rgba::from_hex("#00ff00").unwrap(), Rgba::rgb(0, 255, 0));
        assert_eq!(Rgba::from_hex("0000ff").unwrap(), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_rgba_from_hex_rgb_shorthand() {
        // #abc expands to #aabbcc
        assert_eq!(Rgba::from_hex("#abc").unwrap(), Rgba::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_rgba_from_hex_invalid() {
        assert!(Rgba::from_hex("#xyz").is_none());
        assert!(Rgba::from_hex("#ffff").is_none());
        assert!(Rgba::from_hex("").is_none());
        assert!(Rgba::from_hex("#").is_none());
    }

    #[test]
    fn test_rgba_parse_keywords() {
        assert_eq!(Rgba::parse("Transparent"), Some(Rgba::TRANSPARENT));
        assert_eq!(Rgba::parse("  #fff "), Some(Rgba::WHITE));
        assert!(Rgba::parse("blue-ish").is_none());
    }

    #[test]
    fn test_rgba_deserialize() {
        let color: Rgba = serde_json::from_value(json!("#ff000080")).unwrap();
        assert_eq!(color, Rgba::new(255, 0, 0, 128));
        assert!(serde_json::from_value::<Rgba>(json!("nope")).is_err());
        assert!(serde_json::from_value::<Rgba>(json!(12)).is_err());
    }

    #[test]
    fn test_enum_names() {
        let dir: FlexDirection = serde_json::from_value(json!("row-reverse")).unwrap();
        assert_eq!(dir, FlexDirection::RowReverse);
        let dir: FlexDirection = serde_json::from_value(json!("rowReverse")).unwrap();
        assert_eq!(dir, FlexDirection::RowReverse);
        let justify: JustifyContent = serde_json::from_value(json!("space-between")).unwrap();
        assert_eq!(justify, JustifyContent::SpaceBetween);
        let wrap: FlexWrap = serde_json::from_value(json!("nowrap")).unwrap();
        assert_eq!(wrap, FlexWrap::NoWrap);
        assert!(serde_json::from_value::<Overflow>(json!("sideways")).is_err());
    }

    #[test]
    fn test_flex_direction_mirrored() {
        assert_eq!(FlexDirection::Row.mirrored(), FlexDirection::RowReverse);
        assert_eq!(FlexDirection::RowReverse.mirrored(), FlexDirection::Row);
        assert_eq!(FlexDirection::Column.mirrored(), FlexDirection::Column);
        assert!(FlexDirection::RowReverse.is_row());
    }

    #[test]
    fn test_size_equivalent_sentinels() {
        let nan = Size::new(f32::NAN, 10.0);
        let max = Size::new(f32::MAX, 10.0);
        assert!(nan.equivalent(&Size::new(f32::NAN, 10.0)));
        assert!(max.equivalent(&Size::new(f32::INFINITY, 10.0)));
        assert!(!nan.equivalent(&max));
        assert!(!max.equivalent(&nan));
        assert!(!Size::new(1.0, 2.0).equivalent(&Size::new(1.0, 3.0)));
    }

    #[test]
    fn test_size_equivalent_opt() {
        assert!(Size::equivalent_opt(None, None));
        assert!(!Size::equivalent_opt(Some(Size::ZERO), None));
        assert!(Size::equivalent_opt(Some(Size::GREATEST), Some(Size::GREATEST)));
    }
}
