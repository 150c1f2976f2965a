//! Text properties - content and styling of text-bearing elements.

use crate::types::{LineBreak, Rgba, TextAlign};

use super::{Diagnostics, PropertyMap, RawProperties, cast, merge_field};

/// Font and paragraph styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleProperties {
    pub font_name: Option<String>,
    pub font_size: Option<f32>,
    pub color: Option<Rgba>,
    pub text_alignment: Option<TextAlign>,
    pub line_break_mode: Option<LineBreak>,
}

impl RawProperties for TextStyleProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            font_name: cast(raw, "fontName", d),
            font_size: cast(raw, "fontSize", d),
            color: cast(raw, "color", d),
            text_alignment: cast(raw, "textAlignment", d),
            line_break_mode: cast(raw, "lineBreakMode", d),
        }
    }

    fn merge(&mut self, other: &Self) {
        merge_field(&mut self.font_name, &other.font_name);
        merge_field(&mut self.font_size, &other.font_size);
        merge_field(&mut self.color, &other.color);
        merge_field(&mut self.text_alignment, &other.text_alignment);
        merge_field(&mut self.line_break_mode, &other.line_break_mode);
    }
}

/// Properties of a text leaf. These are what the measurement bridge reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProperties {
    pub text: Option<String>,
    pub text_style: TextStyleProperties,
}

impl TextProperties {
    /// Plain text properties with default styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// The content to measure; unset text measures as empty.
    pub fn content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl RawProperties for TextProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            text: cast(raw, "text", d),
            text_style: TextStyleProperties::decode(raw, d),
        }
    }

    fn merge(&mut self, other: &Self) {
        merge_field(&mut self.text, &other.text);
        self.text_style.merge(&other.text_style);
    }
}

/// Properties of an editable text field.
///
/// A text field takes no part in measurement; its size comes from layout
/// properties alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldProperties {
    pub text_style: TextStyleProperties,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub enabled: Option<bool>,
    pub focused: Option<bool>,
    pub on_change: Option<String>,
    pub on_submit: Option<String>,
    pub on_blur: Option<String>,
    pub on_focus: Option<String>,
}

impl TextFieldProperties {
    /// Fields are enabled unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn is_focused(&self) -> bool {
        self.focused.unwrap_or(false)
    }
}

impl RawProperties for TextFieldProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            text_style: TextStyleProperties::decode(raw, d),
            text: cast(raw, "text", d),
            placeholder: cast(raw, "placeholder", d),
            enabled: cast(raw, "enabled", d),
            focused: cast(raw, "focused", d),
            on_change: cast(raw, "onChange", d),
            on_submit: cast(raw, "onSubmit", d),
            on_blur: cast(raw, "onBlur", d),
            on_focus: cast(raw, "onFocus", d),
        }
    }

    fn merge(&mut self, other: &Self) {
        self.text_style.merge(&other.text_style);
        merge_field(&mut self.text, &other.text);
        merge_field(&mut self.placeholder, &other.placeholder);
        merge_field(&mut self.enabled, &other.enabled);
        merge_field(&mut self.focused, &other.focused);
        merge_field(&mut self.on_change, &other.on_change);
        merge_field(&mut self.on_submit, &other.on_submit);
        merge_field(&mut self.on_blur, &other.on_blur);
        merge_field(&mut self.on_focus, &other.on_focus);
    }
}
