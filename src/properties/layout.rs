//! Layout properties - the flexbox inputs of a single element.

use crate::layout::ResolvedLayout;
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Direction, Edges, FlexDirection, FlexWrap,
    JustifyContent, Overflow, PositionType, Size,
};

use super::{Diagnostics, PropertyMap, RawProperties, cast, merge_field};

/// Flexbox layout properties of an element.
///
/// Raw keys are the camelCase names (`flexDirection`, `marginLeft`, ...).
/// `margin` and `padding` are shorthands seeding all four sides; a per-side
/// field overrides its side.
///
/// Equality is field-wise, except that `width`/`height` and the min/max
/// bounds compare through their derived sizes ([`size`](Self::size),
/// [`min_size`](Self::min_size), [`max_size`](Self::max_size)) with
/// sentinel-aware float comparison. The remaining float fields treat NaN as
/// equal to itself, so a record always equals its own clone.
#[derive(Debug, Clone, Default)]
pub struct LayoutProperties {
    pub flex_direction: Option<FlexDirection>,
    pub direction: Option<Direction>,
    pub justify_content: Option<JustifyContent>,
    pub align_content: Option<AlignContent>,
    pub align_items: Option<AlignItems>,
    pub align_self: Option<AlignSelf>,
    pub position_type: Option<PositionType>,
    pub flex_wrap: Option<FlexWrap>,
    pub overflow: Option<Overflow>,

    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,

    pub margin: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,

    pub padding: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,

    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,

    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

impl LayoutProperties {
    /// Margin with per-side overrides applied over the shorthand, else 0.
    pub fn computed_margin(&self) -> Edges {
        Edges {
            left: self.margin_left.or(self.margin).unwrap_or(0.0),
            right: self.margin_right.or(self.margin).unwrap_or(0.0),
            top: self.margin_top.or(self.margin).unwrap_or(0.0),
            bottom: self.margin_bottom.or(self.margin).unwrap_or(0.0),
        }
    }

    /// Padding with per-side overrides applied over the shorthand, else 0.
    pub fn computed_padding(&self) -> Edges {
        Edges {
            left: self.padding_left.or(self.padding).unwrap_or(0.0),
            right: self.padding_right.or(self.padding).unwrap_or(0.0),
            top: self.padding_top.or(self.padding).unwrap_or(0.0),
            bottom: self.padding_bottom.or(self.padding).unwrap_or(0.0),
        }
    }

    /// Position offsets. There is no shorthand; unset sides are 0.
    pub fn position(&self) -> Edges {
        Edges {
            left: self.left.unwrap_or(0.0),
            right: self.right.unwrap_or(0.0),
            top: self.top.unwrap_or(0.0),
            bottom: self.bottom.unwrap_or(0.0),
        }
    }

    /// Size; an unset axis is NaN ("unconstrained").
    pub fn size(&self) -> Size {
        Size {
            width: self.width.unwrap_or(f32::NAN),
            height: self.height.unwrap_or(f32::NAN),
        }
    }

    /// Minimum size, present as a whole when either axis is set.
    /// The unset axis is 0.
    pub fn min_size(&self) -> Option<Size> {
        if self.min_width.is_none() && self.min_height.is_none() {
            return None;
        }
        Some(Size {
            width: self.min_width.unwrap_or(0.0),
            height: self.min_height.unwrap_or(0.0),
        })
    }

    /// Maximum size, present as a whole when either axis is set.
    /// The unset axis is `f32::MAX`.
    pub fn max_size(&self) -> Option<Size> {
        if self.max_width.is_none() && self.max_height.is_none() {
            return None;
        }
        Some(Size {
            width: self.max_width.unwrap_or(f32::MAX),
            height: self.max_height.unwrap_or(f32::MAX),
        })
    }

    /// Apply the defaulting table, producing concrete layout inputs.
    pub fn resolve(&self) -> ResolvedLayout {
        ResolvedLayout::from(self)
    }
}

impl RawProperties for LayoutProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            flex_direction: cast(raw, "flexDirection", d),
            direction: cast(raw, "direction", d),
            justify_content: cast(raw, "justifyContent", d),
            align_content: cast(raw, "alignContent", d),
            align_items: cast(raw, "alignItems", d),
            align_self: cast(raw, "alignSelf", d),
            position_type: cast(raw, "positionType", d),
            flex_wrap: cast(raw, "flexWrap", d),
            overflow: cast(raw, "overflow", d),
            flex: cast(raw, "flex", d),
            flex_grow: cast(raw, "flexGrow", d),
            flex_shrink: cast(raw, "flexShrink", d),
            margin: cast(raw, "margin", d),
            margin_top: cast(raw, "marginTop", d),
            margin_bottom: cast(raw, "marginBottom", d),
            margin_left: cast(raw, "marginLeft", d),
            margin_right: cast(raw, "marginRight", d),
            padding: cast(raw, "padding", d),
            padding_top: cast(raw, "paddingTop", d),
            padding_bottom: cast(raw, "paddingBottom", d),
            padding_left: cast(raw, "paddingLeft", d),
            padding_right: cast(raw, "paddingRight", d),
            top: cast(raw, "top", d),
            bottom: cast(raw, "bottom", d),
            left: cast(raw, "left", d),
            right: cast(raw, "right", d),
            width: cast(raw, "width", d),
            height: cast(raw, "height", d),
            min_width: cast(raw, "minWidth", d),
            min_height: cast(raw, "minHeight", d),
            max_width: cast(raw, "maxWidth", d),
            max_height: cast(raw, "maxHeight", d),
        }
    }

    fn merge(&mut self, other: &Self) {
        merge_field(&mut self.flex_direction, &other.flex_direction);
        merge_field(&mut self.direction, &other.direction);
        merge_field(&mut self.justify_content, &other.justify_content);
        merge_field(&mut self.align_content, &other.align_content);
        merge_field(&mut self.align_items, &other.align_items);
        merge_field(&mut self.align_self, &other.align_self);
        merge_field(&mut self.position_type, &other.position_type);
        merge_field(&mut self.flex_wrap, &other.flex_wrap);
        merge_field(&mut self.overflow, &other.overflow);
        merge_field(&mut self.flex, &other.flex);
        merge_field(&mut self.flex_grow, &other.flex_grow);
        merge_field(&mut self.flex_shrink, &other.flex_shrink);
        merge_field(&mut self.margin, &other.margin);
        merge_field(&mut self.margin_top, &other.margin_top);
        merge_field(&mut self.margin_bottom, &other.margin_bottom);
        merge_field(&mut self.margin_left, &other.margin_left);
        merge_field(&mut self.margin_right, &other.margin_right);
        merge_field(&mut self.padding, &other.padding);
        merge_field(&mut self.padding_top, &other.padding_top);
        merge_field(&mut self.padding_bottom, &other.padding_bottom);
        merge_field(&mut self.padding_left, &other.padding_left);
        merge_field(&mut self.padding_right, &other.padding_right);
        merge_field(&mut self.top, &other.top);
        merge_field(&mut self.bottom, &other.bottom);
        merge_field(&mut self.left, &other.left);
        merge_field(&mut self.right, &other.right);
        merge_field(&mut self.width, &other.width);
        merge_field(&mut self.height, &other.height);
        merge_field(&mut self.min_width, &other.min_width);
        merge_field(&mut self.min_height, &other.min_height);
        merge_field(&mut self.max_width, &other.max_width);
        merge_field(&mut self.max_height, &other.max_height);
    }
}

impl PartialEq for LayoutProperties {
    fn eq(&self, other: &Self) -> bool {
        self.flex_direction == other.flex_direction
            && self.direction == other.direction
            && self.justify_content == other.justify_content
            && self.align_content == other.align_content
            && self.align_items == other.align_items
            && self.align_self == other.align_self
            && self.position_type == other.position_type
            && self.flex_wrap == other.flex_wrap
            && self.overflow == other.overflow
            && same_scalar(self.flex, other.flex)
            && same_scalar(self.flex_grow, other.flex_grow)
            && same_scalar(self.flex_shrink, other.flex_shrink)
            && same_scalar(self.margin, other.margin)
            && same_scalar(self.margin_top, other.margin_top)
            && same_scalar(self.margin_bottom, other.margin_bottom)
            && same_scalar(self.margin_left, other.margin_left)
            && same_scalar(self.margin_right, other.margin_right)
            && same_scalar(self.padding, other.padding)
            && same_scalar(self.padding_top, other.padding_top)
            && same_scalar(self.padding_bottom, other.padding_bottom)
            && same_scalar(self.padding_left, other.padding_left)
            && same_scalar(self.padding_right, other.padding_right)
            && same_scalar(self.top, other.top)
            && same_scalar(self.bottom, other.bottom)
            && same_scalar(self.left, other.left)
            && same_scalar(self.right, other.right)
            && self.size().equivalent(&other.size())
            && Size::equivalent_opt(self.min_size(), other.min_size())
            && Size::equivalent_opt(self.max_size(), other.max_size())
    }
}

fn same_scalar(lhs: Option<f32>, rhs: Option<f32>) -> bool {
    match (lhs, rhs) {
        (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
        (a, b) => a.is_none() && b.is_none(),
    }
}
