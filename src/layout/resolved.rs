//! Resolved layout - layout properties with every default applied.

use crate::properties::LayoutProperties;
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Direction, Edges, FlexDirection, FlexWrap,
    JustifyContent, Overflow, PositionType, Size,
};

/// Concrete layout inputs derived from a [`LayoutProperties`] record.
///
/// | Attribute | Default |
/// |---|---|
/// | `flex_direction` | column |
/// | `direction` | ltr |
/// | `justify_content` | flex-start |
/// | `align_content`, `align_items` | stretch |
/// | `align_self` | auto |
/// | `position_type` | relative |
/// | `flex_wrap` | no-wrap |
/// | `overflow` | visible |
/// | `flex_grow`, `flex_shrink` | 0 |
/// | margin / padding / position sides | 0 after shorthand fallback |
/// | `size` axes | NaN |
/// | `min_size` | absent unless an axis is set; unset axis 0 |
/// | `max_size` | absent unless an axis is set; unset axis `f32::MAX` |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout {
    pub flex_direction: FlexDirection,
    pub direction: Direction,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub position_type: PositionType,
    pub flex_wrap: FlexWrap,
    pub overflow: Overflow,
    /// The `flex` shorthand stays optional; when present it supersedes
    /// `flex_grow` and `flex_shrink`.
    pub flex: Option<f32>,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub margin: Edges,
    pub padding: Edges,
    pub position: Edges,
    pub size: Size,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
}

impl From<&LayoutProperties> for ResolvedLayout {
    fn from(props: &LayoutProperties) -> Self {
        Self {
            flex_direction: props.flex_direction.unwrap_or(FlexDirection::Column),
            direction: props.direction.unwrap_or(Direction::Ltr),
            justify_content: props.justify_content.unwrap_or(JustifyContent::FlexStart),
            align_content: props.align_content.unwrap_or(AlignContent::Stretch),
            align_items: props.align_items.unwrap_or(AlignItems::Stretch),
            align_self: props.align_self.unwrap_or(AlignSelf::Auto),
            position_type: props.position_type.unwrap_or(PositionType::Relative),
            flex_wrap: props.flex_wrap.unwrap_or(FlexWrap::NoWrap),
            overflow: props.overflow.unwrap_or(Overflow::Visible),
            flex: props.flex,
            flex_grow: props.flex_grow.unwrap_or(0.0),
            flex_shrink: props.flex_shrink.unwrap_or(0.0),
            margin: props.computed_margin(),
            padding: props.computed_padding(),
            position: props.position(),
            size: props.size(),
            min_size: props.min_size(),
            max_size: props.max_size(),
        }
    }
}

impl ResolvedLayout {
    /// The flow axis after applying writing direction: right-to-left
    /// containers mirror row directions.
    pub fn effective_flex_direction(&self) -> FlexDirection {
        match self.direction {
            Direction::Ltr => self.flex_direction,
            Direction::Rtl => self.flex_direction.mirrored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaulting_table() {
        let resolved = LayoutProperties::default().resolve();

        assert_eq!(resolved.flex_direction, FlexDirection::Column);
        assert_eq!(resolved.direction, Direction::Ltr);
        assert_eq!(resolved.justify_content, JustifyContent::FlexStart);
        assert_eq!(resolved.align_content, AlignContent::Stretch);
        assert_eq!(resolved.align_items, AlignItems::Stretch);
        assert_eq!(resolved.align_self, AlignSelf::Auto);
        assert_eq!(resolved.position_type, PositionType::Relative);
        assert_eq!(resolved.flex_wrap, FlexWrap::NoWrap);
        assert_eq!(resolved.overflow, Overflow::Visible);
        assert_eq!(resolved.flex, None);
        assert_eq!(resolved.flex_grow, 0.0);
        assert_eq!(resolved.flex_shrink, 0.0);
        assert_eq!(resolved.margin, Edges::ZERO);
        assert_eq!(resolved.padding, Edges::ZERO);
        assert_eq!(resolved.position, Edges::ZERO);
        assert!(resolved.size.width.is_nan());
        assert!(resolved.size.height.is_nan());
        assert_eq!(resolved.min_size, None);
        assert_eq!(resolved.max_size, None);
    }

    #[test]
    fn test_set_values_win() {
        let resolved = LayoutProperties {
            flex_direction: Some(FlexDirection::Row),
            overflow: Some(Overflow::Hidden),
            flex: Some(1.0),
            padding: Some(2.0),
            min_width: Some(5.0),
            ..Default::default()
        }
        .resolve();

        assert_eq!(resolved.flex_direction, FlexDirection::Row);
        assert_eq!(resolved.overflow, Overflow::Hidden);
        assert_eq!(resolved.flex, Some(1.0));
        assert_eq!(resolved.padding, Edges::uniform(2.0));
        assert_eq!(resolved.min_size, Some(Size::new(5.0, 0.0)));
    }

    #[test]
    fn test_rtl_mirrors_rows() {
        let rtl_row = LayoutProperties {
            flex_direction: Some(FlexDirection::Row),
            direction: Some(Direction::Rtl),
            ..Default::default()
        }
        .resolve();
        assert_eq!(rtl_row.effective_flex_direction(), FlexDirection::RowReverse);

        let rtl_column = LayoutProperties {
            direction: Some(Direction::Rtl),
            ..Default::default()
        }
        .resolve();
        assert_eq!(rtl_column.effective_flex_direction(), FlexDirection::Column);
    }
}
