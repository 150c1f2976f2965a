//! Taffy Bridge - Conversions between resolved layout inputs and Taffy styles
//!
//! The element tree owns the Taffy nodes; this module only knows how to
//! write a [`ResolvedLayout`] into a Taffy [`Style`] and how to read Taffy's
//! measure constraints back into the measurement bridge's terms.
//!
//! Writing is split in two, matching how elements use it: every element is a
//! flex item ([`apply_item_style`]), and containers additionally lay out
//! their children ([`apply_container_style`]). Both mutate a style in place,
//! so attributes they don't touch keep whatever the node already had.

use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems,
    AlignSelf as TaffyAlignSelf, AvailableSpace, Dimension as TaffyDimension,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto,
    Overflow as TaffyOverflow, Point, Position as TaffyPosition, Rect, Size as TaffySize, Style,
};

use crate::types::{
    AlignContent, AlignItems, AlignSelf, Edges, FlexDirection, FlexWrap, JustifyContent,
    Overflow, PositionType, Size,
};

use super::resolved::ResolvedLayout;
use super::text_measure::MeasureMode;

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

/// Whether a length means "no value": NaN or at least `f32::MAX`.
fn is_unbounded(value: f32) -> bool {
    value.is_nan() || value >= f32::MAX
}

/// Convert a length to Taffy's Dimension. Unbounded lengths become `Auto`.
pub fn to_taffy_dimension(value: f32) -> TaffyDimension {
    if is_unbounded(value) {
        TaffyDimension::Auto
    } else {
        TaffyDimension::Length(value)
    }
}

fn to_taffy_lpa(value: f32) -> LengthPercentageAuto {
    if is_unbounded(value) {
        LengthPercentageAuto::Auto
    } else {
        LengthPercentageAuto::Length(value)
    }
}

fn to_taffy_lp(value: f32) -> LengthPercentage {
    if is_unbounded(value) {
        LengthPercentage::Length(0.0)
    } else {
        LengthPercentage::Length(value)
    }
}

fn to_taffy_size(size: Size) -> TaffySize<TaffyDimension> {
    TaffySize {
        width: to_taffy_dimension(size.width),
        height: to_taffy_dimension(size.height),
    }
}

fn to_taffy_lpa_rect(edges: Edges) -> Rect<LengthPercentageAuto> {
    Rect {
        left: to_taffy_lpa(edges.left),
        right: to_taffy_lpa(edges.right),
        top: to_taffy_lpa(edges.top),
        bottom: to_taffy_lpa(edges.bottom),
    }
}

fn to_taffy_lp_rect(edges: Edges) -> Rect<LengthPercentage> {
    Rect {
        left: to_taffy_lp(edges.left),
        right: to_taffy_lp(edges.right),
        top: to_taffy_lp(edges.top),
        bottom: to_taffy_lp(edges.bottom),
    }
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    })
}

fn to_taffy_align_content(align: AlignContent) -> Option<TaffyAlignContent> {
    Some(match align {
        AlignContent::Stretch => TaffyAlignContent::Stretch,
        AlignContent::FlexStart => TaffyAlignContent::FlexStart,
        AlignContent::Center => TaffyAlignContent::Center,
        AlignContent::FlexEnd => TaffyAlignContent::FlexEnd,
        AlignContent::SpaceBetween => TaffyAlignContent::SpaceBetween,
        AlignContent::SpaceAround => TaffyAlignContent::SpaceAround,
    })
}

fn to_taffy_align_self(align: AlignSelf) -> Option<TaffyAlignSelf> {
    match align {
        AlignSelf::Auto => None, // inherit from parent
        AlignSelf::Stretch => Some(TaffyAlignSelf::Stretch),
        AlignSelf::FlexStart => Some(TaffyAlignSelf::FlexStart),
        AlignSelf::Center => Some(TaffyAlignSelf::Center),
        AlignSelf::FlexEnd => Some(TaffyAlignSelf::FlexEnd),
        AlignSelf::Baseline => Some(TaffyAlignSelf::Baseline),
    }
}

fn to_taffy_overflow(overflow: Overflow) -> TaffyOverflow {
    match overflow {
        Overflow::Visible => TaffyOverflow::Visible,
        Overflow::Hidden => TaffyOverflow::Clip,
        Overflow::Scroll => TaffyOverflow::Scroll,
    }
}

fn to_taffy_position(position: PositionType) -> TaffyPosition {
    match position {
        PositionType::Relative => TaffyPosition::Relative,
        PositionType::Absolute => TaffyPosition::Absolute,
    }
}

// =============================================================================
// STYLE WRITING
// =============================================================================

/// Expand the `flex` shorthand into `(grow, shrink, basis)`.
///
/// Positive values grow from a zero basis, negative values only shrink, and
/// zero or NaN neither grows nor shrinks.
pub fn flex_shorthand(flex: f32) -> (f32, f32, TaffyDimension) {
    if flex > 0.0 {
        (flex, 0.0, TaffyDimension::Length(0.0))
    } else if flex < 0.0 {
        (0.0, -flex, TaffyDimension::Auto)
    } else {
        (0.0, 0.0, TaffyDimension::Auto)
    }
}

/// Write the attributes every element has as a flex item.
///
/// Min and max sizes are written only when present; otherwise the style
/// keeps what it had.
pub fn apply_item_style(style: &mut Style, layout: &ResolvedLayout) {
    style.align_self = to_taffy_align_self(layout.align_self);

    let (grow, shrink, basis) = match layout.flex {
        Some(flex) => flex_shorthand(flex),
        None => (layout.flex_grow, layout.flex_shrink, TaffyDimension::Auto),
    };
    style.flex_grow = grow;
    style.flex_shrink = shrink;
    style.flex_basis = basis;

    style.margin = to_taffy_lpa_rect(layout.margin);
    style.size = to_taffy_size(layout.size);
    style.inset = to_taffy_lpa_rect(layout.position);
    style.position = to_taffy_position(layout.position_type);

    if let Some(min_size) = layout.min_size {
        style.min_size = to_taffy_size(min_size);
    }
    if let Some(max_size) = layout.max_size {
        style.max_size = to_taffy_size(max_size);
    }
}

/// Write the attributes a container uses to lay out its children.
pub fn apply_container_style(style: &mut Style, layout: &ResolvedLayout) {
    style.flex_direction = to_taffy_flex_direction(layout.effective_flex_direction());
    style.justify_content = to_taffy_justify_content(layout.justify_content);
    style.align_content = to_taffy_align_content(layout.align_content);
    style.align_items = to_taffy_align_items(layout.align_items);
    style.flex_wrap = to_taffy_flex_wrap(layout.flex_wrap);

    let overflow = to_taffy_overflow(layout.overflow);
    style.overflow = Point {
        x: overflow,
        y: overflow,
    };

    style.padding = to_taffy_lp_rect(layout.padding);
}

// =============================================================================
// MEASURE CONSTRAINTS
// =============================================================================

/// Read one axis of a Taffy measure request as a value and mode.
///
/// A known dimension is exact; definite space is an upper bound;
/// min-content asks for the narrowest fit; max-content is unconstrained.
pub fn constraint_from_taffy(known: Option<f32>, available: AvailableSpace) -> (f32, MeasureMode) {
    if let Some(value) = known {
        return (value, MeasureMode::Exactly);
    }

    match available {
        AvailableSpace::Definite(value) => (value, MeasureMode::AtMost),
        AvailableSpace::MinContent => (0.0, MeasureMode::AtMost),
        AvailableSpace::MaxContent => (f32::NAN, MeasureMode::Undefined),
    }
}

/// Combine a measured size with the known dimensions, which win.
pub fn resolve_measured(known: TaffySize<Option<f32>>, measured: Size) -> TaffySize<f32> {
    TaffySize {
        width: known.width.unwrap_or(measured.width),
        height: known.height.unwrap_or(measured.height),
    }
}

/// Available space for one axis of a layout pass. Unbounded axes are
/// solved as max-content.
pub fn to_available_space(value: f32) -> AvailableSpace {
    if is_unbounded(value) {
        AvailableSpace::MaxContent
    } else {
        AvailableSpace::Definite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::LayoutProperties;
    use crate::types::Direction;

    #[test]
    fn test_dimension_conversion() {
        assert_eq!(to_taffy_dimension(f32::NAN), TaffyDimension::Auto);
        assert_eq!(to_taffy_dimension(f32::MAX), TaffyDimension::Auto);
        assert_eq!(to_taffy_dimension(f32::INFINITY), TaffyDimension::Auto);
        assert_eq!(to_taffy_dimension(50.0), TaffyDimension::Length(50.0));
    }

    #[test]
    fn test_flex_shorthand() {
        assert_eq!(flex_shorthand(2.0), (2.0, 0.0, TaffyDimension::Length(0.0)));
        assert_eq!(flex_shorthand(-1.5), (0.0, 1.5, TaffyDimension::Auto));
        assert_eq!(flex_shorthand(0.0), (0.0, 0.0, TaffyDimension::Auto));
        assert_eq!(flex_shorthand(f32::NAN), (0.0, 0.0, TaffyDimension::Auto));
    }

    #[test]
    fn test_item_style_without_flex_uses_grow_and_shrink() {
        let mut style = Style::default();
        style.flex_basis = TaffyDimension::Length(0.0);

        let layout = LayoutProperties {
            flex_grow: Some(3.0),
            flex_shrink: Some(1.0),
            ..Default::default()
        }
        .resolve();
        apply_item_style(&mut style, &layout);

        assert_eq!(style.flex_grow, 3.0);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.flex_basis, TaffyDimension::Auto);
    }

    #[test]
    fn test_flex_supersedes_grow_and_shrink() {
        let mut style = Style::default();
        let layout = LayoutProperties {
            flex: Some(1.0),
            flex_grow: Some(3.0),
            flex_shrink: Some(2.0),
            ..Default::default()
        }
        .resolve();
        apply_item_style(&mut style, &layout);

        assert_eq!(style.flex_grow, 1.0);
        assert_eq!(style.flex_shrink, 0.0);
        assert_eq!(style.flex_basis, TaffyDimension::Length(0.0));
    }

    #[test]
    fn test_item_style_geometry() {
        let mut style = Style::default();
        let layout = LayoutProperties {
            margin: Some(4.0),
            margin_left: Some(10.0),
            width: Some(100.0),
            top: Some(7.0),
            position_type: Some(PositionType::Absolute),
            align_self: Some(AlignSelf::Center),
            ..Default::default()
        }
        .resolve();
        apply_item_style(&mut style, &layout);

        assert_eq!(style.margin.left, LengthPercentageAuto::Length(10.0));
        assert_eq!(style.margin.right, LengthPercentageAuto::Length(4.0));
        assert_eq!(style.size.width, TaffyDimension::Length(100.0));
        assert_eq!(style.size.height, TaffyDimension::Auto);
        assert_eq!(style.inset.top, LengthPercentageAuto::Length(7.0));
        assert_eq!(style.inset.left, LengthPercentageAuto::Length(0.0));
        assert_eq!(style.position, TaffyPosition::Absolute);
        assert_eq!(style.align_self, Some(TaffyAlignSelf::Center));
    }

    #[test]
    fn test_absent_min_max_left_untouched() {
        let mut style = Style::default();
        style.min_size.width = TaffyDimension::Length(12.0);
        style.max_size.height = TaffyDimension::Length(90.0);

        apply_item_style(&mut style, &LayoutProperties::default().resolve());

        assert_eq!(style.min_size.width, TaffyDimension::Length(12.0));
        assert_eq!(style.max_size.height, TaffyDimension::Length(90.0));
    }

    #[test]
    fn test_present_min_max_written() {
        let mut style = Style::default();
        let layout = LayoutProperties {
            min_width: Some(5.0),
            max_height: Some(50.0),
            ..Default::default()
        }
        .resolve();
        apply_item_style(&mut style, &layout);

        assert_eq!(style.min_size.width, TaffyDimension::Length(5.0));
        assert_eq!(style.min_size.height, TaffyDimension::Length(0.0));
        assert_eq!(style.max_size.width, TaffyDimension::Auto);
        assert_eq!(style.max_size.height, TaffyDimension::Length(50.0));
    }

    #[test]
    fn test_container_style() {
        let mut style = Style::default();
        let layout = LayoutProperties {
            flex_direction: Some(FlexDirection::Row),
            direction: Some(Direction::Rtl),
            justify_content: Some(JustifyContent::SpaceBetween),
            flex_wrap: Some(FlexWrap::Wrap),
            overflow: Some(Overflow::Hidden),
            padding: Some(2.0),
            ..Default::default()
        }
        .resolve();
        apply_container_style(&mut style, &layout);

        assert_eq!(style.flex_direction, TaffyFlexDirection::RowReverse);
        assert_eq!(style.justify_content, Some(TaffyJustifyContent::SpaceBetween));
        assert_eq!(style.align_items, Some(TaffyAlignItems::Stretch));
        assert_eq!(style.flex_wrap, TaffyFlexWrap::Wrap);
        assert_eq!(style.overflow.x, TaffyOverflow::Clip);
        assert_eq!(style.overflow.y, TaffyOverflow::Clip);
        assert_eq!(style.padding.top, LengthPercentage::Length(2.0));
    }

    #[test]
    fn test_default_container_is_column() {
        let mut style = Style::default();
        apply_container_style(&mut style, &LayoutProperties::default().resolve());
        assert_eq!(style.flex_direction, TaffyFlexDirection::Column);
        assert_eq!(style.justify_content, Some(TaffyJustifyContent::FlexStart));
    }

    #[test]
    fn test_constraint_from_taffy() {
        assert_eq!(
            constraint_from_taffy(Some(40.0), AvailableSpace::Definite(100.0)),
            (40.0, MeasureMode::Exactly)
        );
        assert_eq!(
            constraint_from_taffy(None, AvailableSpace::Definite(100.0)),
            (100.0, MeasureMode::AtMost)
        );
        assert_eq!(
            constraint_from_taffy(None, AvailableSpace::MinContent),
            (0.0, MeasureMode::AtMost)
        );

        let (value, mode) = constraint_from_taffy(None, AvailableSpace::MaxContent);
        assert!(value.is_nan());
        assert_eq!(mode, MeasureMode::Undefined);
    }

    #[test]
    fn test_known_dimensions_win() {
        let known = TaffySize {
            width: Some(80.0),
            height: None,
        };
        let resolved = resolve_measured(known, Size::new(30.0, 12.0));
        assert_eq!(resolved.width, 80.0);
        assert_eq!(resolved.height, 12.0);
    }

    #[test]
    fn test_available_space() {
        assert_eq!(to_available_space(320.0), AvailableSpace::Definite(320.0));
        assert_eq!(to_available_space(f32::NAN), AvailableSpace::MaxContent);
        assert_eq!(to_available_space(f32::MAX), AvailableSpace::MaxContent);
    }
}
