//! Layout Module
//!
//! Everything between typed layout properties and Taffy.
//!
//! # Architecture
//!
//! 1. [`ResolvedLayout`] applies the defaulting table to a property record
//! 2. The Taffy bridge writes resolved inputs into a node's Taffy style
//! 3. Text leaves are sized through the measurement bridge during a solve
//! 4. Solved geometry is read back into a [`FrameLayout`]
//!
//! The element tree in [`crate::engine`] drives these steps; nothing here
//! owns Taffy nodes.

mod fonts;
mod resolved;
mod taffy_bridge;
mod text_measure;
mod types;

pub use fonts::{FontMetrics, FontRegistry, SYSTEM_FONT};
pub use resolved::ResolvedLayout;
pub use taffy_bridge::{
    apply_container_style, apply_item_style, constraint_from_taffy, flex_shorthand,
    resolve_measured, to_available_space, to_taffy_dimension,
};
pub use text_measure::{
    CellTextSizer, MeasureMode, TextSizer, char_cells, measure_lines, measure_text_content,
    string_cells,
};
pub use types::{Frame, FrameLayout};
