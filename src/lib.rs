//! # spark-layout
//!
//! Declarative layout reconciliation over [Taffy](https://github.com/DioxusLabs/taffy) flexbox.
//!
//! ## Architecture
//!
//! Elements are described by untyped property maps. The crate decodes them
//! into typed records, merges records field by field, and writes the
//! resolved values into a Taffy node per element:
//!
//! ```text
//! PropertyMap → RawProperties::from_raw → merge → resolve → Taffy Style
//!                                                               │
//!                          FrameLayout ← compute_layout ← measure text leaves
//! ```
//!
//! Text leaves are sized by a [`TextSizer`] called from inside the solve.
//!
//! ## Modules
//!
//! - [`types`] - Flex enums, edges, sizes, colors
//! - [`properties`] - Property records, decoding and merging
//! - [`layout`] - Defaulting, Taffy conversions, text measurement
//! - [`engine`] - The element tree and its layout nodes
//! - [`component`] - Components forwarding layout to their rendered element
//! - [`config`] - Layout configuration

pub mod component;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod properties;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use component::{Component, LayoutNodeSource};
pub use config::{FontSpec, LayoutConfig};
pub use engine::{ElementId, ElementNode, ElementTree, NodeContent, NodeFlags};
pub use error::{LayoutError, PropertyError, Result, TextError};

pub use layout::{
    CellTextSizer, FontMetrics, FontRegistry, Frame, FrameLayout, MeasureMode, ResolvedLayout,
    TextSizer,
};

pub use properties::{
    CoreProperties, DecodeMode, GestureProperties, LayoutProperties, PropertyMap, RawProperties,
    TextFieldProperties, TextProperties, TextStyleProperties,
};
