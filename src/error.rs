//! Error types

use thiserror::Error;

use crate::engine::ElementId;

/// Errors raised while building or solving the layout tree.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The element handle does not refer to a live element.
    #[error("Unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// The operation does not apply to the element's content kind.
    #[error("Element {id:?} is not a {expected} element")]
    KindMismatch {
        id: ElementId,
        expected: &'static str,
    },

    /// The child is the parent itself or one of its ancestors.
    #[error("Element {child:?} cannot be a child of its descendant {parent:?}")]
    CyclicChild { parent: ElementId, child: ElementId },

    /// Taffy rejected an operation.
    #[error(transparent)]
    Taffy(#[from] taffy::TaffyError),
}

/// Errors raised by strict property decoding and configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// A key was present with a value of the wrong type.
    #[error("property `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// The configuration document could not be parsed.
    #[error("Invalid layout configuration: {0}")]
    Config(String),
}

/// Errors raised while resolving text resources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    #[error("Unknown font: {0}")]
    UnknownFont(String),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
