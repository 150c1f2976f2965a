//! Engine - the element tree and its Taffy nodes.
//!
//! Elements are handles into a slotmap arena. Each one carries its core
//! properties, its content (children, text, or nothing), and the Taffy node
//! built for it:
//!
//! ```text
//! ElementId → ElementNode { properties, content, parent, layout_node, flags }
//!                                                          │
//!                                         TaffyTree<ElementId> node
//! ```
//!
//! Text leaves store their own handle as the Taffy node context, so the
//! measure callback always reads the element's current text.

mod tree;

pub use tree::{ElementId, ElementNode, ElementTree, NodeContent, NodeFlags};
