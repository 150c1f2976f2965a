//! Element tree - the arena of property-bearing elements and their Taffy nodes.

use slotmap::{SlotMap, new_key_type};
use taffy::{NodeId, Style, TaffyTree};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, PropertyError, Result};
use crate::layout::{
    CellTextSizer, Frame, FrameLayout, MeasureMode, TextSizer, apply_container_style,
    apply_item_style, constraint_from_taffy, measure_text_content, resolve_measured,
    to_available_space,
};
use crate::properties::{
    CoreProperties, PropertyMap, RawProperties, TextFieldProperties, TextProperties,
};
use crate::types::Size;

new_key_type! {
    /// Handle to an element in an [`ElementTree`].
    pub struct ElementId;
}

bitflags::bitflags! {
    /// Per-element bookkeeping for the Taffy node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u8 {
        const NONE = 0;
        /// The Taffy node carries the element handle as its measure context.
        const MEASURED = 1 << 0;
    }
}

/// What an element holds besides its core properties.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// Ordered children, laid out by this element.
    Container(Vec<ElementId>),
    /// A text leaf, sized by the measurement bridge.
    Text(TextProperties),
    /// An editable field; sized by its layout properties alone.
    TextField(TextFieldProperties),
    /// A leaf with no type-specific behavior.
    Other,
}

impl NodeContent {
    /// An empty container.
    pub fn container() -> Self {
        Self::Container(Vec::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::Text(_) => "text",
            Self::TextField(_) => "text field",
            Self::Other => "other",
        }
    }

    pub fn children(&self) -> &[ElementId] {
        match self {
            Self::Container(children) => children.as_slice(),
            _ => &[],
        }
    }
}

/// One element of the tree.
#[derive(Debug, Clone)]
pub struct ElementNode {
    pub properties: CoreProperties,
    pub content: NodeContent,
    pub parent: Option<ElementId>,
    /// Created on first build and reused after.
    pub layout_node: Option<NodeId>,
    pub flags: NodeFlags,
}

/// Binds a tree of elements to a Taffy layout tree.
///
/// Elements are stored in a slotmap, so stale handles are detected rather
/// than dereferenced. Each element owns at most one Taffy node, which keeps
/// the element's handle as context when the element is a text leaf.
///
/// # Example
///
/// ```
/// use spark_layout::{ElementTree, LayoutConfig, LayoutProperties, NodeContent, Size, TextProperties};
///
/// let mut tree = ElementTree::new(LayoutConfig::default());
/// let label = tree
///     .insert(LayoutProperties::default().into(), NodeContent::Text(TextProperties::plain("Hi")))
///     .unwrap();
/// let root = tree
///     .insert(
///         LayoutProperties { width: Some(200.0), height: Some(100.0), ..Default::default() }.into(),
///         NodeContent::Container(vec![label]),
///     )
///     .unwrap();
///
/// let layout = tree.compute_layout(root, Size::new(200.0, 100.0)).unwrap();
/// assert_eq!(layout.get(root).unwrap().width, 200.0);
/// ```
pub struct ElementTree {
    nodes: SlotMap<ElementId, ElementNode>,
    taffy: TaffyTree<ElementId>,
    sizer: Box<dyn TextSizer>,
    config: LayoutConfig,
}

impl ElementTree {
    /// Tree sizing text with a [`CellTextSizer`] built from `config`.
    pub fn new(config: LayoutConfig) -> Self {
        let sizer = CellTextSizer::from_config(&config);
        Self::with_sizer(config, sizer)
    }

    /// Tree sizing text with a caller-provided routine.
    pub fn with_sizer(config: LayoutConfig, sizer: impl TextSizer + 'static) -> Self {
        let mut taffy = TaffyTree::new();
        if !config.round_layout {
            taffy.disable_rounding();
        }

        Self {
            nodes: SlotMap::with_key(),
            taffy,
            sizer: Box::new(sizer),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The underlying Taffy tree.
    pub fn taffy(&self) -> &TaffyTree<ElementId> {
        &self.taffy
    }

    /// Decode a property record using the configured decode mode.
    pub fn decode<T: RawProperties>(&self, raw: &PropertyMap) -> std::result::Result<T, PropertyError> {
        T::decode_with(raw, self.config.decode_mode)
    }

    // =========================================================================
    // STRUCTURE
    // =========================================================================

    /// Add an element. Children named by a container must already exist;
    /// they are moved under the new element.
    pub fn insert(&mut self, properties: CoreProperties, content: NodeContent) -> Result<ElementId> {
        let children = match &content {
            NodeContent::Container(children) => {
                for &child in children {
                    self.node(child)?;
                }
                children.clone()
            }
            _ => Vec::new(),
        };

        let content = match content {
            NodeContent::Container(_) => NodeContent::container(),
            other => other,
        };
        let id = self.nodes.insert(ElementNode {
            properties,
            content,
            parent: None,
            layout_node: None,
            flags: NodeFlags::NONE,
        });

        if !children.is_empty() {
            self.set_children(id, children)?;
        }
        tracing::trace!(?id, "inserted element");
        Ok(id)
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        let mut children = self.children_of(parent)?.to_vec();
        self.node(child)?;

        children.retain(|&c| c != child);
        children.push(child);
        self.set_children(parent, children)
    }

    /// Replace `parent`'s children with `children`, in order.
    ///
    /// Elements that were children and are not listed are detached, not
    /// removed. Listed elements are moved from any other parent. Duplicates
    /// keep their first position.
    pub fn set_children(&mut self, parent: ElementId, children: Vec<ElementId>) -> Result<()> {
        let previous = self.children_of(parent)?.to_vec();

        let mut unique = Vec::with_capacity(children.len());
        for child in children {
            self.node(child)?;
            if self.is_ancestor_or_self(child, parent) {
                return Err(LayoutError::CyclicChild { parent, child });
            }
            if !unique.contains(&child) {
                unique.push(child);
            }
        }

        for &old in &previous {
            if !unique.contains(&old) {
                if let Some(node) = self.nodes.get_mut(old) {
                    node.parent = None;
                }
            }
        }

        for &child in &unique {
            let old_parent = self.nodes.get(child).and_then(|node| node.parent);
            if let Some(old_parent) = old_parent.filter(|&p| p != parent) {
                if let Some(NodeContent::Container(siblings)) =
                    self.nodes.get_mut(old_parent).map(|node| &mut node.content)
                {
                    siblings.retain(|&c| c != child);
                }
            }
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(parent);
            }
        }

        if let Some(NodeContent::Container(list)) =
            self.nodes.get_mut(parent).map(|node| &mut node.content)
        {
            *list = unique;
        }
        Ok(())
    }

    /// Remove an element and its whole subtree, freeing their Taffy nodes.
    pub fn remove(&mut self, id: ElementId) -> Result<()> {
        let parent = self.node(id)?.parent;
        if let Some(NodeContent::Container(siblings)) =
            parent.and_then(|p| self.nodes.get_mut(p)).map(|node| &mut node.content)
        {
            siblings.retain(|&c| c != id);
        }

        let mut stack = vec![id];
        let mut removed = 0usize;
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.remove(current) else {
                continue;
            };
            stack.extend_from_slice(node.content.children());
            if let Some(layout_node) = node.layout_node {
                self.taffy.remove(layout_node)?;
            }
            removed += 1;
        }

        tracing::debug!(?id, removed, "removed element subtree");
        Ok(())
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.nodes.get(id)
    }

    pub fn properties(&self, id: ElementId) -> Option<&CoreProperties> {
        self.nodes.get(id).map(|node| &node.properties)
    }

    pub fn content(&self, id: ElementId) -> Option<&NodeContent> {
        self.nodes.get(id).map(|node| &node.content)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map(|node| node.content.children())
            .unwrap_or(&[])
    }

    /// The element's Taffy node, once built.
    pub fn layout_node(&self, id: ElementId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.layout_node)
    }

    // =========================================================================
    // UPDATES
    // =========================================================================

    /// Store new core properties. Returns whether they changed; a layout
    /// change is written through to the Taffy node.
    pub fn set_properties(&mut self, id: ElementId, properties: CoreProperties) -> Result<bool> {
        let node = self.node_mut(id)?;
        if node.properties == properties {
            return Ok(false);
        }

        let layout_changed = node.properties.layout != properties.layout;
        node.properties = properties;
        if layout_changed {
            self.update_layout_node(id)?;
        }
        Ok(true)
    }

    /// Store new text properties on a text leaf. Returns whether they
    /// changed; a change marks the leaf for re-measurement.
    pub fn set_text(&mut self, id: ElementId, text: TextProperties) -> Result<bool> {
        let node = self.node_mut(id)?;
        let NodeContent::Text(current) = &mut node.content else {
            return Err(LayoutError::KindMismatch {
                id,
                expected: "text",
            });
        };
        if *current == text {
            return Ok(false);
        }

        *current = text;
        self.update_layout_node(id)?;
        Ok(true)
    }

    /// Store new properties on a text field. Returns whether they changed.
    pub fn set_text_field(&mut self, id: ElementId, field: TextFieldProperties) -> Result<bool> {
        let node = self.node_mut(id)?;
        let NodeContent::TextField(current) = &mut node.content else {
            return Err(LayoutError::KindMismatch {
                id,
                expected: "text field",
            });
        };
        if *current == field {
            return Ok(false);
        }

        *current = field;
        Ok(true)
    }

    /// Whether the element needs a layout pass. Unbuilt elements always do.
    pub fn is_dirty(&self, id: ElementId) -> Result<bool> {
        match self.node(id)?.layout_node {
            Some(layout_node) => Ok(self.taffy.dirty(layout_node)?),
            None => Ok(true),
        }
    }

    // =========================================================================
    // LAYOUT NODES
    // =========================================================================

    /// Build (or rebuild) the element's Taffy subtree and return its node.
    ///
    /// The Taffy node is created on first build and reused after. A
    /// container's Taffy children are replaced with its current child list.
    pub fn build_layout_node(&mut self, id: ElementId) -> Result<NodeId> {
        let existing = self.node(id)?.layout_node;
        let layout_node = match existing {
            Some(layout_node) => layout_node,
            None => {
                let layout_node = self.taffy.new_leaf(Style::default())?;
                self.node_mut(id)?.layout_node = Some(layout_node);
                tracing::debug!(?id, ?layout_node, "created layout node");
                layout_node
            }
        };

        let children = match &self.node(id)?.content {
            NodeContent::Container(children) => Some(children.clone()),
            _ => None,
        };
        if let Some(children) = children {
            let mut child_nodes = Vec::with_capacity(children.len());
            for child in children {
                let child_node = self.build_layout_node(child)?;
                // A child moved from a container that hasn't been rebuilt yet
                if let Some(old_parent) = self.taffy.parent(child_node) {
                    if old_parent != layout_node {
                        self.taffy.remove_child(old_parent, child_node)?;
                    }
                }
                child_nodes.push(child_node);
            }
            self.taffy.set_children(layout_node, &child_nodes)?;
        }

        self.update_layout_node(id)?;
        Ok(layout_node)
    }

    /// Write the element's current properties into its Taffy node.
    ///
    /// Idempotent. Does nothing for an element that was never built.
    pub fn update_layout_node(&mut self, id: ElementId) -> Result<()> {
        let node = self
            .nodes
            .get(id)
            .ok_or(LayoutError::UnknownElement(id))?;
        let Some(layout_node) = node.layout_node else {
            tracing::trace!(?id, "element not built, skipping update");
            return Ok(());
        };

        let resolved = node.properties.layout.resolve();
        let current = self.taffy.style(layout_node)?;
        let mut style = current.clone();
        apply_item_style(&mut style, &resolved);
        if matches!(node.content, NodeContent::Container(_)) {
            apply_container_style(&mut style, &resolved);
        }
        let is_text = matches!(node.content, NodeContent::Text(_));
        let needs_context = is_text && !node.flags.contains(NodeFlags::MEASURED);

        // set_style invalidates cached layout, so skip it when nothing changed
        if *current != style {
            self.taffy.set_style(layout_node, style)?;
        }

        if is_text {
            if needs_context {
                self.taffy.set_node_context(layout_node, Some(id))?;
                self.node_mut(id)?.flags.insert(NodeFlags::MEASURED);
                tracing::trace!(?id, "registered text measurement");
            }
            self.taffy.mark_dirty(layout_node)?;
        }
        Ok(())
    }

    // =========================================================================
    // MEASUREMENT AND LAYOUT
    // =========================================================================

    /// Measure a text leaf with its current text properties.
    ///
    /// Stale handles and elements that are not text measure as zero.
    pub fn measure_text(
        &self,
        id: ElementId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size {
        measure_element(
            &self.nodes,
            self.sizer.as_ref(),
            id,
            width,
            width_mode,
            height,
            height_mode,
        )
    }

    /// Build `root`'s subtree, solve it within `available`, and return the
    /// frame of every element reached. NaN available axes are solved as
    /// max-content.
    pub fn compute_layout(&mut self, root: ElementId, available: Size) -> Result<FrameLayout> {
        let root_node = self.build_layout_node(root)?;
        let available_space = taffy::Size {
            width: to_available_space(available.width),
            height: to_available_space(available.height),
        };

        let nodes = &self.nodes;
        let sizer = self.sizer.as_ref();
        self.taffy.compute_layout_with_measure(
            root_node,
            available_space,
            |known_dimensions, available_space, _node_id, context, _style| {
                let Some(&mut id) = context else {
                    return taffy::Size::ZERO;
                };
                let (width, width_mode) =
                    constraint_from_taffy(known_dimensions.width, available_space.width);
                let (height, height_mode) =
                    constraint_from_taffy(known_dimensions.height, available_space.height);

                let measured =
                    measure_element(nodes, sizer, id, width, width_mode, height, height_mode);
                resolve_measured(known_dimensions, measured)
            },
        )?;

        let mut layout = FrameLayout::new(root);
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let Some(layout_node) = node.layout_node else {
                continue;
            };

            let solved = self.taffy.layout(layout_node)?;
            layout.insert(
                id,
                Frame::new(
                    solved.location.x,
                    solved.location.y,
                    solved.size.width,
                    solved.size.height,
                ),
            );
            stack.extend_from_slice(node.content.children());
        }

        tracing::debug!(?root, frames = layout.len(), "computed layout");
        Ok(layout)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn node(&self, id: ElementId) -> Result<&ElementNode> {
        self.nodes.get(id).ok_or(LayoutError::UnknownElement(id))
    }

    fn node_mut(&mut self, id: ElementId) -> Result<&mut ElementNode> {
        self.nodes.get_mut(id).ok_or(LayoutError::UnknownElement(id))
    }

    fn children_of(&self, parent: ElementId) -> Result<&[ElementId]> {
        match &self.node(parent)?.content {
            NodeContent::Container(children) => Ok(children),
            _ => Err(LayoutError::KindMismatch {
                id: parent,
                expected: "container",
            }),
        }
    }

    /// Whether `candidate` is `id` or one of its ancestors.
    fn is_ancestor_or_self(&self, candidate: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == candidate {
                return true;
            }
            current = self.nodes.get(cur).and_then(|node| node.parent);
        }
        false
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Measurement shared by [`ElementTree::measure_text`] and the solver's
/// callback, which can only borrow the arena and the sizer.
fn measure_element(
    nodes: &SlotMap<ElementId, ElementNode>,
    sizer: &dyn TextSizer,
    id: ElementId,
    width: f32,
    width_mode: MeasureMode,
    height: f32,
    height_mode: MeasureMode,
) -> Size {
    match nodes.get(id).map(|node| &node.content) {
        Some(NodeContent::Text(text)) => {
            measure_text_content(sizer, text, width, width_mode, height, height_mode)
        }
        _ => Size::ZERO,
    }
}
