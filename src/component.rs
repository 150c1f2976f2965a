//! Components - anything that can build and update a layout node.

use taffy::NodeId;

use crate::engine::{ElementId, ElementTree};
use crate::error::Result;

/// A source of layout nodes in an [`ElementTree`].
pub trait LayoutNodeSource {
    /// Build (or rebuild) the layout subtree and return its node.
    fn build_layout_node(&self, tree: &mut ElementTree) -> Result<NodeId>;

    /// Write current properties into the already-built layout node.
    fn update_layout_node(&self, tree: &mut ElementTree) -> Result<()>;
}

impl LayoutNodeSource for ElementId {
    fn build_layout_node(&self, tree: &mut ElementTree) -> Result<NodeId> {
        tree.build_layout_node(*self)
    }

    fn update_layout_node(&self, tree: &mut ElementTree) -> Result<()> {
        tree.update_layout_node(*self)
    }
}

/// A named component and the element it rendered.
///
/// Layout is forwarded to the rendered instance; the component itself has
/// no node.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    instance: ElementId,
}

impl Component {
    pub fn new(name: impl Into<String>, instance: ElementId) -> Self {
        Self {
            name: name.into(),
            instance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self) -> ElementId {
        self.instance
    }

    /// Point the component at a newly rendered element.
    pub fn set_instance(&mut self, instance: ElementId) {
        tracing::trace!(component = %self.name, ?instance, "component re-rendered");
        self.instance = instance;
    }
}

impl LayoutNodeSource for Component {
    fn build_layout_node(&self, tree: &mut ElementTree) -> Result<NodeId> {
        self.instance.build_layout_node(tree)
    }

    fn update_layout_node(&self, tree: &mut ElementTree) -> Result<()> {
        self.instance.update_layout_node(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NodeContent;
    use crate::error::LayoutError;
    use crate::properties::{CoreProperties, LayoutProperties};

    #[test]
    fn test_component_forwards_to_instance() {
        let mut tree = ElementTree::default();
        let instance = tree
            .insert(CoreProperties::default(), NodeContent::container())
            .unwrap();
        let component = Component::new("Card", instance);

        let node = component.build_layout_node(&mut tree).unwrap();
        assert_eq!(tree.layout_node(instance), Some(node));
        assert_eq!(component.name(), "Card");
    }

    #[test]
    fn test_component_update_reaches_instance_style() {
        let mut tree = ElementTree::default();
        let instance = tree.insert(CoreProperties::default(), NodeContent::Other).unwrap();
        let component = Component::new("Badge", instance);
        let node = component.build_layout_node(&mut tree).unwrap();

        let props: CoreProperties = LayoutProperties {
            width: Some(64.0),
            ..Default::default()
        }
        .into();
        tree.set_properties(instance, props).unwrap();
        component.update_layout_node(&mut tree).unwrap();

        assert_eq!(
            tree.taffy().style(node).unwrap().size.width,
            taffy::Dimension::Length(64.0)
        );
    }

    #[test]
    fn test_rerendered_component_builds_new_instance() {
        let mut tree = ElementTree::default();
        let first = tree.insert(CoreProperties::default(), NodeContent::Other).unwrap();
        let second = tree.insert(CoreProperties::default(), NodeContent::Other).unwrap();
        let mut component = Component::new("Toggle", first);

        component.set_instance(second);
        component.build_layout_node(&mut tree).unwrap();

        assert_eq!(component.instance(), second);
        assert!(tree.layout_node(second).is_some());
        assert!(tree.layout_node(first).is_none());
    }

    #[test]
    fn test_stale_instance_is_an_error() {
        let mut tree = ElementTree::default();
        let instance = tree.insert(CoreProperties::default(), NodeContent::Other).unwrap();
        tree.remove(instance).unwrap();

        let component = Component::new("Gone", instance);
        assert!(matches!(
            component.build_layout_node(&mut tree),
            Err(LayoutError::UnknownElement(_))
        ));
    }
}
