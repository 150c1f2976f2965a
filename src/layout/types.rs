//! Layout output types.

use slotmap::SecondaryMap;

use crate::engine::ElementId;

/// Solved geometry of one element, relative to its parent's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Frames for every element reached by a layout pass.
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    frames: SecondaryMap<ElementId, Frame>,
    root: Option<ElementId>,
}

impl FrameLayout {
    pub(crate) fn new(root: ElementId) -> Self {
        Self {
            frames: SecondaryMap::new(),
            root: Some(root),
        }
    }

    pub(crate) fn insert(&mut self, id: ElementId, frame: Frame) {
        self.frames.insert(id, frame);
    }

    /// Frame of an element, if it was part of the pass.
    pub fn get(&self, id: ElementId) -> Option<Frame> {
        self.frames.get(id).copied()
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Size of the root element's frame.
    pub fn content_size(&self) -> (f32, f32) {
        self.root
            .and_then(|root| self.get(root))
            .map(|frame| (frame.width, frame.height))
            .unwrap_or((0.0, 0.0))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Frame)> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_frame_extents() {
        let frame = Frame::new(10.0, 5.0, 30.0, 20.0);
        assert_eq!(frame.max_x(), 40.0);
        assert_eq!(frame.max_y(), 25.0);
    }

    #[test]
    fn test_frame_layout_lookup() {
        let mut keys: SlotMap<ElementId, ()> = SlotMap::with_key();
        let root = keys.insert(());
        let child = keys.insert(());
        let missing = keys.insert(());

        let mut layout = FrameLayout::new(root);
        layout.insert(root, Frame::new(0.0, 0.0, 100.0, 50.0));
        layout.insert(child, Frame::new(0.0, 10.0, 100.0, 20.0));

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.content_size(), (100.0, 50.0));
        assert_eq!(layout.get(child), Some(Frame::new(0.0, 10.0, 100.0, 20.0)));
        assert_eq!(layout.get(missing), None);
    }

    #[test]
    fn test_empty_layout() {
        let layout = FrameLayout::default();
        assert!(layout.is_empty());
        assert_eq!(layout.content_size(), (0.0, 0.0));
    }
}
