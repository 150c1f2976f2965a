//! Core properties shared by every element.

use super::{Diagnostics, GestureProperties, LayoutProperties, PropertyMap, RawProperties};

/// Properties every element carries, decoded from the same flat map as the
/// element's type-specific properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProperties {
    pub layout: LayoutProperties,
    pub gestures: GestureProperties,
}

impl RawProperties for CoreProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            layout: LayoutProperties::decode(raw, d),
            gestures: GestureProperties::decode(raw, d),
        }
    }

    fn merge(&mut self, other: &Self) {
        self.layout.merge(&other.layout);
        self.gestures.merge(&other.gestures);
    }
}

impl From<LayoutProperties> for CoreProperties {
    fn from(layout: LayoutProperties) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }
}
