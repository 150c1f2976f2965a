//! Gesture properties - named actions fired by touch recognizers.

use super::{Diagnostics, PropertyMap, RawProperties, cast, merge_field};

/// Action names dispatched to the element's event target.
///
/// Dispatch itself happens in the view layer; the layout engine only carries
/// these through decode and merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureProperties {
    pub on_tap: Option<String>,
    pub on_press: Option<String>,
    pub on_double_tap: Option<String>,
}

impl GestureProperties {
    /// Whether any gesture is bound.
    pub fn is_interactive(&self) -> bool {
        self.on_tap.is_some() || self.on_press.is_some() || self.on_double_tap.is_some()
    }
}

impl RawProperties for GestureProperties {
    fn decode(raw: &PropertyMap, d: &mut Diagnostics) -> Self {
        Self {
            on_tap: cast(raw, "onTap", d),
            on_press: cast(raw, "onPress", d),
            on_double_tap: cast(raw, "onDoubleTap", d),
        }
    }

    fn merge(&mut self, other: &Self) {
        merge_field(&mut self.on_tap, &other.on_tap);
        merge_field(&mut self.on_press, &other.on_press);
        merge_field(&mut self.on_double_tap, &other.on_double_tap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn raw(value: Value) -> PropertyMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_decode_and_merge() {
        let mut base = GestureProperties::from_raw(&raw(json!({
            "onTap": "select",
            "onPress": 3,
        })));
        assert_eq!(base.on_tap.as_deref(), Some("select"));
        assert_eq!(base.on_press, None);
        assert!(base.is_interactive());

        base.merge(&GestureProperties {
            on_double_tap: Some("zoom".to_string()),
            ..Default::default()
        });
        assert_eq!(base.on_tap.as_deref(), Some("select"));
        assert_eq!(base.on_double_tap.as_deref(), Some("zoom"));
    }

    #[test]
    fn test_equality_covers_every_action() {
        let a = GestureProperties {
            on_tap: Some("open".to_string()),
            ..Default::default()
        };
        let b = GestureProperties {
            on_tap: Some("open".to_string()),
            on_press: Some("menu".to_string()),
            ..Default::default()
        };
        assert_ne!(a, b);
        assert!(!GestureProperties::default().is_interactive());
    }
}
