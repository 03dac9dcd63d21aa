//! Editable-property schemas.
//!
//! A schema declares, per editable property, which input widget the
//! property panel should offer. It is consumed by the UI only - the
//! document model and the editor store never interpret it.

use serde::{Deserialize, Serialize};

/// Widget kind for one editable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    /// Single-line text input.
    Text,

    /// Multi-line text area.
    LongText,

    /// Numeric input clamped to bounds.
    Number { min: f64, max: f64 },

    /// Color picker.
    Color,

    /// Single choice from a fixed option list.
    Select { options: Vec<String> },

    /// Image reference (URL or upload handle).
    Image,

    /// Ordered list of structured items (e.g. gallery entries).
    StructuredList,
}

/// One editable property of a block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyField {
    /// Key into the block's props map.
    pub key: String,

    /// Human-readable label for the property panel.
    pub label: String,

    pub kind: PropertyKind,
}

impl PropertyField {
    pub fn new(key: &str, label: &str, kind: PropertyKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

/// Full editable-property schema for one block type.
pub type PropertySchema = Vec<PropertyField>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_kind_serialization_is_tagged() {
        let kind = PropertyKind::Number {
            min: 0.0,
            max: 10.0,
        };
        let json = serde_json::to_value(&kind).unwrap();

        assert_eq!(json["kind"], "number");
        assert_eq!(json["min"], 0.0);
    }

    #[test]
    fn test_select_round_trip() {
        let kind = PropertyKind::Select {
            options: vec!["left".to_string(), "center".to_string()],
        };

        let json = serde_json::to_string(&kind).unwrap();
        let back: PropertyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
