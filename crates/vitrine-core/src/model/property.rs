use serde::{Deserialize, Serialize};

/// A content item in the rotation: an ordered list of image URLs plus
/// whatever else the directory service attached to it.
///
/// The record is deliberately opaque beyond `images`. Extra fields are
/// carried through serialization untouched so the display layer can read
/// them without this crate knowing their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,

    /// Pass-through fields (name, price, address, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Property {
    /// Convenience accessor for the display name, if the service sent one.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(|v| v.as_str())
    }
}
