use serde::{Deserialize, Serialize};

use super::kind::ContentKind;

/// One record of the remote content listing.
///
/// The item does not carry its bytes, those are fetched and pushed
/// separately. Identity is the `id`; a `/` in the id places the item in a
/// nested namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    /// Free-form MIME-like type as reported by the remote store
    #[serde(rename = "type")]
    pub content_type: String,
    /// Byte count as reported by the remote listing
    pub length: i64,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, content_type: impl Into<String>, length: i64) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            length,
        }
    }

    pub fn kind(&self) -> ContentKind {
        ContentKind::classify(&self.content_type)
    }

    /// Whether any bytes move for this item.
    ///
    /// The remote store rejects empty bodies, so items reported with no
    /// length are neither fetched nor pushed.
    pub fn is_transferable(&self) -> bool {
        self.length > 0
    }
}
