//! Block instances: one placed, configured unit of page content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Opaque block property bag. Shape is defined by the registry entry for the
/// block's type; the document model never interprets it.
pub type Props = Map<String, Value>;

/// Opaque, unique block identifier. Stable for the instance's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One placed block on a page: a type tag selecting a renderer/schema from
/// the registry, plus its configured properties and display position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    pub id: BlockId,

    /// Registry tag (e.g. "hero", "text"). Not validated against the
    /// registry - an unknown tag is a rendering concern, not a document
    /// error.
    #[serde(rename = "type")]
    pub block_type: String,

    /// Open key/value properties, shallow-merged on update.
    pub props: Props,

    /// Display position. Invariant: equals the block's index in the
    /// document's component list.
    pub order: u32,
}

impl BlockInstance {
    pub fn new(block_type: impl Into<String>, props: Props, order: u32) -> Self {
        Self {
            id: BlockId::new(),
            block_type: block_type.into(),
            props,
            order,
        }
    }

    /// Shallow-merge `patch` into this block's props. Existing keys not
    /// mentioned by the patch are left untouched.
    pub fn merge_props(&mut self, patch: Props) {
        for (key, value) in patch {
            self.props.insert(key, value);
        }
    }
}
