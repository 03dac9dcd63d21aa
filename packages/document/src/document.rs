//! The page document: ordered blocks + theme + metadata.
//!
//! ## Lifecycle
//!
//! ```text
//! New/Template → Edit → Save (debounced) → Reload by id → Delete
//!      ↓           ↓          ↓                 ↓
//!   id: None   mutations  id assigned    wholesale replace
//! ```
//!
//! The document owns no persistence concerns; the store reconciles it to
//! the gateway. `id` is absent until the first successful save and stable
//! afterwards.

use crate::block::{BlockId, BlockInstance, Props};
use crate::theme::{ThemeConfig, ThemePatch};
use serde::{Deserialize, Serialize};

/// Name given to brand-new pages until the user renames them.
pub const DEFAULT_PAGE_NAME: &str = "Untitled Page";

/// The full editable unit: one user-facing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Remote identity. `None` until the first successful save.
    pub id: Option<String>,

    /// User-editable label.
    pub name: String,

    /// Ordered block list. Invariant: `components[i].order == i`.
    pub components: Vec<BlockInstance>,

    pub theme: ThemeConfig,

    /// Increments on each mutation. Local only, never persisted.
    #[serde(skip)]
    pub version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// The canonical empty document: no id, default name, no blocks,
    /// default theme.
    pub fn new() -> Self {
        Self {
            id: None,
            name: DEFAULT_PAGE_NAME.to_string(),
            components: Vec::new(),
            theme: ThemeConfig::default(),
            version: 0,
        }
    }

    /// Build a document from already-prepared parts (template
    /// instantiation, gateway loads). `id` stays unset.
    pub fn from_parts(
        name: impl Into<String>,
        components: Vec<BlockInstance>,
        theme: ThemeConfig,
    ) -> Self {
        let mut doc = Self {
            id: None,
            name: name.into(),
            components,
            theme,
            version: 0,
        };
        doc.renumber();
        doc
    }

    pub fn find_block(&self, id: BlockId) -> Option<&BlockInstance> {
        self.components.iter().find(|b| b.id == id)
    }

    pub fn find_block_mut(&mut self, id: BlockId) -> Option<&mut BlockInstance> {
        self.components.iter_mut().find(|b| b.id == id)
    }

    /// Append a new block with a fresh id at the end of the page.
    /// The type tag is not validated against the registry.
    pub fn add_block(&mut self, block_type: impl Into<String>, props: Props) -> BlockId {
        let order = self.components.len() as u32;
        let block = BlockInstance::new(block_type, props, order);
        let id = block.id;
        self.components.push(block);
        self.version += 1;
        id
    }

    /// Shallow-merge `props` into the target block. A missing id is a
    /// no-op: UI callbacks may race against a concurrent removal.
    pub fn update_block(&mut self, id: BlockId, props: Props) {
        if let Some(block) = self.find_block_mut(id) {
            block.merge_props(props);
            self.version += 1;
        }
    }

    /// Remove the matching block and renumber survivors. Returns whether a
    /// block was removed, so callers can fix selection. Missing id is a
    /// no-op.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let len_before = self.components.len();
        self.components.retain(|b| b.id != id);

        if self.components.len() == len_before {
            return false;
        }

        self.renumber();
        self.version += 1;
        true
    }

    /// Rewrite block order to match `sequence`. The sequence must be a
    /// permutation of the current block ids - reorder is the identity on
    /// the block set, only `order` changes.
    pub fn reorder_blocks(&mut self, sequence: &[BlockId]) -> Result<(), crate::DocumentError> {
        if sequence.len() != self.components.len() {
            return Err(crate::DocumentError::InvalidReorder);
        }

        let mut reordered = Vec::with_capacity(sequence.len());
        let mut remaining: Vec<BlockInstance> = std::mem::take(&mut self.components);

        for id in sequence {
            match remaining.iter().position(|b| b.id == *id) {
                Some(pos) => reordered.push(remaining.swap_remove(pos)),
                None => {
                    // Not a permutation; restore the original list.
                    remaining.extend(reordered);
                    remaining.sort_by_key(|b| b.order);
                    self.components = remaining;
                    return Err(crate::DocumentError::InvalidReorder);
                }
            }
        }

        self.components = reordered;
        self.renumber();
        self.version += 1;
        Ok(())
    }

    /// Merge a partial theme update. Never drops a slot the patch didn't
    /// mention.
    pub fn update_theme(&mut self, patch: &ThemePatch) {
        self.theme.apply_patch(patch);
        self.version += 1;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.version += 1;
    }

    /// True when every block's `order` equals its array index.
    pub fn order_invariant_holds(&self) -> bool {
        self.components
            .iter()
            .enumerate()
            .all(|(i, b)| b.order == i as u32)
    }

    fn renumber(&mut self) {
        for (i, block) in self.components.iter_mut().enumerate() {
            block.order = i as u32;
        }
    }
}
