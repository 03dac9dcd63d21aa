//! # Document Mutations
//!
//! High-level semantic operations on page documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents a semantic operation
//! 2. **Tolerant**: a mutation whose target block no longer exists is a
//!    no-op, not an error - the UI may fire callbacks that race a removal
//! 3. **Invariant-restoring**: every mutation leaves `order` contiguous,
//!    `0..N-1`, matching array position
//!
//! The enum form exists so mutations can be recorded, replayed, or shipped
//! over a wire; interactive callers usually go through the equivalent
//! `Document` methods directly.

use crate::block::{BlockId, Props};
use crate::theme::ThemePatch;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations over a [`crate::Document`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new block with a fresh id at the end of the page.
    AddBlock { block_type: String, props: Props },

    /// Shallow-merge props into an existing block. Missing id: no-op.
    UpdateBlock { id: BlockId, props: Props },

    /// Remove a block and renumber survivors. Missing id: no-op.
    RemoveBlock { id: BlockId },

    /// Rewrite order to match the given full id sequence.
    ReorderBlocks { sequence: Vec<BlockId> },

    /// Merge a partial theme update.
    UpdateTheme { patch: ThemePatch },

    /// Change the page's label.
    Rename { name: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A reorder sequence was not a permutation of the current block ids.
    #[error("reorder sequence is not a permutation of the current blocks")]
    InvalidReorder,
}

impl Mutation {
    /// Apply this mutation to a document. Only `ReorderBlocks` can fail;
    /// everything else tolerates missing targets.
    pub fn apply(&self, doc: &mut crate::Document) -> Result<(), DocumentError> {
        match self {
            Mutation::AddBlock { block_type, props } => {
                doc.add_block(block_type.clone(), props.clone());
                Ok(())
            }
            Mutation::UpdateBlock { id, props } => {
                doc.update_block(*id, props.clone());
                Ok(())
            }
            Mutation::RemoveBlock { id } => {
                doc.remove_block(*id);
                Ok(())
            }
            Mutation::ReorderBlocks { sequence } => doc.reorder_blocks(sequence),
            Mutation::UpdateTheme { patch } => {
                doc.update_theme(patch);
                Ok(())
            }
            Mutation::Rename { name } => {
                doc.rename(name.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use serde_json::json;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::Rename {
            name: "Spring Campaign".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_apply_tolerates_missing_targets() {
        let mut doc = Document::new();
        doc.add_block("hero", Props::new());

        let missing = BlockId::new();
        let mut props = Props::new();
        props.insert("title".to_string(), json!("x"));

        Mutation::UpdateBlock { id: missing, props }
            .apply(&mut doc)
            .unwrap();
        Mutation::RemoveBlock { id: missing }.apply(&mut doc).unwrap();

        assert_eq!(doc.components.len(), 1);
    }

    #[test]
    fn test_apply_reorder_surfaces_invalid_sequence() {
        let mut doc = Document::new();
        doc.add_block("hero", Props::new());

        let result = Mutation::ReorderBlocks {
            sequence: vec![BlockId::new()],
        }
        .apply(&mut doc);

        assert_eq!(result, Err(DocumentError::InvalidReorder));
    }
}
