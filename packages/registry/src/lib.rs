//! # Pagecraft Block Registry
//!
//! Static mapping from a block-type tag to its renderer, default
//! properties, and editable-property schema. Pure lookup table; no state.
//!
//! The registry is consulted read-only by the UI (to offer the block
//! palette and pick property-editing widgets) and by template seeding. The
//! document model deliberately does not validate against it: a document
//! authored against a newer or older block library still loads, and an
//! unknown tag degrades to a visible placeholder at render time rather
//! than an error.

mod registry;
mod render;
mod schema;

pub use registry::{BlockDescriptor, BlockRegistry};
pub use render::{render_block, render_document, Renderer};
pub use schema::{PropertyField, PropertyKind, PropertySchema};
