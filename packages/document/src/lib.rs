//! # Pagecraft Document Model
//!
//! Core data model for Pagecraft pages.
//!
//! A Document is the full editable unit: an ordered list of content blocks
//! plus a theme plus metadata, corresponding to one user-facing page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry/catalog: block types + templates   │
//! └─────────────────────────────────────────────┘
//!                     ↓ (read-only)
//! ┌─────────────────────────────────────────────┐
//! │ document: blocks + theme + mutations        │
//! │  - Order invariant: order == array index    │
//! │  - Missing ids during mutation are no-ops   │
//! │  - Props are opaque structured data         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: debounced persistence reconciliation │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Order invariant**: after every mutation, `components[i].order == i`
//! 2. **Tolerant mutation**: a mutation targeting a removed block is a no-op,
//!    not an error - UI callbacks may race against removal
//! 3. **Opaque props**: the model shallow-merges block props without
//!    interpreting them; schemas live in the registry, decoding in the UI
//! 4. **Decoupled from the registry**: block type tags are not validated
//!    here, so documents authored against a newer or older block library
//!    still load

mod block;
mod document;
mod mutations;
mod theme;

pub use block::{BlockId, BlockInstance, Props};
pub use document::{Document, DEFAULT_PAGE_NAME};
pub use mutations::{DocumentError, Mutation};
pub use theme::{ColorPatch, FontPatch, ThemeColors, ThemeConfig, ThemeFonts, ThemeMode, ThemePatch};
