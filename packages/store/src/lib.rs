//! # Pagecraft Editor Store
//!
//! Single source of truth for the page being edited: the current document,
//! selection state, the edit-mode flag, and the auto-save reconciliation
//! loop against the persistence gateway.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: palette, canvas, property panel         │
//! └─────────────────────────────────────────────┘
//!                     ↓ mutators
//! ┌─────────────────────────────────────────────┐
//! │ store: document + selection + debounce      │
//! │  - every mutation re-arms a 2 s quiet timer │
//! │  - at most one save in flight, one queued   │
//! │  - failures log and wait for the next edit  │
//! └─────────────────────────────────────────────┘
//!                     ↓ create/update/get/delete
//! ┌─────────────────────────────────────────────┐
//! │ gateway: hosted document store              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Local state is the source of truth**: a failed save never rolls
//!    back in-memory edits and never interrupts the user
//! 2. **Debounce, don't stream**: rapid edits coalesce into one save after
//!    a quiet period; saving is informational (`saving` flag), never a
//!    gate on further editing
//! 3. **Wholesale replacement on load**: loading or resetting discards all
//!    prior state, cancels any pending timer, and invalidates the results
//!    of saves still in flight for the previous document
//! 4. **Explicit dependency injection**: the store is constructed with its
//!    gateway and config - no globals, trivially mockable

mod config;
mod store;

pub use config::{AutoSaveFailurePolicy, StoreConfig, DEFAULT_DEBOUNCE};
pub use store::{EditorSnapshot, EditorStore};
