//! # Pagecraft Persistence Gateway
//!
//! CRUD boundary for page documents. The hosted data store is an external
//! collaborator; this crate defines the contract ([`PersistenceGateway`]),
//! the error taxonomy ([`PersistenceError`]), and an in-memory reference
//! implementation used for local mode and tests.
//!
//! The gateway never mutates the document it is given - it only reads it
//! to build a request and returns server-assigned identity and timestamps.

mod error;
mod memory;
mod records;

pub use error::PersistenceError;
pub use memory::InMemoryGateway;
pub use records::{PageRecord, PageSummary};

use async_trait::async_trait;
use pagecraft_document::Document;

/// Remote CRUD contract for page documents.
///
/// Saves overwrite the whole document rather than merging field-by-field,
/// so two sessions editing the same id exhibit last-write-wins with no
/// conflict detection. Accepted limitation of the product.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persist a brand-new page; the store assigns id and timestamps.
    async fn create(&self, doc: &Document) -> Result<PageRecord, PersistenceError>;

    /// Overwrite an existing page. An absent id is a structured
    /// [`PersistenceError::NotFound`], never a silent no-op.
    async fn update(&self, id: &str, doc: &Document) -> Result<PageRecord, PersistenceError>;

    /// Fetch the full page.
    async fn get(&self, id: &str) -> Result<PageRecord, PersistenceError>;

    /// Summary projection of all pages - no components or theme.
    async fn list(&self) -> Result<Vec<PageSummary>, PersistenceError>;

    /// Delete a page. Idempotent: deleting an already-absent id succeeds.
    async fn delete(&self, id: &str) -> Result<(), PersistenceError>;
}
