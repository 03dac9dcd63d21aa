//! # Pagecraft Editor Shell
//!
//! The boundary between the UI and the editing core. The shell owns the
//! session context and refuses document mutation until a user is signed in
//! and an organization is selected - a precondition enforced here, at the
//! UI boundary, deliberately not inside the document model or the store.
//!
//! Error surfacing differs by path on purpose: auto-save failures are
//! swallowed inside the store (the user keeps editing), while explicit
//! user-initiated loads and deletes surface typed errors here so the UI
//! can show a message or fall back to the page picker.

use pagecraft_auth::SessionContext;
use pagecraft_catalog::TemplateCatalog;
use pagecraft_document::{BlockId, Document, DocumentError, Props, ThemePatch};
use pagecraft_gateway::{PageSummary, PersistenceError};
use pagecraft_store::{EditorSnapshot, EditorStore};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("not signed in")]
    NotSignedIn,

    #[error("no organization selected")]
    NoOrganization,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Auth-gated facade over the editor store and template catalog.
pub struct EditorShell {
    session: SessionContext,
    store: EditorStore,
    catalog: TemplateCatalog,
}

impl EditorShell {
    pub fn new(session: SessionContext, store: EditorStore, catalog: TemplateCatalog) -> Self {
        Self {
            session,
            store,
            catalog,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Read-only view for rendering; not gated.
    pub fn snapshot(&self) -> EditorSnapshot {
        self.store.snapshot()
    }

    fn ensure_ready(&self) -> Result<(), ShellError> {
        if self.session.current_user().is_none() {
            tracing::debug!("rejected edit: no signed-in user");
            return Err(ShellError::NotSignedIn);
        }
        if self.session.current_organization_id().is_none() {
            tracing::debug!("rejected edit: no organization selected");
            return Err(ShellError::NoOrganization);
        }
        Ok(())
    }

    // ---- page lifecycle ----

    /// Start a brand-new empty page.
    pub fn new_page(&self) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.open_document(Document::new());
        Ok(())
    }

    /// Start a page seeded from a catalog template.
    pub fn new_page_from_template(
        &self,
        template_id: &str,
        name: Option<&str>,
    ) -> Result<(), ShellError> {
        self.ensure_ready()?;
        let template = self
            .catalog
            .get(template_id)
            .ok_or_else(|| ShellError::TemplateNotFound(template_id.to_string()))?;
        self.store.open_document(template.instantiate(name));
        Ok(())
    }

    /// Open an existing page. A missing id surfaces as a typed error so
    /// the UI can fall back to the page picker instead of crashing.
    pub async fn open_page(&self, id: &str) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.load_page(id).await?;
        Ok(())
    }

    pub async fn delete_page(&self, id: &str) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.delete_page(id).await?;
        Ok(())
    }

    pub async fn pages(&self) -> Result<Vec<PageSummary>, ShellError> {
        self.ensure_ready()?;
        Ok(self.store.list_pages().await?)
    }

    // ---- gated mutators ----

    pub fn add_block(&self, block_type: &str, props: Props) -> Result<BlockId, ShellError> {
        self.ensure_ready()?;
        Ok(self.store.add_block(block_type, props))
    }

    pub fn update_block(&self, id: BlockId, props: Props) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.update_block(id, props);
        Ok(())
    }

    pub fn remove_block(&self, id: BlockId) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.remove_block(id);
        Ok(())
    }

    pub fn reorder_blocks(&self, sequence: &[BlockId]) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.reorder_blocks(sequence)?;
        Ok(())
    }

    pub fn update_theme(&self, patch: &ThemePatch) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.update_theme(patch);
        Ok(())
    }

    pub fn rename(&self, name: &str) -> Result<(), ShellError> {
        self.ensure_ready()?;
        self.store.rename(name);
        Ok(())
    }

    // ---- view state (not document mutation, not gated) ----

    pub fn select_block(&self, id: Option<BlockId>) {
        self.store.select_block(id);
    }

    pub fn set_edit_mode(&self, edit_mode: bool) {
        self.store.set_edit_mode(edit_mode);
    }
}
