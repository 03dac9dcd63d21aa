//! The editor store: stateful orchestrator over the current document.
//!
//! ## State machine
//!
//! ```text
//! no document ──new/open/load──▶ loaded-clean
//!       ▲                            │ mutation (re-arms 2 s timer)
//!       │ reset                      ▼
//!       └──────────────────── loaded-dirty ──timer──▶ saving ──ok──▶ clean
//!                                    ▲                  │
//!                                    └───── failed ◀────┘
//!                                      (log, keep edits, wait for next edit)
//! ```
//!
//! Saves are serialized: at most one gateway call in flight, at most one
//! queued fire representing the latest state. An in-flight save that
//! completes after the document has been replaced (load/reset) discards
//! its result instead of mutating the new document.

use crate::config::{AutoSaveFailurePolicy, StoreConfig};
use pagecraft_document::{BlockId, Document, DocumentError, Props, ThemePatch};
use pagecraft_gateway::{PageSummary, PersistenceError, PersistenceGateway};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

struct EditorState {
    document: Document,

    /// Must reference an existing block or be None; any operation that
    /// removes the selected block clears it.
    selected_block: Option<BlockId>,

    edit_mode: bool,

    /// Informational only - never gates further editing.
    saving: bool,

    /// Unsaved changes exist since the last save snapshot.
    dirty: bool,

    /// The debounce timer fired while a save was in flight.
    save_queued: bool,

    /// Bumped on every wholesale replace (load/open/reset). A save
    /// snapshotted under an older epoch discards its result.
    epoch: u64,

    debounce: Option<JoinHandle<()>>,
}

impl EditorState {
    fn new() -> Self {
        Self {
            document: Document::new(),
            selected_block: None,
            edit_mode: false,
            saving: false,
            dirty: false,
            save_queued: false,
            epoch: 0,
            debounce: None,
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }

    /// Wholesale replacement: new document, cleared selection, cancelled
    /// timer, invalidated in-flight saves.
    fn replace_document(&mut self, document: Document) {
        self.cancel_debounce();
        self.document = document;
        self.selected_block = None;
        self.dirty = false;
        self.save_queued = false;
        self.epoch += 1;
    }
}

/// Read-only view of the store for the UI.
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub document: Document,
    pub selected_block: Option<BlockId>,
    pub edit_mode: bool,
    pub saving: bool,
}

/// Single source of truth for the page being edited.
///
/// Cheap to clone; all clones share state. Constructed with its gateway
/// and config (dependency injection - no globals). Must live on a tokio
/// runtime: mutators spawn the debounce timer task.
///
/// Saves overwrite the whole document, so two sessions editing the same
/// page id are last-write-wins with no conflict detection. Accepted
/// limitation.
#[derive(Clone)]
pub struct EditorStore {
    inner: Arc<Mutex<EditorState>>,
    gateway: Arc<dyn PersistenceGateway>,
    config: StoreConfig,
    save_done: Arc<Notify>,
}

impl EditorStore {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EditorState::new())),
            gateway,
            config,
            save_done: Arc::new(Notify::new()),
        }
    }

    pub fn with_defaults(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self::new(gateway, StoreConfig::default())
    }

    fn lock(&self) -> MutexGuard<'_, EditorState> {
        // The lock is only held for short synchronous sections, never
        // across an await.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ---- mutators (each re-arms the auto-save debounce) ----

    /// Append a block and return its id.
    pub fn add_block(&self, block_type: impl Into<String>, props: Props) -> BlockId {
        let mut st = self.lock();
        let id = st.document.add_block(block_type, props);
        self.mark_dirty(&mut st);
        id
    }

    /// Shallow-merge props into a block. A stale id (block already
    /// removed) is a no-op and does not schedule a save.
    pub fn update_block(&self, id: BlockId, props: Props) {
        let mut st = self.lock();
        let version = st.document.version;
        st.document.update_block(id, props);
        if st.document.version != version {
            self.mark_dirty(&mut st);
        }
    }

    /// Remove a block; clears selection if the removed block was selected.
    pub fn remove_block(&self, id: BlockId) {
        let mut st = self.lock();
        if st.document.remove_block(id) {
            if st.selected_block == Some(id) {
                st.selected_block = None;
            }
            self.mark_dirty(&mut st);
        }
    }

    /// Rewrite block order to the given full id sequence.
    pub fn reorder_blocks(&self, sequence: &[BlockId]) -> Result<(), DocumentError> {
        let mut st = self.lock();
        st.document.reorder_blocks(sequence)?;
        self.mark_dirty(&mut st);
        Ok(())
    }

    pub fn update_theme(&self, patch: &ThemePatch) {
        let mut st = self.lock();
        st.document.update_theme(patch);
        self.mark_dirty(&mut st);
    }

    pub fn rename(&self, name: impl Into<String>) {
        let mut st = self.lock();
        st.document.rename(name);
        self.mark_dirty(&mut st);
    }

    // ---- view state (no save scheduled) ----

    pub fn select_block(&self, id: Option<BlockId>) {
        self.lock().selected_block = id;
    }

    pub fn set_edit_mode(&self, edit_mode: bool) {
        self.lock().edit_mode = edit_mode;
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        let st = self.lock();
        EditorSnapshot {
            document: st.document.clone(),
            selected_block: st.selected_block,
            edit_mode: st.edit_mode,
            saving: st.saving,
        }
    }

    pub fn document(&self) -> Document {
        self.lock().document.clone()
    }

    pub fn selected_block(&self) -> Option<BlockId> {
        self.lock().selected_block
    }

    pub fn is_saving(&self) -> bool {
        self.lock().saving
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    // ---- lifecycle ----

    /// Fetch a page and wholesale-replace the current state. Any pending
    /// save timer for the previous document is cancelled up front so it
    /// cannot fire against the wrong page mid-fetch.
    pub async fn load_page(&self, id: &str) -> Result<(), PersistenceError> {
        self.lock().cancel_debounce();

        let record = self.gateway.get(id).await?;
        self.lock().replace_document(record.into_document());
        Ok(())
    }

    /// Replace the current state with an in-memory document (new page,
    /// template instantiation). `id` stays as given - unset means the next
    /// save creates a new remote record.
    pub fn open_document(&self, document: Document) {
        self.lock().replace_document(document);
    }

    /// Back to the canonical empty document; clears edit mode too.
    pub fn reset(&self) {
        let mut st = self.lock();
        st.replace_document(Document::new());
        st.edit_mode = false;
    }

    /// Delete a page remotely. Deleting the currently loaded page resets
    /// the editor to the empty document rather than leaving a dangling id.
    pub async fn delete_page(&self, id: &str) -> Result<(), PersistenceError> {
        self.gateway.delete(id).await?;

        let is_current = self.lock().document.id.as_deref() == Some(id);
        if is_current {
            self.reset();
        }
        Ok(())
    }

    /// Summary listing pass-through.
    pub async fn list_pages(&self) -> Result<Vec<PageSummary>, PersistenceError> {
        self.gateway.list().await
    }

    /// Run any pending save immediately and wait for in-flight saves to
    /// finish. Shutdown/test helper; makes at most one save attempt.
    pub async fn flush(&self) {
        loop {
            // Register as a waiter before reading `saving`, otherwise a
            // save finishing between the check and the await would call
            // notify_waiters with nobody registered and the wait would
            // never resolve.
            let notified = self.save_done.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let mut st = self.lock();
                st.cancel_debounce();
                if !st.saving {
                    break;
                }
            }
            notified.await;
        }

        let should_save = {
            let mut st = self.lock();
            if st.dirty && !st.saving {
                st.saving = true;
                true
            } else {
                false
            }
        };
        if should_save {
            self.save_latest().await;
        }
    }

    // ---- auto-save internals ----

    fn mark_dirty(&self, st: &mut EditorState) {
        st.dirty = true;
        st.cancel_debounce();

        let store = self.clone();
        let debounce = self.config.debounce;
        // The save runs on a detached task so that aborting the timer
        // handle can only cancel a not-yet-fired timer, never an in-flight
        // gateway call. Stale in-flight results are handled by the epoch
        // check instead.
        st.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            tokio::spawn(async move {
                store.autosave_tick().await;
            });
        }));
    }

    /// Debounce timer elapsed with no further mutation.
    async fn autosave_tick(&self) {
        {
            let mut st = self.lock();
            if st.saving {
                // Single-slot queue: remember that newer state wants
                // saving; the in-flight save drains it on completion.
                st.save_queued = true;
                return;
            }
            if !st.dirty {
                return;
            }
            st.saving = true;
        }
        self.save_latest().await;
    }

    /// Persist the latest document state. Caller has set `saving`.
    async fn save_latest(&self) {
        loop {
            let (epoch, document) = {
                let mut st = self.lock();
                st.dirty = false;
                (st.epoch, st.document.clone())
            };

            // No id yet: first save creates and adopts the assigned id.
            let outcome = match document.id.as_deref() {
                None => self.gateway.create(&document).await.map(|r| Some(r.id)),
                Some(id) => self.gateway.update(id, &document).await.map(|_| None),
            };

            let mut st = self.lock();
            match outcome {
                Ok(assigned) => {
                    if let Some(id) = assigned {
                        if st.epoch == epoch {
                            st.document.id = Some(id);
                        } else {
                            tracing::debug!(
                                stale_id = %id,
                                "discarding save result for a replaced document"
                            );
                        }
                    }
                    if st.save_queued {
                        st.save_queued = false;
                        if st.dirty {
                            continue;
                        }
                    }
                }
                Err(err) => match self.config.failure_policy {
                    AutoSaveFailurePolicy::RetryOnNextEdit => {
                        // Local state stays authoritative; the next edit
                        // re-arms the timer and the next save carries
                        // everything this one would have.
                        tracing::warn!(error = %err, "auto-save failed, keeping local edits");
                        st.dirty = true;
                        st.save_queued = false;
                    }
                },
            }

            st.saving = false;
            drop(st);
            self.save_done.notify_waiters();
            return;
        }
    }
}
