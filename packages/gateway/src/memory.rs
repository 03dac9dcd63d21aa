//! In-memory gateway: local mode and the default test collaborator.

use crate::{PageRecord, PageSummary, PersistenceError, PersistenceGateway};
use async_trait::async_trait;
use chrono::Utc;
use pagecraft_document::Document;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// HashMap-backed gateway with server-style id/timestamp assignment.
#[derive(Default)]
pub struct InMemoryGateway {
    pages: Mutex<HashMap<String, PageRecord>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pages (test helper).
    pub async fn len(&self) -> usize {
        self.pages.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.lock().await.is_empty()
    }
}

fn validate(doc: &Document) -> Result<(), PersistenceError> {
    if doc.name.trim().is_empty() {
        return Err(PersistenceError::Validation(
            "page name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn create(&self, doc: &Document) -> Result<PageRecord, PersistenceError> {
        validate(doc)?;

        let now = Utc::now();
        let record = PageRecord {
            id: Uuid::new_v4().to_string(),
            name: doc.name.clone(),
            components: doc.components.clone(),
            theme: doc.theme.clone(),
            created_at: now,
            updated_at: now,
        };

        self.pages
            .lock()
            .await
            .insert(record.id.clone(), record.clone());
        tracing::debug!(id = %record.id, "created page");
        Ok(record)
    }

    async fn update(&self, id: &str, doc: &Document) -> Result<PageRecord, PersistenceError> {
        validate(doc)?;

        let mut pages = self.pages.lock().await;
        let existing = pages
            .get(id)
            .ok_or_else(|| PersistenceError::NotFound(id.to_string()))?;

        let record = PageRecord {
            id: id.to_string(),
            name: doc.name.clone(),
            components: doc.components.clone(),
            theme: doc.theme.clone(),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        pages.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<PageRecord, PersistenceError> {
        self.pages
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<PageSummary>, PersistenceError> {
        let pages = self.pages.lock().await;
        let mut summaries: Vec<PageSummary> = pages.values().map(PageSummary::from).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        if self.pages.lock().await.remove(id).is_none() {
            // Idempotent: absent ids are logged, not surfaced.
            tracing::debug!(id, "delete of absent page");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::Props;

    #[tokio::test]
    async fn test_create_assigns_identity_and_timestamps() {
        let gateway = InMemoryGateway::new();
        let mut doc = Document::new();
        doc.add_block("hero", Props::new());

        let record = gateway.create(&doc).await.unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.components, doc.components);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn test_create_does_not_mutate_the_document() {
        let gateway = InMemoryGateway::new();
        let doc = Document::new();
        let before = doc.clone();

        gateway.create(&doc).await.unwrap();

        assert_eq!(doc, before);
        assert!(doc.id.is_none());
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let gateway = InMemoryGateway::new();
        let mut doc = Document::new();
        let record = gateway.create(&doc).await.unwrap();

        doc.rename("Renamed");
        let updated = gateway.update(&record.id, &doc).await.unwrap();

        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_absent_id_is_not_found() {
        let gateway = InMemoryGateway::new();
        let doc = Document::new();

        let err = gateway.update("missing", &doc).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_absent_id_is_not_found() {
        let gateway = InMemoryGateway::new();

        let err = gateway.get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_is_summary_only_and_recency_ordered() {
        let gateway = InMemoryGateway::new();
        let mut first = Document::new();
        first.rename("First");
        let mut second = Document::new();
        second.rename("Second");

        let first_record = gateway.create(&first).await.unwrap();
        gateway.create(&second).await.unwrap();

        // Touch the first page so it becomes most recent.
        gateway.update(&first_record.id, &first).await.unwrap();

        let summaries = gateway.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "First");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let gateway = InMemoryGateway::new();
        let record = gateway.create(&Document::new()).await.unwrap();

        gateway.delete(&record.id).await.unwrap();
        gateway.delete(&record.id).await.unwrap();

        assert!(gateway.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_name_is_a_validation_error() {
        let gateway = InMemoryGateway::new();
        let mut doc = Document::new();
        doc.rename("   ");

        let err = gateway.create(&doc).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Validation(_)));
    }
}
