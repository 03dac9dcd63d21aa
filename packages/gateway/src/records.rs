//! Server-side record shapes.

use chrono::{DateTime, Utc};
use pagecraft_document::{BlockInstance, Document, ThemeConfig};
use serde::{Deserialize, Serialize};

/// A persisted page as the remote store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: String,
    pub name: String,
    pub components: Vec<BlockInstance>,
    pub theme: ThemeConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageRecord {
    /// The in-memory document this record represents. The record's id
    /// becomes the document's remote identity.
    pub fn into_document(self) -> Document {
        let mut doc = Document::from_parts(self.name, self.components, self.theme);
        doc.id = Some(self.id);
        doc
    }
}

/// Listing projection: metadata only, no components or theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PageRecord> for PageSummary {
    fn from(record: &PageRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
