//! Template seed data and instantiation.

use pagecraft_document::{BlockId, BlockInstance, Document, ThemeConfig};
use serde::{Deserialize, Serialize};

/// Kind of site a template is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    Campaign,
    Business,
    Portfolio,
    Event,
}

/// An immutable, catalog-provided seed document.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub site_type: SiteType,
    pub components: Vec<BlockInstance>,
    pub theme: ThemeConfig,
}

impl Template {
    /// Construct a new document seeded from this template.
    ///
    /// Blocks and theme are deep copies; block ids are regenerated so two
    /// documents derived from the same template never share instance
    /// identity. `id` is left unset - the first save creates a new remote
    /// record. `name` defaults to the template's name unless overridden.
    pub fn instantiate(&self, name: Option<&str>) -> Document {
        let components = self
            .components
            .iter()
            .map(|block| BlockInstance {
                id: BlockId::new(),
                ..block.clone()
            })
            .collect();

        Document::from_parts(
            name.unwrap_or(self.name),
            components,
            self.theme.clone(),
        )
    }
}
