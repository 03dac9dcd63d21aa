//! # Pagecraft Template Catalog
//!
//! Read-only seed documents: pre-populated block lists plus a theme,
//! filterable by site type. Applying a template constructs a brand-new
//! document whose blocks and theme are copies of the template's - never
//! aliases, so later edits cannot reach back into the catalog - with fresh
//! block ids and no remote identity, so the next save creates a new
//! record.

mod catalog;
mod template;

pub use catalog::TemplateCatalog;
pub use template::{SiteType, Template};
