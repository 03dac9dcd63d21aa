//! # Pagecraft Auth / Organization Context
//!
//! Session and organization-selection state. The hosted identity provider
//! is an external collaborator; [`AuthProvider`] is its contract and
//! [`StaticAuthProvider`] a local implementation for tests and offline
//! mode.
//!
//! The editor shell consults [`SessionContext::is_ready`] before allowing
//! document mutation - a precondition at the UI boundary, deliberately not
//! enforced inside the document model or the store.

mod provider;
mod session;

pub use provider::{AuthProvider, StaticAuthProvider};
pub use session::SessionContext;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("not signed in")]
    NotSignedIn,

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("network error: {0}")]
    Network(String),
}
