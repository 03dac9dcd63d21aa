//! Error taxonomy for the persistence boundary.
//!
//! Local document mutations never fail on missing targets; the remote
//! boundary is the opposite - every failure is structured and
//! diagnosable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound(_))
    }
}
