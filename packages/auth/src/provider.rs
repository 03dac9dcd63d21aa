//! Identity provider contract and the static local implementation.

use crate::{AuthError, Organization, User};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Contract for the hosted identity provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Look up (or lazily provision) a user by email.
    async fn sign_in(&self, email: &str) -> Result<User, AuthError>;

    async fn fetch_user(&self, id: &str) -> Result<User, AuthError>;

    /// Organizations the user belongs to.
    async fn organizations_for(&self, user_id: &str) -> Result<Vec<Organization>, AuthError>;
}

/// In-memory provider: every sign-in provisions a user with one default
/// organization. Enough for local mode and shell tests.
#[derive(Default)]
pub struct StaticAuthProvider {
    users: Mutex<HashMap<String, User>>,
    memberships: Mutex<HashMap<String, Vec<Organization>>>,
}

impl StaticAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn sign_in(&self, email: &str) -> Result<User, AuthError> {
        let mut users = self.users.lock().await;

        if let Some(existing) = users.values().find(|u| u.email == email) {
            return Ok(existing.clone());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: email.split('@').next().unwrap_or(email).to_string(),
        };
        users.insert(user.id.clone(), user.clone());

        self.memberships.lock().await.insert(
            user.id.clone(),
            vec![Organization {
                id: Uuid::new_v4().to_string(),
                name: format!("{}'s Workspace", user.display_name),
            }],
        );

        Ok(user)
    }

    async fn fetch_user(&self, id: &str) -> Result<User, AuthError> {
        self.users
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))
    }

    async fn organizations_for(&self, user_id: &str) -> Result<Vec<Organization>, AuthError> {
        Ok(self
            .memberships
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_is_idempotent_per_email() {
        let provider = StaticAuthProvider::new();

        let first = provider.sign_in("ana@example.com").await.unwrap();
        let second = provider.sign_in("ana@example.com").await.unwrap();

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_sign_in_provisions_a_default_organization() {
        let provider = StaticAuthProvider::new();
        let user = provider.sign_in("ana@example.com").await.unwrap();

        let orgs = provider.organizations_for(&user.id).await.unwrap();
        assert_eq!(orgs.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_fails() {
        let provider = StaticAuthProvider::new();

        let err = provider.fetch_user("missing").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound(_)));
    }
}
