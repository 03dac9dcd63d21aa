//! Session state: current user plus selected organization.

use crate::{Organization, User};

/// One client's signed-in state. Both a user and an organization selection
/// must be present before the editor shell allows document mutation.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<User>,
    organization: Option<Organization>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User, organization: Organization) -> Self {
        Self {
            user: Some(user),
            organization: Some(organization),
        }
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Select the active organization. Selection does not outlive the
    /// user: signing out clears it.
    pub fn set_organization(&mut self, organization: Organization) {
        self.organization = Some(organization);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.organization = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_organization_id(&self) -> Option<&str> {
        self.organization.as_ref().map(|o| o.id.as_str())
    }

    /// The editing precondition: user and organization both present.
    pub fn is_ready(&self) -> bool {
        self.user.is_some() && self.organization.is_some()
    }
}
