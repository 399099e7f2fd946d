//! Hosted auth provider seam and the catalog's authorization rules.
//!
//! Accounts are fully owned by the external provider; the catalog talks to it
//! through [`AuthProvider`] and never stores credentials. Authorization is
//! decided locally by [`AdminPolicy`].

mod hosted;

pub use hosted::HostedAuthClient;

use async_trait::async_trait;

use tela_model::{AuthUser, UserMetadata};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Provider rejected the request: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected provider response: {0}")]
    Parse(String),
}

/// Parameters for provisioning an account on the provider.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Contract over the hosted auth provider's session and admin APIs.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a bearer token to its account. `None` means the token is
    /// missing, expired, or otherwise not a session.
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError>;

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<AuthUser>, AuthError>;

    async fn create_user(&self, new_user: NewUser) -> Result<AuthUser, AuthError>;

    async fn update_password(&self, user_id: &str, new_password: &str) -> Result<(), AuthError>;

    /// Replace the account's metadata blob wholesale. Callers merge before
    /// writing so unrelated metadata survives an admin toggle.
    async fn set_metadata(&self, user_id: &str, metadata: &UserMetadata) -> Result<(), AuthError>;

    async fn delete_user(&self, user_id: &str) -> Result<(), AuthError>;

    async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError>;
}

/// Who may administer the catalog.
///
/// A user is an admin when their email is the configured super-admin or their
/// metadata carries the admin flag. The super-admin is immutable: it can
/// never be demoted or deleted, and that rule lives here rather than being
/// re-checked ad hoc in handlers.
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    super_admin_email: String,
}

impl AdminPolicy {
    pub fn new(super_admin_email: impl Into<String>) -> Self {
        Self {
            super_admin_email: super_admin_email.into(),
        }
    }

    pub fn is_admin(&self, user: &AuthUser) -> bool {
        user.email == self.super_admin_email || user.user_metadata.is_admin
    }

    /// Whether the account with this email is shielded from demotion and
    /// deletion.
    pub fn is_protected(&self, email: &str) -> bool {
        email == self.super_admin_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, is_admin: bool) -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: email.to_string(),
            user_metadata: UserMetadata {
                name: None,
                is_admin,
                extra: serde_json::Map::new(),
            },
        }
    }

    #[test]
    fn super_admin_is_always_admin() {
        let policy = AdminPolicy::new("root@tela.app");
        assert!(policy.is_admin(&user("root@tela.app", false)));
    }

    #[test]
    fn metadata_flag_grants_admin() {
        let policy = AdminPolicy::new("root@tela.app");
        assert!(policy.is_admin(&user("other@tela.app", true)));
        assert!(!policy.is_admin(&user("other@tela.app", false)));
    }

    #[test]
    fn only_the_super_admin_is_protected() {
        let policy = AdminPolicy::new("root@tela.app");
        assert!(policy.is_protected("root@tela.app"));
        assert!(!policy.is_protected("other@tela.app"));
    }
}
