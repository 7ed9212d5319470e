//! Credential store trait for on-device secret persistence.

use async_trait::async_trait;

use crate::errors::ClientResult;

/// Keys under which the client persists secrets on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    /// Bearer token for API calls
    AccessToken,
    /// Token used to renew the session
    RefreshToken,
    /// Device messaging token registered with the push provider
    PushToken,
    /// One-time ticket authorizing a password reset
    RecoveryTicket,
}

impl CredentialKey {
    /// Every known key, for wholesale clearing
    pub const ALL: [CredentialKey; 4] = [
        CredentialKey::AccessToken,
        CredentialKey::RefreshToken,
        CredentialKey::PushToken,
        CredentialKey::RecoveryTicket,
    ];

    /// Stable storage name; changing one orphans existing entries
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::AccessToken => "auth.access_token",
            CredentialKey::RefreshToken => "auth.refresh_token",
            CredentialKey::PushToken => "push.device_token",
            CredentialKey::RecoveryTicket => "auth.recovery_ticket",
        }
    }
}

/// Store trait for on-device credential persistence
///
/// A small string key-value store. Implementations serialize access
/// internally; callers may invoke from concurrent tasks. Absent keys are
/// `Ok(None)`, not errors.
///
/// # Example
/// ```no_run
/// # use em_core::gateways::{CredentialKey, CredentialStore};
/// # async fn example(store: &impl CredentialStore) -> Result<(), Box<dyn std::error::Error>> {
/// store.set(CredentialKey::AccessToken, "token-value").await?;
/// let token = store.get(CredentialKey::AccessToken).await?;
/// assert_eq!(token.as_deref(), Some("token-value"));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a value, `None` if the key was never set or was removed
    async fn get(&self, key: CredentialKey) -> ClientResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: CredentialKey, value: &str) -> ClientResult<()>;

    /// Remove a value; removing an absent key is not an error
    async fn remove(&self, key: CredentialKey) -> ClientResult<()>;

    /// Remove every known key; used by logout
    async fn clear_all(&self) -> ClientResult<()> {
        for key in CredentialKey::ALL {
            self.remove(key).await?;
        }
        Ok(())
    }
}
