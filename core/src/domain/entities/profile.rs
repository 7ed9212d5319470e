//! Pending profile changes awaiting confirmation.

use serde::{Deserialize, Serialize};

/// Draft of profile changes pending OTP confirmation
///
/// Captured when the user saves the edit form; only submitted to the server
/// together with a valid verification code. Unset fields are left untouched
/// on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// New display name, if changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// New contact phone, if changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New delivery address, if changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

impl ProfileDraft {
    /// Creates an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the contact phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the delivery address
    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }

    /// Whether the draft carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone.is_none() && self.delivery_address.is_none()
    }
}
