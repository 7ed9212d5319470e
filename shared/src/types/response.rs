//! Wire envelope used by the storefront API

use serde::{Deserialize, Serialize};

/// Envelope status code signalling success
pub const STATUS_OK: u16 = 200;

/// Response envelope wrapping every storefront API reply
///
/// The backend answers with `{"statusCode": ..., "message": ..., "data": ...}`
/// on success and failure alike; `statusCode` mirrors the HTTP status and is
/// the authoritative outcome even when the transport says 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Application status code (200 = success)
    pub status_code: u16,

    /// Human-readable message, localized by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload, present on success for endpoints that return data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    /// Server message, if present and non-empty
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// Consume the envelope and take its payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Tokens {
        access_token: String,
    }

    #[test]
    fn test_success_envelope() {
        let json = r#"{"statusCode":200,"message":"OK","data":{"accessToken":"abc"}}"#;
        let envelope: ApiEnvelope<Tokens> = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.message(), Some("OK"));
        assert_eq!(
            envelope.into_data(),
            Some(Tokens { access_token: String::from("abc") })
        );
    }

    #[test]
    fn test_failure_envelope_without_data() {
        let json = r#"{"statusCode":400,"message":"Mã xác thực không đúng"}"#;
        let envelope: ApiEnvelope<Tokens> = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message(), Some("Mã xác thực không đúng"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_blank_message_is_none() {
        let json = r#"{"statusCode":500,"message":"   "}"#;
        let envelope: ApiEnvelope<Tokens> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.message(), None);
    }

    #[test]
    fn test_bare_envelope_deserializes() {
        // Both optional fields absent; the payload type has no Default impl.
        let json = r#"{"statusCode":204}"#;
        let envelope: ApiEnvelope<Tokens> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.message(), None);
        assert!(envelope.into_data().is_none());
    }
}
