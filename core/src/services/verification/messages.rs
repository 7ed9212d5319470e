//! User-facing message catalog for verification failures
//!
//! Wording policy: a server-supplied rejection message wins when present,
//! these catalog entries cover everything else. English and Vietnamese
//! only, matching the storefront's supported locales.

use em_shared::types::Language;

use crate::domain::entities::challenge::FailureKind;
use crate::errors::ClientError;

/// Fallback message for a failed code submission
pub fn submit_fallback(language: Language, kind: FailureKind) -> &'static str {
    match (language, kind) {
        (Language::English, FailureKind::Rejected) => "Invalid verification code",
        (Language::Vietnamese, FailureKind::Rejected) => "Mã xác thực không đúng",
        (Language::English, FailureKind::Network) => {
            "Connection error. Please check your network and try again."
        }
        (Language::Vietnamese, FailureKind::Network) => {
            "Lỗi kết nối. Vui lòng kiểm tra mạng và thử lại."
        }
        (Language::English, FailureKind::Internal) => "Something went wrong. Please try again.",
        (Language::Vietnamese, FailureKind::Internal) => "Đã có lỗi xảy ra. Vui lòng thử lại.",
        (Language::English, FailureKind::Validation) => "Please enter the 6-digit code.",
        (Language::Vietnamese, FailureKind::Validation) => "Vui lòng nhập đủ 6 chữ số.",
    }
}

/// Fallback message for a failed resend request
pub fn resend_fallback(language: Language, kind: FailureKind) -> &'static str {
    match (language, kind) {
        (Language::English, FailureKind::Rejected) => {
            "Could not send a new code. Please try again."
        }
        (Language::Vietnamese, FailureKind::Rejected) => {
            "Không thể gửi lại mã. Vui lòng thử lại."
        }
        _ => submit_fallback(language, kind),
    }
}

/// Resolve the message to show for an error
///
/// Prefers a non-empty server message from a rejection; anything else gets
/// the provided catalog fallback.
pub fn display_message(error: &ClientError, fallback: &'static str) -> String {
    match error.server_message() {
        Some(message) => message.to_string(),
        None => fallback.to_string(),
    }
}
