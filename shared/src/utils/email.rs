//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Email address regex, intentionally strict about the domain part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$").unwrap()
});

/// Normalize an email address for comparison and transmission
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an email address is valid
pub fn is_valid_email(email: &str) -> bool {
    let normalized = normalize_email(email);
    EMAIL_REGEX.is_match(&normalized)
}

/// Mask an email address for logs (e.g., ng****@example.com)
///
/// Accepts any string, validated or not; the local part is measured in
/// characters so diacritics never split.
pub fn mask_email(email: &str) -> String {
    let normalized = normalize_email(email);
    match normalized.split_once('@') {
        Some((local, domain)) if local.chars().count() >= 2 => {
            let prefix: String = local.chars().take(2).collect();
            format!("{}****@{}", prefix, domain)
        }
        Some((_, domain)) => format!("****@{}", domain),
        None => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Nguyen.Van@Example.COM "), "nguyen.van@example.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("nguyen.van@example.com"));
        assert!(is_valid_email("a+tag@sub.example.vn"));
        assert!(is_valid_email(" Upper.Case@Example.Com "));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@no-local.vn"));
        assert!(!is_valid_email("dot@end."));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("nguyen.van@example.com"), "ng****@example.com");
        assert_eq!(mask_email("a@example.com"), "****@example.com");
        assert_eq!(mask_email("not-an-email"), "****");
    }

    #[test]
    fn test_mask_email_with_diacritics() {
        // Second character is multibyte; masking must not split it.
        assert_eq!(mask_email("hà.my@example.com"), "hà****@example.com");
        assert_eq!(mask_email("ă@example.com"), "****@example.com");
    }
}
