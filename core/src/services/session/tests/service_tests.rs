//! Unit tests for the session service

use std::sync::Arc;

use crate::domain::entities::challenge::PurposeKind;
use crate::domain::value_objects::{Registration, SessionGrant};
use crate::errors::{ClientError, ValidationError};
use crate::gateways::identity::mock::{MockIdentityGateway, RecordedCall};
use crate::gateways::{CredentialKey, CredentialStore, MemoryCredentialStore, Route};
use crate::services::session::config::SessionConfig;
use crate::services::session::service::SessionService;

const EMAIL: &str = "an.nguyen@example.com";
const PASSWORD: &str = "s3cret-pass";

type TestService = SessionService<MockIdentityGateway, MemoryCredentialStore>;

fn service() -> (TestService, Arc<MockIdentityGateway>, Arc<MemoryCredentialStore>) {
    let gateway = Arc::new(MockIdentityGateway::new());
    let store = Arc::new(MemoryCredentialStore::new());
    let service = SessionService::new(gateway.clone(), store.clone(), SessionConfig::default());
    (service, gateway, store)
}

async fn stored(store: &MemoryCredentialStore, key: CredentialKey) -> Option<String> {
    store.get(key).await.unwrap()
}

#[tokio::test]
async fn test_bootstrap_with_access_token_goes_straight_home() {
    let (service, gateway, store) = service();
    store.set(CredentialKey::AccessToken, "token-a").await.unwrap();

    assert_eq!(service.bootstrap().await, Route::Home);
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_bootstrap_renews_session_from_refresh_token() {
    let (service, gateway, store) = service();
    store
        .set(CredentialKey::RefreshToken, "refresh-old")
        .await
        .unwrap();
    gateway.push_refresh(Ok(SessionGrant::session("access-new", "refresh-new")));

    assert_eq!(service.bootstrap().await, Route::Home);
    assert_eq!(
        stored(&store, CredentialKey::AccessToken).await.as_deref(),
        Some("access-new")
    );
    assert_eq!(
        stored(&store, CredentialKey::RefreshToken).await.as_deref(),
        Some("refresh-new")
    );
    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::RefreshSession {
            refresh_token: "refresh-old".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_bootstrap_drops_refused_refresh_token() {
    let (service, gateway, store) = service();
    store
        .set(CredentialKey::RefreshToken, "refresh-stale")
        .await
        .unwrap();
    gateway.push_refresh(Err(ClientError::rejected(401, Some("Phiên đã hết hạn".into()))));

    assert_eq!(service.bootstrap().await, Route::Login);
    assert_eq!(stored(&store, CredentialKey::RefreshToken).await, None);
}

#[tokio::test]
async fn test_bootstrap_with_empty_store_goes_to_login() {
    let (service, gateway, _store) = service();

    assert_eq!(service.bootstrap().await, Route::Login);
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_login_rejects_invalid_email_before_any_remote_call() {
    let (service, gateway, _store) = service();

    let error = service.login("not-an-email", PASSWORD).await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Validation(ValidationError::InvalidEmail)
    ));
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_login_rejects_short_password_locally() {
    let (service, gateway, _store) = service();

    let error = service.login(EMAIL, "short").await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Validation(ValidationError::PasswordTooShort { min: 8 })
    ));
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_login_rejects_over_length_password_locally() {
    let (service, gateway, _store) = service();

    let error = service.login(EMAIL, &"p".repeat(129)).await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Validation(ValidationError::InvalidLength {
            expected: 128,
            actual: 129,
            ..
        })
    ));
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_password_length_is_measured_in_characters() {
    let (service, gateway, _store) = service();
    gateway.push_login(Ok(SessionGrant::session("access-1", "refresh-1")));

    // 100 characters but 200 bytes; only the character count is in bounds.
    let password = "ă".repeat(100);
    service.login(EMAIL, &password).await.unwrap();

    assert_eq!(gateway.recorded().len(), 1);
}

#[tokio::test]
async fn test_login_persists_both_session_tokens() {
    let (service, gateway, store) = service();
    gateway.push_login(Ok(SessionGrant::session("access-1", "refresh-1")));

    service.login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(
        stored(&store, CredentialKey::AccessToken).await.as_deref(),
        Some("access-1")
    );
    assert_eq!(
        stored(&store, CredentialKey::RefreshToken).await.as_deref(),
        Some("refresh-1")
    );
    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::Login {
            email: EMAIL.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_login_grant_without_tokens_is_a_network_error() {
    let (service, gateway, store) = service();
    gateway.push_login(Ok(SessionGrant::default()));

    let error = service.login(EMAIL, PASSWORD).await.unwrap_err();
    assert!(matches!(error, ClientError::Network { .. }));
    assert_eq!(stored(&store, CredentialKey::AccessToken).await, None);
}

#[tokio::test]
async fn test_register_requires_a_display_name() {
    let (service, gateway, _store) = service();

    let error = service
        .register(&Registration::new(EMAIL, PASSWORD, "  "))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ClientError::Validation(ValidationError::RequiredField { ref field }) if field == "full_name"
    ));
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_register_normalizes_the_email_address() {
    let (service, gateway, _store) = service();

    service
        .register(&Registration::new(
            " An.Nguyen@Example.COM ",
            PASSWORD,
            "An Nguyen",
        ))
        .await
        .unwrap();

    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::Register {
            email: EMAIL.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_request_recovery_issues_a_recovery_code() {
    let (service, gateway, _store) = service();

    service.request_recovery(EMAIL).await.unwrap();

    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::IssueCode {
            kind: PurposeKind::PasswordRecovery,
            subject: EMAIL.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_password_reset_spends_the_stored_ticket() {
    let (service, gateway, store) = service();
    store
        .set(CredentialKey::RecoveryTicket, "ticket-7")
        .await
        .unwrap();

    service
        .complete_password_reset(EMAIL, "brand-new-pass")
        .await
        .unwrap();

    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::ResetPassword {
            subject: EMAIL.to_string(),
            ticket: "ticket-7".to_string(),
        }]
    );
    assert_eq!(stored(&store, CredentialKey::RecoveryTicket).await, None);
}

#[tokio::test]
async fn test_password_reset_without_a_ticket_fails() {
    let (service, gateway, _store) = service();

    let error = service
        .complete_password_reset(EMAIL, "brand-new-pass")
        .await
        .unwrap_err();
    assert!(matches!(error, ClientError::Internal { .. }));
    assert!(gateway.recorded().is_empty());
}

#[tokio::test]
async fn test_logout_revokes_remotely_and_wipes_the_device() {
    let (service, gateway, store) = service();
    store.set(CredentialKey::AccessToken, "token-a").await.unwrap();
    store
        .set(CredentialKey::RefreshToken, "refresh-a")
        .await
        .unwrap();
    store.set(CredentialKey::PushToken, "push-a").await.unwrap();

    service.logout().await.unwrap();

    assert_eq!(
        gateway.recorded(),
        vec![RecordedCall::Logout {
            access_token: "token-a".to_string(),
        }]
    );
    for key in CredentialKey::ALL {
        assert_eq!(stored(&store, key).await, None);
    }
}

#[tokio::test]
async fn test_logout_wipes_the_device_even_when_revocation_fails() {
    let (service, gateway, store) = service();
    store.set(CredentialKey::AccessToken, "token-a").await.unwrap();
    gateway.push_logout(Err(ClientError::network("connection reset")));

    service.logout().await.unwrap();

    assert_eq!(stored(&store, CredentialKey::AccessToken).await, None);
}

#[tokio::test]
async fn test_push_token_is_stored_for_later_sync() {
    let (service, _gateway, store) = service();

    service.update_push_token("device-token-9").await.unwrap();

    assert_eq!(
        stored(&store, CredentialKey::PushToken).await.as_deref(),
        Some("device-token-9")
    );
}
