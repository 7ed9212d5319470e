//! End-to-end flow tests over an assembled app context
//!
//! A scripted gateway stands in for the storefront API; credentials live
//! in the in-memory store and navigation lands in the recorder. Everything
//! else is the real wiring a platform shell would get.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use em_app::context::AppContext;
use em_app::flows;
use em_core::domain::entities::challenge::PurposeKind;
use em_core::domain::entities::ProfileDraft;
use em_core::domain::value_objects::{CodeIssued, Registration, SessionGrant};
use em_core::errors::{ClientError, ClientResult};
use em_core::gateways::{
    CredentialKey, CredentialStore, IdentityGateway, MemoryCredentialStore, NavEvent,
    RecordingNavigator, Route,
};
use em_core::services::verification::{EditOutcome, SubmitOutcome};
use em_shared::config::AppConfig;

const EMAIL: &str = "an.nguyen@example.com";
const CODE: &str = "482913";

/// Gateway that replays scripted verification results and records the rest
#[derive(Default)]
struct ScriptedGateway {
    verify_results: Mutex<VecDeque<ClientResult<SessionGrant>>>,
    issued: Mutex<Vec<(PurposeKind, String)>>,
    profile_updates: Mutex<Vec<(String, String, ProfileDraft)>>,
    resets: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    fn push_verify(&self, result: ClientResult<SessionGrant>) {
        self.verify_results.lock().unwrap().push_back(result);
    }

    fn issued(&self) -> Vec<(PurposeKind, String)> {
        self.issued.lock().unwrap().clone()
    }

    fn profile_updates(&self) -> Vec<(String, String, ProfileDraft)> {
        self.profile_updates.lock().unwrap().clone()
    }

    fn resets(&self) -> Vec<(String, String)> {
        self.resets.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityGateway for ScriptedGateway {
    async fn issue_code(&self, kind: PurposeKind, subject: &str) -> ClientResult<CodeIssued> {
        self.issued
            .lock()
            .unwrap()
            .push((kind, subject.to_string()));
        Ok(CodeIssued::default())
    }

    async fn verify_code(
        &self,
        _kind: PurposeKind,
        _subject: &str,
        _code: &str,
    ) -> ClientResult<SessionGrant> {
        self.verify_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SessionGrant::default()))
    }

    async fn submit_profile_update(
        &self,
        subject: &str,
        code: &str,
        draft: &ProfileDraft,
    ) -> ClientResult<()> {
        self.profile_updates.lock().unwrap().push((
            subject.to_string(),
            code.to_string(),
            draft.clone(),
        ));
        Ok(())
    }

    async fn register(&self, _registration: &Registration) -> ClientResult<CodeIssued> {
        Ok(CodeIssued::with_message("Mã kích hoạt đã được gửi"))
    }

    async fn login(&self, _email: &str, _password: &str) -> ClientResult<SessionGrant> {
        Ok(SessionGrant::session("access-login", "refresh-login"))
    }

    async fn refresh_session(&self, _refresh_token: &str) -> ClientResult<SessionGrant> {
        Ok(SessionGrant::session("access-fresh", "refresh-fresh"))
    }

    async fn reset_password(
        &self,
        subject: &str,
        ticket: &str,
        _new_password: &str,
    ) -> ClientResult<()> {
        self.resets
            .lock()
            .unwrap()
            .push((subject.to_string(), ticket.to_string()));
        Ok(())
    }

    async fn logout(&self, _access_token: &str) -> ClientResult<()> {
        Ok(())
    }
}

type TestContext = AppContext<ScriptedGateway, MemoryCredentialStore, RecordingNavigator>;

fn test_context() -> TestContext {
    AppContext::new(
        AppConfig::development(),
        Arc::new(ScriptedGateway::default()),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(RecordingNavigator::new()),
    )
}

#[tokio::test]
async fn test_activation_flow_signs_the_user_in() {
    let context = test_context();
    let controller = flows::register_and_begin(
        &context,
        Registration::new(" An.Nguyen@Example.com ", "password123", "An Nguyen"),
    )
    .await
    .unwrap();

    context
        .gateway
        .push_verify(Ok(SessionGrant::session("access-1", "refresh-1")));
    let outcome = controller.edit_code(CODE).await;

    assert_eq!(outcome, EditOutcome::Submitted(SubmitOutcome::Succeeded));
    assert_eq!(
        context
            .credentials
            .get(CredentialKey::AccessToken)
            .await
            .unwrap()
            .as_deref(),
        Some("access-1")
    );
    assert_eq!(
        context.navigator.last(),
        Some(NavEvent::Replace { route: Route::Home })
    );
}

#[tokio::test]
async fn test_recovery_flow_hands_off_to_the_reset_form() {
    let context = test_context();
    let controller = flows::begin_recovery(&context, EMAIL).await.unwrap();
    assert_eq!(
        context.gateway.issued(),
        vec![(PurposeKind::PasswordRecovery, EMAIL.to_string())]
    );

    context
        .gateway
        .push_verify(Ok(SessionGrant::recovery("ticket-9")));
    let outcome = controller.edit_code(CODE).await;
    assert_eq!(outcome, EditOutcome::Submitted(SubmitOutcome::Succeeded));

    match context.navigator.last() {
        Some(NavEvent::NavigateTo { route, params }) => {
            assert_eq!(route, Route::ResetPassword);
            assert_eq!(params.get("subject"), Some(EMAIL));
            assert_eq!(params.get("ticket"), Some("ticket-9"));
        }
        other => panic!("expected reset-form navigation, got {other:?}"),
    }

    // The stored ticket finishes the flow through the session service
    context
        .session
        .complete_password_reset(EMAIL, "brand-new-pass")
        .await
        .unwrap();
    assert_eq!(
        context.gateway.resets(),
        vec![(EMAIL.to_string(), "ticket-9".to_string())]
    );
    assert_eq!(
        context
            .credentials
            .get(CredentialKey::RecoveryTicket)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_profile_flow_confirms_the_draft_with_a_code() {
    let context = test_context();
    let draft = ProfileDraft::new().with_delivery_address("12 Hang Bai, Ha Noi");
    let controller = flows::begin_profile_update(&context, EMAIL, draft.clone())
        .await
        .unwrap();
    assert_eq!(
        context.gateway.issued(),
        vec![(PurposeKind::ProfileUpdate, EMAIL.to_string())]
    );

    let outcome = controller.edit_code(CODE).await;

    assert_eq!(outcome, EditOutcome::Submitted(SubmitOutcome::Succeeded));
    assert_eq!(
        context.gateway.profile_updates(),
        vec![(EMAIL.to_string(), CODE.to_string(), draft)]
    );
    assert_eq!(context.navigator.last(), Some(NavEvent::GoBack));
    assert_eq!(
        context
            .credentials
            .get(CredentialKey::AccessToken)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_empty_profile_draft_is_refused_before_any_code() {
    let context = test_context();

    let error = flows::begin_profile_update(&context, EMAIL, ProfileDraft::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Validation(_)));
    assert!(context.gateway.issued().is_empty());
}

#[tokio::test]
async fn test_login_then_logout_round_trips_the_session() {
    let context = test_context();

    context.session.login(EMAIL, "password123").await.unwrap();
    assert_eq!(
        context
            .credentials
            .get(CredentialKey::AccessToken)
            .await
            .unwrap()
            .as_deref(),
        Some("access-login")
    );

    context.session.logout().await.unwrap();
    for key in CredentialKey::ALL {
        assert_eq!(context.credentials.get(key).await.unwrap(), None);
    }
}
