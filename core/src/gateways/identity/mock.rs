//! Mock identity gateway for service and controller tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::r#trait::IdentityGateway;
use crate::domain::entities::challenge::PurposeKind;
use crate::domain::entities::profile::ProfileDraft;
use crate::domain::value_objects::{CodeIssued, Registration, SessionGrant};
use crate::errors::ClientResult;

/// Calls recorded by the mock, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    IssueCode { kind: PurposeKind, subject: String },
    VerifyCode { kind: PurposeKind, subject: String, code: String },
    SubmitProfileUpdate { subject: String, code: String, draft: ProfileDraft },
    Register { email: String },
    Login { email: String },
    RefreshSession { refresh_token: String },
    ResetPassword { subject: String, ticket: String },
    Logout { access_token: String },
}

/// Scripted identity gateway
///
/// Each method pops its next scripted result; an empty script yields `Ok`
/// with a default value. The hold gates park the next matching call until
/// the returned `Notify` is signalled, so tests can observe in-flight state.
pub struct MockIdentityGateway {
    pub calls: Mutex<Vec<RecordedCall>>,
    issue_script: Mutex<VecDeque<ClientResult<CodeIssued>>>,
    verify_script: Mutex<VecDeque<ClientResult<SessionGrant>>>,
    profile_script: Mutex<VecDeque<ClientResult<()>>>,
    register_script: Mutex<VecDeque<ClientResult<CodeIssued>>>,
    login_script: Mutex<VecDeque<ClientResult<SessionGrant>>>,
    refresh_script: Mutex<VecDeque<ClientResult<SessionGrant>>>,
    reset_script: Mutex<VecDeque<ClientResult<()>>>,
    logout_script: Mutex<VecDeque<ClientResult<()>>>,
    issue_gate: Mutex<Option<Arc<Notify>>>,
    verify_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockIdentityGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            issue_script: Mutex::new(VecDeque::new()),
            verify_script: Mutex::new(VecDeque::new()),
            profile_script: Mutex::new(VecDeque::new()),
            register_script: Mutex::new(VecDeque::new()),
            login_script: Mutex::new(VecDeque::new()),
            refresh_script: Mutex::new(VecDeque::new()),
            reset_script: Mutex::new(VecDeque::new()),
            logout_script: Mutex::new(VecDeque::new()),
            issue_gate: Mutex::new(None),
            verify_gate: Mutex::new(None),
        }
    }

    pub fn push_issue(&self, result: ClientResult<CodeIssued>) {
        self.issue_script.lock().unwrap().push_back(result);
    }

    pub fn push_verify(&self, result: ClientResult<SessionGrant>) {
        self.verify_script.lock().unwrap().push_back(result);
    }

    pub fn push_profile(&self, result: ClientResult<()>) {
        self.profile_script.lock().unwrap().push_back(result);
    }

    pub fn push_register(&self, result: ClientResult<CodeIssued>) {
        self.register_script.lock().unwrap().push_back(result);
    }

    pub fn push_login(&self, result: ClientResult<SessionGrant>) {
        self.login_script.lock().unwrap().push_back(result);
    }

    pub fn push_refresh(&self, result: ClientResult<SessionGrant>) {
        self.refresh_script.lock().unwrap().push_back(result);
    }

    pub fn push_reset(&self, result: ClientResult<()>) {
        self.reset_script.lock().unwrap().push_back(result);
    }

    pub fn push_logout(&self, result: ClientResult<()>) {
        self.logout_script.lock().unwrap().push_back(result);
    }

    /// Park the next `issue_code` call until the returned gate is notified
    pub fn hold_next_issue(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.issue_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Park the next `verify_code` call until the returned gate is notified
    pub fn hold_next_verify(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.verify_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn pop<T: Default>(script: &Mutex<VecDeque<ClientResult<T>>>) -> ClientResult<T> {
        script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(T::default()))
    }

    async fn wait_gate(gate: &Mutex<Option<Arc<Notify>>>) {
        let taken = gate.lock().unwrap().take();
        if let Some(notify) = taken {
            notify.notified().await;
        }
    }
}

impl Default for MockIdentityGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityGateway for MockIdentityGateway {
    async fn issue_code(&self, kind: PurposeKind, subject: &str) -> ClientResult<CodeIssued> {
        self.record(RecordedCall::IssueCode { kind, subject: subject.to_string() });
        Self::wait_gate(&self.issue_gate).await;
        Self::pop(&self.issue_script)
    }

    async fn verify_code(
        &self,
        kind: PurposeKind,
        subject: &str,
        code: &str,
    ) -> ClientResult<SessionGrant> {
        self.record(RecordedCall::VerifyCode {
            kind,
            subject: subject.to_string(),
            code: code.to_string(),
        });
        Self::wait_gate(&self.verify_gate).await;
        Self::pop(&self.verify_script)
    }

    async fn submit_profile_update(
        &self,
        subject: &str,
        code: &str,
        draft: &ProfileDraft,
    ) -> ClientResult<()> {
        self.record(RecordedCall::SubmitProfileUpdate {
            subject: subject.to_string(),
            code: code.to_string(),
            draft: draft.clone(),
        });
        Self::pop(&self.profile_script)
    }

    async fn register(&self, registration: &Registration) -> ClientResult<CodeIssued> {
        self.record(RecordedCall::Register { email: registration.email.clone() });
        Self::pop(&self.register_script)
    }

    async fn login(&self, email: &str, _password: &str) -> ClientResult<SessionGrant> {
        self.record(RecordedCall::Login { email: email.to_string() });
        Self::pop(&self.login_script)
    }

    async fn refresh_session(&self, refresh_token: &str) -> ClientResult<SessionGrant> {
        self.record(RecordedCall::RefreshSession { refresh_token: refresh_token.to_string() });
        Self::pop(&self.refresh_script)
    }

    async fn reset_password(
        &self,
        subject: &str,
        ticket: &str,
        _new_password: &str,
    ) -> ClientResult<()> {
        self.record(RecordedCall::ResetPassword {
            subject: subject.to_string(),
            ticket: ticket.to_string(),
        });
        Self::pop(&self.reset_script)
    }

    async fn logout(&self, access_token: &str) -> ClientResult<()> {
        self.record(RecordedCall::Logout { access_token: access_token.to_string() });
        Self::pop(&self.logout_script)
    }
}
