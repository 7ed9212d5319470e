//! HTTP implementation of the identity gateway
//!
//! Maps each gateway operation onto a storefront endpoint. Verification
//! endpoints come in per-purpose pairs (one to dispatch a code, one to
//! check it); profile changes ride along with their code in a single PUT.

use async_trait::async_trait;
use tracing::{debug, info};

use em_core::domain::entities::challenge::PurposeKind;
use em_core::domain::entities::ProfileDraft;
use em_core::domain::value_objects::{CodeIssued, Registration, SessionGrant};
use em_core::errors::{ClientError, ClientResult};
use em_core::gateways::IdentityGateway;
use em_shared::types::ApiEnvelope;
use em_shared::utils::email::mask_email;

use super::api_client::ApiClient;
use super::dto::{
    ensure_valid, CredentialData, IssueCodeRequest, LoginRequest, ProfileUpdateRequest,
    RefreshRequest, RegisterRequest, ResetPasswordRequest, VerifyCodeRequest,
};

/// Identity gateway speaking the storefront's HTTPS/JSON protocol
pub struct HttpIdentityGateway {
    client: ApiClient,
}

impl HttpIdentityGateway {
    /// Create a gateway on top of an API client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn code_path(kind: PurposeKind) -> &'static str {
        match kind {
            PurposeKind::AccountActivation => "/api/v1/auth/activation/code",
            PurposeKind::PasswordRecovery => "/api/v1/auth/recovery/code",
            PurposeKind::ProfileUpdate => "/api/v1/account/profile/code",
        }
    }

    fn verify_path(kind: PurposeKind) -> Option<&'static str> {
        match kind {
            PurposeKind::AccountActivation => Some("/api/v1/auth/activation/verify"),
            PurposeKind::PasswordRecovery => Some("/api/v1/auth/recovery/verify"),
            // Profile codes are only accepted together with their payload
            PurposeKind::ProfileUpdate => None,
        }
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn issue_code(&self, kind: PurposeKind, subject: &str) -> ClientResult<CodeIssued> {
        let request = IssueCodeRequest {
            email: subject.to_string(),
        };
        ensure_valid(&request)?;

        debug!(
            purpose = kind.as_str(),
            email = %mask_email(subject),
            "Requesting a verification code"
        );
        let envelope: ApiEnvelope<serde_json::Value> =
            self.client.post_json(Self::code_path(kind), &request).await?;

        Ok(CodeIssued {
            message: envelope.message().map(str::to_string),
        })
    }

    async fn verify_code(
        &self,
        kind: PurposeKind,
        subject: &str,
        code: &str,
    ) -> ClientResult<SessionGrant> {
        let path = Self::verify_path(kind).ok_or_else(|| {
            ClientError::internal("profile update codes go through submit_profile_update")
        })?;
        let request = VerifyCodeRequest {
            email: subject.to_string(),
            code: code.to_string(),
        };
        ensure_valid(&request)?;

        let envelope = self
            .client
            .post_json::<_, CredentialData>(path, &request)
            .await?;
        info!(
            purpose = kind.as_str(),
            email = %mask_email(subject),
            event = "code_accepted",
            "Server accepted the verification code"
        );
        Ok(envelope.into_data().unwrap_or_default().into())
    }

    async fn submit_profile_update(
        &self,
        subject: &str,
        code: &str,
        draft: &ProfileDraft,
    ) -> ClientResult<()> {
        let request = ProfileUpdateRequest {
            email: subject.to_string(),
            code: code.to_string(),
            draft: draft.clone(),
        };
        ensure_valid(&request)?;

        self.client
            .put_json::<_, serde_json::Value>("/api/v1/account/profile", &request)
            .await?;
        info!(
            email = %mask_email(subject),
            event = "profile_updated",
            "Server accepted the profile change"
        );
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> ClientResult<CodeIssued> {
        let request = RegisterRequest {
            email: registration.email.clone(),
            password: registration.password.clone(),
            full_name: registration.full_name.clone(),
        };
        ensure_valid(&request)?;

        let envelope: ApiEnvelope<serde_json::Value> = self
            .client
            .post_json("/api/v1/auth/register", &request)
            .await?;
        info!(
            email = %mask_email(&registration.email),
            event = "account_registered",
            "Account created, activation pending"
        );
        Ok(CodeIssued {
            message: envelope.message().map(str::to_string),
        })
    }

    async fn login(&self, email: &str, password: &str) -> ClientResult<SessionGrant> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        ensure_valid(&request)?;

        let envelope = self
            .client
            .post_json::<_, CredentialData>("/api/v1/auth/login", &request)
            .await?;
        Ok(envelope.into_data().unwrap_or_default().into())
    }

    async fn refresh_session(&self, refresh_token: &str) -> ClientResult<SessionGrant> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };

        let envelope = self
            .client
            .post_json::<_, CredentialData>("/api/v1/auth/refresh", &request)
            .await?;
        Ok(envelope.into_data().unwrap_or_default().into())
    }

    async fn reset_password(
        &self,
        subject: &str,
        ticket: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        let request = ResetPasswordRequest {
            email: subject.to_string(),
            ticket: ticket.to_string(),
            new_password: new_password.to_string(),
        };
        ensure_valid(&request)?;

        self.client
            .post_json::<_, serde_json::Value>("/api/v1/auth/recovery/reset", &request)
            .await?;
        Ok(())
    }

    async fn logout(&self, access_token: &str) -> ClientResult<()> {
        self.client
            .post_json_authorized::<_, serde_json::Value>(
                "/api/v1/auth/logout",
                &serde_json::json!({}),
                access_token,
            )
            .await?;
        Ok(())
    }
}
