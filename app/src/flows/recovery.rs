//! Password recovery flow

use em_core::domain::entities::challenge::VerificationPurpose;
use em_core::errors::ClientResult;
use em_core::gateways::{CredentialStore, IdentityGateway, Navigator};
use em_core::services::verification::VerificationController;
use em_shared::utils::email::normalize_email;

use crate::context::AppContext;

/// Request a recovery code and open the challenge that checks it.
///
/// When the challenge succeeds the controller stores the recovery ticket
/// and opens the reset-password form; the shell finishes the flow through
/// `SessionService::complete_password_reset`.
pub async fn begin_recovery<G, C, N>(
    context: &AppContext<G, C, N>,
    email: &str,
) -> ClientResult<VerificationController<G, C, N>>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    let email = normalize_email(email);
    context.session.request_recovery(&email).await?;

    Ok(VerificationController::new(
        email,
        VerificationPurpose::PasswordRecovery,
        context.gateway.clone(),
        context.credentials.clone(),
        context.navigator.clone(),
        context.verification_config(),
    ))
}
