//! Account activation flow

use em_core::domain::entities::challenge::VerificationPurpose;
use em_core::domain::value_objects::Registration;
use em_core::errors::ClientResult;
use em_core::gateways::{CredentialStore, IdentityGateway, Navigator};
use em_core::services::verification::VerificationController;
use em_shared::utils::email::normalize_email;

use crate::context::AppContext;

/// Create the account, then open the activation challenge for it.
///
/// Registration already makes the server dispatch a code, so the challenge
/// starts with its resend gate closed.
pub async fn register_and_begin<G, C, N>(
    context: &AppContext<G, C, N>,
    registration: Registration,
) -> ClientResult<VerificationController<G, C, N>>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    context.session.register(&registration).await?;

    Ok(VerificationController::new(
        normalize_email(&registration.email),
        VerificationPurpose::AccountActivation,
        context.gateway.clone(),
        context.credentials.clone(),
        context.navigator.clone(),
        context.verification_config(),
    ))
}
