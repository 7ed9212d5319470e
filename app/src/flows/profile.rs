//! Profile update flow

use em_core::domain::entities::challenge::{PurposeKind, VerificationPurpose};
use em_core::domain::entities::ProfileDraft;
use em_core::errors::{ClientResult, ValidationError};
use em_core::gateways::{CredentialStore, IdentityGateway, Navigator};
use em_core::services::verification::VerificationController;
use em_shared::utils::email::normalize_email;

use crate::context::AppContext;

/// Ask for a confirmation code and open the profile-change challenge.
///
/// The draft rides inside the challenge purpose; it is only sent to the
/// server together with the completed code. An empty draft is refused
/// before any code is dispatched.
pub async fn begin_profile_update<G, C, N>(
    context: &AppContext<G, C, N>,
    email: &str,
    draft: ProfileDraft,
) -> ClientResult<VerificationController<G, C, N>>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    if draft.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "profile changes".to_string(),
        }
        .into());
    }

    let email = normalize_email(email);
    context
        .gateway
        .issue_code(PurposeKind::ProfileUpdate, &email)
        .await?;

    Ok(VerificationController::new(
        email,
        VerificationPurpose::ProfileUpdate(draft),
        context.gateway.clone(),
        context.credentials.clone(),
        context.navigator.clone(),
        context.verification_config(),
    ))
}
