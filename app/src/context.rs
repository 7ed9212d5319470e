//! Application context assembly
//!
//! One place where the gateway, store, navigator and services get wired
//! together. Platform shells build a context once at startup and hand it
//! to their view layer.

use std::sync::Arc;

use em_core::gateways::{CredentialStore, IdentityGateway, Navigator};
use em_core::services::app_state::{CartBadge, NotificationCounter};
use em_core::services::session::{SessionConfig, SessionService};
use em_core::services::verification::VerificationConfig;
use em_infra::http::{ApiClient, HttpIdentityGateway};
use em_infra::store::FileCredentialStore;
use em_infra::InfraError;
use em_shared::config::AppConfig;

/// Everything a platform shell needs to drive the client
pub struct AppContext<G, C, N>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    /// Loaded application configuration
    pub config: AppConfig,
    /// Remote identity service
    pub gateway: Arc<G>,
    /// On-device credential store
    pub credentials: Arc<C>,
    /// The shell's navigation authority
    pub navigator: Arc<N>,
    /// Session lifecycle service
    pub session: Arc<SessionService<G, C>>,
    /// Observable cart badge
    pub cart: Arc<CartBadge>,
    /// Observable unread-notification count
    pub notifications: Arc<NotificationCounter>,
}

impl<G, C, N> AppContext<G, C, N>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    /// Assemble a context from its collaborators
    pub fn new(
        config: AppConfig,
        gateway: Arc<G>,
        credentials: Arc<C>,
        navigator: Arc<N>,
    ) -> Self {
        let session = Arc::new(SessionService::new(
            gateway.clone(),
            credentials.clone(),
            SessionConfig::from(&config.auth),
        ));

        Self {
            config,
            gateway,
            credentials,
            navigator,
            session,
            cart: Arc::new(CartBadge::new()),
            notifications: Arc::new(NotificationCounter::new()),
        }
    }

    /// Controller configuration derived from the app config
    pub fn verification_config(&self) -> VerificationConfig {
        VerificationConfig::from(&self.config.auth)
    }
}

/// Context wired to the live HTTP gateway and on-disk store
pub type LiveContext<N> = AppContext<HttpIdentityGateway, FileCredentialStore, N>;

/// Build a context backed by the real storefront API
pub fn build_live<N>(config: AppConfig, navigator: Arc<N>) -> Result<LiveContext<N>, InfraError>
where
    N: Navigator,
{
    let client = ApiClient::new(&config.api, config.auth.language)?;
    let gateway = Arc::new(HttpIdentityGateway::new(client));
    let credentials = Arc::new(FileCredentialStore::new(&config.storage));
    Ok(AppContext::new(config, gateway, credentials, navigator))
}
