//! Startup wiring: logging and the initial route

use tracing_subscriber::EnvFilter;

use em_core::gateways::{CredentialStore, IdentityGateway, Navigator, Route};
use em_shared::config::LoggingConfig;

use crate::context::AppContext;

/// Initialize tracing for the whole process.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .init();
}

/// Decide the first screen from stored credentials and show it
pub async fn enter_initial_route<G, C, N>(context: &AppContext<G, C, N>) -> Route
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    let route = context.session.bootstrap().await;
    tracing::info!(route = %route, event = "app_started", "Entering initial route");
    context.navigator.replace(route);
    route
}
