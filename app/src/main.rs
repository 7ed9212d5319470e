//! Headless client shell
//!
//! Boots the client against the configured storefront API, decides the
//! startup route and logs what a platform shell would render.

use std::sync::Arc;

use em_app::{bootstrap, config, context};
use em_core::gateways::{Navigator, Route, RouteParams};

/// Navigator that logs where a real shell would go
struct TraceNavigator;

impl Navigator for TraceNavigator {
    fn navigate_to(&self, route: Route, params: RouteParams) {
        tracing::info!(route = %route, params = ?params, "navigate");
    }

    fn go_back(&self) {
        tracing::info!("navigate back");
    }

    fn replace(&self, route: Route) {
        tracing::info!(route = %route, "replace stack");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    bootstrap::init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        api = %config.api.base_url,
        "Starting EasyMart client shell"
    );

    let context = context::build_live(config, Arc::new(TraceNavigator))?;
    let route = bootstrap::enter_initial_route(&context).await;

    println!("initial route: {route}");
    Ok(())
}
