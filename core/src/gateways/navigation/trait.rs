//! Navigation authority trait for screen transitions.

use std::collections::HashMap;

/// Logical destinations the client core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Authentication entry screen
    Login,
    /// Storefront home
    Home,
    /// Password reset form, reached from a completed recovery challenge
    ResetPassword,
    /// Account profile screen
    Profile,
}

impl Route {
    /// Stable route name used by the shell and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Home => "home",
            Route::ResetPassword => "reset_password",
            Route::Profile => "profile",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// String parameters attached to a navigation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: HashMap<String, String>,
}

impl RouteParams {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Read a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Navigation authority the core hands screen transitions to
///
/// Implemented by the UI shell. Calls are fire-and-forget and must return
/// quickly; the shell is responsible for hopping onto its main thread.
pub trait Navigator: Send + Sync {
    /// Push a destination onto the navigation stack
    fn navigate_to(&self, route: Route, params: RouteParams);

    /// Pop back to the previous screen
    fn go_back(&self);

    /// Replace the current stack top, so back cannot return here
    fn replace(&self, route: Route);
}
