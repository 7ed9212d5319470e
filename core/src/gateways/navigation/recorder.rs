//! Recording navigator for tests and headless runs.

use std::sync::Mutex;

use super::r#trait::{Navigator, Route, RouteParams};

/// Navigation requests observed by the recorder
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    NavigateTo { route: Route, params: RouteParams },
    GoBack,
    Replace { route: Route },
}

/// Navigator that records every request instead of moving screens
///
/// Stands in for the UI shell wherever no screens exist: integration
/// tests and headless tooling.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request seen so far, in order
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The most recent request, if any
    pub fn last(&self) -> Option<NavEvent> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route, params: RouteParams) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::NavigateTo { route, params });
    }

    fn go_back(&self) {
        self.events.lock().unwrap().push(NavEvent::GoBack);
    }

    fn replace(&self, route: Route) {
        self.events.lock().unwrap().push(NavEvent::Replace { route });
    }
}
