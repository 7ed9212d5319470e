//! Navigation authority gateway module.

pub mod r#trait;
pub use r#trait::{Navigator, Route, RouteParams};

pub mod recorder;
pub use recorder::{NavEvent, RecordingNavigator};
