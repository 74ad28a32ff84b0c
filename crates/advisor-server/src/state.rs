//! Application State

use dialog_core::Dispatcher;

/// Shared application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Intent dispatcher with every supported intent registered
    pub dispatcher: &'static Dispatcher,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dispatcher: portfolio_advisor::dispatcher(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
