//! Intent Dispatch
//!
//! Handlers are registered by intent name and looked up per request.
//! A request for an intent nobody registered is a fatal error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialogError, Result};
use crate::request::IntentRequest;
use crate::response::DialogResponse;

/// Intent handler trait - implement once per supported intent
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler answers to
    fn intent_name(&self) -> &str;

    /// Produce the response for one invocation
    fn handle(&self, request: IntentRequest) -> Result<DialogResponse>;
}

/// Registry of intent handlers
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its intent name, replacing any previous one
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.register_arc(Arc::new(handler));
    }

    /// Register a shared handler
    pub fn register_arc(&mut self, handler: Arc<dyn IntentHandler>) {
        let name = handler.intent_name().to_owned();
        self.handlers.insert(name, handler);
    }

    /// Get a handler by intent name
    pub fn get(&self, intent_name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent_name).cloned()
    }

    /// Route a request to the handler for its intent
    pub fn dispatch(&self, request: IntentRequest) -> Result<DialogResponse> {
        let intent_name = request.intent_name();
        tracing::debug!(
            intent = intent_name,
            source = %request.invocation_source,
            "Dispatching intent"
        );

        let handler = self.handlers.get(intent_name).ok_or_else(|| {
            tracing::error!(intent = intent_name, "Unsupported intent");
            DialogError::UnsupportedIntent(intent_name.to_owned())
        })?;

        handler.handle(request)
    }

    /// Registered intent names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
