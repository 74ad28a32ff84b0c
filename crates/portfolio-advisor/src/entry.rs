//! Entry Point
//!
//! What the transport calls once per event.

use std::sync::LazyLock;

use dialog_core::{DialogResponse, Dispatcher, IntentRequest, InvocationContext, Result};

use crate::intent::RecommendPortfolio;

static DISPATCHER: LazyLock<Dispatcher> = LazyLock::new(default_dispatcher);

/// Dispatcher with every intent this bot supports
pub fn default_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(RecommendPortfolio);
    dispatcher
}

/// Shared process-wide dispatcher
pub fn dispatcher() -> &'static Dispatcher {
    &DISPATCHER
}

/// Route a request to its intent handler
pub fn dispatch(request: IntentRequest) -> Result<DialogResponse> {
    DISPATCHER.dispatch(request)
}

/// Handle one code hook event
pub fn handle(event: IntentRequest, context: &InvocationContext) -> Result<DialogResponse> {
    handle_with(dispatcher(), event, context)
}

/// Handle one event with an explicit dispatcher
pub fn handle_with(
    dispatcher: &Dispatcher,
    event: IntentRequest,
    context: &InvocationContext,
) -> Result<DialogResponse> {
    tracing::info!(
        request_id = %context.request_id,
        intent = event.intent_name(),
        source = %event.invocation_source,
        user_id = event.user_id.as_deref(),
        "Handling code hook"
    );
    dispatcher.dispatch(event)
}

/// Handle a raw JSON event and return the raw JSON response
pub fn handle_json(
    event: serde_json::Value,
    context: &InvocationContext,
) -> Result<serde_json::Value> {
    let request: IntentRequest = serde_json::from_value(event)?;
    let response = handle(request, context)?;
    Ok(serde_json::to_value(response)?)
}
