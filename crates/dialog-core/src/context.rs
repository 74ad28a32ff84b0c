//! Invocation Context
//!
//! Per-invocation metadata supplied by the transport. Handlers never read it;
//! it exists so log lines can be correlated with the caller's request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvocationContext {
    /// Transport request identifier
    pub request_id: String,

    /// When the transport received the event
    pub received_at: DateTime<Utc>,
}

impl InvocationContext {
    /// Fresh context with a random request id
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string())
    }

    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            received_at: Utc::now(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
