//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Dialog hook error types
///
/// Slot validation failures are not errors: they are answered with an
/// `ElicitSlot` response. Everything here terminates the invocation.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler registered for the requested intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Event payload did not match the code-hook contract
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialogError {
    /// Stable machine-readable code for transport adapters
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            Self::Json(_) => "INVALID_EVENT",
        }
    }

    /// Whether resending the same event could succeed
    ///
    /// Both failures depend only on the event, so a retry sees the same error.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::UnsupportedIntent(_) | Self::Json(_) => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedIntent(name) => {
                format!("The request '{name}' is not something this bot can help with.")
            }
            Self::Json(_) => "The request could not be understood.".into(),
        }
    }
}
