//! # dialog-core
//!
//! Code-hook contract for a slot-filling conversational platform: the event
//! it sends, the dialog actions it accepts back, and name-based intent
//! dispatch.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐    ┌─────────────┐    ┌────────────────┐
//! │ IntentRequest│───▶│  Dispatcher │───▶│ IntentHandler  │
//! │ (event JSON) │    │ (by intent) │    │ (per intent)   │
//! └──────────────┘    └─────────────┘    └───────┬────────┘
//!                                                │
//!                      ElicitSlot | Delegate | Close
//!                                                ▼
//!                                       ┌────────────────┐
//!                                       │ DialogResponse │
//!                                       └────────────────┘
//! ```
//!
//! Validation failures are ordinary `ElicitSlot` responses. The only fatal
//! path is a request for an intent with no registered handler.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;

pub use context::InvocationContext;
pub use dispatch::{Dispatcher, IntentHandler};
pub use error::{DialogError, Result};
pub use request::{IntentRequest, InvocationSource, SessionAttributes, Slots};
pub use response::{DialogAction, DialogResponse, FulfillmentState, Message, ValidationResult};
