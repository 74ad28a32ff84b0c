//! Code Hook Requests
//!
//! The event the conversational platform sends on every dialog turn.
//! Only `currentIntent`, `invocationSource` and `sessionAttributes` drive
//! behavior; the remaining envelope fields are accepted and kept for logging.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque key-value state the platform persists across turns
pub type SessionAttributes = serde_json::Map<String, serde_json::Value>;

/// Where in the dialog the platform is calling from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Slot validation on every user turn
    DialogCodeHook,
    /// Final fulfillment once all slots are filled
    FulfillmentCodeHook,
    /// Anything else the platform may send; handled as fulfillment
    #[serde(other)]
    Unknown,
}

impl InvocationSource {
    /// Whether this is the validation phase
    pub const fn is_dialog_phase(self) -> bool {
        matches!(self, Self::DialogCodeHook)
    }
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DialogCodeHook => write!(f, "DialogCodeHook"),
            Self::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// User confirmation state of the current intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    None,
    Confirmed,
    Denied,
}

/// Slot name to value mapping for the current intent
///
/// A slot the user has not filled yet is present with a `null` value.
/// Slots this crate knows nothing about are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots(BTreeMap<String, Option<String>>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a filled slot value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.as_deref())
    }

    /// Set or replace a slot value
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.insert(name.into(), value);
    }

    /// Reset a slot to unfilled, keeping the key
    pub fn clear(&mut self, name: &str) {
        self.0.insert(name.to_owned(), None);
    }

    /// Builder-style setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Whether the slot key is present at all (filled or not)
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The intent the platform classified the conversation into
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    /// Intent name, used for dispatch
    pub name: String,

    /// Slot values collected so far
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<ConfirmationStatus>,
}

/// Bot that produced the event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A single code hook invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,

    pub invocation_source: InvocationSource,

    /// Passed back unchanged in every response; may be `null`
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<HashMap<String, String>>,
}

impl IntentRequest {
    /// Create a request with no slots and no session attributes
    pub fn new(intent_name: impl Into<String>, source: InvocationSource) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots: Slots::new(),
                confirmation_status: None,
            },
            invocation_source: source,
            session_attributes: None,
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
            request_attributes: None,
        }
    }

    /// Replace the slot mapping
    pub fn with_slots(mut self, slots: Slots) -> Self {
        self.current_intent.slots = slots;
        self
    }

    /// Add a session attribute
    pub fn with_session_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.session_attributes
            .get_or_insert_with(SessionAttributes::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    /// Slot value lookup shortcut
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent.slots.get(name)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
