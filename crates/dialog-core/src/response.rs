//! Dialog Responses
//!
//! The three dialog actions a code hook can hand back to the platform,
//! plus the validation verdict used to decide between them.

use serde::{Deserialize, Serialize};

use crate::request::{SessionAttributes, Slots};

/// Message payload format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

/// A user-facing message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    /// Create a plain-text message
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

/// Outcome reported with a `Close` action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// What the platform should do next
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Ask the user for `slot_to_elicit` again
    #[serde(rename = "ElicitSlot")]
    ReElicit {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },

    /// Let the platform continue with its own next step
    Delegate { slots: Slots },

    /// End the conversation
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

/// Full code hook response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

impl DialogResponse {
    /// Re-prompt for a slot.
    ///
    /// `slots[slot_to_elicit]` should already be cleared by the caller.
    pub fn re_elicit(
        session_attributes: Option<SessionAttributes>,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: impl Into<String>,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ReElicit {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
            },
        }
    }

    /// Hand control back to the platform
    pub const fn delegate(session_attributes: Option<SessionAttributes>, slots: Slots) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }

    /// Close the dialog with a final message
    pub const fn close(
        session_attributes: Option<SessionAttributes>,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }

    /// Wire name of the dialog action
    pub const fn kind(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ReElicit { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }

    /// Message shown to the user, if this action carries one
    pub const fn message(&self) -> Option<&Message> {
        match &self.dialog_action {
            DialogAction::ReElicit { message, .. } | DialogAction::Close { message, .. } => {
                Some(message)
            }
            DialogAction::Delegate { .. } => None,
        }
    }
}

/// Verdict of a slot validation pass
///
/// Valid results carry neither a violated slot nor a message; invalid
/// results carry both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    violated_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<Message>,
}

impl ValidationResult {
    /// Build a result from raw parts.
    ///
    /// Without `message_text` the serialized result has no `message` key.
    pub fn build(is_valid: bool, violated_slot: Option<&str>, message_text: Option<&str>) -> Self {
        Self {
            is_valid,
            violated_slot: violated_slot.map(str::to_owned),
            message: message_text.map(Message::plain_text),
        }
    }

    /// All checked slots passed
    pub fn valid() -> Self {
        Self::build(true, None, None)
    }

    /// `slot` failed validation; `message` tells the user what to fix
    pub fn invalid(slot: &str, message: &str) -> Self {
        Self::build(false, Some(slot), Some(message))
    }

    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn violated_slot(&self) -> Option<&str> {
        self.violated_slot.as_deref()
    }

    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Split an invalid result into its slot and message
    pub fn into_violation(self) -> Option<(String, Message)> {
        if self.is_valid {
            return None;
        }
        self.violated_slot.zip(self.message)
    }
}
