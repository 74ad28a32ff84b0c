//! RecommendPortfolio Intent
//!
//! Validation phase: check age and investment amount, re-prompt for the first
//! bad slot or delegate back to the platform.
//! Fulfillment phase: close the dialog with the allocation for the chosen
//! risk level.

use dialog_core::{
    DialogResponse, FulfillmentState, IntentHandler, IntentRequest, Message, Result,
    request::CurrentIntent,
};

use crate::model::SlotName;
use crate::recommendation::recommend;
use crate::validation::validate;

/// Intent name configured on the bot
pub const INTENT_NAME: &str = "RecommendPortfolio";

/// Handler for the `RecommendPortfolio` intent
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendPortfolio;

impl RecommendPortfolio {
    fn validate_slots(request: IntentRequest) -> DialogResponse {
        let verdict = validate(
            request.slot(SlotName::Age.as_str()),
            request.slot(SlotName::InvestmentAmount.as_str()),
        );

        let IntentRequest {
            current_intent: CurrentIntent { name, mut slots, .. },
            session_attributes,
            ..
        } = request;

        match verdict.into_violation() {
            Some((slot, message)) => {
                tracing::info!(violated_slot = %slot, "Re-eliciting slot");
                slots.clear(&slot);
                DialogResponse::re_elicit(session_attributes, name, slots, slot, message)
            }
            None => DialogResponse::delegate(session_attributes, slots),
        }
    }

    fn fulfill(request: IntentRequest) -> DialogResponse {
        let risk_level = request.slot(SlotName::RiskLevel.as_str());
        let recommendation = recommend(risk_level);
        if recommendation.is_none() {
            tracing::warn!(risk_level, "No recommendation for risk level");
        }

        let content = closing_message(
            request.slot(SlotName::FirstName.as_str()).unwrap_or_default(),
            recommendation.as_deref().unwrap_or_default(),
        );

        DialogResponse::close(
            request.session_attributes,
            FulfillmentState::Fulfilled,
            Message::plain_text(content),
        )
    }
}

impl IntentHandler for RecommendPortfolio {
    fn intent_name(&self) -> &str {
        INTENT_NAME
    }

    fn handle(&self, request: IntentRequest) -> Result<DialogResponse> {
        let response = if request.invocation_source.is_dialog_phase() {
            Self::validate_slots(request)
        } else {
            Self::fulfill(request)
        };

        tracing::debug!(action = response.kind(), "RecommendPortfolio handled");
        Ok(response)
    }
}

/// Final message; an empty `recommendation` leaves the clause blank
fn closing_message(first_name: &str, recommendation: &str) -> String {
    format!(
        "{first_name} Thank you for your information; based on the risk level you defined, \
         my recommendation is to choose an investment portfolio with {recommendation}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialog_core::{DialogAction, InvocationSource, Slots};
    use serde_json::json;

    fn request(source: InvocationSource, slots: Slots) -> IntentRequest {
        IntentRequest::new(INTENT_NAME, source)
            .with_slots(slots)
            .with_session_attribute("channel", "web")
    }

    fn portfolio_slots(age: &str, amount: &str) -> Slots {
        Slots::new()
            .with("firstName", "Jane")
            .with("age", age)
            .with("investmentAmount", amount)
            .with("riskLevel", "Medium")
    }

    #[test]
    fn test_invalid_amount_re_elicits_and_clears_slot() {
        let req = request(InvocationSource::DialogCodeHook, portfolio_slots("10", "3000"));
        let response = RecommendPortfolio.handle(req).unwrap();

        let DialogAction::ReElicit { intent_name, slots, slot_to_elicit, message } =
            response.dialog_action
        else {
            panic!("expected ElicitSlot");
        };
        assert_eq!(intent_name, INTENT_NAME);
        assert_eq!(slot_to_elicit, "investmentAmount");
        assert!(slots.contains("investmentAmount"));
        assert_eq!(slots.get("investmentAmount"), None);
        assert_eq!(slots.get("age"), Some("10"));
        assert!(message.content.contains("5000"));
        assert_eq!(response.session_attributes.unwrap()["channel"], json!("web"));
    }

    #[test]
    fn test_invalid_age_re_elicits_age_first() {
        let req = request(InvocationSource::DialogCodeHook, portfolio_slots("70", "3000"));
        let response = RecommendPortfolio.handle(req).unwrap();

        assert_eq!(response.kind(), "ElicitSlot");
        match response.dialog_action {
            DialogAction::ReElicit { slots, slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, "age");
                assert_eq!(slots.get("age"), None);
                assert_eq!(slots.get("investmentAmount"), Some("3000"));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_slots_delegate_unchanged() {
        let slots = portfolio_slots("30", "10000");
        let req = request(InvocationSource::DialogCodeHook, slots.clone());
        let response = RecommendPortfolio.handle(req).unwrap();

        assert_eq!(response.dialog_action, DialogAction::Delegate { slots });
        assert_eq!(response.session_attributes.unwrap()["channel"], json!("web"));
    }

    #[test]
    fn test_fulfillment_closes_with_recommendation() {
        let slots = portfolio_slots("30", "10000").with("riskLevel", "High");
        let response = RecommendPortfolio
            .handle(request(InvocationSource::FulfillmentCodeHook, slots))
            .unwrap();

        match response.dialog_action {
            DialogAction::Close { fulfillment_state, message } => {
                assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
                assert!(message.content.starts_with("Jane Thank you for your information;"));
                assert!(message.content.contains("20% bonds (AGG), 80% equities (SPY)"));
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn test_any_other_source_is_fulfillment() {
        let slots = portfolio_slots("30", "10000");
        let response = RecommendPortfolio
            .handle(request(InvocationSource::Unknown, slots))
            .unwrap();
        assert_eq!(response.kind(), "Close");
    }

    #[test]
    fn test_fulfillment_skips_validation() {
        // invalid age is not re-checked once the platform asks for fulfillment
        let slots = portfolio_slots("99", "1");
        let response = RecommendPortfolio
            .handle(request(InvocationSource::FulfillmentCodeHook, slots))
            .unwrap();
        assert_eq!(response.kind(), "Close");
    }

    #[test]
    fn test_missing_risk_level_recommends_all_bonds() {
        let mut slots = portfolio_slots("30", "10000");
        slots.clear("riskLevel");
        let response = RecommendPortfolio
            .handle(request(InvocationSource::FulfillmentCodeHook, slots))
            .unwrap();

        let content = &response.message().unwrap().content;
        assert!(content.ends_with("100% bonds (AGG), 0% equities (SPY)"));
    }

    #[test]
    fn test_unknown_risk_level_leaves_clause_blank() {
        let slots = portfolio_slots("30", "10000").with("riskLevel", "Reckless");
        let response = RecommendPortfolio
            .handle(request(InvocationSource::FulfillmentCodeHook, slots))
            .unwrap();

        let content = &response.message().unwrap().content;
        assert!(content.ends_with("choose an investment portfolio with "));
        assert!(!content.contains("bonds"));
    }
}
