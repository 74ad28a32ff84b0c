//! Slot Validation
//!
//! Eligibility rules for age and investment amount. Rules run in a fixed
//! order and the first violation is reported.

use std::num::IntErrorKind;

use dialog_core::ValidationResult;

use crate::model::SlotName;

/// Lowest accepted age
pub const MIN_AGE: i64 = 1;

/// Users this age or older are turned away
pub const RETIREMENT_AGE: i64 = 65;

/// Smallest accepted investment amount
pub const MIN_INVESTMENT: i64 = 5000;

const AGE_MISSING: &str = "You must provide your age to use this service. Please provide your age.";
const AGE_TOO_LOW: &str =
    "You must be at least 1 years old to use this service. Please provide a different age.";
const AGE_TOO_HIGH: &str =
    "To use this service, you must not be 65 and older. Please provide a different age.";
const AMOUNT_MISSING: &str = "The investment amount should be equal to or greater than 5000. \
                              Please provide an investment amount.";
const AMOUNT_TOO_LOW: &str = "The investment amount should be equal to or greater than 5000. \
                              Please provide a different investment amount.";

/// A numeric slot after parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotNumber {
    /// Slot not filled
    Absent,
    /// Slot filled with something that is not an integer
    NotANumber,
    Value(i64),
}

impl SlotNumber {
    /// Parse a raw slot value as an integer. Surrounding whitespace is ignored.
    ///
    /// Integers too large for `i64` saturate, so they still compare on the
    /// correct side of every threshold.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return Self::Absent;
        };
        match text.trim().parse::<i64>() {
            Ok(n) => Self::Value(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Self::Value(i64::MAX),
                IntErrorKind::NegOverflow => Self::Value(i64::MIN),
                _ => Self::NotANumber,
            },
        }
    }

    /// Integer value, if there is one
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Value(n) => Some(n),
            Self::Absent | Self::NotANumber => None,
        }
    }
}

/// Validate age and investment amount slot values.
///
/// A value that is not an integer is reported the same way as a missing one.
pub fn validate(age_raw: Option<&str>, investment_amount_raw: Option<&str>) -> ValidationResult {
    let age = SlotNumber::parse(age_raw);
    let amount = SlotNumber::parse(investment_amount_raw);

    let result = check(age, amount);
    if let Some(slot) = result.violated_slot() {
        tracing::debug!(?age, ?amount, violated_slot = slot, "Slot validation failed");
    }
    result
}

fn check(age: SlotNumber, amount: SlotNumber) -> ValidationResult {
    let age_slot = SlotName::Age.as_str();
    let amount_slot = SlotName::InvestmentAmount.as_str();

    let Some(age) = age.value() else {
        return ValidationResult::invalid(age_slot, AGE_MISSING);
    };
    if age < MIN_AGE {
        return ValidationResult::invalid(age_slot, AGE_TOO_LOW);
    }
    if age >= RETIREMENT_AGE {
        return ValidationResult::invalid(age_slot, AGE_TOO_HIGH);
    }

    let Some(amount) = amount.value() else {
        return ValidationResult::invalid(amount_slot, AMOUNT_MISSING);
    };
    if amount < MIN_INVESTMENT {
        return ValidationResult::invalid(amount_slot, AMOUNT_TOO_LOW);
    }

    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violated(age: &str, amount: &str) -> Option<String> {
        validate(Some(age), Some(amount))
            .violated_slot()
            .map(str::to_owned)
    }

    #[test]
    fn test_parse_slot_number() {
        assert_eq!(SlotNumber::parse(None), SlotNumber::Absent);
        assert_eq!(SlotNumber::parse(Some(" 42 ")), SlotNumber::Value(42));
        assert_eq!(SlotNumber::parse(Some("-3")), SlotNumber::Value(-3));
        assert_eq!(SlotNumber::parse(Some("abc")), SlotNumber::NotANumber);
        assert_eq!(SlotNumber::parse(Some("30.5")), SlotNumber::NotANumber);
        assert_eq!(SlotNumber::parse(Some("")), SlotNumber::NotANumber);
    }

    #[test]
    fn test_out_of_range_integers_saturate() {
        let huge = "100000000000000000000";
        let huge_negative = "-100000000000000000000";
        assert_eq!(SlotNumber::parse(Some(huge)), SlotNumber::Value(i64::MAX));
        assert_eq!(SlotNumber::parse(Some(huge_negative)), SlotNumber::Value(i64::MIN));
        assert_eq!(SlotNumber::parse(Some("1e30")), SlotNumber::NotANumber);

        assert!(validate(Some("30"), Some(huge)).is_valid());

        let old = validate(Some(huge), Some("10000"));
        assert_eq!(old.violated_slot(), Some("age"));
        assert_eq!(old.message().unwrap().content, AGE_TOO_HIGH);

        let young = validate(Some(huge_negative), Some("10000"));
        assert_eq!(young.violated_slot(), Some("age"));
        assert_eq!(young.message().unwrap().content, AGE_TOO_LOW);

        let short = validate(Some("30"), Some(huge_negative));
        assert_eq!(short.violated_slot(), Some("investmentAmount"));
        assert_eq!(short.message().unwrap().content, AMOUNT_TOO_LOW);
    }

    #[test]
    fn test_non_positive_age_rejected() {
        for age in ["0", "-1", "-120"] {
            let result = validate(Some(age), Some("10000"));
            assert!(!result.is_valid());
            assert_eq!(result.violated_slot(), Some("age"));
            assert_eq!(result.message().unwrap().content, AGE_TOO_LOW);
        }
    }

    #[test]
    fn test_eligible_ages_and_amounts_accepted() {
        for age in 1..=64 {
            for amount in [5000, 5001, 10_000, 1_000_000] {
                let result = validate(Some(&age.to_string()), Some(&amount.to_string()));
                assert!(result.is_valid(), "age {age} amount {amount}");
                assert!(result.violated_slot().is_none());
                assert!(result.message().is_none());
            }
        }
    }

    #[test]
    fn test_age_65_and_over_rejected_regardless_of_amount() {
        for age in ["65", "66", "100"] {
            for amount in ["0", "4999", "5000", "abc"] {
                assert_eq!(violated(age, amount).as_deref(), Some("age"));
            }
            let result = validate(Some(age), None);
            assert_eq!(result.message().unwrap().content, AGE_TOO_HIGH);
        }
    }

    #[test]
    fn test_small_amount_rejected() {
        for amount in ["4999", "0", "-5000"] {
            let result = validate(Some("30"), Some(amount));
            assert_eq!(result.violated_slot(), Some("investmentAmount"));
            assert_eq!(result.message().unwrap().content, AMOUNT_TOO_LOW);
        }
    }

    #[test]
    fn test_missing_values() {
        let no_age = validate(None, Some("10000"));
        assert_eq!(no_age.violated_slot(), Some("age"));
        assert_eq!(no_age.message().unwrap().content, AGE_MISSING);

        let no_amount = validate(Some("30"), None);
        assert_eq!(no_amount.violated_slot(), Some("investmentAmount"));
        assert_eq!(no_amount.message().unwrap().content, AMOUNT_MISSING);
    }

    #[test]
    fn test_non_numeric_values_never_pass() {
        assert_eq!(violated("abc", "10000").as_deref(), Some("age"));
        assert_eq!(violated("abc", "abc").as_deref(), Some("age"));
        assert_eq!(violated("30", "lots").as_deref(), Some("investmentAmount"));
    }

    #[test]
    fn test_age_checked_before_amount() {
        // 10 is an eligible age, so the amount is what gets flagged
        assert_eq!(violated("10", "3000").as_deref(), Some("investmentAmount"));
        assert_eq!(violated("0", "3000").as_deref(), Some("age"));
        assert_eq!(violated("70", "3000").as_deref(), Some("age"));
    }
}
