//! Recommendation Lookup
//!
//! Static risk level → allocation table.

use crate::model::{Allocation, RiskLevel};

/// Allocation for a risk level slot value.
///
/// No risk level at all gets the all-bonds portfolio; an unrecognized label
/// gets nothing.
pub fn allocation_for(risk_level: Option<&str>) -> Option<Allocation> {
    match risk_level {
        None => Some(Allocation::ALL_BONDS),
        Some(label) => RiskLevel::from_label(label).map(RiskLevel::allocation),
    }
}

/// Recommendation text for a risk level slot value
pub fn recommend(risk_level: Option<&str>) -> Option<String> {
    allocation_for(risk_level).map(|allocation| allocation.to_string())
}
