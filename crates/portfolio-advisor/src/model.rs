//! Domain Models
//!
//! Slot names collected by the bot, the risk levels a user can pick, and the
//! two-fund allocation each level maps to.

use serde::{Deserialize, Serialize};

/// Slots of the `RecommendPortfolio` intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotName {
    FirstName,
    Age,
    InvestmentAmount,
    RiskLevel,
}

impl SlotName {
    /// Slot name as configured on the bot
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Age => "age",
            Self::InvestmentAmount => "investmentAmount",
            Self::RiskLevel => "riskLevel",
        }
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tolerance the user selected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Parse a slot value. Labels are matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Very Low" => Some(Self::VeryLow),
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            "Very High" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Target allocation for this level
    pub const fn allocation(self) -> Allocation {
        match self {
            Self::VeryLow => Allocation::with_bonds(80),
            Self::Low => Allocation::with_bonds(60),
            Self::Medium => Allocation::with_bonds(40),
            Self::High => Allocation::with_bonds(20),
            Self::VeryHigh => Allocation::with_bonds(0),
        }
    }
}

/// Bond fund ticker
pub const BOND_FUND: &str = "AGG";

/// Equity fund ticker
pub const EQUITY_FUND: &str = "SPY";

/// Bond/equity split between the two funds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Percentage in the bond fund
    pub bonds_percent: u8,

    /// Percentage in the equity fund
    pub equities_percent: u8,
}

impl Allocation {
    /// Portfolio used when no risk level was given
    pub const ALL_BONDS: Self = Self::with_bonds(100);

    /// Split with `bonds_percent` in bonds and the rest in equities.
    /// Values above 100 are clamped.
    pub const fn with_bonds(bonds_percent: u8) -> Self {
        let bonds_percent = if bonds_percent > 100 { 100 } else { bonds_percent };
        Self {
            bonds_percent,
            equities_percent: 100 - bonds_percent,
        }
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% bonds ({BOND_FUND}), {}% equities ({EQUITY_FUND})",
            self.bonds_percent, self.equities_percent
        )
    }
}
