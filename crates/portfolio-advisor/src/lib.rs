//! # portfolio-advisor
//!
//! Code hook for a robo-advisor bot. The bot collects a first name, age,
//! investment amount and risk level; this crate validates what the user
//! typed and answers with a fixed two-fund allocation.
//!
//! ## Allocation table
//!
//! ```text
//! ┌─────────────┬──────────────────────────────────────────┐
//! │ riskLevel   │ Recommendation                           │
//! ├─────────────┼──────────────────────────────────────────┤
//! │ (none)      │ 100% bonds (AGG), 0% equities (SPY)      │
//! │ Very Low    │  80% bonds (AGG), 20% equities (SPY)     │
//! │ Low         │  60% bonds (AGG), 40% equities (SPY)     │
//! │ Medium      │  40% bonds (AGG), 60% equities (SPY)     │
//! │ High        │  20% bonds (AGG), 80% equities (SPY)     │
//! │ Very High   │   0% bonds (AGG), 100% equities (SPY)    │
//! └─────────────┴──────────────────────────────────────────┘
//! ```
//!
//! ## Eligibility
//!
//! - Age between 1 and 64 inclusive
//! - Investment amount of at least 5000
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dialog_core::InvocationContext;
//!
//! let response = portfolio_advisor::handle_json(event, &InvocationContext::new())?;
//! ```

pub mod entry;
pub mod intent;
pub mod model;
pub mod recommendation;
pub mod validation;

pub use entry::{default_dispatcher, dispatch, dispatcher, handle, handle_json, handle_with};
pub use intent::{INTENT_NAME, RecommendPortfolio};
pub use model::{Allocation, RiskLevel, SlotName};
pub use recommendation::recommend;
pub use validation::validate;
