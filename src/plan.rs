//! The purchasable plan catalog.
//!
//! Plans are fixed at build time. Prices are stored as display strings
//! (currency symbol included) because that is what the host screen renders;
//! the integer amount sent to the backend is derived by [`Plan::amount`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{BillingError, Result};

/// Identifier for a purchasable plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanId {
    Monthly,
    Yearly,
}

/// A purchasable premium plan.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub title: &'static str,
    /// Display price, currency symbol included (e.g. "₹299")
    pub price: &'static str,
    pub best_value: bool,
}

impl Plan {
    /// Integer amount for gateway calls, parsed from the display price.
    ///
    /// Strips everything that is not an ASCII digit (the currency symbol)
    /// and requires the remainder to parse as a positive integer.
    pub fn amount(&self) -> Result<u64> {
        let digits: String = self.price.chars().filter(|c| c.is_ascii_digit()).collect();
        let amount: u64 = digits
            .parse()
            .map_err(|_| BillingError::validation(format!("Unparseable plan price: {}", self.price)))?;
        if amount == 0 {
            return Err(BillingError::validation(format!(
                "Plan price must be positive: {}",
                self.price
            )));
        }
        Ok(amount)
    }
}

/// The full plan catalog, in display order.
pub fn plans() -> &'static [Plan] {
    const PLANS: &[Plan] = &[
        Plan {
            id: PlanId::Monthly,
            title: "Monthly Starter",
            price: "₹99",
            best_value: false,
        },
        Plan {
            id: PlanId::Yearly,
            title: "Annual Pro",
            price: "₹299",
            best_value: true,
        },
    ];
    PLANS
}

/// Look up a plan by id.
pub fn find_plan(id: PlanId) -> Option<&'static Plan> {
    plans().iter().find(|p| p.id == id)
}

/// Premium feature bullet points shown by the host screen.
pub fn premium_features() -> &'static [&'static str] {
    &[
        "Resume AI Analysis (Detailed)",
        "Personalized AI Tips",
        "30-Day Study Plan",
        "Unlimited MCQs",
        "AI Career Chat",
        "Ad-Free Experience",
    ]
}
