use serde::{Deserialize, Serialize};

use crate::pricing::constants::{
    DEPOSIT_RATE, MAX_PAX, MIN_CUSTOM_PRICE, MIN_PAX, OVERTIME_LIMIT_HOURS,
    OVERTIME_RATE_PER_HOUR,
};

/// Runtime-configurable pricing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub overtime_limit_hours: f64,
    pub overtime_rate_per_hour: f64,
    pub deposit_rate: f64,
    pub min_custom_price: f64,
    pub min_pax: u32,
    pub max_pax: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            overtime_limit_hours: OVERTIME_LIMIT_HOURS,
            overtime_rate_per_hour: OVERTIME_RATE_PER_HOUR,
            deposit_rate: DEPOSIT_RATE,
            min_custom_price: MIN_CUSTOM_PRICE,
            min_pax: MIN_PAX,
            max_pax: MAX_PAX,
        }
    }
}

impl PricingRules {
    /// Deposit rate as a whole percentage, e.g. 50 for 0.50.
    pub fn deposit_percent(&self) -> f64 {
        self.deposit_rate * 100.0
    }
}
