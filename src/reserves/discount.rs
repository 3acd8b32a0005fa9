//! Present value discounting at a single annual rate

use super::types::PresentValue;
use crate::assumptions::DEFAULT_DISCOUNT_RATE;
use serde::{Deserialize, Serialize};

/// Compound discounting at a fixed annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discounting {
    /// Annual discount rate (e.g. 0.035 for 3.5%)
    pub annual_rate: f64,
}

impl Discounting {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Discount factor for a payment `years` from now
    ///
    /// Zero or negative terms are not discounted.
    pub fn discount_factor(&self, years: f64) -> f64 {
        if years <= 0.0 {
            1.0
        } else {
            (1.0 + self.annual_rate).powf(-years)
        }
    }

    pub fn present_value(&self, future_value: f64, years: f64) -> PresentValue {
        let discount_factor = self.discount_factor(years);
        let present_value = if years <= 0.0 {
            future_value
        } else {
            future_value * discount_factor
        };

        PresentValue {
            future_value,
            years,
            discount_rate: self.annual_rate,
            discount_factor,
            present_value,
            discount_amount: future_value - present_value,
        }
    }
}

impl Default for Discounting {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOUNT_RATE)
    }
}
