//! Result types for accrual calculations

use crate::assumptions::RiskLevel;
use serde::{Deserialize, Serialize};

/// Chain ladder projection of one claim to ultimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UltimateEstimate {
    pub incurred: f64,
    pub development_period: u32,
    /// Product of the remaining LDFs (1.0 once fully developed)
    pub cumulative_factor: f64,
    pub ultimate_loss: f64,
    /// Ultimate less incurred
    pub ibnr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjustmentResult {
    pub ultimate_loss: f64,
    pub risk_level: RiskLevel,
    pub risk_factor: f64,
    pub risk_adjustment: f64,
}

/// Present value of a single future amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentValue {
    pub future_value: f64,
    pub years: f64,
    pub discount_rate: f64,
    pub discount_factor: f64,
    pub present_value: f64,
    /// Future value less present value; negative when discounting a negative amount
    pub discount_amount: f64,
}

/// Full accrual breakdown for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    // Echoed inputs
    pub claim_id: Option<String>,
    pub claim_type: String,
    pub incurred: f64,
    pub paid: f64,
    pub development_period: u32,
    pub years_to_settlement: f64,
    pub risk_level: RiskLevel,

    // Chain ladder
    pub cumulative_factor: f64,
    pub ultimate_loss: f64,
    pub ibnr: f64,

    /// Ultimate less paid; negative when paid exceeds the ultimate estimate
    pub outstanding_claims: f64,

    // Risk adjustment
    pub risk_factor: f64,
    pub risk_adjustment: f64,

    // Discounting
    pub discount_factor: f64,
    pub pv_ultimate: f64,
    pub pv_outstanding: f64,
    /// Discount on the ultimate loss
    pub discount_amount: f64,

    /// PV of outstanding claims plus risk adjustment
    pub total_accrual: f64,
}

impl AccrualResult {
    /// Paid to date already exceeds the projected ultimate loss
    pub fn is_overpaid(&self) -> bool {
        self.outstanding_claims < 0.0
    }
}

/// Totals and averages across a batch of accrual results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_claims: usize,
    pub total_incurred: f64,
    pub total_paid: f64,
    pub total_ultimate: f64,
    pub total_ibnr: f64,
    pub total_outstanding: f64,
    pub total_risk_adjustment: f64,
    pub total_discount: f64,
    pub total_accrual: f64,
    pub avg_development_period: f64,
    pub avg_years_to_settlement: f64,
    /// Claims whose paid amount exceeds the ultimate estimate
    pub overpaid_claims: usize,
}

impl PortfolioSummary {
    /// Aggregate already-computed results; averages are 0.0 for an empty batch
    pub fn from_results(results: &[AccrualResult]) -> Self {
        let total_claims = results.len();
        let sum = |f: &dyn Fn(&AccrualResult) -> f64| -> f64 { results.iter().map(f).sum() };

        let mean = |total: f64| {
            if total_claims == 0 {
                0.0
            } else {
                total / total_claims as f64
            }
        };

        Self {
            total_claims,
            total_incurred: sum(&|r| r.incurred),
            total_paid: sum(&|r| r.paid),
            total_ultimate: sum(&|r| r.ultimate_loss),
            total_ibnr: sum(&|r| r.ibnr),
            total_outstanding: sum(&|r| r.outstanding_claims),
            total_risk_adjustment: sum(&|r| r.risk_adjustment),
            total_discount: sum(&|r| r.discount_amount),
            total_accrual: sum(&|r| r.total_accrual),
            avg_development_period: mean(sum(&|r| r.development_period as f64)),
            avg_years_to_settlement: mean(sum(&|r| r.years_to_settlement)),
            overpaid_claims: results.iter().filter(|r| r.is_overpaid()).count(),
        }
    }
}
