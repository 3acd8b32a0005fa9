//! Claim reserve estimation for the liability for incurred claims
//!
//! The accrual for a claim is built in a fixed sequence:
//! 1. **Chain ladder**: incurred loss x cumulative development factor = ultimate loss
//! 2. **Outstanding**: ultimate less paid to date
//! 3. **Risk adjustment**: a percentage of ultimate keyed by risk level
//! 4. **Discounting**: ultimate and outstanding each discounted to present value
//! 5. **Total accrual**: PV of outstanding plus risk adjustment
//!
//! Every step is a pure function of its inputs and the assumption tables. Unknown claim
//! types and risk levels fall back to defaults rather than failing.
//!
//! # Example
//!
//! ```rust
//! use claim_accrual::{AccrualCalculator, Assumptions, ClaimSnapshot, RiskLevel};
//!
//! let calculator = AccrualCalculator::new(Assumptions::synthetic());
//! let claim = ClaimSnapshot::new("Auto", 50_000.0, 15_000.0, 1, 2.0, RiskLevel::Medium);
//! let result = calculator.calculate_accrual(&claim);
//! assert!(result.total_accrual > 0.0);
//! ```

mod types;
mod chain_ladder;
mod risk_adjustment;
mod discount;
mod accrual;

pub use types::{
    UltimateEstimate,
    RiskAdjustmentResult,
    PresentValue,
    AccrualResult,
    PortfolioSummary,
};

pub use chain_ladder::ChainLadder;
pub use risk_adjustment::RiskAdjustment;
pub use discount::Discounting;
pub use accrual::AccrualCalculator;
