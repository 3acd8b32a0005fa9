//! Claim Accrual - rule-based reserve estimation for individual insurance claims
//!
//! This library provides:
//! - Chain ladder projection of incurred losses to ultimate
//! - Risk adjustment by claim risk level
//! - Present value discounting to expected settlement
//! - Per-claim accrual breakdowns, batch runs and portfolio summaries
//! - Symbolic reserve bracket classification (Bands A-E) with uncertainty scoring

pub mod assumptions;
pub mod bracket;
pub mod claim;
pub mod error;
pub mod report;
pub mod reserves;

// Re-export commonly used types
pub use assumptions::{Assumptions, RiskLevel};
pub use bracket::{Band, BracketClassifier, BracketInput, BracketResult, ClaimStage, Severity};
pub use claim::ClaimSnapshot;
pub use error::{Error, Result};
pub use reserves::{AccrualCalculator, AccrualResult, PortfolioSummary};
