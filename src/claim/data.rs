//! Claim snapshot supplied to the accrual calculator

use super::dates;
use crate::assumptions::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a single claim
///
/// Transient: built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    /// Optional caller-supplied identifier, echoed into results
    #[serde(default)]
    pub claim_id: Option<String>,

    /// Key into the development pattern table
    pub claim_type: String,

    /// Current incurred loss (paid + case reserves)
    pub incurred: f64,

    /// Amount already paid
    pub paid: f64,

    /// Whole development years elapsed since occurrence
    pub development_period: u32,

    /// Years until expected settlement
    pub years_to_settlement: f64,

    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl ClaimSnapshot {
    pub fn new(
        claim_type: impl Into<String>,
        incurred: f64,
        paid: f64,
        development_period: u32,
        years_to_settlement: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            claim_id: None,
            claim_type: claim_type.into(),
            incurred,
            paid,
            development_period,
            years_to_settlement,
            risk_level,
        }
    }

    /// Build a snapshot from calendar dates as of `valuation_date`
    ///
    /// Development period is whole years since occurrence; time to settlement is the
    /// month count expressed in years. Both are floored at zero.
    pub fn from_dates(
        claim_type: impl Into<String>,
        incurred: f64,
        paid: f64,
        occurrence_date: NaiveDate,
        expected_settlement_date: NaiveDate,
        valuation_date: NaiveDate,
        risk_level: RiskLevel,
    ) -> Self {
        let months_since_occurrence = dates::months_between(occurrence_date, valuation_date);
        let months_to_settlement = dates::months_between(valuation_date, expected_settlement_date);

        Self::new(
            claim_type,
            incurred,
            paid,
            dates::development_years(months_since_occurrence),
            dates::months_to_years(months_to_settlement),
            risk_level,
        )
    }

    pub fn with_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = Some(claim_id.into());
        self
    }
}
