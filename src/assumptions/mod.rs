//! Reserving assumptions: development patterns, risk factors and the discount rate

mod development;
mod risk;
pub mod loader;

pub use development::{DevelopmentFactorTable, DevelopmentPattern, DEFAULT_CLAIM_TYPE};
pub use risk::{RiskFactorTable, RiskLevel, FALLBACK_RISK_FACTOR};

use crate::error::Result;
use std::path::Path;

/// Default annual discount rate (3.5%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.035;

/// Container for all accrual assumptions
///
/// Built once at startup and shared by reference; nothing here changes after construction.
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub development: DevelopmentFactorTable,
    pub risk: RiskFactorTable,
    /// Annual discount rate
    pub discount_rate: f64,
}

impl Assumptions {
    /// Synthetic demonstration tables with the default discount rate
    pub fn synthetic() -> Self {
        Self {
            development: DevelopmentFactorTable::synthetic(),
            risk: RiskFactorTable::synthetic(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self {
            development: loader::load_development_patterns(path)?,
            risk: loader::load_risk_factors(path)?,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        })
    }

    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::synthetic()
    }
}
