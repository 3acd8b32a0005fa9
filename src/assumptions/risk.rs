//! Risk levels and the risk adjustment factor table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Factor applied when a risk level is not in the table (the Medium rate)
pub const FALLBACK_RISK_FACTOR: f64 = 0.10;

/// Uncertainty level of a claim estimate
///
/// Labels outside Low/Medium/High are kept verbatim so they can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Other(label) => label.as_str(),
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Medium
    }
}

impl From<&str> for RiskLevel {
    fn from(label: &str) -> Self {
        match label {
            "Low" => RiskLevel::Low,
            "Medium" => RiskLevel::Medium,
            "High" => RiskLevel::High,
            other => RiskLevel::Other(other.to_string()),
        }
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        RiskLevel::from(label.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RiskLevel::from(s))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk level label -> proportion of ultimate loss held as risk adjustment
#[derive(Debug, Clone)]
pub struct RiskFactorTable {
    factors: BTreeMap<String, f64>,
}

impl RiskFactorTable {
    pub fn new(factors: BTreeMap<String, f64>) -> Self {
        Self { factors }
    }

    /// Low 5%, Medium 10%, High 20%
    pub fn synthetic() -> Self {
        let factors = [("Low", 0.05), ("Medium", 0.10), ("High", 0.20)]
            .iter()
            .map(|(level, factor)| (level.to_string(), *factor))
            .collect();
        Self { factors }
    }

    pub fn factor(&self, risk_level: &RiskLevel) -> f64 {
        match self.factors.get(risk_level.as_str()) {
            Some(factor) => *factor,
            None => {
                log::debug!(
                    "unknown risk level '{}', using fallback factor {}",
                    risk_level,
                    FALLBACK_RISK_FACTOR
                );
                FALLBACK_RISK_FACTOR
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for RiskFactorTable {
    fn default() -> Self {
        Self::synthetic()
    }
}
