//! Claim attributes and bracket outputs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim handling stage, earliest to latest
///
/// Labels outside the five known stages are kept verbatim and weighted as the earliest stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStage {
    Reported,
    UnderInvestigation,
    Evaluated,
    SettlementNegotiation,
    Closed,
    Other(String),
}

impl ClaimStage {
    pub const ALL: [ClaimStage; 5] = [
        ClaimStage::Reported,
        ClaimStage::UnderInvestigation,
        ClaimStage::Evaluated,
        ClaimStage::SettlementNegotiation,
        ClaimStage::Closed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ClaimStage::Reported => "Reported",
            ClaimStage::UnderInvestigation => "Under Investigation",
            ClaimStage::Evaluated => "Evaluated",
            ClaimStage::SettlementNegotiation => "Settlement Negotiation",
            ClaimStage::Closed => "Closed",
            ClaimStage::Other(label) => label.as_str(),
        }
    }

    /// Contribution to the accrual level score
    pub fn weight(&self) -> u32 {
        match self {
            ClaimStage::Reported => 1,
            ClaimStage::UnderInvestigation => 2,
            ClaimStage::Evaluated => 3,
            ClaimStage::SettlementNegotiation => 4,
            ClaimStage::Closed => 5,
            ClaimStage::Other(_) => 1,
        }
    }
}

impl From<&str> for ClaimStage {
    fn from(label: &str) -> Self {
        match label {
            "Reported" => ClaimStage::Reported,
            "Under Investigation" => ClaimStage::UnderInvestigation,
            "Evaluated" => ClaimStage::Evaluated,
            "Settlement Negotiation" => ClaimStage::SettlementNegotiation,
            "Closed" => ClaimStage::Closed,
            other => ClaimStage::Other(other.to_string()),
        }
    }
}

impl From<String> for ClaimStage {
    fn from(label: String) -> Self {
        ClaimStage::from(label.as_str())
    }
}

impl From<ClaimStage> for String {
    fn from(stage: ClaimStage) -> Self {
        stage.as_str().to_string()
    }
}

impl std::str::FromStr for ClaimStage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClaimStage::from(s))
    }
}

impl fmt::Display for ClaimStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assessed claim severity, mildest to most severe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Catastrophic,
    Other(String),
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Severe,
        Severity::Catastrophic,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Catastrophic => "Catastrophic",
            Severity::Other(label) => label.as_str(),
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Severity::Minor => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
            Severity::Catastrophic => 4,
            Severity::Other(_) => 1,
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        match label {
            "Minor" => Severity::Minor,
            "Moderate" => Severity::Moderate,
            "Severe" => Severity::Severe,
            "Catastrophic" => Severity::Catastrophic,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Severity::from(label.as_str())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

impl std::str::FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic reserve band, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    A,
    B,
    C,
    D,
    E,
}

impl Band {
    /// Map an accrual level score to its band
    ///
    /// <=3 A, 4-5 B, 6-7 C, 8-9 D, 10+ E
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=3 => Band::A,
            4..=5 => Band::B,
            6..=7 => Band::C,
            8..=9 => Band::D,
            _ => Band::E,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::A => "Band A (Low Reserve)",
            Band::B => "Band B (Moderate Reserve)",
            Band::C => "Band C (Elevated Reserve)",
            Band::D => "Band D (High Reserve)",
            Band::E => "Band E (Maximum Reserve)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Band::A => "Early stage, minor severity claims",
            Band::B => "Standard claims with moderate characteristics",
            Band::C => "Claims with elevated risk factors",
            Band::D => "Severe claims or extended investigations",
            Band::E => "Catastrophic or highly uncertain claims",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical claim attributes for bracket classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketInput {
    pub claim_stage: ClaimStage,
    pub severity_bracket: Severity,
    pub investigation_duration_months: u32,
    #[serde(default)]
    pub ibnr_flag: bool,
}

impl BracketInput {
    pub fn new(
        claim_stage: impl Into<ClaimStage>,
        severity_bracket: impl Into<Severity>,
        investigation_duration_months: u32,
        ibnr_flag: bool,
    ) -> Self {
        Self {
            claim_stage: claim_stage.into(),
            severity_bracket: severity_bracket.into(),
            investigation_duration_months,
            ibnr_flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketResult {
    pub bracket: Band,
    pub bracket_label: String,
    pub accrual_level_score: u32,
    /// Always within [0, 1]
    pub uncertainty_score: f64,
    pub warnings: Vec<String>,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Band::from_score(0), Band::A);
        assert_eq!(Band::from_score(3), Band::A);
        assert_eq!(Band::from_score(4), Band::B);
        assert_eq!(Band::from_score(5), Band::B);
        assert_eq!(Band::from_score(6), Band::C);
        assert_eq!(Band::from_score(7), Band::C);
        assert_eq!(Band::from_score(8), Band::D);
        assert_eq!(Band::from_score(9), Band::D);
        assert_eq!(Band::from_score(10), Band::E);
        assert_eq!(Band::from_score(11), Band::E);
        assert_eq!(Band::from_score(u32::MAX), Band::E);
    }

    #[test]
    fn test_bands_ordered() {
        let bands: Vec<Band> = (0..=13).map(Band::from_score).collect();
        assert!(bands.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stage_round_trip_labels() {
        for stage in ClaimStage::ALL {
            assert_eq!(ClaimStage::from(stage.as_str()), stage);
        }
        assert_eq!(ClaimStage::from("Reopened").weight(), 1);
    }

    #[test]
    fn test_severity_weights() {
        let weights: Vec<u32> = Severity::ALL.iter().map(Severity::weight).collect();
        assert_eq!(weights, vec![1, 2, 3, 4]);
        assert_eq!(Severity::from("Unknown").weight(), 1);
    }

    #[test]
    fn test_input_deserializes_labels() {
        let json = r#"{
            "claim_stage": "Settlement Negotiation",
            "severity_bracket": "Severe",
            "investigation_duration_months": 8
        }"#;
        let input: BracketInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.claim_stage, ClaimStage::SettlementNegotiation);
        assert_eq!(input.severity_bracket, Severity::Severe);
        assert!(!input.ibnr_flag);
    }
}
