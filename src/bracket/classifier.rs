//! Weighted-score bracket classification

use super::explanation;
use super::types::{Band, BracketInput, BracketResult, ClaimStage, Severity};

/// Investigation longer than this many months is "extended"
pub const EXTENDED_INVESTIGATION_MONTHS: u32 = 12;
/// Investigation longer than this many months is "moderate"
pub const MODERATE_INVESTIGATION_MONTHS: u32 = 6;

pub const WARN_EXTENDED_INVESTIGATION: &str =
    "Extended investigation period (>12 months) increases uncertainty";
pub const WARN_MODERATE_INVESTIGATION: &str = "Moderate investigation period (6-12 months)";
pub const WARN_IBNR: &str = "IBNR claim - higher uncertainty in estimation";
pub const WARN_CATASTROPHIC: &str = "Catastrophic severity - consult senior actuarial team";

/// Rule-based accrual bracket classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketClassifier;

impl BracketClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, input: &BracketInput) -> BracketResult {
        let mut score = 0u32;
        let mut uncertainty = 0.0_f64;
        let mut warnings = Vec::new();

        score += input.claim_stage.weight();
        score += input.severity_bracket.weight();

        let duration = input.investigation_duration_months;
        if duration > EXTENDED_INVESTIGATION_MONTHS {
            score += 2;
            warnings.push(WARN_EXTENDED_INVESTIGATION.to_string());
            uncertainty += 0.25;
        } else if duration > MODERATE_INVESTIGATION_MONTHS {
            score += 1;
            warnings.push(WARN_MODERATE_INVESTIGATION.to_string());
            uncertainty += 0.15;
        }

        if input.ibnr_flag {
            score += 2;
            warnings.push(WARN_IBNR.to_string());
            uncertainty += 0.30;
        }

        match input.claim_stage {
            ClaimStage::Reported => uncertainty += 0.20,
            ClaimStage::UnderInvestigation => uncertainty += 0.15,
            _ => {}
        }

        if input.severity_bracket == Severity::Catastrophic {
            uncertainty += 0.20;
            warnings.push(WARN_CATASTROPHIC.to_string());
        }

        let uncertainty = uncertainty.clamp(0.0, 1.0);
        let bracket = Band::from_score(score);
        let explanation = explanation::render(input, bracket, score, uncertainty, &warnings);

        BracketResult {
            bracket,
            bracket_label: bracket.label().to_string(),
            accrual_level_score: score,
            uncertainty_score: uncertainty,
            warnings,
            explanation,
        }
    }
}
