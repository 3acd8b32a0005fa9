//! Markdown explanation of a bracket classification

use super::classifier::{EXTENDED_INVESTIGATION_MONTHS, MODERATE_INVESTIGATION_MONTHS};
use super::types::{Band, BracketInput, ClaimStage, Severity};
use std::fmt::Write;

const ADVISORY_NOTICE: &str = "\
### Mandatory Human Review

This is a symbolic accrual bracket estimate only. It does not calculate monetary reserve \
amounts, apply company-specific reserving formulas, or consider reinsurance. All outputs \
are synthetic and illustrative; every accrual decision requires review by qualified \
finance or actuarial staff.
";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn stage_note(stage: &ClaimStage) -> &'static str {
    match stage {
        ClaimStage::Closed => "Claim is closed, accrual should reflect final settlement",
        ClaimStage::SettlementNegotiation => {
            "Active settlement discussions, accrual near final amount"
        }
        ClaimStage::Evaluated => "Claim evaluated, accrual based on assessment",
        ClaimStage::UnderInvestigation => {
            "Investigation ongoing, accrual includes development potential"
        }
        _ => "Early stage, accrual includes significant development uncertainty",
    }
}

fn severity_note(severity: &Severity) -> &'static str {
    match severity {
        Severity::Catastrophic => "Catastrophic severity requires maximum reserve consideration",
        Severity::Severe => "Severe claims require elevated reserve levels",
        Severity::Moderate => "Moderate severity with standard reserve approach",
        _ => "Minor severity with lower reserve requirements",
    }
}

fn duration_note(months: u32) -> &'static str {
    if months > EXTENDED_INVESTIGATION_MONTHS {
        "Extended investigation suggests complexity and higher uncertainty"
    } else if months > MODERATE_INVESTIGATION_MONTHS {
        "Moderate investigation period indicates some complexity"
    } else {
        "Standard investigation timeframe"
    }
}

fn ibnr_note(ibnr: bool) -> &'static str {
    if ibnr {
        "Incurred But Not Reported - requires additional reserve margin"
    } else {
        "Reported claim with known details"
    }
}

/// Render the explanation text; identical inputs always give identical text
pub(crate) fn render(
    input: &BracketInput,
    bracket: Band,
    score: u32,
    uncertainty: f64,
    warnings: &[String],
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "### Accrual Bracket Estimation\n");
    let _ = writeln!(out, "**Claim Stage:** {}", input.claim_stage);
    let _ = writeln!(out, "**Severity Bracket:** {}", input.severity_bracket);
    let _ = writeln!(
        out,
        "**Investigation Duration:** {} months",
        input.investigation_duration_months
    );
    let _ = writeln!(out, "**IBNR Flag:** {}\n", yes_no(input.ibnr_flag));
    let _ = writeln!(out, "---\n");
    let _ = writeln!(out, "**Estimated Accrual Bracket:** {}", bracket.label());
    let _ = writeln!(out, "**Accrual Level Score:** {}/10+", score);
    let _ = writeln!(out, "**Uncertainty Score:** {:.2}\n", uncertainty);
    let _ = writeln!(out, "---\n");
    let _ = writeln!(out, "#### Factors Considered:\n");

    let _ = writeln!(
        out,
        "- **Claim Stage ({})**: {}",
        input.claim_stage,
        stage_note(&input.claim_stage)
    );
    let _ = writeln!(
        out,
        "- **Severity ({})**: {}",
        input.severity_bracket,
        severity_note(&input.severity_bracket)
    );
    let _ = writeln!(
        out,
        "- **Investigation Duration ({} months)**: {}",
        input.investigation_duration_months,
        duration_note(input.investigation_duration_months)
    );
    let _ = writeln!(
        out,
        "- **IBNR Status ({})**: {}",
        yes_no(input.ibnr_flag),
        ibnr_note(input.ibnr_flag)
    );

    if !warnings.is_empty() {
        let _ = writeln!(out, "\n---\n\n#### Warnings & Considerations:\n");
        for warning in warnings {
            let _ = writeln!(out, "- {}", warning);
        }
    }

    let _ = write!(out, "\n---\n\n{}", ADVISORY_NOTICE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::BracketClassifier;

    #[test]
    fn test_one_line_per_factor() {
        let input = BracketInput::new("Evaluated", "Severe", 2, false);
        let result = BracketClassifier::new().classify(&input);
        let text = &result.explanation;

        assert!(text.contains("- **Claim Stage (Evaluated)**: Claim evaluated, accrual based on assessment"));
        assert!(text.contains("- **Severity (Severe)**: Severe claims require elevated reserve levels"));
        assert!(text.contains("- **Investigation Duration (2 months)**: Standard investigation timeframe"));
        assert!(text.contains("- **IBNR Status (No)**: Reported claim with known details"));
        assert!(!text.contains("Warnings & Considerations"));
        assert!(text.contains("**Accrual Level Score:** 6/10+"));
        assert!(text.contains("**Uncertainty Score:** 0.00"));
    }

    #[test]
    fn test_warnings_listed_in_order() {
        let input = BracketInput::new("Reported", "Catastrophic", 8, true);
        let result = BracketClassifier::new().classify(&input);
        let text = &result.explanation;

        let section = text
            .find("Warnings & Considerations")
            .expect("warnings section missing");
        let positions: Vec<usize> = result
            .warnings
            .iter()
            .map(|w| text.find(w.as_str()).expect("warning not rendered"))
            .collect();

        assert!(positions.iter().all(|p| *p > section));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_labels_use_fallback_notes() {
        let input = BracketInput::new("Reopened", "Unknown", 0, false);
        let text = BracketClassifier::new().classify(&input).explanation;

        assert!(text.contains("- **Claim Stage (Reopened)**: Early stage"));
        assert!(text.contains("- **Severity (Unknown)**: Minor severity"));
    }
}
