//! Chain ladder projection of incurred losses to ultimate

use super::types::UltimateEstimate;
use crate::assumptions::DevelopmentFactorTable;

/// Chain ladder method over a fixed development factor table
#[derive(Debug, Clone)]
pub struct ChainLadder {
    patterns: DevelopmentFactorTable,
}

impl ChainLadder {
    pub fn new(patterns: DevelopmentFactorTable) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &DevelopmentFactorTable {
        &self.patterns
    }

    /// Cumulative development factor from `development_period` to ultimate
    ///
    /// The period is clamped to the pattern; at (or beyond) the last period the claim is
    /// treated as fully developed and the factor is exactly 1.0, whatever the last LDF is.
    /// Unknown claim types use the default pattern.
    pub fn cumulative_factor(&self, claim_type: &str, development_period: u32) -> f64 {
        let pattern = self.patterns.pattern_for(claim_type);
        let last = pattern.last_period();
        let period = development_period.min(last);

        if period >= last {
            return 1.0;
        }

        pattern.factors()[period as usize..].iter().product()
    }

    pub fn estimate_ultimate(
        &self,
        incurred: f64,
        claim_type: &str,
        development_period: u32,
    ) -> UltimateEstimate {
        let cumulative_factor = self.cumulative_factor(claim_type, development_period);
        let ultimate_loss = incurred * cumulative_factor;

        UltimateEstimate {
            incurred,
            development_period,
            cumulative_factor,
            ultimate_loss,
            ibnr: ultimate_loss - incurred,
        }
    }
}

impl Default for ChainLadder {
    fn default() -> Self {
        Self::new(DevelopmentFactorTable::synthetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const AUTO: [f64; 10] = [3.5, 2.2, 1.5, 1.2, 1.1, 1.05, 1.02, 1.01, 1.005, 1.0];

    #[test]
    fn test_auto_period_zero_uses_all_factors() {
        let cl = ChainLadder::default();
        let expected: f64 = AUTO.iter().product();

        let cdf = cl.cumulative_factor("Auto", 0);
        assert_relative_eq!(cdf, expected, max_relative = 1e-12);
        assert!((cdf - 16.5742094133).abs() < 1e-8);
    }

    #[test]
    fn test_auto_ultimate_estimate() {
        let cl = ChainLadder::default();
        let est = cl.estimate_ultimate(50_000.0, "Auto", 0);

        assert!((est.ultimate_loss - 828_710.470665).abs() < 1e-4);
        assert!((est.ibnr - (est.ultimate_loss - 50_000.0)).abs() < 1e-9);
        assert_eq!(est.development_period, 0);
    }

    #[test]
    fn test_mid_pattern_factor() {
        let cl = ChainLadder::default();
        // Period 2: 1.5 * 1.2 * 1.1 * 1.05 * 1.02 * 1.01 * 1.005 * 1.0
        let expected: f64 = AUTO[2..].iter().product();
        assert_relative_eq!(cl.cumulative_factor("Auto", 2), expected, max_relative = 1e-12);
        assert!((expected - 2.152494729).abs() < 1e-8);
    }

    #[test]
    fn test_fully_developed_is_one() {
        let cl = ChainLadder::default();
        for claim_type in ["Auto", "Property", "Liability", "Health", "Workers Comp"] {
            for period in [9, 10, 25, u32::MAX] {
                assert_eq!(cl.cumulative_factor(claim_type, period), 1.0);
            }
        }
    }

    #[test]
    fn test_last_period_ignores_trailing_factor() {
        // Liability ends at 1.01 but the final period still reports 1.0
        let cl = ChainLadder::default();
        assert_eq!(cl.cumulative_factor("Liability", 9), 1.0);
        assert!((cl.cumulative_factor("Liability", 8) - 1.02 * 1.01).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_claim_type_matches_auto() {
        let cl = ChainLadder::default();
        for period in 0..12 {
            assert_eq!(
                cl.estimate_ultimate(50_000.0, "Marine", period),
                cl.estimate_ultimate(50_000.0, "Auto", period)
            );
        }
    }

    #[test]
    fn test_zero_incurred() {
        let cl = ChainLadder::default();
        let est = cl.estimate_ultimate(0.0, "Liability", 0);
        assert_eq!(est.ultimate_loss, 0.0);
        assert_eq!(est.ibnr, 0.0);
    }
}
