//! Risk adjustment for non-financial risk

use super::types::RiskAdjustmentResult;
use crate::assumptions::{RiskFactorTable, RiskLevel};

#[derive(Debug, Clone, Default)]
pub struct RiskAdjustment {
    factors: RiskFactorTable,
}

impl RiskAdjustment {
    pub fn new(factors: RiskFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &RiskFactorTable {
        &self.factors
    }

    /// Risk adjustment as a proportion of ultimate loss
    pub fn calculate(&self, ultimate_loss: f64, risk_level: &RiskLevel) -> RiskAdjustmentResult {
        let risk_factor = self.factors.factor(risk_level);

        RiskAdjustmentResult {
            ultimate_loss,
            risk_level: risk_level.clone(),
            risk_factor,
            risk_adjustment: ultimate_loss * risk_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let ra = RiskAdjustment::default();

        assert!((ra.calculate(100_000.0, &RiskLevel::Low).risk_adjustment - 5_000.0).abs() < 1e-9);
        assert!((ra.calculate(100_000.0, &RiskLevel::Medium).risk_adjustment - 10_000.0).abs() < 1e-9);
        assert!((ra.calculate(100_000.0, &RiskLevel::High).risk_adjustment - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_level_uses_ten_percent() {
        let ra = RiskAdjustment::default();
        let result = ra.calculate(50_000.0, &RiskLevel::from("Extreme"));

        assert_eq!(result.risk_factor, 0.10);
        assert!((result.risk_adjustment - 5_000.0).abs() < 1e-9);
        assert_eq!(result.risk_level.as_str(), "Extreme");
    }

    #[test]
    fn test_negative_ultimate_passes_through() {
        let ra = RiskAdjustment::default();
        let result = ra.calculate(-1_000.0, &RiskLevel::High);
        assert!((result.risk_adjustment + 200.0).abs() < 1e-9);
    }
}
