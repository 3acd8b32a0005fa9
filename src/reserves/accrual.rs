//! Claim accrual: chain ladder -> risk adjustment -> discounting

use super::chain_ladder::ChainLadder;
use super::discount::Discounting;
use super::risk_adjustment::RiskAdjustment;
use super::types::{AccrualResult, PortfolioSummary};
use crate::assumptions::Assumptions;
use crate::claim::ClaimSnapshot;
use rayon::prelude::*;

/// Liability-for-incurred-claims accrual calculator
#[derive(Debug, Clone)]
pub struct AccrualCalculator {
    chain_ladder: ChainLadder,
    risk_adjustment: RiskAdjustment,
    discounting: Discounting,
}

impl AccrualCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self {
            chain_ladder: ChainLadder::new(assumptions.development),
            risk_adjustment: RiskAdjustment::new(assumptions.risk),
            discounting: Discounting::new(assumptions.discount_rate),
        }
    }

    pub fn from_parts(
        chain_ladder: ChainLadder,
        risk_adjustment: RiskAdjustment,
        discounting: Discounting,
    ) -> Self {
        Self {
            chain_ladder,
            risk_adjustment,
            discounting,
        }
    }

    pub fn chain_ladder(&self) -> &ChainLadder {
        &self.chain_ladder
    }

    pub fn risk_adjustment(&self) -> &RiskAdjustment {
        &self.risk_adjustment
    }

    pub fn discounting(&self) -> &Discounting {
        &self.discounting
    }

    /// Full accrual breakdown for one claim
    pub fn calculate_accrual(&self, claim: &ClaimSnapshot) -> AccrualResult {
        // Step 1: project incurred to ultimate
        let ultimate = self.chain_ladder.estimate_ultimate(
            claim.incurred,
            &claim.claim_type,
            claim.development_period,
        );

        // Step 2: outstanding (not floored; negative means paid exceeds ultimate)
        let outstanding = ultimate.ultimate_loss - claim.paid;

        // Step 3: risk adjustment on the undiscounted ultimate
        let risk = self
            .risk_adjustment
            .calculate(ultimate.ultimate_loss, &claim.risk_level);

        // Step 4: discount ultimate and outstanding independently
        let pv_ultimate = self
            .discounting
            .present_value(ultimate.ultimate_loss, claim.years_to_settlement);
        let pv_outstanding = self
            .discounting
            .present_value(outstanding, claim.years_to_settlement);

        // Step 5
        let total_accrual = pv_outstanding.present_value + risk.risk_adjustment;

        AccrualResult {
            claim_id: claim.claim_id.clone(),
            claim_type: claim.claim_type.clone(),
            incurred: claim.incurred,
            paid: claim.paid,
            development_period: claim.development_period,
            years_to_settlement: claim.years_to_settlement,
            risk_level: claim.risk_level.clone(),
            cumulative_factor: ultimate.cumulative_factor,
            ultimate_loss: ultimate.ultimate_loss,
            ibnr: ultimate.ibnr,
            outstanding_claims: outstanding,
            risk_factor: risk.risk_factor,
            risk_adjustment: risk.risk_adjustment,
            discount_factor: pv_ultimate.discount_factor,
            pv_ultimate: pv_ultimate.present_value,
            pv_outstanding: pv_outstanding.present_value,
            discount_amount: pv_ultimate.discount_amount,
            total_accrual,
        }
    }

    /// Accruals for many claims, in input order
    ///
    /// Claims are independent, so the map runs in parallel.
    pub fn calculate_batch(&self, claims: &[ClaimSnapshot]) -> Vec<AccrualResult> {
        log::info!("calculating accruals for {} claims", claims.len());
        claims
            .par_iter()
            .map(|claim| self.calculate_accrual(claim))
            .collect()
    }

    /// Portfolio totals for raw claims (computes the batch first)
    pub fn summarize(&self, claims: &[ClaimSnapshot]) -> PortfolioSummary {
        PortfolioSummary::from_results(&self.calculate_batch(claims))
    }
}

impl Default for AccrualCalculator {
    fn default() -> Self {
        Self::new(Assumptions::synthetic())
    }
}
