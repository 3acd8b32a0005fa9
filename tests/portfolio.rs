//! End-to-end accrual runs over the shipped assumption tables and sample claims

use approx::assert_relative_eq;
use claim_accrual::claim::load_claims;
use claim_accrual::report;
use claim_accrual::{AccrualCalculator, Assumptions, ClaimSnapshot, PortfolioSummary, RiskLevel};
use std::path::PathBuf;

fn data_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn shipped_calculator() -> AccrualCalculator {
    let assumptions = Assumptions::from_csv_path(&data_path("data/assumptions")).unwrap();
    AccrualCalculator::new(assumptions)
}

#[test]
fn test_sample_portfolio() {
    let claims = load_claims(data_path("data/sample_claims.csv")).unwrap();
    let calculator = shipped_calculator();
    let results = calculator.calculate_batch(&claims);
    let summary = PortfolioSummary::from_results(&results);

    assert_eq!(results.len(), 7);
    let ids: Vec<&str> = results.iter().filter_map(|r| r.claim_id.as_deref()).collect();
    assert_eq!(ids.first(), Some(&"CLM-2026-001"));
    assert_eq!(ids.last(), Some(&"CLM-2026-007"));

    assert_eq!(summary.total_claims, 7);
    assert_eq!(summary.overpaid_claims, 1);
    assert_relative_eq!(summary.total_incurred, 618_000.0);
    assert_relative_eq!(summary.total_paid, 170_500.0);
    assert_relative_eq!(
        summary.total_accrual,
        results.iter().map(|r| r.total_accrual).sum::<f64>(),
        max_relative = 1e-12
    );
    assert_relative_eq!(summary.avg_development_period, 20.0 / 7.0, max_relative = 1e-12);
    assert_eq!(summary, calculator.summarize(&claims));
}

#[test]
fn test_unknown_claim_type_matches_auto() {
    let calculator = shipped_calculator();
    let marine = ClaimSnapshot::new("Marine", 40_000.0, 5_000.0, 1, 1.5, RiskLevel::Medium);
    let auto = ClaimSnapshot::new("Auto", 40_000.0, 5_000.0, 1, 1.5, RiskLevel::Medium);

    let m = calculator.calculate_accrual(&marine);
    let a = calculator.calculate_accrual(&auto);

    assert_eq!(m.claim_type, "Marine");
    assert_eq!(m.cumulative_factor, a.cumulative_factor);
    assert_eq!(m.total_accrual, a.total_accrual);
}

#[test]
fn test_shipped_tables_match_synthetic() {
    let shipped = shipped_calculator();
    let synthetic = AccrualCalculator::default();
    let claim = ClaimSnapshot::new("Liability", 250_000.0, 30_000.0, 0, 3.5, RiskLevel::High);

    assert_eq!(
        shipped.calculate_accrual(&claim),
        synthetic.calculate_accrual(&claim)
    );
}

#[test]
fn test_auto_worked_example() {
    let claim = ClaimSnapshot::new("Auto", 50_000.0, 15_000.0, 0, 0.0, RiskLevel::High);
    let r = AccrualCalculator::default().calculate_accrual(&claim);

    assert_relative_eq!(r.cumulative_factor, 16.574209413342, max_relative = 1e-9);
    assert_relative_eq!(r.ultimate_loss, 828_710.470665, max_relative = 1e-9);
    assert_relative_eq!(r.risk_adjustment, 165_742.094133, max_relative = 1e-9);
    assert_relative_eq!(r.total_accrual, 979_452.564798, max_relative = 1e-9);
}

#[test]
fn test_batch_csv_has_one_row_per_claim() {
    let claims = load_claims(data_path("data/sample_claims.csv")).unwrap();
    let results = shipped_calculator().calculate_batch(&claims);

    let mut buf = Vec::new();
    report::write_accruals(&mut buf, &results).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.lines().count(), claims.len() + 1);
    assert!(text.lines().nth(6).unwrap().starts_with("CLM-2026-006,Auto,9000.0,9500.0,9,"));
}
