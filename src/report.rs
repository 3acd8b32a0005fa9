//! Presentation of accrual results: component tables, currency formatting and CSV output
//!
//! Figures are rounded here and nowhere else.

use crate::error::Result;
use crate::reserves::{AccrualResult, PortfolioSummary};
use serde::Serialize;
use std::io::Write;

/// Format an amount as `$1,234.56` (negative amounts as `-$1,234.56`)
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// (component, formatted amount) rows for one claim, in presentation order
pub fn component_rows(result: &AccrualResult, discount_rate: f64) -> Vec<(String, String)> {
    vec![
        ("Incurred Loss".to_string(), format_currency(result.incurred)),
        ("Paid Loss".to_string(), format_currency(result.paid)),
        (
            "Ultimate Loss Estimate".to_string(),
            format_currency(result.ultimate_loss),
        ),
        ("IBNR".to_string(), format_currency(result.ibnr)),
        (
            "Outstanding Claims".to_string(),
            format_currency(result.outstanding_claims),
        ),
        (
            format!("Risk Adjustment ({})", result.risk_level),
            format_currency(result.risk_adjustment),
        ),
        (
            format!("Discount @ {:.1}%", discount_rate * 100.0),
            format!("({})", format_currency(result.discount_amount)),
        ),
        ("PV - Ultimate Loss".to_string(), format_currency(result.pv_ultimate)),
        (
            "PV - Outstanding Claims".to_string(),
            format_currency(result.pv_outstanding),
        ),
        ("TOTAL ACCRUAL".to_string(), format_currency(result.total_accrual)),
    ]
}

/// Markdown summary of one claim's accrual
pub fn render_accrual(result: &AccrualResult, discount_rate: f64) -> String {
    let mut out = String::from("## Claim Accrual Estimate\n\n");

    if let Some(id) = &result.claim_id {
        out.push_str(&format!("**Claim ID:** {}  \n", id));
    }
    out.push_str(&format!("**Claim Type:** {}  \n", result.claim_type));
    out.push_str(&format!(
        "**Development Period:** {} years  \n",
        result.development_period
    ));
    out.push_str(&format!(
        "**Time to Settlement:** {:.2} years  \n",
        result.years_to_settlement
    ));
    out.push_str(&format!(
        "**Cumulative Development Factor:** {:.4}\n\n",
        result.cumulative_factor
    ));

    out.push_str("| Component | Amount |\n|-----------|--------|\n");
    for (component, amount) in component_rows(result, discount_rate) {
        out.push_str(&format!("| {} | {} |\n", component, amount));
    }

    if result.is_overpaid() {
        out.push_str("\nNote: paid to date exceeds the ultimate loss estimate; outstanding claims are negative.\n");
    }

    out.push_str(
        "\nIllustrative only: synthetic development patterns and simplified assumptions. \
         Not for financial reporting.\n",
    );
    out
}

/// Plain-text portfolio summary
pub fn render_summary(summary: &PortfolioSummary) -> String {
    let lines = [
        format!("  Claims:                {}", summary.total_claims),
        format!("  Total Incurred:        {}", format_currency(summary.total_incurred)),
        format!("  Total Paid:            {}", format_currency(summary.total_paid)),
        format!("  Total Ultimate:        {}", format_currency(summary.total_ultimate)),
        format!("  Total IBNR:            {}", format_currency(summary.total_ibnr)),
        format!("  Total Outstanding:     {}", format_currency(summary.total_outstanding)),
        format!("  Total Risk Adjustment: {}", format_currency(summary.total_risk_adjustment)),
        format!("  Total Discount:        {}", format_currency(summary.total_discount)),
        format!("  Total Accrual:         {}", format_currency(summary.total_accrual)),
        format!("  Avg Development (yrs): {:.2}", summary.avg_development_period),
        format!("  Avg To Settlement:     {:.2}", summary.avg_years_to_settlement),
        format!("  Overpaid Claims:       {}", summary.overpaid_claims),
    ];
    lines.join("\n")
}

#[derive(Serialize)]
struct AccrualCsvRow<'a> {
    #[serde(rename = "ClaimID")]
    claim_id: &'a str,
    #[serde(rename = "ClaimType")]
    claim_type: &'a str,
    #[serde(rename = "Incurred")]
    incurred: f64,
    #[serde(rename = "Paid")]
    paid: f64,
    #[serde(rename = "DevelopmentPeriod")]
    development_period: u32,
    #[serde(rename = "YearsToSettlement")]
    years_to_settlement: f64,
    #[serde(rename = "RiskLevel")]
    risk_level: &'a str,
    #[serde(rename = "CumulativeFactor")]
    cumulative_factor: f64,
    #[serde(rename = "UltimateLoss")]
    ultimate_loss: f64,
    #[serde(rename = "IBNR")]
    ibnr: f64,
    #[serde(rename = "OutstandingClaims")]
    outstanding_claims: f64,
    #[serde(rename = "RiskAdjustment")]
    risk_adjustment: f64,
    #[serde(rename = "PVUltimate")]
    pv_ultimate: f64,
    #[serde(rename = "PVOutstanding")]
    pv_outstanding: f64,
    #[serde(rename = "DiscountAmount")]
    discount_amount: f64,
    #[serde(rename = "TotalAccrual")]
    total_accrual: f64,
}

impl<'a> From<&'a AccrualResult> for AccrualCsvRow<'a> {
    fn from(r: &'a AccrualResult) -> Self {
        Self {
            claim_id: r.claim_id.as_deref().unwrap_or(""),
            claim_type: &r.claim_type,
            incurred: r.incurred,
            paid: r.paid,
            development_period: r.development_period,
            years_to_settlement: r.years_to_settlement,
            risk_level: r.risk_level.as_str(),
            cumulative_factor: r.cumulative_factor,
            ultimate_loss: r.ultimate_loss,
            ibnr: r.ibnr,
            outstanding_claims: r.outstanding_claims,
            risk_adjustment: r.risk_adjustment,
            pv_ultimate: r.pv_ultimate,
            pv_outstanding: r.pv_outstanding,
            discount_amount: r.discount_amount,
            total_accrual: r.total_accrual,
        }
    }
}

/// Write accrual results as CSV, one row per claim in input order
pub fn write_accruals<W: Write>(writer: W, results: &[AccrualResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(AccrualCsvRow::from(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}
