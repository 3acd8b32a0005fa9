//! Load claim portfolios from CSV

use super::ClaimSnapshot;
use crate::assumptions::RiskLevel;
use crate::error::Result;
use csv::Reader;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the claims file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ClaimID", default)]
    claim_id: Option<String>,
    #[serde(rename = "ClaimType")]
    claim_type: String,
    #[serde(rename = "Incurred")]
    incurred: f64,
    #[serde(rename = "Paid")]
    paid: f64,
    #[serde(rename = "DevelopmentPeriod")]
    development_period: u32,
    #[serde(rename = "YearsToSettlement")]
    years_to_settlement: f64,
    #[serde(rename = "RiskLevel")]
    risk_level: String,
}

impl CsvRow {
    fn into_claim(self) -> ClaimSnapshot {
        ClaimSnapshot {
            claim_id: self.claim_id.filter(|id| !id.trim().is_empty()),
            claim_type: self.claim_type.trim().to_string(),
            incurred: self.incurred,
            paid: self.paid,
            development_period: self.development_period,
            years_to_settlement: self.years_to_settlement,
            risk_level: RiskLevel::from(self.risk_level.trim()),
        }
    }
}

/// Load all claims from a CSV file
pub fn load_claims<P: AsRef<Path>>(path: P) -> Result<Vec<ClaimSnapshot>> {
    let reader = Reader::from_path(path)?;
    collect_claims(reader)
}

/// Load claims from any reader (e.g., string buffer, request body)
pub fn load_claims_from_reader<R: Read>(reader: R) -> Result<Vec<ClaimSnapshot>> {
    collect_claims(Reader::from_reader(reader))
}

fn collect_claims<R: Read>(mut reader: Reader<R>) -> Result<Vec<ClaimSnapshot>> {
    let mut claims = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        claims.push(row.into_claim());
    }

    log::info!("loaded {} claims", claims.len());
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ClaimID,ClaimType,Incurred,Paid,DevelopmentPeriod,YearsToSettlement,RiskLevel
CLM-001,Auto,50000,15000,0,2.5,Medium
CLM-002,Liability,120000,20000,3,4,High
,Marine,8000,8000,1,0,Unrated
";

    #[test]
    fn test_load_claims_from_reader() {
        let claims = load_claims_from_reader(SAMPLE.as_bytes()).expect("Failed to load claims");
        assert_eq!(claims.len(), 3);

        let c1 = &claims[0];
        assert_eq!(c1.claim_id.as_deref(), Some("CLM-001"));
        assert_eq!(c1.claim_type, "Auto");
        assert_eq!(c1.incurred, 50_000.0);
        assert_eq!(c1.years_to_settlement, 2.5);
        assert_eq!(c1.risk_level, RiskLevel::Medium);

        let c3 = &claims[2];
        assert!(c3.claim_id.is_none());
        assert_eq!(c3.risk_level, RiskLevel::Other("Unrated".to_string()));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "ClaimID,ClaimType,Incurred,Paid,DevelopmentPeriod,YearsToSettlement,RiskLevel\n\
                    X,Auto,abc,0,0,0,Low\n";
        assert!(load_claims_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_sample_portfolio_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_claims.csv");
        let claims = load_claims(path).expect("Failed to load sample claims");
        assert!(!claims.is_empty());
    }
}
