//! CSV-based assumption loader
//!
//! Loads development patterns and risk factors from CSV files in data/assumptions/

use super::development::{DevelopmentFactorTable, DevelopmentPattern};
use super::risk::RiskFactorTable;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const DEVELOPMENT_PATTERNS_FILE: &str = "development_patterns.csv";
pub const RISK_FACTORS_FILE: &str = "risk_factors.csv";

/// One factor of one development pattern (long format, periods 1-indexed)
#[derive(Debug, serde::Deserialize)]
struct PatternRow {
    #[serde(rename = "ClaimType")]
    claim_type: String,
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Factor")]
    factor: f64,
}

#[derive(Debug, serde::Deserialize)]
struct RiskFactorRow {
    #[serde(rename = "RiskLevel")]
    risk_level: String,
    #[serde(rename = "Factor")]
    factor: f64,
}

/// Load development patterns from `development_patterns.csv` in `path`
pub fn load_development_patterns(path: &Path) -> Result<DevelopmentFactorTable> {
    let file = File::open(path.join(DEVELOPMENT_PATTERNS_FILE))?;
    load_development_patterns_from_reader(file)
}

/// Load development patterns from any reader
///
/// Every claim type must cover periods 1..=n without gaps.
pub fn load_development_patterns_from_reader<R: Read>(reader: R) -> Result<DevelopmentFactorTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_type: BTreeMap<String, BTreeMap<u32, f64>> = BTreeMap::new();

    for result in csv_reader.deserialize() {
        let row: PatternRow = result?;
        let claim_type = row.claim_type.trim().to_string();
        let periods = by_type.entry(claim_type.clone()).or_default();
        if periods.insert(row.period, row.factor).is_some() {
            log::warn!(
                "duplicate factor for '{}' period {}; keeping the later row",
                claim_type,
                row.period
            );
        }
    }

    let mut patterns = BTreeMap::new();
    for (claim_type, periods) in by_type {
        for (expected, period) in (1u32..).zip(periods.keys()) {
            if *period != expected {
                return Err(Error::InvalidPattern {
                    claim_type,
                    reason: format!("missing development period {}", expected),
                });
            }
        }

        let factors: Vec<f64> = periods.into_values().collect();
        let pattern = DevelopmentPattern::new(&claim_type, factors)?;
        patterns.insert(claim_type, pattern);
    }

    log::info!("loaded {} development patterns", patterns.len());
    Ok(DevelopmentFactorTable::new(patterns))
}

/// Load risk factors from `risk_factors.csv` in `path`
pub fn load_risk_factors(path: &Path) -> Result<RiskFactorTable> {
    let file = File::open(path.join(RISK_FACTORS_FILE))?;
    load_risk_factors_from_reader(file)
}

/// Load risk factors from any reader
pub fn load_risk_factors_from_reader<R: Read>(reader: R) -> Result<RiskFactorTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut factors = BTreeMap::new();

    for result in csv_reader.deserialize() {
        let row: RiskFactorRow = result?;
        if !row.factor.is_finite() || row.factor < 0.0 {
            return Err(Error::InvalidRiskFactor {
                risk_level: row.risk_level,
                factor: row.factor,
            });
        }
        factors.insert(row.risk_level.trim().to_string(), row.factor);
    }

    log::info!("loaded {} risk factors", factors.len());
    Ok(RiskFactorTable::new(factors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RiskLevel;

    #[test]
    fn test_load_patterns_from_reader() {
        let data = "\
ClaimType,Period,Factor
Marine,2,1.2
Marine,1,1.8
Marine,3,1.0
Cyber,1,2.5
Cyber,2,1.0
";
        let table = load_development_patterns_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.pattern_for("Marine").factors(), &[1.8, 1.2, 1.0]);
        assert_eq!(table.pattern_for("Cyber").factors(), &[2.5, 1.0]);
    }

    #[test]
    fn test_gap_in_periods_rejected() {
        let data = "\
ClaimType,Period,Factor
Marine,1,1.8
Marine,3,1.0
";
        let err = load_development_patterns_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }), "{}", err);
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        let data = "ClaimType,Period,Factor\nMarine,1,0.0\n";
        assert!(load_development_patterns_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_risk_factors_from_reader() {
        let data = "RiskLevel,Factor\nLow,0.04\nHigh,0.25\n";
        let table = load_risk_factors_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.factor(&RiskLevel::Low), 0.04);
        assert_eq!(table.factor(&RiskLevel::High), 0.25);
    }

    #[test]
    fn test_negative_risk_factor_rejected() {
        let data = "RiskLevel,Factor\nLow,-0.04\n";
        let err = load_risk_factors_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidRiskFactor { .. }));
    }

    #[test]
    fn test_shipped_tables_match_synthetic() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSUMPTIONS_PATH);

        let loaded = load_development_patterns(&dir).expect("Failed to load patterns");
        let synthetic = DevelopmentFactorTable::synthetic();
        assert_eq!(loaded.len(), synthetic.len());
        for (claim_type, pattern) in synthetic.iter() {
            assert_eq!(loaded.pattern_for(claim_type), pattern, "{}", claim_type);
        }

        let risk = load_risk_factors(&dir).expect("Failed to load risk factors");
        let expected = crate::assumptions::RiskFactorTable::synthetic();
        for (level, factor) in expected.iter() {
            assert_eq!(risk.factor(&RiskLevel::from(level)), factor);
        }
    }
}
