//! Loss development patterns by claim type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Claim type whose pattern is used when a requested claim type is unknown
pub const DEFAULT_CLAIM_TYPE: &str = "Auto";

/// Per-period loss development factors for one claim type
///
/// Index 0 is the first development period (the year of occurrence).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPattern {
    factors: Vec<f64>,
}

impl DevelopmentPattern {
    /// Build a pattern, rejecting empty sequences and non-positive factors
    pub fn new(claim_type: &str, factors: Vec<f64>) -> Result<Self> {
        if factors.is_empty() {
            return Err(Error::InvalidPattern {
                claim_type: claim_type.to_string(),
                reason: "pattern has no development periods".to_string(),
            });
        }

        if let Some((idx, factor)) = factors
            .iter()
            .enumerate()
            .find(|(_, f)| !f.is_finite() || **f <= 0.0)
        {
            return Err(Error::InvalidPattern {
                claim_type: claim_type.to_string(),
                reason: format!("factor {} in period {} is not positive", factor, idx + 1),
            });
        }

        Ok(Self { factors })
    }

    /// Pattern that never develops (single factor of 1.0)
    pub fn fully_developed() -> Self {
        Self { factors: vec![1.0] }
    }

    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// Number of development periods
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Index of the final development period
    pub fn last_period(&self) -> u32 {
        self.factors.len().saturating_sub(1) as u32
    }
}

/// Claim type -> development pattern lookup
#[derive(Debug, Clone)]
pub struct DevelopmentFactorTable {
    patterns: BTreeMap<String, DevelopmentPattern>,
    /// Used only when the default claim type itself is missing from `patterns`
    fallback: DevelopmentPattern,
}

impl DevelopmentFactorTable {
    pub fn new(patterns: BTreeMap<String, DevelopmentPattern>) -> Self {
        Self {
            patterns,
            fallback: DevelopmentPattern::fully_developed(),
        }
    }

    /// Synthetic annual LDF patterns for the five demonstration lines of business
    pub fn synthetic() -> Self {
        let raw: [(&str, [f64; 10]); 5] = [
            ("Auto", [3.5, 2.2, 1.5, 1.2, 1.1, 1.05, 1.02, 1.01, 1.005, 1.0]),
            ("Property", [2.8, 1.9, 1.4, 1.15, 1.08, 1.04, 1.02, 1.01, 1.005, 1.0]),
            ("Liability", [5.0, 3.5, 2.5, 1.8, 1.4, 1.2, 1.1, 1.05, 1.02, 1.01]),
            ("Health", [2.0, 1.5, 1.2, 1.1, 1.05, 1.02, 1.01, 1.005, 1.0, 1.0]),
            ("Workers Comp", [4.5, 3.0, 2.2, 1.6, 1.3, 1.15, 1.08, 1.04, 1.02, 1.01]),
        ];

        let patterns = raw
            .iter()
            .map(|(name, factors)| {
                (
                    name.to_string(),
                    DevelopmentPattern {
                        factors: factors.to_vec(),
                    },
                )
            })
            .collect();

        Self::new(patterns)
    }

    /// Pattern for a claim type, falling back to the default claim type's pattern
    pub fn pattern_for(&self, claim_type: &str) -> &DevelopmentPattern {
        if let Some(pattern) = self.patterns.get(claim_type) {
            return pattern;
        }

        log::debug!(
            "unknown claim type '{}', using '{}' development pattern",
            claim_type,
            DEFAULT_CLAIM_TYPE
        );
        self.patterns
            .get(DEFAULT_CLAIM_TYPE)
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, claim_type: &str) -> bool {
        self.patterns.contains_key(claim_type)
    }

    /// Claim types in sorted order
    pub fn claim_types(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DevelopmentPattern)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for DevelopmentFactorTable {
    fn default() -> Self {
        Self::synthetic()
    }
}
