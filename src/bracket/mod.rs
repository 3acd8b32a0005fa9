//! Symbolic accrual bracket classification
//!
//! Maps claim stage, severity, investigation duration and the IBNR flag to one of five
//! ordinal reserve bands (A to E) without stating a monetary amount. Each attribute adds
//! a fixed weight to an integer score; the score is cut into bands at 3/5/7/9. An
//! uncertainty score in [0, 1] and plain-text warnings accompany every band.

mod types;
mod classifier;
mod explanation;

pub use types::{Band, BracketInput, BracketResult, ClaimStage, Severity};
pub use classifier::{
    BracketClassifier,
    WARN_CATASTROPHIC,
    WARN_EXTENDED_INVESTIGATION,
    WARN_IBNR,
    WARN_MODERATE_INVESTIGATION,
};
