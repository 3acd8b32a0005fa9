//! AWS Lambda handler for claim accrual requests
//!
//! Accepts a JSON event tagged by `operation` and returns the serialized result:
//!
//! ```json
//! {"operation": "accrual", "claim": {"claim_type": "Auto", "incurred": 50000, "paid": 15000,
//!  "development_period": 1, "years_to_settlement": 2.0, "risk_level": "High"}}
//! {"operation": "bracket", "input": {"claim_stage": "Evaluated", "severity_bracket": "Severe",
//!  "investigation_duration_months": 8, "ibnr_flag": true}}
//! {"operation": "portfolio", "claims": [...], "discount_rate": 0.04}
//! ```

use claim_accrual::assumptions::DEFAULT_DISCOUNT_RATE;
use claim_accrual::{
    AccrualCalculator, AccrualResult, Assumptions, BracketClassifier, BracketInput, BracketResult,
    ClaimSnapshot, PortfolioSummary,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AccrualRequest {
    Accrual {
        claim: ClaimSnapshot,
        #[serde(default = "default_discount_rate")]
        discount_rate: f64,
    },
    Bracket {
        input: BracketInput,
    },
    Portfolio {
        claims: Vec<ClaimSnapshot>,
        #[serde(default = "default_discount_rate")]
        discount_rate: f64,
    },
}

fn default_discount_rate() -> f64 { DEFAULT_DISCOUNT_RATE }

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub results: Vec<AccrualResult>,
    pub summary: PortfolioSummary,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AccrualResponse {
    Accrual(AccrualResult),
    Bracket(BracketResult),
    Portfolio(PortfolioResponse),
}

fn calculator(discount_rate: f64) -> AccrualCalculator {
    AccrualCalculator::new(Assumptions::synthetic().with_discount_rate(discount_rate))
}

fn dispatch(request: AccrualRequest) -> AccrualResponse {
    match request {
        AccrualRequest::Accrual { claim, discount_rate } => {
            AccrualResponse::Accrual(calculator(discount_rate).calculate_accrual(&claim))
        }
        AccrualRequest::Bracket { input } => {
            AccrualResponse::Bracket(BracketClassifier::new().classify(&input))
        }
        AccrualRequest::Portfolio { claims, discount_rate } => {
            let start = std::time::Instant::now();
            let results = calculator(discount_rate).calculate_batch(&claims);
            let summary = PortfolioSummary::from_results(&results);
            AccrualResponse::Portfolio(PortfolioResponse {
                results,
                summary,
                execution_time_ms: start.elapsed().as_millis() as u64,
            })
        }
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<AccrualRequest>) -> Result<AccrualResponse, Error> {
    log::info!("handling request {}", event.context.request_id);
    Ok(dispatch(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
