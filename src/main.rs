//! Claim Accrual CLI
//!
//! Command-line interface for single-claim accruals, batch runs and bracket classification

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use claim_accrual::claim::{dates, load_claims};
use claim_accrual::report;
use claim_accrual::{
    AccrualCalculator, Assumptions, BracketClassifier, BracketInput, ClaimSnapshot, RiskLevel,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "claim-accrual", version, about = "Rule-based claim accrual estimation")]
struct Cli {
    /// Directory holding development_patterns.csv and risk_factors.csv
    /// (synthetic tables are used when omitted)
    #[arg(long, global = true)]
    assumptions_dir: Option<PathBuf>,

    /// Annual discount rate
    #[arg(long, global = true, default_value_t = claim_accrual::assumptions::DEFAULT_DISCOUNT_RATE)]
    discount_rate: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the accrual for a single claim
    Accrual(AccrualArgs),
    /// Classify a claim into a symbolic reserve band
    Bracket(BracketArgs),
    /// Run accruals for every claim in a CSV file
    Batch(BatchArgs),
    /// Print the loaded development patterns and risk factors
    Tables,
}

#[derive(Args)]
struct AccrualArgs {
    #[arg(long)]
    claim_id: Option<String>,
    #[arg(long, default_value = "Auto")]
    claim_type: String,
    #[arg(long)]
    incurred: f64,
    #[arg(long, default_value_t = 0.0)]
    paid: f64,
    #[arg(long, default_value = "Medium")]
    risk_level: RiskLevel,

    /// Whole development years since occurrence
    #[arg(long, conflicts_with = "occurrence_date")]
    development_period: Option<u32>,
    /// Years until expected settlement
    #[arg(long, conflicts_with = "settlement_date")]
    years_to_settlement: Option<f64>,

    /// Occurrence date (YYYY-MM-DD)
    #[arg(long)]
    occurrence_date: Option<String>,
    /// Expected settlement date (YYYY-MM-DD)
    #[arg(long)]
    settlement_date: Option<String>,
    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    valuation_date: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BracketArgs {
    #[arg(long, default_value = "Reported")]
    stage: String,
    #[arg(long, default_value = "Moderate")]
    severity: String,
    #[arg(long, default_value_t = 0)]
    duration_months: u32,
    /// Claim is incurred but not reported
    #[arg(long)]
    ibnr: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Claims CSV
    input: PathBuf,
    /// Accrual CSV destination (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_assumptions(cli: &Cli) -> Result<Assumptions> {
    let assumptions = match &cli.assumptions_dir {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::synthetic(),
    };
    Ok(assumptions.with_discount_rate(cli.discount_rate))
}

fn parse_date_arg(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|v| dates::parse_date(v).with_context(|| format!("invalid --{}", name)))
        .transpose()
}

fn build_claim(args: &AccrualArgs) -> Result<ClaimSnapshot> {
    let occurrence = parse_date_arg(args.occurrence_date.as_deref(), "occurrence-date")?;
    let settlement = parse_date_arg(args.settlement_date.as_deref(), "settlement-date")?;
    let valuation = parse_date_arg(args.valuation_date.as_deref(), "valuation-date")?
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut claim = match (occurrence, settlement) {
        (Some(occurrence), Some(settlement)) => ClaimSnapshot::from_dates(
            args.claim_type.as_str(),
            args.incurred,
            args.paid,
            occurrence,
            settlement,
            valuation,
            args.risk_level.clone(),
        ),
        (None, None) => ClaimSnapshot::new(
            args.claim_type.as_str(),
            args.incurred,
            args.paid,
            args.development_period.unwrap_or(0),
            args.years_to_settlement.unwrap_or(0.0),
            args.risk_level.clone(),
        ),
        _ => bail!("--occurrence-date and --settlement-date must be given together"),
    };

    if let Some(id) = &args.claim_id {
        claim = claim.with_id(id.as_str());
    }
    Ok(claim)
}

fn run_accrual(cli: &Cli, args: &AccrualArgs) -> Result<()> {
    let assumptions = load_assumptions(cli)?;
    let discount_rate = assumptions.discount_rate;
    let calculator = AccrualCalculator::new(assumptions);

    let claim = build_claim(args)?;
    let result = calculator.calculate_accrual(&claim);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render_accrual(&result, discount_rate));
    }
    Ok(())
}

fn run_bracket(args: &BracketArgs) -> Result<()> {
    let input = BracketInput::new(
        args.stage.as_str(),
        args.severity.as_str(),
        args.duration_months,
        args.ibnr,
    );
    let result = BracketClassifier::new().classify(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.bracket_label);
        println!("  {}", result.bracket.description());
        println!("  Score: {}  Uncertainty: {:.2}", result.accrual_level_score, result.uncertainty_score);
        println!();
        println!("{}", result.explanation);
    }
    Ok(())
}

fn run_batch(cli: &Cli, args: &BatchArgs) -> Result<()> {
    let start = Instant::now();
    let claims = load_claims(&args.input)
        .with_context(|| format!("reading claims from {}", args.input.display()))?;
    let calculator = AccrualCalculator::new(load_assumptions(cli)?);

    let results = calculator.calculate_batch(&claims);
    let summary = claim_accrual::PortfolioSummary::from_results(&results);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            report::write_accruals(file, &results)?;
            eprintln!("Wrote {} accruals to {}", results.len(), path.display());
        }
        None => report::write_accruals(io::stdout().lock(), &results)?,
    }

    eprintln!("\nPortfolio Summary:");
    eprintln!("{}", report::render_summary(&summary));
    eprintln!("\nCompleted in {:?}", start.elapsed());
    Ok(())
}

fn run_tables(cli: &Cli) -> Result<()> {
    let assumptions = load_assumptions(cli)?;
    let calculator = AccrualCalculator::new(assumptions.clone());

    println!("Development Patterns (LDF / cumulative to ultimate):");
    for (claim_type, pattern) in assumptions.development.iter() {
        println!("  {}", claim_type);
        for (period, factor) in pattern.factors().iter().enumerate() {
            let cumulative = calculator
                .chain_ladder()
                .cumulative_factor(claim_type, period as u32);
            println!("    Year {:>2}: {:>7.4}  {:>9.4}", period, factor, cumulative);
        }
    }

    println!("\nRisk Factors:");
    for (level, factor) in assumptions.risk.iter() {
        println!("  {:<8} {:.2}", level, factor);
    }
    println!("\nDiscount rate: {:.2}%", assumptions.discount_rate * 100.0);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Accrual(args) => run_accrual(&cli, args),
        Command::Bracket(args) => run_bracket(args),
        Command::Batch(args) => run_batch(&cli, args),
        Command::Tables => run_tables(&cli),
    }
}
