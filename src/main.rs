//! Credit Core CLI
//!
//! Usage:
//!   credit-core score --payment-history 90      Credit score from the five factors
//!   credit-core payoff --debt 5000 --payment 200 Debt payoff time and cost
//!   credit-core schedule --amount 20000 --years 5 Loan amortization schedule
//!   credit-core dashboard                       Score, utilization and best card at a glance
//!
//! Inputs not given on the command line come from `--config` (or the built-in
//! defaults). With `--history`, each calculation is appended to that file.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use credit_core::amortization::AmortizationEngine;
use credit_core::format::{format_percent, format_response};
use credit_core::history::CalculationHistory;
use credit_core::interest::InterestMode;
use credit_core::preferences::Preferences;
use credit_core::request::{
    CalculationRequest, CalculationResponse, DebtPayoffInputs, InterestInputs, LoanInputs,
    RewardInputs, UtilizationInputs,
};
use credit_core::rewards::load_catalog;
use std::path::{Path, PathBuf};

/// Score history shown on the dashboard covers this many days
const SCORE_HISTORY_DAYS: i64 = 365;

/// Credit Core - credit score, interest, payoff and reward calculators
#[derive(Parser)]
#[command(name = "credit-core")]
#[command(about = "Personal finance calculators", long_about = None)]
#[command(version)]
struct Cli {
    /// Preferences JSON file supplying default inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Calculation history JSON file to append to
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Credit score from five factor values (0-100)
    Score {
        #[arg(long)]
        payment_history: Option<f64>,
        /// Utilization factor; lower is better
        #[arg(long)]
        credit_utilization: Option<f64>,
        #[arg(long)]
        credit_history_length: Option<f64>,
        #[arg(long)]
        credit_mix: Option<f64>,
        #[arg(long)]
        new_credit: Option<f64>,
    },

    /// Credit utilization percentage and tier
    Utilization {
        #[arg(long)]
        balance: Option<f64>,
        #[arg(long)]
        limit: Option<f64>,
    },

    /// Compound or simple interest growth
    Interest {
        #[arg(long)]
        principal: Option<f64>,
        /// Annual rate in percent
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        years: Option<f64>,
        /// Compounding periods per year
        #[arg(long)]
        periods: Option<u32>,
        /// compound or simple
        #[arg(long)]
        mode: Option<InterestMode>,
    },

    /// Months and total cost to pay off a debt with a fixed payment
    Payoff {
        #[arg(long)]
        debt: Option<f64>,
        /// Annual rate in percent
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        payment: Option<f64>,
        /// Show the month-by-month balance
        #[arg(long)]
        timeline: bool,
    },

    /// Amortization schedule for a fixed-term loan
    Schedule {
        #[arg(long)]
        amount: Option<f64>,
        /// Annual rate in percent
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
    },

    /// Best reward card for a monthly spending profile
    Rewards {
        #[arg(long)]
        groceries: Option<f64>,
        #[arg(long)]
        gas: Option<f64>,
        #[arg(long)]
        dining: Option<f64>,
        #[arg(long)]
        travel: Option<f64>,
        #[arg(long)]
        other: Option<f64>,
        /// Reward catalog CSV (Name,Groceries,Gas,Dining,Travel,Other)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Score, utilization and best card from the saved preferences
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let prefs = match &cli.config {
        Some(path) => Preferences::from_json_path(path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))?,
        None => Preferences::default(),
    };
    let engine = AmortizationEngine::default();

    let mut history = match &cli.history {
        Some(path) => Some(
            CalculationHistory::load(path, prefs.history_capacity)
                .with_context(|| format!("Failed to load history from {}", path.display()))?,
        ),
        None => None,
    };

    match cli.command {
        Commands::Dashboard => run_dashboard(&prefs, &engine, history.as_mut(), cli.json)?,
        command => {
            let request = build_request(command, &prefs)?;
            let response = request
                .evaluate_with(&engine)
                .with_context(|| format!("{} calculation failed", request.kind()))?;
            print_response(&response, cli.json)?;
            if let Some(history) = history.as_mut() {
                history.record(request, response, Utc::now());
            }
        }
    }

    if let (Some(history), Some(path)) = (&history, &cli.history) {
        save_history(history, path)?;
    }
    Ok(())
}

/// Merge command-line overrides onto the saved preferences
fn build_request(command: Commands, prefs: &Preferences) -> Result<CalculationRequest> {
    let request = match command {
        Commands::Score {
            payment_history,
            credit_utilization,
            credit_history_length,
            credit_mix,
            new_credit,
        } => {
            let mut factors = prefs.factors;
            factors.payment_history = payment_history.unwrap_or(factors.payment_history);
            factors.credit_utilization = credit_utilization.unwrap_or(factors.credit_utilization);
            factors.credit_history_length =
                credit_history_length.unwrap_or(factors.credit_history_length);
            factors.credit_mix = credit_mix.unwrap_or(factors.credit_mix);
            factors.new_credit = new_credit.unwrap_or(factors.new_credit);
            CalculationRequest::Score(factors)
        }
        Commands::Utilization { balance, limit } => {
            CalculationRequest::Utilization(UtilizationInputs {
                current_balance: balance.unwrap_or(prefs.utilization.current_balance),
                credit_limit: limit.unwrap_or(prefs.utilization.credit_limit),
            })
        }
        Commands::Interest {
            principal,
            rate,
            years,
            periods,
            mode,
        } => CalculationRequest::Interest(InterestInputs {
            principal: principal.unwrap_or(prefs.interest.principal),
            annual_rate_percent: rate.unwrap_or(prefs.interest.annual_rate_percent),
            years: years.unwrap_or(prefs.interest.years),
            periods_per_year: periods.unwrap_or(prefs.interest.periods_per_year),
            mode: mode.unwrap_or(prefs.interest.mode),
        }),
        Commands::Payoff {
            debt,
            rate,
            payment,
            timeline,
        } => CalculationRequest::DebtPayoff(DebtPayoffInputs {
            total_debt: debt.unwrap_or(prefs.debt_payoff.total_debt),
            annual_rate_percent: rate.unwrap_or(prefs.debt_payoff.annual_rate_percent),
            monthly_payment: payment.unwrap_or(prefs.debt_payoff.monthly_payment),
            include_timeline: timeline || prefs.debt_payoff.include_timeline,
        }),
        Commands::Schedule {
            amount,
            rate,
            years,
        } => CalculationRequest::LoanSchedule(LoanInputs {
            loan_amount: amount.unwrap_or(prefs.loan.loan_amount),
            annual_rate_percent: rate.unwrap_or(prefs.loan.annual_rate_percent),
            term_years: years.unwrap_or(prefs.loan.term_years),
        }),
        Commands::Rewards {
            groceries,
            gas,
            dining,
            travel,
            other,
            catalog,
        } => {
            let mut spending = prefs.spending;
            spending.groceries = groceries.unwrap_or(spending.groceries);
            spending.gas = gas.unwrap_or(spending.gas);
            spending.dining = dining.unwrap_or(spending.dining);
            spending.travel = travel.unwrap_or(spending.travel);
            spending.other = other.unwrap_or(spending.other);
            let catalog = match catalog {
                Some(path) => Some(load_catalog(&path).with_context(|| {
                    format!("Failed to load reward catalog from {}", path.display())
                })?),
                None => None,
            };
            CalculationRequest::Rewards(RewardInputs { spending, catalog })
        }
        Commands::Dashboard => anyhow::bail!("dashboard runs several calculations"),
    };
    Ok(request)
}

fn print_response(response: &CalculationResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        print!("{}", format_response(response));
    }
    Ok(())
}

fn run_dashboard(
    prefs: &Preferences,
    engine: &AmortizationEngine,
    history: Option<&mut CalculationHistory>,
    json: bool,
) -> Result<()> {
    let requests = [
        CalculationRequest::Score(prefs.factors),
        CalculationRequest::Utilization(prefs.utilization.clone()),
        CalculationRequest::Rewards(RewardInputs {
            spending: prefs.spending,
            catalog: None,
        }),
    ];

    let mut responses = Vec::with_capacity(requests.len());
    for request in &requests {
        let response = request
            .evaluate_with(engine)
            .with_context(|| format!("{} calculation failed", request.kind()))?;
        responses.push(response);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
    } else {
        println!("=== Credit Dashboard ===\n");
        for response in &responses {
            print!("{}", format_response(response));
            println!();
        }
    }

    if let Some(history) = history {
        let now = Utc::now();
        let pruned = history.prune_older_than(now, Duration::days(SCORE_HISTORY_DAYS));
        if pruned > 0 {
            log::info!("dropped {} history entries older than a year", pruned);
        }
        for (request, response) in requests.into_iter().zip(responses) {
            history.record(request, response, now);
        }
        if !json {
            print_score_trend(history);
        }
    }
    Ok(())
}

fn print_score_trend(history: &CalculationHistory) {
    let scores: Vec<_> = history
        .entries()
        .filter_map(|entry| match &entry.response {
            CalculationResponse::Score(report) => Some((entry.recorded_at, report.score)),
            _ => None,
        })
        .collect();

    println!("Score history ({} entries):", scores.len());
    for (at, score) in &scores {
        println!("  {}  {}", at.format("%Y-%m-%d"), score);
    }

    if let (Some(first), Some(last)) = (scores.first(), scores.last()) {
        let change = last.1 as f64 - first.1 as f64;
        let sign = if change >= 0.0 { "+" } else { "" };
        println!(
            "Change: {sign}{} points ({})",
            change,
            format_percent(change / first.1 as f64 * 100.0, 1)
        );
    }
}

fn save_history(history: &CalculationHistory, path: &Path) -> Result<()> {
    history
        .save(path)
        .with_context(|| format!("Failed to save history to {}", path.display()))?;
    log::debug!("saved {} history entries to {}", history.len(), path.display());
    Ok(())
}
