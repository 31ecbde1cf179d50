//! Finance Engine CLI commands
//!
//! JSON in, JSON out front end over the payoff simulator and alert engine.
//! `main.rs` only parses arguments, prints and sets the exit code; every
//! command lives here so it can be driven from tests.
//!
//! Usage:
//!   finance-engine simulate --debts debts.json [--strategy snowball] [--extra 5000] [--isolated]
//!   finance-engine compare  --debts debts.json [--extra 5000]
//!   finance-engine alerts   --aggregates month.json [--settings settings.json] [--thresholds cutoffs.json]

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use finance_engine_core_rs::simulator::BreakdownSource;
use finance_engine_core_rs::{
    validate_debts, Alert, AlertThresholds, ConfigError, DebtForPayoff, FinancialContext,
    FinancialSettings, MonthlyAggregates, PayoffConfig, PayoffSimulation, PayoffSimulator,
    PayoffStrategy, RuleEngine, StrategyComparison, ValidationError,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "finance-engine")]
#[command(version, about = "Debt payoff simulation and financial-health alerts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate one payoff strategy
    Simulate {
        /// JSON file with an array of debts
        #[arg(short, long)]
        debts: PathBuf,

        /// avalanche or snowball
        #[arg(short, long, default_value = "avalanche")]
        strategy: PayoffStrategy,

        /// Extra monthly payment on top of all minimums
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        extra: f64,

        /// Take monthly breakdowns from isolated per-debt replays
        #[arg(long)]
        isolated: bool,
    },

    /// Compare avalanche and snowball and recommend one
    Compare {
        #[arg(short, long)]
        debts: PathBuf,

        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        extra: f64,
    },

    /// Evaluate financial-health alerts for one month
    Alerts {
        /// JSON file with monthly aggregates
        #[arg(short, long)]
        aggregates: PathBuf,

        /// JSON file with user settings (defaults when omitted)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// JSON file with severity cutoffs (defaults when omitted)
        #[arg(short, long)]
        thresholds: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write output: {0}")]
    Output(serde_json::Error),
}

// ============================================================================
// Input / Output
// ============================================================================

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Pretty-printed JSON for stdout
pub fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::Output)
}

// ============================================================================
// Commands
// ============================================================================

/// Validate the debts and run one strategy
pub fn simulate(
    debts: &[DebtForPayoff],
    strategy: PayoffStrategy,
    extra: f64,
    isolated: bool,
) -> Result<PayoffSimulation, CliError> {
    validate_debts(debts, extra)?;

    let config = PayoffConfig {
        breakdown: if isolated {
            BreakdownSource::IsolatedReplay
        } else {
            BreakdownSource::Cascading
        },
        ..PayoffConfig::default()
    };
    debug!("Simulating {} debts with {:?}", debts.len(), config);
    Ok(PayoffSimulator::new(config).simulate(debts, strategy, extra))
}

/// Validate the debts and compare both strategies
pub fn compare(debts: &[DebtForPayoff], extra: f64) -> Result<StrategyComparison, CliError> {
    validate_debts(debts, extra)?;
    Ok(PayoffSimulator::default().compare(debts, extra))
}

/// Validate the settings and evaluate the alert catalogue
pub fn alerts(
    aggregates: &MonthlyAggregates,
    settings: &FinancialSettings,
    thresholds: AlertThresholds,
) -> Result<Vec<Alert>, CliError> {
    settings.validate()?;
    let context = FinancialContext::build(aggregates, settings);
    Ok(RuleEngine::new(thresholds).evaluate(&context))
}

/// Execute a parsed command and return the JSON to print
pub fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Simulate {
            debts,
            strategy,
            extra,
            isolated,
        } => {
            let debts: Vec<DebtForPayoff> = load_json(&debts)?;
            render(&simulate(&debts, strategy, extra, isolated)?)
        }

        Command::Compare { debts, extra } => {
            let debts: Vec<DebtForPayoff> = load_json(&debts)?;
            render(&compare(&debts, extra)?)
        }

        Command::Alerts {
            aggregates,
            settings,
            thresholds,
        } => {
            let aggregates: MonthlyAggregates = load_json(&aggregates)?;
            let settings = match settings {
                Some(path) => FinancialSettings::from_json_str(&read_file(&path)?)?,
                None => FinancialSettings::default(),
            };
            let thresholds = match thresholds {
                Some(path) => AlertThresholds::from_json_str(&read_file(&path)?)?,
                None => AlertThresholds::default(),
            };
            render(&alerts(&aggregates, &settings, thresholds)?)
        }
    }
}
