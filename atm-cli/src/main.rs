//! ATM CLI - a PIN-gated ATM session in your terminal

use std::process::ExitCode;

use anyhow::{Context, Result};
use atm_core::config::Config;
use atm_core::SessionOutcome;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

mod console;
mod output;

use console::ConsoleTerminal;

/// ATM - check balance, deposit and withdraw after a PIN login
#[derive(Parser)]
#[command(name = "atm", version, about, long_about = None)]
struct Cli {
    /// Account PIN (4 digits) [env: ATM_PIN]
    #[arg(long)]
    pin: Option<String>,

    /// Opening balance [env: ATM_INITIAL_BALANCE]
    #[arg(long)]
    balance: Option<Decimal>,

    /// Currency symbol for all amounts [env: ATM_CURRENCY]
    #[arg(long)]
    currency: Option<String>,

    /// Largest single deposit accepted [env: ATM_DEPOSIT_LIMIT]
    #[arg(long)]
    deposit_limit: Option<Decimal>,

    /// Hide PIN input when running in a terminal (the PIN prompt is then
    /// drawn on stderr instead of stdout)
    #[arg(long)]
    mask_pin: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Log filter for diagnostics on stderr [env: ATM_LOG_LEVEL]
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format [env: ATM_LOG_FORMAT]
    #[arg(long, value_parser = ["pretty", "json"])]
    log_format: Option<String>,
}

impl Cli {
    /// Whether a flag replaces the environment variable `key`
    fn overrides(&self, key: &str) -> bool {
        match key {
            "ATM_PIN" => self.pin.is_some(),
            "ATM_INITIAL_BALANCE" => self.balance.is_some(),
            "ATM_CURRENCY" => self.currency.is_some(),
            "ATM_DEPOSIT_LIMIT" => self.deposit_limit.is_some(),
            "ATM_LOG_LEVEL" => self.log_level.is_some(),
            "ATM_LOG_FORMAT" => self.log_format.is_some(),
            _ => false,
        }
    }

    /// Environment config with command-line flags applied on top
    ///
    /// Variables replaced by a flag are never read, so a bad value there
    /// does not fail the run.
    fn config(&self) -> Result<Config> {
        let mut config = Config::from_lookup(|key| {
            if self.overrides(key) {
                None
            } else {
                std::env::var(key).ok()
            }
        })
        .context("Failed to load configuration")?;

        if let Some(pin) = &self.pin {
            config.pin = pin.clone();
        }
        if let Some(balance) = self.balance {
            config.initial_balance = balance;
        }
        if let Some(currency) = &self.currency {
            config.currency_symbol = currency.clone();
        }
        if let Some(limit) = self.deposit_limit {
            config.deposit_limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.config()?;
    config.init_logging();
    output::configure_colors(cli.no_color);

    let terminal = ConsoleTerminal::new(cli.mask_pin);
    let mut session = atm_core::session_from_config(&config, terminal)?;
    let outcome = session.run().context("Terminal session failed")?;
    info!(?outcome, "session finished");

    Ok(match outcome {
        SessionOutcome::Completed => ExitCode::SUCCESS,
        SessionOutcome::Locked | SessionOutcome::Abandoned => ExitCode::FAILURE,
    })
}
