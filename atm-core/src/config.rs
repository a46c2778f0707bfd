//! Configuration management
//!
//! The ATM needs no files: every setting has a built-in default that can be
//! overridden from the environment, and the CLI layers its flags on top.
//!
//! | Setting           | Variable              | Default       |
//! |-------------------|-----------------------|---------------|
//! | PIN               | `ATM_PIN`             | `1234`        |
//! | Initial balance   | `ATM_INITIAL_BALANCE` | `1000.00`     |
//! | Currency symbol   | `ATM_CURRENCY`        | `₹`           |
//! | Deposit limit     | `ATM_DEPOSIT_LIMIT`   | `10000000.00` |
//! | Log level         | `ATM_LOG_LEVEL`       | `warn`        |
//! | Log format        | `ATM_LOG_FORMAT`      | `pretty`      |

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Currency, DEFAULT_CURRENCY_SYMBOL, MAX_AMOUNT};

pub const DEFAULT_PIN: &str = "1234";
pub const PIN_LENGTH: usize = 4;

/// Logging configuration
///
/// Diagnostics always go to stderr; stdout belongs to the ATM dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

/// ATM configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pin: String,
    pub initial_balance: Decimal,
    pub currency_symbol: String,
    /// Largest amount accepted by a single deposit
    pub deposit_limit: Decimal,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN.to_string(),
            initial_balance: Decimal::new(100_000, 2),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            deposit_limit: Decimal::new(1_000_000_000, 2),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Build config from defaults overridden by `lookup(variable)`
    ///
    /// Numeric values that fail to parse are errors rather than being
    /// silently replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(pin) = lookup("ATM_PIN") {
            config.pin = pin;
        }
        if let Some(balance) = lookup("ATM_INITIAL_BALANCE") {
            config.initial_balance = parse_setting("ATM_INITIAL_BALANCE", &balance)?;
        }
        if let Some(symbol) = lookup("ATM_CURRENCY") {
            config.currency_symbol = symbol;
        }
        if let Some(limit) = lookup("ATM_DEPOSIT_LIMIT") {
            config.deposit_limit = parse_setting("ATM_DEPOSIT_LIMIT", &limit)?;
        }
        if let Some(level) = lookup("ATM_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("ATM_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// Check the settings before a session is built from them
    pub fn validate(&self) -> Result<()> {
        if self.pin.len() != PIN_LENGTH || !self.pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::config(format!(
                "PIN must be exactly {PIN_LENGTH} digits"
            )));
        }
        if self.initial_balance < Decimal::ZERO {
            return Err(Error::config("initial balance cannot be negative"));
        }
        if self.initial_balance > MAX_AMOUNT {
            return Err(Error::config(format!(
                "initial balance cannot exceed {MAX_AMOUNT}"
            )));
        }
        if self.deposit_limit <= Decimal::ZERO {
            return Err(Error::config("deposit limit must be greater than zero"));
        }
        if self.deposit_limit > MAX_AMOUNT {
            return Err(Error::config(format!(
                "deposit limit cannot exceed {MAX_AMOUNT}"
            )));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(Error::config("currency symbol cannot be empty"));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(Error::config(format!(
                "unknown log format '{other}' (expected 'pretty' or 'json')"
            ))),
        }
    }

    /// Create the logged-out account described by this config
    pub fn account(&self) -> Result<Account> {
        self.validate()?;
        let account = Account::new(self.pin.clone(), self.initial_balance)
            .with_deposit_limit(self.deposit_limit);
        account.validate().map_err(Error::config)?;
        Ok(account)
    }

    pub fn currency(&self) -> Currency {
        Currency::new(self.currency_symbol.clone())
    }

    /// Initialize logging for this configuration
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn parse_setting(name: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| Error::config(format!("{name} is not a valid amount: '{value}'")))
}
