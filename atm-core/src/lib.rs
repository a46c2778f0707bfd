//! ATM Core - account session logic for a terminal ATM
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Account, amounts, currency display, menu and login rules
//! - **ports**: The `Terminal` trait the session talks through
//! - **services**: `AccountSession`, the login gate and menu loop
//! - **adapters**: Concrete terminals (line-based reader/writer)
//! - **config**: Session and logging settings

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use domain::result::Result;

use config::Config;
use ports::Terminal;
use services::AccountSession;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Account, Currency, MenuChoice, TransactionError};
pub use services::{LoginOutcome, MenuExit, SessionOutcome, TransactionOutcome};

/// Build a logged-out session for `config` on the given terminal
pub fn session_from_config<T: Terminal>(config: &Config, terminal: T) -> Result<AccountSession<T>> {
    let account = config.account()?;
    Ok(AccountSession::new(account, config.currency(), terminal))
}
