//! Account domain model

use rust_decimal::Decimal;
use thiserror::Error;

use super::money::MAX_AMOUNT;

/// Why a deposit or withdrawal was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("account is not authenticated")]
    NotAuthenticated,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient balance")]
    InsufficientFunds,

    #[error("amount exceeds the deposit limit of {limit}")]
    LimitExceeded { limit: Decimal },
}

/// The single account served by an ATM session
///
/// Reads and writes of the balance require a successful `log_in` first.
#[derive(Debug, Clone)]
pub struct Account {
    pin: String,
    balance: Decimal,
    authenticated: bool,
    /// Largest single deposit accepted, `None` for `MAX_AMOUNT` only
    deposit_limit: Option<Decimal>,
}

impl Account {
    /// Create a logged-out account
    pub fn new(pin: impl Into<String>, balance: Decimal) -> Self {
        Self {
            pin: pin.into(),
            balance,
            authenticated: false,
            deposit_limit: None,
        }
    }

    /// Cap the amount of a single deposit
    pub fn with_deposit_limit(mut self, limit: Decimal) -> Self {
        self.deposit_limit = Some(limit);
        self
    }

    pub fn deposit_limit(&self) -> Option<Decimal> {
        self.deposit_limit
    }

    /// Validate account data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.pin.is_empty() {
            return Err("PIN cannot be empty");
        }
        if self.balance < Decimal::ZERO {
            return Err("balance cannot be negative");
        }
        if self.balance > MAX_AMOUNT {
            return Err("balance is too large");
        }
        match self.deposit_limit {
            Some(limit) if limit <= Decimal::ZERO => {
                return Err("deposit limit must be greater than zero")
            }
            Some(limit) if limit > MAX_AMOUNT => return Err("deposit limit is too large"),
            _ => {}
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare `candidate` with the PIN and log in on an exact match
    pub fn log_in(&mut self, candidate: &str) -> bool {
        let matched = candidate == self.pin;
        if matched {
            self.authenticated = true;
        }
        matched
    }

    pub fn log_out(&mut self) {
        self.authenticated = false;
    }

    /// Current balance
    pub fn balance(&self) -> Result<Decimal, TransactionError> {
        self.ensure_authenticated()?;
        Ok(self.balance)
    }

    /// Add a positive amount and return the new balance
    ///
    /// The balance never grows past `MAX_AMOUNT`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, TransactionError> {
        self.ensure_authenticated()?;

        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }

        let limit = self.deposit_limit.unwrap_or(MAX_AMOUNT);
        if amount > limit || amount > MAX_AMOUNT - self.balance {
            return Err(TransactionError::LimitExceeded { limit });
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Remove an amount covered by the balance and return the new balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, TransactionError> {
        self.ensure_authenticated()?;

        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(self.balance)
    }

    fn ensure_authenticated(&self) -> Result<(), TransactionError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(TransactionError::NotAuthenticated)
        }
    }
}
