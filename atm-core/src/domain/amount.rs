//! Amount parsing for deposit and withdrawal input

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure to read a monetary amount from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("missing amount")]
    Empty,

    #[error("invalid amount: {0}")]
    NotNumeric(String),
}

/// Parse a user-supplied amount.
///
/// Surrounding whitespace is ignored. Plain decimals and scientific notation
/// (`1e3`) are accepted; `inf`, `nan` and anything outside the decimal range
/// are rejected. The sign is preserved, range checks belong to the account.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    if let Ok(amount) = Decimal::from_str(trimmed) {
        return Ok(amount);
    }

    if trimmed.contains(|c: char| c == 'e' || c == 'E') {
        if let Ok(amount) = Decimal::from_scientific(trimmed) {
            return Ok(amount);
        }
    }

    Err(AmountError::NotNumeric(trimmed.to_string()))
}
