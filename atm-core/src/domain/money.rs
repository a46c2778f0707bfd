//! Currency display

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Largest amount that still has room for two decimal places
///
/// The full 96-bit mantissa at scale 2: 792281625142643375935439503.35.
/// Balances and limits above it cannot be shown with cents.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2);

/// Currency used for all monetary output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    symbol: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Format an amount as `<symbol><amount>` with exactly two decimals
    ///
    /// Amounts up to `MAX_AMOUNT` keep both decimals.
    pub fn format(&self, amount: Decimal) -> String {
        let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        format!("{}{}", self.symbol, cents)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}
