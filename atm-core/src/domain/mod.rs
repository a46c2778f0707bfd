//! Core domain entities
//!
//! Pure data structures with validation logic. No terminal I/O happens here.

mod account;
mod amount;
mod login;
mod menu;
mod money;
pub mod result;

pub use account::{Account, TransactionError};
pub use amount::{parse_amount, AmountError};
pub use login::{LoginAttempts, MAX_PIN_ATTEMPTS};
pub use menu::{MenuChoice, MenuChoiceError, MENU_TEXT};
pub use money::{Currency, DEFAULT_CURRENCY_SYMBOL, MAX_AMOUNT};
