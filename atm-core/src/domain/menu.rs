//! Main menu options

use std::str::FromStr;

use thiserror::Error;

/// Menu shown after every completed action
pub const MENU_TEXT: &str = "\n===== ATM MENU =====\n1. Check Balance\n2. Deposit\n3. Withdraw\n4. Exit";

/// An option selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl MenuChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::CheckBalance => "check_balance",
            MenuChoice::Deposit => "deposit",
            MenuChoice::Withdraw => "withdraw",
            MenuChoice::Exit => "exit",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid menu choice: {0:?}")]
pub struct MenuChoiceError(pub String);

impl FromStr for MenuChoice {
    type Err = MenuChoiceError;

    /// Options are matched exactly, surrounding whitespace included
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::CheckBalance),
            "2" => Ok(MenuChoice::Deposit),
            "3" => Ok(MenuChoice::Withdraw),
            "4" => Ok(MenuChoice::Exit),
            other => Err(MenuChoiceError(other.to_string())),
        }
    }
}
