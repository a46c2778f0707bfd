//! Account session - login gate and menu loop
//!
//! One session serves one account for the lifetime of the process:
//! construct, `authenticate`, `run_menu`, drop. Every expected user mistake
//! (wrong PIN, bad amount, unknown option) is answered on the terminal and
//! recovered here; only terminal I/O failures and misuse of the API reach the
//! caller as errors.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::{
    parse_amount, Account, AmountError, Currency, LoginAttempts, MenuChoice, TransactionError,
    MENU_TEXT,
};
use crate::ports::{Terminal, Tone};

pub const PIN_PROMPT: &str = "Enter your 4-digit PIN: ";
pub const CHOICE_PROMPT: &str = "Select an option (1-4): ";

const INVALID_INPUT: &str = "Invalid input. Please enter a numeric value.";

/// Result of the login phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    /// All PIN attempts were used up; the menu must not be shown
    Locked,
    /// Input closed before a correct PIN was entered
    InputClosed,
}

/// Why the menu loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked "Exit"
    LoggedOut,
    /// Input closed; the account was logged out
    InputClosed,
}

/// How a whole session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Locked,
    /// Input closed before login
    Abandoned,
}

/// Result of a single deposit or withdrawal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOutcome {
    /// The amount was applied; carries the amount and the new balance
    Accepted { amount: Decimal, balance: Decimal },
    /// The input was not a number
    InvalidInput(AmountError),
    /// The number was refused by the account
    Refused(TransactionError),
    /// Input closed at the amount prompt
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Deposit,
    Withdraw,
}

impl Operation {
    fn verb(&self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            Operation::Deposit => "deposited",
            Operation::Withdraw => "withdrawn",
        }
    }
}

/// Interactive session for a single account
pub struct AccountSession<T> {
    account: Account,
    currency: Currency,
    terminal: T,
}

impl<T: Terminal> AccountSession<T> {
    pub fn new(account: Account, currency: Currency, terminal: T) -> Self {
        Self {
            account,
            currency,
            terminal,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Log in, then serve the menu until the user leaves
    pub fn run(&mut self) -> Result<SessionOutcome> {
        info!("session started");
        match self.authenticate()? {
            LoginOutcome::Authenticated => {}
            LoginOutcome::Locked => return Ok(SessionOutcome::Locked),
            LoginOutcome::InputClosed => return Ok(SessionOutcome::Abandoned),
        }
        self.run_menu()?;
        Ok(SessionOutcome::Completed)
    }

    /// Ask for the PIN, allowing three attempts in total
    pub fn authenticate(&mut self) -> Result<LoginOutcome> {
        if self.account.is_authenticated() {
            return Ok(LoginOutcome::Authenticated);
        }

        let mut attempts = LoginAttempts::new();
        while !attempts.is_exhausted() {
            let Some(pin) = self.terminal.read_secret(PIN_PROMPT)? else {
                warn!("input closed during login");
                return Ok(LoginOutcome::InputClosed);
            };

            if self.account.log_in(&pin) {
                info!("login succeeded");
                self.terminal.write_line(Tone::Success, "Login successful.")?;
                self.terminal.write_line(Tone::Plain, "")?;
                return Ok(LoginOutcome::Authenticated);
            }

            let remaining = attempts.record_failure();
            warn!(remaining, "incorrect PIN");
            self.terminal.write_line(
                Tone::Warning,
                &format!("Incorrect PIN. Attempts left: {remaining}"),
            )?;
        }

        warn!("PIN attempts exhausted");
        self.terminal
            .write_line(Tone::Error, "Too many incorrect attempts. Exiting.")?;
        Ok(LoginOutcome::Locked)
    }

    /// Show the menu and dispatch choices until "Exit" or closed input
    pub fn run_menu(&mut self) -> Result<MenuExit> {
        if !self.account.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        while self.account.is_authenticated() {
            self.show_menu()?;

            let Some(input) = self.terminal.read_line(CHOICE_PROMPT)? else {
                warn!("input closed in menu, logging out");
                self.account.log_out();
                return Ok(MenuExit::InputClosed);
            };

            let choice = match input.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    debug!("invalid menu choice");
                    self.terminal
                        .write_line(Tone::Error, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            debug!(choice = choice.as_str(), "menu choice");
            match choice {
                MenuChoice::CheckBalance => {
                    self.check_balance()?;
                }
                MenuChoice::Deposit => {
                    self.deposit()?;
                }
                MenuChoice::Withdraw => {
                    self.withdraw()?;
                }
                MenuChoice::Exit => {
                    self.terminal
                        .write_line(Tone::Plain, "Thank you for using the ATM. Goodbye!")?;
                    self.account.log_out();
                    info!("logged out");
                }
            }
        }

        Ok(MenuExit::LoggedOut)
    }

    /// Print the balance and return it; never changes the account
    pub fn check_balance(&mut self) -> Result<Decimal> {
        let balance = self.account.balance().map_err(|_| Error::NotAuthenticated)?;
        self.terminal.write_line(
            Tone::Plain,
            &format!("Your current balance is: {}", self.currency.format(balance)),
        )?;
        Ok(balance)
    }

    /// Read an amount and add it to the balance
    pub fn deposit(&mut self) -> Result<TransactionOutcome> {
        self.transact(Operation::Deposit)
    }

    /// Read an amount and take it from the balance
    pub fn withdraw(&mut self) -> Result<TransactionOutcome> {
        self.transact(Operation::Withdraw)
    }

    fn show_menu(&mut self) -> Result<()> {
        let mut lines = MENU_TEXT.lines();
        // Blank spacer, then the title
        if let Some(spacer) = lines.next() {
            self.terminal.write_line(Tone::Plain, spacer)?;
        }
        if let Some(title) = lines.next() {
            self.terminal.write_line(Tone::Heading, title)?;
        }
        for line in lines {
            self.terminal.write_line(Tone::Plain, line)?;
        }
        Ok(())
    }

    fn transact(&mut self, operation: Operation) -> Result<TransactionOutcome> {
        if !self.account.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        let prompt = format!(
            "Enter amount to {}: {}",
            operation.verb(),
            self.currency.symbol()
        );
        let Some(input) = self.terminal.read_line(&prompt)? else {
            return Ok(TransactionOutcome::Cancelled);
        };

        let amount = match parse_amount(&input) {
            Ok(amount) => amount,
            Err(err) => {
                debug!(operation = operation.verb(), "amount is not numeric");
                self.terminal.write_line(Tone::Error, INVALID_INPUT)?;
                return Ok(TransactionOutcome::InvalidInput(err));
            }
        };

        let applied = match operation {
            Operation::Deposit => self.account.deposit(amount),
            Operation::Withdraw => self.account.withdraw(amount),
        };

        match applied {
            Ok(balance) => {
                info!(operation = operation.verb(), "transaction accepted");
                self.terminal.write_line(
                    Tone::Success,
                    &format!(
                        "{} {} successfully.",
                        self.currency.format(amount),
                        operation.past_tense()
                    ),
                )?;
                Ok(TransactionOutcome::Accepted { amount, balance })
            }
            Err(TransactionError::NotAuthenticated) => Err(Error::NotAuthenticated),
            Err(err) => {
                info!(operation = operation.verb(), reason = %err, "transaction refused");
                let message = self.refusal_message(operation, &err);
                self.terminal.write_line(Tone::Error, &message)?;
                Ok(TransactionOutcome::Refused(err))
            }
        }
    }

    fn refusal_message(&self, operation: Operation, err: &TransactionError) -> String {
        match (operation, err) {
            (_, TransactionError::LimitExceeded { limit }) => format!(
                "Amount exceeds the deposit limit of {}.",
                self.currency.format(*limit)
            ),
            (Operation::Deposit, _) => "Enter a valid amount.".to_string(),
            (Operation::Withdraw, _) => "Insufficient balance or invalid amount.".to_string(),
        }
    }
}
