//! Integration tests for atm-core sessions
//!
//! Every test drives a full `AccountSession` through a scripted
//! `LineTerminal`, exactly as a user would type at the console.
//!
//! Run with: cargo test --test session_tests -- --nocapture

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use atm_core::adapters::LineTerminal;
use atm_core::config::Config;
use atm_core::services::{AccountSession, PIN_PROMPT};
use atm_core::{session_from_config, LoginOutcome, MenuExit, SessionOutcome, TransactionOutcome};

// ============================================================================
// Test Helpers
// ============================================================================

type Session = AccountSession<LineTerminal<std::io::Cursor<Vec<u8>>, Vec<u8>>>;

/// Session with PIN 1234 and the given balance, fed `lines` as input
fn scripted_session(balance: Decimal, lines: &[&str]) -> Session {
    let mut input = lines.join("\n");
    input.push('\n');
    let config = Config {
        initial_balance: balance,
        ..Config::default()
    };
    let terminal = LineTerminal::new(std::io::Cursor::new(input.into_bytes()), Vec::new());
    session_from_config(&config, terminal).expect("default config is valid")
}

fn transcript(session: &Session) -> String {
    String::from_utf8(session.terminal().output().clone()).expect("utf-8 output")
}

fn balance(session: &Session) -> Decimal {
    session.account().balance().expect("session is logged in")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_login_and_check_balance() {
    let mut session = scripted_session(dec!(1000.00), &["1234"]);
    assert_eq!(session.authenticate().unwrap(), LoginOutcome::Authenticated);
    session.check_balance().unwrap();
    assert!(transcript(&session).contains("Your current balance is: ₹1000.00"));
}

#[test]
fn test_deposit_updates_balance() {
    let mut session = scripted_session(dec!(1000.00), &["1234", "500"]);
    session.authenticate().unwrap();
    session.deposit().unwrap();
    assert_eq!(balance(&session), dec!(1500.00));
    assert!(transcript(&session).contains("₹500.00 deposited successfully."));
}

#[test]
fn test_withdraw_more_than_balance_is_refused() {
    let mut session = scripted_session(dec!(1500.00), &["1234", "2000"]);
    session.authenticate().unwrap();
    assert!(matches!(
        session.withdraw().unwrap(),
        TransactionOutcome::Refused(_)
    ));
    assert_eq!(balance(&session), dec!(1500.00));
    assert!(transcript(&session).contains("Insufficient balance or invalid amount."));
}

#[test]
fn test_non_numeric_deposit_is_refused() {
    let mut session = scripted_session(dec!(1000.00), &["1234", "abc"]);
    session.authenticate().unwrap();
    assert!(matches!(
        session.deposit().unwrap(),
        TransactionOutcome::InvalidInput(_)
    ));
    assert_eq!(balance(&session), dec!(1000.00));
    assert!(transcript(&session).contains("Invalid input. Please enter a numeric value."));
}

#[test]
fn test_three_wrong_pins_lock_before_menu() {
    let mut session = scripted_session(dec!(1000.00), &["0000", "0000", "0000", "1234", "1"]);
    assert_eq!(session.run().unwrap(), SessionOutcome::Locked);
    assert!(!session.account().is_authenticated());

    let out = transcript(&session);
    assert!(out.contains("Incorrect PIN. Attempts left: 2"));
    assert!(out.contains("Incorrect PIN. Attempts left: 1"));
    assert!(out.contains("Too many incorrect attempts. Exiting."));
    assert!(!out.contains("ATM MENU"));
}

#[test]
fn test_full_menu_session() {
    let mut session = scripted_session(
        dec!(1000.00),
        &["1234", "1", "2", "500", "3", "2000", "2", "abc", "7", "3", "250.5", "1", "4"],
    );
    assert_eq!(session.run().unwrap(), SessionOutcome::Completed);
    assert!(!session.account().is_authenticated());

    let out = transcript(&session);
    let expected_in_order = [
        "Login successful.",
        "Your current balance is: ₹1000.00",
        "₹500.00 deposited successfully.",
        "Insufficient balance or invalid amount.",
        "Invalid input. Please enter a numeric value.",
        "Invalid choice. Please try again.",
        "₹250.50 withdrawn successfully.",
        "Your current balance is: ₹1249.50",
        "Thank you for using the ATM. Goodbye!",
    ];
    let mut cursor = 0;
    for expected in expected_in_order {
        let found = out[cursor..]
            .find(expected)
            .unwrap_or_else(|| panic!("missing {expected:?} after byte {cursor} in:\n{out}"));
        cursor += found + expected.len();
    }
    assert_eq!(out.matches("===== ATM MENU =====").count(), 8);
}

#[test]
fn test_menu_text_layout() {
    let mut session = scripted_session(dec!(0), &["1234", "4"]);
    session.run().unwrap();
    let expected = concat!(
        "Enter your 4-digit PIN: Login successful.\n",
        "\n",
        "\n",
        "===== ATM MENU =====\n",
        "1. Check Balance\n",
        "2. Deposit\n",
        "3. Withdraw\n",
        "4. Exit\n",
        "Select an option (1-4): Thank you for using the ATM. Goodbye!\n",
    );
    assert_eq!(transcript(&session), expected);
}

#[test]
fn test_input_closed_in_menu_ends_session() {
    let mut session = scripted_session(dec!(10), &["1234", "2", "5"]);
    assert_eq!(session.authenticate().unwrap(), LoginOutcome::Authenticated);
    assert_eq!(session.run_menu().unwrap(), MenuExit::InputClosed);
    assert!(!session.account().is_authenticated());
}

#[test]
fn test_input_closed_before_login_is_abandoned() {
    let mut session = scripted_session(dec!(10), &["9999"]);
    // Second read hits end of input
    assert_eq!(session.run().unwrap(), SessionOutcome::Abandoned);
    assert_eq!(transcript(&session).matches(PIN_PROMPT).count(), 2);
}

// ============================================================================
// Balance Properties
// ============================================================================

#[test]
fn test_deposits_add_exactly() {
    let amounts = [dec!(0.01), dec!(1), dec!(99.99), dec!(123456.78), dec!(0.1)];
    for amount in amounts {
        let text = amount.to_string();
        let mut session = scripted_session(dec!(1000), &["1234", text.as_str()]);
        session.authenticate().unwrap();
        let before = balance(&session);
        session.deposit().unwrap();
        assert_eq!(balance(&session), before + amount);
    }
}

#[test]
fn test_withdrawals_subtract_or_leave_unchanged() {
    let start = dec!(500);
    let amounts = [
        dec!(0.01),
        dec!(499.99),
        dec!(500),
        dec!(500.01),
        dec!(10000),
        dec!(0),
        dec!(-20),
    ];
    for amount in amounts {
        let text = amount.to_string();
        let mut session = scripted_session(start, &["1234", text.as_str()]);
        session.authenticate().unwrap();
        session.withdraw().unwrap();

        let after = balance(&session);
        if amount > Decimal::ZERO && amount <= start {
            assert_eq!(after, start - amount, "withdrawing {amount}");
        } else {
            assert_eq!(after, start, "withdrawing {amount}");
        }
        assert!(after >= Decimal::ZERO);
    }
}

#[test]
fn test_balance_stays_non_negative_over_long_sequence() {
    let mut lines = vec!["1234".to_string()];
    let amounts = ["40", "15.5", "1000", "-3", "0", "7.25", "x", "60"];
    for (i, amount) in amounts.iter().cycle().take(80).enumerate() {
        lines.push(if i % 2 == 0 { "3" } else { "2" }.to_string());
        lines.push(amount.to_string());
        lines.push("1".to_string());
    }
    lines.push("4".to_string());
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let mut session = scripted_session(dec!(25), &refs);
    assert_eq!(session.run().unwrap(), SessionOutcome::Completed);

    let out = transcript(&session);
    for line in out.lines().filter(|l| l.contains("Your current balance is: ")) {
        let shown = line.rsplit('₹').next().unwrap();
        let value: Decimal = shown.parse().unwrap();
        assert!(value >= Decimal::ZERO, "negative balance shown: {line}");
    }
}

#[test]
fn test_check_balance_never_mutates() {
    let mut session = scripted_session(dec!(321.09), &["1234"]);
    session.authenticate().unwrap();
    for _ in 0..10 {
        assert_eq!(session.check_balance().unwrap(), dec!(321.09));
    }
    assert_eq!(balance(&session), dec!(321.09));
}

#[test]
fn test_each_wrong_pin_costs_one_attempt() {
    for wrong in 0..3 {
        let mut lines = vec!["4321"; wrong];
        lines.push("1234");
        let mut session = scripted_session(dec!(1), &lines);
        assert_eq!(session.authenticate().unwrap(), LoginOutcome::Authenticated);

        let out = transcript(&session);
        for used in 1..=wrong {
            let left = 3 - used;
            assert!(out.contains(&format!("Attempts left: {left}")));
        }
        assert_eq!(out.matches("Incorrect PIN").count(), wrong);
    }
}

#[test]
fn test_custom_currency_in_prompts() {
    let config = Config {
        currency_symbol: "$".to_string(),
        ..Config::default()
    };
    let terminal = LineTerminal::new(std::io::Cursor::new(b"1234\n20\n".to_vec()), Vec::new());
    let mut session = session_from_config(&config, terminal).unwrap();
    session.authenticate().unwrap();
    session.deposit().unwrap();

    let out = String::from_utf8(session.terminal().output().clone()).unwrap();
    assert!(out.contains("Enter amount to deposit: $$20.00 deposited successfully."));
}

#[test]
fn test_invalid_config_builds_no_session() {
    let config = Config {
        pin: "12".to_string(),
        ..Config::default()
    };
    let terminal = LineTerminal::new(std::io::Cursor::new(Vec::new()), Vec::new());
    assert!(session_from_config(&config, terminal).is_err());
}
