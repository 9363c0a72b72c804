//! Tests for Bank
//!
//! These tests verify:
//! - Account numbers come from a counter above the configured base
//! - Savings accounts open with 500, current accounts with 0
//! - Withdraw needs the password and enough balance
//! - Credit needs no password
//! - Loans are recorded in history but leave the balance unchanged
//! - History can be peeked without clearing and drained explicitly

use std::fs;

use tallybook::bank::{AccountType, Bank, LOAN_INTEREST_RATE, SAVINGS_OPENING_BALANCE};
use tallybook::{Config, TallyError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_bank() -> (TempDir, Config, Bank) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let bank = Bank::open(&config);
    (temp_dir, config, bank)
}

fn open_savings(bank: &mut Bank) -> u32 {
    bank.create_account("Alice", AccountType::Savings, "secret")
        .unwrap()
}

// =============================================================================
// Account Creation Tests
// =============================================================================

#[test]
fn test_account_numbers_start_above_base() {
    let (_temp, _config, mut bank) = setup_temp_bank();

    let first = open_savings(&mut bank);
    let second = bank
        .create_account("Bob", AccountType::Current, "pw")
        .unwrap();

    assert_eq!(first, 1001);
    assert_eq!(second, 1002);
    assert_eq!(bank.next_account_number(), Some(1003));
}

#[test]
fn test_custom_base() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .account_number_base(5000)
        .build();
    let mut bank = Bank::open(&config);

    assert_eq!(open_savings(&mut bank), 5001);
}

#[test]
fn test_opening_balances() {
    let (_temp, _config, mut bank) = setup_temp_bank();

    let savings = open_savings(&mut bank);
    let current = bank
        .create_account("Bob", AccountType::Current, "pw")
        .unwrap();

    assert_eq!(bank.account(savings).unwrap().balance(), SAVINGS_OPENING_BALANCE);
    assert_eq!(bank.account(current).unwrap().balance(), 0.0);
}

#[test]
fn test_create_persists() {
    let (_temp, config, mut bank) = setup_temp_bank();

    open_savings(&mut bank);

    assert_eq!(
        fs::read_to_string(config.accounts_path()).unwrap(),
        "1001,Alice,secret,500.0,savings\n"
    );
}

#[test]
fn test_counter_continues_after_loaded_accounts() {
    let (_temp, config, mut bank) = setup_temp_bank();
    open_savings(&mut bank);
    open_savings(&mut bank);
    drop(bank);

    let mut bank = Bank::open(&config);

    assert_eq!(bank.accounts().len(), 2);
    assert_eq!(open_savings(&mut bank), 1003);
}

// =============================================================================
// Login Tests
// =============================================================================

#[test]
fn test_login() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    assert_eq!(bank.login(number, "secret").unwrap().holder(), "Alice");
    assert!(matches!(
        bank.login(number, "Secret"),
        Err(TallyError::IncorrectPassword)
    ));
    assert!(matches!(
        bank.login(9999, "secret"),
        Err(TallyError::AccountNotFound)
    ));
}

// =============================================================================
// Withdraw Tests
// =============================================================================

#[test]
fn test_withdraw_scenario() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);
    assert_eq!(bank.account(number).unwrap().balance(), 500.0);

    let balance = bank.withdraw(number, "secret", 200.0).unwrap();
    assert_eq!(balance, 300.0);

    let result = bank.withdraw(number, "secret", 1000.0);
    assert!(matches!(result, Err(TallyError::InsufficientFunds { .. })));
    assert_eq!(bank.account(number).unwrap().balance(), 300.0);
}

#[test]
fn test_withdraw_exact_balance() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    assert_eq!(bank.withdraw(number, "secret", 500.0).unwrap(), 0.0);
}

#[test]
fn test_withdraw_wrong_password() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    let result = bank.withdraw(number, "guess", 10.0);

    assert!(matches!(result, Err(TallyError::IncorrectPassword)));
    assert_eq!(bank.account(number).unwrap().balance(), 500.0);
    assert!(bank.peek_history(number).unwrap().is_empty());
}

#[test]
fn test_withdraw_persists_balance() {
    let (_temp, config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    bank.withdraw(number, "secret", 200.0).unwrap();
    drop(bank);

    let bank = Bank::open(&config);
    assert_eq!(bank.account(number).unwrap().balance(), 300.0);
}

#[test]
fn test_withdraw_rejects_non_finite_amount() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    let result = bank.withdraw(number, "secret", f64::NAN);

    assert!(matches!(result, Err(TallyError::InvalidInput(_))));
}

// =============================================================================
// Credit Tests
// =============================================================================

#[test]
fn test_credit_without_password() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = bank
        .create_account("Bob", AccountType::Current, "pw")
        .unwrap();

    let balance = bank.credit(number, 75.5).unwrap();

    assert_eq!(balance, 75.5);
    assert_eq!(bank.account(number).unwrap().balance(), 75.5);
}

#[test]
fn test_credit_unknown_account() {
    let (_temp, _config, mut bank) = setup_temp_bank();

    assert!(matches!(
        bank.credit(4242, 10.0),
        Err(TallyError::AccountNotFound)
    ));
}

// =============================================================================
// Loan Tests
// =============================================================================

#[test]
fn test_loan_quote_leaves_balance_unchanged() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    let quote = bank.apply_for_loan(number, "secret", 1000.0).unwrap();

    assert_eq!(quote.principal, 1000.0);
    assert!((quote.interest - 1000.0 * LOAN_INTEREST_RATE).abs() < 1e-9);
    assert!((quote.total - 1065.0).abs() < 1e-9);
    assert_eq!(quote.balance, 500.0);
    assert_eq!(bank.account(number).unwrap().balance(), 500.0);

    let history = bank.peek_history(number).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, 1000.0);
    assert_eq!(history[0].balance_after, 500.0);
}

#[test]
fn test_loan_wrong_password() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    let result = bank.apply_for_loan(number, "nope", 100.0);

    assert!(matches!(result, Err(TallyError::IncorrectPassword)));
    assert!(bank.peek_history(number).unwrap().is_empty());
}

// =============================================================================
// History Tests
// =============================================================================

#[test]
fn test_history_records_signed_amounts() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);

    bank.withdraw(number, "secret", 200.0).unwrap();
    bank.credit(number, 50.0).unwrap();

    let history = bank.peek_history(number).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].amount, -200.0);
    assert_eq!(history[0].balance_after, 300.0);
    assert_eq!(history[1].amount, 50.0);
    assert_eq!(history[1].balance_after, 350.0);

    assert_eq!(
        history[0].to_string(),
        "Transaction: -200.0, New Balance: Rs 300.0"
    );
    assert_eq!(
        history[1].to_string(),
        "Transaction: +50.0, New Balance: Rs 350.0"
    );
}

#[test]
fn test_peek_does_not_clear_and_drain_does() {
    let (_temp, _config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);
    bank.credit(number, 10.0).unwrap();

    assert_eq!(bank.peek_history(number).unwrap().len(), 1);
    assert_eq!(bank.peek_history(number).unwrap().len(), 1);

    let drained = bank.drain_history(number).unwrap();
    assert_eq!(drained.len(), 1);
    assert!(bank.peek_history(number).unwrap().is_empty());
    assert_eq!(bank.account(number).unwrap().balance(), 510.0);
}

#[test]
fn test_history_is_not_persisted() {
    let (_temp, config, mut bank) = setup_temp_bank();
    let number = open_savings(&mut bank);
    bank.credit(number, 10.0).unwrap();
    drop(bank);

    let bank = Bank::open(&config);

    assert!(bank.peek_history(number).unwrap().is_empty());
    assert_eq!(bank.account(number).unwrap().balance(), 510.0);
}

#[test]
fn test_history_unknown_account() {
    let (_temp, _config, mut bank) = setup_temp_bank();

    assert!(matches!(bank.peek_history(1), Err(TallyError::AccountNotFound)));
    assert!(matches!(bank.drain_history(1), Err(TallyError::AccountNotFound)));
}

// =============================================================================
// Account Type Tests
// =============================================================================

#[test]
fn test_account_type_parse() {
    assert_eq!("Savings".parse::<AccountType>().unwrap(), AccountType::Savings);
    assert_eq!(" CURRENT ".parse::<AccountType>().unwrap(), AccountType::Current);
    assert!(matches!(
        "checking".parse::<AccountType>(),
        Err(TallyError::InvalidInput(_))
    ));
}
