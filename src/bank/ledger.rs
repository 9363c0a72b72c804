//! Bank service
//!
//! Owns the account store and the account-number counter.

use std::path::Path;

use crate::config::Config;
use crate::error::{Result, TallyError};
use crate::store::{LoadReport, RecordStore};

use super::{Account, AccountType, Transaction};

/// Opening balance of a savings account
pub const SAVINGS_OPENING_BALANCE: f64 = 500.0;

/// Interest quoted on loans (6.5%)
pub const LOAN_INTEREST_RATE: f64 = 0.065;

/// What a loan approval reports back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanQuote {
    pub principal: f64,
    pub interest: f64,
    /// Principal plus interest (informational only)
    pub total: f64,
    /// Account balance after approval (unchanged by the loan)
    pub balance: f64,
}

/// The bank ledger
///
/// ## Counter:
/// - Starts at `max(config.account_number_base, highest loaded number)`
/// - Each new account takes `counter + 1`
#[derive(Debug)]
pub struct Bank {
    /// Account records, rewritten after each mutation
    accounts: RecordStore<Account>,

    /// Last assigned account number
    counter: u32,
}

impl Bank {
    /// Open the bank using the configured accounts file
    pub fn open(config: &Config) -> Self {
        Self::open_path(&config.accounts_path(), config.account_number_base)
    }

    /// Open the bank from an explicit file path
    pub fn open_path(path: &Path, account_number_base: u32) -> Self {
        let accounts = RecordStore::<Account>::open(path);

        let counter = accounts
            .iter()
            .map(Account::number)
            .fold(account_number_base, u32::max);

        tracing::info!(
            "Bank opened: {} accounts, next account number {}",
            accounts.len(),
            counter.saturating_add(1)
        );

        Self { accounts, counter }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Open a new account and persist it
    ///
    /// Returns the assigned account number.
    pub fn create_account(
        &mut self,
        holder: &str,
        account_type: AccountType,
        password: &str,
    ) -> Result<u32> {
        let number = self
            .counter
            .checked_add(1)
            .ok_or_else(|| TallyError::InvalidInput("account numbers exhausted".to_string()))?;
        self.counter = number;

        let opening_balance = match account_type {
            AccountType::Savings => SAVINGS_OPENING_BALANCE,
            AccountType::Current => 0.0,
        };

        self.accounts
            .push(Account::new(number, holder, password, opening_balance, account_type));
        tracing::info!("Created {} account {}", account_type, number);

        self.persist();
        Ok(number)
    }

    /// Whether an account with this number exists
    pub fn contains(&self, number: u32) -> bool {
        self.account(number).is_some()
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.find_by_key(&number.to_string())
    }

    pub fn accounts(&self) -> &[Account] {
        self.accounts.records()
    }

    /// Number the next created account will receive
    pub fn next_account_number(&self) -> Option<u32> {
        self.counter.checked_add(1)
    }

    /// Check a password
    ///
    /// Missing accounts and wrong passwords are reported differently.
    pub fn login(&self, number: u32, password: &str) -> Result<&Account> {
        let account = self.account(number).ok_or(TallyError::AccountNotFound)?;
        if !account.authenticate(password) {
            tracing::debug!("Failed login for account {}", number);
            return Err(TallyError::IncorrectPassword);
        }
        Ok(account)
    }

    // =========================================================================
    // Balance Operations
    // =========================================================================

    /// Withdraw after checking the password and the balance
    ///
    /// Returns the new balance. Nothing changes on failure.
    pub fn withdraw(&mut self, number: u32, password: &str, amount: f64) -> Result<f64> {
        check_amount(amount)?;
        let account = self.authenticated_mut(number, password)?;

        if account.balance() < amount {
            return Err(TallyError::InsufficientFunds {
                balance: account.balance(),
                requested: amount,
            });
        }

        let balance = account.apply(-amount);
        tracing::info!("Withdrew {} from account {}", amount, number);

        self.persist();
        Ok(balance)
    }

    /// Credit an account; no password is asked
    ///
    /// Returns the new balance.
    pub fn credit(&mut self, number: u32, amount: f64) -> Result<f64> {
        check_amount(amount)?;
        let account = self.account_mut(number)?;

        let balance = account.apply(amount);
        tracing::info!("Credited {} to account {}", amount, number);

        self.persist();
        Ok(balance)
    }

    /// Approve a loan after checking the password
    ///
    /// The principal is added to the history only; the balance is left as is.
    pub fn apply_for_loan(&mut self, number: u32, password: &str, amount: f64) -> Result<LoanQuote> {
        check_amount(amount)?;
        let account = self.authenticated_mut(number, password)?;

        let interest = amount * LOAN_INTEREST_RATE;
        account.note(amount);
        let quote = LoanQuote {
            principal: amount,
            interest,
            total: amount + interest,
            balance: account.balance(),
        };
        tracing::info!("Approved loan of {} for account {}", amount, number);

        self.persist();
        Ok(quote)
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Transactions since the last drain, without clearing them
    pub fn peek_history(&self, number: u32) -> Result<&[Transaction]> {
        self.account(number)
            .map(Account::history)
            .ok_or(TallyError::AccountNotFound)
    }

    /// Take and clear the transactions recorded since the last drain
    pub fn drain_history(&mut self, number: u32) -> Result<Vec<Transaction>> {
        Ok(self.account_mut(number)?.drain_history())
    }

    /// Report from loading the accounts file
    pub fn load_report(&self) -> &LoadReport {
        self.accounts.load_report()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn account_mut(&mut self, number: u32) -> Result<&mut Account> {
        self.accounts
            .find_by_key_mut(&number.to_string())
            .ok_or(TallyError::AccountNotFound)
    }

    fn authenticated_mut(&mut self, number: u32, password: &str) -> Result<&mut Account> {
        let account = self.account_mut(number)?;
        if !account.authenticate(password) {
            tracing::debug!("Rejected password for account {}", number);
            return Err(TallyError::IncorrectPassword);
        }
        Ok(account)
    }

    fn persist(&self) {
        if let Err(e) = self.accounts.save() {
            tracing::warn!("Error writing to {}: {}", self.accounts.path().display(), e);
        }
    }
}

/// Amounts must be finite to survive a save/load cycle
fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(TallyError::InvalidInput(format!("amount is not finite: {}", amount)))
    }
}
