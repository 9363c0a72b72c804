use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TallyError};
use crate::store::{parse_number, Record};

/// Kind of account, which decides the opening balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Savings,
    Current,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Current => "current",
        }
    }
}

impl FromStr for AccountType {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("savings") {
            Ok(AccountType::Savings)
        } else if s.eq_ignore_ascii_case("current") {
            Ok(AccountType::Current)
        } else {
            Err(TallyError::InvalidInput(format!(
                "unknown account type {:?} (expected savings or current)",
                s
            )))
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One balance-affecting event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    /// Signed amount (negative for withdrawals)
    pub amount: f64,

    /// Balance right after the event
    pub balance_after: f64,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount.is_sign_negative() { "" } else { "+" };
        write!(
            f,
            "Transaction: {}{:?}, New Balance: Rs {:?}",
            sign, self.amount, self.balance_after
        )
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: u32,
    holder: String,
    password: String,
    balance: f64,
    account_type: AccountType,
    history: Vec<Transaction>,
}

impl Account {
    pub fn new(
        number: u32,
        holder: impl Into<String>,
        password: impl Into<String>,
        balance: f64,
        account_type: AccountType,
    ) -> Self {
        Self {
            number,
            holder: holder.into(),
            password: password.into(),
            balance,
            account_type,
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Plaintext password comparison
    pub fn authenticate(&self, attempt: &str) -> bool {
        self.password == attempt
    }

    /// Transactions recorded since the history was last drained
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Move the balance by `amount` and record it
    pub(crate) fn apply(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.history.push(Transaction {
            amount,
            balance_after: self.balance,
        });
        self.balance
    }

    /// Record `amount` in the history without moving the balance
    pub(crate) fn note(&mut self, amount: f64) {
        self.history.push(Transaction {
            amount,
            balance_after: self.balance,
        });
    }

    pub(crate) fn drain_history(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.history)
    }
}

impl Record for Account {
    const ARITY: usize = 5;
    const SEPARATOR: &'static str = ",";

    fn from_fields(fields: &[&str]) -> Result<Self> {
        let number = parse_number(fields[0], "account number")?;
        let balance: f64 = parse_number(fields[3], "balance")?;
        if !balance.is_finite() {
            return Err(TallyError::InvalidInput(format!(
                "balance is not finite: {:?}",
                fields[3]
            )));
        }
        let account_type = fields[4].parse()?;

        Ok(Account::new(number, fields[1], fields[2], balance, account_type))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.holder.clone(),
            self.password.clone(),
            format!("{:?}", self.balance),
            self.account_type.as_str().to_string(),
        ]
    }

    fn key(&self) -> Cow<'_, str> {
        Cow::Owned(self.number.to_string())
    }
}
