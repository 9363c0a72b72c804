//! Bank menu
//!
//! State machine behind `tallybook-bank`.

use crate::bank::{AccountType, Bank};
use crate::error::TallyError;

use super::{
    parse_account_number, parse_amount, parse_choice, MenuMachine, Reply, INVALID_CHOICE,
    NOT_A_NUMBER,
};

const RULE: &str = "=============================================";

const MAIN_MENU: &str = "\nChoose an option:
1. Create Account
2. Login
3. Apply for Loan
4. Withdraw
5. Credit
6. Exit
Enter your choice: ";

/// Which password-protected operation is being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    Loan,
    Withdraw,
}

/// What the bank menu is waiting for
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BankState {
    #[default]
    Main,
    CreateHolder,
    CreateType { holder: String },
    CreatePassword { holder: String, account_type: AccountType },
    LoginNumber,
    LoginPassword { number: u32 },
    ViewPrompt { number: u32 },
    GuardedNumber(Guarded),
    GuardedAmount { op: Guarded, number: u32 },
    GuardedPassword { op: Guarded, number: u32, amount: f64 },
    CreditNumber,
    CreditAmount { number: u32 },
}

/// Menu over a [`Bank`]
#[derive(Debug)]
pub struct BankMenu {
    bank: Bank,
    state: BankState,
}

impl BankMenu {
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            state: BankState::Main,
        }
    }

    pub fn state(&self) -> &BankState {
        &self.state
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn into_bank(self) -> Bank {
        self.bank
    }

    // =========================================================================
    // Per-State Handlers
    // =========================================================================

    fn main_choice(&mut self, input: &str) -> Reply {
        let Some(choice) = parse_choice(input) else {
            return Reply::line(NOT_A_NUMBER);
        };

        self.state = match choice {
            1 => BankState::CreateHolder,
            2 => BankState::LoginNumber,
            3 => BankState::GuardedNumber(Guarded::Loan),
            4 => BankState::GuardedNumber(Guarded::Withdraw),
            5 => BankState::CreditNumber,
            6 => return Reply::exit(boxed(["Exiting the Online Banking System. Thank you!"])),
            _ => return Reply::line(INVALID_CHOICE),
        };
        Reply::empty()
    }

    fn create(&mut self, holder: &str, account_type: AccountType, password: &str) -> Reply {
        match self.bank.create_account(holder, account_type, password) {
            Ok(number) => Reply::lines(boxed([format!(
                "Account created successfully. Your account number is: {}",
                number
            )])),
            Err(e) => Reply::lines(boxed([format!("Error: {}", e)])),
        }
    }

    fn login_number(&mut self, input: &str) -> Reply {
        let number = match parse_account_number(input) {
            Ok(number) => number,
            Err(_) => return Reply::line(NOT_A_NUMBER),
        };

        if !self.bank.contains(number) {
            return Reply::lines(boxed([
                "Account not found. Please check your account number.",
            ]));
        }

        self.state = BankState::LoginPassword { number };
        Reply::empty()
    }

    fn login_password(&mut self, number: u32, password: &str) -> Reply {
        match self.bank.login(number, password) {
            Ok(account) => {
                let welcome = format!("Login successful. Welcome, {}!", account.holder());
                self.state = BankState::ViewPrompt { number };
                Reply::lines(boxed([welcome]))
            }
            Err(TallyError::IncorrectPassword) => {
                Reply::lines(boxed(["Incorrect password. Login failed."]))
            }
            Err(e) => Reply::lines(boxed([describe(&e)])),
        }
    }

    /// Print account details and the pending history, then drain it
    fn view_account(&mut self, number: u32) -> Reply {
        let Some(account) = self.bank.account(number) else {
            return Reply::lines(boxed(["Account not found."]));
        };

        let mut lines = vec![
            RULE.to_string(),
            format!("Account Information for Account Number {}", number),
            format!("Account Holder: {}", account.holder()),
            format!("Account Type: {}", account.account_type()),
            format!("Balance: Rs {:?}", account.balance()),
            "Transaction History:".to_string(),
        ];
        lines.extend(account.history().iter().map(ToString::to_string));
        lines.push(RULE.to_string());

        if let Err(e) = self.bank.drain_history(number) {
            tracing::warn!("Could not clear history for {}: {}", number, e);
        }
        Reply::lines(lines)
    }

    fn guarded_amount(&mut self, op: Guarded, number: u32, input: &str) -> Reply {
        let amount = match parse_amount(input) {
            Ok(amount) => amount,
            Err(_) => return Reply::line(NOT_A_NUMBER),
        };

        if !self.bank.contains(number) {
            return Reply::lines(boxed(["Account not found."]));
        }

        self.state = BankState::GuardedPassword { op, number, amount };
        Reply::empty()
    }

    fn guarded_password(&mut self, op: Guarded, number: u32, amount: f64, password: &str) -> Reply {
        match op {
            Guarded::Withdraw => match self.bank.withdraw(number, password, amount) {
                Ok(balance) => Reply::lines(boxed([format!(
                    "Withdrawal successful. New balance: Rs {:?}",
                    balance
                )])),
                Err(TallyError::IncorrectPassword) => {
                    Reply::lines(boxed(["Incorrect password. Withdrawal failed."]))
                }
                Err(e) => Reply::lines(boxed([describe(&e)])),
            },
            Guarded::Loan => match self.bank.apply_for_loan(number, password, amount) {
                Ok(quote) => Reply::lines(boxed([
                    format!("Loan of Rs {:?} approved.", quote.principal),
                    format!("Interest charged: Rs {:?}", quote.interest),
                    format!("Total Loan Amount (including interest): Rs {:?}", quote.total),
                ])),
                Err(TallyError::IncorrectPassword) => {
                    Reply::lines(boxed(["Incorrect password. Loan application failed."]))
                }
                Err(e) => Reply::lines(boxed([describe(&e)])),
            },
        }
    }

    fn credit_amount(&mut self, number: u32, input: &str) -> Reply {
        let amount = match parse_amount(input) {
            Ok(amount) => amount,
            Err(_) => return Reply::line(NOT_A_NUMBER),
        };

        match self.bank.credit(number, amount) {
            Ok(balance) => Reply::lines(boxed([format!(
                "Credit successful. New balance: Rs {:?}",
                balance
            )])),
            Err(e) => Reply::lines(boxed([describe(&e)])),
        }
    }
}

impl MenuMachine for BankMenu {
    fn banner(&self) -> Vec<String> {
        boxed(["Welcome to the Online Banking System!"])
    }

    fn prompt(&self) -> String {
        let prompt = match &self.state {
            BankState::Main => MAIN_MENU,
            BankState::CreateHolder => "Enter account holder's name: ",
            BankState::CreateType { .. } => "Choose account type (savings or current): ",
            BankState::CreatePassword { .. } => "Set a password for your account: ",
            BankState::LoginNumber
            | BankState::GuardedNumber(_)
            | BankState::CreditNumber => "Enter your account number: ",
            BankState::LoginPassword { .. } => "Enter your password: ",
            BankState::ViewPrompt { .. } => "Do you want to view account information? (y/n): ",
            BankState::GuardedAmount { op: Guarded::Loan, .. } => "Enter loan amount: Rs ",
            BankState::GuardedAmount { op: Guarded::Withdraw, .. } => "Enter withdrawal amount: Rs ",
            BankState::GuardedPassword { op: Guarded::Loan, .. } => {
                "Enter your loan application password: "
            }
            BankState::GuardedPassword { op: Guarded::Withdraw, .. } => {
                "Enter your withdrawal password: "
            }
            BankState::CreditAmount { .. } => "Enter credit amount: Rs ",
        };
        prompt.to_string()
    }

    fn feed(&mut self, input: &str) -> Reply {
        // Every state falls back to the main menu unless its handler moves on
        let state = std::mem::take(&mut self.state);

        match state {
            BankState::Main => self.main_choice(input),
            BankState::CreateHolder => {
                self.state = BankState::CreateType {
                    holder: input.to_string(),
                };
                Reply::empty()
            }
            BankState::CreateType { holder } => match input.parse::<AccountType>() {
                Ok(account_type) => {
                    self.state = BankState::CreatePassword { holder, account_type };
                    Reply::empty()
                }
                Err(e) => Reply::line(format!("Error: {}", e)),
            },
            BankState::CreatePassword { holder, account_type } => {
                self.create(&holder, account_type, input)
            }
            BankState::LoginNumber => self.login_number(input),
            BankState::LoginPassword { number } => self.login_password(number, input),
            BankState::ViewPrompt { number } => {
                if input.starts_with(['y', 'Y']) {
                    self.view_account(number)
                } else {
                    Reply::empty()
                }
            }
            BankState::GuardedNumber(op) => match parse_account_number(input) {
                Ok(number) => {
                    self.state = BankState::GuardedAmount { op, number };
                    Reply::empty()
                }
                Err(_) => Reply::line(NOT_A_NUMBER),
            },
            BankState::GuardedAmount { op, number } => self.guarded_amount(op, number, input),
            BankState::GuardedPassword { op, number, amount } => {
                self.guarded_password(op, number, amount, input)
            }
            BankState::CreditNumber => match parse_account_number(input) {
                Ok(number) => {
                    self.state = BankState::CreditAmount { number };
                    Reply::empty()
                }
                Err(_) => Reply::line(NOT_A_NUMBER),
            },
            BankState::CreditAmount { number } => self.credit_amount(number, input),
        }
    }
}

/// Surround lines with horizontal rules
fn boxed<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = vec![RULE.to_string()];
    out.extend(lines.into_iter().map(Into::into));
    out.push(RULE.to_string());
    out
}

/// User-facing text for ledger failures
fn describe(error: &TallyError) -> String {
    match error {
        TallyError::AccountNotFound => "Account not found.".to_string(),
        TallyError::InsufficientFunds { .. } => "Insufficient funds for withdrawal.".to_string(),
        other => format!("Error: {}", other),
    }
}
