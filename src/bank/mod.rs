//! Bank Module
//!
//! A toy ledger of password-protected accounts in one record store.
//!
//! ## Responsibilities
//! - Create accounts with numbers from a counter owned by the [`Bank`]
//! - Authenticate by plaintext password comparison
//! - Withdraw, credit and approve loans, rewriting `bank_data.txt` each time
//! - Keep a per-session transaction history (never written to disk)
//!
//! ## Operation Rules
//! ```text
//! operation        password   balance effect        history entry
//! ───────────────  ─────────  ────────────────────  ─────────────
//! withdraw         required   -amount (if covered)  -amount
//! credit           none       +amount               +amount
//! apply_for_loan   required   unchanged             +amount
//! ```
//! Loans report interest but never touch the balance; that gap is kept as is.

mod account;
mod ledger;

pub use account::{Account, AccountType, Transaction};
pub use ledger::{Bank, LoanQuote, LOAN_INTEREST_RATE, SAVINGS_OPENING_BALANCE};
