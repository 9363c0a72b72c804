//! Error types for tallybook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type for tallybook operations
#[derive(Debug, Error)]
pub enum TallyError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Format Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Book not found")]
    BookNotFound,

    #[error("Patron not found")]
    PatronNotFound,

    #[error("Account not found")]
    AccountNotFound,

    // -------------------------------------------------------------------------
    // Lending Errors
    // -------------------------------------------------------------------------
    #[error("Book is not available for borrowing")]
    BookUnavailable,

    #[error("Book is already available")]
    BookAlreadyAvailable,

    // -------------------------------------------------------------------------
    // Ledger Errors
    // -------------------------------------------------------------------------
    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: f64, requested: f64 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TallyError {
    /// Build a parse error for a 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        TallyError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
