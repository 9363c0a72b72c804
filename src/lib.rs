//! # tallybook
//!
//! Two console-menu applications over flat-file record stores:
//! - A library catalog and lending tracker (`books.txt`, `patrons.txt`)
//! - A toy bank ledger (`bank_data.txt`)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐        ┌──────────────────────────┐
//! │   tallybook-library      │        │     tallybook-bank       │
//! │  (LibraryMenu FSM)       │        │    (BankMenu FSM)        │
//! └────────────┬─────────────┘        └────────────┬─────────────┘
//!              │                                   │
//!              ▼                                   ▼
//!   ┌─────────────────────┐             ┌─────────────────────┐
//!   │       Library       │             │        Bank         │
//!   │ (lend / return /    │             │ (withdraw / credit /│
//!   │  fine / search)     │             │  loan / history)    │
//!   └──────────┬──────────┘             └──────────┬──────────┘
//!              │                                   │
//!              ▼                                   ▼
//!   ┌───────────────────────────────────────────────────────────┐
//!   │                    RecordStore<R: Record>                  │
//!   │     load on open · find / filter · full rewrite on save    │
//!   └───────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod library;
pub mod bank;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TallyError, Result};
pub use config::Config;
pub use store::{Record, RecordStore};
pub use library::Library;
pub use bank::Bank;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tallybook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
