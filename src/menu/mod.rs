//! Menu Module
//!
//! Numbered text menus as explicit finite state machines.
//!
//! ## Design
//! A [`MenuMachine`] never reads a terminal itself. It exposes the prompt for
//! its current state and consumes one input line at a time, returning the text
//! to print and whether the session continues. [`run`] is the only place that
//! touches real I/O, so every menu can be driven from a test with plain
//! strings.
//!
//! ```text
//!   ┌────────┐  prompt()   ┌────────┐   line    ┌──────────────┐
//!   │ writer │ ◀────────── │  run   │ ────────▶ │ MenuMachine  │
//!   └────────┘  reply      └────────┘  feed()   │  (state)     │
//!                                               └──────────────┘
//! ```

mod bank_menu;
mod library_menu;

use std::io::{BufRead, Write};

use crate::error::{Result, TallyError};
use crate::store::parse_number;

pub use bank_menu::{BankMenu, BankState, Guarded};
pub use library_menu::{LibraryMenu, LibraryState};

/// Shown when a number was expected but something else was typed
pub const NOT_A_NUMBER: &str = "Error: Invalid input. Please enter a number.";

/// Shown for a number that is not on the menu
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";

/// Whether the session keeps going after a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Output produced by one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Reply {
    /// Nothing to print, keep going
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            flow: Flow::Continue,
        }
    }

    /// Print `lines`, keep going
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            flow: Flow::Continue,
        }
    }

    /// Print one line, keep going
    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    /// Print `lines`, then end the session
    pub fn exit<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flow: Flow::Exit,
            ..Self::lines(lines)
        }
    }

    pub fn is_exit(&self) -> bool {
        self.flow == Flow::Exit
    }
}

/// A menu driven one line at a time
pub trait MenuMachine {
    /// Lines printed once when the session starts
    fn banner(&self) -> Vec<String> {
        Vec::new()
    }

    /// Prompt for the current state (no trailing newline)
    fn prompt(&self) -> String;

    /// Consume one trimmed input line
    fn feed(&mut self, input: &str) -> Reply;
}

/// Drive a menu from `input` to `output` until it exits or input ends
pub fn run<M, R, W>(machine: &mut M, mut input: R, mut output: W) -> Result<()>
where
    M: MenuMachine,
    R: BufRead,
    W: Write,
{
    for line in machine.banner() {
        writeln!(output, "{}", line)?;
    }

    loop {
        write!(output, "{}", machine.prompt())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Input closed: end the session like an explicit exit
            writeln!(output)?;
            tracing::debug!("Input closed, ending session");
            return Ok(());
        }

        let reply = machine.feed(line.trim());
        for text in &reply.lines {
            writeln!(output, "{}", text)?;
        }
        output.flush()?;

        if reply.is_exit() {
            return Ok(());
        }
    }
}

// =============================================================================
// Input Parsing
// =============================================================================

/// Parse a menu choice
pub fn parse_choice(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parse an account number typed by the user
pub fn parse_account_number(input: &str) -> Result<u32> {
    parse_number(input.trim(), "account number")
}

/// Parse a currency amount typed by the user
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = parse_number(input.trim(), "amount")?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(TallyError::InvalidInput(format!("amount is not finite: {}", input.trim())))
    }
}
