//! Library Module
//!
//! Catalog and lending tracker built on two record stores.
//!
//! ## Responsibilities
//! - Keep books and patrons in `books.txt` / `patrons.txt`
//! - Lend and return books (Available ⇄ Borrowed)
//! - Estimate fines
//! - Search and report over the catalog
//!
//! ## Lending States
//! ```text
//!        borrow(patron, title)
//!   ┌───────────┐ ─────────────▶ ┌───────────┐
//!   │ Available │                │ Borrowed  │
//!   └───────────┘ ◀───────────── └───────────┘
//!            return_book(title)
//! ```
//! The book does not remember who borrowed it, so any caller may return any
//! borrowed book.

mod book;
mod catalog;
mod patron;

pub use book::{Availability, Book};
pub use catalog::{Fine, Library, Loan, DAYS_SINCE_BORROWING, FINE_PER_DAY, LOAN_PERIOD_DAYS};
pub use patron::Patron;

/// Book fields that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Genre,
}

impl BookField {
    /// Select this field from a book
    pub fn of(self, book: &Book) -> &str {
        match self {
            BookField::Title => book.title(),
            BookField::Author => book.author(),
            BookField::Genre => book.genre(),
        }
    }

    /// Human-readable field name
    pub fn label(self) -> &'static str {
        match self {
            BookField::Title => "Book Title",
            BookField::Author => "Author Name",
            BookField::Genre => "Genre",
        }
    }
}
