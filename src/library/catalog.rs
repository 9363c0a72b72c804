//! Library service
//!
//! Coordinates the book and patron stores.

use std::path::Path;

use crate::config::Config;
use crate::error::{Result, TallyError};
use crate::store::{LoadReport, RecordStore};

use super::{Availability, Book, BookField, Patron};

// =============================================================================
// Fine Constants
// =============================================================================
// No borrow dates are recorded, so the overdue period is fixed.

/// Days assumed to have passed since a book was borrowed
pub const DAYS_SINCE_BORROWING: u32 = 10;

/// Days a book may be kept without a fine
pub const LOAN_PERIOD_DAYS: u32 = 7;

/// Fine charged per overdue day
pub const FINE_PER_DAY: f64 = 1.0;

/// A successful borrow
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    /// Patron name as stored
    pub patron: String,

    /// Book title as stored
    pub title: String,
}

/// Fine estimate for a patron and book
#[derive(Debug, Clone, PartialEq)]
pub struct Fine {
    /// Patron name as stored
    pub patron: String,

    pub days_overdue: u32,

    pub amount: f64,
}

impl Fine {
    pub fn is_due(&self) -> bool {
        self.days_overdue > 0
    }
}

/// The library catalog and lending desk
///
/// Every mutation rewrites the affected file immediately. A failed rewrite is
/// logged and the in-memory change is kept.
#[derive(Debug)]
pub struct Library {
    books: RecordStore<Book>,
    patrons: RecordStore<Patron>,
}

impl Library {
    /// Open the library using the configured file paths
    pub fn open(config: &Config) -> Self {
        Self::open_paths(&config.books_path(), &config.patrons_path())
    }

    /// Open the library from explicit file paths
    pub fn open_paths(books_path: &Path, patrons_path: &Path) -> Self {
        let books = RecordStore::open(books_path);
        let patrons = RecordStore::open(patrons_path);

        tracing::info!(
            "Library opened: {} books, {} patrons",
            books.len(),
            patrons.len()
        );

        Self { books, patrons }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Add a book and persist the catalog
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!("Adding book {:?}", book.title());
        self.books.push(book);
        Self::persist(&self.books);
    }

    /// Register a patron and persist the patron list
    pub fn add_patron(&mut self, patron: Patron) {
        tracing::debug!("Adding patron {:?}", patron.name());
        self.patrons.push(patron);
        Self::persist(&self.patrons);
    }

    pub fn books(&self) -> &[Book] {
        self.books.records()
    }

    pub fn patrons(&self) -> &[Patron] {
        self.patrons.records()
    }

    /// First book whose title matches, ignoring case
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.find_by_key(title)
    }

    /// Patron whose name matches, ignoring case
    pub fn find_patron(&self, name: &str) -> Option<&Patron> {
        self.patrons.find_by_key(name)
    }

    // =========================================================================
    // Lending
    // =========================================================================

    /// Lend a book to a patron
    ///
    /// Checks, in order: patron exists, book exists, book is available.
    /// Nothing changes on failure.
    pub fn borrow(&mut self, patron_name: &str, title: &str) -> Result<Loan> {
        let patron = self
            .patrons
            .find_by_key(patron_name)
            .ok_or(TallyError::PatronNotFound)?
            .name()
            .to_string();

        let book = self
            .books
            .find_by_key_mut(title)
            .ok_or(TallyError::BookNotFound)?;

        if !book.is_available() {
            return Err(TallyError::BookUnavailable);
        }

        book.set_availability(Availability::Borrowed);
        let loan = Loan {
            patron,
            title: book.title().to_string(),
        };

        tracing::info!("{:?} borrowed by {:?}", loan.title, loan.patron);
        Self::persist(&self.books);
        Ok(loan)
    }

    /// Put a borrowed book back on the shelf
    pub fn return_book(&mut self, title: &str) -> Result<()> {
        let book = self
            .books
            .find_by_key_mut(title)
            .ok_or(TallyError::BookNotFound)?;

        if book.is_available() {
            return Err(TallyError::BookAlreadyAvailable);
        }

        book.set_availability(Availability::Available);
        tracing::info!("{:?} returned", book.title());

        Self::persist(&self.books);
        Ok(())
    }

    /// Estimate the fine a patron owes for a book
    ///
    /// Both must exist. The amount does not depend on the book's state.
    pub fn calculate_fine(&self, patron_name: &str, title: &str) -> Result<Fine> {
        let patron = self
            .find_patron(patron_name)
            .ok_or(TallyError::PatronNotFound)?;
        self.find_book(title).ok_or(TallyError::BookNotFound)?;

        let days_overdue = DAYS_SINCE_BORROWING.saturating_sub(LOAN_PERIOD_DAYS);

        Ok(Fine {
            patron: patron.name().to_string(),
            days_overdue,
            amount: f64::from(days_overdue) * FINE_PER_DAY,
        })
    }

    // =========================================================================
    // Search & Reports
    // =========================================================================

    /// Books whose field contains `query`, ignoring case
    pub fn search_books(&self, field: BookField, query: &str) -> Vec<&Book> {
        self.books.filter(|book| field.of(book), query)
    }

    /// Patrons whose name contains `query`, ignoring case
    pub fn search_patrons(&self, query: &str) -> Vec<&Patron> {
        self.patrons.filter(Patron::name, query)
    }

    /// `(title, available)` for every book in catalog order
    pub fn availability_report(&self) -> Vec<(&str, bool)> {
        self.books
            .iter()
            .map(|book| (book.title(), book.is_available()))
            .collect()
    }

    /// Load reports for the book and patron files
    pub fn load_reports(&self) -> (&LoadReport, &LoadReport) {
        (self.books.load_report(), self.patrons.load_report())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn persist<R: crate::store::Record>(store: &RecordStore<R>) {
        if let Err(e) = store.save() {
            tracing::warn!("Error writing to {}: {}", store.path().display(), e);
        }
    }
}
