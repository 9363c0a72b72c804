//! Library menu
//!
//! State machine behind `tallybook-library`.

use crate::error::TallyError;
use crate::library::{Book, BookField, Library, Patron};

use super::{parse_choice, MenuMachine, Reply, INVALID_CHOICE, NOT_A_NUMBER};

const MAIN_MENU: &str = "\nLibrary Management System Menu:
1. Add Book
2. Display Books
3. Add Patron
4. Borrow Book
5. Return Book
6. Calculate Fine
7. Search
8. Generate Reports
0. Exit
Enter your choice: ";

const SEARCH_MENU: &str = "Search Options:
1. Search Books by Title
2. Search Books by Author
3. Search Books by Genre
4. Search Patrons by Name
0. Cancel
Enter your choice: ";

const REPORT_MENU: &str = "Report Options:
1. Book Availability Report
2. Borrowing History Report
3. Fine Report
0. Cancel
Enter your choice: ";

/// What the library menu is waiting for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LibraryState {
    #[default]
    Main,
    BookTitle,
    BookAuthor { title: String },
    BookGenre { title: String, author: String },
    PatronName,
    PatronContact { name: String },
    BorrowPatron,
    BorrowTitle { patron: String },
    ReturnTitle,
    FinePatron,
    FineTitle { patron: String },
    SearchChoice,
    SearchBooks(BookField),
    SearchPatrons,
    ReportChoice,
}

/// Menu over a [`Library`]
#[derive(Debug)]
pub struct LibraryMenu {
    library: Library,
    state: LibraryState,
}

impl LibraryMenu {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            state: LibraryState::Main,
        }
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_library(self) -> Library {
        self.library
    }

    // =========================================================================
    // Per-State Handlers
    // =========================================================================

    fn main_choice(&mut self, input: &str) -> Reply {
        let Some(choice) = parse_choice(input) else {
            return Reply::line(NOT_A_NUMBER);
        };

        match choice {
            1 => {
                self.state = LibraryState::BookTitle;
                Reply::line("Enter Book Details:")
            }
            2 => Reply::lines(self.catalog_lines()),
            3 => {
                self.state = LibraryState::PatronName;
                Reply::line("Enter Patron Details:")
            }
            4 => {
                self.state = LibraryState::BorrowPatron;
                Reply::empty()
            }
            5 => {
                self.state = LibraryState::ReturnTitle;
                Reply::lines(self.catalog_lines())
            }
            6 => {
                self.state = LibraryState::FinePatron;
                Reply::empty()
            }
            7 => {
                self.state = LibraryState::SearchChoice;
                Reply::empty()
            }
            8 => {
                self.state = LibraryState::ReportChoice;
                Reply::empty()
            }
            0 => Reply::exit(["Exiting Library Management System. Goodbye!"]),
            _ => Reply::line(INVALID_CHOICE),
        }
    }

    fn borrow_patron(&mut self, name: &str) -> Reply {
        if self.library.find_patron(name).is_none() {
            return Reply::line(describe(&TallyError::PatronNotFound));
        }

        self.state = LibraryState::BorrowTitle {
            patron: name.to_string(),
        };
        Reply::lines(self.catalog_lines())
    }

    fn borrow_title(&mut self, patron: &str, title: &str) -> Reply {
        match self.library.borrow(patron, title) {
            Ok(loan) => Reply::line(format!("Book borrowed successfully by {}", loan.patron)),
            Err(e) => Reply::line(describe(&e)),
        }
    }

    fn return_title(&mut self, title: &str) -> Reply {
        match self.library.return_book(title) {
            Ok(()) => Reply::line("Book returned successfully."),
            Err(TallyError::BookNotFound) => Reply::line("Book not found."),
            Err(e) => Reply::line(describe(&e)),
        }
    }

    fn fine_patron(&mut self, name: &str) -> Reply {
        if self.library.find_patron(name).is_none() {
            return Reply::line(describe(&TallyError::PatronNotFound));
        }

        self.state = LibraryState::FineTitle {
            patron: name.to_string(),
        };
        Reply::empty()
    }

    fn fine_title(&self, patron: &str, title: &str) -> Reply {
        match self.library.calculate_fine(patron, title) {
            Ok(fine) if fine.is_due() => {
                Reply::line(format!("Fine for {}: ${:?}", fine.patron, fine.amount))
            }
            Ok(fine) => Reply::line(format!("No fines for {}.", fine.patron)),
            Err(e) => Reply::line(describe(&e)),
        }
    }

    fn search_choice(&mut self, input: &str) -> Reply {
        let Some(choice) = parse_choice(input) else {
            return Reply::line(NOT_A_NUMBER);
        };

        self.state = match choice {
            1 => LibraryState::SearchBooks(BookField::Title),
            2 => LibraryState::SearchBooks(BookField::Author),
            3 => LibraryState::SearchBooks(BookField::Genre),
            4 => LibraryState::SearchPatrons,
            0 => return Reply::empty(),
            _ => return Reply::line(INVALID_CHOICE),
        };
        Reply::empty()
    }

    fn report_choice(&self, input: &str) -> Reply {
        let Some(choice) = parse_choice(input) else {
            return Reply::line(NOT_A_NUMBER);
        };

        match choice {
            1 => {
                let mut lines = vec!["Book Availability Report:".to_string()];
                lines.extend(
                    self.library
                        .availability_report()
                        .into_iter()
                        .map(|(title, available)| {
                            let status = if available { "Available" } else { "Not Available" };
                            format!("{}: {}", title, status)
                        }),
                );
                Reply::lines(lines)
            }
            2 => Reply::line("Borrowing History Report: (not tracked; books do not record borrowers)"),
            3 => Reply::line("Fine Report: (not tracked; no borrow dates are recorded)"),
            0 => Reply::empty(),
            _ => Reply::line(INVALID_CHOICE),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn catalog_lines(&self) -> Vec<String> {
        let mut lines = vec!["Library Books:".to_string()];
        lines.extend(self.library.books().iter().map(Book::to_string));
        lines
    }
}

impl MenuMachine for LibraryMenu {
    fn prompt(&self) -> String {
        match &self.state {
            LibraryState::Main => MAIN_MENU.to_string(),
            LibraryState::BookTitle => "Title: ".to_string(),
            LibraryState::BookAuthor { .. } => "Author: ".to_string(),
            LibraryState::BookGenre { .. } => "Genre: ".to_string(),
            LibraryState::PatronName => "Name: ".to_string(),
            LibraryState::PatronContact { .. } => "Contact Information: ".to_string(),
            LibraryState::BorrowPatron | LibraryState::FinePatron => "Enter Patron Name: ".to_string(),
            LibraryState::BorrowTitle { .. } => "Enter Book Title to Borrow: ".to_string(),
            LibraryState::ReturnTitle => "Enter Book Title to Return: ".to_string(),
            LibraryState::FineTitle { .. } => "Enter Book Title: ".to_string(),
            LibraryState::SearchChoice => SEARCH_MENU.to_string(),
            LibraryState::SearchBooks(field) => format!("Enter {} to Search: ", field.label()),
            LibraryState::SearchPatrons => "Enter Patron Name to Search: ".to_string(),
            LibraryState::ReportChoice => REPORT_MENU.to_string(),
        }
    }

    fn feed(&mut self, input: &str) -> Reply {
        // Every state falls back to the main menu unless its handler moves on
        let state = std::mem::take(&mut self.state);

        match state {
            LibraryState::Main => self.main_choice(input),
            LibraryState::BookTitle => {
                self.state = LibraryState::BookAuthor {
                    title: input.to_string(),
                };
                Reply::empty()
            }
            LibraryState::BookAuthor { title } => {
                self.state = LibraryState::BookGenre {
                    title,
                    author: input.to_string(),
                };
                Reply::empty()
            }
            LibraryState::BookGenre { title, author } => {
                self.library.add_book(Book::new(title, author, input));
                Reply::line("Book added.")
            }
            LibraryState::PatronName => {
                self.state = LibraryState::PatronContact {
                    name: input.to_string(),
                };
                Reply::empty()
            }
            LibraryState::PatronContact { name } => {
                self.library.add_patron(Patron::new(name, input));
                Reply::line("Patron added.")
            }
            LibraryState::BorrowPatron => self.borrow_patron(input),
            LibraryState::BorrowTitle { patron } => self.borrow_title(&patron, input),
            LibraryState::ReturnTitle => self.return_title(input),
            LibraryState::FinePatron => self.fine_patron(input),
            LibraryState::FineTitle { patron } => self.fine_title(&patron, input),
            LibraryState::SearchChoice => self.search_choice(input),
            LibraryState::SearchBooks(field) => {
                search_results(self.library.search_books(field, input))
            }
            LibraryState::SearchPatrons => search_results(self.library.search_patrons(input)),
            LibraryState::ReportChoice => self.report_choice(input),
        }
    }
}

/// Render search hits, or the empty-result notice
fn search_results<T: ToString>(results: Vec<&T>) -> Reply {
    if results.is_empty() {
        return Reply::line("No matching results found.");
    }

    let mut lines = vec!["Search Results:".to_string()];
    lines.extend(results.into_iter().map(|r| r.to_string()));
    Reply::lines(lines)
}

/// User-facing text for library failures
fn describe(error: &TallyError) -> String {
    match error {
        TallyError::PatronNotFound => "Patron not found. Please add the patron first.".to_string(),
        TallyError::BookNotFound => "Book not found. Please add the book first.".to_string(),
        TallyError::BookUnavailable => "Sorry, the book is not available for borrowing.".to_string(),
        TallyError::BookAlreadyAvailable => {
            "The book is already available. No need to return.".to_string()
        }
        other => format!("Error: {}", other),
    }
}
