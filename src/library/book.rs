use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::store::{parse_flag, Record};

/// Lending state of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    /// On the shelf
    #[default]
    Available,
    /// Lent out
    Borrowed,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self == Availability::Available
    }

    /// File representation (`true` when on the shelf)
    pub fn as_flag(self) -> &'static str {
        match self {
            Availability::Available => "true",
            Availability::Borrowed => "false",
        }
    }

    pub fn from_flag(flag: &str) -> Self {
        if parse_flag(flag) {
            Availability::Available
        } else {
            Availability::Borrowed
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    genre: String,
    availability: Availability,
}

impl Book {
    /// Create an available book
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            availability: Availability::Available,
        }
    }

    /// Builder-style override of the lending state
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub(crate) fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
    }
}

impl Record for Book {
    const ARITY: usize = 4;
    const SEPARATOR: &'static str = ", ";

    fn from_fields(fields: &[&str]) -> Result<Self> {
        Ok(Book::new(fields[0], fields[1], fields[2])
            .with_availability(Availability::from_flag(fields[3])))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.genre.clone(),
            self.availability.as_flag().to_string(),
        ]
    }

    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Genre: {}, Available: {}",
            self.title,
            self.author,
            self.genre,
            self.availability.as_flag()
        )
    }
}
