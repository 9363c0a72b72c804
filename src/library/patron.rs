use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::store::Record;

/// A registered library user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    name: String,
    contact_info: String,
}

impl Patron {
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }
}

impl Record for Patron {
    const ARITY: usize = 2;
    const SEPARATOR: &'static str = ", ";

    fn from_fields(fields: &[&str]) -> Result<Self> {
        Ok(Patron::new(fields[0], fields[1]))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.contact_info.clone()]
    }

    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Contact Information: {}", self.name, self.contact_info)
    }
}
