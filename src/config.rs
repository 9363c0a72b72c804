//! Configuration for tallybook
//!
//! Centralized configuration with defaults matching the file names the
//! menus have always used.

use std::path::PathBuf;

use crate::error::{Result, TallyError};

/// Main configuration shared by both applications
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding every record file
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── books.txt        (library catalog)
    ///     ├── patrons.txt      (library patrons)
    ///     └── bank_data.txt    (bank accounts)
    pub data_dir: PathBuf,

    /// File name of the book records
    pub books_file: String,

    /// File name of the patron records
    pub patrons_file: String,

    /// File name of the account records
    pub accounts_file: String,

    // -------------------------------------------------------------------------
    // Ledger Configuration
    // -------------------------------------------------------------------------
    /// Account numbers are assigned strictly above this value
    pub account_number_base: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            books_file: "books.txt".to_string(),
            patrons_file: "patrons.txt".to_string(),
            accounts_file: "bank_data.txt".to_string(),
            account_number_base: 1000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the book records file
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    /// Full path of the patron records file
    pub fn patrons_path(&self) -> PathBuf {
        self.data_dir.join(&self.patrons_file)
    }

    /// Full path of the account records file
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(&self.accounts_file)
    }

    /// Reject configurations that cannot name a file
    pub fn validate(&self) -> Result<()> {
        for (label, name) in [
            ("books_file", &self.books_file),
            ("patrons_file", &self.patrons_file),
            ("accounts_file", &self.accounts_file),
        ] {
            if name.trim().is_empty() {
                return Err(TallyError::Config(format!("{} must not be empty", label)));
            }
        }
        if self.books_file == self.patrons_file {
            return Err(TallyError::Config(
                "books_file and patrons_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the book records file name
    pub fn books_file(mut self, name: impl Into<String>) -> Self {
        self.config.books_file = name.into();
        self
    }

    /// Set the patron records file name
    pub fn patrons_file(mut self, name: impl Into<String>) -> Self {
        self.config.patrons_file = name.into();
        self
    }

    /// Set the account records file name
    pub fn accounts_file(mut self, name: impl Into<String>) -> Self {
        self.config.accounts_file = name.into();
        self
    }

    /// Set the base above which account numbers are assigned
    pub fn account_number_base(mut self, base: u32) -> Self {
        self.config.account_number_base = base;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
