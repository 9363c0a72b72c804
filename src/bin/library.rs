//! tallybook Library Binary
//!
//! Runs the library menu on stdin/stdout.

use std::io;

use clap::Parser;
use tallybook::menu::{self, LibraryMenu};
use tallybook::{Config, Library};
use tracing_subscriber::{fmt, EnvFilter};

/// tallybook library desk
#[derive(Parser, Debug)]
#[command(name = "tallybook-library")]
#[command(about = "Library catalog and lending tracker")]
#[command(version)]
struct Args {
    /// Directory holding the record files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Book records file name
    #[arg(long, default_value = "books.txt")]
    books_file: String,

    /// Patron records file name
    #[arg(long, default_value = "patrons.txt")]
    patrons_file: String,
}

fn main() {
    // Logs go to stderr so the menu owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tallybook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("tallybook library v{}", tallybook::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .books_file(args.books_file)
        .patrons_file(args.patrons_file)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    let mut menu = LibraryMenu::new(Library::open(&config));

    let stdin = io::stdin();
    if let Err(e) = menu::run(&mut menu, stdin.lock(), io::stdout()) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
