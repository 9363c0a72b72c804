//! tallybook Bank Binary
//!
//! Runs the banking menu on stdin/stdout.

use std::io;

use clap::Parser;
use tallybook::menu::{self, BankMenu};
use tallybook::{Bank, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// tallybook bank ledger
#[derive(Parser, Debug)]
#[command(name = "tallybook-bank")]
#[command(about = "Toy bank ledger backed by a flat file")]
#[command(version)]
struct Args {
    /// Directory holding the record files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Account records file name
    #[arg(long, default_value = "bank_data.txt")]
    accounts_file: String,

    /// Account numbers are assigned above this value
    #[arg(long, default_value = "1000")]
    account_base: u32,
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

    tracing::info!("tallybook bank v{}", tallybook::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .accounts_file(args.accounts_file)
        .account_number_base(args.account_base)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    let mut menu = BankMenu::new(Bank::open(&config));

    let stdin = io::stdin();
    if let Err(e) = menu::run(&mut menu, stdin.lock(), io::stdout()) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
