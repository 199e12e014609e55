//! cpudex Binary
//!
//! Starts the interactive console session.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cpudex::console::Console;
use cpudex::{Config, Controller, SlotStore};

/// cpudex console
#[derive(Parser, Debug)]
#[command(name = "cpudex")]
#[command(about = "Bounded in-memory registry of CPU records")]
#[command(version)]
struct Args {
    /// Number of record slots
    #[arg(short, long, default_value = "20")]
    capacity: usize,

    /// Digit-grouping separator used when rendering records
    #[arg(long, default_value = "'")]
    grouping_separator: char,

    /// Decimal separator used when rendering records
    #[arg(long, default_value = ".")]
    decimal_separator: char,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cpudex=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("cpudex v{}", cpudex::VERSION);
    tracing::info!("Store capacity: {}", args.capacity);

    // Build config from args
    let config = Config::builder()
        .capacity(args.capacity)
        .grouping_separator(args.grouping_separator)
        .decimal_separator(args.decimal_separator)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Wire the parts: store and console are injected into the controller
    let store = SlotStore::new(config.capacity);
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut controller = Controller::new(store, console, config.format);

    if let Err(e) = controller.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended");
}
