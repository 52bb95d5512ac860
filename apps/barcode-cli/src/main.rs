//! # gochi-barcode Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap exits with status 2 on usage errors)
//! 2. Load configuration from the environment
//! 3. Initialize tracing (stderr)
//! 4. Run the command and exit with its status

use std::io;
use std::process;

use clap::Parser;
use gochi_barcode::config::CliConfig;
use gochi_barcode::error::EXIT_USAGE;
use gochi_barcode::{init_tracing, run, Cli};
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gochi-barcode: {}", e);
            process::exit(EXIT_USAGE);
        }
    };

    init_tracing(&config);
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let status = match run(cli, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("gochi-barcode: {}", e);
            e.exit_code()
        }
    };

    process::exit(status);
}
