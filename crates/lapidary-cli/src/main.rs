//! Lapidary CLI - build the specimen catalog from a workbook.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use logging::LogConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&LogConfig::from_flags(cli.verbose, cli.quiet)) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = commands::build::run(cli.workbook, cli.output_dir, cli.lenient_cost);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
