//! CLI argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Lapidary: build catalog JSON from a mineral specimen workbook
#[derive(Parser)]
#[command(name = "lapidary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the workbook (xlsx, xls, xlsb or ods) with "data" and "nations" sheets
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Directory for data.json and summary.json.
    ///
    /// Defaults to the current working directory, not the directory of the
    /// lapidary executable.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Record unparseable cost cells as missing instead of failing
    #[arg(long)]
    pub lenient_cost: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
