//! Build command - convert a workbook into data.json and summary.json.

use std::path::PathBuf;

use colored::Colorize;
use lapidary::{Catalog, CostPolicy};

pub fn run(
    workbook: PathBuf,
    output_dir: Option<PathBuf>,
    lenient_cost: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let policy = if lenient_cost {
        CostPolicy::Lenient
    } else {
        CostPolicy::Strict
    };

    let output = Catalog::new().with_cost_policy(policy).build(&workbook)?;

    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let paths = output.write(&output_dir)?;

    let file_name = |p: &PathBuf| {
        p.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    println!(
        "{} {} + {} updated ({} records, {} classes)",
        "OK:".green().bold(),
        file_name(&paths.data).white(),
        file_name(&paths.summary).white(),
        output.records.len(),
        output.summary.by_class.len()
    );

    Ok(())
}
