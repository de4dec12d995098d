//! Example: print the per-class summary of a specimen workbook.
//!
//! Usage:
//!   cargo run --example class_report -- <workbook>

use std::env;

use lapidary::Catalog;

fn main() -> lapidary::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example class_report -- <workbook>");
        std::process::exit(1);
    }

    let output = Catalog::new().build(&args[1])?;

    let separator = "=".repeat(72);
    println!("{}", separator);
    println!("{} ({})", output.source.file, output.source.hash);
    println!("{}", separator);

    let overall = &output.summary.overall;
    println!(
        "{} records, {} classes, {} countries, {} localities",
        overall.count, overall.classes, overall.countries, overall.localities
    );
    println!();

    println!("{:30} {:>6} {:>12} {:>10}", "class", "count", "total", "average");
    for class in &output.summary.by_class {
        let avg = class
            .avg_cost
            .map(|a| format!("{:.2}", a))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:30} {:>6} {:>12.2} {:>10}",
            class.class, class.count, class.total_cost, avg
        );
    }

    Ok(())
}
