//! Example: Analyze a relation description with Armstrong.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- test_data/chain.json

use std::env;
use std::path::Path;

use armstrong::{Armstrong, ArmstrongConfig};

fn main() -> armstrong::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- test_data/chain.json");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Armstrong Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let armstrong = Armstrong::with_config(ArmstrongConfig::default().with_closures(true));
    let result = armstrong.analyze(path)?;

    println!("## Relation");
    if let Some(name) = &result.name {
        println!("  Name: {}", name);
    }
    println!("  Attributes: {}", result.universe);
    for fd in &result.dependencies {
        println!("  {}", fd);
    }
    println!();

    println!("## Closures ({} subsets)", result.closures.len());
    println!();
    for entry in &result.closures {
        println!("  {:30} -> {}", entry.attributes.to_string(), entry.closure);
    }
    println!();

    println!("## Keys");
    for key in &result.minimal_keys {
        println!("  {}", key);
    }
    println!("  Prime attributes: {}", result.prime_attributes);
    println!();

    println!("## Normal Form: {}", result.normal_form);
    for violation in result.violations.iter().take(10) {
        println!("  - {}", violation.description());
    }
    if result.violations.len() > 10 {
        println!("  ... and {} more", result.violations.len() - 10);
    }
    println!();

    if !result.decompositions.is_empty() {
        println!("## Decompositions");
        for (name, report) in &result.decompositions {
            let status = if report.preserving { "preserving" } else { "NOT preserving" };
            println!("  {} ({} pieces): {}", name, report.pieces.len(), status);
            for fd in &report.lost {
                println!("    lost: {}", fd);
            }
        }
        println!();
    }

    println!("{}", separator);
    println!("Recommendation: {}", result.summary.recommendation);
    println!("{}", separator);

    Ok(())
}
