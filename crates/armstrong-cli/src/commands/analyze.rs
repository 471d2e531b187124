//! Analyze command - full report for a relation file.

use std::path::PathBuf;

use armstrong::{Armstrong, ArmstrongConfig, NormalForm};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    json_output: bool,
    closures: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let armstrong = Armstrong::with_config(ArmstrongConfig::default().with_closures(closures));
    let result = armstrong.analyze(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let title = result
        .name
        .clone()
        .unwrap_or_else(|| file.display().to_string());
    println!("{} {}", "Analyzing".cyan().bold(), title.white());
    println!();

    println!("{}", "Relation:".yellow().bold());
    println!("  Attributes:   {}", result.universe);
    println!(
        "  Dependencies: {} ({} trivial)",
        result.summary.dependency_count.to_string().white().bold(),
        result.summary.trivial_dependency_count
    );
    if verbose {
        for fd in &result.dependencies {
            println!("    {}", fd);
        }
    }
    println!();

    if !result.closures.is_empty() {
        println!("{}", "Closures:".yellow().bold());
        for entry in &result.closures {
            let closure = entry.closure.to_string();
            let closure = if entry.closure == result.universe {
                closure.green()
            } else {
                closure.normal()
            };
            println!("  {:30} -> {}", entry.attributes.to_string(), closure);
        }
        println!();
    }

    println!("{}", "Keys:".yellow().bold());
    for key in &result.minimal_keys {
        println!("  {}", key.to_string().green());
    }
    println!("  Prime attributes: {}", result.prime_attributes);
    println!();

    let normal_form = match result.normal_form {
        NormalForm::Bcnf => result.normal_form.label().green().bold(),
        NormalForm::ThirdNf => result.normal_form.label().yellow().bold(),
        NormalForm::BelowThirdNf => result.normal_form.label().red().bold(),
    };
    println!("{} {}", "Normal form:".yellow().bold(), normal_form);
    println!(
        "  {} BCNF violations, {} 3NF violations",
        result.summary.bcnf_violation_count.to_string().yellow(),
        result.summary.third_nf_violation_count.to_string().red()
    );

    let shown = if verbose { result.violations.len() } else { 5 };
    for violation in result.violations.iter().take(shown) {
        println!("  - {}", violation.description());
    }
    let hidden = super::hidden_violations(&result, shown);
    if hidden > 0 {
        println!("  ... and {} more (use --verbose to see more)", hidden);
    }
    println!();

    if !result.decompositions.is_empty() {
        println!("{}", "Decompositions:".yellow().bold());
        for (name, report) in &result.decompositions {
            let status = if report.preserving {
                "preserving".green()
            } else {
                "not preserving".red()
            };
            println!("  {:20} {}", name, status);
            for fd in &report.lost {
                println!("    lost: {}", fd);
            }
            if !report.uncovered.is_empty() {
                println!("    uncovered: {}", report.uncovered.to_string().yellow());
            }
        }
        println!();
    }

    println!(
        "{} {}",
        "Recommendation:".cyan().bold(),
        result.summary.recommendation
    );

    Ok(())
}
