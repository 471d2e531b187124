//! Classify command - normal form and violations.

use std::path::PathBuf;

use armstrong::{Armstrong, NormalForm, ViolationKind};
use colored::Colorize;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (spec, relation) = super::load(&file)?;
    let result = Armstrong::new().analyze_relation(&relation)?;

    if json_output {
        let status = serde_json::json!({
            "name": spec.name,
            "normal_form": result.normal_form,
            "is_bcnf": result.normal_form == NormalForm::Bcnf,
            "is_3nf": result.normal_form >= NormalForm::ThirdNf,
            "violations": result.violations,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Normal form of".cyan().bold(),
        super::title(&spec, &file).white()
    );
    println!();

    let check = |ok: bool| if ok { "yes".green() } else { "no".red() };
    println!("  BCNF: {}", check(result.normal_form == NormalForm::Bcnf));
    println!("  3NF:  {}", check(result.normal_form >= NormalForm::ThirdNf));
    println!();

    if result.violations.is_empty() {
        println!("{}", "No violations.".green());
        return Ok(());
    }

    println!("{}", "Violations:".yellow().bold());
    for violation in &result.violations {
        let tag = match violation.kind {
            ViolationKind::ThirdNf => "3NF ".red(),
            ViolationKind::Bcnf => "BCNF".yellow(),
        };
        println!("  [{}] {}", tag, violation.description());
        if verbose && !violation.non_prime.is_empty() {
            println!("         non-prime: {}", violation.non_prime);
        }
    }

    let hidden = super::hidden_violations(&result, result.violations.len());
    if hidden > 0 {
        println!("  ... and {} more not listed", hidden.to_string().yellow());
    }

    Ok(())
}
