//! Closure command - closure of one attribute set.

use std::path::PathBuf;

use armstrong::{ArmstrongError, AttributeSet};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    attributes: Vec<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_spec, relation) = super::load(&file)?;

    let seed: AttributeSet = attributes
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();

    let outside = relation.outside_universe(&seed);
    if !outside.is_empty() {
        return Err(ArmstrongError::InvalidSubset {
            subset: seed,
            outside,
        }
        .into());
    }

    let closure = relation.closure(&seed);
    let added = closure.difference(&seed);

    println!("{} -> {}", seed.to_string().white().bold(), closure);
    if verbose {
        println!("  Added: {}", added);
    }

    if closure == *relation.universe() {
        println!("{}", "Superkey: determines every attribute".green());
    } else {
        let missing = relation.universe().difference(&closure);
        println!("{} {}", "Not a superkey; missing".yellow(), missing);
    }

    Ok(())
}
