//! Decompose command - dependency preservation of a decomposition.

use std::path::PathBuf;

use armstrong::{Armstrong, AttributeSet, DecompositionReport};
use colored::Colorize;
use indexmap::IndexMap;

pub fn run(
    file: PathBuf,
    name: Option<String>,
    pieces: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (spec, relation) = super::load(&file)?;

    let mut selected: IndexMap<String, Vec<AttributeSet>> = if !pieces.is_empty() {
        let sets = pieces.iter().map(|p| parse_piece(p)).collect();
        IndexMap::from([("command line".to_string(), sets)])
    } else {
        spec.decomposition_sets()
    };

    if let Some(name) = name {
        let sets = selected.shift_remove(&name).ok_or_else(|| {
            format!(
                "No decomposition named '{}' in {}",
                name,
                file.display()
            )
        })?;
        selected = IndexMap::from([(name, sets)]);
    }

    if selected.is_empty() {
        return Err(format!(
            "No decompositions in {}; pass --piece A,B,C for each piece",
            file.display()
        )
        .into());
    }

    let armstrong = Armstrong::new();
    let mut reports: IndexMap<String, DecompositionReport> = IndexMap::new();
    for (name, sets) in selected {
        let report = armstrong.check_decomposition(&relation, &sets)?;
        reports.insert(name, report);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (name, report) in &reports {
        let status = if report.preserving {
            "preserving".green().bold()
        } else {
            "not preserving".red().bold()
        };
        println!("{} {}: {}", "Decomposition".cyan().bold(), name.white(), status);

        for projection in &report.projections {
            println!("  {}", projection.attributes.to_string().white());
            if verbose {
                for fd in &projection.dependencies {
                    println!("    {}", fd);
                }
            }
        }

        if !report.lost.is_empty() {
            println!("  {}", "Lost dependencies:".yellow());
            for fd in &report.lost {
                println!("    {}", fd.to_string().red());
            }
        }
        if !report.uncovered.is_empty() {
            println!("  {} {}", "Uncovered attributes:".yellow(), report.uncovered);
        }
        println!();
    }

    Ok(())
}

fn parse_piece(piece: &str) -> AttributeSet {
    piece
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_piece() {
        assert_eq!(parse_piece("A, B,C"), AttributeSet::from(["A", "B", "C"]));
        assert!(parse_piece(" , ").is_empty());
    }
}
