//! Keys command - minimal keys and prime attributes.

use std::path::PathBuf;

use armstrong::Armstrong;
use armstrong::analysis::prime_attributes_of;
use colored::Colorize;

pub fn run(file: PathBuf, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (spec, relation) = super::load(&file)?;

    let keys = Armstrong::new().minimal_keys(&relation)?;
    let prime = prime_attributes_of(&keys);
    let non_prime = relation.universe().difference(&prime);

    if json_output {
        let report = serde_json::json!({
            "name": spec.name,
            "minimal_keys": keys,
            "prime_attributes": prime,
            "non_prime_attributes": non_prime,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Keys for".cyan().bold(),
        super::title(&spec, &file).white()
    );
    println!();

    for (i, key) in keys.iter().enumerate() {
        println!("  {}. {}", i + 1, key.to_string().green());
    }
    println!();
    println!("Prime:     {}", prime);
    println!("Non-prime: {}", non_prime);

    Ok(())
}
