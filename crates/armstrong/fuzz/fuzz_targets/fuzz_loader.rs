//! Fuzz target for the JSON loader.
//!
//! This fuzzer tests that loading a relation file:
//! 1. Never panics on malformed JSON
//! 2. Rejects dependencies outside the universe with an error
//! 3. Produces relations whose keys really determine the universe

#![no_main]

use libfuzzer_sys::fuzz_target;
use armstrong::{Armstrong, ArmstrongConfig, Loader};
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(mut temp_file) = tempfile::NamedTempFile::new() else {
        return;
    };
    if temp_file.write_all(data).is_err() {
        return;
    }

    let Ok((spec, _source)) = Loader::new().load(temp_file.path()) else {
        return;
    };

    // Keep enumeration cheap
    let armstrong = Armstrong::with_config(ArmstrongConfig::default().with_max_universe(10));
    if let Ok(result) = armstrong.analyze_spec(&spec) {
        let relation = spec.to_relation().expect("analyzed spec builds a relation");
        for key in &result.minimal_keys {
            assert_eq!(&relation.closure(key), relation.universe());
        }
    }
});
