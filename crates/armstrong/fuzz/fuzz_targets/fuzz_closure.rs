//! Fuzz target for the closure engine.
//!
//! Builds a relation over up to 16 attributes from bitmasks and checks
//! closure against repeated application of the dependencies.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use armstrong::{AttributeSet, FunctionalDependency, Relation};

const NAMES: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
];

#[derive(Debug, Arbitrary)]
struct Input {
    dependencies: Vec<(u16, u16)>,
    seed: u16,
}

fn from_mask(mask: u16) -> AttributeSet {
    (0..NAMES.len())
        .filter(|bit| mask & (1 << bit) != 0)
        .map(|bit| NAMES[bit])
        .collect()
}

fuzz_target!(|input: Input| {
    if input.dependencies.len() > 64 {
        return;
    }

    let dependencies: Vec<FunctionalDependency> = input
        .dependencies
        .iter()
        .filter(|(lhs, _)| *lhs != 0)
        .map(|&(lhs, rhs)| FunctionalDependency::new(from_mask(lhs), from_mask(rhs)))
        .collect();

    let relation = Relation::new(NAMES, dependencies).expect("masks stay inside the universe");
    let seed = from_mask(input.seed);
    let closure = relation.closure(&seed);

    let mut expected = seed.clone();
    loop {
        let before = expected.len();
        for fd in relation.dependencies() {
            if fd.lhs.is_subset(&expected) {
                expected.extend(fd.rhs.iter());
            }
        }
        if expected.len() == before {
            break;
        }
    }

    assert_eq!(closure, expected);
    assert_eq!(relation.closure(&closure), closure);
});
