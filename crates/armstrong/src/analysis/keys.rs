//! Candidate keys and prime attributes.
//!
//! Keys are found by closing every subset of the universe, so the cost is
//! exponential in the number of attributes. This is meant for schemas of a
//! few dozen attributes at most; the [`Armstrong`](crate::Armstrong) facade
//! refuses wider universes through `ArmstrongConfig::max_universe`.

use tracing::debug;

use crate::schema::{AttributeSet, Relation, Subsets};

/// Every superkey of the relation, smallest first.
pub fn superkeys(relation: &Relation) -> Vec<AttributeSet> {
    Subsets::new(relation.universe())
        .filter(|subset| relation.is_superkey(subset))
        .collect()
}

/// The minimal (candidate) keys of the relation.
///
/// Subsets are visited in increasing size, so a key found later can only be
/// minimal if it contains none of the keys found earlier; supersets of a
/// known key are skipped without computing their closure. The result is
/// sorted by size, then by attribute order.
pub fn minimal_keys(relation: &Relation) -> Vec<AttributeSet> {
    let mut keys: Vec<AttributeSet> = Vec::new();

    for subset in Subsets::new(relation.universe()) {
        if keys.iter().any(|key| subset.is_strict_superset(key)) {
            continue;
        }
        if relation.is_superkey(&subset) {
            keys.push(subset);
        }
    }

    keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    debug!(keys = keys.len(), "minimal keys found");
    keys
}

/// Attributes that belong to at least one minimal key.
pub fn prime_attributes(relation: &Relation) -> AttributeSet {
    prime_attributes_of(&minimal_keys(relation))
}

/// Union of an already computed list of keys.
pub fn prime_attributes_of(keys: &[AttributeSet]) -> AttributeSet {
    keys.iter().flat_map(|key| key.iter()).collect()
}
