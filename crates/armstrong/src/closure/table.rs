//! Closures of every attribute subset.

use serde::{Deserialize, Serialize};

use crate::schema::{AttributeSet, Relation, Subsets};

/// One row of a closure table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureEntry {
    /// The starting attributes.
    pub attributes: AttributeSet,
    /// Everything they determine.
    pub closure: AttributeSet,
}

impl ClosureEntry {
    /// Returns true if no dependency adds anything to the starting set.
    pub fn is_closed(&self) -> bool {
        self.closure == self.attributes
    }
}

/// Compute the closure of every non-empty subset of the universe, smallest
/// subsets first.
///
/// The table has `2^n - 1` rows for `n` attributes.
pub fn closure_table(relation: &Relation) -> Vec<ClosureEntry> {
    Subsets::new(relation.universe())
        .map(|attributes| {
            let closure = relation.closure(&attributes);
            ClosureEntry {
                attributes,
                closure,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FunctionalDependency;

    #[test]
    fn test_table_covers_every_subset() {
        let relation = Relation::new(
            ["A", "B", "C"],
            vec![FunctionalDependency::new(["A"], ["B"])],
        )
        .unwrap();

        let table = closure_table(&relation);
        assert_eq!(table.len(), 7);
        assert_eq!(table[0].attributes, AttributeSet::from(["A"]));
        assert_eq!(table[0].closure, AttributeSet::from(["A", "B"]));
        assert!(!table[0].is_closed());
        assert!(table[1].is_closed());
    }
}
