//! Functional dependency definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attribute::AttributeSet;

/// A functional dependency `lhs -> rhs`: the values of `lhs` determine the
/// values of `rhs`.
///
/// No invariants are enforced here; a [`Relation`](super::Relation) checks
/// every dependency against its universe when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionalDependency {
    /// Determinant.
    pub lhs: AttributeSet,
    /// Determined attributes.
    pub rhs: AttributeSet,
}

impl FunctionalDependency {
    /// Create a dependency.
    ///
    /// ```
    /// use armstrong::FunctionalDependency;
    ///
    /// let fd = FunctionalDependency::new(["B", "C"], ["E"]);
    /// assert_eq!(fd.to_string(), "B, C -> E");
    /// ```
    pub fn new(lhs: impl Into<AttributeSet>, rhs: impl Into<AttributeSet>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Returns true if `rhs ⊆ lhs`.
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(&self.lhs)
    }

    /// Every attribute the dependency mentions.
    pub fn attributes(&self) -> AttributeSet {
        self.lhs.union(&self.rhs)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", side(&self.lhs), side(&self.rhs))
    }
}

fn side(set: &AttributeSet) -> String {
    if set.is_empty() {
        "∅".to_string()
    } else {
        set.names().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_dependency() {
        assert!(FunctionalDependency::new(["A", "B"], ["A"]).is_trivial());
        assert!(!FunctionalDependency::new(["A"], ["A", "B"]).is_trivial());
    }

    #[test]
    fn test_attributes() {
        let fd = FunctionalDependency::new(["C", "E"], ["D", "F"]);
        assert_eq!(fd.attributes(), AttributeSet::from(["C", "D", "E", "F"]));
    }

    #[test]
    fn test_display_with_empty_rhs() {
        let fd = FunctionalDependency::new(["C", "E"], AttributeSet::new());
        assert_eq!(fd.to_string(), "C, E -> ∅");
    }
}
