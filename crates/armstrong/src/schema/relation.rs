//! Relation: an attribute universe and its functional dependencies.

use tracing::debug;

use crate::closure::ClosureGraph;
use crate::error::{ArmstrongError, Result};

use super::attribute::AttributeSet;
use super::dependency::FunctionalDependency;
use super::subsets::MAX_ENUMERABLE_ATTRIBUTES;

/// A relation schema.
///
/// Building a relation validates every dependency against the universe and
/// derives the [`ClosureGraph`] used by all closure computations. The graph
/// is immutable afterwards; operations that change the dependency list
/// (projection, reconstruction) build a new `Relation`.
///
/// All analysis operations take `&Relation` and keep their working state
/// local to the call, so a relation can be shared across threads.
#[derive(Debug, Clone)]
pub struct Relation {
    universe: AttributeSet,
    dependencies: Vec<FunctionalDependency>,
    graph: ClosureGraph,
}

impl Relation {
    /// Create a relation, rejecting malformed dependencies.
    ///
    /// ```
    /// use armstrong::{FunctionalDependency, Relation};
    ///
    /// let relation = Relation::new(
    ///     ["A", "B", "C"],
    ///     vec![FunctionalDependency::new(["A"], ["B"])],
    /// ).unwrap();
    /// assert_eq!(relation.dependencies().len(), 1);
    /// ```
    pub fn new(
        universe: impl Into<AttributeSet>,
        dependencies: impl IntoIterator<Item = FunctionalDependency>,
    ) -> Result<Self> {
        let universe = universe.into();
        let dependencies: Vec<FunctionalDependency> = dependencies.into_iter().collect();

        if universe.len() > MAX_ENUMERABLE_ATTRIBUTES {
            return Err(ArmstrongError::UniverseTooLarge {
                size: universe.len(),
                max: MAX_ENUMERABLE_ATTRIBUTES,
            });
        }

        for (index, dependency) in dependencies.iter().enumerate() {
            validate_dependency(&universe, index, dependency)?;
        }

        let graph = ClosureGraph::build(&universe, &dependencies);
        debug!(
            attributes = universe.len(),
            dependencies = dependencies.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built relation"
        );

        Ok(Self {
            universe,
            dependencies,
            graph,
        })
    }

    /// The set of all attributes of the relation.
    pub fn universe(&self) -> &AttributeSet {
        &self.universe
    }

    /// Dependencies in declaration order.
    pub fn dependencies(&self) -> &[FunctionalDependency] {
        &self.dependencies
    }

    /// The dependency graph derived from this relation.
    pub fn graph(&self) -> &ClosureGraph {
        &self.graph
    }

    /// Returns the attributes of `set` that are not in the universe.
    pub fn outside_universe(&self, set: &AttributeSet) -> AttributeSet {
        set.difference(&self.universe)
    }
}

fn validate_dependency(
    universe: &AttributeSet,
    index: usize,
    dependency: &FunctionalDependency,
) -> Result<()> {
    if dependency.lhs.is_empty() {
        return Err(ArmstrongError::MalformedDependency {
            index,
            dependency: dependency.to_string(),
            reason: "left-hand side is empty".to_string(),
        });
    }

    let unknown = dependency.attributes().difference(universe);
    if !unknown.is_empty() {
        return Err(ArmstrongError::MalformedDependency {
            index,
            dependency: dependency.to_string(),
            reason: format!("attributes {} are not in the universe", unknown),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_attribute() {
        let result = Relation::new(
            ["A", "B"],
            vec![
                FunctionalDependency::new(["A"], ["B"]),
                FunctionalDependency::new(["B"], ["Z"]),
            ],
        );

        match result {
            Err(ArmstrongError::MalformedDependency { index, reason, .. }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("{Z}"));
            }
            other => panic!("expected MalformedDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_lhs_attribute() {
        let result = Relation::new(["A", "B"], vec![FunctionalDependency::new(["Q"], ["A"])]);
        assert!(matches!(
            result,
            Err(ArmstrongError::MalformedDependency { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_lhs() {
        let result = Relation::new(
            ["A", "B"],
            vec![FunctionalDependency::new(AttributeSet::new(), ["A"])],
        );
        assert!(matches!(
            result,
            Err(ArmstrongError::MalformedDependency { index: 0, .. })
        ));
    }

    #[test]
    fn test_accepts_trivial_and_duplicate_dependencies() {
        let fd = FunctionalDependency::new(["A", "B"], ["A"]);
        let relation = Relation::new(["A", "B"], vec![fd.clone(), fd]).unwrap();
        assert_eq!(relation.dependencies().len(), 2);
    }

    #[test]
    fn test_rejects_oversized_universe() {
        let universe: AttributeSet = (0..65).map(|i| format!("a{}", i)).collect();
        let result = Relation::new(universe, Vec::new());
        assert!(matches!(
            result,
            Err(ArmstrongError::UniverseTooLarge { size: 65, max: 64 })
        ));
    }

    #[test]
    fn test_outside_universe() {
        let relation = Relation::new(["A", "B"], Vec::new()).unwrap();
        let outside = relation.outside_universe(&AttributeSet::from(["A", "X", "Y"]));
        assert_eq!(outside, AttributeSet::from(["X", "Y"]));
    }
}
