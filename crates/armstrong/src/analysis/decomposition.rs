//! Projection of dependencies and dependency preservation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ArmstrongError, Result};
use crate::schema::{AttributeSet, FunctionalDependency, Relation, Subsets};

/// Dependencies that survive projection onto an attribute subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// The subset projected onto.
    pub attributes: AttributeSet,
    /// Surviving dependencies, right-hand sides cut down to `attributes`.
    pub dependencies: Vec<FunctionalDependency>,
}

/// Outcome of checking one decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionReport {
    /// The pieces, as given.
    pub pieces: Vec<AttributeSet>,
    /// One projection per piece.
    pub projections: Vec<Projection>,
    /// Whether the pieces together imply the same closures as the relation.
    pub preserving: bool,
    /// Original dependencies the pieces no longer imply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lost: Vec<FunctionalDependency>,
    /// Attributes of the universe that no piece contains.
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub uncovered: AttributeSet,
}

/// Project the relation's dependencies onto `subset`.
///
/// A dependency survives iff its left-hand side lies inside `subset`; its
/// right-hand side is intersected with `subset`. Dependencies whose
/// left-hand side reaches outside are dropped.
///
/// Fails with [`ArmstrongError::InvalidSubset`] if `subset` is not part of
/// the universe.
pub fn project(relation: &Relation, subset: &AttributeSet) -> Result<Projection> {
    check_subset(relation, subset)?;

    let dependencies = relation
        .dependencies()
        .iter()
        .filter(|fd| fd.lhs.is_subset(subset))
        .map(|fd| FunctionalDependency {
            lhs: fd.lhs.clone(),
            rhs: fd.rhs.intersection(subset),
        })
        .collect();

    Ok(Projection {
        attributes: subset.clone(),
        dependencies,
    })
}

/// Returns true if `fd` follows from the relation's dependencies.
pub fn is_dependency_implied(relation: &Relation, fd: &FunctionalDependency) -> bool {
    fd.rhs.is_subset(&relation.closure(&fd.lhs))
}

/// Build the relation the pieces describe on their own: the union of all
/// projected dependencies over the union of the pieces.
pub fn reconstruct(relation: &Relation, decomposition: &[AttributeSet]) -> Result<Relation> {
    let mut universe = AttributeSet::new();
    let mut dependencies = Vec::new();

    for piece in decomposition {
        let projection = project(relation, piece)?;
        universe.extend(projection.attributes);
        dependencies.extend(projection.dependencies);
    }

    Relation::new(universe, dependencies)
}

/// Returns true if the decomposition preserves the relation's dependencies.
///
/// The reconstructed relation must produce the same closure as the original
/// for every non-empty subset of the original universe. Comparing closures
/// rather than dependency lists catches dependencies that are implied but
/// never written down.
pub fn is_dependency_preserving(relation: &Relation, decomposition: &[AttributeSet]) -> Result<bool> {
    let reconstructed = reconstruct(relation, decomposition)?;

    let preserving = Subsets::new(relation.universe())
        .all(|subset| relation.closure(&subset) == reconstructed.closure(&subset));

    debug!(
        pieces = decomposition.len(),
        projected = reconstructed.dependencies().len(),
        preserving,
        "checked dependency preservation"
    );
    Ok(preserving)
}

/// Original dependencies that the decomposition no longer implies, in
/// declaration order.
pub fn lost_dependencies(
    relation: &Relation,
    decomposition: &[AttributeSet],
) -> Result<Vec<FunctionalDependency>> {
    let reconstructed = reconstruct(relation, decomposition)?;

    Ok(relation
        .dependencies()
        .iter()
        .filter(|fd| !is_dependency_implied(&reconstructed, fd))
        .cloned()
        .collect())
}

/// Run every decomposition check and collect the results.
pub fn analyze_decomposition(
    relation: &Relation,
    decomposition: &[AttributeSet],
) -> Result<DecompositionReport> {
    let projections = decomposition
        .iter()
        .map(|piece| project(relation, piece))
        .collect::<Result<Vec<_>>>()?;

    let covered: AttributeSet = decomposition.iter().flat_map(|p| p.iter()).collect();

    Ok(DecompositionReport {
        pieces: decomposition.to_vec(),
        projections,
        preserving: is_dependency_preserving(relation, decomposition)?,
        lost: lost_dependencies(relation, decomposition)?,
        uncovered: relation.universe().difference(&covered),
    })
}

fn check_subset(relation: &Relation, subset: &AttributeSet) -> Result<()> {
    let outside = relation.outside_universe(subset);
    if outside.is_empty() {
        Ok(())
    } else {
        Err(ArmstrongError::InvalidSubset {
            subset: subset.clone(),
            outside,
        })
    }
}
