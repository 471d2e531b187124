//! Third and Boyce-Codd normal form checks.
//!
//! Both checks scan every non-empty subset `S` of the universe and look at
//! what `S` determines beyond itself. BCNF allows that only when `S` is a
//! superkey. 3NF additionally allows it when every extra attribute is prime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{AttributeSet, Relation, Subsets};

use super::keys::prime_attributes;

/// Strongest normal form a relation satisfies, as far as this crate checks.
///
/// Ordered from weakest to strongest, so `form >= NormalForm::ThirdNf` reads
/// "at least 3NF".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalForm {
    /// Some non-superkey determines a non-prime attribute.
    BelowThirdNf,
    /// Third normal form.
    ThirdNf,
    /// Boyce-Codd normal form.
    Bcnf,
}

impl NormalForm {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            NormalForm::BelowThirdNf => "below 3NF",
            NormalForm::ThirdNf => "3NF",
            NormalForm::Bcnf => "BCNF",
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which normal form a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Breaks BCNF, but every extra attribute is prime so 3NF holds.
    Bcnf,
    /// Breaks 3NF (and therefore BCNF).
    ThirdNf,
}

/// A non-superkey that determines attributes outside itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending attribute set.
    pub determinant: AttributeSet,
    /// `closure(determinant) \ determinant`.
    pub determined: AttributeSet,
    /// The part of `determined` that is not prime.
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub non_prime: AttributeSet,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn description(&self) -> String {
        match self.kind {
            ViolationKind::Bcnf => format!(
                "{} determines {} but is not a superkey",
                self.determinant, self.determined
            ),
            ViolationKind::ThirdNf => format!(
                "{} determines non-prime {} but is not a superkey",
                self.determinant, self.non_prime
            ),
        }
    }
}

/// Returns true if the relation is in Boyce-Codd normal form.
pub fn is_bcnf(relation: &Relation) -> bool {
    let universe = relation.universe();
    Subsets::new(universe).all(|subset| {
        let closure = relation.closure(&subset);
        closure == subset || closure == *universe
    })
}

/// Returns true if the relation is in third normal form.
pub fn is_3nf(relation: &Relation) -> bool {
    let prime = prime_attributes(relation);
    scan(relation, &prime).all(|v| v.kind != ViolationKind::ThirdNf)
}

/// Classify the relation into its strongest normal form.
pub fn classify(relation: &Relation) -> NormalForm {
    if is_bcnf(relation) {
        NormalForm::Bcnf
    } else if is_3nf(relation) {
        NormalForm::ThirdNf
    } else {
        NormalForm::BelowThirdNf
    }
}

/// Every BCNF or 3NF violation, smallest determinants first.
pub fn violations(relation: &Relation) -> Vec<Violation> {
    let prime = prime_attributes(relation);
    violations_with_prime(relation, &prime)
}

/// Like [`violations`], reusing already computed prime attributes.
pub fn violations_with_prime(relation: &Relation, prime: &AttributeSet) -> Vec<Violation> {
    scan(relation, prime).collect()
}

fn scan<'a>(
    relation: &'a Relation,
    prime: &'a AttributeSet,
) -> impl Iterator<Item = Violation> + 'a {
    let universe = relation.universe();
    Subsets::new(universe).filter_map(move |subset| {
        let closure = relation.closure(&subset);
        if closure == subset || closure == *universe {
            return None;
        }

        let determined = closure.difference(&subset);
        let non_prime = determined.difference(prime);
        let kind = if non_prime.is_empty() {
            ViolationKind::Bcnf
        } else {
            ViolationKind::ThirdNf
        };

        Some(Violation {
            determinant: subset,
            determined,
            non_prime,
            kind,
        })
    })
}
