//! Key, normal-form and decomposition analysis over a [`Relation`](crate::Relation).

mod decomposition;
mod keys;
mod normal_form;

pub use decomposition::{
    DecompositionReport, Projection, analyze_decomposition, is_dependency_implied,
    is_dependency_preserving, lost_dependencies, project, reconstruct,
};
pub use keys::{minimal_keys, prime_attributes, prime_attributes_of, superkeys};
pub use normal_form::{
    NormalForm, Violation, ViolationKind, classify, is_3nf, is_bcnf, violations,
    violations_with_prime,
};
