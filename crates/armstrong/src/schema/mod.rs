//! Attribute, dependency and relation types.

mod attribute;
mod dependency;
mod relation;
mod subsets;

pub use attribute::{Attribute, AttributeSet};
pub use dependency::FunctionalDependency;
pub use relation::Relation;
pub use subsets::{MAX_ENUMERABLE_ATTRIBUTES, Subsets};
