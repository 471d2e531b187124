//! Armstrong: functional-dependency analysis for relational schemas.
//!
//! Given a set of attributes and the functional dependencies between them,
//! Armstrong computes attribute closures, finds candidate keys, decides
//! whether a relation is in 3NF or BCNF, and checks whether a decomposition
//! preserves the original dependencies.
//!
//! # Core Principles
//!
//! - **Verification only**: dependencies and decompositions come from the caller
//! - **Immutable relations**: a [`Relation`] never changes once built
//! - **Local state**: every closure uses its own activation buffer
//!
//! # Example
//!
//! ```
//! use armstrong::{AttributeSet, FunctionalDependency, Relation, analysis};
//!
//! let relation = Relation::new(
//!     ["A", "B", "C", "D", "E"],
//!     vec![
//!         FunctionalDependency::new(["A"], ["B", "C"]),
//!         FunctionalDependency::new(["C"], ["D"]),
//!         FunctionalDependency::new(["B", "C"], ["E"]),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(analysis::minimal_keys(&relation), vec![AttributeSet::from(["A"])]);
//! assert!(!analysis::is_bcnf(&relation));
//! ```

pub mod analysis;
pub mod closure;
pub mod error;
pub mod input;
pub mod schema;

mod armstrong;

pub use crate::armstrong::{AnalysisResult, AnalysisSummary, Armstrong, ArmstrongConfig};
pub use analysis::{DecompositionReport, NormalForm, Projection, Violation, ViolationKind};
pub use closure::{ClosureEntry, ClosureGraph};
pub use error::{ArmstrongError, Result};
pub use input::{Loader, LoaderConfig, RelationSpec, SourceMetadata};
pub use schema::{Attribute, AttributeSet, FunctionalDependency, Relation};
