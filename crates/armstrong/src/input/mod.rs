//! Relation descriptions and file loading.

mod loader;
mod source;
mod spec;

pub use loader::{Loader, LoaderConfig};
pub use source::SourceMetadata;
pub use spec::{DependencySpec, RelationSpec};
