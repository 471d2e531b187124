//! CLI command implementations.

pub mod analyze;
pub mod classify;
pub mod closure;
pub mod decompose;
pub mod keys;

use std::path::Path;

use armstrong::{AnalysisResult, Loader, Relation, RelationSpec};
use tracing::debug;

/// Load a relation file, failing early with a readable message when it is missing.
pub(crate) fn load(file: &Path) -> Result<(RelationSpec, Relation), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (spec, source) = Loader::new().load(file)?;
    debug!(file = %source.file, hash = %source.hash, "loaded relation file");
    let relation = spec.to_relation()?;
    Ok((spec, relation))
}

/// Title shown above each report: the relation name if any, else the file name.
pub(crate) fn title(spec: &RelationSpec, file: &Path) -> String {
    spec.name
        .clone()
        .unwrap_or_else(|| file.display().to_string())
}

/// Violations found but not printed when `shown` are listed. Counts from the
/// summary, since the stored list may already be capped.
pub(crate) fn hidden_violations(result: &AnalysisResult, shown: usize) -> usize {
    let printed = shown.min(result.violations.len());
    result.summary.violation_count().saturating_sub(printed)
}
