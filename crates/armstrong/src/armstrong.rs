//! Main Armstrong struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{
    self, DecompositionReport, NormalForm, Violation, ViolationKind, minimal_keys,
    prime_attributes_of,
};
use crate::closure::{ClosureEntry, closure_table};
use crate::error::{ArmstrongError, Result};
use crate::input::{Loader, LoaderConfig, RelationSpec, SourceMetadata};
use crate::schema::{AttributeSet, FunctionalDependency, Relation};

/// Configuration for Armstrong analysis.
#[derive(Debug, Clone)]
pub struct ArmstrongConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Widest universe the analysis will enumerate.
    pub max_universe: usize,
    /// Include the closure of every subset in the result.
    pub include_closures: bool,
    /// Collect normal-form violations.
    pub collect_violations: bool,
    /// Maximum violations kept in the result (the summary still counts all).
    pub max_violations: usize,
}

impl Default for ArmstrongConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            max_universe: 20,
            include_closures: false,
            collect_violations: true,
            max_violations: 100,
        }
    }
}

impl ArmstrongConfig {
    pub fn with_max_universe(mut self, max_universe: usize) -> Self {
        self.max_universe = max_universe;
        self
    }

    pub fn with_closures(mut self, include: bool) -> Self {
        self.include_closures = include;
        self
    }

    pub fn with_violations(mut self, collect: bool) -> Self {
        self.collect_violations = collect;
        self
    }
}

/// Result of analyzing a relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file, when analyzed from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Relation name, if the description had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub universe: AttributeSet,
    pub dependencies: Vec<FunctionalDependency>,
    /// Minimal keys, smallest first.
    pub minimal_keys: Vec<AttributeSet>,
    pub prime_attributes: AttributeSet,
    pub normal_form: NormalForm,
    /// Normal-form violations, capped at `max_violations`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    /// Closure of every subset, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub closures: Vec<ClosureEntry>,
    /// Named decomposition checks, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub decompositions: IndexMap<String, DecompositionReport>,
    /// Summary statistics.
    pub summary: AnalysisSummary,
}

/// Summary of the analysis results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub attribute_count: usize,
    pub dependency_count: usize,
    /// Dependencies whose right-hand side lies inside the left.
    pub trivial_dependency_count: usize,
    pub key_count: usize,
    pub prime_count: usize,
    pub bcnf_violation_count: usize,
    pub third_nf_violation_count: usize,
    pub preserving_decompositions: usize,
    pub total_decompositions: usize,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// The main Armstrong analysis engine.
pub struct Armstrong {
    config: ArmstrongConfig,
    loader: Loader,
}

impl AnalysisSummary {
    /// Every violation found, including those cut by `max_violations`.
    pub fn violation_count(&self) -> usize {
        self.bcnf_violation_count + self.third_nf_violation_count
    }
}

impl Armstrong {
    /// Create a new Armstrong instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(ArmstrongConfig::default())
    }

    /// Create an Armstrong instance with custom configuration.
    pub fn with_config(config: ArmstrongConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        Self { config, loader }
    }

    pub fn config(&self) -> &ArmstrongConfig {
        &self.config
    }

    /// Load a relation description and analyze it.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let (spec, source) = self.loader.load(path)?;
        let mut result = self.analyze_spec(&spec)?;
        result.source = Some(source);
        Ok(result)
    }

    /// Analyze a description, including its named decompositions.
    pub fn analyze_spec(&self, spec: &RelationSpec) -> Result<AnalysisResult> {
        let relation = spec.to_relation()?;
        let decompositions = spec.decomposition_sets();
        let mut result = self.run(&relation, &decompositions)?;
        result.name = spec.name.clone();
        Ok(result)
    }

    /// Analyze a relation built in code.
    pub fn analyze_relation(&self, relation: &Relation) -> Result<AnalysisResult> {
        self.run(relation, &IndexMap::new())
    }

    /// Check one decomposition, subject to the universe limit.
    pub fn check_decomposition(
        &self,
        relation: &Relation,
        pieces: &[AttributeSet],
    ) -> Result<DecompositionReport> {
        self.check_universe(relation)?;
        analysis::analyze_decomposition(relation, pieces)
    }

    /// Minimal keys only, subject to the universe limit. Skips the
    /// normal-form scan.
    pub fn minimal_keys(&self, relation: &Relation) -> Result<Vec<AttributeSet>> {
        self.check_universe(relation)?;
        Ok(minimal_keys(relation))
    }

    fn check_universe(&self, relation: &Relation) -> Result<()> {
        let size = relation.universe().len();
        if size > self.config.max_universe {
            return Err(ArmstrongError::UniverseTooLarge {
                size,
                max: self.config.max_universe,
            });
        }
        Ok(())
    }

    fn run(
        &self,
        relation: &Relation,
        decompositions: &IndexMap<String, Vec<AttributeSet>>,
    ) -> Result<AnalysisResult> {
        self.check_universe(relation)?;
        info!(
            attributes = relation.universe().len(),
            dependencies = relation.dependencies().len(),
            "analyzing relation"
        );

        let keys = minimal_keys(relation);
        let prime = prime_attributes_of(&keys);

        // The full scan is needed for the counts even when the list is not kept.
        let all_violations = analysis::violations_with_prime(relation, &prime);
        let normal_form = normal_form_of(&all_violations);

        let mut reports = IndexMap::new();
        for (name, pieces) in decompositions {
            debug!(decomposition = %name, pieces = pieces.len(), "checking decomposition");
            reports.insert(name.clone(), analysis::analyze_decomposition(relation, pieces)?);
        }

        let closures = if self.config.include_closures {
            closure_table(relation)
        } else {
            Vec::new()
        };

        let summary = self.compute_summary(relation, &keys, &prime, &all_violations, &reports);

        let violations = if self.config.collect_violations {
            all_violations
                .into_iter()
                .take(self.config.max_violations)
                .collect()
        } else {
            Vec::new()
        };

        Ok(AnalysisResult {
            source: None,
            name: None,
            universe: relation.universe().clone(),
            dependencies: relation.dependencies().to_vec(),
            minimal_keys: keys,
            prime_attributes: prime,
            normal_form,
            violations,
            closures,
            decompositions: reports,
            summary,
        })
    }

    /// Compute summary statistics from analysis results.
    fn compute_summary(
        &self,
        relation: &Relation,
        keys: &[AttributeSet],
        prime: &AttributeSet,
        violations: &[Violation],
        decompositions: &IndexMap<String, DecompositionReport>,
    ) -> AnalysisSummary {
        let third_nf_violation_count = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::ThirdNf)
            .count();
        let bcnf_violation_count = violations.len() - third_nf_violation_count;

        let preserving_decompositions = decompositions.values().filter(|r| r.preserving).count();

        let normal_form = normal_form_of(violations);
        let recommendation = self.generate_recommendation(
            normal_form,
            third_nf_violation_count,
            violations.len(),
            decompositions,
        );

        AnalysisSummary {
            attribute_count: relation.universe().len(),
            dependency_count: relation.dependencies().len(),
            trivial_dependency_count: relation
                .dependencies()
                .iter()
                .filter(|fd| fd.is_trivial())
                .count(),
            key_count: keys.len(),
            prime_count: prime.len(),
            bcnf_violation_count,
            third_nf_violation_count,
            preserving_decompositions,
            total_decompositions: decompositions.len(),
            recommendation,
        }
    }

    /// Generate a recommendation based on the analysis.
    fn generate_recommendation(
        &self,
        normal_form: NormalForm,
        third_nf_violations: usize,
        total_violations: usize,
        decompositions: &IndexMap<String, DecompositionReport>,
    ) -> String {
        let lossy: Vec<&str> = decompositions
            .iter()
            .filter(|(_, r)| !r.preserving)
            .map(|(name, _)| name.as_str())
            .collect();

        let base = match normal_form {
            NormalForm::Bcnf => "Relation is in BCNF.".to_string(),
            NormalForm::ThirdNf => format!(
                "Relation is in 3NF but not BCNF: {} determinant sets are not superkeys.",
                total_violations
            ),
            NormalForm::BelowThirdNf => format!(
                "Relation is below 3NF: {} determinant sets reach non-prime attributes. Consider decomposing.",
                third_nf_violations
            ),
        };

        if lossy.is_empty() {
            base
        } else {
            format!("{} Decompositions losing dependencies: {}.", base, lossy.join(", "))
        }
    }
}

impl Default for Armstrong {
    fn default() -> Self {
        Self::new()
    }
}

/// Strongest normal form given the full violation list.
fn normal_form_of(violations: &[Violation]) -> NormalForm {
    if violations.is_empty() {
        NormalForm::Bcnf
    } else if violations.iter().all(|v| v.kind == ViolationKind::Bcnf) {
        NormalForm::ThirdNf
    } else {
        NormalForm::BelowThirdNf
    }
}
