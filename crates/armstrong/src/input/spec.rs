//! Structured relation descriptions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{AttributeSet, FunctionalDependency, Relation};

/// One dependency in a relation description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
}

impl DependencySpec {
    fn to_dependency(&self) -> FunctionalDependency {
        FunctionalDependency {
            lhs: self.lhs.iter().map(String::as_str).collect(),
            rhs: self.rhs.iter().map(String::as_str).collect(),
        }
    }
}

/// A relation as written in a JSON file.
///
/// ```json
/// {
///   "name": "orders",
///   "attributes": ["A", "B", "C"],
///   "dependencies": [{ "lhs": ["A"], "rhs": ["B", "C"] }],
///   "decompositions": { "split": [["A", "B"], ["A", "C"]] }
/// }
/// ```
///
/// Decompositions keep the order they appear in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencySpec>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub decompositions: IndexMap<String, Vec<Vec<String>>>,
}

impl RelationSpec {
    /// Create a description over the given attributes, with no dependencies.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the relation's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a dependency.
    pub fn with_dependency<L, R>(mut self, lhs: L, rhs: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.dependencies.push(DependencySpec {
            lhs: lhs.into_iter().map(Into::into).collect(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a named decomposition.
    pub fn with_decomposition<P, S>(mut self, name: impl Into<String>, pieces: P) -> Self
    where
        P: IntoIterator,
        P::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pieces: Vec<Vec<String>> = pieces
            .into_iter()
            .map(|piece| piece.into_iter().map(Into::into).collect())
            .collect();
        self.decompositions.insert(name.into(), pieces);
        self
    }

    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build and validate the relation.
    pub fn to_relation(&self) -> Result<Relation> {
        let universe: AttributeSet = self.attributes.iter().map(String::as_str).collect();
        let dependencies = self.dependencies.iter().map(DependencySpec::to_dependency);
        Relation::new(universe, dependencies)
    }

    /// The named decompositions as attribute sets.
    pub fn decomposition_sets(&self) -> IndexMap<String, Vec<AttributeSet>> {
        self.decompositions
            .iter()
            .map(|(name, pieces)| {
                let sets: Vec<AttributeSet> = pieces
                    .iter()
                    .map(|piece| piece.iter().map(String::as_str).collect())
                    .collect();
                (name.clone(), sets)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArmstrongError;

    #[test]
    fn test_parse_minimal() {
        let spec = RelationSpec::from_json_str(r#"{"attributes": ["A", "B"]}"#).unwrap();
        assert_eq!(spec.attributes, vec!["A", "B"]);
        assert!(spec.dependencies.is_empty());
        assert!(spec.name.is_none());
    }

    #[test]
    fn test_to_relation() {
        let spec = RelationSpec::new(["A", "B", "C"])
            .with_dependency(["A"], ["B"])
            .with_dependency(["B"], ["C"]);

        let relation = spec.to_relation().unwrap();
        assert_eq!(relation.universe(), &AttributeSet::from(["A", "B", "C"]));
        assert_eq!(relation.dependencies()[1], FunctionalDependency::new(["B"], ["C"]));
    }

    #[test]
    fn test_unknown_attribute_is_malformed() {
        let spec = RelationSpec::new(["A"]).with_dependency(["A"], ["B"]);
        assert!(matches!(
            spec.to_relation(),
            Err(ArmstrongError::MalformedDependency { .. })
        ));
    }

    #[test]
    fn test_decompositions_keep_order() {
        let json = r#"{
            "attributes": ["A", "B", "C"],
            "decompositions": {
                "zeta": [["A", "B"], ["B", "C"]],
                "alpha": [["A", "C"]]
            }
        }"#;
        let spec = RelationSpec::from_json_str(json).unwrap();
        let sets = spec.decomposition_sets();

        let names: Vec<&str> = sets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(sets["zeta"][1], AttributeSet::from(["B", "C"]));
    }

    #[test]
    fn test_missing_attributes_field_is_an_error() {
        let result = RelationSpec::from_json_str(r#"{"dependencies": []}"#);
        assert!(matches!(result, Err(ArmstrongError::Json(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_builder_fields() {
        let spec = RelationSpec::new(["A", "B"])
            .with_name("pair")
            .with_dependency(["A"], ["B"])
            .with_decomposition("halves", [["A"], ["B"]]);

        let back = RelationSpec::from_json_str(&spec.to_json_string().unwrap()).unwrap();
        assert_eq!(back, spec);
    }
}
