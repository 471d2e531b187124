//! Attribute identifiers and attribute sets.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named column of a relation.
///
/// Attributes are ordered by name, which fixes the iteration order of every
/// [`AttributeSet`] and therefore the order of all derived results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(String);

impl Attribute {
    /// Create an attribute from its label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The attribute's label.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Attribute> for Attribute {
    fn from(attribute: &Attribute) -> Self {
        attribute.clone()
    }
}

/// An unordered collection of distinct attributes.
///
/// Equality is set equality. Serializes as a sorted list of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(BTreeSet<Attribute>);

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Create a set holding a single attribute.
    pub fn singleton(attribute: impl Into<Attribute>) -> Self {
        let mut set = Self::new();
        set.insert(attribute);
        set
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add an attribute. Returns false if it was already present.
    pub fn insert(&mut self, attribute: impl Into<Attribute>) -> bool {
        self.0.insert(attribute.into())
    }

    /// Check membership by attribute or by label.
    pub fn contains<Q>(&self, attribute: &Q) -> bool
    where
        Attribute: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.contains(attribute)
    }

    /// Iterate attributes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_superset(&self, other: &AttributeSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Superset of `other` that is not equal to it.
    pub fn is_strict_superset(&self, other: &AttributeSet) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn intersection(&self, other: &AttributeSet) -> AttributeSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Attributes in `self` that are not in `other`.
    pub fn difference(&self, other: &AttributeSet) -> AttributeSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Attribute labels in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Attribute::name).collect()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, attribute) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", attribute)?;
        }
        f.write_str("}")
    }
}

impl<A: Into<Attribute>> FromIterator<A> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Attribute>> Extend<A> for AttributeSet {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<A: Into<Attribute>, const N: usize> From<[A; N]> for AttributeSet {
    fn from(attributes: [A; N]) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<Vec<Attribute>> for AttributeSet {
    fn from(attributes: Vec<Attribute>) -> Self {
        attributes.into_iter().collect()
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = std::collections::btree_set::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::collections::btree_set::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = AttributeSet::from(["C", "A", "B"]);
        let b = AttributeSet::from(["A", "B", "C", "A"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_display_is_sorted() {
        let set = AttributeSet::from(["E", "B", "D"]);
        assert_eq!(set.to_string(), "{B, D, E}");
        assert_eq!(AttributeSet::new().to_string(), "{}");
    }

    #[test]
    fn test_contains_by_label() {
        let set = AttributeSet::from(["A", "B"]);
        assert!(set.contains("A"));
        assert!(set.contains(&Attribute::new("B")));
        assert!(!set.contains("C"));
    }

    #[test]
    fn test_set_operations() {
        let ab = AttributeSet::from(["A", "B"]);
        let bc = AttributeSet::from(["B", "C"]);

        assert_eq!(ab.union(&bc), AttributeSet::from(["A", "B", "C"]));
        assert_eq!(ab.intersection(&bc), AttributeSet::from(["B"]));
        assert_eq!(ab.difference(&bc), AttributeSet::from(["A"]));
    }

    #[test]
    fn test_strict_superset() {
        let ab = AttributeSet::from(["A", "B"]);
        let a = AttributeSet::from(["A"]);
        assert!(ab.is_strict_superset(&a));
        assert!(!ab.is_strict_superset(&ab));
        assert!(!a.is_strict_superset(&ab));
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let set = AttributeSet::from(["B", "A"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["A","B"]"#);

        let back: AttributeSet = serde_json::from_str(r#"["B","A","B"]"#).unwrap();
        assert_eq!(back, set);
    }
}
