//! Dependency graph used for closure propagation.

use std::collections::{BTreeMap, HashMap};

use crate::schema::{Attribute, AttributeSet, FunctionalDependency};

/// Index of a node in a [`ClosureGraph`].
pub type NodeId = usize;

/// What a node stands for, and therefore how it activates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A single attribute. Activates once any incoming edge is active.
    Singleton(Attribute),
    /// A multi-attribute left-hand side. Activates once every constituent
    /// attribute is active.
    Combination(AttributeSet),
}

/// A node with its adjacency lists.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Nodes feeding this one.
    pub inputs: Vec<NodeId>,
    /// Nodes this one feeds.
    pub outputs: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Number of distinct inputs that must be active before a combination
    /// node fires. Singletons need one.
    pub fn required_inputs(&self) -> usize {
        match &self.kind {
            NodeKind::Singleton(_) => 1,
            NodeKind::Combination(attributes) => attributes.len(),
        }
    }
}

/// Arena of singleton and combination nodes derived from a relation.
///
/// Every universe attribute gets a singleton node. Each dependency adds an
/// edge from its left-hand-side node to the singleton node of every
/// right-hand-side attribute. A multi-attribute left-hand side is a
/// combination node fed by the singletons that compose it; identical
/// left-hand sides share one node.
#[derive(Debug, Clone, Default)]
pub struct ClosureGraph {
    nodes: Vec<Node>,
    singletons: BTreeMap<Attribute, NodeId>,
    combinations: HashMap<AttributeSet, NodeId>,
}

impl ClosureGraph {
    /// Build the graph for a universe and its dependencies.
    pub fn build(universe: &AttributeSet, dependencies: &[FunctionalDependency]) -> Self {
        let mut graph = Self::default();

        for attribute in universe {
            graph.singleton_or_insert(attribute);
        }

        for dependency in dependencies {
            let source = graph.lhs_or_insert(&dependency.lhs);
            for attribute in &dependency.rhs {
                let target = graph.singleton_or_insert(attribute);
                graph.connect(source, target);
            }
        }

        graph
    }

    /// All nodes, indexed by [`NodeId`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.outputs.len()).sum()
    }

    /// Node of a single attribute, if the attribute belongs to the graph.
    pub fn singleton(&self, attribute: &Attribute) -> Option<NodeId> {
        self.singletons.get(attribute).copied()
    }

    /// Node of a left-hand side, if some dependency uses it.
    pub fn lhs(&self, attributes: &AttributeSet) -> Option<NodeId> {
        match attributes.len() {
            0 => None,
            1 => attributes.iter().next().and_then(|a| self.singleton(a)),
            _ => self.combinations.get(attributes).copied(),
        }
    }

    /// Singleton nodes in attribute order.
    pub fn singletons(&self) -> impl Iterator<Item = (&Attribute, NodeId)> {
        self.singletons.iter().map(|(a, id)| (a, *id))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node::new(kind));
        self.nodes.len() - 1
    }

    fn connect(&mut self, source: NodeId, target: NodeId) {
        self.nodes[source].outputs.push(target);
        self.nodes[target].inputs.push(source);
    }

    fn singleton_or_insert(&mut self, attribute: &Attribute) -> NodeId {
        if let Some(id) = self.singleton(attribute) {
            return id;
        }
        let id = self.push(NodeKind::Singleton(attribute.clone()));
        self.singletons.insert(attribute.clone(), id);
        id
    }

    fn lhs_or_insert(&mut self, attributes: &AttributeSet) -> NodeId {
        if attributes.len() == 1 {
            if let Some(attribute) = attributes.iter().next() {
                return self.singleton_or_insert(attribute);
            }
        }
        if let Some(id) = self.combinations.get(attributes) {
            return *id;
        }

        let id = self.push(NodeKind::Combination(attributes.clone()));
        self.combinations.insert(attributes.clone(), id);
        for attribute in attributes {
            let part = self.singleton_or_insert(attribute);
            self.connect(part, id);
        }
        id
    }
}
