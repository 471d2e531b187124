//! Closure computation by activation propagation.

use std::collections::VecDeque;

use tracing::trace;

use crate::schema::{AttributeSet, Relation};

use super::graph::{ClosureGraph, NodeId, NodeKind};

/// Per-call activation buffer.
///
/// Lives only for one closure computation, so concurrent calls on the same
/// graph never share mutable state.
struct Activation {
    active: Vec<bool>,
    /// Inputs a node still waits for before it fires.
    waiting: Vec<usize>,
    queue: VecDeque<NodeId>,
}

impl Activation {
    fn new(graph: &ClosureGraph) -> Self {
        Self {
            active: vec![false; graph.node_count()],
            waiting: graph.nodes().iter().map(|n| n.required_inputs()).collect(),
            queue: VecDeque::new(),
        }
    }

    /// Mark a node active and schedule its outputs. No-op if already active.
    fn activate(&mut self, id: NodeId) {
        if !self.active[id] {
            self.active[id] = true;
            self.queue.push_back(id);
        }
    }

    /// Called once per active input edge into `id`.
    fn signal(&mut self, graph: &ClosureGraph, id: NodeId) {
        if self.active[id] {
            return;
        }
        match graph.node(id).kind {
            NodeKind::Singleton(_) => self.activate(id),
            NodeKind::Combination(_) => {
                self.waiting[id] = self.waiting[id].saturating_sub(1);
                if self.waiting[id] == 0 {
                    self.activate(id);
                }
            }
        }
    }
}

impl ClosureGraph {
    /// Compute the closure of `seed` under the graph's dependencies.
    ///
    /// Each node activates at most once and each edge is followed at most
    /// once, so the work is bounded by the size of the graph. Attributes in
    /// `seed` that have no node close only to themselves.
    pub fn closure(&self, seed: &AttributeSet) -> AttributeSet {
        let mut state = Activation::new(self);
        let mut unknown = AttributeSet::new();

        for attribute in seed {
            match self.singleton(attribute) {
                Some(id) => state.activate(id),
                None => {
                    unknown.insert(attribute);
                }
            }
        }

        let mut steps = 0usize;
        while let Some(id) = state.queue.pop_front() {
            for &target in &self.node(id).outputs {
                state.signal(self, target);
            }
            steps += 1;
        }
        trace!(seed = %seed, steps, "closure propagated");

        let mut closure: AttributeSet = self
            .singletons()
            .filter(|(_, id)| state.active[*id])
            .map(|(attribute, _)| attribute)
            .collect();
        closure.extend(unknown);
        closure
    }
}

impl Relation {
    /// Every attribute functionally determined by `attributes`, including
    /// `attributes` themselves.
    ///
    /// ```
    /// use armstrong::{AttributeSet, FunctionalDependency, Relation};
    ///
    /// let relation = Relation::new(
    ///     ["A", "B", "C", "D", "E"],
    ///     vec![
    ///         FunctionalDependency::new(["A"], ["B", "C"]),
    ///         FunctionalDependency::new(["C"], ["D"]),
    ///         FunctionalDependency::new(["B", "C"], ["E"]),
    ///     ],
    /// ).unwrap();
    ///
    /// let closure = relation.closure(&AttributeSet::from(["A"]));
    /// assert_eq!(&closure, relation.universe());
    /// ```
    pub fn closure(&self, attributes: &AttributeSet) -> AttributeSet {
        self.graph().closure(attributes)
    }

    /// Returns true if `attributes` determines the whole universe.
    pub fn is_superkey(&self, attributes: &AttributeSet) -> bool {
        self.closure(attributes).is_superset(self.universe())
    }
}
