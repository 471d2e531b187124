//! Closure propagation over a dependency graph.
//!
//! A relation's dependencies are compiled once into a [`ClosureGraph`]:
//! singleton nodes for attributes, combination nodes for multi-attribute
//! left-hand sides. A closure seeds the singletons of the starting set and
//! propagates activation to a fixpoint. Singletons fire when any input is
//! active; combinations fire only when all of their parts are.

mod engine;
mod graph;
mod table;

pub use graph::{ClosureGraph, Node, NodeId, NodeKind};
pub use table::{ClosureEntry, closure_table};
