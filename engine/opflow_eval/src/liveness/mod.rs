//! Dependency graph construction and backward liveness (Stage 2).
//!
//! A variable is **live** if some `print` needs it, directly or through
//! the operands of the `calc`s that define the variables it needs.
//!
//! # Algorithm
//!
//! 1. One pass over the operations: every `calc` target becomes a graph
//!    node; each operand that is a variable reference is appended as an
//!    edge `target -> operand` (left before right, duplicates kept).
//! 2. Every `print` target is marked live and pushed on a worklist.
//! 3. Worklist BFS: pop a variable, mark each of its not-yet-live
//!    dependencies live and push it.
//!
//! The worklist is an explicit queue, so deep chains never recurse.
//! Cycles terminate because a variable is pushed only when it first
//! becomes live.

use std::collections::VecDeque;

use opflow_ir::{Name, Operation};
use rustc_hash::{FxHashMap, FxHashSet};

/// Map from a `calc` target to the variables its operands reference.
///
/// Nodes iterate in first-definition order. A reference to a variable no
/// `calc` defines is an edge to a name that is not itself a node. Cycles
/// are representable and not rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: FxHashMap<Name, Vec<Name>>,
    order: Vec<Name>,
}

impl DependencyGraph {
    fn add_node(&mut self, target: &Name) -> &mut Vec<Name> {
        if !self.edges.contains_key(target) {
            self.order.push(target.clone());
        }
        self.edges.entry(target.clone()).or_default()
    }

    /// Variables `name`'s definition references; empty if `name` is not a
    /// `calc` target or uses only literals.
    pub fn dependencies(&self, name: &str) -> &[Name] {
        self.edges.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether `name` is defined by some `calc`.
    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Nodes with their dependencies, in first-definition order.
    pub fn nodes(&self) -> impl Iterator<Item = (&Name, &[Name])> {
        self.order
            .iter()
            .map(move |name| (name, self.dependencies(name.as_str())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Variables transitively required by some `print`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet(FxHashSet<Name>);

impl LiveSet {
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.0.iter()
    }

    /// Live names, sorted.
    pub fn sorted(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.0.iter().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// Build the dependency graph and compute the live set.
pub fn analyze(operations: &[Operation]) -> (LiveSet, DependencyGraph) {
    let mut graph = DependencyGraph::default();
    let mut live = FxHashSet::default();
    let mut worklist = VecDeque::new();

    for operation in operations {
        match operation {
            Operation::Calc { target, .. } => {
                let deps = graph.add_node(target);
                deps.extend(operation.references().cloned());
            }
            Operation::Print { target } => {
                if live.insert(target.clone()) {
                    worklist.push_back(target.clone());
                }
            }
        }
    }

    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        roots = worklist.len(),
        "dependency graph built"
    );

    while let Some(current) = worklist.pop_front() {
        for dep in graph.dependencies(current.as_str()) {
            if live.insert(dep.clone()) {
                worklist.push_back(dep.clone());
            }
        }
    }

    tracing::debug!(live = live.len(), "liveness converged");

    (LiveSet(live), graph)
}
