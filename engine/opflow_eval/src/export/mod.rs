//! Graphviz DOT export of a request's dependency graph.
//!
//! A pure observer of `(operations, live, graph)`; nothing here feeds back
//! into evaluation.

use std::fmt::Write;

use opflow_ir::{Name, Operation};
use rustc_hash::FxHashMap;

use crate::liveness::{DependencyGraph, LiveSet};

const HEADER: &str = "digraph G {\n  rankdir=LR;\n  node [shape=box, style=filled];\n";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum NodeKind {
    Print,
    LiveCalc,
    DeadCalc,
    Undefined,
}

impl NodeKind {
    fn fill_color(self) -> &'static str {
        match self {
            NodeKind::Print => "lightgreen",
            NodeKind::LiveCalc => "lightblue",
            NodeKind::DeadCalc => "mistyrose",
            NodeKind::Undefined => "lightgrey",
        }
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the graph as DOT.
///
/// One node per distinct name, in first-appearance order. A printed name is
/// drawn as a print node even when a `calc` also defines it. Names that
/// are only referenced get a grey node. Edges run dependency -> dependent.
pub fn to_dot(operations: &[Operation], live: &LiveSet, graph: &DependencyGraph) -> String {
    let mut order: Vec<&Name> = Vec::new();
    let mut kinds: FxHashMap<&Name, NodeKind> = FxHashMap::default();

    for operation in operations {
        let target = operation.target();
        let kind = match operation {
            Operation::Print { .. } => NodeKind::Print,
            Operation::Calc { .. } if live.contains(target.as_str()) => NodeKind::LiveCalc,
            Operation::Calc { .. } => NodeKind::DeadCalc,
        };
        match kinds.get_mut(target) {
            Some(existing) => {
                if kind == NodeKind::Print {
                    *existing = kind;
                }
            }
            None => {
                order.push(target);
                kinds.insert(target, kind);
            }
        }
    }
    for reference in operations.iter().flat_map(|operation| operation.references()) {
        if !kinds.contains_key(reference) {
            order.push(reference);
            kinds.insert(reference, NodeKind::Undefined);
        }
    }

    let mut out = String::from(HEADER);
    for name in order {
        let kind = kinds.get(name).copied().unwrap_or(NodeKind::Undefined);
        let id = escape(name.as_str());
        let label = if kind == NodeKind::Print {
            format!("{id}\\n[PRINT]")
        } else {
            id.clone()
        };
        let _ = writeln!(
            out,
            "  \"{id}\" [label=\"{label}\", fillcolor={}];",
            kind.fill_color()
        );
    }

    for (target, deps) in graph.nodes() {
        for dep in deps {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\";",
                escape(dep.as_str()),
                escape(target.as_str())
            );
        }
    }

    out.push_str("}\n");
    out
}
