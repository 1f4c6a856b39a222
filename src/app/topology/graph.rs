//! Directed topology graph of trail data flow.
//!
//! Nodes are plain string identifiers (trail names, ARNs, bucket names) and
//! an edge `(a, b)` means data flows from `a` to `b`. The graph is write-once,
//! read-once per run: there is no removal operation.
//!
//! Both collections are ordered sets. Insertion is idempotent, and the DOT
//! rendering is sorted lexicographically so two runs over the same account
//! state produce byte-identical artifacts regardless of the order in which
//! AWS returned subscribers.

#![warn(clippy::all, rust_2018_idioms)]

use std::collections::BTreeSet;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyGraph {
    name: String,
    nodes: BTreeSet<String>,
    edges: BTreeSet<(String, String)>,
}

impl TopologyGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: BTreeSet::new(),
            edges: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a node. Returns false if it was already present.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.nodes.contains(id) {
            return false;
        }
        self.nodes.insert(id.to_string())
    }

    /// Insert a directed edge, adding both endpoints as nodes.
    ///
    /// Returns false if the edge was already present. Self-loops are
    /// accepted and rendered like any other edge.
    pub fn add_edge(&mut self, source: &str, destination: &str) -> bool {
        self.add_node(source);
        self.add_node(destination);

        let inserted = self
            .edges
            .insert((source.to_string(), destination.to_string()));
        if inserted {
            trace_debug!("Graph edge {} -> {}", source, destination);
        }
        inserted
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, source: &str, destination: &str) -> bool {
        self.edges
            .contains(&(source.to_string(), destination.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|(source, destination)| (source.as_str(), destination.as_str()))
    }

    /// Render the graph in Graphviz DOT syntax.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        // writing to a String cannot fail
        let _ = writeln!(dot, "digraph {} {{", quote(&self.name));
        for node in &self.nodes {
            let _ = writeln!(dot, "\t{};", quote(node));
        }
        for (source, destination) in &self.edges {
            let _ = writeln!(dot, "\t{} -> {};", quote(source), quote(destination));
        }
        dot.push_str("}\n");
        dot
    }
}

/// Quote a DOT identifier, escaping backslashes and double quotes.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for ch in id.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
