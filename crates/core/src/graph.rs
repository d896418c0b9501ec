// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency graph over issue keys.
//!
//! Only blocking-type links become edges (see [`is_dependency_edge`]). The
//! graph exists to answer one question: how many issues sit downstream of a
//! given issue.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

use crate::link::{is_dependency_edge, LinkRecord};

/// Directed `source -> target` graph of dependency links.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Builds the graph from a link stream, skipping non-dependency types.
    /// Parallel edges are kept; they do not affect reachability.
    pub fn from_links<'a>(links: impl IntoIterator<Item = &'a LinkRecord>) -> Self {
        let mut graph = DependencyGraph::default();
        for link in links {
            if is_dependency_edge(&link.link_type) {
                graph.add_edge(&link.source, &link.target);
            }
        }
        graph
    }

    fn node(&mut self, key: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(key) {
            return idx;
        }
        let idx = self.graph.add_node(key.to_string());
        self.nodes.insert(key.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, source: &str, target: &str) {
        let from = self.node(source);
        let to = self.node(target);
        self.graph.add_edge(from, to, ());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Keys of all issues reachable from `key` through one or more edges,
    /// excluding `key` itself. Cycles are visited once.
    pub fn descendants(&self, key: &str) -> Vec<&str> {
        let Some(&start) = self.nodes.get(key) else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut found = Vec::new();
        while let Some(idx) = bfs.next(&self.graph) {
            if idx != start {
                found.push(self.graph[idx].as_str());
            }
        }
        found
    }

    /// Number of distinct issues downstream of `key`; 0 when `key` has no
    /// outgoing edges or is not in the graph.
    pub fn downstream_impact(&self, key: &str) -> usize {
        self.descendants(key).len()
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
