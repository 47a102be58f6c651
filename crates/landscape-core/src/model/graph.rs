//! Directed graph storage backing the [`Model`](super::Model).
//!
//! Nodes are keyed by [`Id`] and keep their insertion order; edges are kept
//! in a `Vec` in declaration order. Incoming and outgoing edge indices are
//! tracked per node so neighbourhood queries do not scan every edge.
//!
//! The graph performs no validation of its own beyond debug assertions. The
//! model in front of it checks names and references before mutating it.

use indexmap::IndexMap;

use crate::identifier::Id;

/// Position of an edge in [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeIndex(usize);

/// A directed edge and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge<E> {
    source: Id,
    target: Id,
    value: E,
}

/// Directed multigraph with insertion-ordered nodes and edges.
///
/// Self-loops and parallel edges are representable; it is up to the owner
/// to reject them when they make no sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Graph<N, E> {
    nodes: IndexMap<Id, N>,
    edges: Vec<Edge<E>>,
    incoming_edges: IndexMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: IndexMap<Id, Vec<EdgeIndex>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    /// Creates a new empty graph.
    pub(crate) fn new() -> Self {
        Graph {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            incoming_edges: IndexMap::new(),
            outgoing_edges: IndexMap::new(),
        }
    }

    /// Returns the node data for the given ID, if it exists.
    pub(crate) fn node(&self, id: Id) -> Option<&N> {
        self.nodes.get(&id)
    }

    pub(crate) fn node_mut(&mut self, id: Id) -> Option<&mut N> {
        self.nodes.get_mut(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    pub(crate) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over `(source, target, payload)` in declaration order.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (Id, Id, &E)> {
        self.edges
            .iter()
            .map(|edge| (edge.source, edge.target, &edge.value))
    }

    pub(crate) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges).
    pub(crate) fn roots(&self) -> impl Iterator<Item = &N> {
        self.nodes
            .iter()
            .filter(|(id, _)| !self.incoming_edges.contains_key(*id))
            .map(|(_, node)| node)
    }

    /// Returns the targets of every edge leaving `source_id`.
    ///
    /// A target appears once per edge, so parallel edges yield duplicates.
    pub(crate) fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = Id> + '_ {
        self.outgoing_edges
            .get(&source_id)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].target)
    }

    /// Returns the sources of every edge arriving at `target_id`.
    pub(crate) fn incoming_nodes(&self, target_id: Id) -> impl Iterator<Item = Id> + '_ {
        self.incoming_edges
            .get(&target_id)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].source)
    }

    /// Inserts a node, returning the previous value stored under `id`.
    pub(crate) fn add_node(&mut self, id: Id, node: N) -> Option<N> {
        self.nodes.insert(id, node)
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either endpoint is missing.
    pub(crate) fn add_edge(&mut self, source_id: Id, target_id: Id, edge: E) {
        debug_assert!(
            self.nodes.contains_key(&source_id),
            "adding edge: source node {source_id} does not exist",
        );
        debug_assert!(
            self.nodes.contains_key(&target_id),
            "adding edge: target node {target_id} does not exist",
        );

        self.edges.push(Edge {
            source: source_id,
            target: target_id,
            value: edge,
        });

        let idx = EdgeIndex(self.edges.len() - 1);
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.incoming_edges.entry(target_id).or_default().push(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestNode {
        name: &'static str,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestEdge {
        label: &'static str,
    }

    fn node(name: &'static str) -> TestNode {
        TestNode { name }
    }

    fn edge(label: &'static str) -> TestEdge {
        TestEdge { label }
    }

    #[test]
    fn test_graph_new() {
        let graph: Graph<TestNode, TestEdge> = Graph::new();

        assert_eq!(graph.nodes_count(), 0);
        assert_eq!(graph.edges_count(), 0);
        assert_eq!(graph.roots().count(), 0);
    }

    #[test]
    fn test_add_node_keeps_insertion_order() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        graph.add_node(Id::new("graph_c"), node("c"));
        graph.add_node(Id::new("graph_a"), node("a"));
        graph.add_node(Id::new("graph_b"), node("b"));

        let names: Vec<_> = graph.nodes().map(|n| n.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert!(graph.contains_node(Id::new("graph_a")));
        assert_eq!(graph.node(Id::new("graph_b")), Some(&node("b")));
    }

    #[test]
    fn test_node_returns_none_for_missing() {
        let graph: Graph<TestNode, TestEdge> = Graph::new();
        assert_eq!(graph.node(Id::new("graph_missing")), None);
    }

    #[test]
    fn test_add_node_replaces_and_returns_previous() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        let id = Id::new("graph_replace");

        assert_eq!(graph.add_node(id, node("first")), None);
        assert_eq!(graph.add_node(id, node("second")), Some(node("first")));
        assert_eq!(graph.nodes_count(), 1);
    }

    #[test]
    fn test_add_edge() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        let source = Id::new("graph_source");
        let target = Id::new("graph_target");
        graph.add_node(source, node("source"));
        graph.add_node(target, node("target"));

        graph.add_edge(source, target, edge("uses"));

        assert_eq!(graph.edges_count(), 1);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(source, target, &edge("uses"))]);
    }

    #[test]
    fn test_roots() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        let root1 = Id::new("graph_root1");
        let root2 = Id::new("graph_root2");
        let child = Id::new("graph_child");
        graph.add_node(root1, node("root1"));
        graph.add_node(root2, node("root2"));
        graph.add_node(child, node("child"));
        graph.add_edge(root1, child, edge("e"));

        let roots: Vec<_> = graph.roots().map(|n| n.name).collect();
        assert_eq!(roots, vec!["root1", "root2"]);
    }

    #[test]
    fn test_outgoing_and_incoming_nodes() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        let hub = Id::new("graph_hub");
        let a = Id::new("graph_spoke_a");
        let b = Id::new("graph_spoke_b");
        let isolated = Id::new("graph_isolated");
        for (id, name) in [(hub, "hub"), (a, "a"), (b, "b"), (isolated, "isolated")] {
            graph.add_node(id, node(name));
        }
        graph.add_edge(hub, a, edge("1"));
        graph.add_edge(hub, b, edge("2"));
        graph.add_edge(b, hub, edge("3"));

        let outgoing: Vec<_> = graph.outgoing_nodes(hub).collect();
        assert_eq!(outgoing, vec![a, b]);

        let incoming: Vec<_> = graph.incoming_nodes(hub).collect();
        assert_eq!(incoming, vec![b]);

        assert_eq!(graph.outgoing_nodes(isolated).count(), 0);
        assert_eq!(graph.incoming_nodes(isolated).count(), 0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: Graph<TestNode, TestEdge> = Graph::new();
        let source = Id::new("graph_par_source");
        let target = Id::new("graph_par_target");
        graph.add_node(source, node("source"));
        graph.add_node(target, node("target"));

        graph.add_edge(source, target, edge("reads"));
        graph.add_edge(source, target, edge("writes"));

        assert_eq!(graph.edges_count(), 2);
        assert_eq!(graph.outgoing_nodes(source).count(), 2);
    }

    #[test]
    fn test_structural_equality() {
        let build = || {
            let mut graph: Graph<TestNode, TestEdge> = Graph::new();
            let a = Id::new("graph_eq_a");
            let b = Id::new("graph_eq_b");
            graph.add_node(a, node("a"));
            graph.add_node(b, node("b"));
            graph.add_edge(a, b, edge("uses"));
            graph
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_outgoing_for_unknown_node_is_empty() {
        let graph: Graph<TestNode, TestEdge> = Graph::new();
        assert_eq!(graph.outgoing_nodes(Id::new("graph_nonexistent")).count(), 0);
    }
}
