mod weights;

pub use weights::{ArcWeights, NodeCoordinates};

use crate::collections::{FxHashSet, FxIndexMap};
use crate::errors::Result;
use crate::NodeId;


/// Read-only adjacency access used by the pathfinders
/// Backward searches walk `parents_of`, forward searches walk `children_of`
pub trait DirectedGraph {
    fn contains_node(&self, node: NodeId) -> bool;

    /// Heads of the arcs leaving `node`
    fn children_of(&self, node: NodeId) -> &[NodeId];

    /// Tails of the arcs entering `node`
    fn parents_of(&self, node: NodeId) -> &[NodeId];
}

/// Lookup of arc weights
/// Weights must be non-negative, querying a pair that is not an arc is an error
pub trait WeightFunction {
    fn weight(&self, tail: NodeId, head: NodeId) -> Result<f64>;
}


/// Incoming and outgoing neighbors of a single node
#[derive(Clone, Debug, Default)]
struct Adjacency {
    children: Vec<NodeId>,
    parents: Vec<NodeId>,
}


/// In-memory directed graph
/// Nodes keep their insertion order, parallel arcs are collapsed
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    nodes: FxIndexMap<NodeId, Adjacency>,
    arcs: FxHashSet<(NodeId, NodeId)>,
}

impl AdjacencyGraph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returns false if it was already present
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        self.nodes.insert(node, Adjacency::default());
        true
    }

    /// Add the arc tail -> head, inserting any missing endpoint
    /// Returns false if the arc already existed
    pub fn add_arc(&mut self, tail: NodeId, head: NodeId) -> bool {
        if !self.arcs.insert((tail, head)) {
            return false;
        }

        self.nodes.entry(tail).or_default().children.push(head);
        self.nodes.entry(head).or_default().parents.push(tail);
        true
    }

    pub fn has_arc(&self, tail: NodeId, head: NodeId) -> bool {
        self.arcs.contains(&(tail, head))
    }

    /// Node ids in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
}

impl DirectedGraph for AdjacencyGraph {

    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(&node).map(|adjacency| adjacency.children.as_slice()).unwrap_or(&[])
    }

    fn parents_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(&node).map(|adjacency| adjacency.parents.as_slice()).unwrap_or(&[])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arc_inserts_endpoints() {
        let mut graph = AdjacencyGraph::new();
        assert!(graph.add_arc(3, 7));

        assert!(graph.contains_node(3));
        assert!(graph.contains_node(7));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.children_of(3), &[7]);
        assert_eq!(graph.parents_of(7), &[3]);
        assert!(graph.children_of(7).is_empty());
    }

    #[test]
    fn test_duplicate_nodes_and_arcs_are_ignored() {
        let mut graph = AdjacencyGraph::new();
        assert!(graph.add_node(1));
        assert!(!graph.add_node(1));
        assert!(graph.add_arc(1, 2));
        assert!(!graph.add_arc(1, 2));

        assert_eq!(graph.arc_count(), 1);
        assert_eq!(graph.children_of(1), &[2]);
        assert!(graph.has_arc(1, 2));
        assert!(!graph.has_arc(2, 1));
    }

    #[test]
    fn test_self_loop_is_child_and_parent() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc(4, 4);
        assert_eq!(graph.children_of(4), &[4]);
        assert_eq!(graph.parents_of(4), &[4]);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = AdjacencyGraph::new();
        assert!(!graph.contains_node(0));
        assert!(graph.children_of(0).is_empty());
        assert!(graph.parents_of(0).is_empty());
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(9);
        graph.add_arc(2, 5);
        graph.add_node(0);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![9, 2, 5, 0]);
    }
}
