use std::fmt;

use crate::errors::Result;
use crate::graph::WeightFunction;
use crate::NodeId;


/// Ordered node sequence from source to target, inclusive
/// An empty path means the target could not be reached, a single node path is
/// the zero cost answer for source == target
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {

    /// The "no path" result
    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes, not arcs
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Sum of the arc weights along the path
    /// Empty and single node paths cost 0
    pub fn cost<W>(&self, weights: &W) -> Result<f64>
    where
        W: WeightFunction + ?Sized,
    {
        let mut cost = 0.0;
        for pair in self.nodes.windows(2) {
            cost += weights.weight(pair[0], pair[1])?;
        }
        Ok(cost)
    }

    pub fn into_inner(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}
