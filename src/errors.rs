use thiserror::Error;

use crate::NodeId;


/// Failures surfaced by graph construction and path searches.
/// An unreachable target is not an error, searches return an empty path instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathfinderError {
    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId), // source or target is unknown to the graph

    #[error("no weight defined for arc {tail} -> {head}")]
    UndefinedWeight { tail: NodeId, head: NodeId },

    #[error("arc {tail} -> {head} has invalid weight {weight}")]
    InvalidWeight { tail: NodeId, head: NodeId, weight: f64 }, // negative or NaN

    #[error("parent chain is broken at node {0}")]
    BrokenParentChain(NodeId),
}

pub type Result<T> = std::result::Result<T, PathfinderError>;
