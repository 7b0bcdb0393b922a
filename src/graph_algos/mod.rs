pub mod a_star;
pub mod dijkstra;
pub mod heuristic;
pub mod nba_star;
mod path;
mod priority;
mod shortest_path;

pub use a_star::AStarPathfinder;
pub use dijkstra::DijkstraPathfinder;
pub use heuristic::{EuclideanHeuristic, HeuristicFunction, ZeroHeuristic};
pub use nba_star::NBAStarPathfinder;
pub use path::Path;

use shortest_path::traceback_path;

use crate::collections::FxIndexMap;
use crate::errors::{PathfinderError, Result};
use crate::graph::DirectedGraph;
use crate::NodeId;

/// Type alias for the search tree grown by one search direction
/// The tuple contains (parent_index, distance) where:
/// - parent_index is the index of the parent node in the map, usize::MAX for the root
/// - distance is the best known distance from the root of this direction
pub(crate) type SearchTree = FxIndexMap<NodeId, (usize, f64)>;


/// Counters describing the most recent search of a pathfinder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes whose arcs were relaxed
    pub queued: usize, // open set insertions, stale entries included
    pub pruned: usize, // nodes closed without expansion (bidirectional search only)
}


/// Common contract of every shortest path algorithm in this crate
///
/// A pathfinder owns its search state and reuses it between calls, so one
/// instance must not run two searches at once. Instances borrowing the same
/// graph, weights and heuristic can run side by side.
pub trait Pathfinder {

    /// Find a minimum weight path from `source` to `target`
    /// Returns the empty path when `target` is unreachable, and `[source]` when both are equal.
    fn search(&mut self, source: NodeId, target: NodeId) -> Result<Path>;

    /// Counters of the last call to `search`
    fn stats(&self) -> SearchStats;
}


/// Fail fast when either endpoint is unknown to the graph
pub(crate) fn validate_endpoints<G>(graph: &G, source: NodeId, target: NodeId) -> Result<()>
where
    G: DirectedGraph + ?Sized,
{
    for node in [source, target] {
        if !graph.contains_node(node) {
            return Err(PathfinderError::NodeNotFound(node));
        }
    }
    Ok(())
}
