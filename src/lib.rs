//! Exact point to point shortest paths over weighted directed graphs.
//!
//! Three pathfinders share the [`Pathfinder`] contract:
//! - [`AStarPathfinder`]: unidirectional best first search guided by a [`HeuristicFunction`]
//! - [`DijkstraPathfinder`]: the same search with the zero heuristic
//! - [`NBAStarPathfinder`]: bidirectional NBA* search
//!
//! Graphs, weights and heuristics are borrowed read-only, so any number of
//! pathfinders can share them. Each pathfinder reuses its own search state.

pub mod errors;
pub mod generator;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
mod collections;

/// Opaque node identifier owned by the graph
pub type NodeId = usize;

pub use errors::{PathfinderError, Result};
pub use graph::{AdjacencyGraph, ArcWeights, DirectedGraph, NodeCoordinates, WeightFunction};
pub use graph_algos::{
    AStarPathfinder, DijkstraPathfinder, EuclideanHeuristic, HeuristicFunction, NBAStarPathfinder, Path,
    Pathfinder, SearchStats, ZeroHeuristic,
};
