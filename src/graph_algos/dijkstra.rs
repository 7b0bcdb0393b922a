use crate::errors::Result;
use crate::graph::{DirectedGraph, WeightFunction};
use crate::NodeId;
use super::a_star::AStarPathfinder;
use super::heuristic::{ZeroHeuristic, ZERO_HEURISTIC};
use super::{Path, Pathfinder, SearchStats};



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// This is A* running with the zero heuristic, exposed under its own name
pub struct DijkstraPathfinder<'a, G: ?Sized, W: ?Sized> {
    inner: AStarPathfinder<'a, G, W, ZeroHeuristic>,
}

impl<'a, G, W> DijkstraPathfinder<'a, G, W>
where
    G: DirectedGraph + ?Sized,
    W: WeightFunction + ?Sized,
{
    pub fn new(graph: &'a G, weights: &'a W) -> Self {
        Self {
            inner: AStarPathfinder::new(graph, weights, &ZERO_HEURISTIC),
        }
    }
}

impl<G, W> Pathfinder for DijkstraPathfinder<'_, G, W>
where
    G: DirectedGraph + ?Sized,
    W: WeightFunction + ?Sized,
{
    fn search(&mut self, source: NodeId, target: NodeId) -> Result<Path> {
        self.inner.search(source, target)
    }

    fn stats(&self) -> SearchStats {
        self.inner.stats()
    }
}
