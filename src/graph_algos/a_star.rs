use crate::collections::FxHashSet;
use crate::errors::Result;
use crate::graph::{DirectedGraph, WeightFunction};
use crate::NodeId;
use super::heuristic::HeuristicFunction;
use super::priority::PriorityEntry;
use super::{traceback_path, validate_endpoints, Path, Pathfinder, SearchStats, SearchTree};

use std::collections::BinaryHeap;
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The search is exact as long as the heuristic is admissible and consistent.
/// With `ZeroHeuristic` it expands nodes in the same order as Dijkstra's algorithm.
/// Open list, search tree and closed set are kept between searches and cleared at the start of each one.
pub struct AStarPathfinder<'a, G: ?Sized, W: ?Sized, H: ?Sized> {
    graph: &'a G,
    weights: &'a W,
    heuristic: &'a H,

    // Nodes that need to be evaluated, sorted by distance + heuristic
    open_list: BinaryHeap<PriorityEntry>,

    // Best known (parent_index, distance) of every discovered node
    // for the source node, parent_index is set to usize::MAX to indicate it has no parent
    tree: SearchTree,

    // Finalized nodes, a popped entry for one of these is stale
    closed: FxHashSet<NodeId>,

    stats: SearchStats,
}

impl<'a, G, W, H> AStarPathfinder<'a, G, W, H>
where
    G: DirectedGraph + ?Sized,
    W: WeightFunction + ?Sized,
    H: HeuristicFunction + ?Sized,
{

    pub fn new(graph: &'a G, weights: &'a W, heuristic: &'a H) -> Self {
        Self {
            graph,
            weights,
            heuristic,
            open_list: BinaryHeap::new(),
            tree: SearchTree::default(),
            closed: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Forget everything about the previous search, keeping the allocations
    fn reset(&mut self) {
        self.open_list.clear();
        self.tree.clear();
        self.closed.clear();
    }

    /// Best first traversal from source until target is popped from the open list
    /// Returns true if the target was reached, the search tree then holds its path
    fn build_tree(&mut self, source: NodeId, target: NodeId) -> Result<bool> {
        let graph = self.graph;

        let start_index = self.tree.insert_full(source, (usize::MAX, 0.0)).0;
        self.open_list.push(PriorityEntry::new(start_index, 0.0));
        self.stats.queued += 1;

        while let Some(PriorityEntry { index, .. }) = self.open_list.pop() {

            // fetch current best distance for node
            let Some((&node, &(_, distance))) = self.tree.get_index(index) else {
                continue;
            };

            // Stale entry, the node was finalized through a better entry
            if !self.closed.insert(node) {
                continue;
            }

            // The first time the target is popped its distance is optimal
            if node == target {
                return Ok(true);
            }

            self.stats.expanded += 1;

            for &child in graph.children_of(node) {
                if self.closed.contains(&child) {
                    continue;
                }

                let tentative = distance + self.weights.weight(node, child)?;

                let child_index = match self.tree.entry(child) {
                    Vacant(e) => {
                        // This is the first time we're seeing this child
                        let child_index = e.index();
                        e.insert((index, tentative));
                        child_index
                    }
                    Occupied(mut e) => {
                        if e.get().1 > tentative {
                            // We've found a better path to this child
                            e.insert((index, tentative));
                            e.index()
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                let priority = tentative + self.heuristic.estimate(child, target);
                self.open_list.push(PriorityEntry::new(child_index, priority));
                self.stats.queued += 1;
            }
        }

        Ok(false)
    }
}

impl<G, W, H> Pathfinder for AStarPathfinder<'_, G, W, H>
where
    G: DirectedGraph + ?Sized,
    W: WeightFunction + ?Sized,
    H: HeuristicFunction + ?Sized,
{

    fn search(&mut self, source: NodeId, target: NodeId) -> Result<Path> {
        validate_endpoints(self.graph, source, target)?;
        self.stats = SearchStats::default();

        if source == target {
            return Ok(Path::from(vec![source]));
        }

        self.reset();
        let found = self.build_tree(source, target)?;

        debug!(
            "A* {} -> {}: found={} expanded={} queued={}",
            source, target, found, self.stats.expanded, self.stats.queued
        );

        if found {
            traceback_path(target, &self.tree, None)
        } else {
            Ok(Path::empty())
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
