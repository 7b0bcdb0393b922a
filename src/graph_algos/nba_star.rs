use crate::collections::FxHashSet;
use crate::errors::Result;
use crate::graph::{DirectedGraph, WeightFunction};
use crate::NodeId;
use super::heuristic::HeuristicFunction;
use super::priority::PriorityEntry;
use super::{traceback_path, validate_endpoints, Path, Pathfinder, SearchStats, SearchTree};

use std::collections::BinaryHeap;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};



/// Which endpoint a frontier grows from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward, // from the source along outgoing arcs
    Backward, // from the target along incoming arcs
}


/// Search state of one direction
#[derive(Debug)]
struct Frontier {
    direction: Direction,
    goal: NodeId, // endpoint the direction is heading to
    open: BinaryHeap<PriorityEntry>,
    tree: SearchTree,
    head_priority: f64, // priority key at the head of `open` after the last expansion
}

impl Frontier {

    fn new(direction: Direction) -> Self {
        Self {
            direction,
            goal: 0,
            open: BinaryHeap::new(),
            tree: SearchTree::default(),
            head_priority: f64::INFINITY,
        }
    }

    /// Clear the previous search and seed the open set with the root of the search tree
    fn reset<H>(&mut self, origin: NodeId, goal: NodeId, heuristic: &H)
    where
        H: HeuristicFunction + ?Sized,
    {
        self.open.clear();
        self.tree.clear();
        self.goal = goal;

        let priority = self.potential(heuristic, origin);
        let index = self.tree.insert_full(origin, (usize::MAX, 0.0)).0;
        self.open.push(PriorityEntry::new(index, priority));
        self.head_priority = priority;
    }

    /// Lower bound on the remaining distance from `node` to the goal, in travel direction
    fn potential<H>(&self, heuristic: &H, node: NodeId) -> f64
    where
        H: HeuristicFunction + ?Sized,
    {
        match self.direction {
            Direction::Forward => heuristic.estimate(node, self.goal),
            Direction::Backward => heuristic.estimate(self.goal, node),
        }
    }

    fn neighbors<'g, G>(&self, graph: &'g G, node: NodeId) -> &'g [NodeId]
    where
        G: DirectedGraph + ?Sized,
    {
        match self.direction {
            Direction::Forward => graph.children_of(node),
            Direction::Backward => graph.parents_of(node),
        }
    }

    /// Weight of the arc between an expanded node and its neighbor, oriented as in the graph
    fn arc_weight<W>(&self, weights: &W, node: NodeId, neighbor: NodeId) -> Result<f64>
    where
        W: WeightFunction + ?Sized,
    {
        match self.direction {
            Direction::Forward => weights.weight(node, neighbor),
            Direction::Backward => weights.weight(neighbor, node),
        }
    }

    fn distance(&self, node: NodeId) -> Option<f64> {
        self.tree.get(&node).map(|&(_, distance)| distance)
    }

    fn refresh_head_priority(&mut self) {
        if let Some(head) = self.open.peek() {
            self.head_priority = head.priority;
        }
    }
}


/// Best complete path seen so far
#[derive(Clone, Copy, Debug)]
struct Meeting {
    best_length: f64,
    touch_node: Option<NodeId>,
}

impl Meeting {
    fn none() -> Self {
        Self { best_length: f64::INFINITY, touch_node: None }
    }
}


/// Expand the forward frontier when it holds fewer open entries, the backward one otherwise
pub(crate) fn expand_forward_next(forward_open: usize, backward_open: usize) -> bool {
    forward_open < backward_open
}

/// True when a node popped by one frontier cannot lie on a path shorter than `best_length`
/// - `distance`: distance of the node from this frontier's origin
/// - `potential`: estimate from the node to this frontier's goal
/// - `opposite_head`: priority key at the head of the opposite frontier
/// - `opposite_potential`: estimate of the distance between this frontier's origin and the node
pub(crate) fn is_prunable(distance: f64, potential: f64, opposite_head: f64, opposite_potential: f64, best_length: f64) -> bool {
    distance + potential >= best_length
        || distance + opposite_head - opposite_potential >= best_length
}


/// NBA* ("New Bidirectional A*")
/// Wim Pijls and Henk Post, "Yet another bidirectional algorithm for shortest paths", 2009
///
/// A forward A* from the source and a backward A* from the target share one closed set.
/// Each step expands the smaller frontier. A popped node is closed, then either pruned
/// against the best path found so far or stabilized by relaxing its arcs. Relaxing an arc
/// into a node the opposite direction has already reached yields a candidate path through
/// that touch node. The search stops once either open set runs empty.
///
/// The heuristic must be consistent for the pruning bounds to be valid.
pub struct NBAStarPathfinder<'a, G: ?Sized, W: ?Sized, H: ?Sized> {
    graph: &'a G,
    weights: &'a W,
    heuristic: &'a H,
    forward: Frontier,
    backward: Frontier,
    closed: FxHashSet<NodeId>, // nodes finalized by either direction
    meeting: Meeting,
    stats: SearchStats,
}

impl<'a, G, W, H> NBAStarPathfinder<'a, G, W, H>
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
            forward: Frontier::new(Direction::Forward),
            backward: Frontier::new(Direction::Backward),
            closed: FxHashSet::default(),
            meeting: Meeting::none(),
            stats: SearchStats::default(),
        }
    }

    fn reset(&mut self, source: NodeId, target: NodeId) {
        self.closed.clear();
        self.meeting = Meeting::none();
        self.forward.reset(source, target, self.heuristic);
        self.backward.reset(target, source, self.heuristic);
        self.stats.queued += 2;
    }

    /// Pop one node from the frontier of `direction`, then prune or stabilize it
    fn expand(&mut self, direction: Direction) -> Result<()> {
        let graph = self.graph;
        let weights = self.weights;
        let heuristic = self.heuristic;

        let (frontier, opposite) = match direction {
            Direction::Forward => (&mut self.forward, &self.backward),
            Direction::Backward => (&mut self.backward, &self.forward),
        };

        let Some(PriorityEntry { index, .. }) = frontier.open.pop() else {
            return Ok(());
        };
        let Some((&node, &(_, distance))) = frontier.tree.get_index(index) else {
            return Ok(());
        };

        // Stale entry, or the node was already finalized by either direction
        if !self.closed.insert(node) {
            frontier.refresh_head_priority();
            return Ok(());
        }

        let prunable = is_prunable(
            distance,
            frontier.potential(heuristic, node),
            opposite.head_priority,
            opposite.potential(heuristic, node),
            self.meeting.best_length,
        );

        if prunable {
            self.stats.pruned += 1;
        } else {
            self.stats.expanded += 1;

            for &neighbor in frontier.neighbors(graph, node) {
                if self.closed.contains(&neighbor) {
                    continue;
                }

                let tentative = distance + frontier.arc_weight(weights, node, neighbor)?;

                let neighbor_index = match frontier.tree.entry(neighbor) {
                    Vacant(e) => {
                        let neighbor_index = e.index();
                        e.insert((index, tentative));
                        neighbor_index
                    }
                    Occupied(mut e) => {
                        if e.get().1 > tentative {
                            e.insert((index, tentative));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                let priority = tentative + frontier.potential(heuristic, neighbor);
                frontier.open.push(PriorityEntry::new(neighbor_index, priority));
                self.stats.queued += 1;

                // Reached from both sides, a complete path runs through the neighbor
                if let Some(opposite_distance) = opposite.distance(neighbor) {
                    let length = tentative + opposite_distance;
                    if length < self.meeting.best_length {
                        trace!("NBA* touch node {} improves best path to {}", neighbor, length);
                        self.meeting.best_length = length;
                        self.meeting.touch_node = Some(neighbor);
                    }
                }
            }
        }

        frontier.refresh_head_priority();
        Ok(())
    }
}

impl<G, W, H> Pathfinder for NBAStarPathfinder<'_, G, W, H>
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

        self.reset(source, target);

        while !self.forward.open.is_empty() && !self.backward.open.is_empty() {
            if expand_forward_next(self.forward.open.len(), self.backward.open.len()) {
                self.expand(Direction::Forward)?;
            } else {
                self.expand(Direction::Backward)?;
            }
        }

        debug!(
            "NBA* {} -> {}: found={} length={} expanded={} pruned={} queued={}",
            source,
            target,
            self.meeting.touch_node.is_some(),
            self.meeting.best_length,
            self.stats.expanded,
            self.stats.pruned,
            self.stats.queued
        );

        match self.meeting.touch_node {
            Some(touch_node) => traceback_path(touch_node, &self.forward.tree, Some(&self.backward.tree)),
            None => Ok(Path::empty()),
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
