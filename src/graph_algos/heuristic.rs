use crate::graph::NodeCoordinates;
use crate::NodeId;


/// Lower bound estimate of the distance between two nodes
///
/// Estimates must be non-negative and admissible. The bidirectional search also
/// requires consistency: `estimate(u, t) <= weight(u, v) + estimate(v, t)` for every arc u -> v.
pub trait HeuristicFunction {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64;
}

/// Any closure `|from, to| -> f64` can act as a heuristic
impl<F> HeuristicFunction for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}


/// Always estimates 0, turning A* into Dijkstra
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl HeuristicFunction for ZeroHeuristic {
    fn estimate(&self, _from: NodeId, _to: NodeId) -> f64 {
        0.0
    }
}

pub(crate) static ZERO_HEURISTIC: ZeroHeuristic = ZeroHeuristic;


/// Straight line distance between node coordinates
/// Admissible whenever every arc weighs at least `scale` times the distance between its endpoints
#[derive(Clone, Copy, Debug)]
pub struct EuclideanHeuristic<'a> {
    coordinates: &'a NodeCoordinates,
    scale: f64,
}

impl<'a> EuclideanHeuristic<'a> {

    pub fn new(coordinates: &'a NodeCoordinates) -> Self {
        Self { coordinates, scale: 1.0 }
    }

    /// Multiply every estimate by `scale`
    /// Negative or NaN scales are clamped to 0
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = if scale > 0.0 { scale } else { 0.0 };
        self
    }
}

impl HeuristicFunction for EuclideanHeuristic<'_> {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.coordinates.get(from), self.coordinates.get(to)) {
            (Some(a), Some(b)) => self.scale * a.distance(b),
            _ => 0.0, // no position known, fall back to the trivial bound
        }
    }
}
