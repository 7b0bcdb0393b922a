use crate::collections::FxHashMap;
use crate::errors::{PathfinderError, Result};
use crate::geometry::Point;
use crate::NodeId;
use super::WeightFunction;


/// Arc weights keyed by (tail, head)
#[derive(Clone, Debug, Default)]
pub struct ArcWeights {
    weights: FxHashMap<(NodeId, NodeId), f64>,
}

impl ArcWeights {

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of tail -> head, replacing any previous value
    /// Negative and NaN weights are rejected
    pub fn set(&mut self, tail: NodeId, head: NodeId, weight: f64) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(PathfinderError::InvalidWeight { tail, head, weight });
        }
        self.weights.insert((tail, head), weight);
        Ok(())
    }

    pub fn get(&self, tail: NodeId, head: NodeId) -> Option<f64> {
        self.weights.get(&(tail, head)).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl WeightFunction for ArcWeights {
    fn weight(&self, tail: NodeId, head: NodeId) -> Result<f64> {
        self.get(tail, head).ok_or(PathfinderError::UndefinedWeight { tail, head })
    }
}


/// Planar position of each node, used by geometric heuristics
#[derive(Clone, Debug, Default)]
pub struct NodeCoordinates {
    points: FxHashMap<NodeId, Point>,
}

impl NodeCoordinates {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId, point: Point) -> Option<Point> {
        self.points.insert(node, point)
    }

    pub fn get(&self, node: NodeId) -> Option<&Point> {
        self.points.get(&node)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
