use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use log::debug;

use crate::errors::Result;
use crate::geometry::Point;
use crate::graph::{AdjacencyGraph, ArcWeights, DirectedGraph, NodeCoordinates};
use crate::NodeId;


/// Parameters of a random planar instance
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub nodes: usize,
    pub arcs: usize, // number of random arc draws, duplicates collapse
    pub width: f64,
    pub height: f64,
    pub weight_factor: f64, // arc weight = factor * euclidean length, >= 1 keeps the euclidean heuristic consistent
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 50_000,
            arcs: 5_000_000,
            width: 1000.0,
            height: 1000.0,
            weight_factor: 1.2,
            seed: 1306862436431866,
        }
    }
}


/// A graph together with node positions and arc weights derived from them
#[derive(Clone, Debug)]
pub struct GeneratedInstance {
    pub graph: AdjacencyGraph,
    pub coordinates: NodeCoordinates,
    pub weights: ArcWeights,
}


/// Seeded generator of random instances
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {

    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the graph, place its nodes and weigh every arc
    pub fn generate(&mut self) -> Result<GeneratedInstance> {
        let graph = self.random_graph();
        let coordinates = self.random_coordinates(&graph);
        let weights = self.weigh_arcs(&graph, &coordinates)?;

        debug!(
            "generated {} nodes, {} arcs (seed {})",
            graph.node_count(), graph.arc_count(), self.config.seed
        );

        Ok(GeneratedInstance { graph, coordinates, weights })
    }

    /// Pick a uniformly random node id, None for an empty graph
    pub fn random_node(&mut self) -> Option<NodeId> {
        if self.config.nodes == 0 {
            return None;
        }
        Some(self.rng.random_range(0..self.config.nodes))
    }

    fn random_graph(&mut self) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for node in 0..self.config.nodes {
            graph.add_node(node);
        }

        if self.config.nodes == 0 {
            return graph;
        }

        for _ in 0..self.config.arcs {
            let tail = self.rng.random_range(0..self.config.nodes);
            let head = self.rng.random_range(0..self.config.nodes);
            graph.add_arc(tail, head);
        }
        graph
    }

    fn random_coordinates(&mut self, graph: &AdjacencyGraph) -> NodeCoordinates {
        let mut coordinates = NodeCoordinates::new();
        for node in graph.nodes() {
            let point = Point {
                x: self.rng.random::<f64>() * self.config.width,
                y: self.rng.random::<f64>() * self.config.height,
            };
            coordinates.insert(node, point);
        }
        coordinates
    }

    fn weigh_arcs(&self, graph: &AdjacencyGraph, coordinates: &NodeCoordinates) -> Result<ArcWeights> {
        let mut weights = ArcWeights::new();
        for tail in graph.nodes() {
            for &head in graph.children_of(tail) {
                let length = match (coordinates.get(tail), coordinates.get(head)) {
                    (Some(a), Some(b)) => a.distance(b),
                    _ => 0.0,
                };
                weights.set(tail, head, self.config.weight_factor * length)?;
            }
        }
        Ok(weights)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightFunction;

    fn small_config(seed: u64) -> GeneratorConfig {
        GeneratorConfig { nodes: 30, arcs: 120, seed, ..GeneratorConfig::default() }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = Generator::new(small_config(7)).generate().unwrap();
        let b = Generator::new(small_config(7)).generate().unwrap();

        assert_eq!(a.graph.arc_count(), b.graph.arc_count());
        for node in a.graph.nodes() {
            assert_eq!(a.graph.children_of(node), b.graph.children_of(node));
            assert_eq!(a.coordinates.get(node), b.coordinates.get(node));
        }
    }

    #[test]
    fn test_every_arc_is_weighted_by_distance() {
        let config = small_config(11);
        let factor = config.weight_factor;
        let instance = Generator::new(config).generate().unwrap();

        assert_eq!(instance.graph.node_count(), 30);
        assert!(instance.graph.arc_count() <= 120);
        assert_eq!(instance.weights.len(), instance.graph.arc_count());

        for tail in instance.graph.nodes() {
            for &head in instance.graph.children_of(tail) {
                let a = instance.coordinates.get(tail).unwrap();
                let b = instance.coordinates.get(head).unwrap();
                assert_eq!(instance.weights.weight(tail, head), Ok(factor * a.distance(b)));
            }
        }
    }

    #[test]
    fn test_coordinates_inside_plane() {
        let instance = Generator::new(small_config(3)).generate().unwrap();
        for node in instance.graph.nodes() {
            let point = instance.coordinates.get(node).unwrap();
            assert!((0.0..1000.0).contains(&point.x));
            assert!((0.0..1000.0).contains(&point.y));
        }
    }

    #[test]
    fn test_empty_graph() {
        let mut generator = Generator::new(GeneratorConfig { nodes: 0, arcs: 10, ..GeneratorConfig::default() });
        let instance = generator.generate().unwrap();
        assert_eq!(instance.graph.node_count(), 0);
        assert!(generator.random_node().is_none());
    }
}
