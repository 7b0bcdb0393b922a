use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use nbastar::generator::{Generator, GeneratorConfig};
use nbastar::{
    AStarPathfinder, ArcWeights, DijkstraPathfinder, EuclideanHeuristic, NBAStarPathfinder, NodeId,
    Pathfinder,
};

/// Compare A*, Dijkstra and NBA* on a random planar graph
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes
    #[clap(long, default_value_t = 50_000)]
    nodes: usize,
    /// Number of random arcs to draw
    #[clap(long, default_value_t = 5_000_000)]
    arcs: usize,
    /// Seed of the random generator
    #[clap(long, default_value_t = 1306862436431866)]
    seed: u64,
    /// Width of the plane holding the nodes
    #[clap(long, default_value_t = 1000.0)]
    width: f64,
    /// Height of the plane holding the nodes
    #[clap(long, default_value_t = 1000.0)]
    height: f64,
    /// Arc weight as a multiple of the euclidean arc length, at least 1
    #[clap(long, default_value_t = 1.2)]
    weight_factor: f64,
    /// Logging level
    #[clap(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            nodes: self.nodes,
            arcs: self.arcs,
            width: self.width,
            height: self.height,
            weight_factor: self.weight_factor,
            seed: self.seed,
        }
    }
}

/// Time one search and report the path found
fn run<P: Pathfinder>(name: &str, finder: &mut P, weights: &ArcWeights, source: NodeId, target: NodeId) -> Result<f64> {
    let start = Instant::now();
    let path = finder.search(source, target).with_context(|| format!("{name} search failed"))?;
    let elapsed = start.elapsed();
    let cost = path.cost(weights)?;

    info!(
        "{name} in {} ms: {} nodes, cost {cost:.3}, {} expanded",
        elapsed.as_millis(),
        path.len(),
        finder.stats().expanded
    );
    info!("{name} path: {path}");
    Ok(cost)
}

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")?;

    anyhow::ensure!(args.weight_factor >= 1.0, "weight factor must be at least 1");

    info!("Seed = {}", args.seed);
    let start = Instant::now();
    let mut generator = Generator::new(args.generator_config());
    let instance = generator.generate()?;
    info!(
        "Generated {} nodes and {} arcs in {} ms",
        instance.graph.node_count(),
        instance.graph.arc_count(),
        start.elapsed().as_millis()
    );

    let (Some(source), Some(target)) = (generator.random_node(), generator.random_node()) else {
        anyhow::bail!("the graph has no nodes");
    };
    info!("Source: {source}");
    info!("Target: {target}");

    let heuristic = EuclideanHeuristic::new(&instance.coordinates);
    let mut a_star = AStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);
    let mut dijkstra = DijkstraPathfinder::new(&instance.graph, &instance.weights);
    let mut nba_star = NBAStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);

    let costs = [
        run("A*", &mut a_star, &instance.weights, source, target)?,
        run("Dijkstra", &mut dijkstra, &instance.weights, source, target)?,
        run("NBA*", &mut nba_star, &instance.weights, source, target)?,
    ];

    let agree = costs.iter().all(|cost| (cost - costs[0]).abs() <= 1e-9 * costs[0].max(1.0));
    info!("Algorithms agree: {agree}");
    Ok(())
}
