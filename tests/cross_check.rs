use nbastar::generator::{Generator, GeneratorConfig};
use nbastar::{
    AStarPathfinder, AdjacencyGraph, ArcWeights, DijkstraPathfinder, EuclideanHeuristic, NBAStarPathfinder,
    Path, Pathfinder, ZeroHeuristic,
};

fn instance(nodes: usize, arcs: usize, seed: u64) -> nbastar::generator::GeneratedInstance {
    let config = GeneratorConfig { nodes, arcs, seed, ..GeneratorConfig::default() };
    Generator::new(config).generate().unwrap()
}

fn assert_same_cost(a: &Path, b: &Path, weights: &ArcWeights, label: &str) {
    assert_eq!(a.is_empty(), b.is_empty(), "{label}: {a} vs {b}");
    let (ca, cb) = (a.cost(weights).unwrap(), b.cost(weights).unwrap());
    assert!((ca - cb).abs() <= 1e-9 * ca.max(1.0), "{label}: {ca} != {cb}");
}

fn assert_valid_path(path: &Path, graph: &AdjacencyGraph, source: usize, target: usize) {
    if path.is_empty() {
        return;
    }
    assert_eq!(path.source(), Some(source));
    assert_eq!(path.target(), Some(target));
    for pair in path.nodes().windows(2) {
        assert!(graph.has_arc(pair[0], pair[1]), "{} -> {} is not an arc", pair[0], pair[1]);
    }
}

#[test]
fn all_variants_agree_on_random_graphs() {
    for seed in [1, 2, 3, 4] {
        let instance = instance(60, 240, seed);
        let heuristic = EuclideanHeuristic::new(&instance.coordinates);

        let mut dijkstra = DijkstraPathfinder::new(&instance.graph, &instance.weights);
        let mut a_star = AStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);
        let mut nba_star = NBAStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);

        for source in (0..60).step_by(7) {
            for target in 0..60 {
                let expected = dijkstra.search(source, target).unwrap();
                let guided = a_star.search(source, target).unwrap();
                let bidirectional = nba_star.search(source, target).unwrap();

                let label = format!("seed {seed}, {source} -> {target}");
                assert_valid_path(&expected, &instance.graph, source, target);
                assert_valid_path(&guided, &instance.graph, source, target);
                assert_valid_path(&bidirectional, &instance.graph, source, target);
                assert_same_cost(&expected, &guided, &instance.weights, &label);
                assert_same_cost(&expected, &bidirectional, &instance.weights, &label);
            }
        }
    }
}

#[test]
fn zero_heuristic_never_changes_cost() {
    let instance = instance(80, 400, 99);
    let heuristic = EuclideanHeuristic::new(&instance.coordinates);

    let mut guided = NBAStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);
    let mut blind = NBAStarPathfinder::new(&instance.graph, &instance.weights, &ZeroHeuristic);

    for source in (0..80).step_by(9) {
        for target in (0..80).step_by(5) {
            let a = guided.search(source, target).unwrap();
            let b = blind.search(source, target).unwrap();
            assert_same_cost(&a, &b, &instance.weights, &format!("{source} -> {target}"));
        }
    }
}

#[test]
fn sparse_graph_has_unreachable_pairs() {
    // fewer arcs than nodes leaves most pairs disconnected
    let instance = instance(40, 20, 5);
    let heuristic = EuclideanHeuristic::new(&instance.coordinates);

    let mut dijkstra = DijkstraPathfinder::new(&instance.graph, &instance.weights);
    let mut nba_star = NBAStarPathfinder::new(&instance.graph, &instance.weights, &heuristic);

    let mut unreachable = 0;
    for source in 0..40 {
        for target in 0..40 {
            let expected = dijkstra.search(source, target).unwrap();
            let bidirectional = nba_star.search(source, target).unwrap();
            if expected.is_empty() {
                unreachable += 1;
                assert!(bidirectional.is_empty());
                assert_eq!(bidirectional.cost(&instance.weights), Ok(0.0));
            }
            assert_same_cost(&expected, &bidirectional, &instance.weights, &format!("{source} -> {target}"));
        }
    }
    assert!(unreachable > 0);
}

#[test]
fn pathfinders_share_read_only_inputs_across_threads() {
    let instance = instance(50, 250, 8);
    let heuristic = EuclideanHeuristic::new(&instance.coordinates);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let (graph, weights, heuristic) = (&instance.graph, &instance.weights, &heuristic);
                scope.spawn(move || {
                    let mut finder = NBAStarPathfinder::new(graph, weights, heuristic);
                    (0..50).map(|target| finder.search(offset, target).unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut dijkstra = DijkstraPathfinder::new(&instance.graph, &instance.weights);
        for (offset, handle) in handles.into_iter().enumerate() {
            for (target, path) in handle.join().unwrap().into_iter().enumerate() {
                let expected = dijkstra.search(offset, target).unwrap();
                assert_same_cost(&expected, &path, &instance.weights, &format!("{offset} -> {target}"));
            }
        }
    });
}
