use grid_openset::{Grid, OpenSet, SearchConfig, SearchEngine, SearchResult};

// Runs the same searches with both open sets on a 40x40 grid with a long wall and compares the
// work done. The routes found always have the same length; only the order in which ties are
// broken, and therefore the set of considered cells, may differ.

fn build_grid() -> Grid {
    let mut grid = Grid::new(40, 40);
    grid.set_start(2, 2).unwrap();
    grid.set_goal(37, 37).unwrap();
    for x in 0..35 {
        grid.set_obstacle(x, 20, true).unwrap();
    }
    grid
}

fn report<O: OpenSet>(name: &str, engine: &mut SearchEngine<O>, config: &SearchConfig) {
    let SearchResult {
        succeeded,
        path_length,
        nodes_checked,
        elapsed,
        ..
    } = engine.run(config);
    println!(
        "{name:>6}: found {succeeded}, length {path_length}, {nodes_checked} nodes checked in {:?}",
        elapsed
    );
}

fn main() {
    let grid = build_grid();
    let mut heap_engine = SearchEngine::with_heap(grid.clone());
    let mut tree_engine = SearchEngine::with_tree(grid);
    for (config, name) in [
        (SearchConfig::dijkstra(false), "Dijkstra"),
        (SearchConfig::astar(false), "A*"),
        (
            SearchConfig {
                use_tie_breaker: true,
                ..SearchConfig::astar(false)
            },
            "A* with tie-breaker",
        ),
    ] {
        println!("{name}");
        report("heap", &mut heap_engine, &config);
        report("tree", &mut tree_engine, &config);
    }
    println!("{}", tree_engine.grid());
}
