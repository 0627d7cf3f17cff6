/// Fixed layouts with known shortest paths, run with both open sets.
use grid_openset::{Grid, OpenSet, SearchConfig, SearchEngine, SearchState, Terrain};
use grid_util::point::Point;

// A 5x5 grid with a wall in column 2 leaving only the bottom row open
//  _____
// |S.#..|
// |..#..|
// |..#..|
// |..#..|
// |.....|
//  _____
fn walled_grid() -> Grid {
    let mut grid = Grid::new(5, 5);
    grid.set_start(0, 0).unwrap();
    grid.set_goal(4, 4).unwrap();
    for y in 0..4 {
        grid.set_obstacle(2, y, true).unwrap();
    }
    grid
}

fn configs() -> [SearchConfig; 3] {
    [
        SearchConfig::dijkstra(false),
        SearchConfig::astar(false),
        SearchConfig {
            use_tie_breaker: true,
            ..SearchConfig::astar(false)
        },
    ]
}

#[test]
fn corner_to_corner_on_open_grid() {
    let mut grid = Grid::new(5, 5);
    grid.set_start(0, 0).unwrap();
    grid.set_goal(4, 4).unwrap();
    let mut heap_engine = SearchEngine::with_heap(grid.clone());
    let mut tree_engine = SearchEngine::with_tree(grid);
    for config in configs() {
        assert_eq!(heap_engine.run(&config).path_length, 8);
        assert_eq!(tree_engine.run(&config).path_length, 8);
    }
}

#[test]
fn wall_forces_route_through_gap() {
    let mut engine = SearchEngine::with_tree(walled_grid());
    for config in configs() {
        let result = engine.run(&config);
        assert!(result.succeeded);
        assert_eq!(result.path_length, 8);
        assert!(result.path.contains(&Point::new(2, 4)));
        assert_eq!(engine.grid().terrain(2, 4), Some(Terrain::PathMarked));
    }
}

#[test]
fn wall_detour_to_far_corner() {
    let mut grid = walled_grid();
    grid.set_goal(4, 0).unwrap();
    let mut heap_engine = SearchEngine::with_heap(grid.clone());
    let mut tree_engine = SearchEngine::with_tree(grid);
    for config in configs() {
        let heap_result = heap_engine.run(&config);
        let tree_result = tree_engine.run(&config);
        assert_eq!(heap_result.path_length, 12);
        assert_eq!(tree_result.path_length, 12);
        assert!(heap_result.path.contains(&Point::new(2, 4)));
    }
}

#[test]
fn closed_wall_exhausts_frontier() {
    let mut grid = walled_grid();
    grid.set_obstacle(2, 4, true).unwrap();
    let mut engine = SearchEngine::with_heap(grid);
    let result = engine.run(&SearchConfig::astar(false));
    assert!(!result.succeeded);
    assert!(result.path.is_empty());
    assert_eq!(engine.state(), SearchState::Exhausted);
    assert!(engine.open_set().is_empty());
    // Only the ten cells left of the wall were ever reachable.
    assert!(result.nodes_checked <= 10);
    assert!(engine
        .grid()
        .cells()
        .all(|cell| cell.terrain != Terrain::PathMarked));
}

#[test]
fn diagonal_moves_cut_corners() {
    let mut grid = walled_grid();
    grid.set_obstacle(2, 4, true).unwrap();
    grid.set_obstacle(2, 3, false).unwrap();
    let mut engine = SearchEngine::with_tree(grid);
    // Without diagonals the gap at (2, 3) costs a straight walk of 8.
    assert_eq!(engine.run(&SearchConfig::dijkstra(false)).path_length, 8);
    // With diagonals the route is a staircase through the gap.
    let result = engine.run(&SearchConfig::dijkstra(true));
    assert!(result.succeeded);
    assert_eq!(result.path_length, 5);
    assert!(result.path.contains(&Point::new(2, 3)));
}

#[test]
fn editing_between_runs_clears_old_markings() {
    let mut engine = SearchEngine::with_heap(walled_grid());
    engine.run(&SearchConfig::dijkstra(false));
    assert!(engine.grid().cells().any(|c| c.terrain == Terrain::Considered));
    engine.reset_path();
    assert!(engine.grid().cells().all(|c| !c.terrain.is_search_marking()));
    engine.grid_mut().toggle_obstacle(2, 0).unwrap();
    let result = engine.run(&SearchConfig::dijkstra(false));
    assert_eq!(result.path_length, 8);
    assert_eq!(engine.state(), SearchState::Succeeded);
    assert_eq!(result.path.first(), Some(&Point::new(0, 0)));
}
