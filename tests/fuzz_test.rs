/// Fuzzes the search by checking for many random grids that a path is found exactly when start
/// and goal share a connected component, and that both open sets and both algorithms agree on
/// the length of the shortest path.
use grid_openset::{Grid, SearchConfig, SearchEngine, Terrain};
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(n, n);
    grid.set_start(0, 0).unwrap();
    grid.set_goal(n as i32 - 1, n as i32 - 1).unwrap();
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            // The start and goal refuse obstacles; everything else is fair game.
            let _ = grid.set_obstacle(x, y, rng.gen_bool(0.35));
        }
    }
    grid
}

fn visualize_grid(grid: &Grid) {
    println!("{}", grid);
}

fn assert_valid_path(grid: &Grid, path: &[Point], diagonal: bool) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    for pair in path.windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        if diagonal {
            assert!(dx.max(dy) == 1);
        } else {
            assert!(dx + dy == 1);
        }
    }
    for p in path {
        assert_ne!(grid.terrain(p.x, p.y), Some(Terrain::Obstacle));
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for diagonal in [false, true] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, &mut rng);
            let reachable = grid.reachable(&grid.start(), &grid.goal(), diagonal);
            let mut heap_engine = SearchEngine::with_heap(grid.clone());
            let mut tree_engine = SearchEngine::with_tree(grid);
            let config = SearchConfig::dijkstra(diagonal);
            let heap_result = heap_engine.run(&config);
            let tree_result = tree_engine.run(&config);
            // Show the grid if a path is not found
            if heap_result.succeeded != reachable {
                visualize_grid(heap_engine.grid());
            }
            assert_eq!(heap_result.succeeded, reachable);
            assert_eq!(tree_result.succeeded, reachable);
            assert_eq!(heap_result.path_length, tree_result.path_length);
            if reachable {
                assert_valid_path(heap_engine.grid(), &heap_result.path, diagonal);
                assert_valid_path(tree_engine.grid(), &tree_result.path, diagonal);
            } else {
                assert_eq!(heap_result.path_length, 0);
            }
        }
    }
}

/// With an admissible estimate A* must find paths exactly as short as Dijkstra.
#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for tie_breaker in [false, true] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, &mut rng);
            let mut engine = SearchEngine::with_tree(grid);
            let dijkstra = engine.run(&SearchConfig::dijkstra(false));
            let astar = engine.run(&SearchConfig {
                use_tie_breaker: tie_breaker,
                ..SearchConfig::astar(false)
            });
            if dijkstra.path_length != astar.path_length {
                println!(
                    "Dijkstra length: {}; A* length: {}",
                    dijkstra.path_length, astar.path_length
                );
                visualize_grid(engine.grid());
            }
            assert_eq!(dijkstra.succeeded, astar.succeeded);
            assert_eq!(dijkstra.path_length, astar.path_length);
        }
    }
}

/// On an open 4-grid the shortest path between any two cells is their Manhattan distance.
#[test]
fn open_grid_distances_are_manhattan() {
    const N: usize = 7;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let goal = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if start == goal {
            continue;
        }
        let mut grid = Grid::new(N, N);
        // Park the goal somewhere neither marker ends up so the moves never collide.
        let parking = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
            .into_iter()
            .find(|p| *p != start && *p != goal)
            .unwrap();
        grid.set_goal(parking.x, parking.y).unwrap();
        grid.set_start(start.x, start.y).unwrap();
        grid.set_goal(goal.x, goal.y).unwrap();
        let expected = ((start.x - goal.x).abs() + (start.y - goal.y).abs()) as usize;
        let mut engine = SearchEngine::with_heap(grid);
        for config in [SearchConfig::dijkstra(false), SearchConfig::astar(false)] {
            let result = engine.run(&config);
            assert!(result.succeeded);
            assert_eq!(result.path_length, expected);
        }
    }
}
