use grid_openset::{Grid, SearchConfig, SearchEngine};

// In this example a path is found on a 5x4 grid with shape
//  _____
// |S....|
// |.###.|
// |...#.|
// |.#..G|
//  _____
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(5, 4);
    grid.set_start(0, 0).unwrap();
    grid.set_goal(4, 3).unwrap();
    for (x, y) in [(1, 1), (2, 1), (3, 1), (3, 2), (1, 3)] {
        grid.set_obstacle(x, y, true).unwrap();
    }
    println!("{}", grid);
    let mut engine = SearchEngine::with_heap(grid);
    let result = engine.run(&SearchConfig::astar(false));
    println!("{}", engine.grid());
    println!(
        "Path of length {} after checking {} nodes:",
        result.path_length, result.nodes_checked
    );
    for p in result.path {
        println!("{:?}", p);
    }
}
