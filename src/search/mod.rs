//! The search loop shared by Dijkstra and A*. Which of the two runs is decided by
//! [SearchConfig::use_astar_heuristic]; the open set is chosen when the engine is built.
use crate::cell::Terrain;
use crate::closed_set::ClosedSet;
use crate::grid::Grid;
use crate::open_set::{BinaryMinHeap, OpenSet, PriorityTree};
use grid_util::point::Point;
use log::{debug, info};
use std::time::{Duration, Instant};

pub mod heuristic;

pub use heuristic::heuristic;

/// Cost of every move, diagonal ones included.
pub const STEP_COST: f32 = 1.0;

/// Options of a single run. The default is Dijkstra on a 4-grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub diagonal_movement_allowed: bool,
    pub use_astar_heuristic: bool,
    pub use_tie_breaker: bool,
}

impl SearchConfig {
    pub fn dijkstra(diagonal_movement_allowed: bool) -> SearchConfig {
        SearchConfig {
            diagonal_movement_allowed,
            ..SearchConfig::default()
        }
    }
    pub fn astar(diagonal_movement_allowed: bool) -> SearchConfig {
        SearchConfig {
            diagonal_movement_allowed,
            use_astar_heuristic: true,
            use_tie_breaker: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No run since construction or the last reset.
    Idle,
    Running,
    /// The last run reached the goal.
    Succeeded,
    /// The last run ran out of frontier before reaching the goal.
    Exhausted,
}

/// Outcome and statistics of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub succeeded: bool,
    /// Route from start to goal, both included. Empty when no path was found.
    pub path: Vec<Point>,
    /// Number of moves along the path.
    pub path_length: usize,
    /// Clear cells newly discovered during the run.
    pub nodes_checked: usize,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Runs shortest-path searches on a [Grid] it owns, using `O` as the frontier. Between runs the
/// grid can be edited through [grid_mut](SearchEngine::grid_mut); every run starts by wiping the
/// state left by the previous one.
#[derive(Clone, Debug)]
pub struct SearchEngine<O: OpenSet = BinaryMinHeap> {
    grid: Grid,
    open_set: O,
    closed_set: ClosedSet,
    state: SearchState,
}

impl SearchEngine<BinaryMinHeap> {
    pub fn with_heap(grid: Grid) -> SearchEngine<BinaryMinHeap> {
        SearchEngine::new(grid, BinaryMinHeap::new())
    }
}

impl SearchEngine<PriorityTree> {
    pub fn with_tree(grid: Grid) -> SearchEngine<PriorityTree> {
        SearchEngine::new(grid, PriorityTree::new())
    }
}

impl<O: OpenSet> SearchEngine<O> {
    pub fn new(grid: Grid, open_set: O) -> SearchEngine<O> {
        let closed_set = ClosedSet::new(grid.width(), grid.height());
        SearchEngine {
            grid,
            open_set,
            closed_set,
            state: SearchState::Idle,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
    pub fn open_set(&self) -> &O {
        &self.open_set
    }
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Replaces the grid with a clear one of the given size.
    pub fn reset_grid(&mut self, width: usize, height: usize) {
        self.grid.reset_grid(width, height);
        self.closed_set = ClosedSet::new(width, height);
        self.open_set.clear();
        self.state = SearchState::Idle;
    }

    /// Drops the results of the last run, keeping obstacles and the start and goal.
    pub fn reset_path(&mut self) {
        self.grid.reset_path();
        self.closed_set.clear();
        self.open_set.clear();
        self.state = SearchState::Idle;
    }

    /// Searches from the start to the goal of the grid. Runs to completion; the grid afterwards
    /// shows the considered cells and the found path.
    pub fn run(&mut self, config: &SearchConfig) -> SearchResult {
        let started = Instant::now();
        self.reset_path();
        if self.closed_set.width() != self.grid.width()
            || self.closed_set.height() != self.grid.height()
        {
            self.closed_set = ClosedSet::new(self.grid.width(), self.grid.height());
        }
        self.state = SearchState::Running;

        let start = self.grid.start();
        let goal = self.grid.goal();
        debug!("Searching from {} to {} with {:?}", start, goal, config);
        if let Some(cell) = self.grid.cell_mut(start) {
            cell.set_costs(0.0, heuristic(config, &start, &goal));
            self.open_set.insert(cell);
        }

        let mut nodes_checked = 0;
        let mut current = start;
        while current != goal {
            let Ok(min) = self.open_set.del_min() else {
                break;
            };
            current = min.point;
            self.closed_set.insert(current);
            nodes_checked += self.expand(current, config);
        }

        let path = if current == goal {
            self.grid.mark_path()
        } else {
            None
        };
        let result = match path {
            Some(path) => {
                self.state = SearchState::Succeeded;
                SearchResult {
                    succeeded: true,
                    path_length: path.len() - 1,
                    path,
                    nodes_checked,
                    elapsed: started.elapsed(),
                }
            }
            None => {
                self.state = SearchState::Exhausted;
                SearchResult {
                    succeeded: false,
                    path: Vec::new(),
                    path_length: 0,
                    nodes_checked,
                    elapsed: started.elapsed(),
                }
            }
        };
        if result.succeeded {
            info!(
                "Path length {} from {} to {}, {} nodes checked in {}ms",
                result.path_length,
                start,
                goal,
                result.nodes_checked,
                result.elapsed_ms()
            );
        } else {
            info!(
                "No path from {} to {}, {} nodes checked in {}ms",
                start,
                goal,
                result.nodes_checked,
                result.elapsed_ms()
            );
        }
        result
    }

    /// Relaxes the neighbours of a freshly closed cell. Returns how many clear cells were
    /// discovered for the first time.
    fn expand(&mut self, current: Point, config: &SearchConfig) -> usize {
        let Some(current_g) = self.grid.cell(current).map(|cell| cell.g_cost()) else {
            return 0;
        };
        let goal = self.grid.goal();
        let tentative_g = current_g + STEP_COST;
        let mut discovered = 0;
        for point in self
            .grid
            .neighborhood_points(&current, config.diagonal_movement_allowed)
        {
            if self.closed_set.contains(&point) {
                continue;
            }
            let h = heuristic(config, &point, &goal);
            let Some(cell) = self.grid.cell_mut(point) else {
                continue;
            };
            if !cell.terrain.passable() {
                continue;
            }
            match self.open_set.contains(cell) {
                None => {
                    if cell.terrain == Terrain::Clear {
                        cell.terrain = Terrain::Considered;
                        discovered += 1;
                    }
                    cell.set_came_from(Some(current));
                    cell.set_costs(tentative_g, h);
                    self.open_set.insert(cell);
                }
                // Decrease-key: the entry is keyed by the old cost, so it has to leave the
                // open set before the cost changes.
                Some(handle) if tentative_g < cell.g_cost() => {
                    self.open_set.remove(handle);
                    cell.set_came_from(Some(current));
                    cell.set_costs(tentative_g, h);
                    self.open_set.insert(cell);
                }
                Some(_) => {}
            }
        }
        discovered
    }
}
