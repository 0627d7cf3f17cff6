use crate::cell::{Cell, Terrain};
use crate::error::GridError;
use core::fmt;
use grid_util::grid::{Grid as _, SimpleGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// The neighbourhood of a point on the grid, at most 8 entries.
pub type Neighborhood = SmallVec<[Point; 8]>;

/// [Grid] owns the cells of a `width × height` map, stored row-major, together with the
/// positions of the start and the goal. Cells carry both the terrain edited by the user and the
/// scratch state of the last search.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Creates a clear grid with the start near the top-left and the goal near the bottom-right
    /// corner. Panics on a zero dimension.
    pub fn new(width: usize, height: usize) -> Grid {
        let mut grid = Grid {
            cells: SimpleGrid {
                width: 0,
                height: 0,
                values: Vec::new(),
            },
            start: Point::new(0, 0),
            goal: Point::new(0, 0),
        };
        grid.reset_grid(width, height);
        grid
    }

    /// Reallocates every cell, dropping obstacles and search state, and places the default
    /// start `(1, 1)` and goal `(width - 2, height - 2)`, clamped into the grid.
    pub fn reset_grid(&mut self, width: usize, height: usize) {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        debug!("Resetting grid to {}x{}", width, height);
        self.cells = SimpleGrid {
            width,
            height,
            values: iproduct!(0..height as i32, 0..width as i32)
                .map(|(y, x)| Cell::new(x, y))
                .collect(),
        };
        self.start = Point::new(1_i32.min(width as i32 - 1), 1_i32.min(height as i32 - 1));
        self.goal = Point::new(
            width.saturating_sub(2) as i32,
            height.saturating_sub(2) as i32,
        );
        for (point, marker) in [(self.start, Terrain::Start), (self.goal, Terrain::Goal)] {
            if let Some(cell) = self.cell_mut(point) {
                cell.terrain = marker;
            }
        }
    }

    /// Clears the scratch state and the path markings of the last search. Obstacles, the start
    /// and the goal stay where they are.
    pub fn reset_path(&mut self) {
        for cell in self.cells.values.iter_mut() {
            if cell.terrain.is_search_marking() {
                cell.terrain = Terrain::Clear;
            }
            cell.clear_scratch();
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }
    pub fn height(&self) -> usize {
        self.cells.height
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.cells.point_in_bounds(Point::new(x, y))
    }
    fn ix(&self, point: Point) -> Option<usize> {
        self.cells
            .point_in_bounds(point)
            .then(|| self.cells.get_ix_point(&point))
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.ix(point).map(|ix| &self.cells.values[ix])
    }
    pub(crate) fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        let ix = self.ix(point)?;
        Some(&mut self.cells.values[ix])
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }
    /// The terrain at `(x, y)`, [None] outside the grid.
    pub fn terrain(&self, x: i32, y: i32) -> Option<Terrain> {
        self.cell(Point::new(x, y)).map(|cell| cell.terrain)
    }

    fn checked_cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell, GridError> {
        self.cell_mut(Point::new(x, y))
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// Places or removes an obstacle. The start and goal cells cannot be blocked.
    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) -> Result<(), GridError> {
        let cell = self.checked_cell_mut(x, y)?;
        match cell.terrain {
            Terrain::Start | Terrain::Goal => {
                warn!("Refusing to change the obstacle state of ({}, {})", x, y);
                Err(GridError::Occupied { x, y })
            }
            _ => {
                cell.terrain = if blocked {
                    Terrain::Obstacle
                } else {
                    Terrain::Clear
                };
                Ok(())
            }
        }
    }

    /// Flips a cell between obstacle and clear, returning the new terrain.
    pub fn toggle_obstacle(&mut self, x: i32, y: i32) -> Result<Terrain, GridError> {
        let blocked = self.terrain(x, y) != Some(Terrain::Obstacle);
        self.set_obstacle(x, y, blocked)?;
        Ok(if blocked {
            Terrain::Obstacle
        } else {
            Terrain::Clear
        })
    }

    fn relocate(&mut self, x: i32, y: i32, marker: Terrain) -> Result<(), GridError> {
        let (old, other, other_marker) = if marker == Terrain::Start {
            (self.start, self.goal, Terrain::Goal)
        } else {
            (self.goal, self.start, Terrain::Start)
        };
        if old == Point::new(x, y) {
            return Ok(());
        }
        let cell = self.checked_cell_mut(x, y)?;
        if cell.terrain != Terrain::Clear {
            return Err(GridError::NotClear { x, y });
        }
        cell.terrain = marker;
        // Start and goal only share a cell on grids too small to separate the defaults.
        if let Some(old_cell) = self.cell_mut(old) {
            old_cell.terrain = if old == other {
                other_marker
            } else {
                Terrain::Clear
            };
        }
        if marker == Terrain::Start {
            self.start = Point::new(x, y);
        } else {
            self.goal = Point::new(x, y);
        }
        Ok(())
    }

    /// Moves the start onto a clear cell.
    pub fn set_start(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.relocate(x, y, Terrain::Start)
    }

    /// Moves the goal onto a clear cell.
    pub fn set_goal(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.relocate(x, y, Terrain::Goal)
    }

    /// The in-bounds neighbours of `point`: the 4 orthogonal ones, plus the 4 diagonal ones when
    /// diagonal movement is allowed.
    pub fn neighborhood_points(&self, point: &Point, allow_diagonal: bool) -> Neighborhood {
        let neighborhood = if allow_diagonal {
            point.moore_neighborhood()
        } else {
            point.neumann_neighborhood()
        };
        neighborhood
            .into_iter()
            .filter(|p| self.cells.point_in_bounds(*p))
            .collect()
    }

    /// Follows the predecessor links of the last search from the goal back to the start.
    /// Returns the route from start to goal, or [None] if the goal was never reached.
    pub fn path_from_goal(&self) -> Option<Vec<Point>> {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while current != self.start {
            current = self.cell(current)?.came_from()?;
            path.push(current);
            if path.len() > self.cells.values.len() {
                warn!("Predecessor links of the goal form a cycle");
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Marks the cells strictly between start and goal on the found route as
    /// [Terrain::PathMarked] and returns the route.
    pub(crate) fn mark_path(&mut self) -> Option<Vec<Point>> {
        let path = self.path_from_goal()?;
        if path.len() > 2 {
            for point in &path[1..path.len() - 1] {
                if let Some(cell) = self.cell_mut(*point) {
                    cell.terrain = Terrain::PathMarked;
                }
            }
        }
        Some(path)
    }

    /// Links up passable neighbours into connected components.
    pub fn components(&self, allow_diagonal: bool) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.values.len());
        for (ix, cell) in self.cells.values.iter().enumerate() {
            if !cell.terrain.passable() {
                continue;
            }
            for n in self.neighborhood_points(&cell.position(), allow_diagonal) {
                let n_ix = self.cells.get_ix_point(&n);
                if self.cells.values[n_ix].terrain.passable() {
                    components.union(ix, n_ix);
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` are on the same connected component. Independent of any search, so
    /// it can be used to validate search results.
    pub fn reachable(&self, a: &Point, b: &Point, allow_diagonal: bool) -> bool {
        match (self.ix(*a), self.ix(*b)) {
            (Some(a_ix), Some(b_ix)) => {
                self.cells.values[a_ix].terrain.passable()
                    && self.cells.values[b_ix].terrain.passable()
                    && self.components(allow_diagonal).equiv(a_ix, b_ix)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.values.chunks(self.width()) {
            let line: String = row.iter().map(|cell| cell.terrain.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
