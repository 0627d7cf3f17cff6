use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;

/// Dense membership matrix over the cells finalized by the current search, laid out like the
/// grid itself.
#[derive(Clone, Debug)]
pub struct ClosedSet {
    closed: BoolGrid,
}

impl ClosedSet {
    pub fn new(width: usize, height: usize) -> ClosedSet {
        ClosedSet {
            closed: BoolGrid::new(width, height, false),
        }
    }
    pub fn width(&self) -> usize {
        self.closed.width()
    }
    pub fn height(&self) -> usize {
        self.closed.height()
    }
    /// Marks a cell as finalized. Off-grid points are ignored.
    pub fn insert(&mut self, point: Point) {
        if self.closed.point_in_bounds(point) {
            self.closed.set_point(point, true);
        }
    }
    /// Off-grid points are never contained.
    pub fn contains(&self, point: &Point) -> bool {
        self.closed.point_in_bounds(*point) && self.closed.get_point(*point)
    }
    pub fn clear(&mut self) {
        self.closed = BoolGrid::new(self.width(), self.height(), false);
    }
    pub fn len(&self) -> usize {
        self.closed
            .values
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }
    pub fn is_empty(&self) -> bool {
        self.closed.values.iter().all(|&word| word == 0)
    }
}
