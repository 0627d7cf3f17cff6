use core::fmt;
use grid_util::point::Point;

/// What a [Cell] currently holds. Besides blocking movement this doubles as a render hint, so the
/// search marks cells it touched as [Terrain::Considered] and the final route as
/// [Terrain::PathMarked].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Obstacle,
    Clear,
    PathMarked,
    Considered,
    Start,
    Goal,
}

impl Terrain {
    /// Anything except an obstacle can be entered by the search.
    pub fn passable(self) -> bool {
        self != Terrain::Obstacle
    }

    /// Markings left behind by a search run, wiped by a path reset.
    pub fn is_search_marking(self) -> bool {
        matches!(self, Terrain::PathMarked | Terrain::Considered)
    }

    pub fn symbol(self) -> char {
        match self {
            Terrain::Obstacle => '#',
            Terrain::Clear => '.',
            Terrain::PathMarked => '*',
            Terrain::Considered => '+',
            Terrain::Start => 'S',
            Terrain::Goal => 'G',
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single node of the grid. The position is fixed at creation; everything else is scratch state
/// written by the search and cleared between runs.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    position: Point,
    pub terrain: Terrain,
    g_cost: f32,
    h_cost: f32,
    f_cost: f32,
    came_from: Option<Point>,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell {
            position: Point::new(x, y),
            terrain: Terrain::Clear,
            g_cost: -1.0,
            h_cost: -1.0,
            f_cost: -1.0,
            came_from: None,
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn x(&self) -> i32 {
        self.position.x
    }
    pub fn y(&self) -> i32 {
        self.position.y
    }
    /// Cost of the best known route from the start, -1 when unset.
    pub fn g_cost(&self) -> f32 {
        self.g_cost
    }
    /// Heuristic estimate to the goal, -1 when unset.
    pub fn h_cost(&self) -> f32 {
        self.h_cost
    }
    /// `g_cost + h_cost`, the ordering key of the open sets.
    pub fn f_cost(&self) -> f32 {
        self.f_cost
    }
    pub fn came_from(&self) -> Option<Point> {
        self.came_from
    }
    /// Sets both cost components at once; the total is always derived, never written directly.
    pub fn set_costs(&mut self, g_cost: f32, h_cost: f32) {
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.f_cost = g_cost + h_cost;
    }
    pub fn set_came_from(&mut self, came_from: Option<Point>) {
        self.came_from = came_from;
    }
    /// Drops all scratch state of a previous run, leaving the terrain alone.
    pub fn clear_scratch(&mut self) {
        self.g_cost = -1.0;
        self.h_cost = -1.0;
        self.f_cost = -1.0;
        self.came_from = None;
    }
}
