//! # grid_openset
//!
//! Shortest paths on a grid with
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), with the frontier kept in one of two
//! interchangeable [open sets](open_set::OpenSet): an array-backed [binary min-heap](BinaryMinHeap)
//! or an [AVL tree](PriorityTree). Finalized cells are tracked in a dense [ClosedSet].
//!
//! Moves have uniform cost. Improving the cost of a cell already on the frontier removes its
//! entry and inserts it again, which for the heap involves a linear search.
//!
//! ```
//! use grid_openset::{Grid, SearchConfig, SearchEngine};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.set_start(0, 0).unwrap();
//! grid.set_goal(4, 4).unwrap();
//! let mut engine = SearchEngine::with_heap(grid);
//! let result = engine.run(&SearchConfig::default());
//! assert!(result.succeeded);
//! assert_eq!(result.path_length, 8);
//! ```
pub mod cell;
pub mod closed_set;
pub mod error;
pub mod grid;
pub mod open_set;
pub mod search;

pub use cell::{Cell, Terrain};
pub use closed_set::ClosedSet;
pub use error::{EmptyStructureError, GridError};
pub use grid::Grid;
pub use open_set::{BinaryMinHeap, OpenEntry, OpenSet, PriorityTree};
pub use search::{SearchConfig, SearchEngine, SearchResult, SearchState};

/// Factor applied to the A* estimate when the tie-breaker is enabled. Slightly overestimating
/// makes cells closer to the goal win ties between equal totals.
pub const TIE_BREAKER: f32 = 1.001;

/// Initial number of slots of a [BinaryMinHeap].
pub const DEFAULT_HEAP_CAPACITY: usize = 100;
