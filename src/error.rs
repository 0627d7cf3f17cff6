use core::fmt;

/// Returned when the minimum of an empty open set is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyStructureError;

impl fmt::Display for EmptyStructureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "open set is empty")
    }
}

impl std::error::Error for EmptyStructureError {}

/// Rejected edits of a [Grid](crate::grid::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The coordinates lie outside the grid.
    OutOfBounds { x: i32, y: i32 },
    /// Start and goal may only be moved onto clear cells.
    NotClear { x: i32, y: i32 },
    /// Obstacles cannot be placed on the start or goal cell.
    Occupied { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "({x}, {y}) is outside the grid"),
            GridError::NotClear { x, y } => write!(f, "({x}, {y}) is not a clear cell"),
            GridError::Occupied { x, y } => {
                write!(f, "({x}, {y}) holds the start or the goal")
            }
        }
    }
}

impl std::error::Error for GridError {}
