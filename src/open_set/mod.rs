//! Priority structures holding the search frontier. Both implementations order cells by their
//! total cost and never own the cells; they only hold a snapshot of the key together with the
//! cell position, which is valid because the search removes an entry before changing its cost.
use crate::cell::Cell;
use crate::error::EmptyStructureError;
use core::fmt;
use grid_util::point::Point;
use std::cmp::Ordering;

pub mod heap;
pub mod tree;

pub use heap::BinaryMinHeap;
pub use tree::PriorityTree;

/// A frontier entry: the cell position and the total cost it was inserted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenEntry {
    pub f_cost: f32,
    pub point: Point,
}

impl OpenEntry {
    pub fn of(cell: &Cell) -> OpenEntry {
        OpenEntry {
            f_cost: cell.f_cost(),
            point: cell.position(),
        }
    }

    /// Total order on entries: by cost first, then by position so that distinct cells sharing a
    /// cost never compare equal.
    pub fn key_cmp(&self, other: &OpenEntry) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then_with(|| (self.point.x, self.point.y).cmp(&(other.point.x, other.point.y)))
    }
}

/// The contract shared by the open-set implementations. The search engine is generic over it and
/// the concrete structure is picked when the engine is constructed.
pub trait OpenSet {
    /// Locates a live entry, as returned by [contains](OpenSet::contains). A handle is only valid
    /// until the next mutation of the structure.
    type Handle: Copy + fmt::Debug;

    /// Adds a cell keyed by its current total cost. The caller guarantees the cell is not
    /// already present.
    fn insert(&mut self, cell: &Cell);

    /// Removes and returns the entry with the smallest total cost.
    fn del_min(&mut self) -> Result<OpenEntry, EmptyStructureError>;

    /// Returns the entry with the smallest total cost without removing it.
    fn find_min(&self) -> Result<OpenEntry, EmptyStructureError>;

    /// Finds the entry belonging to this exact cell.
    fn contains(&self, cell: &Cell) -> Option<Self::Handle>;

    /// Removes the entry behind a handle obtained from [contains](OpenSet::contains). Panics if
    /// the handle does not refer to a live entry.
    fn remove(&mut self, handle: Self::Handle) -> OpenEntry;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i32, y: i32, f_cost: f32) -> Cell {
        let mut cell = Cell::new(x, y);
        cell.set_costs(f_cost, 0.0);
        cell
    }

    #[test]
    fn entries_break_cost_ties_by_position() {
        let a = OpenEntry::of(&cell(1, 2, 3.0));
        let b = OpenEntry::of(&cell(2, 1, 3.0));
        let c = OpenEntry::of(&cell(0, 0, 4.0));
        assert_eq!(a.key_cmp(&b), Ordering::Less);
        assert_eq!(b.key_cmp(&a), Ordering::Greater);
        assert_eq!(a.key_cmp(&a), Ordering::Equal);
        assert_eq!(b.key_cmp(&c), Ordering::Less);
    }

    /// Both structures must agree on the order in which costs come out.
    fn drain_sorted<O: OpenSet>(mut open_set: O) -> Vec<f32> {
        let costs = [6.0, 2.0, 1.25, 100.0, 2.0, 0.5, 9.0, 3.5];
        for (i, c) in costs.iter().enumerate() {
            open_set.insert(&cell(i as i32, 0, *c));
        }
        let mut out = Vec::new();
        while let Ok(entry) = open_set.del_min() {
            out.push(entry.f_cost);
        }
        assert!(open_set.is_empty());
        out
    }

    #[test]
    fn implementations_agree() {
        let heap = drain_sorted(BinaryMinHeap::new());
        let tree = drain_sorted(PriorityTree::new());
        assert_eq!(heap, vec![0.5, 1.25, 2.0, 2.0, 3.5, 6.0, 9.0, 100.0]);
        assert_eq!(heap, tree);
    }
}
