use super::{OpenEntry, OpenSet};
use crate::cell::Cell;
use crate::error::EmptyStructureError;
use crate::DEFAULT_HEAP_CAPACITY;
use std::cmp::Ordering;

/// Array-backed binary min-heap ordered by [key_cmp](OpenEntry::key_cmp), so equal costs come
/// out by position. The root lives in slot 0, the children of slot `i` in `2i + 1` and `2i + 2`.
///
/// Membership tests are a linear scan by identity, so decrease-key (remove the stale entry, then
/// reinsert) costs O(n) rather than O(log n).
#[derive(Clone, Debug)]
pub struct BinaryMinHeap {
    entries: Vec<OpenEntry>,
    initial_capacity: usize,
}

impl Default for BinaryMinHeap {
    fn default() -> BinaryMinHeap {
        BinaryMinHeap::new()
    }
}

fn parent(ix: usize) -> usize {
    (ix - 1) / 2
}
fn left_child(ix: usize) -> usize {
    2 * ix + 1
}

impl BinaryMinHeap {
    pub fn new() -> BinaryMinHeap {
        BinaryMinHeap::with_capacity(DEFAULT_HEAP_CAPACITY)
    }
    /// Capacities below 2 are raised to 2.
    pub fn with_capacity(capacity: usize) -> BinaryMinHeap {
        let capacity = capacity.max(2);
        BinaryMinHeap {
            entries: Vec::with_capacity(capacity),
            initial_capacity: capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
    /// The live entries in heap order.
    pub fn as_slice(&self) -> &[OpenEntry] {
        &self.entries
    }

    /// Doubles the backing storage once fewer than two free slots remain.
    fn grow(&mut self) {
        let capacity = self.entries.capacity();
        if capacity - self.entries.len() < 2 {
            self.entries.reserve_exact(capacity);
        }
    }

    fn sift_up(&mut self, mut ix: usize) {
        let entry = self.entries[ix];
        while ix > 0 && self.entries[parent(ix)].key_cmp(&entry) == Ordering::Greater {
            self.entries[ix] = self.entries[parent(ix)];
            ix = parent(ix);
        }
        self.entries[ix] = entry;
    }

    /// Moves the entry at `ix` down while it is larger than the smaller of its children.
    fn heapify(&mut self, mut ix: usize) {
        let len = self.entries.len();
        loop {
            let left = left_child(ix);
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len
                && self.entries[right].key_cmp(&self.entries[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if self.entries[ix].key_cmp(&self.entries[smallest]) == Ordering::Greater {
                self.entries.swap(ix, smallest);
                ix = smallest;
            } else {
                break;
            }
        }
    }

    /// Removes the entry in slot `ix` by moving the last entry into its place and restoring the
    /// heap order from there. `ix` must come from [contains](OpenSet::contains).
    pub fn remove_at_index(&mut self, ix: usize) -> OpenEntry {
        assert!(
            ix < self.entries.len(),
            "heap slot {ix} is not live (size {})",
            self.entries.len()
        );
        let removed = self.entries.swap_remove(ix);
        if ix < self.entries.len() {
            if ix > 0 && self.entries[ix].key_cmp(&self.entries[parent(ix)]) == Ordering::Less {
                self.sift_up(ix);
            } else {
                self.heapify(ix);
            }
        }
        removed
    }

    /// Empties the heap. Unless `keep_capacity` is set the storage is shrunk back to the initial
    /// capacity, releasing what a large search grew it to.
    pub fn clear_with_capacity(&mut self, keep_capacity: bool) {
        self.entries.clear();
        if !keep_capacity {
            self.entries.shrink_to(self.initial_capacity);
        }
    }
}

impl OpenSet for BinaryMinHeap {
    type Handle = usize;

    fn insert(&mut self, cell: &Cell) {
        self.grow();
        self.entries.push(OpenEntry::of(cell));
        self.sift_up(self.entries.len() - 1);
    }

    fn del_min(&mut self) -> Result<OpenEntry, EmptyStructureError> {
        if self.entries.is_empty() {
            return Err(EmptyStructureError);
        }
        let min = self.entries.swap_remove(0);
        self.heapify(0);
        Ok(min)
    }

    fn find_min(&self) -> Result<OpenEntry, EmptyStructureError> {
        self.entries.first().copied().ok_or(EmptyStructureError)
    }

    fn contains(&self, cell: &Cell) -> Option<usize> {
        let point = cell.position();
        self.entries.iter().position(|entry| entry.point == point)
    }

    fn remove(&mut self, handle: usize) -> OpenEntry {
        self.remove_at_index(handle)
    }

    fn clear(&mut self) {
        self.clear_with_capacity(true);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
