use super::{OpenEntry, OpenSet};
use crate::cell::Cell;
use crate::error::EmptyStructureError;
use log::debug;
use std::cmp::Ordering;

/// Index of a node in the arena of a [PriorityTree].
pub type NodeId = usize;

#[derive(Clone, Debug)]
struct Node {
    entry: OpenEntry,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    /// `1 + max(left, right)`, where a missing child counts as -1.
    height: i32,
}

/// AVL tree ordered by total cost, with the cell position as tie-break so that entries sharing a
/// cost stay distinguishable. Nodes live in an arena owned by the tree; children and the parent
/// back-reference are plain indices into it, and freed slots are reused.
#[derive(Clone, Debug, Default)]
pub struct PriorityTree {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl PriorityTree {
    pub fn new() -> PriorityTree {
        PriorityTree::default()
    }

    /// Height of the whole tree, -1 when empty.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    fn height_of(&self, node: Option<NodeId>) -> i32 {
        node.map_or(-1, |n| self.nodes[n].height)
    }

    fn balance_of(&self, node: NodeId) -> i32 {
        self.height_of(self.nodes[node].left) - self.height_of(self.nodes[node].right)
    }

    fn update_height(&mut self, node: NodeId) {
        let left = self.height_of(self.nodes[node].left);
        let right = self.height_of(self.nodes[node].right);
        self.nodes[node].height = 1 + left.max(right);
    }

    fn alloc(&mut self, entry: OpenEntry, parent: Option<NodeId>) -> NodeId {
        let node = Node {
            entry,
            left: None,
            right: None,
            parent,
            height: 0,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Points whatever referenced `old` (its parent's link, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.nodes[p].left = new;
                } else {
                    debug_assert_eq!(self.nodes[p].right, Some(old));
                    self.nodes[p].right = new;
                }
            }
        }
    }

    fn rotate_right(&mut self, node: NodeId) -> NodeId {
        let pivot = self.nodes[node]
            .left
            .expect("right rotation needs a left child");
        let parent = self.nodes[node].parent;

        let inner = self.nodes[pivot].right;
        self.nodes[node].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }
        self.replace_child(parent, node, Some(pivot));
        self.nodes[pivot].parent = parent;
        self.nodes[pivot].right = Some(node);
        self.nodes[node].parent = Some(pivot);

        self.update_height(node);
        self.update_height(pivot);
        pivot
    }

    fn rotate_left(&mut self, node: NodeId) -> NodeId {
        let pivot = self.nodes[node]
            .right
            .expect("left rotation needs a right child");
        let parent = self.nodes[node].parent;

        let inner = self.nodes[pivot].left;
        self.nodes[node].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }
        self.replace_child(parent, node, Some(pivot));
        self.nodes[pivot].parent = parent;
        self.nodes[pivot].left = Some(node);
        self.nodes[node].parent = Some(pivot);

        self.update_height(node);
        self.update_height(pivot);
        pivot
    }

    /// Refreshes the height of `node` and rotates if it is out of balance. Returns the root of
    /// the subtree after the fix-up and whether a rotation happened.
    fn rebalance(&mut self, node: NodeId) -> (NodeId, bool) {
        self.update_height(node);
        let balance = self.balance_of(node);
        if balance > 1 {
            let left = self.nodes[node].left.expect("left-heavy node has a left child");
            // left-right case
            if self.balance_of(left) < 0 {
                self.rotate_left(left);
            }
            (self.rotate_right(node), true)
        } else if balance < -1 {
            let right = self.nodes[node]
                .right
                .expect("right-heavy node has a right child");
            // right-left case
            if self.balance_of(right) > 0 {
                self.rotate_right(right);
            }
            (self.rotate_left(node), true)
        } else {
            (node, false)
        }
    }

    fn leftmost(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self.nodes[node].left {
            node = left;
        }
        node
    }

    fn find(&self, entry: &OpenEntry) -> Option<NodeId> {
        let mut node = self.root;
        while let Some(n) = node {
            node = match entry.key_cmp(&self.nodes[n].entry) {
                Ordering::Less => self.nodes[n].left,
                Ordering::Greater => self.nodes[n].right,
                Ordering::Equal => return Some(n),
            };
        }
        None
    }

    /// Adds an entry and restores balance at the first ancestor that lost it. One single or
    /// double rotation brings the subtree back to its old height, so the walk stops there.
    pub fn insert_entry(&mut self, entry: OpenEntry) -> NodeId {
        let mut parent = None;
        let mut go_left = false;
        let mut node = self.root;
        while let Some(n) = node {
            parent = Some(n);
            go_left = entry.key_cmp(&self.nodes[n].entry) == Ordering::Less;
            node = if go_left {
                self.nodes[n].left
            } else {
                self.nodes[n].right
            };
        }
        let id = self.alloc(entry, parent);
        match parent {
            None => self.root = Some(id),
            Some(p) if go_left => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }
        self.len += 1;

        let mut ancestor = parent;
        while let Some(a) = ancestor {
            let (top, rotated) = self.rebalance(a);
            if rotated {
                break;
            }
            ancestor = self.nodes[top].parent;
        }
        id
    }

    /// Unlinks the entry stored at `node`. With two children the in-order successor's entry is
    /// moved into `node` and the successor is unlinked instead. Every ancestor of the unlinked
    /// node is rebalanced up to the root, since a deletion can shorten several levels.
    pub fn remove_node(&mut self, node: NodeId) -> OpenEntry {
        assert!(self.is_live(node), "tree node {node} is not part of the tree");
        let removed = self.nodes[node].entry;
        let unlinked = match (self.nodes[node].left, self.nodes[node].right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                self.nodes[node].entry = self.nodes[successor].entry;
                successor
            }
            _ => node,
        };

        let child = self.nodes[unlinked].left.or(self.nodes[unlinked].right);
        let parent = self.nodes[unlinked].parent;
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, unlinked, child);
        self.nodes[unlinked].left = None;
        self.nodes[unlinked].right = None;
        self.nodes[unlinked].parent = None;
        self.free.push(unlinked);
        self.len -= 1;

        let mut ancestor = parent;
        while let Some(a) = ancestor {
            let (top, _) = self.rebalance(a);
            ancestor = self.nodes[top].parent;
        }
        removed
    }

    /// Whether `node` is currently reachable from the root.
    fn is_live(&self, node: NodeId) -> bool {
        if node >= self.nodes.len() {
            return false;
        }
        let mut current = node;
        while let Some(parent) = self.nodes[current].parent {
            current = parent;
        }
        self.root == Some(current)
    }

    pub fn get_min(&self) -> Result<OpenEntry, EmptyStructureError> {
        self.root
            .map(|root| self.nodes[self.leftmost(root)].entry)
            .ok_or(EmptyStructureError)
    }

    /// Removes the minimum with a full AVL deletion. The leftmost node may still have a right
    /// child, which is spliced into its place.
    pub fn remove_min(&mut self) -> Result<OpenEntry, EmptyStructureError> {
        let root = self.root.ok_or(EmptyStructureError)?;
        let min = self.leftmost(root);
        Ok(self.remove_node(min))
    }

    /// Entries in ascending key order.
    pub fn entries(&self) -> Vec<OpenEntry> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut node = self.root;
        while node.is_some() || !stack.is_empty() {
            while let Some(n) = node {
                stack.push(n);
                node = self.nodes[n].left;
            }
            if let Some(n) = stack.pop() {
                out.push(self.nodes[n].entry);
                node = self.nodes[n].right;
            }
        }
        out
    }

    /// Checks parent links, key order, cached heights and balance of every node. Returns the
    /// first violation found.
    pub fn validate(&self) -> Result<(), String> {
        fn walk(
            tree: &PriorityTree,
            node: Option<NodeId>,
            parent: Option<NodeId>,
            count: &mut usize,
        ) -> Result<i32, String> {
            let Some(n) = node else {
                return Ok(-1);
            };
            *count += 1;
            let current = &tree.nodes[n];
            if current.parent != parent {
                return Err(format!(
                    "node {n} has parent {:?}, expected {parent:?}",
                    current.parent
                ));
            }
            let children = [
                (current.left, Ordering::Less),
                (current.right, Ordering::Greater),
            ];
            for (child, expected) in children {
                if let Some(c) = child {
                    if tree.nodes[c].entry.key_cmp(&current.entry) != expected {
                        return Err(format!("node {c} is on the wrong side of node {n}"));
                    }
                }
            }
            let left = walk(tree, current.left, Some(n), count)?;
            let right = walk(tree, current.right, Some(n), count)?;
            if (left - right).abs() > 1 {
                return Err(format!("node {n} is unbalanced ({left} vs {right})"));
            }
            if current.height != 1 + left.max(right) {
                return Err(format!(
                    "node {n} caches height {} but has {}",
                    current.height,
                    1 + left.max(right)
                ));
            }
            Ok(current.height)
        }
        let mut count = 0;
        walk(self, self.root, None, &mut count)?;
        if count != self.len {
            return Err(format!("{count} reachable nodes but length {}", self.len));
        }
        let entries = self.entries();
        if entries
            .windows(2)
            .any(|pair| pair[0].key_cmp(&pair[1]) != Ordering::Less)
        {
            return Err("in-order walk is not strictly ascending".to_owned());
        }
        Ok(())
    }
}

impl OpenSet for PriorityTree {
    type Handle = NodeId;

    fn insert(&mut self, cell: &Cell) {
        self.insert_entry(OpenEntry::of(cell));
    }

    fn del_min(&mut self) -> Result<OpenEntry, EmptyStructureError> {
        self.remove_min()
    }

    fn find_min(&self) -> Result<OpenEntry, EmptyStructureError> {
        self.get_min()
    }

    /// Descends by cost and position; a node with the same cost but another position is a
    /// different cell and is never reported.
    fn contains(&self, cell: &Cell) -> Option<NodeId> {
        self.find(&OpenEntry::of(cell))
    }

    fn remove(&mut self, handle: NodeId) -> OpenEntry {
        self.remove_node(handle)
    }

    fn clear(&mut self) {
        debug!("Clearing priority tree of {} entries", self.len);
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}
