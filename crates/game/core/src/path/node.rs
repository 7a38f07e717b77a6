use core::cmp::Ordering;

use crate::state::Position;

/// Search record for one visited cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PathNode {
    pub position: Position,
    pub parent: Option<Position>,
    /// Cost from the start.
    pub g: u32,
    /// Heuristic estimate to the goal.
    pub h: u32,
}

impl PathNode {
    pub fn start(position: Position, h: u32) -> Self {
        Self {
            position,
            parent: None,
            g: 0,
            h,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Heap entry. `tie` is the push order, so among equal `f` the earliest
/// discovered cell is expanded first.
#[derive(Debug)]
pub(crate) struct OpenEntry {
    pub f: u32,
    pub g: u32,
    pub tie: u64,
    pub position: Position,
}

impl OpenEntry {
    fn key(&self) -> (u32, u64) {
        (self.f, self.tie)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}
