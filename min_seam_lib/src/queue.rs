//! Binary min-heap with a node -> slot index, so the priority of a queued
//! node can be lowered in place.
//!
//! Slots are 0-indexed: `parent(i) = (i - 1) / 2`, children `2i + 1` and
//! `2i + 2`. Entries are ordered by `(priority, node)`, so equal priorities
//! come out lowest node first.

use crate::error::{Result, SeamError};

#[derive(Debug, Clone, Copy)]
struct HeapEntry<P> {
    node: usize,
    priority: P,
}

/// Min-priority queue over the nodes `0..n` supporting decrease-key.
#[derive(Debug, Clone)]
pub struct IndexedMinQueue<P> {
    heap: Vec<HeapEntry<P>>,
    /// `positions[node]` is the heap slot holding `node`, `None` once popped.
    positions: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexedMinQueue<P> {
    /// Queues every node `0..priorities.len()` with its priority, heapifying
    /// bottom-up in linear time.
    pub fn from_priorities(priorities: &[P]) -> Self {
        let heap = priorities
            .iter()
            .enumerate()
            .map(|(node, &priority)| HeapEntry { node, priority })
            .collect();
        let positions = (0..priorities.len()).map(Some).collect();
        let mut queue = IndexedMinQueue { heap, positions };
        for slot in (0..queue.heap.len() / 2).rev() {
            queue.sift_down(slot);
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.slot(node).is_some()
    }

    /// Current priority of a queued node.
    pub fn priority(&self, node: usize) -> Option<P> {
        self.slot(node).map(|slot| self.heap[slot].priority)
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn extract_min(&mut self) -> Result<(usize, P)> {
        let last = self.heap.len().checked_sub(1).ok_or(SeamError::EmptyQueue)?;
        self.swap_entries(0, last);

        let entry = self.heap.pop().ok_or(SeamError::EmptyQueue)?;
        self.positions[entry.node] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.node, entry.priority))
    }

    /// Lowers the priority of a queued node. Equal priorities are accepted,
    /// higher ones and nodes no longer queued are rejected.
    pub fn decrease_key(&mut self, node: usize, priority: P) -> Result<()> {
        let slot = self
            .slot(node)
            .ok_or(SeamError::InvalidDecreaseKey { node })?;
        if priority > self.heap[slot].priority {
            return Err(SeamError::InvalidDecreaseKey { node });
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn slot(&self, node: usize) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        (a.priority, a.node) < (b.priority, b.node)
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }

    /// Swaps two slots and keeps the position index in step.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].node] = Some(a);
        self.positions[self.heap[b].node] = Some(b);
    }
}
