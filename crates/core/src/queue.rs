//! Fixed-capacity circular queue.
//!
//! Slots are addressed as `(head + i) % N`; `head` and `len` are the only
//! bookkeeping, the tail slot is derived from them. No allocation.

use crate::types::{Piece, QUEUE_CAPACITY};

/// Upcoming pieces, front first.
pub type UpcomingQueue = CircularQueue<Piece, QUEUE_CAPACITY>;

#[derive(Debug, Clone)]
pub struct CircularQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    len: usize,
}

impl<T, const N: usize> CircularQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }

    /// Append at the logical tail.
    ///
    /// Returns `false` and drops `item` when the queue is full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            tracing::warn!(capacity = N, "enqueue on full queue ignored");
            return false;
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        true
    }

    /// Remove and return the logical head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Element at logical position `offset` (0 is the front).
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot(offset)].as_ref()
    }

    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot(offset);
        self.slots[idx].as_mut()
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
