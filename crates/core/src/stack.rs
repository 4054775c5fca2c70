//! Fixed-capacity stack for reserved pieces.

use arrayvec::ArrayVec;

use crate::types::{Piece, RESERVE_CAPACITY};

/// Reserved pieces, top last in storage.
pub type ReserveStack = BoundedStack<Piece, RESERVE_CAPACITY>;

#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    items: ArrayVec<T, N>,
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Storage index of the top element; `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Push onto the top.
    ///
    /// Returns `false` and drops `item` when the stack is full.
    pub fn push(&mut self, item: T) -> bool {
        match self.items.try_push(item) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!(capacity = N, "push on full stack ignored");
                false
            }
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Element `depth` slots below the top (0 is the top).
    pub fn get_from_top(&self, depth: usize) -> Option<&T> {
        let idx = self.top()?.checked_sub(depth)?;
        self.items.get(idx)
    }

    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut T> {
        let idx = self.top()?.checked_sub(depth)?;
        self.items.get_mut(idx)
    }

    /// Top-to-bottom iteration.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
