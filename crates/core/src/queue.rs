//! Fixed-capacity circular FIFO queue.
//!
//! Storage is an inline array of `N` slots with an explicit `head` and `len`.
//! The logical element `i` lives at physical slot `(head + i) % N`, so both
//! ends are O(1) and nothing is ever shifted.

use crate::error::ContainerError;
use crate::types::{Piece, QUEUE_CAPACITY};

/// Queue of upcoming pieces.
pub type PieceQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;

#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    len: usize,
}

impl<T, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Physical slot of the front element.
    pub fn head(&self) -> usize {
        self.head
    }

    fn slot(&self, i: usize) -> usize {
        (self.head + i) % N
    }

    /// Append at the tail.
    ///
    /// A full queue rejects the value with [`ContainerError::Full`] and is left unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Full { capacity: N });
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let value = self.slots[self.head]
            .take()
            .ok_or(ContainerError::Empty)?;
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Ok(value)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Element at logical position `i` (0 = front).
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        self.slots[self.slot(i)].as_ref()
    }

    /// Mutable element at logical position `i` (0 = front).
    ///
    /// Only the value can change through this reference; `head` and `len` stay put.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        let slot = self.slot(i);
        self.slots[slot].as_mut()
    }

    /// Swap `value` into logical position `i`, returning the previous element.
    pub fn replace(&mut self, i: usize, value: T) -> Result<T, ContainerError> {
        let len = self.len;
        match self.get_mut(i) {
            Some(current) => Ok(std::mem::replace(current, value)),
            None => Err(ContainerError::InsufficientElements {
                required: i.saturating_add(1),
                queue: len,
                stack: 0,
            }),
        }
    }

    /// First `n` logical elements paired with their physical slot.
    pub fn peek_range(&self, n: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        (0..n.min(self.len)).filter_map(move |i| {
            let slot = self.slot(i);
            self.slots[slot].as_ref().map(|v| (slot, v))
        })
    }

    /// All elements, front first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.peek_range(self.len).map(|(_, v)| v)
    }
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
