//! Fixed-capacity LIFO stack backed by inline `ArrayVec` storage.

use arrayvec::ArrayVec;

use crate::error::ContainerError;
use crate::types::{Piece, STACK_CAPACITY};

/// Stack of reserved pieces.
pub type ReserveStack = BoundedStack<Piece, STACK_CAPACITY>;

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

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Place `value` on top.
    ///
    /// A full stack rejects the value with [`ContainerError::Full`] and is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        self.items
            .try_push(value)
            .map_err(|_| ContainerError::Full { capacity: N })
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    pub fn peek_top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Element at distance `i` from the top (0 = top).
    pub fn get_from_top(&self, i: usize) -> Option<&T> {
        let idx = self.items.len().checked_sub(1)?.checked_sub(i)?;
        self.items.get(idx)
    }

    /// Mutable element at distance `i` from the top (0 = top).
    pub fn get_from_top_mut(&mut self, i: usize) -> Option<&mut T> {
        let idx = self.items.len().checked_sub(1)?.checked_sub(i)?;
        self.items.get_mut(idx)
    }

    /// Swap `value` into position `i` from the top, returning the previous element.
    pub fn replace_from_top(&mut self, i: usize, value: T) -> Result<T, ContainerError> {
        let len = self.items.len();
        match self.get_from_top_mut(i) {
            Some(current) => Ok(std::mem::replace(current, value)),
            None => Err(ContainerError::InsufficientElements {
                required: i.saturating_add(1),
                queue: 0,
                stack: len,
            }),
        }
    }

    /// Top `n` elements, top first.
    pub fn peek_top_n(&self, n: usize) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev().take(n)
    }

    /// All elements, top first.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(ContainerError::Empty));
    }

    #[test]
    fn push_on_full_is_rejected_without_change() {
        let mut s: BoundedStack<u32, 2> = BoundedStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.is_full());
        assert_eq!(s.push(3), Err(ContainerError::Full { capacity: 2 }));
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek_top(), Some(&2));
    }

    #[test]
    fn peek_top_n_is_top_first_and_clamped() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.peek_top_n(5).copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(s.peek_top_n(1).copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn positions_are_counted_from_the_top() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        for v in [10, 20, 30] {
            s.push(v).unwrap();
        }
        assert_eq!(s.get_from_top(0), Some(&30));
        assert_eq!(s.get_from_top(2), Some(&10));
        assert_eq!(s.get_from_top(3), None);

        assert_eq!(s.replace_from_top(1, 25), Ok(20));
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![30, 25, 10]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn replace_on_empty_is_an_error() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        assert_eq!(
            s.replace_from_top(0, 1),
            Err(ContainerError::InsufficientElements {
                required: 1,
                queue: 0,
                stack: 0
            })
        );
    }

    #[test]
    fn huge_positions_are_rejected() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        assert_eq!(s.get_from_top(usize::MAX), None);
        s.push(7).unwrap();
        assert_eq!(s.get_from_top(usize::MAX), None);
        assert_eq!(s.get_from_top_mut(usize::MAX), None);
        assert_eq!(
            s.replace_from_top(usize::MAX, 9),
            Err(ContainerError::InsufficientElements {
                required: usize::MAX,
                queue: 0,
                stack: 1
            })
        );
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![7]);
    }
}
