//! Exchange operations between the queue front and the stack top.
//!
//! Both operations check their preconditions before touching either
//! container, so a failed exchange leaves queue and stack exactly as they were.

use crate::error::ContainerError;
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;
use crate::types::MULTI_EXCHANGE_COUNT;

/// Swap the queue front with the stack top.
pub fn simple_exchange<T, const Q: usize, const S: usize>(
    queue: &mut BoundedQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> Result<(), ContainerError> {
    swap_front_with_top(queue, stack, 1)
}

/// Swap the queue's front three with the stack's top three.
///
/// Pairs by distance: queue position `i` (from the front) trades with stack
/// position `i` (from the top).
pub fn multi_exchange<T, const Q: usize, const S: usize>(
    queue: &mut BoundedQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> Result<(), ContainerError> {
    swap_front_with_top(queue, stack, MULTI_EXCHANGE_COUNT)
}

fn swap_front_with_top<T, const Q: usize, const S: usize>(
    queue: &mut BoundedQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
    count: usize,
) -> Result<(), ContainerError> {
    let insufficient = ContainerError::InsufficientElements {
        required: count,
        queue: queue.len(),
        stack: stack.len(),
    };
    if queue.len() < count || stack.len() < count {
        return Err(insufficient);
    }

    for i in 0..count {
        // Both lengths were checked above, so every pair exists.
        let (Some(q), Some(s)) = (queue.get_mut(i), stack.get_from_top_mut(i)) else {
            return Err(insufficient);
        };
        std::mem::swap(q, s);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(values: &[u32]) -> BoundedQueue<u32, 5> {
        let mut q = BoundedQueue::new();
        for v in values {
            q.enqueue(*v).unwrap();
        }
        q
    }

    fn stack_of(values: &[u32]) -> BoundedStack<u32, 3> {
        let mut s = BoundedStack::new();
        for v in values {
            s.push(*v).unwrap();
        }
        s
    }

    #[test]
    fn simple_exchange_swaps_front_and_top() {
        let mut q = queue_of(&[1, 2, 3]);
        let mut s = stack_of(&[7, 8]);

        simple_exchange(&mut q, &mut s).unwrap();

        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![8, 2, 3]);
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![1, 7]);
    }

    #[test]
    fn simple_exchange_needs_both_non_empty() {
        let mut q = queue_of(&[1]);
        let mut s = stack_of(&[]);
        assert_eq!(
            simple_exchange(&mut q, &mut s),
            Err(ContainerError::InsufficientElements {
                required: 1,
                queue: 1,
                stack: 0
            })
        );
        assert_eq!(q.peek_front(), Some(&1));
    }

    #[test]
    fn multi_exchange_pairs_by_distance() {
        let mut q = queue_of(&[1, 2, 3, 4]);
        // top is 30
        let mut s = stack_of(&[10, 20, 30]);

        multi_exchange(&mut q, &mut s).unwrap();

        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10, 4]);
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn multi_exchange_is_all_or_nothing() {
        let mut q = queue_of(&[1, 2, 3, 4, 5]);
        let mut s = stack_of(&[10, 20]);

        let err = multi_exchange(&mut q, &mut s).unwrap_err();
        assert_eq!(
            err,
            ContainerError::InsufficientElements {
                required: 3,
                queue: 5,
                stack: 2
            }
        );
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![20, 10]);
    }

    #[test]
    fn multi_exchange_swaps_every_pair_across_the_wrap() {
        let mut q = queue_of(&[1, 2, 3, 4, 5]);
        for _ in 0..3 {
            q.dequeue().unwrap();
        }
        q.enqueue(6).unwrap();
        q.enqueue(7).unwrap();
        // front three sit in slots 3, 4, 0
        assert_eq!(q.head(), 3);
        let mut s = stack_of(&[10, 20, 30]);

        multi_exchange(&mut q, &mut s).unwrap();

        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10, 7]);
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(q.head(), 3);
        assert_eq!(s.len(), 3);
    }
}
