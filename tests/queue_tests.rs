//! Circular queue tests - FIFO order and capacity under wraparound

use piece_reserve::core::{BoundedQueue, ContainerError, PieceQueue, SimpleRng};
use piece_reserve::types::{Piece, PieceKind, QUEUE_CAPACITY};

// ============== FIFO Order ==============

#[test]
fn test_nth_dequeue_returns_nth_enqueue() {
    let mut rng = SimpleRng::new(2024);
    let mut q: BoundedQueue<u64, 5> = BoundedQueue::new();
    let mut next_in = 0u64;
    let mut next_out = 0u64;

    for _ in 0..5_000 {
        if rng.next_range(2) == 0 {
            match q.enqueue(next_in) {
                Ok(()) => next_in += 1,
                Err(e) => {
                    assert_eq!(e, ContainerError::Full { capacity: 5 });
                    assert!(q.is_full());
                }
            }
        } else {
            match q.dequeue() {
                Ok(v) => {
                    assert_eq!(v, next_out);
                    next_out += 1;
                }
                Err(e) => {
                    assert_eq!(e, ContainerError::Empty);
                    assert!(q.is_empty());
                }
            }
        }

        assert!(q.len() <= q.capacity());
        assert_eq!(q.len() as u64, next_in - next_out);
    }
}

#[test]
fn test_peek_range_resolves_physical_slots() {
    let mut q = PieceQueue::new();
    for id in 0..5 {
        q.enqueue(Piece::new(PieceKind::I, id)).unwrap();
    }
    q.dequeue().unwrap();
    q.dequeue().unwrap();
    q.enqueue(Piece::new(PieceKind::O, 5)).unwrap();

    let front: Vec<(usize, u64)> = q.peek_range(QUEUE_CAPACITY).map(|(s, p)| (s, p.id)).collect();
    assert_eq!(front, vec![(2, 2), (3, 3), (4, 4), (0, 5)]);
}

// ============== Capacity ==============

#[test]
fn test_full_queue_enqueue_leaves_queue_unchanged() {
    let mut q = PieceQueue::new();
    for id in 0..QUEUE_CAPACITY as u64 {
        q.enqueue(Piece::new(PieceKind::T, id)).unwrap();
    }
    let head = q.head();

    let result = q.enqueue(Piece::new(PieceKind::L, 99));
    assert_eq!(result, Err(ContainerError::Full { capacity: QUEUE_CAPACITY }));
    assert_eq!(q.len(), QUEUE_CAPACITY);
    assert_eq!(q.head(), head);
    assert!(q.iter().all(|p| p.id != 99));
}

#[test]
fn test_get_mut_cannot_reach_past_len() {
    let mut q = PieceQueue::new();
    q.enqueue(Piece::new(PieceKind::T, 0)).unwrap();
    assert!(q.get_mut(0).is_some());
    assert!(q.get_mut(1).is_none());
}
