use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// A queue element together with the physical slot it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEntry {
    pub slot: usize,
    pub piece: Piece,
}

/// Read-only copy of the session state, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    /// Front first.
    pub queue: ArrayVec<QueueEntry, QUEUE_CAPACITY>,
    /// Top first.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
    }

    pub fn queue_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.queue.iter().map(|e| e.piece)
    }
}
