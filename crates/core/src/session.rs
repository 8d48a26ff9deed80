//! Session module - owns the containers and the generator
//!
//! The session is the single owner of the upcoming-piece queue, the reserve
//! stack and the piece generator. It applies menu actions and keeps the queue
//! topped up: every action that takes exactly one piece off the queue front
//! (play and reserve) is followed by one freshly generated piece. Exchanges
//! never change queue occupancy and are not followed by replenishment.

use tracing::debug;

use crate::error::ContainerError;
use crate::exchange::{multi_exchange, simple_exchange};
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::{QueueEntry, SessionSnapshot};
use crate::stack::ReserveStack;
use crate::types::{MenuAction, Piece};

/// Result of a successfully applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    Exchanged,
    MultiExchanged,
    Quit,
}

impl ActionOutcome {
    /// The piece moved by the action, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            ActionOutcome::Played(p) | ActionOutcome::Reserved(p) | ActionOutcome::UsedReserved(p) => {
                Some(*p)
            }
            _ => None,
        }
    }

    /// Convert to camelCase string for the adapter protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionOutcome::Played(_) => "played",
            ActionOutcome::Reserved(_) => "reserved",
            ActionOutcome::UsedReserved(_) => "usedReserved",
            ActionOutcome::Exchanged => "exchanged",
            ActionOutcome::MultiExchanged => "multiExchanged",
            ActionOutcome::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
}

impl Session {
    /// Create a session with the given seed and fill the queue to capacity.
    pub fn new(seed: u32) -> Self {
        Self::with_generator(PieceGenerator::new(seed))
    }

    pub fn with_generator(generator: PieceGenerator) -> Self {
        let mut session = Self {
            queue: PieceQueue::new(),
            stack: ReserveStack::new(),
            generator,
        };
        while session.replenish().is_ok() {}
        session
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    /// Apply a menu action.
    ///
    /// On error nothing has changed.
    pub fn apply(&mut self, action: MenuAction) -> Result<ActionOutcome, ContainerError> {
        let result = match action {
            MenuAction::Quit => Ok(ActionOutcome::Quit),
            MenuAction::PlayFront => self.play_front().map(ActionOutcome::Played),
            MenuAction::Reserve => self.reserve().map(ActionOutcome::Reserved),
            MenuAction::UseReserved => self.use_reserved().map(ActionOutcome::UsedReserved),
            MenuAction::SimpleExchange => {
                simple_exchange(&mut self.queue, &mut self.stack).map(|_| ActionOutcome::Exchanged)
            }
            MenuAction::MultiExchange => multi_exchange(&mut self.queue, &mut self.stack)
                .map(|_| ActionOutcome::MultiExchanged),
        };

        match &result {
            Ok(outcome) => debug!(action = action.as_str(), outcome = ?outcome, "action applied"),
            Err(err) => debug!(action = action.as_str(), error = %err, "action rejected"),
        }
        result
    }

    /// Remove the queue front and replace it with a new piece at the tail.
    pub fn play_front(&mut self) -> Result<Piece, ContainerError> {
        let piece = self.queue.dequeue()?;
        self.replenish()?;
        Ok(piece)
    }

    /// Move the queue front onto the reserve stack.
    pub fn reserve(&mut self) -> Result<Piece, ContainerError> {
        if self.queue.is_empty() {
            return Err(ContainerError::Empty);
        }
        if self.stack.is_full() {
            return Err(ContainerError::Full {
                capacity: self.stack.capacity(),
            });
        }
        let piece = self.queue.dequeue()?;
        self.stack.push(piece)?;
        self.replenish()?;
        Ok(piece)
    }

    /// Take the piece on top of the reserve stack.
    pub fn use_reserved(&mut self) -> Result<Piece, ContainerError> {
        self.stack.pop()
    }

    /// Generate one piece onto the queue tail.
    ///
    /// A full queue is rejected before generating, so no id is spent.
    fn replenish(&mut self) -> Result<(), ContainerError> {
        if self.queue.is_full() {
            return Err(ContainerError::Full {
                capacity: self.queue.capacity(),
            });
        }
        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        debug!(piece = %piece, "queue replenished");
        Ok(())
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        for (slot, piece) in self.queue.peek_range(self.queue.len()) {
            out.queue.push(QueueEntry {
                slot,
                piece: *piece,
            });
        }
        out.stack.extend(self.stack.iter_top_down().copied());
        out.next_id = self.generator.next_id();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
