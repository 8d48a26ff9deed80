//! Core logic for the piece reserve simulator - pure, deterministic, and testable
//!
//! This crate contains the containers, the exchange rules and the session
//! controller. It has **no dependencies** on terminal I/O or networking.
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO of reserved pieces
//! - [`exchange`]: single and three-way swaps between queue front and stack top
//! - [`rng`]: seeded piece generation with strictly increasing ids
//! - [`session`]: owns everything and applies menu actions with replenishment
//! - [`snapshot`]: read-only state copy for rendering and the adapter
//!
//! # Overflow policy
//!
//! Containers are strict: `enqueue` on a full queue and `push` on a full stack
//! return [`ContainerError::Full`] and leave the container unchanged.
//!
//! # Example
//!
//! ```
//! use piece_reserve_core::{ActionOutcome, Session};
//! use piece_reserve_types::MenuAction;
//!
//! let mut session = Session::new(12345);
//! assert!(session.queue().is_full());
//!
//! for _ in 0..3 {
//!     session.apply(MenuAction::Reserve).unwrap();
//! }
//! assert!(session.stack().is_full());
//!
//! let outcome = session.apply(MenuAction::MultiExchange).unwrap();
//! assert_eq!(outcome, ActionOutcome::MultiExchanged);
//! ```

pub mod error;
pub mod exchange;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use piece_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::ContainerError;
pub use exchange::{multi_exchange, simple_exchange};
pub use queue::{BoundedQueue, PieceQueue};
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{ActionOutcome, Session};
pub use snapshot::{QueueEntry, SessionSnapshot};
pub use stack::{BoundedStack, ReserveStack};
