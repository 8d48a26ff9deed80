//! Errors raised by the containers and the exchange operations.
//!
//! Every variant is a precondition failure: the operation that returns it has
//! not touched either container.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Removal from a container holding no elements.
    #[error("container is empty")]
    Empty,

    /// Insertion into a container already at capacity.
    #[error("container is full (capacity {capacity})")]
    Full { capacity: usize },

    /// Not enough elements for a positional access or an exchange.
    #[error("not enough pieces (need {required}, queue has {queue}, reserve has {stack})")]
    InsufficientElements {
        required: usize,
        queue: usize,
        stack: usize,
    },
}

impl ContainerError {
    /// Stable snake_case code, used by the adapter protocol.
    pub fn code(&self) -> &'static str {
        match self {
            ContainerError::Empty => "empty_container",
            ContainerError::Full { .. } => "full_container",
            ContainerError::InsufficientElements { .. } => "insufficient_elements",
        }
    }
}
