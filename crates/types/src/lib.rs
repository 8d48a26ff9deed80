//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, adapter protocol).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held in the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces held in the stack |
//! | `MULTI_EXCHANGE_COUNT` | 3 | Pieces swapped by a multi exchange |
//!
//! # Examples
//!
//! ```
//! use piece_reserve_types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(MenuAction::from_option(2), Some(MenuAction::Reserve));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces kept in the circular queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const STACK_CAPACITY: usize = 3;

/// Pieces swapped between queue front and stack top by a multi exchange.
pub const MULTI_EXCHANGE_COUNT: usize = 3;

/// The piece kinds the generator draws from.
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in draw-table order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_reserve_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used in state output and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged, uniquely identified piece.
///
/// Ids are assigned by the piece generator and are never reused within one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Actions offered by the menu.
///
/// The same actions are accepted by the adapter protocol by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Leave the simulator (option 0)
    Quit,
    /// Play the piece at the front of the queue (option 1)
    PlayFront,
    /// Move the queue front onto the reserve stack (option 2)
    Reserve,
    /// Use the piece on top of the reserve stack (option 3)
    UseReserved,
    /// Swap queue front with stack top (option 4)
    SimpleExchange,
    /// Swap queue front three with stack top three (option 5)
    MultiExchange,
}

impl MenuAction {
    /// Every action, ordered by menu option number.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Quit,
        MenuAction::PlayFront,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SimpleExchange,
        MenuAction::MultiExchange,
    ];

    /// Map a numeric menu option to an action.
    pub fn from_option(option: u32) -> Option<Self> {
        Self::ALL.get(option as usize).copied()
    }

    /// The numeric menu option for this action.
    pub fn option(&self) -> u32 {
        match self {
            MenuAction::Quit => 0,
            MenuAction::PlayFront => 1,
            MenuAction::Reserve => 2,
            MenuAction::UseReserved => 3,
            MenuAction::SimpleExchange => 4,
            MenuAction::MultiExchange => 5,
        }
    }

    /// Parse action from its protocol name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_reserve_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_str("playFront"), Some(MenuAction::PlayFront));
    /// assert_eq!(MenuAction::from_str("multiexchange"), Some(MenuAction::MultiExchange));
    /// assert_eq!(MenuAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(MenuAction::Quit),
            "playfront" => Some(MenuAction::PlayFront),
            "reserve" => Some(MenuAction::Reserve),
            "usereserved" => Some(MenuAction::UseReserved),
            "simpleexchange" => Some(MenuAction::SimpleExchange),
            "multiexchange" => Some(MenuAction::MultiExchange),
            _ => None,
        }
    }

    /// Convert to camelCase string for the adapter protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Quit => "quit",
            MenuAction::PlayFront => "playFront",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "useReserved",
            MenuAction::SimpleExchange => "simpleExchange",
            MenuAction::MultiExchange => "multiExchange",
        }
    }

    /// Menu label shown next to the option number.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Quit => "Quit",
            MenuAction::PlayFront => "Play the piece at the front of the queue",
            MenuAction::Reserve => "Reserve a piece (queue -> stack)",
            MenuAction::UseReserved => "Use the reserved piece (top of the stack)",
            MenuAction::SimpleExchange => "Swap the queue front with the stack top",
            MenuAction::MultiExchange => "Multi exchange between queue and stack (3 pieces)",
        }
    }
}
