//! Menu input module.
//!
//! Maps lines typed at the menu prompt into [`crate::types::MenuAction`].
//! Reading the lines is left to the caller.

pub mod map;

pub use piece_reserve_types as types;

pub use map::{parse_menu_line, MenuParseError};
