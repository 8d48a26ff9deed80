//! Piece reserve simulator (workspace facade crate).
//!
//! Re-exports the workspace crates under one name:
//! `piece_reserve::{core,adapter,term,input,types}`.

pub use piece_reserve_adapter as adapter;
pub use piece_reserve_core as core;
pub use piece_reserve_input as input;
pub use piece_reserve_term as term;
pub use piece_reserve_types as types;
