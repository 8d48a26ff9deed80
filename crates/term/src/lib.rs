//! Terminal presentation for the simulator.
//!
//! [`view`] turns core state and action results into styled [`style::Line`]s
//! without doing any I/O; [`renderer`] writes those lines out, colored through
//! crossterm or as plain text; [`menu`] is the interactive loop tying them to
//! line input.

pub mod menu;
pub mod renderer;
pub mod style;
pub mod view;

pub use piece_reserve_core as core;
pub use piece_reserve_input as input;
pub use piece_reserve_types as types;

pub use menu::run_menu;
pub use renderer::{encode_lines_into, render_plain, TerminalRenderer};
pub use style::{Line, Rgb, Span, TextStyle};
pub use view::StateView;
