//! Interactive menu loop.
//!
//! Shows the state and the menu, reads one option per line and applies it,
//! until the user quits or the input ends.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::{ActionOutcome, Session};
use crate::input::parse_menu_line;
use crate::renderer::TerminalRenderer;
use crate::style::Line;
use crate::view::StateView;

pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    term: &mut TerminalRenderer<W>,
) -> Result<()> {
    let view = StateView::new();
    let mut line = String::new();

    loop {
        term.draw(&view.state_lines(&session.snapshot()))?;
        term.draw(&view.menu_lines())?;
        term.prompt(view.prompt())?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like quitting.
            term.draw(&[Line::new()])?;
            return Ok(());
        }

        let action = match parse_menu_line(&line) {
            Ok(action) => action,
            Err(e) => {
                debug!(error = %e, "menu input rejected");
                term.draw(&[view.invalid_option_line()])?;
                continue;
            }
        };

        match session.apply(action) {
            Ok(outcome) => {
                term.draw(&[view.outcome_line(&outcome)])?;
                if outcome == ActionOutcome::Quit {
                    return Ok(());
                }
            }
            Err(err) => term.draw(&[view.error_line(action, &err)])?,
        }
    }
}
