//! StateView: maps a `SessionSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionOutcome, ContainerError, SessionSnapshot};
use crate::style::{Line, Rgb, Span, TextStyle};
use crate::types::{MenuAction, Piece, PieceKind};

const HEADER_STYLE: TextStyle = TextStyle::PLAIN.bold();
const ERROR_STYLE: TextStyle = TextStyle::fg(Rgb::new(220, 80, 80));
const EMPTY_STYLE: TextStyle = TextStyle::PLAIN.dim();

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_span(piece: Piece) -> Span {
    Span::styled(piece.to_string(), TextStyle::fg(piece_color(piece.kind)))
}

fn push_pieces(line: &mut Line, pieces: impl Iterator<Item = Piece>) {
    let mut any = false;
    for piece in pieces {
        if any {
            line.push(Span::plain(" "));
        }
        line.push(piece_span(piece));
        any = true;
    }
    if !any {
        line.push(Span::styled("(empty)", EMPTY_STYLE));
    }
}

/// Renders session state, the menu and action feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateView;

impl StateView {
    pub fn new() -> Self {
        Self
    }

    /// Current queue and reserve stack, framed.
    pub fn state_lines(&self, snap: &SessionSnapshot) -> Vec<Line> {
        let mut queue = Line::plain("Queue:  ");
        push_pieces(&mut queue, snap.queue_pieces());

        let mut stack = Line::plain("Reserve (top -> base): ");
        push_pieces(&mut stack, snap.stack.iter().copied());

        vec![
            Line::new(),
            Line::styled("=== CURRENT STATE ===", HEADER_STYLE),
            queue,
            stack,
            Line::styled("=====================", HEADER_STYLE),
        ]
    }

    pub fn menu_lines(&self) -> Vec<Line> {
        let mut lines = vec![Line::new(), Line::styled("Options:", HEADER_STYLE)];
        // Quit is listed last, as in the classic menu.
        for action in MenuAction::ALL.iter().skip(1).chain(MenuAction::ALL.iter().take(1)) {
            lines.push(Line::plain(format!("{} - {}", action.option(), action.label())));
        }
        lines
    }

    pub fn prompt(&self) -> &'static str {
        "Choice: "
    }

    /// Feedback for an applied action.
    pub fn outcome_line(&self, outcome: &ActionOutcome) -> Line {
        let mut line = Line::new();
        match outcome {
            ActionOutcome::Played(p) => {
                line.push(Span::plain("Piece "))
                    .push(piece_span(*p))
                    .push(Span::plain(" played."));
            }
            ActionOutcome::Reserved(p) => {
                line.push(Span::plain("Piece "))
                    .push(piece_span(*p))
                    .push(Span::plain(" sent to the reserve."));
            }
            ActionOutcome::UsedReserved(p) => {
                line.push(Span::plain("Reserved piece used: "))
                    .push(piece_span(*p));
            }
            ActionOutcome::Exchanged => {
                line.push(Span::plain("Simple exchange done."));
            }
            ActionOutcome::MultiExchanged => {
                line.push(Span::plain(
                    "Exchanged the first 3 pieces of the queue with the 3 pieces of the reserve.",
                ));
            }
            ActionOutcome::Quit => {
                line.push(Span::plain("Exiting..."));
            }
        }
        line
    }

    /// Feedback for a rejected action.
    pub fn error_line(&self, action: MenuAction, err: &ContainerError) -> Line {
        let text = match (action, err) {
            (MenuAction::Reserve, ContainerError::Full { .. }) => {
                "Error: cannot reserve, the reserve is full.".to_string()
            }
            (MenuAction::Reserve, _) => "Error: cannot reserve, the queue is empty.".to_string(),
            (MenuAction::PlayFront, _) => "Error: the queue is empty.".to_string(),
            (MenuAction::UseReserved, _) => "The reserve is empty.".to_string(),
            (MenuAction::SimpleExchange, _) => {
                "Error: the simple exchange needs a piece in the queue and in the reserve."
                    .to_string()
            }
            (
                MenuAction::MultiExchange,
                ContainerError::InsufficientElements {
                    required,
                    queue,
                    stack,
                },
            ) => format!(
                "Error: not enough pieces for the multi exchange (need {required}, queue has {queue}, reserve has {stack})."
            ),
            (_, err) => format!("Error: {err}."),
        };
        Line::styled(text, ERROR_STYLE)
    }

    pub fn invalid_option_line(&self) -> Line {
        Line::styled("Invalid option.", ERROR_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn empty_reserve_is_marked() {
        let session = Session::new(5);
        let lines = StateView::new().state_lines(&session.snapshot());
        assert_eq!(texts(&lines)[3], "Reserve (top -> base): (empty)");
    }

    #[test]
    fn queue_line_lists_front_first() {
        let mut session = Session::new(5);
        session.play_front().unwrap();
        let snap = session.snapshot();
        let expected: Vec<String> = snap.queue_pieces().map(|p| p.to_string()).collect();

        let lines = StateView::new().state_lines(&snap);
        assert_eq!(texts(&lines)[2], format!("Queue:  {}", expected.join(" ")));
    }

    #[test]
    fn menu_lists_quit_last() {
        let lines = texts(&StateView::new().menu_lines());
        assert_eq!(lines[2], "1 - Play the piece at the front of the queue");
        assert_eq!(lines.last().map(String::as_str), Some("0 - Quit"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn multi_exchange_error_reports_counts() {
        let line = StateView::new().error_line(
            MenuAction::MultiExchange,
            &ContainerError::InsufficientElements {
                required: 3,
                queue: 5,
                stack: 1,
            },
        );
        assert_eq!(
            line.text(),
            "Error: not enough pieces for the multi exchange (need 3, queue has 5, reserve has 1)."
        );
    }

    #[test]
    fn piece_spans_are_colored_by_kind() {
        let span = piece_span(Piece::new(PieceKind::T, 2));
        assert_eq!(span.text, "[T 2]");
        assert_eq!(span.style.fg, Some(Rgb::new(200, 120, 220)));
    }
}
