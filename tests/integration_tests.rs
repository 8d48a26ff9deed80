//! Integration tests for the interactive menu loop

use piece_reserve::core::Session;
use piece_reserve::input::parse_menu_line;
use piece_reserve::term::{run_menu, TerminalRenderer};
use piece_reserve::types::MenuAction;

fn run_script(seed: u32, script: &str) -> (Session, String) {
    let mut session = Session::new(seed);
    let mut term = TerminalRenderer::new(Vec::new(), false);
    run_menu(&mut session, script.as_bytes(), &mut term).unwrap();
    (session, String::from_utf8(term.into_inner()).unwrap())
}

#[test]
fn test_session_lifecycle() {
    let (session, out) = run_script(12345, "0\n");

    assert!(session.queue().is_full());
    assert!(session.stack().is_empty());
    assert!(out.contains("=== CURRENT STATE ==="));
    assert!(out.contains("Reserve (top -> base): (empty)"));
    assert!(out.contains("5 - Multi exchange between queue and stack (3 pieces)"));
    assert!(out.trim_end().ends_with("Exiting..."));
}

#[test]
fn test_reserve_and_multi_exchange_through_menu() {
    let (session, out) = run_script(12345, "2\n2\n2\n5\n0\n");

    let queue_ids: Vec<u64> = session.queue().iter().map(|p| p.id).collect();
    let stack_ids: Vec<u64> = session.stack().iter_top_down().map(|p| p.id).collect();
    assert_eq!(queue_ids, vec![2, 1, 0, 6, 7]);
    assert_eq!(stack_ids, vec![3, 4, 5]);
    assert_eq!(out.matches("sent to the reserve.").count(), 3);
    assert!(out.contains(
        "Exchanged the first 3 pieces of the queue with the 3 pieces of the reserve."
    ));
}

#[test]
fn test_rejections_do_not_stop_the_loop() {
    let (session, out) = run_script(7, "5\n4\n3\n2\n2\n2\n2\n0\n");

    assert!(out.contains("Error: not enough pieces for the multi exchange (need 3, queue has 5, reserve has 0)."));
    assert!(out.contains("Error: the simple exchange needs a piece in the queue and in the reserve."));
    assert!(out.contains("The reserve is empty."));
    assert!(out.contains("Error: cannot reserve, the reserve is full."));
    assert!(session.stack().is_full());
    assert_eq!(session.next_id(), 8);
}

#[test]
fn test_play_and_use_reserved() {
    let (session, out) = run_script(99, "1\n2\n3\n0\n");

    // Play and reserve each replenish once; using the reserve does not.
    assert_eq!(session.next_id(), 7);
    assert!(session.stack().is_empty());
    assert!(out.contains("Reserved piece used: [") && out.contains(" 1]"));
}

#[test]
fn test_menu_line_parsing() {
    assert_eq!(parse_menu_line("4"), Ok(MenuAction::SimpleExchange));
    assert!(parse_menu_line("7").is_err());
}
