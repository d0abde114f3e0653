use std::fs;

use svarka_engine::engine::{apply_action, start_new_round};
use svarka_engine::game::{TableConfig, TableState};
use svarka_engine::logger::{format_round_id, RoundLogger, RoundRecord};
use svarka_engine::player::{PlayerAction, PlayerId, Seat};

fn finished_round() -> TableState {
    let seats = vec![Seat::human("ana", "Ana", 100), Seat::ai("bot", "Bot", 100)];
    let state = TableState::new(TableConfig::new("Test", 10, None, 4), seats, 21).unwrap();
    let state = start_new_round(&state).unwrap();
    let state = apply_action(&state, &PlayerId::from("ana"), PlayerAction::Bet(20)).unwrap();
    apply_action(&state, &PlayerId::from("bot"), PlayerAction::Fold).unwrap()
}

#[test]
fn round_id_is_date_and_sequence() {
    assert_eq!(format_round_id("20250102", 7), "20250102-000007");
    let mut logger = RoundLogger::detached("20250102");
    assert_eq!(logger.next_id(), "20250102-000001");
    assert_eq!(logger.next_id(), "20250102-000002");
}

#[test]
fn record_only_for_finished_rounds() {
    let seats = vec![Seat::human("a", "A", 100), Seat::human("b", "B", 100)];
    let state = TableState::new(TableConfig::new("Test", 10, None, 4), seats, 1).unwrap();
    let dealt = start_new_round(&state).unwrap();
    assert!(RoundRecord::from_state("x".into(), &dealt).is_none());
}

#[test]
fn record_captures_actions_and_winner() {
    let state = finished_round();
    let rec = RoundRecord::from_state("20250102-000001".into(), &state).unwrap();
    assert_eq!(rec.seed, 21);
    assert_eq!(rec.round, 1);
    assert_eq!(rec.actions.len(), 2);
    assert_eq!(rec.actions[0].chips, 20);
    assert_eq!(rec.hands.len(), 2);
    assert!(rec.hands[1].folded);
    let sd = rec.showdown.unwrap();
    assert_eq!(sd.winners, vec![PlayerId::from("ana")]);
    assert_eq!(sd.pot, 20);
    assert_eq!(rec.result.as_deref(), Some("ana wins 20"));
}

#[test]
fn logger_writes_one_json_line_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/rounds.jsonl");
    let mut logger = RoundLogger::create(&path).unwrap();
    let state = finished_round();
    for _ in 0..2 {
        let rec = RoundRecord::from_state(logger.next_id(), &state).unwrap();
        logger.write(&rec).unwrap();
    }
    assert_eq!(logger.written(), 2);
    drop(logger);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let back: RoundRecord = serde_json::from_str(lines[1]).unwrap();
    assert!(back.round_id.ends_with("-000002"));
    assert!(back.ts.is_some());
    assert_eq!(back.actions[0].action, PlayerAction::Bet(20));
}
