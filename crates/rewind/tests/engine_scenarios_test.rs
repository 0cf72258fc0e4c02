//! Scenario tests for the rewindable game engine.

use rewind::invariants::check_engine;
use rewind::{GameEngine, MoveLabel, Player, Position, Square, Status};

#[test]
fn test_top_row_win_freezes_board() {
    let mut engine = GameEngine::replay([0, 3, 1, 4, 2]);

    assert_eq!(engine.winner(), Some(Player::X));
    assert_eq!(engine.status(), Status::Winner(Player::X));
    assert_eq!(engine.status_text(), "Winner: X");

    let before = engine.clone();
    engine.apply_move(5);
    assert_eq!(engine, before);
}

#[test]
fn test_middle_row_win_blocks_final_move() {
    // O completes 3-4-5 on the eighth move, so X at 8 is ignored.
    let engine = GameEngine::replay([0, 1, 2, 4, 6, 5, 7, 3, 8]);

    assert_eq!(engine.winner(), Some(Player::O));
    assert_eq!(engine.len(), 9);
    assert_eq!(engine.current_board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_full_board_without_winner_ignores_moves() {
    // X O X / X O O / O X X
    let mut engine = GameEngine::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let board = engine.current_board();
    assert!(Position::ALL.iter().all(|&p| !board.is_empty(p)));
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.len(), 10);

    let before = engine.clone();
    for cell in 0..9 {
        engine.apply_move(cell);
    }
    assert_eq!(engine, before);
}

#[test]
fn test_branching_after_jump_discards_future() {
    let mut engine = GameEngine::replay([0, 1]);
    engine.jump_to(0).unwrap();
    engine.apply_move(4);

    assert_eq!(engine.len(), 2);
    assert_eq!(engine.current_move(), 1);
    let latest = &engine.history()[1];
    assert_eq!(latest.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(latest.get(Position::TopLeft), Square::Empty);
    assert!(
        engine
            .history()
            .iter()
            .all(|board| board.get(Position::TopCenter) == Square::Empty)
    );
}

#[test]
fn test_double_click_is_ignored() {
    let mut engine = GameEngine::new();
    engine.apply_move(4);
    let before = engine.clone();
    engine.apply_move(4);
    assert_eq!(engine, before);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_cell_past_board_is_ignored() {
    let mut engine = GameEngine::new();
    engine.apply_move(4);
    let before = engine.clone();
    engine.apply_move(9);
    engine.apply_move(usize::MAX);
    assert_eq!(engine, before);
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_history_length_tracks_current_move() {
    let mut engine = GameEngine::new();
    for cell in [4, 0, 8, 2, 6] {
        engine.apply_move(cell);
        assert_eq!(engine.len(), engine.current_move() + 1);
        assert!(check_engine(&engine).is_ok());
    }
}

#[test]
fn test_jump_shows_recorded_board() {
    let mut engine = GameEngine::replay([4, 0, 8, 2]);
    let history = engine.history().to_vec();

    for m in [2, 0, 4, 1, 3] {
        engine.jump_to(m).unwrap();
        assert_eq!(engine.current_board(), &history[m]);
        assert_eq!(engine.history(), history.as_slice());
    }
}

#[test]
fn test_turn_parity() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.turn(), Player::X);
    engine.apply_move(0);
    assert_eq!(engine.turn(), Player::O);
    engine.apply_move(0);
    assert_eq!(engine.turn(), Player::O);
    engine.apply_move(1);
    assert_eq!(engine.turn(), Player::X);

    engine.jump_to(1).unwrap();
    assert_eq!(engine.turn(), Player::O);
    assert_eq!(engine.status_text(), "Next player: O");
}

#[test]
fn test_jump_past_win_reopens_play() {
    let mut engine = GameEngine::replay([0, 3, 1, 4, 2]);
    engine.jump_to(4).unwrap();
    assert_eq!(engine.winner(), None);

    engine.apply_move(8);
    assert_eq!(engine.len(), 6);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_move_list_labels() {
    let mut engine = GameEngine::replay([0, 1, 2]);
    engine.jump_to(1).unwrap();

    let labels: Vec<_> = engine
        .move_list()
        .iter()
        .map(|entry| (entry.index(), entry.label().to_string(), entry.is_current()))
        .collect();

    assert_eq!(
        labels,
        vec![
            (0, "Go to game start".to_string(), false),
            (1, "Go to move #1".to_string(), true),
            (2, "Go to move #2".to_string(), false),
            (3, "Go to move #3".to_string(), false),
        ]
    );
    assert_eq!(engine.move_list()[0].label(), MoveLabel::GameStart);
}
