//! Draw detection tests.

use crate::board::Board;
use crate::game::{Game, GameStatus};

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play(mv).expect("move not legal");
    }
}

const KNIGHT_SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

#[test]
fn test_fen_halfmove_parsing() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 57 1");
    assert_eq!(board.halfmove_clock(), 57);
    assert!(!board.is_fifty_move());
}

#[test]
fn test_fifty_move_rule_draw() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 100 80");
    assert!(board.is_fifty_move());
    assert!(board.is_terminal());
    let game = Game::from_fen(&board.to_fen()).unwrap();
    assert_eq!(game.status(), GameStatus::FiftyMove);
}

#[test]
fn test_fifty_move_triggers_on_hundredth_ply() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 99 80");
    assert!(!board.is_fifty_move());
    board.play("d2d3").unwrap();
    assert_eq!(board.halfmove_clock(), 100);
    assert!(board.is_fifty_move());
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/K7 w - - 99 1");
    board.play("e2e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert!(!board.is_fifty_move());
}

#[test]
fn test_halfmove_resets_on_capture() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/3RK3 w - - 42 30");
    board.play("d1d2").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_threefold_repetition() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.repetition_count(), 2);
    assert!(!game.is_threefold_repetition());
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.repetition_count(), 3);
    assert!(game.is_threefold_repetition());
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::ThreefoldRepetition);
}

#[test]
fn test_threefold_by_different_route() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &["b1c3", "b8c6", "c3b1", "c6b8"]);
    assert!(game.is_threefold_repetition());
}

#[test]
fn test_distinct_final_position_does_not_trigger_repetition() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &["g1f3", "g8f6", "f3g1", "e7e6"]);
    assert!(!game.is_threefold_repetition());
    assert!(!game.is_game_over());
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_undo_forgets_repetition() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert!(game.is_threefold_repetition());
    game.undo().unwrap();
    game.play("f6g8").unwrap();
    assert!(game.is_threefold_repetition());
    game.undo().unwrap();
    assert!(!game.is_threefold_repetition());
}

#[test]
fn test_search_does_not_touch_repetition_tally() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    let before = game.repetition_count();
    let _ = game.best_move(2);
    assert_eq!(game.repetition_count(), before);
}

#[test]
fn test_insufficient_material() {
    for fen in [
        "8/8/8/8/8/8/8/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6N1/K1k5 w - - 0 1",
        "8/8/8/8/8/5b2/6B1/K1k5 w - - 0 1",
        "8/8/8/8/8/5n2/6B1/K1k5 w - - 0 1",
    ] {
        let board = Board::from_fen(fen);
        assert!(board.is_insufficient_material(), "{fen}");
        assert!(board.is_terminal(), "{fen}");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "8/8/8/8/8/8/6P1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6R1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/5BN1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6q1/K1k5 w - - 0 1",
    ] {
        assert!(!Board::from_fen(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_stalemate_and_checkmate_are_distinct() {
    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(stalemate.is_stalemate());
    assert!(!stalemate.is_checkmate());

    let mate = Board::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(mate.is_checkmate());
    assert!(!mate.is_stalemate());
}
