//! Check detection tests.

use crate::board::{Board, Color, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_rook_on_open_rank_gives_check() {
    let board = Board::from_fen("7k/8/8/8/8/8/8/K5r1 w - - 0 1");
    assert!(board.is_king_in_check(Color::White));
    assert!(!board.is_king_in_check(Color::Black));
}

#[test]
fn test_blocker_on_rank_stops_check() {
    let board = Board::from_fen("7k/8/8/8/8/8/8/K2N2r1 w - - 0 1");
    assert!(!board.is_king_in_check(Color::White));
    let board = Board::from_fen("7k/8/8/8/8/8/8/K2n2r1 w - - 0 1");
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_leaper_checks() {
    let knight = Board::from_fen("7k/8/8/8/8/1n6/8/K7 w - - 0 1");
    assert!(knight.is_king_in_check(Color::White));

    let pawn = Board::from_fen("7k/8/8/8/8/8/1p6/K7 w - - 0 1");
    assert!(pawn.is_king_in_check(Color::White));

    // A pawn directly in front does not attack
    let pawn = Board::from_fen("7k/8/8/8/8/8/p7/K7 w - - 0 1");
    assert!(!pawn.is_king_in_check(Color::White));
}

#[test]
fn test_diagonal_check_and_block() {
    let board = Board::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1");
    assert!(!board.is_king_in_check(Color::White));
    let board = Board::from_fen("7k/6b1/8/8/8/8/8/K7 w - - 0 1");
    assert!(board.is_king_in_check(Color::White));
    let board = Board::from_fen("7k/6q1/8/8/3P4/8/8/K7 w - - 0 1");
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_hypothetical_king_square() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
    let before = board.clone();
    // The rook on h1 sees along the first rank through the king's own square.
    assert!(board.is_king_in_check_at(Color::White, sq("f1")));
    assert!(board.is_king_in_check_at(Color::White, sq("d1")));
    assert!(!board.is_king_in_check_at(Color::White, sq("d2")));
    // Capturing the attacker itself is safe here
    assert!(!board.is_king_in_check_at(Color::White, sq("h1")));
    assert_eq!(board, before);
}

#[test]
fn test_square_attacked_by_color() {
    let board = Board::new();
    assert!(board.is_square_attacked(sq("f3"), Color::White));
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
    assert!(board.is_square_attacked(sq("f6"), Color::Black));
}
