//! Move generator tests for special moves.

use crate::board::{Board, CastleSide, Color, Move, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn castles(board: &Board) -> Vec<CastleSide> {
    board
        .generate_legal()
        .into_iter()
        .filter_map(Move::castle_side)
        .collect()
}

#[test]
fn test_start_position_has_twenty_moves() {
    let board = Board::new();
    let moves = board.generate_legal();
    assert_eq!(moves.len(), 20);
    assert_eq!(board.generate_pseudo_legal().len(), 20);
    assert_eq!(moves.iter().filter(|m| m.piece() == Piece::Pawn).count(), 16);
}

#[test]
fn test_generation_order_by_piece() {
    let board = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN1QKB1R w KQkq - 0 1");
    let order: Vec<usize> = board
        .generate_pseudo_legal()
        .iter()
        .map(|m| if m.is_castle() { 6 } else { m.piece().index() })
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_castling_both_sides() {
    let board = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    assert_eq!(castles(&board), vec![CastleSide::Short, CastleSide::Long]);
}

#[test]
fn test_castling_needs_rights_and_empty_squares() {
    let no_rights = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w kq - 0 1");
    assert!(castles(&no_rights).is_empty());

    let blocked = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN2K1NR w KQkq - 0 1");
    assert!(castles(&blocked).is_empty());

    // b1 occupied blocks the long castle even though the king never crosses it
    let b_file = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN2K2R w KQkq - 0 1");
    assert_eq!(castles(&b_file), vec![CastleSide::Short]);
}

#[test]
fn test_castling_through_or_out_of_check() {
    // Rook on f8 covers f1, the short-castle transit square
    let through = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(castles(&through), vec![CastleSide::Long]);

    // Rook on e8 checks the king
    let in_check = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(castles(&in_check).is_empty());

    // Attack on b1 only does not stop the long castle
    let b1 = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(castles(&b1), vec![CastleSide::Short, CastleSide::Long]);
}

#[test]
fn test_castling_needs_rook_at_home() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
    assert_eq!(castles(&board), vec![CastleSide::Short]);
}

#[test]
fn test_en_passant_generated_only_when_adjacent() {
    let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let ep: Vec<Move> = board
        .generate_legal()
        .into_iter()
        .filter(|m| m.is_en_passant())
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].from(), sq("e5"));
    assert_eq!(ep[0].to(), sq("d6"));
    assert_eq!(ep[0].captured_square(), Some(sq("d5")));

    let far = Board::from_fen("4k3/8/8/3p2P1/8/8/8/4K3 w - d6 0 2");
    assert!(far.generate_legal().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_en_passant_pinned_pawn_is_illegal() {
    // Capturing would expose the king on the fifth rank
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 2");
    assert!(board.generate_pseudo_legal().iter().any(|m| m.is_en_passant()));
    assert!(board.generate_legal().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_promotions_expand_to_four_pieces() {
    let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let promos: Vec<(Square, Piece)> = board
        .generate_legal()
        .into_iter()
        .filter_map(|m| m.promotion().map(|p| (m.to(), p)))
        .collect();
    assert_eq!(promos.len(), 8);
    assert_eq!(
        promos.iter().filter(|(to, _)| *to == sq("b8")).count(),
        4
    );
    assert_eq!(
        &promos[..4],
        &[
            (sq("a8"), Piece::Knight),
            (sq("a8"), Piece::Bishop),
            (sq("a8"), Piece::Rook),
            (sq("a8"), Piece::Queen),
        ]
    );
}

#[test]
fn test_double_push_needs_both_squares_empty() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(board.generate_legal().iter().all(|m| m.piece() != Piece::Pawn));

    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let pawn: Vec<Move> = board
        .generate_legal()
        .into_iter()
        .filter(|m| m.piece() == Piece::Pawn)
        .collect();
    assert_eq!(pawn.len(), 1);
    assert_eq!(pawn[0].to(), sq("e3"));
}

#[test]
fn test_legal_moves_never_leave_king_in_check() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    for mv in board.generate_legal() {
        let mut next = board.clone();
        next.make_move(mv).unwrap();
        assert!(!next.is_king_in_check(Color::White), "{mv} leaves king in check");
    }
}
