use caissa_engine::board::{is_mate_score, Board, SearchConfig, MATE_SCORE};

#[test]
fn finds_back_rank_mate() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let best = board.best_move(2).expect("should find a move");
    assert_eq!(best.to_string(), "e1e8");

    board.make_move(best).unwrap();
    assert!(board.is_checkmate());
}

#[test]
fn mate_score_counts_plies() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let result = board.search(&SearchConfig::with_depth(3));
    assert_eq!(result.score, MATE_SCORE - 1);
    assert!(is_mate_score(result.score));
}

#[test]
fn captures_free_queen() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let best = board.best_move(2).expect("should find a move");
    assert_eq!(best.to_string(), "d1d5");
    assert!(best.is_capture());
}

#[test]
fn single_legal_move_is_chosen() {
    let board = Board::from_fen("k7/8/8/8/8/8/1r6/K6r w - - 0 1");
    assert_eq!(board.generate_legal().len(), 1);
    let best = board.best_move(3).expect("should find a move");
    assert_eq!(best.to_string(), "a1b2");
}

#[test]
fn no_move_when_checkmated() {
    let board = Board::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.is_checkmate());
    let result = board.search(&SearchConfig::with_depth(3));
    assert!(result.best_move.is_none());
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn no_move_when_stalemated() {
    let board = Board::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    assert!(board.is_stalemate());
    let result = board.search(&SearchConfig::with_depth(2));
    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}

#[test]
fn depth_zero_still_returns_a_move() {
    let board = Board::new();
    let best = board.best_move(0).expect("depth 0 should still pick a move");
    assert!(board.generate_legal().contains(&best));
}

#[test]
fn search_leaves_board_untouched() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = board.clone();
    let result = board.search(&SearchConfig::with_depth(2));
    assert!(result.best_move.is_some());
    assert!(result.nodes > 48);
    assert_eq!(board, before);
    assert_eq!(board.to_fen(), before.to_fen());
}

#[test]
fn dedicated_pool_matches_global_pool() {
    let board = Board::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2");
    let global = board.search(&SearchConfig::with_depth(3));
    let pooled = board.search(&SearchConfig {
        depth: 3,
        threads: Some(2),
    });
    assert_eq!(global.best_move, pooled.best_move);
    assert_eq!(global.score, pooled.score);
}

#[test]
fn repeated_searches_agree() {
    let board = Board::new();
    let first = board.search(&SearchConfig::with_depth(3));
    for _ in 0..3 {
        let again = board.search(&SearchConfig::with_depth(3));
        assert_eq!(first.best_move, again.best_move);
        assert_eq!(first.score, again.score);
    }
}

#[test]
fn searched_move_is_legal_at_several_depths() {
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3");
    let legal = board.generate_legal();
    for depth in 1..=3 {
        let best = board.best_move(depth).expect("should find a move");
        assert!(legal.contains(&best), "depth {depth} picked {best}");
    }
}
