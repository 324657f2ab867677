use std::thread;

use caissa_engine::{Color, Game, GameStatus, MoveError, SearchConfig, SharedGame};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    for mv in ["f2f3", "e7e5", "g2g4"] {
        game.play(mv).unwrap();
        assert_eq!(game.status(), GameStatus::Ongoing);
    }
    game.play("d8h4").unwrap();
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.is_game_over());
}

#[test]
fn illegal_move_is_rejected_without_changes() {
    let mut game = Game::new();
    let err = game.play("e2e5").unwrap_err();
    assert!(matches!(err, MoveError::Illegal { .. }), "{err:?}");
    assert_eq!(game.board().to_fen(), START_FEN);
    assert_eq!(game.repetition_count(), 1);
}

#[test]
fn unparsable_move_is_an_error() {
    let mut game = Game::new();
    assert!(game.play("zz").is_err());
    assert_eq!(game.board().history_len(), 0);
}

#[test]
fn undo_restores_position_and_tally() {
    let mut game = Game::new();
    game.play("g1f3").unwrap();
    game.play("g8f6").unwrap();
    game.undo().unwrap();
    game.undo().unwrap();
    assert_eq!(game.board().to_fen(), START_FEN);
    assert_eq!(game.repetition_count(), 1);
    assert!(matches!(game.undo(), Err(MoveError::EmptyHistory)));
}

#[test]
fn knight_shuffle_is_threefold() {
    let mut game = Game::new();
    for _ in 0..2 {
        for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            game.play(mv).unwrap();
        }
    }
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(game.status(), GameStatus::ThreefoldRepetition);
    assert!(game.is_game_over());
}

#[test]
fn fifty_move_and_material_draws() {
    let game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 100 80").unwrap();
    assert_eq!(game.status(), GameStatus::FiftyMove);

    let game = Game::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::InsufficientMaterial);
}

#[test]
fn stalemate_status() {
    let game = Game::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.status().is_over());
}

#[test]
fn bad_fen_is_reported() {
    assert!(Game::from_fen("not a fen").is_err());
}

#[test]
fn init_position_keeps_game_on_bad_fen() {
    let mut game = Game::new();
    game.play("d2d4").unwrap();
    let fen = game.board().to_fen();
    assert!(game.init_position(Some("8/8/8 w - - 0 1 extra")).is_err());
    assert_eq!(game.board().to_fen(), fen);

    game.init_position(Some("4k3/8/8/8/8/8/8/4K2R w K - 0 1")).unwrap();
    assert_eq!(game.board().to_fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert_eq!(game.repetition_count(), 1);

    game.init_position(None).unwrap();
    assert_eq!(game.board().to_fen(), START_FEN);
}

#[test]
fn engine_move_plays_the_mate() {
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let mv = game
        .engine_move(&SearchConfig::with_depth(2))
        .unwrap()
        .expect("a move exists");
    assert_eq!(mv.to_string(), "e1e8");
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.engine_move(&SearchConfig::with_depth(2)).unwrap(), None);
}

#[test]
fn reset_starts_over() {
    let mut game = Game::new();
    game.play("e2e4").unwrap();
    game.reset();
    assert_eq!(game.board().to_fen(), START_FEN);
    assert_eq!(game.repetition_count(), 1);
}

#[test]
fn shared_game_serialises_moves_across_threads() {
    let shared = SharedGame::default();
    shared.play("e2e4").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.best(2))
        })
        .collect();
    let suggestions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(suggestions.iter().all(|s| s.is_some() && *s == suggestions[0]));

    let reply = shared
        .engine_move(&SearchConfig::with_depth(1))
        .unwrap()
        .expect("black has moves");
    assert_eq!(reply.color(), Color::Black);
    assert_eq!(shared.board().side_to_move(), Color::White);
    assert_eq!(shared.status(), GameStatus::Ongoing);

    shared.reset();
    assert_eq!(shared.fen(), START_FEN);
    let history = shared.with_game(|game| game.board().history_len());
    assert_eq!(history, 0);
}
