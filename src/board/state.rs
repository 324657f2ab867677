use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Everything about a position except its undo history.
///
/// Pushed onto the history stack before each move and restored verbatim on undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
    empty: Bitboard,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A chess position as twelve piece bitboards plus game-state fields.
///
/// Aggregate masks (`occupied` per color, `all_occupied` and `empty`) are
/// derived from the piece masks and recomputed after every mutation.
/// Cloning produces a fully independent board, history included.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) empty: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<Snapshot>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.put(0, file, Color::White, *piece);
            board.put(1, file, Color::White, Piece::Pawn);
            board.put(6, file, Color::Black, Piece::Pawn);
            board.put(7, file, Color::Black, *piece);
        }
        board.castling = CastlingRights::all();
        board.refresh_occupancy();
        board
    }

    fn put(&mut self, rank: usize, file: usize, color: Color, piece: Piece) {
        if let Some(sq) = Square::new(rank, file) {
            self.set_piece(sq, color, piece);
        }
    }

    /// A board with no pieces, white to move.
    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            empty: Bitboard::ALL,
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Copy of the position without its history, for throwaway probes.
    pub(crate) fn scratch_copy(&self) -> Self {
        let mut board = Board::empty();
        board.restore(self.snapshot());
        board
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            pieces: self.pieces,
            occupied: self.occupied,
            all_occupied: self.all_occupied,
            empty: self.empty,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.pieces = snapshot.pieces;
        self.occupied = snapshot.occupied;
        self.all_occupied = snapshot.all_occupied;
        self.empty = snapshot.empty;
        self.side_to_move = snapshot.side_to_move;
        self.castling = snapshot.castling;
        self.en_passant = snapshot.en_passant;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
    }

    /// Recompute the aggregate masks from the twelve piece masks.
    pub(crate) fn refresh_occupancy(&mut self) {
        for color in Color::BOTH {
            self.occupied[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        }
        self.all_occupied = self.occupied[0] | self.occupied[1];
        self.empty = !self.all_occupied;
    }

    /// Place a piece. Aggregates are left for `refresh_occupancy`.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()] |= Bitboard::from_square(sq);
    }

    /// Remove a piece. Aggregates are left for `refresh_occupancy`.
    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()] &= !Bitboard::from_square(sq);
    }

    /// The piece on a square, read from the piece masks.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces[color.index()][piece.index()].contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Mask of one piece type for one color
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by `color`
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// All occupied squares
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// All empty squares
    #[must_use]
    pub fn empty_squares(&self) -> Bitboard {
        self.empty
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Number of moves that can be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check the board invariants: piece masks are disjoint, aggregates are
    /// exactly their union and complement, and each side has one king.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut union = [Bitboard::EMPTY; 2];
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                if !(seen & bb).is_empty() {
                    return false;
                }
                seen |= bb;
                union[color.index()] |= bb;
            }
        }
        union == self.occupied
            && seen == self.all_occupied
            && !seen == self.empty
            && self.pieces(Color::White, Piece::King).popcount() == 1
            && self.pieces(Color::Black, Piece::King).popcount() == 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards compare by position; undo history is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Board {}
