//! Move type and move list.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// Moves produced by the generator, in generation order.
pub type MoveList = Vec<Move>;

/// An immutable move descriptor.
///
/// Carries everything needed to describe the move without a board: the
/// moving piece and color, origin and destination, the square of any
/// captured piece (behind the destination for en passant), the promotion
/// piece and the castle kind.
///
/// Two moves compare equal when they move the same piece between the same
/// squares with the same promotion. Castles compare by castle kind only, so a
/// parsed `0-0` matches the generated king move.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    color: Color,
    captured: Option<Square>,
    en_passant: bool,
    promotion: Option<Piece>,
    castle: Option<CastleSide>,
}

impl Move {
    /// A plain move with no capture
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece,
            color,
            captured: None,
            en_passant: false,
            promotion: None,
            castle: None,
        }
    }

    /// A capture on the destination square
    #[inline]
    #[must_use]
    pub const fn capture(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        let mut mv = Move::new(color, piece, from, to);
        mv.captured = Some(to);
        mv
    }

    /// En passant capture of the pawn on `captured`
    #[inline]
    #[must_use]
    pub const fn en_passant(color: Color, from: Square, to: Square, captured: Square) -> Self {
        let mut mv = Move::new(color, Piece::Pawn, from, to);
        mv.captured = Some(captured);
        mv.en_passant = true;
        mv
    }

    /// King move for the given castle
    #[must_use]
    pub fn castle(color: Color, side: CastleSide) -> Self {
        let (from, to) = side.king_squares(color);
        let mut mv = Move::new(color, Piece::King, from, to);
        mv.castle = Some(side);
        mv
    }

    /// Same move, promoting to `piece`
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Square of the captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured_square(self) -> Option<Square> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.castle.is_some()
    }

    /// Parse a move string for the given side.
    ///
    /// Accepted forms:
    /// - `e2e4`: coordinate move (assumed to be a pawn move)
    /// - `e7e8q`, `e7e8=q`: promotion
    /// - `Ng1f3`: piece letter followed by origin and destination
    /// - `0-0`, `0-0-0` (or `O-O`, `O-O-O`): castling
    ///
    /// The result is a request to be matched against generated moves;
    /// capture information is not known until then.
    pub fn parse(text: &str, color: Color) -> Result<Move, MoveParseError> {
        match text {
            "0-0" | "O-O" => return Ok(Move::castle(color, CastleSide::Short)),
            "0-0-0" | "O-O-O" => return Ok(Move::castle(color, CastleSide::Long)),
            _ => {}
        }

        let chars: Vec<char> = text.chars().collect();
        let square = |start: usize| -> Result<Square, MoveParseError> {
            let notation: String = chars[start..start + 2].iter().collect();
            notation
                .parse()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
        };

        match chars.len() {
            4 => Ok(Move::new(color, Piece::Pawn, square(0)?, square(2)?)),
            5 if names_piece(&chars) => {
                let piece =
                    Piece::from_char(chars[0]).ok_or(MoveParseError::InvalidPiece { char: chars[0] })?;
                Ok(Move::new(color, piece, square(1)?, square(3)?))
            }
            5 | 6 => {
                let promo_char = chars[chars.len() - 1];
                let promotion = match Piece::from_char(promo_char) {
                    Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => p,
                    _ => return Err(MoveParseError::InvalidPromotion { char: promo_char }),
                };
                Ok(Move::new(color, Piece::Pawn, square(0)?, square(2)?).with_promotion(promotion))
            }
            len => Err(MoveParseError::InvalidLength { len }),
        }
    }

    /// Readable description, e.g. `WP from e2 to e4` or `Short castle`
    #[must_use]
    pub fn describe(self) -> String {
        match self.castle {
            Some(CastleSide::Short) => "Short castle".to_string(),
            Some(CastleSide::Long) => "Long castle".to_string(),
            None => {
                let mut text = format!(
                    "{}{} from {} to {}",
                    self.color.letter(),
                    self.piece.to_char().to_ascii_uppercase(),
                    self.from,
                    self.to
                );
                if let Some(promo) = self.promotion {
                    text.push('=');
                    text.push(promo.to_char().to_ascii_uppercase());
                }
                text
            }
        }
    }
}

/// True when a 5-character move string leads with an uppercase piece letter.
pub(crate) fn names_piece(chars: &[char]) -> bool {
    chars.len() == 5 && matches!(chars[0], 'P' | 'N' | 'B' | 'R' | 'Q' | 'K')
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        if self.castle.is_some() || other.castle.is_some() {
            return self.castle == other.castle;
        }
        self.piece == other.piece
            && self.from == other.from
            && self.to == other.to
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.castle {
            Some(side) => side.hash(state),
            None => {
                self.piece.hash(state);
                self.from.hash(state);
                self.to.hash(state);
                self.promotion.hash(state);
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
