use crate::chess::{Color, Move, Piece, Square};
use derive_more::{DebugCustom, Display, Error, From};
use proptest::{prelude::*, sample::Selector};
use shakmaty as sm;
use std::str::FromStr;
use test_strategy::Arbitrary;

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{}` is illegal in this position", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// Represents an impossible [null-move] in a given [`Position`].
///
/// [null-move]: https://www.chessprogramming.org/Null_Move
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "passing the turn leads to illegal position")]
pub struct ImpossiblePass;

/// The current position on the chess board.
///
/// This type guarantees that it only holds valid positions.
#[derive(DebugCustom, Display, Default, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[debug(fmt = "Position(\"{}\")", self)]
#[display(fmt = "{}", "sm::fen::Fen::from_position(self.0.clone(), sm::EnPassantMode::Always)")]
pub struct Position(
    #[strategy((0..256, any::<Selector>()).prop_map(|(moves, selector)| {
        let mut chess = sm::Chess::default();
        for _ in 0..moves {
            match selector.try_select(sm::Position::legal_moves(&chess)) {
                Some(m) => sm::Position::play_unchecked(&mut chess, &m),
                _ => break,
            }
        }
        chess
    }))]
    sm::Chess,
);

impl Position {
    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        sm::Position::turn(&self.0).into()
    }

    /// The [`Piece`] on a [`Square`], if any.
    #[inline]
    pub fn piece_on(&self, s: Square) -> Option<Piece> {
        sm::Position::board(&self.0)
            .piece_at(s.into())
            .map(Piece::from)
    }

    /// [`Square`]s occupied by a [`Color`].
    #[inline]
    pub fn by_color(&self, c: Color) -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        sm::Position::board(&self.0)
            .by_color(c.into())
            .into_iter()
            .map(Square::from)
    }

    /// The canonical piece placement key.
    ///
    /// This is the board field of the FEN representation, it ignores the side to move,
    /// castling rights, en passant square, and move counters.
    #[inline]
    pub fn placement(&self) -> String {
        sm::Position::board(&self.0)
            .board_fen(sm::Bitboard::EMPTY)
            .to_string()
    }

    /// Whether this position is a [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    #[inline]
    pub fn is_check(&self) -> bool {
        sm::Position::is_check(&self.0)
    }

    /// Whether this position is a [checkmate].
    ///
    /// [checkmate]: https://www.chessprogramming.org/Checkmate
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        sm::Position::is_checkmate(&self.0)
    }

    /// Whether this position is a [stalemate].
    ///
    /// [stalemate]: https://www.chessprogramming.org/Stalemate
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        sm::Position::is_stalemate(&self.0)
    }

    /// The legal destinations of the piece on a [`Square`].
    ///
    /// Only pieces of the side to move have destinations,
    /// every promotion to the same square counts as a single destination.
    pub fn destinations(&self, whence: Square) -> impl Iterator<Item = Square> {
        let mut legals = sm::Position::legal_moves(&self.0);
        legals.retain(|vm| vm.from() == Some(whence.into()));

        let destinations: sm::Bitboard = legals
            .iter()
            .map(|vm| sm::Square::from(Move::from(vm).whither()))
            .collect();

        destinations.into_iter().map(Square::from)
    }

    /// An iterator over the legal [`Move`]s that can be played in this position.
    ///
    /// Each move is paired with the position it leads to.
    #[inline]
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = (Move, Self)> + ExactSizeIterator + '_ {
        sm::Position::legal_moves(&self.0)
            .into_iter()
            .map(move |vm| {
                let mut pos = self.clone();
                sm::Position::play_unchecked(&mut pos.0, &vm);
                (Move::from(&vm), pos)
            })
    }

    /// Play a [`Move`] if legal in this position.
    #[inline]
    pub fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        match sm::uci::Uci::from(m).to_move(&self.0) {
            Ok(vm) if sm::Position::is_legal(&self.0, &vm) => {
                sm::Position::play_unchecked(&mut self.0, &vm);
                Ok(())
            }

            _ => Err(IllegalMove(m)),
        }
    }

    /// Play a [null-move] if legal in this position.
    ///
    /// [null-move]: https://www.chessprogramming.org/Null_Move
    #[inline]
    pub fn pass(&mut self) -> Result<(), ImpossiblePass> {
        match sm::Position::swap_turn(self.0.clone()) {
            Err(_) => Err(ImpossiblePass),
            Ok(p) => {
                self.0 = p;
                Ok(())
            }
        }
    }
}

/// The reason why the position represented by the FEN string is illegal.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPosition {
    #[display(fmt = "at least one side has no king")]
    MissingKing,
    #[display(fmt = "at least one side has multiple kings")]
    TooManyKings,
    #[display(fmt = "there are pawns on the back-rank")]
    PawnsOnBackRank,
    #[display(fmt = "the player in check is not to move")]
    OppositeCheck,
    #[display(fmt = "invalid en passant square; wrong rank, occupied, or missing pushed pawn")]
    InvalidEnPassantSquare,
    #[display(fmt = "invalid castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "no sequence of legal moves can reach this position")]
    Other,
}

#[doc(hidden)]
impl From<sm::PositionError<sm::Chess>> for IllegalPosition {
    fn from(e: sm::PositionError<sm::Chess>) -> Self {
        let kinds = e.kinds();

        if kinds.contains(sm::PositionErrorKinds::MISSING_KING) {
            IllegalPosition::MissingKing
        } else if kinds.contains(sm::PositionErrorKinds::TOO_MANY_KINGS) {
            IllegalPosition::TooManyKings
        } else if kinds.contains(sm::PositionErrorKinds::PAWNS_ON_BACKRANK) {
            IllegalPosition::PawnsOnBackRank
        } else if kinds.contains(sm::PositionErrorKinds::OPPOSITE_CHECK) {
            IllegalPosition::OppositeCheck
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_EP_SQUARE) {
            IllegalPosition::InvalidEnPassantSquare
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_CASTLING_RIGHTS) {
            IllegalPosition::InvalidCastlingRights
        } else {
            IllegalPosition::Other
        }
    }
}

/// The reason why parsing [`Position`] from FEN failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse FEN")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "illegal position")]
    IllegalPosition(IllegalPosition),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fen: sm::fen::Fen = s.parse().map_err(|_| ParsePositionError::InvalidSyntax)?;
        let chess: sm::Chess = fen
            .into_position(sm::CastlingMode::Standard)
            .map_err(IllegalPosition::from)?;

        Ok(Position(chess))
    }
}

#[doc(hidden)]
impl From<sm::Chess> for Position {
    #[inline]
    fn from(chess: sm::Chess) -> Self {
        Position(chess)
    }
}
