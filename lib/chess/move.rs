use crate::chess::{Promotion, Square};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({})", self)]
#[display(fmt = "{}{}{}", _0, _1, _2)]
pub struct Move(pub Square, pub Square, pub Promotion);

impl Move {
    /// The source [`Square`].
    #[inline]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Promotion`] specifier.
    #[inline]
    pub fn promotion(&self) -> Promotion {
        self.2
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<sm::uci::Uci>() {
            Ok(sm::uci::Uci::Normal {
                from,
                to,
                promotion,
            }) => Ok(Move(
                from.into(),
                to.into(),
                promotion.try_into().map_err(|_| ParseMoveError)?,
            )),

            _ => Err(ParseMoveError),
        }
    }
}

#[doc(hidden)]
impl From<&sm::Move> for Move {
    #[inline]
    fn from(m: &sm::Move) -> Self {
        match m.to_uci(sm::CastlingMode::Standard) {
            sm::uci::Uci::Normal {
                from,
                to,
                promotion,
            } => match promotion.try_into() {
                Ok(promotion) => Move(from.into(), to.into(), promotion),
                Err(r) => panic!("unexpected promotion to {r:?}"),
            },

            v => panic!("unexpected {v:?}"),
        }
    }
}

#[doc(hidden)]
impl From<Move> for sm::uci::Uci {
    #[inline]
    fn from(m: Move) -> Self {
        sm::uci::Uci::Normal {
            from: m.whence().into(),
            to: m.whither().into(),
            promotion: m.promotion().into(),
        }
    }
}
