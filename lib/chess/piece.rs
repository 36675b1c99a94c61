use crate::chess::{Color, Role};
use derive_more::Display;
use shakmaty as sm;

/// A [`Role`] played by one of the sides.
///
/// Prints as the letter of the piece in FEN, uppercase for white and lowercase for black.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "sm::Piece::from(*self).char()")]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// The side this piece belongs to.
    #[inline]
    pub fn color(&self) -> Color {
        self.0
    }

    /// What this piece is.
    #[inline]
    pub fn role(&self) -> Role {
        self.1
    }
}

#[doc(hidden)]
impl From<sm::Piece> for Piece {
    #[inline]
    fn from(p: sm::Piece) -> Self {
        Piece(p.color.into(), p.role.into())
    }
}

#[doc(hidden)]
impl From<Piece> for sm::Piece {
    #[inline]
    fn from(Piece(c, r): Piece) -> Self {
        sm::Role::from(r).of(c.into())
    }
}
