use crate::chess::Role;
use derive_more::Display;
use shakmaty as sm;

/// A promotion specifier.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display(fmt = "")]
    None,
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "q")]
    Queen,
}

impl From<Promotion> for Option<Role> {
    #[inline]
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::None => None,
            Promotion::Knight => Some(Role::Knight),
            Promotion::Bishop => Some(Role::Bishop),
            Promotion::Rook => Some(Role::Rook),
            Promotion::Queen => Some(Role::Queen),
        }
    }
}

#[doc(hidden)]
impl From<Promotion> for Option<sm::Role> {
    #[inline]
    fn from(p: Promotion) -> Self {
        Option::<Role>::from(p).map(sm::Role::from)
    }
}

#[doc(hidden)]
impl TryFrom<Option<sm::Role>> for Promotion {
    type Error = sm::Role;

    #[inline]
    fn try_from(r: Option<sm::Role>) -> Result<Self, Self::Error> {
        match r {
            None => Ok(Promotion::None),
            Some(sm::Role::Knight) => Ok(Promotion::Knight),
            Some(sm::Role::Bishop) => Ok(Promotion::Bishop),
            Some(sm::Role::Rook) => Ok(Promotion::Rook),
            Some(sm::Role::Queen) => Ok(Promotion::Queen),
            Some(r) => Err(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn promotion_has_an_equivalent_shakmaty_representation(p: Promotion) {
        assert_eq!(Promotion::try_from(Option::<sm::Role>::from(p)), Ok(p));
    }

    #[proptest]
    fn pawns_and_kings_are_not_promotions() {
        assert_eq!(
            Promotion::try_from(Some(sm::Role::Pawn)),
            Err(sm::Role::Pawn)
        );

        assert_eq!(
            Promotion::try_from(Some(sm::Role::King)),
            Err(sm::Role::King)
        );
    }
}
