use std::fmt;

/// The score of a position, always from white's perspective.
///
/// Positive values favor white, negative values favor black, and zero is balanced.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Evaluation {
    value: i32,
    certain: bool,
}

impl Evaluation {
    /// An exact score, known from a final outcome of the game.
    #[inline]
    pub const fn certain(value: i32) -> Self {
        Evaluation {
            value,
            certain: true,
        }
    }

    /// A heuristic score, which depends on how deep the position was searched.
    #[inline]
    pub const fn estimate(value: i32) -> Self {
        Evaluation {
            value,
            certain: false,
        }
    }

    /// The score.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Whether the score is exact.
    #[inline]
    pub fn is_certain(&self) -> bool {
        self.certain
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.certain {
            f.write_str("#")?;
        }

        write!(f, "{:+}", self.value)
    }
}
