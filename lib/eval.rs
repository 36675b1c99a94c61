use crate::chess::Position;

mod evaluation;
mod mobility;

pub use evaluation::*;
pub use mobility::*;

/// Trait for types that can statically evaluate a [`Position`].
#[cfg_attr(test, mockall::automock)]
pub trait Eval {
    /// Heuristically evaluates a [`Position`] that is not final.
    ///
    /// The returned [`Evaluation`] is never certain.
    fn eval(&self, pos: &Position) -> Evaluation;
}
