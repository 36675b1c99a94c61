use crate::chess::Position;
use crate::eval::Evaluation;

mod control;
mod minimax;
mod options;
mod outcomes;
mod picker;

pub use control::*;
pub use minimax::*;
pub use options::*;
pub use outcomes::*;
pub use picker::*;

/// Trait for types that can evaluate a [`Position`] by looking ahead.
#[cfg_attr(test, mockall::automock)]
pub trait Search {
    /// Evaluates a [`Position`] by searching `depth` plies deep.
    fn search(&self, pos: &Position, depth: u8) -> Evaluation;
}
