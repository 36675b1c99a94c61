use crate::chess::{Color, Position};
use crate::eval::{Eval, Evaluation};
use derive_more::Constructor;

/// An evaluator that scores positions by the [mobility] of either side.
///
/// The score is the number of legal destinations of all white pieces,
/// minus the number of legal destinations of all black pieces.
/// Only the side to move has legal destinations, so the other side always counts zero.
///
/// [mobility]: https://www.chessprogramming.org/Mobility
#[derive(Debug, Default, Copy, Clone, Constructor)]
pub struct Mobility {}

impl Mobility {
    /// The number of legal destinations of all pieces of a [`Color`].
    fn count(pos: &Position, side: Color) -> i32 {
        pos.by_color(side)
            .map(|whence| pos.destinations(whence).count() as i32)
            .sum()
    }
}

impl Eval for Mobility {
    fn eval(&self, pos: &Position) -> Evaluation {
        let white = Self::count(pos, Color::White);
        let black = Self::count(pos, Color::Black);
        Evaluation::estimate(white - black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    #[proptest]
    fn score_is_stable(pos: Position) {
        assert_eq!(Mobility::new().eval(&pos), Mobility::new().eval(&pos.clone()));
    }

    #[proptest]
    fn score_is_never_certain(pos: Position) {
        assert!(!Mobility::new().eval(&pos).is_certain());
    }

    #[proptest]
    fn score_counts_the_distinct_moves_of_the_side_to_move(pos: Position) {
        let pairs: HashSet<_> = pos.moves().map(|(m, _)| (m.whence(), m.whither())).collect();
        let expected = pos.turn().sign() * pairs.len() as i32;
        assert_eq!(Mobility::new().eval(&pos), Evaluation::estimate(expected));
    }

    #[proptest]
    fn side_not_to_move_counts_zero(pos: Position) {
        assert_eq!(Mobility::count(&pos, !pos.turn()), 0);
    }

    #[proptest]
    fn initial_position_favors_white() {
        assert_eq!(
            Mobility::new().eval(&Position::default()),
            Evaluation::estimate(20)
        );
    }

    #[proptest]
    fn after_the_first_move_black_is_favored() {
        let pos: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".parse()?;
        assert_eq!(Mobility::new().eval(&pos), Evaluation::estimate(-20));
    }
}
