use crate::chess::{Color, Position};
use crate::eval::{Eval, Evaluation};
use crate::search::{Key, Options, Outcomes, Search};
use std::sync::Arc;

/// A fixed-depth implementation of [minimax].
///
/// Final outcomes are recorded in a shared [`Outcomes`] table,
/// so they are never searched twice.
///
/// [minimax]: https://www.chessprogramming.org/Minimax
#[derive(Debug)]
pub struct Minimax<E> {
    evaluator: E,
    mate: i32,
    outcomes: Arc<Outcomes>,
}

impl<E: Eval + Default> Default for Minimax<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

/// Whether `a` is strictly better than `b` for `side`.
#[inline]
fn prefers(side: Color, a: &Evaluation, b: &Evaluation) -> bool {
    match side {
        Color::White => a.value() > b.value(),
        Color::Black => a.value() < b.value(),
    }
}

impl<E: Eval> Minimax<E> {
    /// Constructs [`Minimax`] with the default [`Options`].
    pub fn new(evaluator: E) -> Self {
        Self::with_options(evaluator, Options::default())
    }

    /// Constructs [`Minimax`] with some [`Options`].
    pub fn with_options(evaluator: E, options: Options) -> Self {
        Self::with_outcomes(evaluator, options, Arc::default())
    }

    /// Constructs [`Minimax`] that shares a table of [`Outcomes`].
    pub fn with_outcomes(evaluator: E, options: Options, outcomes: Arc<Outcomes>) -> Self {
        Minimax {
            evaluator,
            mate: options.mate.into(),
            outcomes,
        }
    }

    /// The table of [`Outcomes`] recorded so far.
    pub fn outcomes(&self) -> &Arc<Outcomes> {
        &self.outcomes
    }

    /// Evaluates a [`Position`] by searching `depth` plies deep.
    ///
    /// White maximizes the score and black minimizes it.
    /// Among equally scored continuations, the first one in move order wins.
    pub fn evaluate(&self, pos: &Position, depth: u8) -> Evaluation {
        if pos.is_stalemate() {
            Evaluation::certain(0)
        } else if pos.is_checkmate() {
            Evaluation::certain(-pos.turn().sign() * self.mate)
        } else if depth == 0 {
            self.evaluator.eval(pos)
        } else {
            let side = pos.turn();
            pos.moves()
                .map(|(_, next)| self.evaluate_memoized(&next, depth - 1))
                .reduce(|best, e| if prefers(side, &e, &best) { e } else { best })
                .unwrap_or_else(|| self.evaluator.eval(pos))
        }
    }

    /// Evaluates a [`Position`] unless its outcome is already known.
    ///
    /// Certain evaluations are recorded regardless of depth.
    pub fn evaluate_memoized(&self, pos: &Position, depth: u8) -> Evaluation {
        let key = Key::from(pos);

        if let Some(e) = self.outcomes.get(&key) {
            return e;
        }

        let e = self.evaluate(pos, depth);
        self.outcomes.insert(key, e);
        e
    }
}

impl<E: Eval> Search for Minimax<E> {
    fn search(&self, pos: &Position, depth: u8) -> Evaluation {
        self.evaluate_memoized(pos, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{MockEval, Mobility};
    use mockall::predicate::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_strategy::proptest;

    const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    const BLACK_IS_MATED: &str = "7k/6Q1/6K1/8/8/8/8/8 b - - 0 1";
    const WHITE_IS_MATED: &str = "8/8/8/8/8/6k1/6q1/6K1 w - - 0 1";

    fn reference<E: Eval>(evaluator: &E, mate: i32, pos: &Position, depth: u8) -> Evaluation {
        if pos.is_stalemate() {
            Evaluation::certain(0)
        } else if pos.is_checkmate() {
            Evaluation::certain(-pos.turn().sign() * mate)
        } else if depth == 0 {
            evaluator.eval(pos)
        } else {
            let mut children: Vec<_> = pos
                .moves()
                .map(|(_, next)| reference(evaluator, mate, &next, depth - 1))
                .collect();

            match pos.turn() {
                Color::White => children.sort_by_key(|e| -e.value()),
                Color::Black => children.sort_by_key(|e| e.value()),
            }

            children[0]
        }
    }

    #[proptest]
    fn evaluate_returns_heuristic_if_depth_is_zero(
        #[filter(!#pos.is_checkmate() && !#pos.is_stalemate())] pos: Position,
        v: i32,
    ) {
        let mut evaluator = MockEval::new();
        evaluator
            .expect_eval()
            .once()
            .with(eq(pos.clone()))
            .return_const(Evaluation::estimate(v));

        let mm = Minimax::new(evaluator);
        assert_eq!(mm.evaluate(&pos, 0), Evaluation::estimate(v));
    }

    #[proptest]
    fn evaluate_at_depth_zero_is_the_mobility_difference(
        #[filter(!#pos.is_checkmate() && !#pos.is_stalemate())] pos: Position,
    ) {
        let mm = Minimax::new(Mobility::new());
        assert_eq!(mm.evaluate(&pos, 0), Mobility::new().eval(&pos));
    }

    #[proptest]
    fn stalemate_is_a_certain_draw(d: u8) {
        let pos: Position = STALEMATE.parse()?;
        let mm = Minimax::new(MockEval::new());
        assert_eq!(mm.evaluate(&pos, d), Evaluation::certain(0));
        assert_eq!(mm.evaluate_memoized(&pos, d), Evaluation::certain(0));
    }

    #[proptest]
    fn checkmate_certainly_favors_the_side_not_to_move(d: u8, o: Options) {
        let mm = Minimax::with_options(MockEval::new(), o);
        let mate = i32::from(o.mate);

        let pos: Position = BLACK_IS_MATED.parse()?;
        assert_eq!(mm.evaluate(&pos, d), Evaluation::certain(mate));

        let pos: Position = WHITE_IS_MATED.parse()?;
        assert_eq!(mm.evaluate(&pos, d), Evaluation::certain(-mate));
    }

    #[proptest]
    fn checkmate_scores_one_by_default(d: u8) {
        let mm = Minimax::new(MockEval::new());
        assert_eq!(mm.evaluate(&BLACK_IS_MATED.parse()?, d), Evaluation::certain(1));
        assert_eq!(mm.evaluate(&WHITE_IS_MATED.parse()?, d), Evaluation::certain(-1));
    }

    #[proptest]
    fn evaluate_finds_the_minimax_score(
        pos: Position,
        #[strategy(0u8..=2)] d: u8,
        #[strategy(1u16..=1000)] mate: u16,
    ) {
        let options = Options { depth: d, mate };
        let mm = Minimax::with_options(Mobility::new(), options);
        assert_eq!(
            mm.evaluate(&pos, d),
            reference(&Mobility::new(), mate.into(), &pos, d)
        );
    }

    #[proptest]
    fn evaluate_memoized_records_final_outcomes(d: u8) {
        let pos: Position = BLACK_IS_MATED.parse()?;
        let mm = Minimax::new(MockEval::new());
        assert!(mm.outcomes().is_empty());
        assert_eq!(mm.evaluate_memoized(&pos, d), Evaluation::certain(1));
        assert_eq!(mm.outcomes().get(&Key::from(&pos)), Some(Evaluation::certain(1)));
    }

    #[proptest]
    fn evaluate_memoized_does_not_search_known_outcomes() {
        // White mates with Rh8.
        let pos: Position = "k7/8/1K6/8/8/8/8/7R w - - 0 1".parse()?;

        let calls = Arc::new(AtomicUsize::new(0));
        let mut evaluator = MockEval::new();
        evaluator.expect_eval().returning({
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, Ordering::Relaxed);
                Evaluation::estimate(0)
            }
        });

        let mm = Minimax::new(evaluator);
        assert_eq!(mm.evaluate_memoized(&pos, 1), Evaluation::certain(1));
        assert_eq!(mm.outcomes().get(&Key::from(&pos)), Some(Evaluation::certain(1)));

        let searched = calls.load(Ordering::Relaxed);
        assert!(searched > 0);

        assert_eq!(mm.evaluate_memoized(&pos, 1), Evaluation::certain(1));
        assert_eq!(calls.load(Ordering::Relaxed), searched);
    }

    #[proptest]
    fn evaluate_memoized_does_not_record_estimates(
        #[filter(!#pos.is_checkmate() && !#pos.is_stalemate())] pos: Position,
        v: i32,
    ) {
        let mut evaluator = MockEval::new();
        evaluator
            .expect_eval()
            .times(2)
            .with(eq(pos.clone()))
            .return_const(Evaluation::estimate(v));

        let mm = Minimax::new(evaluator);
        assert_eq!(mm.evaluate_memoized(&pos, 0), Evaluation::estimate(v));
        assert_eq!(mm.evaluate_memoized(&pos, 0), Evaluation::estimate(v));
        assert!(mm.outcomes().is_empty());
    }

    #[proptest]
    fn evaluate_memoized_is_idempotent(pos: Position, #[strategy(0u8..=1)] d: u8) {
        let mm = Minimax::new(Mobility::new());
        assert_eq!(mm.evaluate_memoized(&pos, d), mm.evaluate_memoized(&pos, d));
    }

    #[proptest]
    fn forced_stalemate_line_is_a_certain_draw() {
        // Black is better off stalemating white than settling for any of the estimates.
        let pos: Position = "1q5k/8/8/8/8/8/8/K7 b - - 0 1".parse()?;

        let mut evaluator = MockEval::new();
        evaluator
            .expect_eval()
            .return_const(Evaluation::estimate(100));

        let mm = Minimax::new(evaluator);
        assert_eq!(mm.evaluate(&pos, 1), Evaluation::certain(0));

        let mut line = pos.clone();
        line.play("b8b3".parse()?)?;
        assert!(line.is_stalemate());

        for d in 0..=2 {
            assert_eq!(mm.evaluate(&line, d), Evaluation::certain(0));
        }
    }

    #[proptest]
    fn search_shares_the_memoized_evaluation(pos: Position, #[strategy(0u8..=1)] d: u8) {
        let mm = Minimax::new(Mobility::new());
        assert_eq!(mm.search(&pos, d), mm.evaluate_memoized(&pos, d));
    }

    #[proptest]
    fn outcomes_can_be_shared_across_searches(d: u8) {
        let pos: Position = WHITE_IS_MATED.parse()?;
        let outcomes = Arc::new(Outcomes::new());

        let a = Minimax::with_outcomes(Mobility::new(), Options::default(), outcomes.clone());
        a.evaluate_memoized(&pos, d);

        let b = Minimax::with_outcomes(MockEval::new(), Options::default(), outcomes.clone());
        assert_eq!(b.evaluate_memoized(&pos, d), Evaluation::certain(-1));
        assert_eq!(outcomes.len(), 1);
    }
}
