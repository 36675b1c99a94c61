use crate::chess::{Color, Move, Position};
use crate::search::{Abort, Interrupted, Options, Search};
use crate::{eval::Evaluation, util::Random};
use derive_more::{Display, Error, From};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// The reason why a [`Move`] could not be picked.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum PickError {
    #[display(fmt = "the position has no legal moves")]
    #[from(ignore)]
    NoLegalMoves,

    #[display(fmt = "{}", _0)]
    Interrupted(Interrupted),
}

/// Picks the best [`Move`] by searching every candidate a fixed number of plies deep.
///
/// Candidates that score exactly as well as the best one are picked uniformly at random.
#[derive(Debug)]
pub struct Picker<S> {
    search: S,
    depth: u8,
    rng: Random,
}

impl<S: Search + Sync + Default> Default for Picker<S> {
    fn default() -> Self {
        Self::new(S::default(), Options::default(), Random::default())
    }
}

impl<S: Search + Sync> Picker<S> {
    /// Constructs [`Picker`] with some [`Options`] and a source of randomness for breaking ties.
    pub fn new(search: S, options: Options, rng: Random) -> Self {
        Picker {
            search,
            depth: options.depth,
            rng,
        }
    }

    /// The underlying [`Search`].
    pub fn search(&self) -> &S {
        &self.search
    }

    /// How many plies deep every candidate is searched.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Picks the best [`Move`] for the side to move.
    pub fn pick(&self, pos: &Position) -> Result<Move, PickError> {
        self.pick_with(pos, &Abort::new())
    }

    /// Picks the best [`Move`] for the side to move, unless aborted.
    ///
    /// The [`Abort`] flag is checked before every candidate is searched.
    #[instrument(level = "debug", skip(self, pos, abort), ret(Display), err, fields(%pos, depth = self.depth))]
    pub fn pick_with(&self, pos: &Position, abort: &Abort) -> Result<Move, PickError> {
        let candidates: Vec<(Move, Position)> = pos.moves().collect();

        let scored: Vec<(Move, Evaluation)> = candidates
            .par_iter()
            .map(|(m, next)| {
                abort.check()?;
                Ok((*m, self.search.search(next, self.depth)))
            })
            .collect::<Result<_, Interrupted>>()?;

        let values = scored.iter().map(|(_, e)| e.value());
        let best = match pos.turn() {
            Color::White => values.max(),
            Color::Black => values.min(),
        };

        let best = best.ok_or(PickError::NoLegalMoves)?;

        let ties: Vec<Move> = scored
            .iter()
            .filter(|(_, e)| e.value() == best)
            .map(|(m, _)| *m)
            .collect();

        debug!(candidates = scored.len(), ties = ties.len(), best);

        Ok(ties[self.rng.sample(ties.len())])
    }
}
