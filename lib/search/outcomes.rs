use crate::{chess::Color, chess::Position, eval::Evaluation};
use dashmap::DashMap;
use derive_more::Display;

/// The key under which the [`Evaluation`] of a [`Position`] is recorded.
///
/// Besides the piece placement, the key also distinguishes the side to move,
/// since the same placement may be final for one side but not for the other.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{} {}", _0, _1)]
pub struct Key(String, Color);

impl From<&Position> for Key {
    #[inline]
    fn from(pos: &Position) -> Self {
        Key(pos.placement(), pos.turn())
    }
}

/// A concurrent record of the [`Evaluation`] of final positions.
///
/// Only [certain](`Evaluation::is_certain`) evaluations are ever recorded,
/// and entries are never evicted.
#[derive(Debug, Default)]
pub struct Outcomes {
    memory: DashMap<Key, Evaluation>,
}

impl Outcomes {
    /// Constructs an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of recorded outcomes.
    #[inline]
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// Whether nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Forgets every recorded outcome.
    pub fn clear(&self) {
        self.memory.clear()
    }

    /// Looks up the [`Evaluation`] recorded under a [`Key`].
    #[inline]
    pub fn get(&self, key: &Key) -> Option<Evaluation> {
        self.memory.get(key).map(|e| *e)
    }

    /// Records an [`Evaluation`] under a [`Key`].
    ///
    /// Returns whether the evaluation was recorded, which only happens if it is certain.
    /// Recording the same outcome more than once is harmless.
    #[inline]
    pub fn insert(&self, key: Key, eval: Evaluation) -> bool {
        if eval.is_certain() {
            self.memory.insert(key, eval);
            true
        } else {
            false
        }
    }
}
