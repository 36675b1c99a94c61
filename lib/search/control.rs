use derive_more::{Display, Error};
use std::sync::atomic::{AtomicBool, Ordering};

/// Indicates the search was interrupted.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Error)]
#[display(fmt = "the search was interrupted")]
pub struct Interrupted;

/// A one-shot cancellation flag shared with a running search.
#[derive(Debug, Default)]
pub struct Abort(AtomicBool);

impl Abort {
    /// A flag that has not been raised.
    #[inline]
    pub const fn new() -> Self {
        Abort(AtomicBool::new(false))
    }

    /// Raise the flag.
    ///
    /// Returns `true` if the flag was raised for the first time.
    #[inline]
    pub fn abort(&self) -> bool {
        !self.0.fetch_or(true, Ordering::Relaxed)
    }

    /// Whether the search may carry on.
    #[inline]
    pub fn check(&self) -> Result<(), Interrupted> {
        if self.0.load(Ordering::Relaxed) {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}
