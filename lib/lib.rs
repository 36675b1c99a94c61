/// Chess domain types.
pub mod chess;
/// Static position evaluation.
pub mod eval;
/// Minimax searching algorithm and move picking.
pub mod search;
/// Assorted utilities.
pub mod util;
