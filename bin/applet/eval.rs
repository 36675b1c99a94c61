use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use lib::eval::Mobility;
use lib::search::{Minimax, Options};
use tracing::{info, instrument};

/// Evaluates a position by searching a fixed number of plies deep.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Eval {
    /// How many plies deep to search.
    #[clap(short, long, default_value_t = Options::DEPTH)]
    depth: u8,

    /// The magnitude of the score of a checkmate.
    #[clap(short, long, default_value_t = Options::MATE)]
    mate: u16,

    /// The position to evaluate in FEN notation.
    #[clap(default_value_t)]
    pos: Position,
}

impl Eval {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let options = Options {
            depth: self.depth,
            mate: self.mate,
        };

        let minimax = Minimax::with_options(Mobility::new(), options);
        let value = minimax.evaluate_memoized(&self.pos, self.depth);

        info!(%value, outcomes = minimax.outcomes().len());
        println!("{value}");

        Ok(())
    }
}
