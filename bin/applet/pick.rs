use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use lib::eval::Mobility;
use lib::search::{Minimax, Options, Picker};
use lib::util::Random;
use tracing::{info, instrument};

/// Picks a move for the side to move.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Pick {
    /// The picker configuration.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// Seeds the tie-breaker for reproducible picks.
    #[clap(short, long)]
    seed: Option<u64>,

    /// The position to pick a move for in FEN notation.
    #[clap(default_value_t)]
    pos: Position,
}

impl Pick {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let rng = self.seed.map_or_else(Random::default, Random::seeded);
        let minimax = Minimax::with_options(Mobility::new(), self.options);
        let picker = Picker::new(minimax, self.options, rng);

        let m = picker.pick(&self.pos)?;

        let mut next = self.pos.clone();
        next.play(m)?;

        info!(
            %m,
            score = %picker.search().evaluate_memoized(&next, picker.depth()),
            outcomes = picker.search().outcomes().len(),
        );

        println!("{m}");

        Ok(())
    }
}
