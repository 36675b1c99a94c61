use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod eval;
mod pick;

#[derive(From, Subcommand)]
pub enum Applet {
    Pick(pick::Pick),
    Eval(eval::Eval),
}

impl Default for Applet {
    fn default() -> Self {
        pick::Pick::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Pick(a) => Ok(a.execute()?),
            Applet::Eval(a) => Ok(a.execute()?),
        }
    }
}
