use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Configuration for the move picker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// How many plies deep every candidate move is searched.
    #[cfg_attr(test, strategy(0u8..=2))]
    pub depth: u8,

    /// The magnitude of the score of a checkmate.
    #[cfg_attr(test, strategy(1u16..))]
    pub mate: u16,
}

impl Options {
    /// The default search depth.
    pub const DEPTH: u8 = 2;

    /// The default checkmate magnitude.
    pub const MATE: u16 = 1;
}

impl Default for Options {
    fn default() -> Self {
        Options {
            depth: Self::DEPTH,
            mate: Self::MATE,
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
