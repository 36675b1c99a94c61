mod random;

pub use random::*;
