//! Sky Chase simulation core.
//!
//! A side-scrolling arcade game: the player flies through a star field,
//! catching drifting stars for points while dodging an alien. Three misses
//! (or alien hits) end the run. The core is driven entirely by
//! [`logic::tick_flight`] and the input mutators and never touches the
//! terminal, so it can be exercised headless with a seeded RNG.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
