//! # Randomized Generators
//!
//! Tools whose result is a sample from a declared random process. Each
//! module follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Sampled results (JSON-serializable)
//! - `sample(input, rng)` - Draws from an injected `rand::Rng`, so callers
//!   pass `thread_rng()` in production and a seeded `StdRng` in tests
//!
//! All shuffling goes through `SliceRandom::shuffle` (Fisher-Yates); none of
//! these modules sorts by a random comparator.
//!
//! ## Available Generators
//!
//! - [`dice`] - Polyhedral dice rolls
//! - [`cards`] - Deck shuffling and dealing (52 and Piquet 32)
//! - [`numbers`] - Uniform, lotto, and weighted number draws
//! - [`picker`] - List picking and round-robin grouping

pub mod cards;
pub mod dice;
pub mod numbers;
pub mod picker;

// Re-export commonly used types
pub use cards::{Card, DeckKind, ShuffleInput, ShuffleResult};
pub use dice::{DiceInput, DiceResult, DieKind};
pub use numbers::{NumberInput, NumberResult};
pub use picker::{PickerInput, PickerResult};
