//! # toolpack_core - Everyday Calculator Engine
//!
//! `toolpack_core` is the calculation layer behind a collection of small
//! browser-style tools (tip splitting, age breakdown, dice, cards, random
//! picks, QR payloads, word counting). All inputs and outputs are
//! JSON-serializable, making the crate easy to drive from any front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total where possible**: unparseable or out-of-range values are
//!   corrected to documented fallbacks instead of failing; only logically
//!   invalid combinations return an error
//! - **Injectable randomness**: every random tool samples from a caller
//!   supplied `rand::Rng`, so results are reproducible under a seed
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use toolpack_core::formulas::tip::{calculate, TipInput};
//!
//! let result = calculate(&TipInput {
//!     bill_amount: 50.0,
//!     tip_percent: 20.0,
//!     people: 2,
//! });
//! assert_eq!(result.per_person, 30.0);
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Deterministic calculators (tip, age, words, QR)
//! - [`random`] - Randomized generators (dice, cards, numbers, picker)
//! - [`format`] - Tolerant parsing and display formatting
//! - [`catalog`] - Static tool/route/sitemap metadata
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod random;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Category, ToolId};
pub use errors::{ToolError, ToolResult};
