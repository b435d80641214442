//! # Deterministic Formulas
//!
//! Calculators whose output is a pure function of their input. Each module
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input)` - Pure calculation; returns a `ToolResult` only
//!   where a logically invalid combination must surface a notice
//!
//! Recomputing from the same input always yields an identical result. The
//! randomized generators live in [`crate::random`] instead.
//!
//! ## Available Formulas
//!
//! - [`tip`] - Bill splitting with tip percentage
//! - [`age`] - Calendar span decomposition between two dates
//! - [`words`] - Text statistics and reading-time estimates
//! - [`qr`] - QR image request URL construction

pub mod age;
pub mod qr;
pub mod tip;
pub mod words;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use qr::{QrInput, QrResult};
pub use tip::{TipInput, TipResult};
pub use words::{WordsInput, WordsResult};
