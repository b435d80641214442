//! # Tip Calculator
//!
//! Splits a bill plus tip across a group. Follows the silently-corrected
//! input policy: negative amounts are treated as 0 and the people count is
//! clamped to a minimum of 1, so the computation is total over its domain.
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::formulas::tip::{calculate, TipInput};
//!
//! let input = TipInput {
//!     bill_amount: 50.0,
//!     tip_percent: 20.0,
//!     people: 2,
//! };
//! let result = calculate(&input);
//! assert_eq!(result.total, 60.0);
//! assert_eq!(result.per_person, 30.0);
//! ```

use serde::{Deserialize, Serialize};

/// Input parameters for a tip split.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bill_amount": 50.0,
///   "tip_percent": 20.0,
///   "people": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipInput {
    /// Bill amount before tip
    pub bill_amount: f64,

    /// Tip as a percentage of the bill (e.g., 20.0 for 20%)
    pub tip_percent: f64,

    /// Number of people splitting the bill
    pub people: u32,
}

impl TipInput {
    /// Bill amount with negative values corrected to 0
    pub fn bill(&self) -> f64 {
        self.bill_amount.max(0.0)
    }

    /// Tip percentage with negative values corrected to 0
    pub fn tip(&self) -> f64 {
        self.tip_percent.max(0.0)
    }

    /// People count clamped to a minimum of 1 (it divides the total)
    pub fn party_size(&self) -> u32 {
        self.people.max(1)
    }
}

/// Results from a tip split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipResult {
    /// Tip amount: bill * tip / 100
    pub tip_amount: f64,

    /// Grand total: bill + tip amount
    pub total: f64,

    /// Each person's share of the total
    pub per_person: f64,

    /// Each person's share of the tip alone
    pub tip_per_person: f64,
}

/// Split the bill. Never fails; out-of-domain inputs are corrected first.
pub fn calculate(input: &TipInput) -> TipResult {
    let bill = input.bill();
    let people = f64::from(input.party_size());

    let tip_amount = bill * input.tip() / 100.0;
    let total = bill + tip_amount;

    TipResult {
        tip_amount,
        total,
        per_person: total / people,
        tip_per_person: tip_amount / people,
    }
}
