//! # Random Picker
//!
//! Picks winners from a list or deals the list into groups. Both modes
//! shuffle fairly (Fisher-Yates via `SliceRandom::shuffle`) before taking a
//! prefix or dealing round-robin.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use toolpack_core::random::picker::{sample, PickerInput, PickerResult};
//!
//! let input = PickerInput::Pick {
//!     items: vec!["ann".into(), "bo".into(), "cy".into()],
//!     count: 2,
//! };
//! match sample(&input, &mut StdRng::seed_from_u64(8)).unwrap() {
//!     PickerResult::Picked { winners } => assert_eq!(winners.len(), 2),
//!     PickerResult::Divided { .. } => unreachable!(),
//! }
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Input parameters, one variant per mode.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "Divide",
///   "items": ["ann", "bo", "cy", "dee"],
///   "groups": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum PickerInput {
    /// Shuffle and take a prefix of `count` winners
    Pick {
        items: Vec<String>,
        /// Winners to pick; clamped to [1, items.len()]
        count: u32,
    },
    /// Shuffle and deal round-robin into `groups` groups
    Divide {
        items: Vec<String>,
        /// Group count; clamped to [1, items.len()]
        groups: u32,
    },
}

impl PickerInput {
    fn items(&self) -> &[String] {
        match self {
            PickerInput::Pick { items, .. } => items,
            PickerInput::Divide { items, .. } => items,
        }
    }
}

/// Results, matching the input mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum PickerResult {
    /// Winners in pick order
    Picked { winners: Vec<String> },
    /// Groups in deal order; sizes differ by at most 1
    Divided { groups: Vec<Vec<String>> },
}

/// Run the picker.
///
/// # Returns
///
/// * `Ok(PickerResult)` - Winners or groups
/// * `Err(ToolError::InvalidInput)` - If the item list is empty
pub fn sample<R: Rng + ?Sized>(input: &PickerInput, rng: &mut R) -> ToolResult<PickerResult> {
    if input.items().is_empty() {
        return Err(ToolError::invalid_input(
            "items",
            "[]",
            "At least one item is required",
        ));
    }

    let mut shuffled = input.items().to_vec();
    shuffled.shuffle(rng);

    match *input {
        PickerInput::Pick { count, .. } => {
            let count = count.clamp(1, shuffled.len() as u32);
            shuffled.truncate(count as usize);
            Ok(PickerResult::Picked { winners: shuffled })
        }
        PickerInput::Divide { groups, .. } => {
            let group_count = groups.clamp(1, shuffled.len() as u32) as usize;
            let mut dealt: Vec<Vec<String>> = vec![Vec::new(); group_count];
            for (i, item) in shuffled.into_iter().enumerate() {
                dealt[i % group_count].push(item);
            }
            Ok(PickerResult::Divided { groups: dealt })
        }
    }
}
